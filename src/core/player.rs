//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based: the board reserves `0`
//! for free cells, so a `PlayerId` is never zero and `Option<PlayerId>`
//! is the same size as a `u32`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

/// Player identifier in `1..=player_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(NonZeroU32);

impl PlayerId {
    /// Create a player ID from its raw 1-based value.
    ///
    /// Returns `None` for `0`, which denotes a free cell.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Get the raw 1-based id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use gamma::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).map(PlayerId::get).collect();
    /// assert_eq!(players, vec![1, 2, 3]);
    /// ```
    pub fn all(player_count: u32) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).filter_map(PlayerId::new)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player. Entry `i` belongs to
/// the player with id `i + 1`.
///
/// ## Example
///
/// ```
/// use gamma::core::{PlayerId, PlayerMap};
///
/// let mut fields: PlayerMap<u64> = PlayerMap::with_default(2);
/// let second = PlayerId::new(2).unwrap();
///
/// fields[second] += 3;
/// assert_eq!(fields[second], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: u32, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: u32) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> u32 {
        self.data.len() as u32
    }

    /// Get a reference to a player's data, or `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.player_count()).zip(self.data.iter())
    }

    /// Iterate over all values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
