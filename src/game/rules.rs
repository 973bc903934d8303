//! Move legality.
//!
//! Every check here is read-only. A move that passes its check is applied
//! by the claim path in the parent module; a move that fails leaves the
//! game exactly as it was.

use derive_more::{Display, Error};

use crate::core::{Coord, PlayerId};

use super::Gamma;

/// Why a move or golden move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    #[display("player {player} is not in this game")]
    InvalidPlayer { player: u32 },

    #[display("({x}, {y}) is outside the board")]
    OutOfBounds { x: u32, y: u32 },

    #[display("{at} is already taken")]
    Occupied { at: Coord },

    #[display("{at} is free")]
    Unoccupied { at: Coord },

    #[display("{at} already belongs to the mover")]
    OwnTarget { at: Coord },

    /// The mover is at the area cap and the cell would start a new area.
    #[display("player {player} cannot open another area")]
    AreaLimit { player: PlayerId },

    #[display("player {player} has already used the golden move")]
    GoldenUsed { player: PlayerId },

    #[display("no other player owns a field")]
    NoGoldenTarget { player: PlayerId },

    /// The capture would split the victim past the area cap. Only raised
    /// after a tentative capture has been rolled back.
    #[display("capture would leave player {victim} with {areas} areas")]
    VictimAreaLimit { victim: PlayerId, areas: u32 },
}

/// A golden move that passed every pre-mutation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoldenTarget {
    pub actor: PlayerId,
    pub at: Coord,
    pub victim: PlayerId,
}

impl Gamma {
    /// Resolve a raw player number.
    pub fn player(&self, player: u32) -> Result<PlayerId, Rejection> {
        PlayerId::new(player)
            .filter(|id| id.get() <= self.config.players)
            .ok_or(Rejection::InvalidPlayer { player })
    }

    /// Resolve raw coordinates.
    pub fn locate(&self, x: u32, y: u32) -> Result<Coord, Rejection> {
        self.grid.coord(x, y).ok_or(Rejection::OutOfBounds { x, y })
    }

    /// Check an ordinary move without applying it.
    pub fn check_move(&self, player: u32, x: u32, y: u32) -> Result<(PlayerId, Coord), Rejection> {
        let player = self.player(player)?;
        let at = self.locate(x, y)?;

        if self.grid.owner(at).is_some() {
            return Err(Rejection::Occupied { at });
        }
        self.check_area_limit(player, at)?;

        Ok((player, at))
    }

    /// Check the golden-move preconditions without applying anything.
    ///
    /// Passing this check does not guarantee success: the capture can
    /// still split the victim past the area cap.
    pub fn check_golden_move(&self, player: u32, x: u32, y: u32) -> Result<(PlayerId, Coord), Rejection> {
        self.golden_target(player, x, y)
            .map(|target| (target.actor, target.at))
    }

    pub(crate) fn golden_target(&self, player: u32, x: u32, y: u32) -> Result<GoldenTarget, Rejection> {
        let actor = self.player(player)?;
        let at = self.locate(x, y)?;

        let victim = self.grid.owner(at).ok_or(Rejection::Unoccupied { at })?;
        if victim == actor {
            return Err(Rejection::OwnTarget { at });
        }

        let stats = self.stats.get(actor).copied().unwrap_or_default();
        if stats.golden_used {
            return Err(Rejection::GoldenUsed { player: actor });
        }
        if !self.stats.others_own_fields(actor) {
            return Err(Rejection::NoGoldenTarget { player: actor });
        }
        self.check_area_limit(actor, at)?;

        Ok(GoldenTarget { actor, at, victim })
    }

    /// A player at the cap may only extend an area it already owns.
    pub(crate) fn check_area_limit(&self, player: PlayerId, at: Coord) -> Result<(), Rejection> {
        let areas = self.stats.get(player).map_or(0, |s| s.areas);
        if areas >= self.config.max_areas && !self.grid.has_owned_neighbor(at, player) {
            return Err(Rejection::AreaLimit { player });
        }
        Ok(())
    }

    /// Every cell `player` could claim with an ordinary move.
    #[must_use]
    pub fn legal_moves(&self, player: u32) -> Vec<Coord> {
        self.grid
            .coords()
            .filter(|at| self.check_move(player, at.x, at.y).is_ok())
            .collect()
    }

    /// Every cell passing the golden-move preconditions for `player`.
    #[must_use]
    pub fn golden_targets(&self, player: u32) -> Vec<Coord> {
        self.grid
            .coords()
            .filter(|at| self.golden_target(player, at.x, at.y).is_ok())
            .collect()
    }
}
