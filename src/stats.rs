//! Per-player statistics.
//!
//! Tracks, for each player, the number of disjoint areas owned, the number
//! of cells owned and whether the golden move has been spent. The engine
//! keeps these in step with the board incrementally; [`Gamma::audit`]
//! recomputes them from scratch.
//!
//! [`Gamma::audit`]: crate::game::Gamma::audit

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Statistics for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Number of disjoint areas currently owned.
    pub areas: u32,
    /// Number of cells currently owned.
    pub fields: u64,
    /// Whether the golden move has been used.
    pub golden_used: bool,
}

/// Statistics for every player in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTracker {
    players: PlayerMap<PlayerStats>,
}

impl StatsTracker {
    /// All players start with nothing.
    #[must_use]
    pub fn new(player_count: u32) -> Self {
        Self {
            players: PlayerMap::with_default(player_count),
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerStats> {
        self.players.get(player)
    }

    /// Iterate over every player's statistics.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerStats)> {
        self.players.iter()
    }

    /// A new singleton area was claimed.
    pub fn record_claim(&mut self, player: PlayerId) {
        let stats = &mut self.players[player];
        stats.fields += 1;
        stats.areas += 1;
    }

    /// Two of `player`'s areas became one.
    pub fn record_merge(&mut self, player: PlayerId) {
        self.players[player].areas -= 1;
    }

    /// `player` lost a cell that split its area into `fragments` parts.
    ///
    /// `fragments == 0` means the cell was a whole area on its own.
    pub fn record_capture(&mut self, player: PlayerId, fragments: u32) {
        let stats = &mut self.players[player];
        stats.fields -= 1;
        stats.areas = stats.areas - 1 + fragments;
    }

    /// Spend `player`'s golden move. Never reverts.
    pub fn record_golden(&mut self, player: PlayerId) {
        self.players[player].golden_used = true;
    }

    /// Cells owned by anyone.
    #[must_use]
    pub fn total_fields(&self) -> u64 {
        self.players.values().map(|s| s.fields).sum()
    }

    /// Whether a player other than `player` owns at least one cell.
    #[must_use]
    pub fn others_own_fields(&self, player: PlayerId) -> bool {
        self.players
            .iter()
            .any(|(other, stats)| other != player && stats.fields > 0)
    }

    /// Highest player id that currently owns a cell.
    #[must_use]
    pub fn highest_owner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .filter(|(_, stats)| stats.fields > 0)
            .map(|(player, _)| player)
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    #[test]
    fn test_claim_and_merge() {
        let mut stats = StatsTracker::new(2);

        stats.record_claim(p(1));
        stats.record_claim(p(1));
        stats.record_merge(p(1));

        let first = stats.get(p(1)).unwrap();
        assert_eq!(first.fields, 2);
        assert_eq!(first.areas, 1);
        assert_eq!(stats.total_fields(), 2);
    }

    #[test]
    fn test_capture_fragments() {
        let mut stats = StatsTracker::new(1);
        for _ in 0..3 {
            stats.record_claim(p(1));
        }
        stats.record_merge(p(1));
        stats.record_merge(p(1));

        // Splitting the middle of a 3-cell line leaves two fragments.
        stats.record_capture(p(1), 2);
        assert_eq!(stats.get(p(1)).unwrap().areas, 2);
        assert_eq!(stats.get(p(1)).unwrap().fields, 2);

        // Taking an isolated cell removes its area.
        stats.record_capture(p(1), 0);
        assert_eq!(stats.get(p(1)).unwrap().areas, 1);
    }

    #[test]
    fn test_others_own_fields() {
        let mut stats = StatsTracker::new(3);
        assert!(!stats.others_own_fields(p(1)));

        stats.record_claim(p(1));
        assert!(!stats.others_own_fields(p(1)));
        assert!(stats.others_own_fields(p(2)));
    }

    #[test]
    fn test_highest_owner() {
        let mut stats = StatsTracker::new(3);
        assert_eq!(stats.highest_owner(), None);

        stats.record_claim(p(2));
        stats.record_claim(p(1));
        assert_eq!(stats.highest_owner(), Some(p(2)));
    }

    #[test]
    fn test_golden_flag() {
        let mut stats = StatsTracker::new(2);
        stats.record_golden(p(2));

        assert!(!stats.get(p(1)).unwrap().golden_used);
        assert!(stats.get(p(2)).unwrap().golden_used);
    }
}
