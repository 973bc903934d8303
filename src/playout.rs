//! Seeded random self-play.
//!
//! Players take turns in id order. On each turn the player may try a
//! golden move with probability [`PlayoutConfig::golden_probability`];
//! otherwise it claims a uniformly random legal cell, or passes when it
//! has none. The game ends after a full round of passes.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::core::{GameConfig, GameRng, GammaError};
use crate::game::Gamma;

/// Playout parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Chance of trying a golden move on a turn where one is possible.
    pub golden_probability: f64,

    /// Hard stop, counted in turns across all players.
    pub max_turns: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            golden_probability: 0.05,
            max_turns: 10_000,
        }
    }
}

impl PlayoutConfig {
    #[must_use]
    pub fn with_golden_probability(mut self, probability: f64) -> Self {
        self.golden_probability = probability;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// What happened during one playout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    pub turns: u32,
    pub moves: u64,
    pub golden_moves: u32,
    /// Golden moves refused after the tentative capture.
    pub rejected_golden: u32,
    pub passes: u32,
}

/// Random game driver.
#[derive(Clone, Debug)]
pub struct Playout {
    config: PlayoutConfig,
    rng: GameRng,
}

impl Playout {
    #[must_use]
    pub fn new(config: PlayoutConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PlayoutConfig {
        &self.config
    }

    /// Play `game` to the end.
    #[instrument(level = "debug", skip_all, fields(seed = self.rng.seed()))]
    pub fn play(&mut self, game: &mut Gamma) -> PlayoutSummary {
        let players = game.player_count();
        let mut summary = PlayoutSummary::default();
        let mut idle = 0;
        let mut player = 1;

        while idle < players && summary.turns < self.config.max_turns {
            summary.turns += 1;

            if self.turn(game, player, &mut summary) {
                idle = 0;
            } else {
                summary.passes += 1;
                idle += 1;
            }

            player = player % players + 1;
        }

        debug_assert_eq!(game.audit(), Ok(()));
        debug!(?summary, "playout finished");
        summary
    }

    /// Play `games` independent games with the same board settings.
    pub fn play_series(&mut self, config: GameConfig, games: usize) -> Result<Vec<PlayoutSummary>, GammaError> {
        (0..games)
            .map(|_| {
                let mut game = Gamma::new(config)?;
                let mut playout = Playout {
                    config: self.config.clone(),
                    rng: self.rng.fork(),
                };
                Ok(playout.play(&mut game))
            })
            .collect()
    }

    /// One turn for `player`. Returns `false` for a pass.
    fn turn(&mut self, game: &mut Gamma, player: u32, summary: &mut PlayoutSummary) -> bool {
        if game.golden_possible(player) && self.rng.gen_bool(self.config.golden_probability) {
            let targets = game.golden_targets(player);
            if let Some(&at) = self.rng.choose(&targets) {
                match game.try_golden_move(player, at.x, at.y) {
                    Ok(()) => {
                        trace!(player, %at, "golden move");
                        summary.golden_moves += 1;
                        return true;
                    }
                    Err(reason) => {
                        trace!(player, %at, %reason, "golden move refused");
                        summary.rejected_golden += 1;
                    }
                }
            }
        }

        let moves = game.legal_moves(player);
        let Some(&at) = self.rng.choose(&moves) else {
            return false;
        };
        if game.make_move(player, at.x, at.y) {
            summary.moves += 1;
            true
        } else {
            false
        }
    }
}
