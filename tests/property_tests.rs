//! Property tests over random move sequences.
//!
//! Every operation is checked against a full recomputation of the
//! statistics, and every refused operation must leave the game exactly as
//! it was, including golden moves that are rolled back mid-flight.

use gamma::render::parse_board;
use gamma::{Gamma, GameConfig, PlayerStats};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Op {
    Move { player: u32, x: u32, y: u32 },
    Golden { player: u32, x: u32, y: u32 },
}

fn apply(game: &mut Gamma, op: Op) -> bool {
    match op {
        Op::Move { player, x, y } => game.make_move(player, x, y),
        Op::Golden { player, x, y } => game.golden_move(player, x, y),
    }
}

/// Owners and statistics: everything a caller can observe.
fn snapshot(game: &Gamma) -> (String, Vec<PlayerStats>) {
    let stats = (1..=game.player_count())
        .filter_map(|player| game.stats(player).copied())
        .collect();
    (game.render(), stats)
}

fn game_and_ops() -> impl Strategy<Value = (GameConfig, Vec<Op>)> {
    (1u32..=6, 1u32..=6, 1u32..=4, 1u32..=3).prop_flat_map(|(width, height, players, areas)| {
        // Slightly out of range on every axis so refusals get exercised.
        let op = (0u32..=players + 1, 0u32..=width, 0u32..=height, prop::bool::weighted(0.2)).prop_map(
            |(player, x, y, golden)| {
                if golden {
                    Op::Golden { player, x, y }
                } else {
                    Op::Move { player, x, y }
                }
            },
        );
        (
            Just(GameConfig::new(width, height, players, areas)),
            prop::collection::vec(op, 0..80),
        )
    })
}

proptest! {
    #[test]
    fn prop_statistics_match_board((config, ops) in game_and_ops()) {
        let mut game = Gamma::new(config).unwrap();

        for op in ops {
            apply(&mut game, op);
            prop_assert_eq!(game.audit(), Ok(()));
            for player in 1..=config.players {
                let stats = game.stats(player).unwrap();
                prop_assert!(stats.areas <= config.max_areas);
            }
        }
    }

    #[test]
    fn prop_refusals_change_nothing((config, ops) in game_and_ops()) {
        let mut game = Gamma::new(config).unwrap();

        for op in ops {
            let before = snapshot(&game);
            if !apply(&mut game, op) {
                prop_assert_eq!(snapshot(&game), before, "{:?} was refused but changed the game", op);
            }
        }
    }

    #[test]
    fn prop_golden_move_is_one_shot((config, ops) in game_and_ops()) {
        let mut game = Gamma::new(config).unwrap();
        let mut spent = vec![false; config.players as usize + 2];

        for op in ops {
            let succeeded = apply(&mut game, op);
            if let Op::Golden { player, .. } = op {
                if spent[player as usize] {
                    prop_assert!(!succeeded);
                }
                if succeeded {
                    spent[player as usize] = true;
                    prop_assert!(!game.golden_possible(player));
                }
            }
        }
    }

    #[test]
    fn prop_render_round_trips((config, ops) in game_and_ops()) {
        let mut game = Gamma::new(config).unwrap();
        for op in ops {
            apply(&mut game, op);
        }

        for text in [game.render(), game.render_max()] {
            let owners = parse_board(&text).unwrap();
            prop_assert_eq!(owners.len(), config.height as usize);
            for y in 0..config.height {
                for x in 0..config.width {
                    prop_assert_eq!(
                        owners[y as usize][x as usize],
                        game.owner(x, y).map(|p| p.get())
                    );
                }
            }
        }
    }

    /// Every golden move available from a reachable state either commits
    /// consistently or rolls back to the exact prior state.
    #[test]
    fn prop_every_golden_move_commits_or_restores((config, ops) in game_and_ops()) {
        let mut game = Gamma::new(config).unwrap();
        for op in ops {
            apply(&mut game, op);
        }

        let before = snapshot(&game);
        for player in 1..=config.players {
            for at in game.golden_targets(player) {
                let mut trial = game.clone();
                if trial.golden_move(player, at.x, at.y) {
                    prop_assert_eq!(trial.audit(), Ok(()));
                    prop_assert_eq!(trial.busy_fields(player), game.busy_fields(player) + 1);
                } else {
                    prop_assert_eq!(snapshot(&trial), before.clone());
                    prop_assert_eq!(trial.audit(), Ok(()));
                }
            }
        }
    }

    #[test]
    fn prop_legal_moves_agree_with_free_fields((config, ops) in game_and_ops()) {
        let mut game = Gamma::new(config).unwrap();
        for op in ops {
            apply(&mut game, op);
        }

        for player in 1..=config.players {
            prop_assert_eq!(game.legal_moves(player).len() as u64, game.free_fields(player));
        }
    }
}
