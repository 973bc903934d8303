//! End-to-end game scenarios through the public engine API.

use gamma::render::parse_board;
use gamma::{Gamma, PlayerId, Rejection};

fn p(id: u32) -> PlayerId {
    PlayerId::new(id).unwrap()
}

/// Diagonal cell at the cap is refused.
#[test]
fn test_scenario_a_diagonal_at_cap() {
    let mut game = Gamma::create(2, 2, 2, 1).unwrap();

    assert!(game.make_move(1, 0, 0));
    assert!(!game.make_move(1, 1, 1));
    assert_eq!(game.busy_fields(1), 1);
    assert_eq!(game.busy_fields(2), 0);
}

/// At the cap, free fields only count cells touching the player.
#[test]
fn test_scenario_b_free_fields_at_cap() {
    let mut game = Gamma::create(2, 2, 2, 1).unwrap();
    assert!(game.make_move(1, 0, 0));

    assert!(game.make_move(2, 1, 0));
    assert_eq!(game.free_fields(2), 1);
    assert_eq!(game.free_fields(1), 1);
}

/// Capturing a lone cell that bridges two of the mover's areas.
#[test]
fn test_scenario_c_golden_bridge() {
    let mut game = Gamma::create(3, 1, 2, 2).unwrap();

    assert!(game.make_move(1, 0, 0));
    assert!(game.make_move(1, 2, 0));
    assert_eq!(game.stats(1).unwrap().areas, 2);
    assert!(game.make_move(2, 1, 0));

    assert!(game.golden_move(1, 1, 0));

    assert_eq!(game.stats(1).unwrap().areas, 1);
    assert_eq!(game.busy_fields(1), 3);
    assert_eq!(game.busy_fields(2), 0);
    assert_eq!(game.stats(2).unwrap().areas, 0);
    assert!(!game.golden_possible(1));
    assert_eq!(game.render(), "111\n");
    assert!(game.audit().is_ok());
}

/// Cutting a bridge that would leave the victim over the cap is undone.
#[test]
fn test_scenario_d_rollback() {
    let mut game = Gamma::create(5, 3, 2, 1).unwrap();
    for x in 0..5 {
        assert!(game.make_move(1, x, 1));
    }
    assert!(game.make_move(2, 2, 0));

    let board = game.render();
    let before: Vec<_> = (1..=2).map(|player| *game.stats(player).unwrap()).collect();

    assert!(!game.golden_move(2, 2, 1));

    let after: Vec<_> = (1..=2).map(|player| *game.stats(player).unwrap()).collect();
    assert_eq!(game.render(), board);
    assert_eq!(after, before);
    assert!(game.golden_possible(2));
    assert!(game.audit().is_ok());

    // The same cut is fine once the cap allows two areas.
    let mut roomy = Gamma::create(5, 3, 2, 2).unwrap();
    for x in 0..5 {
        assert!(roomy.make_move(1, x, 1));
    }
    assert!(roomy.make_move(2, 2, 0));
    assert!(roomy.golden_move(2, 2, 1));
    assert_eq!(roomy.stats(1).unwrap().areas, 2);
}

#[test]
fn test_rejections_are_explained() {
    let mut game = Gamma::create(3, 3, 2, 1).unwrap();
    assert!(game.make_move(1, 1, 1));

    assert_eq!(game.try_move(3, 0, 0), Err(Rejection::InvalidPlayer { player: 3 }));
    assert_eq!(game.try_move(1, 0, 3), Err(Rejection::OutOfBounds { x: 0, y: 3 }));
    assert_eq!(game.try_move(1, 0, 0), Err(Rejection::AreaLimit { player: p(1) }));
    assert_eq!(
        game.try_golden_move(2, 0, 0),
        Err(Rejection::Unoccupied { at: gamma::Coord::new(0, 0) })
    );
    assert_eq!(
        game.try_golden_move(1, 2, 2),
        Err(Rejection::Unoccupied { at: gamma::Coord::new(2, 2) })
    );
}

#[test]
fn test_golden_requires_a_target_somewhere() {
    let mut game = Gamma::create(3, 3, 3, 2).unwrap();
    assert!(game.make_move(2, 0, 0));

    assert!(!game.golden_possible(2));
    assert!(game.golden_possible(1));
    assert!(game.golden_possible(3));
    assert_eq!(
        game.try_golden_move(2, 0, 0),
        Err(Rejection::OwnTarget { at: gamma::Coord::new(0, 0) })
    );
}

#[test]
fn test_many_players_render_and_parse() {
    let mut game = Gamma::create(4, 3, 12, 1).unwrap();
    assert!(game.make_move(3, 0, 0));
    assert!(game.make_move(12, 3, 2));
    assert!(game.make_move(10, 1, 1));

    assert_eq!(game.render(), "  .  .  . 12\n  . 10  .  .\n  3  .  .  .\n");
    assert_eq!(game.render_max(), "  .  .  . 12\n  . 10  .  .\n  3  .  .  .\n");

    let owners = parse_board(&game.render()).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(
                owners[y as usize][x as usize],
                game.owner(x, y).map(PlayerId::get)
            );
        }
    }
}

#[test]
fn test_render_max_before_any_move() {
    let game = Gamma::create(3, 2, 2, 1).unwrap();

    assert_eq!(game.render(), "...\n...\n");
    assert_eq!(game.render_max(), " . . .\n . . .\n");
}

#[test]
fn test_single_cell_board() {
    let mut game = Gamma::create(1, 1, 2, 1).unwrap();

    assert_eq!(game.free_fields(1), 1);
    assert!(game.make_move(2, 0, 0));
    assert_eq!(game.free_fields(1), 0);
    assert_eq!(game.free_fields(2), 0);
    assert!(game.golden_move(1, 0, 0));
    assert_eq!(game.owner(0, 0), Some(p(1)));
    assert_eq!(game.stats(2).unwrap().areas, 0);
}

#[test]
fn test_cell_count_is_64_bit() {
    let config = gamma::GameConfig::new(u32::MAX, u32::MAX, 2, 2);
    assert_eq!(config.total_cells(), u64::from(u32::MAX) * u64::from(u32::MAX));
}
