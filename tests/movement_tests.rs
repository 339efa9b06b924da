mod common;

use common::{floor_cells, sample_levels};
use tilewalk::movement::step_focus;
use tilewalk::{resolve_move, try_move, Addressing, Direction, Level, MoveOutcome, Position, Terrain};

const ADDRESSINGS: [Addressing; 2] = [Addressing::Wrapped, Addressing::Bounded];

#[test]
fn test_accepted_round_trip_returns_home() {
    let mut checked = 0;
    for level in sample_levels() {
        for addressing in ADDRESSINGS {
            for start in floor_cells(&level) {
                for dir in Direction::ALL {
                    let there = resolve_move(&level, start, dir, addressing);
                    let MoveOutcome::Moved(mid) = there else {
                        continue;
                    };
                    let back = resolve_move(&level, mid, dir.opposite(), addressing);
                    if let MoveOutcome::Moved(end) = back {
                        assert_eq!(end, start, "{:?} then back from {} ({:?})", dir, start, addressing);
                        checked += 1;
                    }
                }
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_wall_rejection_is_idempotent() {
    for level in sample_levels() {
        for addressing in ADDRESSINGS {
            for start in floor_cells(&level) {
                for dir in Direction::ALL {
                    let (d_row, d_col) = dir.delta();
                    let target = level.grid().cell_at(start.row + d_row, start.col + d_col, addressing);
                    if target != Ok(Terrain::Wall) {
                        continue;
                    }
                    assert_eq!(try_move(&level, start, dir, addressing), start);
                    assert!(matches!(
                        resolve_move(&level, start, dir, addressing),
                        MoveOutcome::Blocked(_)
                    ));
                }
            }
        }
    }
}

#[test]
fn test_rejected_step_leaves_level_untouched() {
    let mut level = Level::parse(&["#.#", "#@#", "###"]).unwrap();
    let before = level.clone();
    for dir in [Direction::Down, Direction::Left, Direction::Right] {
        let outcome = step_focus(&mut level, dir, Addressing::Bounded);
        assert!(!outcome.is_accepted());
        assert_eq!(level, before);
    }
    assert_eq!(
        step_focus(&mut level, Direction::Up, Addressing::Bounded),
        MoveOutcome::Moved(Position::new(0, 1))
    );
    assert_eq!(level.focus(), Position::new(0, 1));
    assert_eq!(level.grid(), before.grid());
}

#[test]
fn test_bounded_right_then_blocked() {
    let level = Level::parse(&["..#", "@.."]).unwrap();
    let first = try_move(&level, Position::new(0, 0), Direction::Right, Addressing::Bounded);
    assert_eq!(first, Position::new(0, 1));
    let second = try_move(&level, first, Direction::Right, Addressing::Bounded);
    assert_eq!(second, Position::new(0, 1));
}

#[test]
fn test_wrapped_positions_stay_normalised() {
    for level in sample_levels() {
        let grid = level.grid().clone();
        for start in floor_cells(&level) {
            for dir in Direction::ALL {
                let end = try_move(&level, start, dir, Addressing::Wrapped);
                assert!(grid.contains(end), "{} escaped the grid", end);
            }
        }
    }
}

#[test]
fn test_degenerate_column_is_stationary() {
    // One column: left/right wrap onto the player's own cell
    let level = Level::parse(&["@", ".", "."]).unwrap();
    for dir in [Direction::Left, Direction::Right] {
        assert_eq!(
            resolve_move(&level, level.focus(), dir, Addressing::Wrapped),
            MoveOutcome::Stationary
        );
    }
    assert_eq!(
        try_move(&level, level.focus(), Direction::Up, Addressing::Wrapped),
        Position::new(2, 0)
    );
}
