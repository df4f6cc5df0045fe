//! Board tests - gravity landing, occupancy, bounds

use connect_four::core::{Board, GridConfig};
use connect_four::types::Player;

#[test]
fn test_board_new_empty() {
    let board = Board::for_config(&GridConfig::default());
    assert_eq!(board.width(), 7);
    assert_eq!(board.height(), 6);

    for row in 0..6 {
        for col in 0..7 {
            assert!(board.is_empty_at(row, col), "Cell ({}, {}) should be empty", row, col);
            assert_eq!(board.get(row, col), Some(None));
        }
    }
    assert!(!board.is_full());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(7, 6);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(6, 0), None);
    assert_eq!(board.get(0, 7), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(7, 6);

    assert!(board.set(5, 3, Some(Player::Player1)));
    assert_eq!(board.get(5, 3), Some(Some(Player::Player1)));

    assert!(board.set(5, 3, None));
    assert_eq!(board.get(5, 3), Some(None));

    assert!(!board.set(-1, 0, Some(Player::Player2)));
    assert!(!board.set(0, 7, Some(Player::Player2)));
}

#[test]
fn test_landing_row_bottom_first_then_up() {
    let mut board = Board::new(7, 6);

    for expected in [5, 4, 3, 2, 1, 0] {
        assert_eq!(board.landing_row(2), Some(expected));
        assert!(board.place(expected, 2, Player::Player1));
    }
    assert_eq!(board.landing_row(2), None);
    assert!(board.is_column_full(2));

    // Other columns are unaffected.
    assert_eq!(board.landing_row(1), Some(5));
    assert_eq!(board.landing_row(3), Some(5));
}

#[test]
fn test_landing_row_out_of_range_column() {
    let board = Board::new(4, 4);
    assert_eq!(board.landing_row(4), None);
    assert_eq!(board.landing_row(usize::MAX), None);
}

#[test]
fn test_full_only_after_every_cell() {
    let mut board = Board::new(3, 3);
    let mut placed = 0;
    for col in 0..3 {
        while let Some(row) = board.landing_row(col) {
            assert!(!board.is_full());
            let player = if placed % 2 == 0 { Player::Player1 } else { Player::Player2 };
            assert!(board.place(row, col, player));
            placed += 1;
        }
    }
    assert_eq!(placed, 9);
    assert_eq!(board.piece_count(), 9);
    assert!(board.is_full());
}

#[test]
fn test_rows_iterate_top_to_bottom() {
    let mut board = Board::new(3, 3);
    board.place(2, 1, Player::Player2);
    let rows: Vec<_> = board.rows().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].iter().all(Option::is_none));
    assert_eq!(rows[2][1], Some(Player::Player2));
    assert_eq!(rows[2].iter().filter(|cell| cell.is_some()).count(), 1);
}
