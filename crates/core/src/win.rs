//! Win detection - finds runs of `connect` same-player pieces
//!
//! Two strategies with identical results on every position reachable by play:
//!
//! - [`find_win`]: checks every cell as a potential run start in all four
//!   directions. `O(width * height * connect)`.
//! - [`find_win_through`]: only counts along the four axes through one cell,
//!   normally the piece just placed. `O(connect)`.
//!
//! The second is sound because a game ends on the first run: any run present
//! after a placement must pass through the placed piece.

use crate::board::Board;
use crate::types::{Direction, Player, WinningRun};

/// Which detector the game runs after each placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WinScan {
    /// Rescan the whole board
    FullBoard,
    /// Only lines through the last placed piece
    #[default]
    LastMove,
}

/// Check whether `connect` cells starting at (row, col) along `direction`
/// are all in bounds and all held by `player`
pub fn run_starts_at(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    connect: usize,
    player: Player,
) -> bool {
    let (dr, dc) = direction.delta();
    let (row, col) = (row as isize, col as isize);
    (0..connect as isize).all(|i| board.get(row + dr * i, col + dc * i) == Some(Some(player)))
}

/// Full-board scan for a run belonging to `player`
///
/// Cells are visited in row-major order, directions in [`Direction::ALL`]
/// order; the first match is returned with `length == connect`.
pub fn find_win(board: &Board, player: Player, connect: usize) -> Option<WinningRun> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for direction in Direction::ALL {
                if run_starts_at(board, row, col, direction, connect, player) {
                    return Some(WinningRun {
                        player,
                        start: (row, col),
                        direction,
                        length: connect,
                    });
                }
            }
        }
    }
    None
}

/// Count same-player cells stepping away from (row, col), excluding it
fn count_from(board: &Board, row: isize, col: isize, dr: isize, dc: isize, player: Player) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row + dr, col + dc);
    while board.get(r, c) == Some(Some(player)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check the four lines through (row, col) for a run of at least `connect`
///
/// The player is whoever occupies (row, col); an empty or out-of-bounds cell
/// never wins. The returned run is the maximal contiguous one on that line,
/// so `length` may exceed `connect`.
pub fn find_win_through(board: &Board, row: usize, col: usize, connect: usize) -> Option<WinningRun> {
    let (r, c) = (row as isize, col as isize);
    let player = board.get(r, c)??;

    for direction in Direction::ALL {
        let (dr, dc) = direction.delta();
        let back = count_from(board, r, c, -dr, -dc, player);
        let forward = count_from(board, r, c, dr, dc, player);
        let length = back + 1 + forward;
        if length >= connect {
            let back = back as isize;
            return Some(WinningRun {
                player,
                start: ((r - dr * back) as usize, (c - dc * back) as usize),
                direction,
                length,
            });
        }
    }
    None
}
