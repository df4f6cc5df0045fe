//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game model, settings, whatever shell drives the game).
//!
//! # Grid Coordinates
//!
//! Cells are addressed as `(row, column)`:
//!
//! - **Row 0** is the top of the grid; the highest row index is the bottom
//! - Pieces fall toward increasing row index
//! - **Column 0** is the leftmost column
//!
//! # Grid Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_WIDTH` | 7 | Columns in a standard game |
//! | `DEFAULT_GRID_HEIGHT` | 6 | Rows in a standard game |
//! | `DEFAULT_CONNECT` | 4 | Run length needed to win |
//! | `MIN_GRID_DIMENSION` | 3 | Smallest allowed width or height |
//! | `MIN_CONNECT` | 2 | Smallest allowed run length |
//! | `MAX_GRID_CELLS` | 65536 | Largest allowed `width * height` |
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{Adjustment, Direction, Player, DEFAULT_CONNECT};
//!
//! let player = Player::Player1;
//! assert_eq!(player.other(), Player::Player2);
//! assert_eq!(Player::from_number(2), Some(Player::Player2));
//!
//! assert_eq!(Direction::ALL[0], Direction::Horizontal);
//! assert_eq!(Direction::DiagonalDownLeft.delta(), (1, -1));
//!
//! assert_eq!(Adjustment::from_str("connectMore"), Some(Adjustment::IncreaseConnect));
//! assert_eq!(DEFAULT_CONNECT, 4);
//! ```

/// Grid width in a standard game (7 columns)
pub const DEFAULT_GRID_WIDTH: usize = 7;

/// Grid height in a standard game (6 rows)
pub const DEFAULT_GRID_HEIGHT: usize = 6;

/// Run length needed to win a standard game
pub const DEFAULT_CONNECT: usize = 4;

/// Smallest allowed width or height
pub const MIN_GRID_DIMENSION: usize = 3;

/// Smallest allowed run length
pub const MIN_CONNECT: usize = 2;

/// Largest allowed cell count (`width * height`)
pub const MAX_GRID_CELLS: usize = 1 << 16;


/// The two players
///
/// Player 1 always moves first in a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Get the opponent
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Player;
    ///
    /// assert_eq!(Player::Player1.other(), Player::Player2);
    /// assert_eq!(Player::Player2.other(), Player::Player1);
    /// ```
    pub fn other(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Numeric identity used in snapshots (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }

    /// Parse from numeric identity
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Player;
    ///
    /// assert_eq!(Player::from_number(1), Some(Player::Player1));
    /// assert_eq!(Player::from_number(0), None);
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::Player1),
            2 => Some(Player::Player2),
            _ => None,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Player::Player1 => "Player 1",
            Player::Player2 => "Player 2",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell holding that player's piece
pub type Cell = Option<Player>;

/// Convert a cell to its snapshot byte (0 empty, 1/2 player)
pub fn cell_number(cell: Cell) -> u8 {
    cell.map_or(0, Player::number)
}

/// Scan directions for run detection
///
/// Deltas are `(row, column)`. Every direction points "forward" so a run is
/// fully described by its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    Horizontal,
    /// `(+1, 0)`
    Vertical,
    /// `(+1, +1)`
    DiagonalDownRight,
    /// `(+1, -1)`
    DiagonalDownLeft,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Step vector as `(d_row, d_col)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDownRight => "diagonalDownRight",
            Direction::DiagonalDownLeft => "diagonalDownLeft",
        }
    }
}

/// Where a dropped piece came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// A run of same-player pieces long enough to win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningRun {
    pub player: Player,
    /// First cell of the run as `(row, column)`
    pub start: (usize, usize),
    pub direction: Direction,
    pub length: usize,
}

impl WinningRun {
    /// Coordinates covered by the run, from `start` along `direction`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.direction.delta();
        let (row, col) = (self.start.0 as isize, self.start.1 as isize);
        (0..self.length as isize).map(move |i| ((row + dr * i) as usize, (col + dc * i) as usize))
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells().any(|cell| cell == (row, column))
    }
}

/// Game outcome
///
/// `Win` and `Tie` are terminal: no further drops are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Why a drop was ignored
///
/// None of these are failures; the game state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The game already ended in a win or tie
    GameOver,
    /// The column holds `height` pieces
    ColumnFull,
    /// The column index is past the right edge
    ColumnOutOfRange,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::GameOver => "gameOver",
            Rejection::ColumnFull => "columnFull",
            Rejection::ColumnOutOfRange => "columnOutOfRange",
        }
    }
}

/// Result of one drop attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropResult {
    /// Nothing changed
    Rejected(Rejection),
    /// Piece placed; the game continues with the other player
    Placed(Placement),
    /// Piece placed and completed a run for its player
    Won(Placement),
    /// Piece placed and filled the last empty cell without a win
    Tied(Placement),
}

impl DropResult {
    pub fn placement(&self) -> Option<Placement> {
        match *self {
            DropResult::Rejected(_) => None,
            DropResult::Placed(p) | DropResult::Won(p) | DropResult::Tied(p) => Some(p),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, DropResult::Rejected(_))
    }

    pub fn ends_game(&self) -> bool {
        matches!(self, DropResult::Won(_) | DropResult::Tied(_))
    }
}

/// Grid setting adjustments offered by the settings panel
///
/// Each adjustment changes one dimension by one step. Applying one resets the
/// game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjustment {
    IncreaseHeight,
    DecreaseHeight,
    IncreaseWidth,
    DecreaseWidth,
    IncreaseConnect,
    DecreaseConnect,
}

impl Adjustment {
    pub const ALL: [Adjustment; 6] = [
        Adjustment::IncreaseHeight,
        Adjustment::DecreaseHeight,
        Adjustment::IncreaseWidth,
        Adjustment::DecreaseWidth,
        Adjustment::IncreaseConnect,
        Adjustment::DecreaseConnect,
    ];

    /// Parse adjustment from its control name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Adjustment;
    ///
    /// assert_eq!(Adjustment::from_str("heightIncrease"), Some(Adjustment::IncreaseHeight));
    /// assert_eq!(Adjustment::from_str("WIDTHDECREASE"), Some(Adjustment::DecreaseWidth));
    /// assert_eq!(Adjustment::from_str("connectLess"), Some(Adjustment::DecreaseConnect));
    /// assert_eq!(Adjustment::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "heightincrease" => Some(Adjustment::IncreaseHeight),
            "heightdecrease" => Some(Adjustment::DecreaseHeight),
            "widthincrease" => Some(Adjustment::IncreaseWidth),
            "widthdecrease" => Some(Adjustment::DecreaseWidth),
            "connectmore" => Some(Adjustment::IncreaseConnect),
            "connectless" => Some(Adjustment::DecreaseConnect),
            _ => None,
        }
    }

    /// Convert to camelCase control name
    pub fn as_str(self) -> &'static str {
        match self {
            Adjustment::IncreaseHeight => "heightIncrease",
            Adjustment::DecreaseHeight => "heightDecrease",
            Adjustment::IncreaseWidth => "widthIncrease",
            Adjustment::DecreaseWidth => "widthDecrease",
            Adjustment::IncreaseConnect => "connectMore",
            Adjustment::DecreaseConnect => "connectLess",
        }
    }
}
