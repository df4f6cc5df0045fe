//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Connect Four rules: the board, win detection, and
//! the per-game controller. It has **zero dependencies** on rendering, input
//! devices, or I/O, making it:
//!
//! - **Deterministic**: The same drops always produce the same game
//! - **Testable**: Unit tests next to every rule, property tests for the scans
//! - **Portable**: Any shell (terminal, browser, headless) can drive it
//!
//! # Module Structure
//!
//! - [`config`]: Validated grid dimensions and run length
//! - [`board`]: `width x height` grid with gravity landing
//! - [`win`]: Full-board and last-move run detection
//! - [`game_state`]: Turn, outcome, and move history for one game
//! - [`snapshot`]: Serializable view for display layers
//!
//! # Game Rules
//!
//! - Players alternate, Player 1 first
//! - A drop lands on the lowest empty row of its column
//! - `connect` same-player pieces in a row (horizontal, vertical, or either
//!   diagonal) win
//! - A full board without a win is a tie
//! - After a win or tie every drop is rejected until the game is reset
//!
//! # Example
//!
//! ```
//! use connect_four_core::{GameState, GridConfig};
//! use connect_four_types::{DropResult, Outcome, Player};
//!
//! let mut game = GameState::new(GridConfig::new(7, 6, 4).unwrap());
//!
//! // Player 1 builds a bottom row while Player 2 stacks on column 6.
//! for col in 0..3 {
//!     game.attempt_drop(col);
//!     game.attempt_drop(6);
//! }
//! assert!(matches!(game.attempt_drop(3), DropResult::Won(_)));
//! assert_eq!(game.outcome(), Outcome::Win(Player::Player1));
//! ```
//!
//! # Concurrency
//!
//! A [`GameState`] is a plain owned value. Hosts running several games share
//! each one behind its own lock; separate games need no coordination.

pub mod board;
pub mod config;
pub mod game_state;
pub mod snapshot;
pub mod win;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GridConfig};
pub use game_state::GameState;
pub use snapshot::GameSnapshot;
pub use win::{find_win, find_win_through, WinScan};
