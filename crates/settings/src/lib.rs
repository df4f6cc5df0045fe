//! Persisted game settings
//!
//! The settings record is a flat structure holding the grid configuration and
//! the two player colours. It is stored as JSON under the key
//! [`STORAGE_KEY`] with camelCase field names:
//!
//! ```json
//! {"gridWidth":7,"gridHeight":6,"connectNum":4,"p1Color":"rgb(10,124,230)","p2Color":"rgb(149,35,35)"}
//! ```
//!
//! The game core never reads the colours; they are carried here for the
//! display layer.
//!
//! # Example
//!
//! ```
//! use connect_four_settings::{MemoryStore, SettingsManager};
//! use connect_four_types::Adjustment;
//!
//! let mut manager = SettingsManager::load(MemoryStore::default()).unwrap();
//! let config = manager.adjust(Adjustment::IncreaseConnect).unwrap().unwrap();
//! assert_eq!(config.connect(), 5);
//! assert_eq!(manager.settings().connect_num, 5);
//! ```

pub mod color;
pub mod manager;
pub mod store;

use serde::{Deserialize, Serialize};

use connect_four_core::{ConfigError, GridConfig};
use connect_four_types::{
    Adjustment, Player, DEFAULT_CONNECT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MIN_CONNECT,
    MIN_GRID_DIMENSION,
};

pub use color::{ColorError, Rgb};
pub use manager::SettingsManager;
pub use store::{JsonFileStore, MemoryStore, SettingsStore};

/// Storage key the settings record lives under
pub const STORAGE_KEY: &str = "connect4";

/// Default colour for Player 1
pub const DEFAULT_P1_COLOR: &str = "rgb(10,124,230)";

/// Default colour for Player 2
pub const DEFAULT_P2_COLOR: &str = "rgb(149,35,35)";

/// Flat settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub grid_width: usize,
    pub grid_height: usize,
    pub connect_num: usize,
    pub p1_color: String,
    pub p2_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            connect_num: DEFAULT_CONNECT,
            p1_color: DEFAULT_P1_COLOR.to_string(),
            p2_color: DEFAULT_P2_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Grid configuration for a new game
    pub fn grid_config(&self) -> Result<GridConfig, ConfigError> {
        GridConfig::new(self.grid_width, self.grid_height, self.connect_num)
    }

    /// Apply one adjustment step
    ///
    /// Width and height stop at 3, the run length stops at 2. Increases have
    /// no upper bound. Returns whether anything changed.
    pub fn apply(&mut self, adjustment: Adjustment) -> bool {
        fn step_down(value: &mut usize, floor: usize) -> bool {
            if *value > floor {
                *value -= 1;
                true
            } else {
                false
            }
        }

        match adjustment {
            Adjustment::IncreaseHeight => {
                self.grid_height += 1;
                true
            }
            Adjustment::DecreaseHeight => step_down(&mut self.grid_height, MIN_GRID_DIMENSION),
            Adjustment::IncreaseWidth => {
                self.grid_width += 1;
                true
            }
            Adjustment::DecreaseWidth => step_down(&mut self.grid_width, MIN_GRID_DIMENSION),
            Adjustment::IncreaseConnect => {
                self.connect_num += 1;
                true
            }
            Adjustment::DecreaseConnect => step_down(&mut self.connect_num, MIN_CONNECT),
        }
    }

    /// Colour for a player as stored
    pub fn color_of(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.p1_color,
            Player::Player2 => &self.p2_color,
        }
    }
}
