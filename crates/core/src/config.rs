//! Grid configuration - fixed for the lifetime of one game

use thiserror::Error;

use crate::types::{
    DEFAULT_CONNECT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_CELLS, MIN_CONNECT,
    MIN_GRID_DIMENSION,
};

/// Invalid grid configuration, reported at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} is below the minimum of {}", MIN_GRID_DIMENSION)]
    WidthTooSmall(usize),

    #[error("grid height {0} is below the minimum of {}", MIN_GRID_DIMENSION)]
    HeightTooSmall(usize),

    #[error("connect length {0} is below the minimum of {}", MIN_CONNECT)]
    ConnectTooShort(usize),

    #[error("grid {width}x{height} exceeds the limit of {} cells", MAX_GRID_CELLS)]
    TooLarge { width: usize, height: usize },
}

/// Validated grid dimensions and run length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    width: usize,
    height: usize,
    connect: usize,
}

impl GridConfig {
    /// Validate and build a configuration
    ///
    /// A run length longer than both dimensions is accepted: the game can
    /// still be played, it just always ends in a tie. Grids with more than
    /// [`MAX_GRID_CELLS`] cells are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_core::{ConfigError, GridConfig};
    ///
    /// let config = GridConfig::new(7, 6, 4).unwrap();
    /// assert_eq!(config.width(), 7);
    /// assert!(config.is_winnable());
    ///
    /// assert_eq!(GridConfig::new(2, 6, 4), Err(ConfigError::WidthTooSmall(2)));
    /// assert!(!GridConfig::new(3, 3, 5).unwrap().is_winnable());
    /// ```
    pub fn new(width: usize, height: usize, connect: usize) -> Result<Self, ConfigError> {
        if width < MIN_GRID_DIMENSION {
            return Err(ConfigError::WidthTooSmall(width));
        }
        if height < MIN_GRID_DIMENSION {
            return Err(ConfigError::HeightTooSmall(height));
        }
        if connect < MIN_CONNECT {
            return Err(ConfigError::ConnectTooShort(connect));
        }
        if width
            .checked_mul(height)
            .map_or(true, |cells| cells > MAX_GRID_CELLS)
        {
            return Err(ConfigError::TooLarge { width, height });
        }

        let config = Self {
            width,
            height,
            connect,
        };
        if !config.is_winnable() {
            log::warn!(
                "connect length {} exceeds both grid dimensions {}x{}; no win is possible",
                connect,
                width,
                height
            );
        }
        Ok(config)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Total number of cells, at most [`MAX_GRID_CELLS`]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether a run of `connect` pieces fits anywhere on the grid
    pub fn is_winnable(&self) -> bool {
        self.connect <= self.width.max(self.height)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            connect: DEFAULT_CONNECT,
        }
    }
}
