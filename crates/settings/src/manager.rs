//! Settings manager - the settings panel's model
//!
//! Holds the current record and writes it back to its store after every
//! change. Grid changes hand back the new [`GridConfig`] so the caller can
//! start a fresh game on it.

use anyhow::{Context, Result};

use connect_four_core::GridConfig;
use connect_four_types::{Adjustment, Player};

use crate::color::Rgb;
use crate::store::SettingsStore;
use crate::Settings;

#[derive(Debug)]
pub struct SettingsManager<S: SettingsStore> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> SettingsManager<S> {
    /// Load the stored record, falling back to defaults when nothing is stored
    ///
    /// A stored record whose grid fails validation is an error.
    pub fn load(store: S) -> Result<Self> {
        let settings = store.load()?.unwrap_or_default();
        settings
            .grid_config()
            .context("stored grid settings are invalid")?;
        Ok(Self { store, settings })
    }

    /// Like [`load`](Self::load), but an unreadable or invalid record is
    /// replaced by defaults instead of failing
    pub fn load_or_default(store: S) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => match settings.grid_config() {
                Ok(_) => settings,
                Err(e) => {
                    log::warn!("stored settings rejected ({}), using defaults", e);
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("stored settings unreadable ({:#}), using defaults", e);
                Settings::default()
            }
        };
        Self { store, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Grid configuration for the current record
    pub fn grid_config(&self) -> Result<GridConfig> {
        self.settings
            .grid_config()
            .context("stored grid settings are invalid")
    }

    /// Apply an adjustment and persist it
    ///
    /// Returns the new configuration when the grid changed, `None` when the
    /// adjustment hit a floor and nothing changed. An adjustment that would
    /// produce an invalid grid is an error and leaves both the record and the
    /// store untouched.
    pub fn adjust(&mut self, adjustment: Adjustment) -> Result<Option<GridConfig>> {
        let mut next = self.settings.clone();
        if !next.apply(adjustment) {
            log::debug!("{} ignored: already at minimum", adjustment.as_str());
            return Ok(None);
        }
        let config = next
            .grid_config()
            .with_context(|| format!("{} rejected", adjustment.as_str()))?;

        let previous = std::mem::replace(&mut self.settings, next);
        if let Err(e) = self.persist() {
            self.settings = previous;
            return Err(e);
        }
        Ok(Some(config))
    }

    /// Set a player's colour from picker output (`#rrggbb`) and persist it
    pub fn set_color(&mut self, player: Player, hex: &str) -> Result<()> {
        let css = Rgb::from_hex(hex)
            .with_context(|| format!("colour for {}", player.name()))?
            .to_css(None);
        match player {
            Player::Player1 => self.settings.p1_color = css,
            Player::Player2 => self.settings.p2_color = css,
        }
        self.persist()
    }

    /// Write the current record to the store
    pub fn persist(&mut self) -> Result<()> {
        self.store
            .save(&self.settings)
            .context("persist settings")
    }
}
