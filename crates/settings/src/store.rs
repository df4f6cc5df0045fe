//! Key-value persistence for the settings record
//!
//! Stores hold the record as a JSON string under [`STORAGE_KEY`], the same
//! shape a browser's local storage would keep.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{Settings, STORAGE_KEY};

/// Somewhere the settings record can be kept between sessions
pub trait SettingsStore {
    /// Read the stored record, `None` if nothing was ever saved
    fn load(&self) -> Result<Option<Settings>>;

    /// Replace the stored record
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// In-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Raw stored string for a key
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a raw string under a key
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>> {
        self.get_item(STORAGE_KEY)
            .map(|raw| {
                serde_json::from_str::<Settings>(raw)
                    .with_context(|| format!("parse stored settings under key {:?}", STORAGE_KEY))
            })
            .transpose()
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        let raw = serde_json::to_string(settings).context("serialize settings")?;
        self.set_item(STORAGE_KEY, raw);
        Ok(())
    }
}

/// Settings kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/connect4.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", STORAGE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read settings file {}", self.path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("parse settings file {}", self.path.display()))?;
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create settings directory {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(settings).context("serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write settings file {}", self.path.display()))?;
        log::debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_keeps_record_under_key() {
        let mut store = MemoryStore::default();
        let settings = Settings {
            grid_width: 8,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert!(store.get_item(STORAGE_KEY).unwrap().contains("\"gridWidth\":8"));
        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn memory_store_reports_corrupt_record() {
        let mut store = MemoryStore::default();
        store.set_item(STORAGE_KEY, "{not json");
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("parse stored settings"));
    }

    #[test]
    fn file_store_in_dir_path() {
        let store = JsonFileStore::in_dir("/tmp/prefs");
        assert_eq!(store.path(), Path::new("/tmp/prefs/connect4.json"));
    }
}
