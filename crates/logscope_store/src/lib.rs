//! Process-wide settings persistence for Logscope panels.
//!
//! A deliberately small key/value service: panels read boolean display
//! preferences under stable string keys, and several panels may share one
//! key. Reads go back to the underlying storage on every call so an edit
//! made by a companion panel takes effect on the very next read. Reads are
//! total: a missing key or a corrupted value degrades to the caller's
//! default instead of failing.
//!
//! The host application owns store initialization and teardown; panel cores
//! only hold a `&dyn SettingsStore`.

pub mod paths;

pub use paths::{default_settings_path, default_telemetry_path, ensure_logscope_home, logscope_home};

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

/// Errors from settings writes. Reads never fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to acquire settings lock")]
    LockError,
}

/// Key/value persistence of boolean display preferences.
pub trait SettingsStore: Send + Sync {
    /// Read one boolean. Absent keys and non-boolean stored values both
    /// fall back to `default`. Must re-read underlying storage each call.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Persist one boolean under `key`, last write wins.
    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError>;
}

/// Settings backed by a flat JSON object on disk.
///
/// The file holds one top-level object mapping keys to values. Every read
/// opens and parses the file again; the file is small enough that this stays
/// well under render-loop budgets and it keeps cross-process edits visible.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location: `~/.logscope/settings.json`.
    pub fn open_default() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %self.path.display(), "settings file unreadable: {}", err);
                return serde_json::Map::new();
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                debug!(path = %self.path.display(), "settings file is not a JSON object");
                serde_json::Map::new()
            }
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.read_map().get(key) {
            Some(serde_json::Value::Bool(value)) => *value,
            Some(_) => default,
            None => default,
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut map = self.read_map();
        map.insert(key.to_string(), serde_json::Value::Bool(value));
        let raw = serde_json::to_string_pretty(&serde_json::Value::Object(map))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory settings, for hosts without persistence and for tests. Values
/// stay untyped JSON so tests can plant corrupted entries.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant an arbitrary JSON value under `key`, bypassing the boolean
    /// contract. Lets tests exercise the corrupted-value fallback.
    pub fn set_raw(&self, key: &str, value: serde_json::Value) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value);
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        let Ok(values) = self.values.lock() else {
            return default;
        };
        match values.get(key) {
            Some(serde_json::Value::Bool(value)) => *value,
            Some(_) => default,
            None => default,
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::LockError)?;
        values.insert(key.to_string(), serde_json::Value::Bool(value));
        Ok(())
    }
}
