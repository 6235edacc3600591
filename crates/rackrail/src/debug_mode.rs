//! Persistent debug-mode flag.
//!
//! The flag lives in a key/value store under
//! [`SystemConstants::debug_mode_key`](crate::config::SystemConstants) with the
//! value `"enabled"` or `"disabled"`. Anything else, including a missing key,
//! reads as disabled.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GridError, Result};

pub const ENABLED: &str = "enabled";
pub const DISABLED: &str = "disabled";

/// String key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let source = fs::read_to_string(&path)?;
            serde_json::from_str(&source).map_err(|err| {
                GridError::Storage(format!("{} is not a string map: {err}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Reads and writes the debug flag through a store.
#[derive(Debug)]
pub struct DebugMode<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DebugMode<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_enabled(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some(ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        let value = if enabled { ENABLED } else { DISABLED };
        log::debug!("Debug mode '{}' -> {value}", self.key);
        self.store.set(&self.key, value)
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&mut self) -> Result<bool> {
        let enabled = !self.is_enabled();
        self.set_enabled(enabled)?;
        Ok(enabled)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_disabled() {
        let debug = DebugMode::new(MemoryStore::new(), "rack-rail-debug-mode");
        assert!(!debug.is_enabled());
    }

    #[test]
    fn test_only_literal_enabled_counts() {
        let mut store = MemoryStore::new();
        store.set("k", "Enabled").unwrap();
        assert!(!DebugMode::new(store.clone(), "k").is_enabled());

        store.set("k", "true").unwrap();
        assert!(!DebugMode::new(store.clone(), "k").is_enabled());

        store.set("k", "enabled").unwrap();
        assert!(DebugMode::new(store, "k").is_enabled());
    }

    #[test]
    fn test_toggle_writes_both_states() {
        let mut debug = DebugMode::new(MemoryStore::new(), "k");
        assert!(debug.toggle().unwrap());
        assert_eq!(debug.store().get("k").as_deref(), Some("enabled"));
        assert!(!debug.toggle().unwrap());
        assert_eq!(debug.store().get("k").as_deref(), Some("disabled"));
    }
}
