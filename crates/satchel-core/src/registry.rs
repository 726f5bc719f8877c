//! [`SettingsRegistry`] -- process-wide shared settings store.
//!
//! The registry maps string keys to string values. One instance per process
//! is shared through [`SettingsRegistry::global`]; it is created on first
//! access and lives until the process exits. Standalone registries can also
//! be constructed directly, e.g. as the target of a file reload.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::properties;

/// Comment line written at the top of saved settings files.
const FILE_HEADER: &str = "App configuration";

/// The single process-wide registry instance, created on first access.
static GLOBAL: OnceLock<SettingsRegistry> = OnceLock::new();

/// A string key/value settings store.
///
/// The mapping is guarded by an `RwLock`, so `set`/`get` are safe to call
/// from multiple threads. Keys are unique; insertion order is irrelevant.
#[derive(Debug, Default)]
pub struct SettingsRegistry {
    /// The lock-protected settings mapping.
    settings: RwLock<HashMap<String, String>>,
}

impl SettingsRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared process-wide registry, creating it on first call.
    ///
    /// Safe under concurrent first-time access: `OnceLock` checks for an
    /// existing instance, locks, and re-checks before constructing, so
    /// exactly one instance is ever built and every caller observes the
    /// same fully-constructed object.
    pub fn global() -> &'static SettingsRegistry {
        GLOBAL.get_or_init(SettingsRegistry::new)
    }

    /// Inserts or overwrites a setting.
    ///
    /// Keys and values are unconstrained; empty strings are permitted.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.write().insert(key.into(), value.into());
    }

    /// Returns the current value for `key`, or `None` if it is not set.
    pub fn get(&self, key: &str) -> Option<String> {
        self.settings.read().get(key).cloned()
    }

    /// Returns the number of settings currently stored.
    pub fn len(&self) -> usize {
        self.settings.read().len()
    }

    /// Returns `true` if no settings are stored.
    pub fn is_empty(&self) -> bool {
        self.settings.read().is_empty()
    }

    /// Returns a copy of all settings, sorted by key.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.settings
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Saves all settings to a properties file at `path`.
    ///
    /// The file starts with a `#` header comment followed by one
    /// `key=value` line per setting, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`](crate::RegistryError::Io) if the file
    /// cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let entries: Vec<(String, String)> = self.snapshot().into_iter().collect();
        debug!(?path, count = entries.len(), "saving settings");

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        properties::write_properties(&mut writer, FILE_HEADER, &entries)?;
        Ok(())
    }

    /// Loads settings from a properties file at `path` and merges them into
    /// this registry: keys present in the file overwrite existing values,
    /// all other settings are left untouched.
    ///
    /// Returns the number of entries merged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`](crate::RegistryError::Io) if the file
    /// is missing or cannot be read.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut count = 0;
        let mut settings = self.settings.write();
        for entry in properties::read_properties(reader) {
            let (key, value) = entry?;
            settings.insert(key, value);
            count += 1;
        }
        drop(settings);

        debug!(?path, count, "loaded settings");
        Ok(count)
    }
}
