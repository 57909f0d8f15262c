//! # Storage Slots
//!
//! One JSON file per storage slot, read and written as a whole record.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Slot Storage Layout                                │
//! │                                                                         │
//! │  Host Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageConfig::new(data_dir) ← Configure slot paths + seed docs       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Storage::open(config) ← Load both slots (never a hard error)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────┐    ┌──────────────────────────┐          │
//! │  │  <data_dir>/config.json  │    │  <data_dir>/quotes.json  │          │
//! │  │  the Config record       │    │  { "clients": { … } }    │          │
//! │  └──────────────────────────┘    └──────────────────────────┘          │
//! │                                                                         │
//! │  Every mutation rewrites its slot in full: there is no transaction     │
//! │  log and no partial write. Last write wins.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ConfigStore;
use crate::error::{StoreError, StoreResult};
use crate::repository::QuoteRepository;

// =============================================================================
// Json Slot
// =============================================================================

/// A single JSON storage slot backed by one file.
///
/// Absence is not an error: a slot that has never been written reads as
/// `None`, and the owning store falls back to its seed document or embedded
/// defaults.
#[derive(Debug, Clone)]
pub struct JsonSlot {
    path: PathBuf,
}

impl JsonSlot {
    /// Creates a slot handle for `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSlot { path: path.into() }
    }

    /// The slot's backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole record.
    ///
    /// ## Returns
    /// * `Ok(Some(T))` - Slot exists and parsed
    /// * `Ok(None)` - Slot has never been written
    /// * `Err(Storage/Corrupted)` - Unreadable file or unparseable bytes
    pub fn read<T: DeserializeOwned>(&self) -> StoreResult<Option<T>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Slot not present yet");
                return Ok(None);
            }
            Err(err) => return Err(StoreError::storage(&self.path, err)),
        };

        let record = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    /// Writes the whole record, creating parent directories on first use.
    pub fn write<T: Serialize>(&self, record: &T) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::storage(parent, err))?;
        }

        let contents = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, contents).map_err(|err| StoreError::storage(&self.path, err))?;

        debug!(path = %self.path.display(), "Slot written");
        Ok(())
    }
}

// =============================================================================
// Storage Configuration
// =============================================================================

/// Storage configuration: where the two slots live and which bootstrap
/// documents (if any) seed them on first run.
///
/// ## Example
/// ```rust,ignore
/// let config = StorageConfig::new("./data-dir")
///     .config_seed("./data/config.json")
///     .quotes_seed("./data/quotes.json");
/// let storage = Storage::open(config);
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding both slot files.
    pub data_dir: PathBuf,

    /// Read-only document consulted when the config slot is empty.
    pub config_seed: Option<PathBuf>,

    /// Read-only document consulted when the quotes slot is empty.
    pub quotes_seed: Option<PathBuf>,
}

impl StorageConfig {
    /// Creates a configuration with no seed documents.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StorageConfig {
            data_dir: data_dir.into(),
            config_seed: None,
            quotes_seed: None,
        }
    }

    /// Sets the bootstrap document for the config slot.
    pub fn config_seed(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_seed = Some(path.into());
        self
    }

    /// Sets the bootstrap document for the quotes slot.
    pub fn quotes_seed(mut self, path: impl Into<PathBuf>) -> Self {
        self.quotes_seed = Some(path.into());
        self
    }

    /// Storage under the platform data directory
    /// (e.g. `~/.local/share/quoteforge` on Linux).
    ///
    /// Falls back to a relative `quoteforge-data` directory when the
    /// platform reports no data dir (some containers).
    pub fn platform_default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("quoteforge-data"));
        StorageConfig::new(base.join("quoteforge"))
    }

    fn config_slot_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    fn quotes_slot_path(&self) -> PathBuf {
        self.data_dir.join("quotes.json")
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Main storage handle owning both stores.
///
/// Opening performs the one-time load for each slot; by the time a
/// `Storage` exists, both stores are ready and mutations are accepted.
/// Load failures degrade to defaults (logged), never to a hard error.
#[derive(Debug)]
pub struct Storage {
    config: ConfigStore,
    quotes: QuoteRepository,
}

impl Storage {
    /// Opens both slots under the configured data directory.
    pub fn open(config: StorageConfig) -> Self {
        Storage {
            config: ConfigStore::open(config.config_slot_path(), config.config_seed.clone()),
            quotes: QuoteRepository::open(config.quotes_slot_path(), config.quotes_seed.clone()),
        }
    }

    /// Opens storage in the platform data directory.
    pub fn open_default() -> Self {
        Storage::open(StorageConfig::platform_default())
    }

    /// The configuration store.
    pub fn config(&mut self) -> &mut ConfigStore {
        &mut self.config
    }

    /// The client/quote repository.
    pub fn quotes(&mut self) -> &mut QuoteRepository {
        &mut self.quotes
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        count: u32,
    }

    #[test]
    fn test_read_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonSlot::new(dir.path().join("missing.json"));
        let record: Option<Probe> = slot.read().unwrap();
        assert!(record.is_none());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directories are created on first write
        let slot = JsonSlot::new(dir.path().join("nested/probe.json"));

        slot.write(&Probe { count: 7 }).unwrap();
        let record: Option<Probe> = slot.read().unwrap();
        assert_eq!(record, Some(Probe { count: 7 }));
    }

    #[test]
    fn test_corrupt_slot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.json");
        std::fs::write(&path, "{ not json").unwrap();

        let slot = JsonSlot::new(&path);
        let result: StoreResult<Option<Probe>> = slot.read();
        assert!(matches!(result, Err(StoreError::Corrupted(_))));
    }

    #[test]
    fn test_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonSlot::new(dir.path().join("probe.json"));

        slot.write(&Probe { count: 1 }).unwrap();
        slot.write(&Probe { count: 2 }).unwrap();

        let record: Option<Probe> = slot.read().unwrap();
        assert_eq!(record, Some(Probe { count: 2 }));
    }

    #[test]
    fn test_storage_opens_both_stores() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = Storage::open(StorageConfig::new(dir.path()));

        // Config store healed itself onto disk during open
        assert!(dir.path().join("config.json").exists());
        assert_eq!(storage.config().config().tax_percent, 13.0);

        let client = storage.quotes().add_client("Acme", "ops@acme.test").unwrap();
        assert!(storage.quotes().get_client(&client.id).is_some());
    }
}
