//! # Configuration Store
//!
//! Owns the configuration slot: loads it once, reconciles it against the
//! embedded default record, and persists every change.
//!
//! ## Load Chain (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Load Chain                             │
//! │                                                                         │
//! │  1. Persisted slot (config.json)                                       │
//! │       │ missing or unreadable                                          │
//! │       ▼                                                                 │
//! │  2. Bootstrap seed document (read-only, optional)                      │
//! │       │ missing or unreadable                                          │
//! │       ▼                                                                 │
//! │  3. Embedded default record (Config::default)                          │
//! │                                                                         │
//! │  Whatever loads is reconciled field-by-field against the defaults      │
//! │  (missing keys inherit, present keys win) and persisted IMMEDIATELY,   │
//! │  so the slot self-heals to the current field set on the first read     │
//! │  after an upgrade. Failures are logged, never surfaced as hard errors. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use tracing::{debug, info, warn};

use quoteforge_core::Config;

use crate::error::StoreResult;
use crate::slot::JsonSlot;

// =============================================================================
// Config Store
// =============================================================================

/// The configuration store.
///
/// Construction performs the one-time load, so a `ConfigStore` that exists
/// has finished loading; there is no window in which a mutation could
/// arrive early.
#[derive(Debug)]
pub struct ConfigStore {
    slot: JsonSlot,
    current: Config,
}

impl ConfigStore {
    /// Opens the store, running the load chain and persisting the
    /// reconciled record.
    ///
    /// Never fails: every broken rung of the chain degrades to the next
    /// with a logged warning, bottoming out at the embedded defaults.
    pub fn open(slot_path: impl Into<PathBuf>, seed_path: Option<PathBuf>) -> Self {
        let slot = JsonSlot::new(slot_path);
        let current = Self::load_initial(&slot, seed_path.as_ref());

        // Persist the reconciled record right away: a partial or absent
        // slot becomes a complete one on first read.
        if let Err(err) = slot.write(&current) {
            warn!(error = %err, "Could not persist reconciled configuration");
        }

        ConfigStore { slot, current }
    }

    /// Runs the load chain. Deserializing through `Config`'s serde
    /// defaults IS the merge: missing keys inherit the embedded default,
    /// keys present in the record keep their loaded value.
    fn load_initial(slot: &JsonSlot, seed_path: Option<&PathBuf>) -> Config {
        match slot.read::<Config>() {
            Ok(Some(config)) => {
                info!(path = %slot.path().display(), "Loaded configuration slot");
                return config;
            }
            Ok(None) => debug!("Configuration slot empty, trying seed document"),
            Err(err) => {
                warn!(error = %err, "Configuration slot unreadable, trying seed document");
            }
        }

        if let Some(seed) = seed_path {
            match JsonSlot::new(seed).read::<Config>() {
                Ok(Some(config)) => {
                    info!(path = %seed.display(), "Loaded configuration seed document");
                    return config;
                }
                Ok(None) => debug!(path = %seed.display(), "Seed document not present"),
                Err(err) => warn!(error = %err, "Seed document unreadable"),
            }
        }

        info!("Using embedded default configuration");
        Config::default()
    }

    /// The current configuration record.
    pub fn config(&self) -> &Config {
        &self.current
    }

    /// Replaces and persists the configuration.
    ///
    /// The slot is written before the in-memory record moves, so a failed
    /// write leaves the store on its previous value.
    pub fn save(&mut self, config: Config) -> StoreResult<()> {
        self.slot.write(&config)?;
        self.current = config;
        info!("Configuration saved");
        Ok(())
    }

    /// Restores and persists the embedded default record.
    pub fn reset(&mut self) -> StoreResult<&Config> {
        let defaults = Config::default();
        self.slot.write(&defaults)?;
        self.current = defaults;
        info!("Configuration reset to defaults");
        Ok(&self.current)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn slot_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("config.json")
    }

    #[test]
    fn test_open_empty_slot_uses_defaults_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::open(slot_path(&dir), None);

        assert_eq!(store.config(), &Config::default());

        // The slot self-healed onto disk
        let written = fs::read_to_string(slot_path(&dir)).unwrap();
        let on_disk: Config = serde_json::from_str(&written).unwrap();
        assert_eq!(&on_disk, store.config());
    }

    #[test]
    fn test_open_merges_partial_record_and_heals_slot() {
        let dir = tempfile::tempdir().unwrap();
        // A record from an older build: taxPercent was dropped, hourlyRate
        // was customized.
        fs::write(
            slot_path(&dir),
            r#"{ "hourlyRate": 210, "baseRates": { "copywriting": 650 } }"#,
        )
        .unwrap();

        let store = ConfigStore::open(slot_path(&dir), None);

        // Loaded values preserved, missing fields healed from defaults
        assert_eq!(store.config().hourly_rate, 210.0);
        assert_eq!(store.config().base_rates.copywriting, 650.0);
        assert_eq!(store.config().tax_percent, 13.0);
        assert_eq!(store.config().base_rates.landing_page, 2500.0);

        // And the healed record is what is now on disk
        let written = fs::read_to_string(slot_path(&dir)).unwrap();
        assert!(written.contains("taxPercent"));
        let on_disk: Config = serde_json::from_str(&written).unwrap();
        assert_eq!(on_disk.hourly_rate, 210.0);
        assert_eq!(on_disk.tax_percent, 13.0);
    }

    #[test]
    fn test_corrupt_slot_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(slot_path(&dir), "{ definitely not json").unwrap();

        let store = ConfigStore::open(slot_path(&dir), None);
        assert_eq!(store.config(), &Config::default());
    }

    #[test]
    fn test_seed_document_bootstraps_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{ "taxPercent": 20, "rushFeePercent": 30 }"#).unwrap();

        let store = ConfigStore::open(slot_path(&dir), Some(seed));
        assert_eq!(store.config().tax_percent, 20.0);
        assert_eq!(store.config().rush_fee_percent, 30.0);
        // Merge still fills the rest
        assert_eq!(store.config().bundle_discount_percent, 10.0);
    }

    #[test]
    fn test_seed_is_ignored_when_slot_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(slot_path(&dir), r#"{ "taxPercent": 5 }"#).unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{ "taxPercent": 20 }"#).unwrap();

        let store = ConfigStore::open(slot_path(&dir), Some(seed));
        assert_eq!(store.config().tax_percent, 5.0);
    }

    #[test]
    fn test_save_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = ConfigStore::open(slot_path(&dir), None);
        let mut config = store.config().clone();
        config.business.name = "Studio North".to_string();
        config.tax_percent = 15.0;
        store.save(config).unwrap();

        let reopened = ConfigStore::open(slot_path(&dir), None);
        assert_eq!(reopened.config().business.name, "Studio North");
        assert_eq!(reopened.config().tax_percent, 15.0);
    }

    #[test]
    fn test_reset_restores_defaults_and_persists() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = ConfigStore::open(slot_path(&dir), None);
        let mut config = store.config().clone();
        config.bundle_discount_percent = 50.0;
        store.save(config).unwrap();

        store.reset().unwrap();
        assert_eq!(store.config(), &Config::default());

        let reopened = ConfigStore::open(slot_path(&dir), None);
        assert_eq!(reopened.config(), &Config::default());
    }
}
