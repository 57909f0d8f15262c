//! # quoteforge-store: Persistence Layer for Quoteforge
//!
//! This crate provides local persistence for the Quoteforge system: two
//! independent JSON storage slots, one for the configuration record and one
//! for the client → quote-history tree.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quoteforge Data Flow                              │
//! │                                                                         │
//! │  Host call (save quote, edit settings, …)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 quoteforge-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐   │   │
//! │  │   │    Storage    │   │  ConfigStore  │   │QuoteRepository│   │   │
//! │  │   │   (slot.rs)   │   │  (config.rs)  │   │(repository.rs)│   │   │
//! │  │   │               │   │               │   │               │   │   │
//! │  │   │ JsonSlot      │◄──│ load chain    │   │ client CRUD   │   │   │
//! │  │   │ read/write    │   │ merge+heal    │   │ quote append  │   │   │
//! │  │   └───────────────┘   └───────────────┘   └───────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data_dir>/config.json          <data_dir>/quotes.json        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`slot`] - JSON slot files and the `Storage` handle
//! - [`config`] - Configuration store (load chain, merge, save, reset)
//! - [`repository`] - Client/quote repository
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quoteforge_store::{Storage, StorageConfig};
//!
//! // Open both slots under a data directory
//! let mut storage = Storage::open(StorageConfig::new("./data-dir"));
//!
//! // Configuration loads reconciled against the embedded defaults
//! let tax = storage.config().config().tax_percent;
//!
//! // Every mutation persists the full tree
//! let client = storage.quotes().add_client("Acme Corp", "ops@acme.test")?;
//! # Ok::<(), quoteforge_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;
pub mod slot;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ConfigStore;
pub use error::{StoreError, StoreResult};
pub use repository::QuoteRepository;
pub use slot::{JsonSlot, Storage, StorageConfig};
