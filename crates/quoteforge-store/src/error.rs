//! # Storage Error Types
//!
//! Error types for the persistence layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ├── during load: recovered (warn + fall back to defaults)        │
//! │       │                                                                 │
//! │       └── during mutation: in-memory change rolled back, error         │
//! │           returned for the host to log/present                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

use quoteforge_core::CoreError;

/// Persistence layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A quote was addressed to a client id that does not exist.
    ///
    /// ## When This Occurs
    /// - `add_quote` against a deleted or never-created client.
    ///   A quote cannot synthesize its own owner, so this is a hard
    ///   failure (unlike delete/update, which no-op on unknown ids).
    #[error("Client not found: {0}")]
    UnknownClient(String),

    /// A quote id was not found under the given client.
    ///
    /// ## When This Occurs
    /// Reserved for hosts that need a hard lookup; the repository's own
    /// `delete_quote` treats an unknown quote as a benign no-op.
    #[error("Quote {quote_id} not found for client {client_id}")]
    UnknownQuote {
        client_id: String,
        quote_id: String,
    },

    /// A storage slot could not be read or written.
    ///
    /// ## When This Occurs
    /// - Slot file unreadable (permissions, disk failure)
    /// - Parent directory cannot be created
    /// - Disk full during persist
    #[error("Storage unavailable at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A slot held bytes that do not parse as the expected record.
    #[error("Storage record corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// Domain validation failed (e.g. empty client name).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates an UnknownClient error.
    pub fn unknown_client(id: impl Into<String>) -> Self {
        StoreError::UnknownClient(id.into())
    }

    /// Creates a Storage error for a slot path.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Storage {
            path: path.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::unknown_client("abc-123");
        assert_eq!(err.to_string(), "Client not found: abc-123");

        let err = StoreError::UnknownQuote {
            client_id: "c1".to_string(),
            quote_id: "q9".to_string(),
        };
        assert_eq!(err.to_string(), "Quote q9 not found for client c1");
    }

    #[test]
    fn test_core_error_passes_through() {
        let core = CoreError::invalid_client("name is required");
        let err: StoreError = core.into();
        assert_eq!(err.to_string(), "Invalid client: name is required");
    }
}
