//! # Error Types
//!
//! Domain-specific error types for quoteforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quoteforge-core errors (this file)                                    │
//! │  └── CoreError        - Domain/validation failures                     │
//! │                                                                         │
//! │  quoteforge-store errors (separate crate)                              │
//! │  └── StoreError       - Slot I/O and unknown-id failures               │
//! │                                                                         │
//! │  Flow: CoreError → StoreError → host-facing message                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// The pricing formulas themselves have no error path: `DeliverableType` and
/// `ComplexityTier` are closed enumerations, so every lookup is exhaustive.
/// These variants cover the boundaries where open input (strings from a host
/// UI or a storage slot) enters the closed domain.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name one of the ten deliverable types.
    ///
    /// ## When This Occurs
    /// - Host passes a free-form string instead of a known variant
    /// - A storage slot was hand-edited with an unknown key
    #[error("Unknown deliverable type: '{0}'")]
    InvalidDeliverableType(String),

    /// A string did not name one of the three complexity tiers.
    #[error("Unknown complexity tier: '{0}'")]
    InvalidComplexityTier(String),

    /// Client input failed validation (empty name after trimming).
    #[error("Invalid client: {reason}")]
    InvalidClient { reason: String },
}

impl CoreError {
    /// Creates an InvalidClient error.
    pub fn invalid_client(reason: impl Into<String>) -> Self {
        CoreError::InvalidClient {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
