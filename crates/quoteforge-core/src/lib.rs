//! # quoteforge-core: Pure Business Logic for Quoteforge
//!
//! This crate is the **heart** of Quoteforge. It contains all pricing and
//! quote-building logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quoteforge Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      UI Host (external)                         │   │
//! │  │    Quote builder ──► Client list ──► Settings editor           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ quoteforge-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   draft   │  │  presets  │  │   │
//! │  │   │  Config   │  │ price_item│  │QuoteDraft │  │ good/     │  │   │
//! │  │   │  Quote    │  │ total     │  │ resync    │  │ better/   │  │   │
//! │  │   │  Client   │  │ rounding  │  │ finalize  │  │ best      │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                quoteforge-store (persistence)                   │   │
//! │  │        JSON storage slots, config store, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Config, Quote, Client, closed enumerations)
//! - [`pricing`] - Per-item pricing and the ordered modifier pipeline
//! - [`draft`] - The editable quote under construction
//! - [`presets`] - Good/better/best starter bundles
//! - [`validation`] - Host-input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Closed Enumerations**: Rate lookups are exhaustive; unknown keys are
//!    rejected at the parse boundary, never silently defaulted
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quoteforge_core::draft::QuoteDraft;
//! use quoteforge_core::types::{Config, DeliverableType};
//!
//! let config = Config::default();
//! let mut draft = QuoteDraft::new();
//! draft.add_item(DeliverableType::LandingPage, &config);
//! draft.add_item(DeliverableType::SeoSetup, &config);
//!
//! // Two items: the bundle discount has switched itself on
//! assert!(draft.modifiers.bundle_discount_applied);
//!
//! // 3100 × 0.9 = 2790, then 13% tax
//! let breakdown = draft.totals(&config);
//! assert_eq!(breakdown.before_tax, 2790.0);
//! assert_eq!(breakdown.total, 3152.7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod presets;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quoteforge_core::Config` instead of
// `use quoteforge_core::types::Config`

pub use draft::{ItemUpdate, QuoteDraft};
pub use error::{CoreError, CoreResult};
pub use presets::{PresetBundle, PresetTier};
pub use pricing::TotalBreakdown;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of items for a quote to qualify as a bundle.
///
/// ## Business Reason
/// Multi-deliverable engagements get the configured bundle discount;
/// a single line item never does.
pub const BUNDLE_MIN_ITEMS: usize = 2;

/// Upper bound of the manual discount slider, in percent.
///
/// ## Business Reason
/// Keeps ad-hoc discounting within a sane range in the UI. The pricing
/// pipeline does not enforce this; see `validation::clamp_custom_discount_percent`.
pub const MAX_CUSTOM_DISCOUNT_PERCENT: f64 = 50.0;
