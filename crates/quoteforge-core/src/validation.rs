//! # Validation Module
//!
//! Input validation for values crossing from the host UI into the core.
//!
//! Deliberately small: deliverable types and complexity tiers are closed
//! enums (their parsing already rejects bad input), and the config percents
//! are expected in [0, 100] but not enforced, matching the reference
//! behavior. The one hard rule is the client name.

use crate::error::{CoreError, CoreResult};
use crate::MAX_CUSTOM_DISCOUNT_PERCENT;

/// Validates a client name for creation.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use quoteforge_core::validation::validate_client_name;
///
/// assert_eq!(validate_client_name("  Acme Corp ").unwrap(), "Acme Corp");
/// assert!(validate_client_name("   ").is_err());
/// ```
pub fn validate_client_name(name: &str) -> CoreResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(CoreError::invalid_client("name is required"));
    }

    Ok(name.to_string())
}

/// Clamps a manual discount to the UI convention of [0, 50] percent.
///
/// The pricing pipeline itself applies whatever percentage it is handed;
/// hosts that want the conventional range call this before storing the
/// value on the draft.
pub fn clamp_custom_discount_percent(percent: f64) -> f64 {
    percent.clamp(0.0, MAX_CUSTOM_DISCOUNT_PERCENT)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_client_name() {
        assert_eq!(validate_client_name("Acme").unwrap(), "Acme");
        assert_eq!(validate_client_name("  Acme Corp ").unwrap(), "Acme Corp");

        assert!(validate_client_name("").is_err());
        assert!(validate_client_name("   ").is_err());
    }

    #[test]
    fn test_clamp_custom_discount_percent() {
        assert_eq!(clamp_custom_discount_percent(-5.0), 0.0);
        assert_eq!(clamp_custom_discount_percent(25.0), 25.0);
        assert_eq!(clamp_custom_discount_percent(80.0), 50.0);
    }
}
