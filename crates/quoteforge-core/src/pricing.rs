//! # Pricing Module
//!
//! Pure pricing math: per-item prices, subtotals, and the ordered modifier
//! pipeline that turns a subtotal into a final total.
//!
//! ## Modifier Order Is Load-Bearing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Total Pipeline (fixed order)                        │
//! │                                                                         │
//! │  subtotal                                                               │
//! │     │                                                                   │
//! │     ▼  1. bundle discount      amount ×= (1 − bundle%/100)             │
//! │     ▼  2. custom discount      amount ×= (1 − custom%/100)             │
//! │     ▼  3. rush fee             amount ×= (1 + rush%/100)               │
//! │     ▼  4. round to cents       beforeTax                               │
//! │     ▼  5. tax                  taxAmount = round(beforeTax × tax%/100) │
//! │     ▼  6. round                total = round(beforeTax + taxAmount)    │
//! │                                                                         │
//! │  Each step runs on the RUNNING amount, not the original subtotal:      │
//! │  discounts compound multiplicatively, and the rush fee inflates the    │
//! │  already-discounted amount. Reordering changes the displayed figures.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64 And Not Integer Cents?
//! Complexity multipliers are fractional (1.5×) and the pipeline rounds
//! exactly once, at the cent boundary, after all modifiers have compounded.
//! Amounts like 612.5625 must survive unrounded until step 4 to reproduce
//! the reference figures, so amounts stay `f64` and rounding is explicit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::types::{ComplexityTier, Config, DeliverableType, QuoteItem, QuoteModifiers};

// =============================================================================
// Currency Rounding
// =============================================================================

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// Multiply-round-divide by 100 is the standard currency rounding used for
/// every persisted or displayed amount.
///
/// ## Example
/// ```rust
/// use quoteforge_core::pricing::round_to_cents;
///
/// assert_eq!(round_to_cents(0.125), 0.13);
/// assert_eq!(round_to_cents(2.674999), 2.67);
/// assert_eq!(round_to_cents(900.0), 900.0);
/// ```
///
/// Note the usual binary-float caveat: a literal like `1.005` is stored as
/// 1.00499…, so it rounds to 1.00. That is part of the contract for these
/// amounts, not a bug to fix.
#[inline]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// =============================================================================
// Per-Item Pricing
// =============================================================================

/// The two derived prices cached on a `QuoteItem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPricing {
    /// Snapshot of the configured base rate for the deliverable.
    pub base_price: f64,
    /// base_price × complexity multiplier + extra revisions × revision rate.
    pub calculated_price: f64,
}

/// Prices one deliverable line.
///
/// Pure: same inputs always produce the same outputs. There is no error
/// path — both lookups are exhaustive over closed enumerations.
///
/// ## Example
/// ```rust
/// use quoteforge_core::pricing::price_item;
/// use quoteforge_core::types::{ComplexityTier, Config, DeliverableType};
///
/// let config = Config::default();
/// let pricing = price_item(
///     DeliverableType::LandingPage,
///     ComplexityTier::Medium,
///     2,
///     &config,
/// );
/// // 2500 × 1.5 + 2 × 100
/// assert_eq!(pricing.base_price, 2500.0);
/// assert_eq!(pricing.calculated_price, 3950.0);
/// ```
pub fn price_item(
    deliverable: DeliverableType,
    complexity: ComplexityTier,
    extra_revisions: u32,
    config: &Config,
) -> ItemPricing {
    let base_price = config.base_rates.rate(deliverable);
    let multiplier = config.complexity_multipliers.multiplier(complexity);
    let revision_cost = f64::from(extra_revisions) * config.extra_revision_rate;

    ItemPricing {
        base_price,
        calculated_price: base_price * multiplier + revision_cost,
    }
}

impl QuoteItem {
    /// Creates a freshly priced item with a new id.
    pub fn priced(
        deliverable: DeliverableType,
        complexity: ComplexityTier,
        extra_revisions: u32,
        config: &Config,
    ) -> QuoteItem {
        let pricing = price_item(deliverable, complexity, extra_revisions, config);
        QuoteItem {
            id: Uuid::new_v4().to_string(),
            deliverable,
            complexity,
            extra_revisions,
            base_price: pricing.base_price,
            calculated_price: pricing.calculated_price,
        }
    }

    /// Recomputes the cached `base_price`/`calculated_price` projections.
    ///
    /// Must run after any change to the deliverable, complexity, revision
    /// count, or governing config. The cached values are never authoritative
    /// for an editable item — only a saved `Quote` keeps them frozen.
    pub fn reprice(&mut self, config: &Config) {
        let pricing = price_item(self.deliverable, self.complexity, self.extra_revisions, config);
        self.base_price = pricing.base_price;
        self.calculated_price = pricing.calculated_price;
    }
}

// =============================================================================
// Subtotal & Bundle Eligibility
// =============================================================================

/// Sums `calculated_price` over all items. Empty list sums to 0.
pub fn subtotal(items: &[QuoteItem]) -> f64 {
    items.iter().map(|item| item.calculated_price).sum()
}

/// True iff the quote qualifies for the bundle discount (2+ items).
///
/// A pure function of the current item list: callers must re-evaluate it
/// (and resynchronize `modifiers.bundle_discount_applied`) every time the
/// item list changes, not once at creation.
#[inline]
pub fn bundle_eligible(items: &[QuoteItem]) -> bool {
    items.len() >= crate::BUNDLE_MIN_ITEMS
}

// =============================================================================
// Total Pipeline
// =============================================================================

/// The result of the modifier pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalBreakdown {
    /// Running amount after discounts and rush fee, rounded to cents.
    pub before_tax: f64,
    /// Tax on `before_tax`, or 0 when tax is excluded.
    pub tax_amount: f64,
    /// before_tax + tax_amount, rounded to cents.
    pub total: f64,
}

/// Applies the quote modifiers to a subtotal, in the fixed order:
/// bundle discount → custom discount → rush fee → round → tax.
///
/// ## Example
/// ```rust
/// use quoteforge_core::pricing::total;
/// use quoteforge_core::types::{Config, QuoteModifiers};
///
/// let config = Config::default(); // bundle 10%, rush 25%, tax 13%
/// let modifiers = QuoteModifiers {
///     rush_fee: true,
///     custom_discount_percent: 20.0,
///     bundle_discount_applied: true,
///     include_tax: true,
/// };
///
/// let breakdown = total(1000.0, &modifiers, &config);
/// // 1000 × 0.9 × 0.8 × 1.25 = 900
/// assert_eq!(breakdown.before_tax, 900.0);
/// assert_eq!(breakdown.tax_amount, 117.0);
/// assert_eq!(breakdown.total, 1017.0);
/// ```
pub fn total(subtotal: f64, modifiers: &QuoteModifiers, config: &Config) -> TotalBreakdown {
    let mut before_tax = subtotal;

    // 1. Bundle discount
    if modifiers.bundle_discount_applied {
        before_tax *= 1.0 - config.bundle_discount_percent / 100.0;
    }

    // 2. Custom discount, on the post-bundle amount
    if modifiers.custom_discount_percent > 0.0 {
        before_tax *= 1.0 - modifiers.custom_discount_percent / 100.0;
    }

    // 3. Rush fee, inflating the discounted amount
    if modifiers.rush_fee {
        before_tax *= 1.0 + config.rush_fee_percent / 100.0;
    }

    // 4. Single rounding at the cent boundary
    let before_tax = round_to_cents(before_tax);

    // 5-6. Tax on the rounded amount, then the rounded grand total
    let tax_amount = if modifiers.include_tax {
        round_to_cents(before_tax * config.tax_percent / 100.0)
    } else {
        0.0
    };

    TotalBreakdown {
        before_tax,
        tax_amount,
        total: round_to_cents(before_tax + tax_amount),
    }
}

// =============================================================================
// Derived Display Amounts
// =============================================================================

/// Bundle discount shown on a summary line: taken straight off the subtotal.
pub fn bundle_discount_amount(subtotal: f64, config: &Config) -> f64 {
    subtotal * config.bundle_discount_percent / 100.0
}

/// Custom discount shown on a summary line: applied to the post-bundle
/// amount, matching its position in the pipeline.
pub fn custom_discount_amount(subtotal: f64, modifiers: &QuoteModifiers, config: &Config) -> f64 {
    let after_bundle = if modifiers.bundle_discount_applied {
        subtotal * (1.0 - config.bundle_discount_percent / 100.0)
    } else {
        subtotal
    };
    after_bundle * modifiers.custom_discount_percent / 100.0
}

/// Rush fee shown on a summary line, reconstructed from the final
/// before-tax amount.
///
/// The pre-rush amount is never stored; it is recovered by reversing
/// pipeline step 3:
///
/// `rush = beforeTax − beforeTax / (1 + rush%/100)`
pub fn rush_fee_amount(before_tax: f64, config: &Config) -> f64 {
    before_tax - before_tax / (1.0 + config.rush_fee_percent / 100.0)
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Formats an amount as a US-dollar string for summaries: thousands
/// separators, at most 2 fraction digits, trailing zeros dropped.
///
/// ## Example
/// ```rust
/// use quoteforge_core::pricing::format_currency;
///
/// assert_eq!(format_currency(2500.0), "$2,500");
/// assert_eq!(format_currency(1017.5), "$1,017.5");
/// assert_eq!(format_currency(399.95), "$399.95");
/// assert_eq!(format_currency(-180.0), "-$180");
/// ```
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    // Group the integer part in threes
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    if frac == 0 {
        format!("{}${}", sign, grouped)
    } else if frac % 10 == 0 {
        format!("{}${}.{}", sign, grouped, frac / 10)
    } else {
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
