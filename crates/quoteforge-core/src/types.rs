//! # Domain Types
//!
//! Core domain types used throughout Quoteforge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Config      │   │     Quote       │   │     Client      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  business       │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  baseRates      │   │  createdAt      │   │  name, email    │       │
//! │  │  multipliers    │   │  items[]        │   │  quotes[]       │       │
//! │  │  percents       │   │  totals (frozen)│   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ DeliverableType │   │ ComplexityTier  │   │ QuoteModifiers  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  10 variants    │   │  Simple         │   │  rushFee        │       │
//! │  │  closed enum    │   │  Medium         │   │  discounts      │       │
//! │  │                 │   │  Complex        │   │  includeTax     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Merge-with-Defaults
//! Every `Config` field (and every field of its nested records) carries a
//! serde default drawn from the embedded default record. Deserializing a
//! partial record therefore IS the reconciliation: missing keys inherit the
//! default, keys present in the record keep their loaded value. A record
//! saved by a build that dropped a field repopulates it on the next load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Deliverable Type
// =============================================================================

/// The closed set of deliverables a quote item can price.
///
/// Serialized in camelCase to match the storage slot layout
/// (`"landingPage"`, `"seoSetup"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum DeliverableType {
    LandingPage,
    FullWebsite,
    Copywriting,
    DesignConsultation,
    ContentStrategy,
    SeoSetup,
    AnalyticsSetup,
    BrandGuidelines,
    SocialMediaKit,
    MaintenanceHours,
}

impl DeliverableType {
    /// All deliverable types, in display order.
    pub const ALL: [DeliverableType; 10] = [
        DeliverableType::LandingPage,
        DeliverableType::FullWebsite,
        DeliverableType::Copywriting,
        DeliverableType::DesignConsultation,
        DeliverableType::ContentStrategy,
        DeliverableType::SeoSetup,
        DeliverableType::AnalyticsSetup,
        DeliverableType::BrandGuidelines,
        DeliverableType::SocialMediaKit,
        DeliverableType::MaintenanceHours,
    ];

    /// Human-readable label for pickers and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            DeliverableType::LandingPage => "Landing Page",
            DeliverableType::FullWebsite => "Full Website",
            DeliverableType::Copywriting => "Copywriting",
            DeliverableType::DesignConsultation => "Design Consultation",
            DeliverableType::ContentStrategy => "Content Strategy",
            DeliverableType::SeoSetup => "SEO Setup",
            DeliverableType::AnalyticsSetup => "Analytics Setup",
            DeliverableType::BrandGuidelines => "Brand Guidelines",
            DeliverableType::SocialMediaKit => "Social Media Kit",
            DeliverableType::MaintenanceHours => "Maintenance (per hour)",
        }
    }

    /// The wire name used in storage slots (camelCase).
    pub const fn wire_name(&self) -> &'static str {
        match self {
            DeliverableType::LandingPage => "landingPage",
            DeliverableType::FullWebsite => "fullWebsite",
            DeliverableType::Copywriting => "copywriting",
            DeliverableType::DesignConsultation => "designConsultation",
            DeliverableType::ContentStrategy => "contentStrategy",
            DeliverableType::SeoSetup => "seoSetup",
            DeliverableType::AnalyticsSetup => "analyticsSetup",
            DeliverableType::BrandGuidelines => "brandGuidelines",
            DeliverableType::SocialMediaKit => "socialMediaKit",
            DeliverableType::MaintenanceHours => "maintenanceHours",
        }
    }
}

impl std::fmt::Display for DeliverableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for DeliverableType {
    type Err = CoreError;

    /// Parses a wire name. Anything outside the closed enumeration fails:
    /// the base-rate lookup has no defined fallback for unknown types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliverableType::ALL
            .into_iter()
            .find(|ty| ty.wire_name() == s)
            .ok_or_else(|| CoreError::InvalidDeliverableType(s.to_string()))
    }
}

// =============================================================================
// Complexity Tier
// =============================================================================

/// Complexity tier applied as a multiplier on a deliverable's base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Simple,
    Medium,
    Complex,
}

impl ComplexityTier {
    /// All tiers, from cheapest to most expensive.
    pub const ALL: [ComplexityTier; 3] = [
        ComplexityTier::Simple,
        ComplexityTier::Medium,
        ComplexityTier::Complex,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => "Simple",
            ComplexityTier::Medium => "Medium",
            ComplexityTier::Complex => "Complex",
        }
    }
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityTier::Simple => write!(f, "simple"),
            ComplexityTier::Medium => write!(f, "medium"),
            ComplexityTier::Complex => write!(f, "complex"),
        }
    }
}

impl std::str::FromStr for ComplexityTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(ComplexityTier::Simple),
            "medium" => Ok(ComplexityTier::Medium),
            "complex" => Ok(ComplexityTier::Complex),
            other => Err(CoreError::InvalidComplexityTier(other.to_string())),
        }
    }
}

// =============================================================================
// Business Info
// =============================================================================

/// Free-text business identity shown on quote summaries.
/// No validation beyond presence checks at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    #[serde(default = "default_business_name")]
    pub name: String,

    #[serde(default = "default_business_email")]
    pub email: String,

    #[serde(default)]
    pub phone: String,
}

fn default_business_name() -> String {
    "Your Name/Company".to_string()
}

fn default_business_email() -> String {
    "you@example.com".to_string()
}

impl Default for BusinessInfo {
    fn default() -> Self {
        BusinessInfo {
            name: default_business_name(),
            email: default_business_email(),
            phone: String::new(),
        }
    }
}

// =============================================================================
// Base Rates
// =============================================================================

/// Base price per deliverable type.
///
/// One field per `DeliverableType` variant, so the mapping is total by
/// construction: there is no key a lookup could miss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BaseRates {
    #[serde(default = "default_rate_landing_page")]
    pub landing_page: f64,
    #[serde(default = "default_rate_full_website")]
    pub full_website: f64,
    #[serde(default = "default_rate_copywriting")]
    pub copywriting: f64,
    #[serde(default = "default_rate_design_consultation")]
    pub design_consultation: f64,
    #[serde(default = "default_rate_content_strategy")]
    pub content_strategy: f64,
    #[serde(default = "default_rate_seo_setup")]
    pub seo_setup: f64,
    #[serde(default = "default_rate_analytics_setup")]
    pub analytics_setup: f64,
    #[serde(default = "default_rate_brand_guidelines")]
    pub brand_guidelines: f64,
    #[serde(default = "default_rate_social_media_kit")]
    pub social_media_kit: f64,
    #[serde(default = "default_rate_maintenance_hours")]
    pub maintenance_hours: f64,
}

fn default_rate_landing_page() -> f64 {
    2500.0
}
fn default_rate_full_website() -> f64 {
    8000.0
}
fn default_rate_copywriting() -> f64 {
    500.0
}
fn default_rate_design_consultation() -> f64 {
    300.0
}
fn default_rate_content_strategy() -> f64 {
    800.0
}
fn default_rate_seo_setup() -> f64 {
    600.0
}
fn default_rate_analytics_setup() -> f64 {
    400.0
}
fn default_rate_brand_guidelines() -> f64 {
    1500.0
}
fn default_rate_social_media_kit() -> f64 {
    1000.0
}
fn default_rate_maintenance_hours() -> f64 {
    150.0
}

impl BaseRates {
    /// Returns the base price for a deliverable type.
    /// Exhaustive by construction; there is no fallback path.
    pub const fn rate(&self, ty: DeliverableType) -> f64 {
        match ty {
            DeliverableType::LandingPage => self.landing_page,
            DeliverableType::FullWebsite => self.full_website,
            DeliverableType::Copywriting => self.copywriting,
            DeliverableType::DesignConsultation => self.design_consultation,
            DeliverableType::ContentStrategy => self.content_strategy,
            DeliverableType::SeoSetup => self.seo_setup,
            DeliverableType::AnalyticsSetup => self.analytics_setup,
            DeliverableType::BrandGuidelines => self.brand_guidelines,
            DeliverableType::SocialMediaKit => self.social_media_kit,
            DeliverableType::MaintenanceHours => self.maintenance_hours,
        }
    }

    /// Sets the base price for a deliverable type (settings editor).
    pub fn set_rate(&mut self, ty: DeliverableType, rate: f64) {
        match ty {
            DeliverableType::LandingPage => self.landing_page = rate,
            DeliverableType::FullWebsite => self.full_website = rate,
            DeliverableType::Copywriting => self.copywriting = rate,
            DeliverableType::DesignConsultation => self.design_consultation = rate,
            DeliverableType::ContentStrategy => self.content_strategy = rate,
            DeliverableType::SeoSetup => self.seo_setup = rate,
            DeliverableType::AnalyticsSetup => self.analytics_setup = rate,
            DeliverableType::BrandGuidelines => self.brand_guidelines = rate,
            DeliverableType::SocialMediaKit => self.social_media_kit = rate,
            DeliverableType::MaintenanceHours => self.maintenance_hours = rate,
        }
    }
}

impl Default for BaseRates {
    fn default() -> Self {
        BaseRates {
            landing_page: default_rate_landing_page(),
            full_website: default_rate_full_website(),
            copywriting: default_rate_copywriting(),
            design_consultation: default_rate_design_consultation(),
            content_strategy: default_rate_content_strategy(),
            seo_setup: default_rate_seo_setup(),
            analytics_setup: default_rate_analytics_setup(),
            brand_guidelines: default_rate_brand_guidelines(),
            social_media_kit: default_rate_social_media_kit(),
            maintenance_hours: default_rate_maintenance_hours(),
        }
    }
}

// =============================================================================
// Complexity Multipliers
// =============================================================================

/// Multiplier per complexity tier. Applied to the base rate before
/// revision costs are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMultipliers {
    #[serde(default = "default_multiplier_simple")]
    pub simple: f64,
    #[serde(default = "default_multiplier_medium")]
    pub medium: f64,
    #[serde(default = "default_multiplier_complex")]
    pub complex: f64,
}

fn default_multiplier_simple() -> f64 {
    1.0
}
fn default_multiplier_medium() -> f64 {
    1.5
}
fn default_multiplier_complex() -> f64 {
    2.0
}

impl ComplexityMultipliers {
    /// Returns the multiplier for a tier. Exhaustive by construction.
    pub const fn multiplier(&self, tier: ComplexityTier) -> f64 {
        match tier {
            ComplexityTier::Simple => self.simple,
            ComplexityTier::Medium => self.medium,
            ComplexityTier::Complex => self.complex,
        }
    }
}

impl Default for ComplexityMultipliers {
    fn default() -> Self {
        ComplexityMultipliers {
            simple: default_multiplier_simple(),
            medium: default_multiplier_medium(),
            complex: default_multiplier_complex(),
        }
    }
}

// =============================================================================
// Config
// =============================================================================

/// The single mutable configuration record.
///
/// ## Invariant
/// Every key of `base_rates` and `complexity_multipliers` is always present:
/// the structs are total mappings, and the serde defaults reconcile any
/// partial record loaded from storage against the embedded default record
/// before use.
///
/// `hourly_rate` and `revisions_included` are informational: they are
/// displayed but never consumed by the pricing formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub business: BusinessInfo,

    /// Displayed on settings/summary screens only.
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    #[serde(default)]
    pub base_rates: BaseRates,

    #[serde(default)]
    pub complexity_multipliers: ComplexityMultipliers,

    /// Percentage added after discounts when the rush modifier is on.
    #[serde(default = "default_rush_fee_percent")]
    pub rush_fee_percent: f64,

    /// Displayed on quote summaries; not subtracted from extra revisions.
    #[serde(default = "default_revisions_included")]
    pub revisions_included: u32,

    /// Price per extra revision unit.
    #[serde(default = "default_extra_revision_rate")]
    pub extra_revision_rate: f64,

    /// Percentage taken off the subtotal when a quote has 2+ items.
    #[serde(default = "default_bundle_discount_percent")]
    pub bundle_discount_percent: f64,

    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,
}

fn default_hourly_rate() -> f64 {
    150.0
}
fn default_rush_fee_percent() -> f64 {
    25.0
}
fn default_revisions_included() -> u32 {
    2
}
fn default_extra_revision_rate() -> f64 {
    100.0
}
fn default_bundle_discount_percent() -> f64 {
    10.0
}
fn default_tax_percent() -> f64 {
    13.0
}

impl Default for Config {
    /// The embedded default record. This is the source every partial or
    /// missing storage record is reconciled against.
    fn default() -> Self {
        Config {
            business: BusinessInfo::default(),
            hourly_rate: default_hourly_rate(),
            base_rates: BaseRates::default(),
            complexity_multipliers: ComplexityMultipliers::default(),
            rush_fee_percent: default_rush_fee_percent(),
            revisions_included: default_revisions_included(),
            extra_revision_rate: default_extra_revision_rate(),
            bundle_discount_percent: default_bundle_discount_percent(),
            tax_percent: default_tax_percent(),
        }
    }
}

// =============================================================================
// Quote Item
// =============================================================================

/// A single deliverable line in a quote.
///
/// `base_price` and `calculated_price` are cached projections of
/// (deliverable, complexity, extra_revisions) under the governing config.
/// They must be recomputed whenever any of those inputs change; see
/// `QuoteItem::reprice`. Inside a saved `Quote` they are intentional
/// snapshots and stay frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    /// Opaque unique token (UUID v4).
    pub id: String,

    /// Deliverable being priced.
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub deliverable: DeliverableType,

    pub complexity: ComplexityTier,

    /// Revisions beyond the included allowance, billed per unit.
    pub extra_revisions: u32,

    /// Snapshot of `base_rates[type]` at compute time.
    pub base_price: f64,

    /// base_price × multiplier + extra_revisions × extra_revision_rate.
    pub calculated_price: f64,
}

// =============================================================================
// Quote Modifiers
// =============================================================================

/// Quote-level switches applied on top of the item subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteModifiers {
    /// Adds `rush_fee_percent` after discounts.
    pub rush_fee: bool,

    /// Manual discount in percent. UI convention keeps this in [0, 50];
    /// the engine applies whatever it is given.
    pub custom_discount_percent: f64,

    /// Derived from the item count (see `pricing::bundle_eligible`);
    /// resynchronized on every item-list change, never set directly.
    pub bundle_discount_applied: bool,

    pub include_tax: bool,
}

impl Default for QuoteModifiers {
    /// Fresh-draft modifiers: everything off except tax.
    fn default() -> Self {
        QuoteModifiers {
            rush_fee: false,
            custom_discount_percent: 0.0,
            bundle_discount_applied: false,
            include_tax: true,
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A saved quote. Immutable once created (whole-quote deletion aside):
/// items, modifiers and totals are snapshots, so later configuration edits
/// never retroactively reprice history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,

    /// Calendar date only; quotes carry no time component.
    #[ts(as = "String")]
    pub created_at: NaiveDate,

    /// Entry order, kept for display.
    pub items: Vec<QuoteItem>,

    pub modifiers: QuoteModifiers,

    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// The identity-less payload handed to the repository, which assigns the
/// id and creation date (`Quote` minus `id`/`created_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub items: Vec<QuoteItem>,
    pub modifiers: QuoteModifiers,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

// =============================================================================
// Client
// =============================================================================

/// A client owning an ordered quote history.
/// Quotes are append-only except for deletion; deleting the client deletes
/// its quotes with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,

    /// Required, non-empty after trimming.
    pub name: String,

    /// Optional in spirit; stored as a possibly-empty string to keep the
    /// slot layout verbatim.
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub quotes: Vec<Quote>,
}

// =============================================================================
// Quotes Data (repository root)
// =============================================================================

/// The root record of the quotes storage slot: client-id → client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotesData {
    #[serde(default)]
    pub clients: HashMap<String, Client>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliverable_wire_names_round_trip() {
        for ty in DeliverableType::ALL {
            let parsed: DeliverableType = ty.wire_name().parse().unwrap();
            assert_eq!(parsed, ty);

            // serde uses the same camelCase names as FromStr/Display
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.wire_name()));
        }
    }

    #[test]
    fn test_deliverable_parse_rejects_unknown() {
        let err = "brochure".parse::<DeliverableType>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidDeliverableType(_)));
    }

    #[test]
    fn test_complexity_parse_rejects_unknown() {
        assert!("medium".parse::<ComplexityTier>().is_ok());
        let err = "extreme".parse::<ComplexityTier>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidComplexityTier(_)));
    }

    #[test]
    fn test_default_config_matches_reference_record() {
        let config = Config::default();
        assert_eq!(config.business.name, "Your Name/Company");
        assert_eq!(config.hourly_rate, 150.0);
        assert_eq!(config.base_rates.rate(DeliverableType::LandingPage), 2500.0);
        assert_eq!(config.base_rates.rate(DeliverableType::FullWebsite), 8000.0);
        assert_eq!(
            config.base_rates.rate(DeliverableType::MaintenanceHours),
            150.0
        );
        assert_eq!(
            config.complexity_multipliers.multiplier(ComplexityTier::Medium),
            1.5
        );
        assert_eq!(config.rush_fee_percent, 25.0);
        assert_eq!(config.revisions_included, 2);
        assert_eq!(config.extra_revision_rate, 100.0);
        assert_eq!(config.bundle_discount_percent, 10.0);
        assert_eq!(config.tax_percent, 13.0);
    }

    #[test]
    fn test_partial_config_merges_with_defaults() {
        // taxPercent is missing entirely; baseRates is partially present.
        let json = r#"{
            "business": { "name": "Studio North" },
            "hourlyRate": 200,
            "baseRates": { "landingPage": 3000 }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        // Loaded values win
        assert_eq!(config.business.name, "Studio North");
        assert_eq!(config.hourly_rate, 200.0);
        assert_eq!(config.base_rates.landing_page, 3000.0);

        // Missing keys heal from the embedded default record
        assert_eq!(config.business.email, "you@example.com");
        assert_eq!(config.base_rates.full_website, 8000.0);
        assert_eq!(config.tax_percent, 13.0);
        assert_eq!(config.complexity_multipliers.complex, 2.0);
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json.get("hourlyRate").is_some());
        assert!(json.get("baseRates").is_some());
        assert!(json["baseRates"].get("landingPage").is_some());
        assert!(json.get("complexityMultipliers").is_some());
        assert!(json.get("rushFeePercent").is_some());
        assert!(json.get("taxPercent").is_some());
    }

    #[test]
    fn test_quote_item_serializes_type_key() {
        let item = QuoteItem {
            id: "item-1".to_string(),
            deliverable: DeliverableType::SeoSetup,
            complexity: ComplexityTier::Simple,
            extra_revisions: 0,
            base_price: 600.0,
            calculated_price: 600.0,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "seoSetup");
        assert_eq!(json["complexity"], "simple");
        assert!(json.get("extraRevisions").is_some());
        assert!(json.get("calculatedPrice").is_some());
    }

    #[test]
    fn test_default_modifiers() {
        let modifiers = QuoteModifiers::default();
        assert!(!modifiers.rush_fee);
        assert_eq!(modifiers.custom_discount_percent, 0.0);
        assert!(!modifiers.bundle_discount_applied);
        assert!(modifiers.include_tax);
    }

    #[test]
    fn test_quotes_data_accepts_empty_document() {
        let data: QuotesData = serde_json::from_str(r#"{ "clients": {} }"#).unwrap();
        assert!(data.clients.is_empty());

        // clients key itself may be absent in a hand-seeded document
        let data: QuotesData = serde_json::from_str("{}").unwrap();
        assert!(data.clients.is_empty());
    }
}
