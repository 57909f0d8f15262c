//! # Quote Draft
//!
//! The editable, in-memory quote being built: an ordered item list plus the
//! quote-level modifiers. Nothing here touches storage — a draft becomes
//! durable only when the host hands `finalize()`'s payload to the
//! repository.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Draft State Operations                              │
//! │                                                                         │
//! │  Host Action               Draft Call             State Change         │
//! │  ───────────               ──────────             ────────────         │
//! │                                                                         │
//! │  Add deliverable ────────► add_item() ──────────► items.push + resync  │
//! │                                                                         │
//! │  Edit a line ────────────► update_item() ───────► reprice + resync     │
//! │                                                                         │
//! │  Remove a line ──────────► remove_item() ───────► items.retain + resync│
//! │                                                                         │
//! │  Pick a preset ──────────► from_preset() ───────► fresh priced items   │
//! │                                                                         │
//! │  Duplicate a quote ──────► from_quote() ────────► fresh ids, old values│
//! │                                                                         │
//! │  Save ───────────────────► finalize() ──────────► NewQuote snapshot    │
//! │                                                                         │
//! │  Every item mutation re-evaluates bundle eligibility and writes it     │
//! │  back to modifiers.bundle_discount_applied. It is never a one-time     │
//! │  decision made at creation.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::pricing::{self, TotalBreakdown};
use crate::presets::PresetTier;
use crate::types::{
    ComplexityTier, Config, DeliverableType, NewQuote, Quote, QuoteItem, QuoteModifiers,
};

use uuid::Uuid;

// =============================================================================
// Item Update
// =============================================================================

/// A partial edit to one draft line. Unset fields keep their value; any
/// applied edit triggers a reprice of the cached projections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemUpdate {
    pub deliverable: Option<DeliverableType>,
    pub complexity: Option<ComplexityTier>,
    pub extra_revisions: Option<u32>,
}

// =============================================================================
// Quote Draft
// =============================================================================

/// The quote under construction.
///
/// ## Invariants
/// - Item order is entry order (meaningful for display).
/// - `items[i].base_price`/`calculated_price` always reflect the current
///   fields under the config passed to the last mutation.
/// - `modifiers.bundle_discount_applied == (items.len() >= 2)` after every
///   item mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDraft {
    pub items: Vec<QuoteItem>,
    pub modifiers: QuoteModifiers,
}

impl QuoteDraft {
    /// Creates an empty draft with default modifiers (tax on, rest off).
    pub fn new() -> Self {
        QuoteDraft {
            items: Vec::new(),
            modifiers: QuoteModifiers::default(),
        }
    }

    /// The default starting point: a single simple landing page.
    pub fn starter(config: &Config) -> Self {
        let mut draft = QuoteDraft::new();
        draft.add_item(DeliverableType::LandingPage, config);
        draft
    }

    /// Seeds a draft from a preset bundle, fully priced under `config`.
    pub fn from_preset(tier: PresetTier, config: &Config) -> Self {
        let bundle = tier.bundle();
        let mut draft = QuoteDraft::new();
        draft.items = bundle
            .items
            .iter()
            .map(|&(deliverable, complexity)| {
                QuoteItem::priced(deliverable, complexity, 0, config)
            })
            .collect();
        draft.sync_bundle_discount();
        draft
    }

    /// Seeds an editable duplicate of a saved quote.
    ///
    /// Every item receives a FRESH id — the source quote's item ids are
    /// never reused — while the deliverable, complexity, revision count and
    /// price snapshots carry over value-equal, along with a copy of the
    /// modifiers. No `Quote` record is created; the caller must save the
    /// draft explicitly for it to enter any client's history.
    pub fn from_quote(quote: &Quote) -> Self {
        QuoteDraft {
            items: quote
                .items
                .iter()
                .map(|item| QuoteItem {
                    id: Uuid::new_v4().to_string(),
                    ..item.clone()
                })
                .collect(),
            modifiers: quote.modifiers.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Item mutations
    // -------------------------------------------------------------------------

    /// Appends a new simple, zero-revision line for `deliverable`.
    /// Returns the new item's id.
    pub fn add_item(&mut self, deliverable: DeliverableType, config: &Config) -> String {
        let item = QuoteItem::priced(deliverable, ComplexityTier::Simple, 0, config);
        let id = item.id.clone();
        self.items.push(item);
        self.sync_bundle_discount();
        id
    }

    /// Applies a partial edit to the item with `id` and reprices it.
    /// Returns false (leaving state untouched) when the id is unknown.
    pub fn update_item(&mut self, id: &str, update: ItemUpdate, config: &Config) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        if let Some(deliverable) = update.deliverable {
            item.deliverable = deliverable;
        }
        if let Some(complexity) = update.complexity {
            item.complexity = complexity;
        }
        if let Some(extra_revisions) = update.extra_revisions {
            item.extra_revisions = extra_revisions;
        }
        item.reprice(config);
        true
    }

    /// Removes the item with `id`. Returns false when the id is unknown.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.sync_bundle_discount();
        }
        removed
    }

    /// Drops all items and restores default modifiers.
    pub fn clear(&mut self) {
        self.items.clear();
        self.modifiers = QuoteModifiers::default();
        self.sync_bundle_discount();
    }

    /// Reprices every line under `config`.
    /// Run after the governing configuration record changes.
    pub fn reprice_all(&mut self, config: &Config) {
        for item in &mut self.items {
            item.reprice(config);
        }
    }

    // -------------------------------------------------------------------------
    // Modifier setters
    // -------------------------------------------------------------------------

    pub fn set_rush_fee(&mut self, on: bool) {
        self.modifiers.rush_fee = on;
    }

    pub fn set_include_tax(&mut self, on: bool) {
        self.modifiers.include_tax = on;
    }

    /// Sets the manual discount. The UI keeps this within
    /// [0, `MAX_CUSTOM_DISCOUNT_PERCENT`]; the draft stores what it is given.
    pub fn set_custom_discount_percent(&mut self, percent: f64) {
        self.modifiers.custom_discount_percent = percent;
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Number of lines in the draft.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True when the draft has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the lines' calculated prices.
    pub fn subtotal(&self) -> f64 {
        pricing::subtotal(&self.items)
    }

    /// Runs the modifier pipeline on the current subtotal.
    pub fn totals(&self, config: &Config) -> TotalBreakdown {
        pricing::total(self.subtotal(), &self.modifiers, config)
    }

    /// Snapshots the draft into the payload the repository stores.
    pub fn finalize(&self, config: &Config) -> NewQuote {
        let subtotal = self.subtotal();
        let breakdown = pricing::total(subtotal, &self.modifiers, config);
        NewQuote {
            items: self.items.clone(),
            modifiers: self.modifiers.clone(),
            subtotal,
            tax_amount: breakdown.tax_amount,
            total: breakdown.total,
        }
    }

    /// Re-derives `bundle_discount_applied` from the item count.
    fn sync_bundle_discount(&mut self) {
        self.modifiers.bundle_discount_applied = pricing::bundle_eligible(&self.items);
    }
}

impl Default for QuoteDraft {
    fn default() -> Self {
        QuoteDraft::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_starter_draft_has_one_simple_landing_page() {
        let config = Config::default();
        let draft = QuoteDraft::starter(&config);

        assert_eq!(draft.item_count(), 1);
        let item = &draft.items[0];
        assert_eq!(item.deliverable, DeliverableType::LandingPage);
        assert_eq!(item.complexity, ComplexityTier::Simple);
        assert_eq!(item.extra_revisions, 0);
        assert_eq!(item.calculated_price, 2500.0);
        assert!(!draft.modifiers.bundle_discount_applied);
        assert!(draft.modifiers.include_tax);
    }

    #[test]
    fn test_bundle_discount_resyncs_on_item_changes() {
        let config = Config::default();
        let mut draft = QuoteDraft::new();
        assert!(!draft.modifiers.bundle_discount_applied);

        draft.add_item(DeliverableType::LandingPage, &config);
        assert!(!draft.modifiers.bundle_discount_applied);

        let second = draft.add_item(DeliverableType::SeoSetup, &config);
        assert!(draft.modifiers.bundle_discount_applied);

        // Dropping back below two items must clear the flag again
        assert!(draft.remove_item(&second));
        assert!(!draft.modifiers.bundle_discount_applied);
    }

    #[test]
    fn test_update_item_reprices() {
        let config = Config::default();
        let mut draft = QuoteDraft::starter(&config);
        let id = draft.items[0].id.clone();

        let updated = draft.update_item(
            &id,
            ItemUpdate {
                complexity: Some(ComplexityTier::Complex),
                extra_revisions: Some(2),
                ..ItemUpdate::default()
            },
            &config,
        );
        assert!(updated);

        // 2500 × 2.0 + 2 × 100
        assert_eq!(draft.items[0].calculated_price, 5200.0);
        assert_eq!(draft.subtotal(), 5200.0);
    }

    #[test]
    fn test_update_unknown_item_is_a_no_op() {
        let config = Config::default();
        let mut draft = QuoteDraft::starter(&config);
        let before = draft.clone();

        let updated = draft.update_item(
            "no-such-id",
            ItemUpdate {
                extra_revisions: Some(9),
                ..ItemUpdate::default()
            },
            &config,
        );
        assert!(!updated);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_clear_resets_modifiers() {
        let config = Config::default();
        let mut draft = QuoteDraft::from_preset(PresetTier::Better, &config);
        draft.set_rush_fee(true);
        draft.set_custom_discount_percent(15.0);

        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.modifiers, QuoteModifiers::default());
    }

    #[test]
    fn test_preset_draft_prices_every_line() {
        let config = Config::default();
        let draft = QuoteDraft::from_preset(PresetTier::Good, &config);

        // Starter bundle: consultation + landing page + copy + analytics
        assert_eq!(draft.item_count(), 4);
        assert!(draft.modifiers.bundle_discount_applied);
        assert_eq!(draft.subtotal(), 300.0 + 2500.0 + 500.0 + 400.0);
        assert!(draft.items.iter().all(|item| item.extra_revisions == 0));
    }

    #[test]
    fn test_duplicate_gets_fresh_item_ids_and_equal_values() {
        let config = Config::default();
        let mut source_draft = QuoteDraft::from_preset(PresetTier::Best, &config);
        source_draft.set_rush_fee(true);
        source_draft.set_custom_discount_percent(10.0);

        let payload = source_draft.finalize(&config);
        let saved = Quote {
            id: "quote-1".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            items: payload.items,
            modifiers: payload.modifiers,
            subtotal: payload.subtotal,
            tax_amount: payload.tax_amount,
            total: payload.total,
        };

        let duplicate = QuoteDraft::from_quote(&saved);

        // Ids are disjoint from the source quote's item ids
        for (copy, original) in duplicate.items.iter().zip(&saved.items) {
            assert_ne!(copy.id, original.id);
            assert_eq!(copy.deliverable, original.deliverable);
            assert_eq!(copy.complexity, original.complexity);
            assert_eq!(copy.extra_revisions, original.extra_revisions);
            assert_eq!(copy.base_price, original.base_price);
            assert_eq!(copy.calculated_price, original.calculated_price);
        }
        assert_eq!(duplicate.modifiers, saved.modifiers);
    }

    #[test]
    fn test_finalize_snapshots_totals() {
        let config = Config::default();
        let mut draft = QuoteDraft::new();
        draft.add_item(DeliverableType::LandingPage, &config);
        draft.add_item(DeliverableType::SocialMediaKit, &config);
        draft.set_custom_discount_percent(20.0);
        draft.set_rush_fee(true);

        let payload = draft.finalize(&config);
        assert_eq!(payload.subtotal, 3500.0);

        // 3500 × 0.9 × 0.8 × 1.25 = 3150
        let breakdown = draft.totals(&config);
        assert_eq!(breakdown.before_tax, 3150.0);
        assert_eq!(payload.tax_amount, breakdown.tax_amount);
        assert_eq!(payload.total, breakdown.total);
    }

    #[test]
    fn test_reprice_all_tracks_config_edits() {
        let mut config = Config::default();
        let mut draft = QuoteDraft::from_preset(PresetTier::Good, &config);
        let before = draft.subtotal();

        config.base_rates.landing_page = 3000.0;
        draft.reprice_all(&config);
        assert_eq!(draft.subtotal(), before + 500.0);
    }
}
