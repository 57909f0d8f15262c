//! # Preset Bundles
//!
//! Good/better/best starting points for a new quote. A preset only seeds a
//! draft (see `QuoteDraft::from_preset`); prices always come from the
//! governing config at the moment the draft is built, never from the preset.

use crate::types::{ComplexityTier, DeliverableType};

use ComplexityTier::{Complex, Medium, Simple};
use DeliverableType::*;

// =============================================================================
// Preset Tier
// =============================================================================

/// The three packaged offerings, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetTier {
    Good,
    Better,
    Best,
}

impl PresetTier {
    /// All tiers, in presentation order.
    pub const ALL: [PresetTier; 3] = [PresetTier::Good, PresetTier::Better, PresetTier::Best];

    /// The bundle this tier seeds.
    pub const fn bundle(&self) -> &'static PresetBundle {
        match self {
            PresetTier::Good => &STARTER,
            PresetTier::Better => &PROFESSIONAL,
            PresetTier::Best => &COMPLETE,
        }
    }
}

impl std::fmt::Display for PresetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetTier::Good => write!(f, "good"),
            PresetTier::Better => write!(f, "better"),
            PresetTier::Best => write!(f, "best"),
        }
    }
}

// =============================================================================
// Preset Bundle
// =============================================================================

/// A named set of deliverable/complexity pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetBundle {
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [(DeliverableType, ComplexityTier)],
}

const STARTER: PresetBundle = PresetBundle {
    name: "Starter",
    description: "Landing page with basic copy and analytics tracking",
    items: &[
        (DesignConsultation, Simple),
        (LandingPage, Simple),
        (Copywriting, Simple),
        (AnalyticsSetup, Simple),
    ],
};

const PROFESSIONAL: PresetBundle = PresetBundle {
    name: "Professional",
    description: "Enhanced landing page with SEO, content strategy, and optimization",
    items: &[
        (DesignConsultation, Medium),
        (ContentStrategy, Simple),
        (LandingPage, Medium),
        (Copywriting, Medium),
        (SeoSetup, Simple),
        (AnalyticsSetup, Medium),
    ],
};

const COMPLETE: PresetBundle = PresetBundle {
    name: "Complete Package",
    description: "Full website with brand identity, content, SEO, and ongoing support",
    items: &[
        (DesignConsultation, Complex),
        (BrandGuidelines, Medium),
        (ContentStrategy, Medium),
        (FullWebsite, Medium),
        (Copywriting, Complex),
        (SeoSetup, Medium),
        (AnalyticsSetup, Medium),
        (SocialMediaKit, Simple),
    ],
};

// =============================================================================
// Unit Tests
// =============================================================================
