//! Feature entitlement table.
//!
//! Undeclared feature keys are never granted, and their required tier is the
//! top of the catalog.

use entitlements_sdk::{Feature, Tier};

/// Tiers allowed to use `feature`. Never empty.
#[must_use]
pub const fn allowed_tiers(feature: Feature) -> &'static [Tier] {
    match feature {
        Feature::BasicTracking => &[Tier::Starter, Tier::Growth, Tier::Wealth],
        Feature::CsvExport
        | Feature::AiCategorization
        | Feature::BudgetAlerts
        | Feature::RecurringDetection => &[Tier::Growth, Tier::Wealth],
        Feature::InvestmentTracking
        | Feature::TaxReports
        | Feature::MultiCurrency
        | Feature::AdvancedAnalytics
        | Feature::PrioritySupport => &[Tier::Wealth],
    }
}

/// Whether `tier` is in the allowed set of `feature`.
#[must_use]
pub fn grants(feature: Feature, tier: Tier) -> bool {
    allowed_tiers(feature).contains(&tier)
}

/// Lowest-ranked tier in the allowed set of `feature`.
///
/// Picks the minimum by rank rather than the first entry, so the table does
/// not have to be sorted or contiguous.
#[must_use]
pub fn minimum_tier(feature: Feature) -> Tier {
    allowed_tiers(feature)
        .iter()
        .copied()
        .min_by_key(|tier| tier.rank())
        .unwrap_or_else(Tier::highest)
}

/// Membership test for a raw feature key.
#[must_use]
pub fn has_feature_access(tier: Tier, feature_key: &str) -> bool {
    let Some(feature) = Feature::parse(feature_key) else {
        tracing::debug!(feature = feature_key, "Unknown feature key, access denied");
        return false;
    };
    grants(feature, tier)
}

/// Tier needed to unlock a raw feature key.
#[must_use]
pub fn required_tier_for(feature_key: &str) -> Tier {
    let Some(feature) = Feature::parse(feature_key) else {
        tracing::debug!(
            feature = feature_key,
            "Unknown feature key, requiring the highest tier"
        );
        return Tier::highest();
    };
    minimum_tier(feature)
}

/// Every declared feature granted to `tier`, in declaration order.
#[must_use]
pub fn enabled_features(tier: Tier) -> Vec<Feature> {
    Feature::ALL
        .iter()
        .copied()
        .filter(|feature| grants(*feature, tier))
        .collect()
}
