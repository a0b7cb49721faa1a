//! Usage limit table.

use entitlements_sdk::{ResourceKind, Tier, UsageLimit};

/// Caps for `kind`, indexed by tier rank.
const fn caps(kind: ResourceKind) -> [UsageLimit; Tier::ALL.len()] {
    use UsageLimit::{Capped, Unbounded};

    match kind {
        ResourceKind::Expenses => [Capped(10), Capped(30), Unbounded],
        ResourceKind::IncomeSources => [Capped(2), Capped(10), Unbounded],
        ResourceKind::Budgets => [Capped(3), Capped(15), Unbounded],
        ResourceKind::SavingsGoals => [Capped(1), Capped(5), Unbounded],
        ResourceKind::Accounts => [Capped(2), Capped(5), Capped(20)],
    }
}

/// Cap for a declared resource kind.
#[must_use]
pub fn cap(tier: Tier, kind: ResourceKind) -> UsageLimit {
    caps(kind)[usize::from(tier.rank())]
}

/// Cap for a raw resource kind key; undeclared kinds get [`UsageLimit::NONE`].
#[must_use]
pub fn limit_for(tier: Tier, resource_kind: &str) -> UsageLimit {
    let Some(kind) = ResourceKind::parse(resource_kind) else {
        tracing::debug!(
            resource_kind,
            "Unknown resource kind, applying a zero limit"
        );
        return UsageLimit::NONE;
    };
    cap(tier, kind)
}

/// `current_count < limit_for(tier, resource_kind)`, unbounded always wins.
#[must_use]
pub fn can_add_more(tier: Tier, resource_kind: &str, current_count: u32) -> bool {
    limit_for(tier, resource_kind).allows(current_count)
}

/// Headroom left for `resource_kind` after `current_count` records.
#[must_use]
pub fn remaining(tier: Tier, resource_kind: &str, current_count: u32) -> UsageLimit {
    limit_for(tier, resource_kind).remaining(current_count)
}

/// Next tier above `tier`, regardless of which resource triggered the check.
#[must_use]
pub fn upgrade_suggestion(tier: Tier) -> Option<Tier> {
    tier.next()
}
