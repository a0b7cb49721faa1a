//! Domain models for tier entitlements.
//!
//! Feature, resource kind, role and UI surface identifiers are closed enums.
//! Raw strings are parsed at the boundary; anything that does not parse takes
//! the fail-closed path in the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Tier;

/// Generates a closed, string-keyed identifier enum with `ALL`, `as_str` and `parse`.
macro_rules! string_keyed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant ),+];

            /// Wire identifier.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }

            /// Exact-match parse of a wire identifier.
            #[must_use]
            pub fn parse(key: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == key)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_keyed_enum! {
    /// Tier-gated product capability.
    Feature {
        /// Manual income/expense tracking, included in every tier.
        BasicTracking => "basic_tracking",
        CsvExport => "csv_export",
        AiCategorization => "ai_categorization",
        BudgetAlerts => "budget_alerts",
        RecurringDetection => "recurring_detection",
        InvestmentTracking => "investment_tracking",
        TaxReports => "tax_reports",
        MultiCurrency => "multi_currency",
        AdvancedAnalytics => "advanced_analytics",
        PrioritySupport => "priority_support",
    }
}

string_keyed_enum! {
    /// Countable record type subject to a per-tier cap.
    ResourceKind {
        Expenses => "expenses",
        IncomeSources => "income_sources",
        Budgets => "budgets",
        SavingsGoals => "savings_goals",
        Accounts => "accounts",
    }
}

string_keyed_enum! {
    /// Sidebar navigation entry.
    NavItem {
        Dashboard => "dashboard",
        Income => "income",
        Expenses => "expenses",
        Budgets => "budgets",
        Goals => "goals",
        Insights => "insights",
        Investments => "investments",
        Reports => "reports",
        Settings => "settings",
    }
}

string_keyed_enum! {
    /// Dashboard widget.
    Widget {
        SpendingChart => "spending_chart",
        CategoryBreakdown => "category_breakdown",
        BudgetProgress => "budget_progress",
        RecurringBills => "recurring_bills",
        NetWorth => "net_worth",
        TaxSummary => "tax_summary",
    }
}

/// Maximum number of records of one kind.
///
/// `Unbounded` orders above every `Capped` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLimit {
    Capped(u32),
    Unbounded,
}

impl UsageLimit {
    /// Fail-closed limit: nothing may be added.
    pub const NONE: Self = Self::Capped(0);

    /// Whether one more record fits when `current` records already exist.
    #[must_use]
    pub const fn allows(self, current: u32) -> bool {
        match self {
            Self::Capped(max) => current < max,
            Self::Unbounded => true,
        }
    }

    /// Headroom left after `current` records.
    #[must_use]
    pub const fn remaining(self, current: u32) -> Self {
        match self {
            Self::Capped(max) => Self::Capped(max.saturating_sub(current)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Numeric cap, `None` when unbounded.
    #[must_use]
    pub const fn cap(self) -> Option<u32> {
        match self {
            Self::Capped(max) => Some(max),
            Self::Unbounded => None,
        }
    }

    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for UsageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capped(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str("unlimited"),
        }
    }
}

/// Role carried by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    /// Case-insensitive parse; `user` is accepted as an alias of `member`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("admin") {
            Some(Self::Admin)
        } else if value.eq_ignore_ascii_case("member") || value.eq_ignore_ascii_case("user") {
            Some(Self::Member)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Per-request `(tier, role)` pair resolved from the session.
///
/// Never cached by the entitlements core; callers pass a fresh value on every
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntitlementContext {
    pub tier: Tier,
    pub role: Role,
}

impl EntitlementContext {
    #[must_use]
    pub const fn new(tier: Tier, role: Role) -> Self {
        Self { tier, role }
    }

    /// Context for a regular (non-admin) user.
    #[must_use]
    pub const fn member(tier: Tier) -> Self {
        Self::new(tier, Role::Member)
    }

    /// Build a context from raw session strings.
    ///
    /// Unknown tiers normalize to the lowest tier (with a warning); unknown
    /// roles normalize to [`Role::Member`], which carries no bypass.
    #[must_use]
    pub fn from_session(tier: &str, role: &str) -> Self {
        let role = Role::parse(role).unwrap_or_else(|| {
            tracing::debug!(role, "Unknown role, treating as member");
            Role::Member
        });
        Self::new(Tier::normalize(tier), role)
    }
}

/// Outcome of gating a feature for a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDecision {
    /// The context may use the feature.
    Allowed,
    /// Blocked; `required_tier` is the lowest tier that unlocks the feature.
    Blocked { required_tier: Tier },
}

impl GateDecision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}
