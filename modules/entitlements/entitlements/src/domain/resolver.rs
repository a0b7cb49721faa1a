//! Entitlement resolver.
//!
//! Composes the static tables and the module registry into the query surface
//! used by UI gating. The admin feature bypass and the admin limit bypass are
//! independent switches.

use entitlements_sdk::{EntitlementContext, Feature, GateDecision, ModuleConfig, Tier, UsageLimit};

use super::registry::ModuleRegistry;
use super::{features, usage_limits};
use crate::config::EntitlementsConfig;

/// Role overrides applied on top of the tier tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverPolicy {
    pub admin_bypasses_features: bool,
    pub admin_bypasses_limits: bool,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            admin_bypasses_features: true,
            admin_bypasses_limits: false,
        }
    }
}

impl From<&EntitlementsConfig> for ResolverPolicy {
    fn from(config: &EntitlementsConfig) -> Self {
        Self {
            admin_bypasses_features: config.admin_bypasses_features,
            admin_bypasses_limits: config.admin_bypasses_limits,
        }
    }
}

/// Pure entitlement queries for a request context.
#[derive(Debug, Clone, Default)]
pub struct EntitlementResolver {
    policy: ResolverPolicy,
}

impl EntitlementResolver {
    #[must_use]
    pub fn new(policy: ResolverPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> ResolverPolicy {
        self.policy
    }

    fn bypasses_features(&self, ctx: EntitlementContext) -> bool {
        self.policy.admin_bypasses_features && ctx.role.is_admin()
    }

    fn bypasses_limits(&self, ctx: EntitlementContext) -> bool {
        self.policy.admin_bypasses_limits && ctx.role.is_admin()
    }

    /// Typed feature check.
    #[must_use]
    pub fn allows(&self, ctx: EntitlementContext, feature: Feature) -> bool {
        self.bypasses_features(ctx) || features::grants(feature, ctx.tier)
    }

    /// Feature check for a raw key. Unknown keys are denied unless the admin
    /// bypass applies.
    #[must_use]
    pub fn can_use_feature(&self, ctx: EntitlementContext, feature_key: &str) -> bool {
        self.bypasses_features(ctx) || features::has_feature_access(ctx.tier, feature_key)
    }

    #[must_use]
    pub fn gate_feature(&self, ctx: EntitlementContext, feature_key: &str) -> GateDecision {
        if self.can_use_feature(ctx, feature_key) {
            GateDecision::Allowed
        } else {
            GateDecision::Blocked {
                required_tier: features::required_tier_for(feature_key),
            }
        }
    }

    /// Features the context may use, in declaration order.
    #[must_use]
    pub fn enabled_features(&self, ctx: EntitlementContext) -> Vec<Feature> {
        if self.bypasses_features(ctx) {
            return Feature::ALL.to_vec();
        }
        features::enabled_features(ctx.tier)
    }

    #[must_use]
    pub fn usage_limit(&self, ctx: EntitlementContext, resource_kind: &str) -> UsageLimit {
        if self.bypasses_limits(ctx) {
            return UsageLimit::Unbounded;
        }
        usage_limits::limit_for(ctx.tier, resource_kind)
    }

    #[must_use]
    pub fn can_add_resource(
        &self,
        ctx: EntitlementContext,
        resource_kind: &str,
        current_count: u32,
    ) -> bool {
        self.usage_limit(ctx, resource_kind).allows(current_count)
    }

    /// Headroom left for `resource_kind` after `current_count` records,
    /// honoring the admin limit bypass.
    #[must_use]
    pub fn remaining(
        &self,
        ctx: EntitlementContext,
        resource_kind: &str,
        current_count: u32,
    ) -> UsageLimit {
        self.usage_limit(ctx, resource_kind)
            .remaining(current_count)
    }

    /// Enabled modules the context may open, sorted by key.
    ///
    /// A module is accessible when its tier gate passes (or the admin feature
    /// bypass applies), every required feature is usable and its direct
    /// dependencies are present and enabled.
    #[must_use]
    pub fn accessible_modules<'r>(
        &self,
        registry: &'r ModuleRegistry,
        ctx: EntitlementContext,
    ) -> Vec<&'r ModuleConfig> {
        let candidates = if self.bypasses_features(ctx) {
            registry.get_enabled()
        } else {
            registry.get_by_tier(ctx.tier)
        };

        let mut modules: Vec<&ModuleConfig> = candidates
            .into_iter()
            .filter(|module| {
                module
                    .required_features
                    .iter()
                    .all(|feature| self.allows(ctx, *feature))
            })
            .filter(|module| registry.check_dependencies(&module.key))
            .collect();
        modules.sort_by(|a, b| a.key.cmp(&b.key));
        modules
    }

    /// Lowest tier at which `module_key` becomes accessible, ignoring role.
    ///
    /// `None` when the module is absent, disabled, or no tier satisfies both
    /// its tier gate and its required features.
    #[must_use]
    pub fn module_unlock_tier(&self, registry: &ModuleRegistry, module_key: &str) -> Option<Tier> {
        let module = registry.get(module_key).filter(|m| m.enabled)?;
        Tier::ALL.into_iter().find(|tier| {
            module.grants_tier(*tier)
                && module
                    .required_features
                    .iter()
                    .all(|feature| features::grants(*feature, *tier))
        })
    }
}
