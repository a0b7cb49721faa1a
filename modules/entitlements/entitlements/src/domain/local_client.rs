//! Local client implementation of the entitlements API.

use std::sync::Arc;

use entitlements_sdk::{
    EntitlementContext, EntitlementsClient, EntitlementsError, Feature, GateDecision, ModuleConfig,
    NavItem, Tier, UsageLimit, Widget,
};

use super::service::Service;
use super::{features, usage_limits};

/// Local implementation of the entitlements client.
///
/// This adapter wraps the domain service and implements the SDK trait so
/// consumers can hold an `Arc<dyn EntitlementsClient>`.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    /// Create a new local client wrapping the service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl EntitlementsClient for LocalClient {
    #[tracing::instrument(level = "trace", skip(self), fields(tier = %ctx.tier))]
    fn can_use_feature(&self, ctx: EntitlementContext, feature_key: &str) -> bool {
        self.service.resolver().can_use_feature(ctx, feature_key)
    }

    fn gate_feature(&self, ctx: EntitlementContext, feature_key: &str) -> GateDecision {
        self.service.resolver().gate_feature(ctx, feature_key)
    }

    fn required_tier_for(&self, feature_key: &str) -> Tier {
        features::required_tier_for(feature_key)
    }

    fn enabled_features(&self, ctx: EntitlementContext) -> Vec<Feature> {
        self.service.resolver().enabled_features(ctx)
    }

    fn usage_limit(&self, ctx: EntitlementContext, resource_kind: &str) -> UsageLimit {
        self.service.resolver().usage_limit(ctx, resource_kind)
    }

    #[tracing::instrument(level = "trace", skip(self), fields(tier = %ctx.tier))]
    fn can_add_resource(
        &self,
        ctx: EntitlementContext,
        resource_kind: &str,
        current_count: u32,
    ) -> bool {
        self.service
            .resolver()
            .can_add_resource(ctx, resource_kind, current_count)
    }

    fn remaining(
        &self,
        ctx: EntitlementContext,
        resource_kind: &str,
        current_count: u32,
    ) -> UsageLimit {
        self.service
            .resolver()
            .remaining(ctx, resource_kind, current_count)
    }

    fn upgrade_suggestion(&self, tier: Tier) -> Option<Tier> {
        usage_limits::upgrade_suggestion(tier)
    }

    fn accessible_modules(&self, ctx: EntitlementContext) -> Vec<ModuleConfig> {
        self.service.accessible_modules(ctx)
    }

    fn check_module_dependencies(&self, module_key: &str) -> Result<(), EntitlementsError> {
        self.service.check_module_dependencies(module_key)
    }

    fn visible_nav_items(&self, ctx: EntitlementContext) -> Vec<NavItem> {
        self.service.visible_nav_items(ctx)
    }

    fn visible_widgets(&self, ctx: EntitlementContext) -> Vec<Widget> {
        self.service.visible_widgets(ctx)
    }
}
