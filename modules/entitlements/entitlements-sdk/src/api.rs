//! Public API trait for entitlement queries.
//!
//! This is the surface UI gates, navigation filtering and usage-limit checks
//! consume. Every call is synchronous and side-effect free; the caller passes
//! the request's [`EntitlementContext`] each time.

use crate::{
    EntitlementContext, EntitlementsError, Feature, GateDecision, ModuleConfig, NavItem, Tier,
    UsageLimit, Widget,
};

/// Public API trait for entitlement resolution.
///
/// String keys (`feature_key`, `resource_kind`) are resolved fail-closed:
/// an undeclared feature is never granted and an undeclared resource kind has
/// a limit of zero.
///
/// # Example
///
/// ```ignore
/// let client: Arc<dyn EntitlementsClient> = ...;
/// let ctx = EntitlementContext::from_session(&session.tier, &session.role);
///
/// if !client.can_use_feature(ctx, "ai_categorization") {
///     let tier = client.required_tier_for("ai_categorization");
///     // render "Upgrade to {tier}"
/// }
/// ```
pub trait EntitlementsClient: Send + Sync {
    /// Whether the context may use the feature. Admins bypass tier gates when
    /// the policy allows it.
    fn can_use_feature(&self, ctx: EntitlementContext, feature_key: &str) -> bool;

    /// Allowed, or blocked together with the tier that would unlock it.
    fn gate_feature(&self, ctx: EntitlementContext, feature_key: &str) -> GateDecision;

    /// Lowest tier granting the feature; the highest tier for unknown keys.
    fn required_tier_for(&self, feature_key: &str) -> Tier;

    /// Features granted to the context, in declaration order.
    fn enabled_features(&self, ctx: EntitlementContext) -> Vec<Feature>;

    /// Cap on records of `resource_kind` for the context.
    fn usage_limit(&self, ctx: EntitlementContext, resource_kind: &str) -> UsageLimit;

    /// Whether one more record fits after `current_count` existing ones.
    fn can_add_resource(
        &self,
        ctx: EntitlementContext,
        resource_kind: &str,
        current_count: u32,
    ) -> bool;

    /// Records of `resource_kind` still creatable after `current_count`
    /// existing ones. Saturates at zero.
    fn remaining(
        &self,
        ctx: EntitlementContext,
        resource_kind: &str,
        current_count: u32,
    ) -> UsageLimit;

    /// Next tier above `tier`, `None` at the top.
    fn upgrade_suggestion(&self, tier: Tier) -> Option<Tier>;

    /// Enabled modules the context may open, sorted by key.
    fn accessible_modules(&self, ctx: EntitlementContext) -> Vec<ModuleConfig>;

    /// Strict transitive dependency check for a registered module.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The module is not registered
    /// - A dependency anywhere in the graph is missing or disabled
    /// - The dependency graph contains a cycle
    fn check_module_dependencies(&self, module_key: &str) -> Result<(), EntitlementsError>;

    /// Navigation entries visible to the context.
    fn visible_nav_items(&self, ctx: EntitlementContext) -> Vec<NavItem>;

    /// Dashboard widgets visible to the context.
    fn visible_widgets(&self, ctx: EntitlementContext) -> Vec<Widget>;
}
