//! Domain service for the entitlements module.
//!
//! Owns the module registry for the lifetime of the application. The startup
//! routine populates it; request handlers only read.

use entitlements_sdk::{EntitlementContext, EntitlementsError, ModuleConfig, NavItem, Tier, Widget};
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::{info, warn};

use super::catalog::builtin_modules;
use super::registry::ModuleRegistry;
use super::resolver::{EntitlementResolver, ResolverPolicy};
use super::visibility;
use crate::config::{ConfigError, EntitlementsConfig};

/// Entitlements service.
///
/// Shared as `Arc<Service>` between every consumer of the module.
pub struct Service {
    registry: RwLock<ModuleRegistry>,
    resolver: EntitlementResolver,
}

impl Service {
    /// Creates a service over an already populated registry.
    #[must_use]
    pub fn new(registry: ModuleRegistry, policy: ResolverPolicy) -> Self {
        Self {
            registry: RwLock::new(registry),
            resolver: EntitlementResolver::new(policy),
        }
    }

    /// Builds a fresh registry from configuration.
    ///
    /// Population order: built-in catalog, configured modules, then
    /// `disabled_modules` switches. Later registrations replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidModule`] if a configured module fails
    /// validation.
    pub fn from_config(config: &EntitlementsConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = ModuleRegistry::new();
        if config.builtin_modules {
            for module in builtin_modules() {
                registry.register(module);
            }
        }
        for module in &config.modules {
            registry.register(module.clone());
        }
        for key in &config.disabled_modules {
            let Some(module) = registry.get(key).cloned() else {
                warn!(module = %key, "Cannot disable unregistered module");
                continue;
            };
            registry.register(module.enabled(false));
        }

        let policy = ResolverPolicy::from(config);
        info!(
            modules = registry.len(),
            admin_bypasses_features = policy.admin_bypasses_features,
            admin_bypasses_limits = policy.admin_bypasses_limits,
            "Entitlements service initialized"
        );
        Ok(Self::new(registry, policy))
    }

    #[must_use]
    pub fn resolver(&self) -> &EntitlementResolver {
        &self.resolver
    }

    /// Read access to the registry. Do not hold the guard across calls that
    /// register or unregister modules.
    pub fn registry(&self) -> RwLockReadGuard<'_, ModuleRegistry> {
        self.registry.read()
    }

    /// Insert or replace a module after startup.
    pub fn register_module(&self, config: ModuleConfig) {
        self.registry.write().register(config);
    }

    #[must_use]
    pub fn unregister_module(&self, key: &str) -> Option<ModuleConfig> {
        self.registry.write().unregister(key)
    }

    /// Owned snapshot of the modules the context may open, sorted by key.
    #[must_use]
    pub fn accessible_modules(&self, ctx: EntitlementContext) -> Vec<ModuleConfig> {
        let registry = self.registry.read();
        self.resolver
            .accessible_modules(&registry, ctx)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn module_unlock_tier(&self, module_key: &str) -> Option<Tier> {
        self.resolver
            .module_unlock_tier(&self.registry.read(), module_key)
    }

    /// Strict transitive dependency check.
    ///
    /// # Errors
    ///
    /// See [`ModuleRegistry::check_dependencies_transitive`].
    pub fn check_module_dependencies(&self, module_key: &str) -> Result<(), EntitlementsError> {
        self.registry
            .read()
            .check_dependencies_transitive(module_key)
    }

    #[must_use]
    pub fn visible_nav_items(&self, ctx: EntitlementContext) -> Vec<NavItem> {
        visibility::visible_nav_items(&self.resolver, ctx)
    }

    #[must_use]
    pub fn visible_widgets(&self, ctx: EntitlementContext) -> Vec<Widget> {
        visibility::visible_widgets(&self.resolver, ctx)
    }
}
