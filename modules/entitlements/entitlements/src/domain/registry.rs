//! Product module registry.
//!
//! A module key is either absent or present with exactly one configuration.
//! The registry is a plain value: the application constructs it at startup
//! and hands it to consumers. It performs no locking of its own.

use std::collections::{HashMap, HashSet};

use entitlements_sdk::{EntitlementsError, ModuleConfig, Tier};

/// Registry of product modules keyed by module key.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ModuleConfig>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a module by key.
    ///
    /// Dependencies are not validated here; modules may be registered in any
    /// order.
    pub fn register(&mut self, config: ModuleConfig) {
        let key = config.key.clone();
        if self.modules.insert(key.clone(), config).is_some() {
            tracing::debug!(module = %key, "Replaced existing module registration");
        } else {
            tracing::debug!(module = %key, "Registered module");
        }
    }

    /// Remove a module by key. Removing an absent key is a no-op.
    pub fn unregister(&mut self, key: &str) -> Option<ModuleConfig> {
        let removed = self.modules.remove(key);
        if removed.is_some() {
            tracing::debug!(module = key, "Unregistered module");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ModuleConfig> {
        self.modules.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.modules.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// All registered modules. Iteration order is unspecified.
    #[must_use]
    pub fn get_all(&self) -> Vec<&ModuleConfig> {
        self.modules.values().collect()
    }

    /// All registered modules sorted by key.
    #[must_use]
    pub fn get_all_sorted(&self) -> Vec<&ModuleConfig> {
        let mut all = self.get_all();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }

    /// Modules with `enabled == true`. Iteration order is unspecified.
    #[must_use]
    pub fn get_enabled(&self) -> Vec<&ModuleConfig> {
        self.modules.values().filter(|m| m.enabled).collect()
    }

    /// Whether `tier` is listed in the module's `tier_access`. Absent modules
    /// grant nothing.
    #[must_use]
    pub fn has_access(&self, key: &str, tier: Tier) -> bool {
        self.modules
            .get(key)
            .is_some_and(|module| module.grants_tier(tier))
    }

    /// Enabled modules the tier has access to.
    #[must_use]
    pub fn get_by_tier(&self, tier: Tier) -> Vec<&ModuleConfig> {
        self.get_enabled()
            .into_iter()
            .filter(|module| module.grants_tier(tier))
            .collect()
    }

    /// One-hop dependency check: every listed dependency is present and
    /// enabled.
    ///
    /// Vacuously `true` when the module declares no dependencies or is not
    /// registered. Dependencies of dependencies are not followed, so a cycle
    /// whose links are individually present and enabled still reports `true`.
    /// Use [`Self::check_dependencies_transitive`] for a full graph check.
    #[must_use]
    pub fn check_dependencies(&self, key: &str) -> bool {
        let Some(module) = self.modules.get(key) else {
            return true;
        };
        module
            .dependencies
            .iter()
            .all(|dep| self.modules.get(dep).is_some_and(|m| m.enabled))
    }

    /// Depth-first walk of the full dependency graph below `key`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `key` is not registered
    /// - Any reachable dependency is missing or disabled
    /// - A module is reached again while still on the current path
    pub fn check_dependencies_transitive(&self, key: &str) -> Result<(), EntitlementsError> {
        if !self.modules.contains_key(key) {
            return Err(EntitlementsError::module_not_found(key));
        }
        let mut path = Vec::new();
        let mut verified = HashSet::new();
        self.visit(key, &mut path, &mut verified)
    }

    fn visit<'a>(
        &'a self,
        key: &'a str,
        path: &mut Vec<&'a str>,
        verified: &mut HashSet<&'a str>,
    ) -> Result<(), EntitlementsError> {
        if verified.contains(key) {
            return Ok(());
        }
        if let Some(start) = path.iter().position(|k| *k == key) {
            let mut cycle: Vec<String> = path[start..].iter().map(|k| (*k).to_owned()).collect();
            cycle.push(key.to_owned());
            return Err(EntitlementsError::cyclic(cycle));
        }
        let Some(module) = self.modules.get(key) else {
            return Err(EntitlementsError::module_not_found(key));
        };

        path.push(key);
        for dep in &module.dependencies {
            match self.modules.get(dep) {
                None => return Err(EntitlementsError::missing_dependency(key, dep.as_str())),
                Some(m) if !m.enabled => {
                    return Err(EntitlementsError::disabled_dependency(key, dep.as_str()));
                }
                Some(_) => self.visit(dep, path, verified)?,
            }
        }
        path.pop();
        verified.insert(key);
        Ok(())
    }
}
