//! Product module descriptor.

use serde::{Deserialize, Serialize};

use crate::{Feature, Tier};

/// Static configuration of one product module (e.g. income tracking).
///
/// `dependencies` are module keys, not references. They may name modules
/// that are registered later or never; resolution happens at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Unique module key.
    pub key: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon reference understood by the UI layer.
    #[serde(default)]
    pub icon: String,
    /// Route path the module is mounted on.
    pub route: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Tiers allowed to open the module.
    pub tier_access: Vec<Tier>,
    #[serde(default)]
    pub required_features: Vec<Feature>,
    /// Keys of modules this one relies on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl ModuleConfig {
    /// Create an enabled module open to every tier, with no requirements.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            route: route.into(),
            enabled: true,
            tier_access: Tier::ALL.to_vec(),
            required_features: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Restrict access to the given tiers.
    #[must_use]
    pub fn with_tiers(mut self, tiers: &[Tier]) -> Self {
        self.tier_access = tiers.to_vec();
        self
    }

    /// Restrict access to `min` and every tier above it.
    #[must_use]
    pub fn open_from(self, min: Tier) -> Self {
        let tiers: Vec<Tier> = Tier::ALL.into_iter().filter(|t| *t >= min).collect();
        self.with_tiers(&tiers)
    }

    #[must_use]
    pub fn with_features(mut self, features: &[Feature]) -> Self {
        self.required_features = features.to_vec();
        self
    }

    #[must_use]
    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether `tier` is listed in `tier_access`.
    #[must_use]
    pub fn grants_tier(&self, tier: Tier) -> bool {
        self.tier_access.contains(&tier)
    }
}
