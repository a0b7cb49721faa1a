//! Configuration for the entitlements module.

use std::path::{Path, PathBuf};

use entitlements_sdk::ModuleConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of environment variables overriding configuration keys.
///
/// Nested keys are separated by `__`, e.g.
/// `FINBOARD_ENTITLEMENTS__ADMIN_BYPASSES_LIMITS=true`.
pub const ENV_PREFIX: &str = "FINBOARD_ENTITLEMENTS__";

/// Configuration errors raised while loading or validating entitlements config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("invalid entitlements config: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("invalid module '{key}': {reason}")]
    InvalidModule { key: String, reason: String },
}

impl ConfigError {
    fn invalid_module(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidModule {
            key: key.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Entitlements module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntitlementsConfig {
    /// Admin role passes every feature gate regardless of tier.
    pub admin_bypasses_features: bool,

    /// Admin role ignores usage caps. Off unless product explicitly opts in.
    pub admin_bypasses_limits: bool,

    /// Register the built-in product module catalog before `modules`.
    pub builtin_modules: bool,

    /// Extra or overriding module registrations, applied in order.
    pub modules: Vec<ModuleConfig>,

    /// Module keys re-registered with `enabled = false` after population.
    pub disabled_modules: Vec<String>,
}

impl Default for EntitlementsConfig {
    fn default() -> Self {
        Self {
            admin_bypasses_features: true,
            admin_bypasses_limits: false,
            builtin_modules: true,
            modules: Vec::new(),
            disabled_modules: Vec::new(),
        }
    }
}

impl EntitlementsConfig {
    /// Load configuration from defaults, an optional YAML file and the
    /// environment, in increasing precedence.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, the merged configuration
    /// cannot be deserialized, or a module entry fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;

        tracing::debug!(
            from_file = path.is_some(),
            modules = config.modules.len(),
            "Loaded entitlements config"
        );
        Ok(config)
    }

    /// Structural checks serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidModule`] for an empty key or route, or an
    /// empty `tier_access` list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for module in &self.modules {
            if module.key.trim().is_empty() {
                return Err(ConfigError::invalid_module(
                    &module.key,
                    "key must not be empty",
                ));
            }
            if module.route.trim().is_empty() {
                return Err(ConfigError::invalid_module(
                    &module.key,
                    "route must not be empty",
                ));
            }
            if module.tier_access.is_empty() {
                return Err(ConfigError::invalid_module(
                    &module.key,
                    "tier_access must list at least one tier",
                ));
            }
        }
        Ok(())
    }
}
