//! Error types for entitlement resolution.
//!
//! Most lookups never fail: unknown features, resource kinds and session tiers
//! resolve to the most restrictive answer instead. These errors only surface
//! at strict boundaries (configuration parsing) and from the explicit
//! transitive dependency check.

use thiserror::Error;

/// Errors that can occur during entitlement operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntitlementsError {
    /// Tier string outside the catalog
    #[error("Unknown tier: '{value}'")]
    UnknownTier {
        /// Raw tier value as received
        value: String,
    },

    /// Module key is not registered
    #[error("Module not found: {key}")]
    ModuleNotFound {
        /// Module key
        key: String,
    },

    /// A declared dependency is not registered
    #[error("Module '{module}' depends on missing module '{dependency}'")]
    MissingDependency {
        /// Module declaring the dependency
        module: String,
        /// Dependency key that did not resolve
        dependency: String,
    },

    /// A declared dependency is registered but disabled
    #[error("Module '{module}' depends on disabled module '{dependency}'")]
    DisabledDependency {
        /// Module declaring the dependency
        module: String,
        /// Disabled dependency key
        dependency: String,
    },

    /// The dependency graph loops back onto a module already on the path
    #[error("Cyclic module dependency: {}", .path.join(" -> "))]
    CyclicDependency {
        /// Keys along the cycle, first and last entries are the same module
        path: Vec<String>,
    },
}

impl EntitlementsError {
    /// Create an unknown tier error.
    pub fn unknown_tier(value: impl Into<String>) -> Self {
        Self::UnknownTier {
            value: value.into(),
        }
    }

    /// Create a module not found error.
    pub fn module_not_found(key: impl Into<String>) -> Self {
        Self::ModuleNotFound { key: key.into() }
    }

    /// Create a missing dependency error.
    pub fn missing_dependency(module: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self::MissingDependency {
            module: module.into(),
            dependency: dependency.into(),
        }
    }

    /// Create a disabled dependency error.
    pub fn disabled_dependency(module: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self::DisabledDependency {
            module: module.into(),
            dependency: dependency.into(),
        }
    }

    /// Create a cyclic dependency error from the keys along the cycle.
    #[must_use]
    pub fn cyclic(path: Vec<String>) -> Self {
        Self::CyclicDependency { path }
    }
}
