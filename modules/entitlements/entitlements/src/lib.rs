//! Entitlements Module
//!
//! Decides, for a subscription tier, which product modules and features are
//! enabled, which usage limits apply and which tier unlocks a blocked
//! capability.
//!
//! ## Architecture
//!
//! - **Static tables**: feature → allowed tiers, (tier, resource kind) → cap,
//!   UI surface → required feature
//! - **Module registry**: explicitly constructed catalog of product modules,
//!   owned by the application's startup routine
//! - **Resolver**: pure queries over the tables and the registry, with an
//!   admin policy applied on top
//!
//! ## Startup
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use entitlements::{EntitlementsConfig, LocalClient, Service};
//! # use entitlements_sdk::{EntitlementContext, EntitlementsClient};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EntitlementsConfig::load(None)?;
//! let service = Arc::new(Service::from_config(&config)?);
//! let client: Arc<dyn EntitlementsClient> = Arc::new(LocalClient::new(service));
//!
//! let ctx = EntitlementContext::from_session("starter", "user");
//! assert!(!client.can_use_feature(ctx, "ai_categorization"));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Re-export SDK types
pub use entitlements_sdk::*;

pub mod config;
pub mod domain;

#[cfg(test)]
mod config_tests;

pub use config::{ConfigError, EntitlementsConfig};
pub use domain::{EntitlementResolver, LocalClient, ModuleRegistry, ResolverPolicy, Service};
