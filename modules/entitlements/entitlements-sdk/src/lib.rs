//! Entitlements SDK
//!
//! This crate provides the public API for the `entitlements` module:
//!
//! - [`Tier`] - the closed, ordered subscription tier catalog
//! - [`EntitlementsClient`] - Public API trait for UI gates and navigation filtering
//! - Domain models for features, resource kinds, usage limits and modules
//! - [`EntitlementsError`] - Error types
//!
//! ## Usage
//!
//! Consumers build an [`EntitlementContext`] from the session on every request
//! and pass it into the client:
//!
//! ```
//! # use entitlements_sdk::{EntitlementContext, Role, Tier};
//! let ctx = EntitlementContext::from_session("growth", "user");
//! assert_eq!(ctx.tier, Tier::Growth);
//! assert_eq!(ctx.role, Role::Member);
//!
//! // Unknown tiers fall back to the most restrictive one.
//! let ctx = EntitlementContext::from_session("platinum", "user");
//! assert_eq!(ctx.tier, Tier::Starter);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;
pub mod module_config;
pub mod tier;

// Re-export main types at crate root
pub use api::EntitlementsClient;
pub use error::EntitlementsError;
pub use models::{
    EntitlementContext, Feature, GateDecision, NavItem, ResourceKind, Role, UsageLimit, Widget,
};
pub use module_config::ModuleConfig;
pub use tier::Tier;
