//! Domain layer for the entitlements module.

pub mod catalog;
pub mod features;
pub mod local_client;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod usage_limits;
pub mod visibility;

pub use local_client::LocalClient;
pub use registry::ModuleRegistry;
pub use resolver::{EntitlementResolver, ResolverPolicy};
pub use service::Service;
