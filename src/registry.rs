//! Registry abstraction
//!
//! A registry resolves a package name to the version string it currently
//! publishes as "latest". Implementations live in [`crate::registries`].

#[cfg(test)]
use mockall::automock;

use crate::error::RegistryError;

/// Trait for querying a package registry for the latest published version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetch the latest published version string for `package_name`
    async fn fetch_latest(&self, package_name: &str) -> Result<String, RegistryError>;
}
