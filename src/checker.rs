//! Update check orchestration
//!
//! Ties the cache gate, version format, registry, and comparator together
//! into the single entry point callers use.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::cache::{CacheGate, CacheStore, FileStore};
use crate::compare::{CheckOutcome, diff};
use crate::config::DEFAULT_CACHE_TIME_HOURS;
use crate::error::FormatError;
use crate::format::Triplet;
use crate::registries::NpmRegistry;
use crate::registry::Registry;

/// Options controlling how often a check actually hits the registry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptions {
    /// Whether the time gate applies at all. When false every call fetches.
    pub cache: bool,
    /// How many hours a performed check stays fresh
    pub cache_time: f64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            cache: true,
            cache_time: DEFAULT_CACHE_TIME_HOURS,
        }
    }
}

/// Checks whether a newer version of a package has been published
pub struct UpdateChecker {
    registry: Arc<dyn Registry>,
    gate: CacheGate,
}

impl UpdateChecker {
    /// Creates a checker against the public npm registry, persisting check
    /// timestamps under the user cache directory
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(NpmRegistry::default()),
            Arc::new(FileStore::default()),
        )
    }

    /// Creates a checker from an explicit registry and store
    pub fn with_parts(registry: Arc<dyn Registry>, store: Arc<dyn CacheStore>) -> Self {
        Self {
            registry,
            gate: CacheGate::new(store),
        }
    }

    /// Check whether a newer version of `package_name` than `current_version`
    /// is published.
    ///
    /// Returns [`CheckOutcome::Unchecked`] when the time gate says the last
    /// check is still fresh, and also when the registry cannot be reached or
    /// answers with something unusable; those failures are logged and
    /// swallowed so an unavailable registry never breaks the caller. The only
    /// error is [`FormatError`], for a `current_version` that does not start
    /// with `major.minor.patch`.
    pub async fn check(
        &self,
        package_name: &str,
        current_version: &str,
        options: &CheckOptions,
    ) -> Result<CheckOutcome, FormatError> {
        let identifier = format!("{package_name}@{current_version}");

        // The gate runs before version validation, so even a malformed
        // current version consumes the check window.
        if !self
            .gate
            .should_check(options.cache, options.cache_time, &identifier)
        {
            debug!("Skipping registry check for {}", identifier);
            return Ok(CheckOutcome::Unchecked);
        }

        let current = Triplet::parse(current_version)?;

        let latest_raw = match self.registry.fetch_latest(package_name).await {
            Ok(version) => version,
            Err(e) => {
                error!("Failed to fetch latest version of {}: {}", package_name, e);
                return Ok(CheckOutcome::Unchecked);
            }
        };

        let latest = match Triplet::parse(&latest_raw) {
            Ok(latest) => latest,
            Err(_) => {
                warn!(
                    "Registry reported unusable latest version for {}: {}",
                    package_name, latest_raw
                );
                return Ok(CheckOutcome::Unchecked);
            }
        };

        Ok(diff(
            &current,
            current_version,
            &latest,
            &latest_raw,
            package_name,
        ))
    }
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new()
    }
}
