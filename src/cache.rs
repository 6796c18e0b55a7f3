//! Time-gated check cache
//!
//! One JSON record per identifier (`package-name@current-version`), each
//! holding the epoch-millisecond timestamp of the last performed check.
//! The gate decides whether that record is stale enough to justify a new
//! registry fetch.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::MILLIS_PER_HOUR;
use crate::error::CacheError;

/// A persisted check record: when its identifier was last checked,
/// in milliseconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub last_checked: i64,
}

/// Trait for persisting per-identifier check timestamps
#[cfg_attr(test, automock)]
pub trait CacheStore: Send + Sync {
    /// Load the entry for `identifier`, or `None` if none was ever stored
    fn load(&self, identifier: &str) -> Result<Option<CacheEntry>, CacheError>;

    /// Persist `entry` for `identifier`, overwriting any previous one
    fn store(&self, identifier: &str, entry: CacheEntry) -> Result<(), CacheError>;
}

/// File-backed store: one `<identifier>.json` record per identifier under a
/// private directory, created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Deterministic single-component file name for an identifier.
    /// Path separators in scoped package names (`@scope/name@1.0.0`) are
    /// percent-encoded so every record stays directly inside the cache
    /// directory.
    fn entry_path(&self, identifier: &str) -> PathBuf {
        let file_name = identifier.replace('\\', "%5C").replace('/', "%2F");
        self.dir.join(format!("{file_name}.json"))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(crate::config::cache_dir())
    }
}

impl CacheStore for FileStore {
    fn load(&self, identifier: &str) -> Result<Option<CacheEntry>, CacheError> {
        let raw = match fs::read_to_string(self.entry_path(identifier)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn store(&self, identifier: &str, entry: CacheEntry) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(identifier), serde_json::to_string(&entry)?)?;
        Ok(())
    }
}

/// Decides whether a check is due for an identifier, refreshing the stored
/// timestamp whenever it says yes.
pub struct CacheGate {
    store: Arc<dyn CacheStore>,
}

impl CacheGate {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Whether a registry check is due for `identifier`.
    ///
    /// With caching disabled this is always true and the store is never
    /// touched. Otherwise a check is due when no usable entry exists, the
    /// stored timestamp is zero, or more than `cache_time_hours` has elapsed
    /// since it. Saying "due" writes a fresh timestamp immediately, before
    /// any fetch is attempted, so a failed fetch still consumes the window
    /// instead of turning into a retry storm against the registry.
    pub fn should_check(&self, enabled: bool, cache_time_hours: f64, identifier: &str) -> bool {
        if !enabled {
            return true;
        }

        let lifetime_ms = (cache_time_hours * MILLIS_PER_HOUR) as i64;

        let last_checked = match self.store.load(identifier) {
            Ok(entry) => entry.map(|e| e.last_checked),
            Err(e) => {
                warn!("Unreadable cache entry for {}: {}", identifier, e);
                None
            }
        };

        let now = current_timestamp_ms();

        // Saturating keeps a tampered record with an extreme timestamp in
        // the "due" branch instead of overflowing.
        if let Some(last) = last_checked
            && last != 0
            && now.saturating_sub(last) <= lifetime_ms
        {
            debug!("Cache still fresh for {}", identifier);
            return false;
        }

        if let Err(e) = self.store.store(identifier, CacheEntry { last_checked: now }) {
            warn!("Failed to write cache entry for {}: {}", identifier, e);
        }

        true
    }
}

/// Current timestamp in milliseconds since UNIX epoch
fn current_timestamp_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time before UNIX epoch")
        .as_millis() as i64
}
