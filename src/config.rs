use std::path::PathBuf;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default cache lifetime in hours (one day)
pub const DEFAULT_CACHE_TIME_HOURS: f64 = 24.0;

/// One hour expressed in milliseconds, as used by the cache gate
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Returns the path to the cache directory for update-hint.
/// Uses $XDG_CACHE_HOME/update-hint if XDG_CACHE_HOME is set,
/// otherwise falls back to ~/.cache/update-hint,
/// or ./update-hint if neither is available.
pub fn cache_dir() -> PathBuf {
    cache_dir_with_env(std::env::var("XDG_CACHE_HOME").ok(), dirs::home_dir())
}

fn cache_dir_with_env(xdg_cache_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let cache_dir = xdg_cache_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cache")))
        .unwrap_or_else(|| PathBuf::from("."));

    cache_dir.join("update-hint")
}
