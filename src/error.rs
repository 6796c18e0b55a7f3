use thiserror::Error;

/// The caller-supplied current version is not a `MAJOR.MINOR.PATCH` string.
///
/// This is the only error the public check operation propagates: it signals
/// caller misuse, unlike registry or cache failures which are swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported format for current version, supported format: 0.0.0 (semver)")]
pub struct FormatError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache read/write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt cache entry: {0}")]
    Corrupt(#[from] serde_json::Error),
}
