//! Lightweight "you're out of date" checker for packages published on npm
//!
//! Given a package name and the version a project currently uses, this crate
//! asks the registry for the latest published version and reports the
//! magnitude of the difference. Checks are time-gated through a small
//! on-disk cache so repeated calls (one per CLI invocation, editor session,
//! or similar) do not hammer the registry.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Cache    │◀────│   Checker   │────▶│   Registry  │
//! │ (time gate) │     │ (orchestra) │     │   (fetch)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Compare   │
//!                     │ (magnitude) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: Per-identifier check timestamps and the freshness gate
//! - [`checker`]: The [`UpdateChecker`] entry point tying everything together
//! - [`compare`]: Componentwise version difference reports
//! - [`config`]: Cache directory resolution and defaults
//! - [`error`]: Error types for format, registry, and cache failures
//! - [`format`]: `MAJOR.MINOR.PATCH` validation and decomposition
//! - [`registry`]: Registry trait for fetching the latest published version
//! - [`registries`]: Concrete registry implementations (npm)
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), update_hint::FormatError> {
//! use update_hint::{CheckOptions, CheckOutcome};
//!
//! match update_hint::check("left-pad", "1.0.0", &CheckOptions::default()).await? {
//!     CheckOutcome::Update(report) => {
//!         println!("{} {} is out", report.package_name, report.latest_version);
//!     }
//!     CheckOutcome::UpToDate => println!("up to date"),
//!     CheckOutcome::Unchecked => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod checker;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod registries;
pub mod registry;

pub use checker::{CheckOptions, UpdateChecker};
pub use compare::{CheckOutcome, UpdateReport};
pub use error::FormatError;

/// One-shot check against the public npm registry with default wiring.
///
/// Equivalent to building an [`UpdateChecker`] with [`UpdateChecker::new`]
/// and calling [`UpdateChecker::check`] on it.
pub async fn check(
    package_name: &str,
    current_version: &str,
    options: &CheckOptions,
) -> Result<CheckOutcome, FormatError> {
    UpdateChecker::new()
        .check(package_name, current_version, options)
        .await
}
