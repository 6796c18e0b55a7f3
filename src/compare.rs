//! Componentwise version comparison

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::format::Triplet;

/// Magnitude of the difference between the current and latest versions.
///
/// Each flag is an independent componentwise comparison (`latest.major >
/// current.major`, and so on for minor and patch), not a semver precedence
/// ordering, so mixed reports such as "higher minor, lower patch" are
/// possible when a registry serves one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReport {
    pub is_major: bool,
    pub is_minor: bool,
    pub is_patch: bool,
    pub latest_version: String,
    pub package_name: String,
}

/// Result of a single update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No check was performed: the cache window is still fresh, or the
    /// registry fetch failed and was swallowed. Carries no version data.
    /// Not to be confused with [`CheckOutcome::UpToDate`], which means a
    /// check ran and found nothing to report.
    Unchecked,
    /// A check ran and the registry's latest version is textually identical
    /// to the current one.
    UpToDate,
    /// A check ran and the version strings differ; the report carries the
    /// componentwise deltas.
    Update(UpdateReport),
}

/// Compare the current version against the registry's latest.
///
/// Raw string equality is evaluated first: identical strings are
/// [`CheckOutcome::UpToDate`] with no numeric comparison at all. Unequal
/// strings always produce a report, even when the triplets are numerically
/// equal (`"1.0.0"` vs `"1.0.00"` yields a report with all flags false).
pub fn diff(
    current: &Triplet,
    current_raw: &str,
    latest: &Triplet,
    latest_raw: &str,
    package_name: &str,
) -> CheckOutcome {
    if current_raw == latest_raw {
        return CheckOutcome::UpToDate;
    }

    CheckOutcome::Update(UpdateReport {
        is_major: latest.major > current.major,
        is_minor: latest.minor > current.minor,
        is_patch: latest.patch > current.patch,
        latest_version: latest_raw.to_string(),
        package_name: package_name.to_string(),
    })
}

// Wire shape: `{}` for Unchecked, `false` for UpToDate, the bare report
// object for Update.
impl Serialize for CheckOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CheckOutcome::Unchecked => serializer.serialize_map(Some(0))?.end(),
            CheckOutcome::UpToDate => serializer.serialize_bool(false),
            CheckOutcome::Update(report) => report.serialize(serializer),
        }
    }
}
