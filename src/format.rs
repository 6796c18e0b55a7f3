//! Version string validation and decomposition

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormatError;

/// Leading `MAJOR.MINOR.PATCH` triplet. Deliberately a prefix match:
/// trailing text such as `"1.2.3-beta"` is tolerated, `"v1.2.3"` is not.
static TRIPLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").unwrap());

/// The `(major, minor, patch)` decomposition of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Triplet {
    /// Whether `version` starts with a `MAJOR.MINOR.PATCH` triplet.
    pub fn is_valid(version: &str) -> bool {
        TRIPLET_RE.is_match(version)
    }

    /// Decompose `version` into its leading numeric triplet.
    ///
    /// Only the first three dot-separated fields are read, and a non-numeric
    /// suffix on the third field is cut off, so `"1.2.3-beta"` parses as
    /// `(1, 2, 3)` and `"1.2.3.4"` as `(1, 2, 3)`. A string that fails
    /// [`Triplet::is_valid`] is rejected whole, never partially parsed.
    pub fn parse(version: &str) -> Result<Self, FormatError> {
        let caps = TRIPLET_RE.captures(version).ok_or(FormatError)?;

        let field = |i: usize| caps[i].parse::<u64>().map_err(|_| FormatError);

        Ok(Self {
            major: field(1)?,
            minor: field(2)?,
            patch: field(3)?,
        })
    }
}
