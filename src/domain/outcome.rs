use crate::domain::Version;
use std::fmt;

pub const COMMIT_UNKNOWN_MESSAGE: &str = "No such hash in the root of this repo";
pub const NO_FIXED_VERSION_MESSAGE: &str = "No fixed version found";

/// Terminal answer of a fix-version resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixVersionResult {
    /// Earliest release whose branch already contains the commit
    Fixed(Version),
    /// The commit reference does not resolve in the repository
    CommitUnknown,
    /// The commit exists but no scanned release contains it
    NoFixedVersion,
}

impl FixVersionResult {
    pub fn version(&self) -> Option<&Version> {
        match self {
            FixVersionResult::Fixed(version) => Some(version),
            _ => None,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, FixVersionResult::Fixed(_))
    }
}

impl fmt::Display for FixVersionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixVersionResult::Fixed(version) => write!(f, "{}", version),
            FixVersionResult::CommitUnknown => write!(f, "{}", COMMIT_UNKNOWN_MESSAGE),
            FixVersionResult::NoFixedVersion => write!(f, "{}", NO_FIXED_VERSION_MESSAGE),
        }
    }
}

/// Result of one scan together with what the scan observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub result: FixVersionResult,
    /// Contiguous run of releases containing the commit, newest first
    pub confirmed: Vec<Version>,
    /// Number of ancestry queries issued
    pub queries: usize,
}

impl ScanReport {
    pub fn new(result: FixVersionResult, confirmed: Vec<Version>, queries: usize) -> Self {
        ScanReport {
            result,
            confirmed,
            queries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FixVersionResult::Fixed(Version::new(1, 4, 0)).to_string(),
            "1.4.0"
        );
        assert_eq!(
            FixVersionResult::CommitUnknown.to_string(),
            "No such hash in the root of this repo"
        );
        assert_eq!(
            FixVersionResult::NoFixedVersion.to_string(),
            "No fixed version found"
        );
    }

    #[test]
    fn test_not_found_outcomes_are_distinct() {
        assert_ne!(FixVersionResult::CommitUnknown, FixVersionResult::NoFixedVersion);
        assert!(FixVersionResult::CommitUnknown.version().is_none());
        assert!(!FixVersionResult::NoFixedVersion.is_fixed());
    }

    #[test]
    fn test_version_accessor() {
        let result = FixVersionResult::Fixed(Version::new(2, 0, 0));
        assert!(result.is_fixed());
        assert_eq!(result.version(), Some(&Version::new(2, 0, 0)));
    }
}
