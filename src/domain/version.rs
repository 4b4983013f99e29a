use crate::domain::ReleaseIdentifierSet;
use regex::Regex;
use semver::Prerelease;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Release version parsed from a branch name.
///
/// Holds any number of numeric components plus an optional semver
/// pre-release. Two versions are always comparable; numerically equal
/// versions such as `1.2` and `1.2.0` compare equal.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
    pre: Option<Prerelease>,
}

fn version_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^(\d+(?:\.\d+)*)(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$").ok()
        })
        .as_ref()
}

impl Version {
    /// Create a plain major.minor.patch version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            components: vec![major, minor, patch],
            pre: None,
        }
    }

    /// Create a version from an arbitrary numeric tuple
    pub fn from_components(components: impl Into<Vec<u64>>) -> Self {
        Version {
            components: components.into(),
            pre: None,
        }
    }

    /// Parse the version part of a branch name (e.g. "1.2.3", "v10.0", "2.0-rc.1").
    ///
    /// Returns `None` when the text is not a dotted numeric tuple with an
    /// optional `-prerelease` and `+build` suffix. Build metadata is accepted
    /// but does not take part in ordering.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.strip_prefix(|c: char| c == 'v' || c == 'V').unwrap_or(text);
        let captures = version_pattern()?.captures(text)?;

        let components = captures
            .get(1)?
            .as_str()
            .split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        let pre = match captures.get(2) {
            Some(m) => Some(Prerelease::new(m.as_str()).ok()?),
            None => None,
        };

        Some(Version { components, pre })
    }

    /// Strip a recognized release identifier from `branch_name` and parse
    /// the remainder.
    ///
    /// Identifiers are tried in order; the first one that both prefixes the
    /// branch name and leaves a parseable remainder wins. Separators between
    /// identifier and version (`/`, `-`, `_`) are skipped.
    pub fn from_branch_name(branch_name: &str, identifiers: &ReleaseIdentifierSet) -> Option<Self> {
        identifiers.iter().find_map(|identifier| {
            let rest = branch_name.strip_prefix(identifier)?;
            let rest = rest.trim_start_matches(|c: char| matches!(c, '/' | '-' | '_'));
            Version::parse(rest)
        })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre.as_ref().map(|p| p.as_str())
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre.is_some()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.components.len().max(other.components.len());
        for i in 0..width {
            let ours = self.components.get(i).copied().unwrap_or(0);
            let theirs = other.components.get(i).copied().unwrap_or(0);
            match ours.cmp(&theirs) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        // A final release outranks any of its pre-releases
        match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(ours), Some(theirs)) => ours.cmp(theirs),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeric: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", numeric.join("."))?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}
