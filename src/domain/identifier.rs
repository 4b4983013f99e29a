/// Ordered set of branch-name prefixes that mark a branch as a release branch
/// (e.g. "release/", "release-"). Order is kept for deterministic matching but
/// carries no priority beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseIdentifierSet {
    identifiers: Vec<String>,
}

impl ReleaseIdentifierSet {
    /// Build a set from any list of identifiers; blank entries are dropped
    /// and repeated entries keep their first position.
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept: Vec<String> = Vec::new();
        for identifier in identifiers {
            let identifier = identifier.as_ref().trim();
            if identifier.is_empty() || kept.iter().any(|k| k == identifier) {
                continue;
            }
            kept.push(identifier.to_string());
        }

        ReleaseIdentifierSet { identifiers: kept }
    }

    /// Parse the space-separated form used by the interactive prompt
    /// (e.g. "release/ release- hotfix/").
    pub fn from_whitespace_separated(input: &str) -> Self {
        Self::new(input.split_whitespace())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns true if the branch name starts with any configured identifier
    pub fn is_release_branch(&self, branch_name: &str) -> bool {
        self.iter().any(|id| branch_name.starts_with(id))
    }
}

impl std::fmt::Display for ReleaseIdentifierSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifiers.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entries_are_dropped() {
        let set = ReleaseIdentifierSet::new(["release/", "", "   ", "release-"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["release/", "release-"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let set = ReleaseIdentifierSet::new(["release-", "hotfix-", "release-"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["release-", "hotfix-"]);
    }

    #[test]
    fn test_from_whitespace_separated() {
        let set = ReleaseIdentifierSet::from_whitespace_separated("  release/   release- ");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["release/", "release-"]);
        assert_eq!(set.to_string(), "release/ release-");
    }

    #[test]
    fn test_empty_input_gives_empty_set() {
        assert!(ReleaseIdentifierSet::from_whitespace_separated("").is_empty());
    }

    #[test]
    fn test_is_release_branch() {
        let set = ReleaseIdentifierSet::new(["release/"]);
        assert!(set.is_release_branch("release/1.2"));
        assert!(!set.is_release_branch("feature/release/1.2"));
        assert!(!set.is_release_branch("develop"));
    }
}
