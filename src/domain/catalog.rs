use crate::domain::{BranchRef, ReleaseIdentifierSet, Version};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Release branches of one remote, keyed by the version their names encode.
///
/// Built once per resolution from the remote branch listing and never
/// mutated afterwards. Branches whose names carry no release identifier, or
/// whose remainder does not parse as a version, are left out. When several
/// branches parse to the same version the first one in the listing is kept.
#[derive(Debug, Clone, Default)]
pub struct BranchCatalog {
    entries: BTreeMap<Version, BranchRef>,
}

impl BranchCatalog {
    /// Build a catalog from a remote's branch names (without the remote prefix)
    pub fn build<I, S>(remote: &str, branch_names: I, identifiers: &ReleaseIdentifierSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeMap::new();

        for name in branch_names {
            let name = name.as_ref();
            let Some(version) = Version::from_branch_name(name, identifiers) else {
                continue;
            };

            match entries.entry(version) {
                Entry::Vacant(slot) => {
                    slot.insert(BranchRef::new(remote, name));
                }
                Entry::Occupied(kept) => {
                    debug!(
                        version = %kept.key(),
                        kept = %kept.get().name,
                        dropped = name,
                        "duplicate release version, keeping first branch"
                    );
                }
            }
        }

        debug!(remote, releases = entries.len(), "built release catalog");
        BranchCatalog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, version: &Version) -> Option<&BranchRef> {
        self.entries.get(version)
    }

    /// Releases newest first, the order in which they are scanned
    pub fn scan_order(&self) -> impl Iterator<Item = (&Version, &BranchRef)> {
        self.entries.iter().rev()
    }

    /// Versions newest first
    pub fn versions_descending(&self) -> Vec<Version> {
        self.entries.keys().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> ReleaseIdentifierSet {
        ReleaseIdentifierSet::new(["release/", "release-"])
    }

    #[test]
    fn test_build_filters_non_release_branches() {
        let catalog = BranchCatalog::build(
            "origin",
            ["develop", "main", "release/1.0.0", "feature/x", "release-2.0.0", "release/next"],
            &ids(),
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(&Version::new(1, 0, 0)),
            Some(&BranchRef::new("origin", "release/1.0.0"))
        );
        assert_eq!(
            catalog.get(&Version::new(2, 0, 0)),
            Some(&BranchRef::new("origin", "release-2.0.0"))
        );
    }

    #[test]
    fn test_duplicate_versions_keep_first_seen() {
        let catalog = BranchCatalog::build(
            "origin",
            ["release-1.2", "release/1.2.0", "release/v1.2"],
            &ids(),
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(&Version::new(1, 2, 0)).map(|b| b.name.as_str()),
            Some("release-1.2")
        );
    }

    #[test]
    fn test_scan_order_is_descending() {
        let catalog = BranchCatalog::build(
            "origin",
            ["release/9.9", "release/10.0", "release/1.0", "release/10.0-rc.1"],
            &ids(),
        );
        let order: Vec<String> = catalog.scan_order().map(|(v, _)| v.to_string()).collect();
        assert_eq!(order, vec!["10.0", "10.0-rc.1", "9.9", "1.0"]);
    }

    #[test]
    fn test_empty_inputs() {
        let catalog = BranchCatalog::build("origin", Vec::<String>::new(), &ids());
        assert!(catalog.is_empty());

        let catalog = BranchCatalog::build(
            "origin",
            ["release/1.0"],
            &ReleaseIdentifierSet::default(),
        );
        assert!(catalog.is_empty());
    }
}
