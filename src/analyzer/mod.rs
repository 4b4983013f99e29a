//! Fix-version analysis: catalog construction and the release scan

pub mod fix_version;

pub use fix_version::FixVersionScanner;

use crate::cancel::CancellationToken;
use crate::config::FixVersionConfig;
use crate::domain::{BranchCatalog, ReleaseIdentifierSet, ScanReport};
use crate::error::Result;
use crate::git::Repository;

/// Build the release catalog for one remote of `repo`
pub fn build_catalog<R: Repository>(
    repo: &R,
    remote: &str,
    identifiers: &ReleaseIdentifierSet,
) -> Result<BranchCatalog> {
    let branches = repo.list_remote_branches(remote)?;
    Ok(BranchCatalog::build(remote, &branches, identifiers))
}

/// Resolve the earliest release of `config.remote_name` that contains
/// `config.commit_ref`.
pub fn resolve_fix_version<R: Repository>(
    repo: &R,
    config: &FixVersionConfig,
    cancel: &CancellationToken,
) -> Result<ScanReport> {
    let catalog = build_catalog(repo, &config.remote_name, &config.release_identifiers)?;

    FixVersionScanner::new(repo)
        .with_cancellation(cancel.clone())
        .scan(&config.commit_ref, &catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixVersionResult, Version};
    use crate::git::MockRepository;
    use git2::Oid;

    fn config(commit: &str) -> FixVersionConfig {
        FixVersionConfig {
            commit_ref: commit.to_string(),
            url: None,
            remote_name: "origin".to_string(),
            development_branch: "develop".to_string(),
            release_identifiers: ReleaseIdentifierSet::new(["release/", "release-"]),
        }
    }

    #[test]
    fn test_resolve_fix_version_end_to_end() {
        let oid = Oid::from_bytes(&[5; 20]).unwrap();
        let mut repo = MockRepository::new();
        for branch in ["develop", "release/1.0", "release-1.1", "release/2.0", "feature/x"] {
            repo.add_remote_branch("origin", branch);
        }
        repo.add_commit("abc123", oid);
        repo.mark_present("release/2.0", oid);
        repo.mark_present("release-1.1", oid);

        let report =
            resolve_fix_version(&repo, &config("abc123"), &CancellationToken::new()).unwrap();

        assert_eq!(
            report.result,
            FixVersionResult::Fixed(Version::from_components(vec![1, 1]))
        );
        assert_eq!(
            repo.queried_branches(),
            vec!["release/2.0", "release-1.1", "release/1.0"]
        );
    }

    #[test]
    fn test_resolve_fix_version_other_remote_is_ignored() {
        let oid = Oid::from_bytes(&[6; 20]).unwrap();
        let mut repo = MockRepository::new();
        repo.add_remote_branch("origin", "develop");
        repo.add_remote_branch("upstream", "release/9.0");
        repo.add_commit("abc123", oid);
        repo.mark_present("release/9.0", oid);

        let report =
            resolve_fix_version(&repo, &config("abc123"), &CancellationToken::new()).unwrap();

        assert_eq!(report.result, FixVersionResult::NoFixedVersion);
    }

    #[test]
    fn test_listing_failure_propagates() {
        let repo = MockRepository::new();
        let result = resolve_fix_version(&repo, &config("abc123"), &CancellationToken::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_build_catalog() {
        let mut repo = MockRepository::new();
        repo.add_remote_branch("origin", "release/1.0");
        repo.add_remote_branch("origin", "main");

        let catalog =
            build_catalog(&repo, "origin", &ReleaseIdentifierSet::new(["release/"])).unwrap();

        assert_eq!(catalog.len(), 1);
    }
}
