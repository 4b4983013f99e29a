use crate::cancel::CancellationToken;
use crate::domain::{BranchCatalog, FixVersionResult, ScanReport};
use crate::error::{Result, WhichFixError};
use crate::git::Repository;
use tracing::{debug, info};

/// Finds the earliest release whose branch contains a commit.
///
/// Releases are walked newest first. Every release containing the commit is
/// collected until the first release that does not, after which the walk
/// stops: release branches are assumed cumulative, so a gap below a run of
/// hits means the older releases predate the fix. Misses before the first
/// hit do not stop the walk. The answer is the oldest release of the run.
pub struct FixVersionScanner<'a, R: Repository> {
    repo: &'a R,
    cancel: CancellationToken,
}

impl<'a, R: Repository> FixVersionScanner<'a, R> {
    /// Create a new scanner over a repository
    pub fn new(repo: &'a R) -> Self {
        FixVersionScanner {
            repo,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop issuing queries once `cancel` fires
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Scan `catalog` for the earliest release containing `commit_ref`
    ///
    /// # Returns
    /// * `Ok(ScanReport)` - The terminal outcome plus the confirmed run
    /// * `Err(WhichFixError::Cancelled)` - The token fired mid-scan
    /// * `Err` - A repository query failed
    pub fn scan(&self, commit_ref: &str, catalog: &BranchCatalog) -> Result<ScanReport> {
        if catalog.is_empty() {
            info!("no release branches to scan");
            return Ok(ScanReport::new(FixVersionResult::NoFixedVersion, Vec::new(), 0));
        }

        self.check_cancelled()?;
        let Some(root) = self.repo.resolve_root_commit(commit_ref)? else {
            info!(commit = commit_ref, "commit does not resolve");
            return Ok(ScanReport::new(FixVersionResult::CommitUnknown, Vec::new(), 0));
        };
        debug!(commit = commit_ref, oid = %root, "resolved root commit");

        let mut confirmed = Vec::new();
        let mut queries = 0;

        for (version, branch) in catalog.scan_order() {
            self.check_cancelled()?;

            queries += 1;
            let present = self.repo.is_commit_present_on_branch(root, branch)?;
            debug!(version = %version, branch = %branch, present, "checked release branch");

            if present {
                confirmed.push(version.clone());
            } else if !confirmed.is_empty() {
                debug!(version = %version, "confirmed run ended");
                break;
            }
        }

        let result = match confirmed.last() {
            Some(oldest) => FixVersionResult::Fixed(oldest.clone()),
            None => FixVersionResult::NoFixedVersion,
        };
        info!(
            commit = commit_ref,
            result = %result,
            queries,
            releases = catalog.len(),
            "scan finished"
        );

        Ok(ScanReport::new(result, confirmed, queries))
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(WhichFixError::Cancelled);
        }
        Ok(())
    }
}
