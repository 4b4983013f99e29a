//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the three repository
//! queries fix-version resolution needs, allowing the scanner to run against
//! a real repository or a scripted mock.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use which_fix_version::git::Repository;
//! # use which_fix_version::domain::BranchRef;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let branches = repo.list_remote_branches("origin")?;
//! if let Some(commit) = repo.resolve_root_commit("4f2a9c1")? {
//!     let branch = BranchRef::new("origin", "release/1.0");
//!     let present = repo.is_commit_present_on_branch(commit, &branch)?;
//!     println!("{} branches, present on release/1.0: {}", branches.len(), present);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::BranchRef;
use crate::error::Result;
use git2::Oid;

/// Repository queries consumed by fix-version resolution
///
/// All methods are read-only. For a fixed repository state they must answer
/// deterministically, since the scanner draws conclusions from the order in
/// which it asks.
///
/// ## Error Handling
///
/// Failures of the underlying git layer are returned as
/// [crate::error::WhichFixError] and abort the whole resolution. Answers
/// like "no such commit" are not errors and are expressed in the return type.
pub trait Repository {
    /// List the branches of a remote
    ///
    /// Names are returned without the `<remote>/` prefix and exclude the
    /// symbolic `HEAD` entry.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    fn list_remote_branches(&self, remote: &str) -> Result<Vec<String>>;

    /// Resolve a user-supplied commit reference to a commit id
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - The commit the reference names
    /// * `Ok(None)` - The reference names no commit in this repository
    /// * `Err` - The lookup itself failed
    fn resolve_root_commit(&self, commit_ref: &str) -> Result<Option<Oid>>;

    /// Whether `commit` is the tip of `branch` or one of its ancestors
    fn is_commit_present_on_branch(&self, commit: Oid, branch: &BranchRef) -> Result<bool>;
}
