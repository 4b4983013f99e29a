use crate::cancel::CancellationToken;
use crate::domain::BranchRef;
use crate::error::{Result, WhichFixError};
use crate::git::Repository;
use git2::Oid;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
///
/// Answers are scripted up front; every ancestry query is recorded so tests
/// can assert which branches the scanner asked about, and in what order.
pub struct MockRepository {
    remote_branches: HashMap<String, Vec<String>>,
    commits: HashMap<String, Oid>,
    present: HashMap<String, HashSet<Oid>>,
    failing_branches: HashSet<String>,
    cancel_on: Option<(String, CancellationToken)>,
    queried: RefCell<Vec<String>>,
    resolve_calls: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            remote_branches: HashMap::new(),
            commits: HashMap::new(),
            present: HashMap::new(),
            failing_branches: HashSet::new(),
            cancel_on: None,
            queried: RefCell::new(Vec::new()),
            resolve_calls: Cell::new(0),
        }
    }

    /// Add a branch to a remote's listing, in listing order
    pub fn add_remote_branch(&mut self, remote: impl Into<String>, branch: impl Into<String>) {
        self.remote_branches
            .entry(remote.into())
            .or_default()
            .push(branch.into());
    }

    /// Make a commit reference resolvable
    pub fn add_commit(&mut self, reference: impl Into<String>, oid: Oid) {
        self.commits.insert(reference.into(), oid);
    }

    /// Record that `oid` is reachable from the named branch
    pub fn mark_present(&mut self, branch: impl Into<String>, oid: Oid) {
        self.present.entry(branch.into()).or_default().insert(oid);
    }

    /// Make ancestry queries against the named branch fail
    pub fn fail_on_branch(&mut self, branch: impl Into<String>) {
        self.failing_branches.insert(branch.into());
    }

    /// Fire `token` while the named branch is being queried
    pub fn cancel_on_branch(&mut self, branch: impl Into<String>, token: CancellationToken) {
        self.cancel_on = Some((branch.into(), token));
    }

    /// Branch names passed to the ancestry predicate, in call order
    pub fn queried_branches(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_remote_branches(&self, remote: &str) -> Result<Vec<String>> {
        self.remote_branches
            .get(remote)
            .cloned()
            .ok_or_else(|| WhichFixError::remote(format!("Remote not found: {}", remote)))
    }

    fn resolve_root_commit(&self, commit_ref: &str) -> Result<Option<Oid>> {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        Ok(self.commits.get(commit_ref).copied())
    }

    fn is_commit_present_on_branch(&self, commit: Oid, branch: &BranchRef) -> Result<bool> {
        self.queried.borrow_mut().push(branch.name.clone());

        if let Some((name, token)) = &self.cancel_on {
            if *name == branch.name {
                token.cancel();
            }
        }

        if self.failing_branches.contains(&branch.name) {
            return Err(WhichFixError::branch(format!(
                "Cannot read branch '{}'",
                branch
            )));
        }

        Ok(self
            .present
            .get(&branch.name)
            .is_some_and(|commits| commits.contains(&commit)))
    }
}
