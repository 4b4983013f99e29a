use std::fmt;

/// A remote-tracking branch, as listed for one remote
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchRef {
    pub remote: String,
    pub name: String,
}

impl BranchRef {
    /// Create a new branch reference
    pub fn new(remote: impl Into<String>, name: impl Into<String>) -> Self {
        BranchRef {
            remote: remote.into(),
            name: name.into(),
        }
    }

    /// Full reference name, e.g. "refs/remotes/origin/release/1.2"
    pub fn full_ref(&self) -> String {
        format!("refs/remotes/{}/{}", self.remote, self.name)
    }
}

impl fmt::Display for BranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.name)
    }
}
