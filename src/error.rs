use thiserror::Error;

/// Unified error type for fix-version resolution
#[derive(Error, Debug)]
pub enum WhichFixError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in which-fix-version
pub type Result<T> = std::result::Result<T, WhichFixError>;

impl WhichFixError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        WhichFixError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        WhichFixError::Remote(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        WhichFixError::Branch(msg.into())
    }

    /// True when the error only records that the caller asked us to stop
    pub fn is_cancelled(&self) -> bool {
        matches!(self, WhichFixError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WhichFixError::config("missing remote name");
        assert_eq!(err.to_string(), "Configuration error: missing remote name");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WhichFixError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("object not found");
        let err: WhichFixError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("object not found"));
    }

    #[test]
    fn test_cancelled_is_distinct() {
        assert!(WhichFixError::Cancelled.is_cancelled());
        assert!(!WhichFixError::remote("timeout").is_cancelled());
        assert_eq!(WhichFixError::Cancelled.to_string(), "Resolution cancelled");
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (WhichFixError::config("x"), "Configuration error"),
            (WhichFixError::remote("x"), "Remote operation failed"),
            (WhichFixError::branch("x"), "Branch error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
