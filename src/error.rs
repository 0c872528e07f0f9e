use thiserror::Error;

/// Unified error type for git-latest-release operations
#[derive(Error, Debug)]
pub enum LatestReleaseError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository provider error: {0}")]
    Provider(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-latest-release
pub type Result<T> = std::result::Result<T, LatestReleaseError>;

impl LatestReleaseError {
    /// Create a version parsing error with context
    pub fn version(msg: impl Into<String>) -> Self {
        LatestReleaseError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        LatestReleaseError::Config(msg.into())
    }

    /// Create a provider error with context
    pub fn provider(msg: impl Into<String>) -> Self {
        LatestReleaseError::Provider(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatestReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LatestReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(LatestReleaseError::version("test")
            .to_string()
            .contains("Version"));
        assert!(LatestReleaseError::provider("test")
            .to_string()
            .contains("provider"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (LatestReleaseError::config("x"), "Configuration error"),
            (LatestReleaseError::version("x"), "Version parsing error"),
            (LatestReleaseError::provider("x"), "Repository provider error"),
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

    #[test]
    fn test_error_preserves_offending_input() {
        let err = LatestReleaseError::version("Unrecognized version format: 'release-xyz'");
        assert!(err.to_string().contains("release-xyz"));
    }
}
