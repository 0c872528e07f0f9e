use crate::error::{LatestReleaseError, Result};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TAG_PREFIX: &str = "v";
pub const DEFAULT_MAX_COMMITS_TO_SCAN: usize = 500;

/// Search scope for release resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Consider every indexed release in the repository
    Repo,
    /// Restrict candidates to the ancestry of the configured branch
    Branch,
}

impl FromStr for Scope {
    type Err = LatestReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "repo" => Ok(Scope::Repo),
            // "all" is a historical alias for branch scope
            "branch" | "all" => Ok(Scope::Branch),
            other => Err(LatestReleaseError::config(format!(
                "Invalid search_scope '{}'. Valid values: repo, branch, all",
                other
            ))),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Repo => write!(f, "repo"),
            Scope::Branch => write!(f, "branch"),
        }
    }
}

/// Validated runtime configuration
///
/// Built once at process start from CLI flags and their bound environment
/// variables, then passed by reference into the resolution core. Construction
/// fails before any network access is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository slug in "owner/name" form
    pub repository: String,
    /// Branch to walk in branch scope
    pub branch: String,
    /// Optional access token for the provider
    pub token: Option<String>,
    /// Exact prefix a version tag must carry
    pub tag_prefix: String,
    pub scope: Scope,
    /// Ceiling on commits walked in branch scope
    pub max_commits_to_scan: usize,
}

impl Config {
    /// Validate raw inputs into a configuration
    ///
    /// # Arguments
    /// * `repository` - Repository slug, must contain "owner/name"
    /// * `branch` - Branch name or full ref; a "refs/heads/" prefix is stripped
    /// * `token` - Optional provider token
    /// * `tag_prefix` - Required tag prefix (may be empty)
    /// * `scope` - One of "repo", "branch", "all"
    /// * `max_commits_to_scan` - Ceiling for the branch-scope commit walk
    pub fn new(
        repository: impl Into<String>,
        branch: &str,
        token: Option<String>,
        tag_prefix: impl Into<String>,
        scope: &str,
        max_commits_to_scan: usize,
    ) -> Result<Self> {
        let repository = repository.into();
        if repository.split('/').filter(|part| !part.is_empty()).count() != 2 {
            return Err(LatestReleaseError::config(format!(
                "Invalid repository '{}': expected owner/name",
                repository
            )));
        }
        if max_commits_to_scan == 0 {
            return Err(LatestReleaseError::config(
                "max_commits_to_scan must be greater than 0",
            ));
        }

        Ok(Config {
            repository,
            branch: normalize_branch(branch),
            token,
            tag_prefix: tag_prefix.into(),
            scope: scope.parse()?,
            max_commits_to_scan,
        })
    }
}

/// Accept both a bare branch name and a full "refs/heads/..." ref
fn normalize_branch(branch: &str) -> String {
    branch
        .strip_prefix("refs/heads/")
        .unwrap_or(branch)
        .to_string()
}
