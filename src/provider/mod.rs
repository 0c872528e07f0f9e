//! Repository data provider abstraction
//!
//! The resolution core is pure and synchronous; everything that talks to a
//! repository host lives behind the [RepositoryProvider] trait. The concrete
//! implementations are:
//!
//! - [github::GithubProvider]: GitHub REST v3 over a blocking HTTP client
//! - [mock::MockProvider]: in-memory implementation for tests
//!
//! Tags and releases are small, bounded collections and are fetched eagerly;
//! commit history can be arbitrarily deep, so [RepositoryProvider::list_commits]
//! hands out a lazy iterator the resolver drains only up to its scan ceiling.

pub mod github;
pub mod mock;

pub use github::GithubProvider;
pub use mock::MockProvider;

use crate::error::Result;

/// Raw tag as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct RawTag {
    pub name: String,
    /// Commit the tag points at
    pub commit_sha: String,
}

/// Raw release metadata as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct RawRelease {
    pub id: u64,
    pub tag_name: String,
    pub title: Option<String>,
    pub is_draft: bool,
    pub is_prerelease: bool,
}

/// Reference to a single commit in branch history
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRef {
    pub sha: String,
}

/// Read-only access to a repository host
///
/// Implementations never mutate remote state. Errors carry enough context to
/// be surfaced directly to the operator.
pub trait RepositoryProvider {
    /// All tags in the repository
    fn list_tags(&self) -> Result<Vec<RawTag>>;

    /// All releases in the repository, drafts and pre-releases included
    fn list_releases(&self) -> Result<Vec<RawRelease>>;

    /// Commit history of a branch, newest first
    ///
    /// The returned iterator is lazy: implementations should only fetch as
    /// much history as the caller consumes.
    fn list_commits<'a>(
        &'a self,
        branch: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitRef>> + 'a>>;
}
