use crate::error::Result;
use crate::provider::{CommitRef, RawRelease, RawTag, RepositoryProvider};

/// Mock provider for testing without network access
///
/// Commit history is returned in insertion order, so tests should add commits
/// newest first to mirror real provider behavior.
#[derive(Debug, Default)]
pub struct MockProvider {
    tags: Vec<RawTag>,
    releases: Vec<RawRelease>,
    commits: Vec<CommitRef>,
}

impl MockProvider {
    /// Create a new empty mock provider
    pub fn new() -> Self {
        MockProvider::default()
    }

    /// Add a tag pointing at a commit SHA
    pub fn add_tag(&mut self, name: impl Into<String>, commit_sha: impl Into<String>) {
        self.tags.push(RawTag {
            name: name.into(),
            commit_sha: commit_sha.into(),
        });
    }

    /// Add a release for a tag name
    pub fn add_release(
        &mut self,
        id: u64,
        tag_name: impl Into<String>,
        title: impl Into<String>,
        is_draft: bool,
        is_prerelease: bool,
    ) {
        self.releases.push(RawRelease {
            id,
            tag_name: tag_name.into(),
            title: Some(title.into()),
            is_draft,
            is_prerelease,
        });
    }

    /// Append a commit to the branch history (add newest first)
    pub fn add_commit(&mut self, sha: impl Into<String>) {
        self.commits.push(CommitRef { sha: sha.into() });
    }
}

impl RepositoryProvider for MockProvider {
    fn list_tags(&self) -> Result<Vec<RawTag>> {
        Ok(self.tags.clone())
    }

    fn list_releases(&self) -> Result<Vec<RawRelease>> {
        Ok(self.releases.clone())
    }

    fn list_commits<'a>(
        &'a self,
        _branch: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitRef>> + 'a>> {
        Ok(Box::new(self.commits.iter().cloned().map(Ok)))
    }
}
