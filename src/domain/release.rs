use crate::domain::version::SemVersion;
use std::fmt;

/// One joined (tag, release, version) tuple produced by indexing
///
/// Constructed once from provider snapshots and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRecord {
    /// Release id from the hosting provider
    pub id: u64,
    /// Release title, empty when the provider reports none
    pub title: String,
    /// Tag name, unique within a repository snapshot
    pub tag_name: String,
    /// Commit the tag resolved to at index time
    pub commit_sha: String,
    pub version: SemVersion,
    pub is_draft: bool,
    pub is_prerelease: bool,
}

impl ReleaseRecord {
    /// A release is valid when it is neither a draft nor a pre-release
    pub fn is_valid(&self) -> bool {
        !self.is_draft && !self.is_prerelease
    }

    /// First 8 characters of the commit SHA, for log lines
    pub fn short_sha(&self) -> &str {
        let end = self.commit_sha.len().min(8);
        &self.commit_sha[..end]
    }
}

impl fmt::Display for ReleaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Release(id: {}, title: {}, draft: {}, prerelease: {}, tag: {}, commit_sha: {})",
            self.id,
            self.title,
            self.is_draft,
            self.is_prerelease,
            self.tag_name,
            self.short_sha()
        )
    }
}
