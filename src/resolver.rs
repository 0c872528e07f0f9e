//! Latest-release resolution policies

use crate::config::{Config, Scope};
use crate::domain::ReleaseRecord;
use crate::error::Result;
use crate::index::ReleaseIndex;
use crate::provider::{CommitRef, RepositoryProvider};
use crate::warnings::ScanWarning;
use tracing::{debug, warn};

/// Resolve the latest release of a repository under the configured scope
///
/// Fetches tags and releases from the provider, indexes them with the
/// configured tag prefix, and applies the scope policy. A `None` result means
/// no qualifying release exists; it is a normal outcome, not an error.
pub fn resolve_latest<P: RepositoryProvider + ?Sized>(
    provider: &P,
    config: &Config,
) -> Result<Option<ReleaseRecord>> {
    let tags = provider.list_tags()?;
    let releases = provider.list_releases()?;
    debug!(
        tags = tags.len(),
        releases = releases.len(),
        "fetched repository snapshot"
    );

    let index = ReleaseIndex::build(&tags, &releases, &config.tag_prefix);
    index.log_records();

    match config.scope {
        Scope::Repo => Ok(resolve_for_repo(&index).cloned()),
        Scope::Branch => {
            let commits = provider.list_commits(&config.branch)?;
            Ok(resolve_for_branch(&index, commits, config.max_commits_to_scan)?.cloned())
        }
    }
}

/// Repo scope: the record with the greatest version among all indexed releases
///
/// Drafts and pre-release-flagged releases are NOT filtered in this path;
/// branch scope does filter them. The asymmetry is intentional and preserved.
pub fn resolve_for_repo(index: &ReleaseIndex) -> Option<&ReleaseRecord> {
    index
        .records()
        .max_by(|a, b| a.version.precedence(&b.version))
}

/// Branch scope: walk commit history newest to oldest and return the first
/// commit carrying a valid (non-draft, non-prerelease) release
///
/// Stops after `max_commits_to_scan` commits and reports no match, logging a
/// warning so operators know the ceiling may need raising. Draft and
/// pre-release records are skipped in favor of older valid ones.
pub fn resolve_for_branch<'a, I>(
    index: &'a ReleaseIndex,
    commits: I,
    max_commits_to_scan: usize,
) -> Result<Option<&'a ReleaseRecord>>
where
    I: IntoIterator<Item = Result<CommitRef>>,
{
    let mut commits = commits.into_iter();
    for scanned in 0..max_commits_to_scan {
        let Some(commit) = commits.next() else {
            debug!(commits_scanned = scanned, "branch history exhausted");
            return Ok(None);
        };
        let commit = commit?;

        match index.lookup_commit(&commit.sha) {
            Some(record) if record.is_valid() => {
                debug!(commits_scanned = scanned + 1, "found release on branch");
                return Ok(Some(record));
            }
            Some(record) => {
                debug!("skipping draft/prerelease on branch: {}", record);
            }
            None => {}
        }
    }

    warn!(
        "{}",
        ScanWarning::ScanLimitReached {
            limit: max_commits_to_scan
        }
    );
    Ok(None)
}
