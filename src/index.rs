//! Joins raw tags and raw releases into an indexed release set

use crate::domain::{ReleaseRecord, SemVersion};
use crate::provider::{RawRelease, RawTag};
use crate::warnings::ScanWarning;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Indexed view over a repository's releases
///
/// Two derived views over one set of records: by tag name and by the commit
/// SHA each tag points to. Built once per invocation, immutable afterwards.
pub struct ReleaseIndex {
    by_tag: HashMap<String, ReleaseRecord>,
    by_commit: HashMap<String, ReleaseRecord>,
}

impl ReleaseIndex {
    /// Join raw tags and releases into an index
    ///
    /// Tags that fail to parse, or whose prefix differs from
    /// `required_prefix`, are skipped with a log line. Releases whose tag was
    /// filtered out (or never existed in the tag list) are silently excluded.
    ///
    /// # Arguments
    /// * `tags` - Raw tag snapshot from the provider
    /// * `releases` - Raw release snapshot from the provider
    /// * `required_prefix` - Exact prefix a tag must carry, e.g. "v"
    pub fn build(tags: &[RawTag], releases: &[RawRelease], required_prefix: &str) -> Self {
        let mut versioned: HashMap<&str, (&RawTag, SemVersion)> = HashMap::new();
        for tag in tags {
            match SemVersion::parse(&tag.name) {
                Ok(version) if version.prefix == required_prefix => {
                    versioned.insert(tag.name.as_str(), (tag, version));
                }
                Ok(version) => {
                    debug!(
                        "{}",
                        ScanWarning::PrefixMismatch {
                            tag: tag.name.clone(),
                            expected: required_prefix.to_string(),
                            actual: version.prefix,
                        }
                    );
                }
                Err(e) => {
                    warn!(
                        "{}",
                        ScanWarning::UnparsableTag {
                            tag: tag.name.clone(),
                            reason: e.to_string(),
                        }
                    );
                }
            }
        }

        let mut by_tag = HashMap::new();
        let mut by_commit: HashMap<String, ReleaseRecord> = HashMap::new();
        for release in releases {
            let Some((tag, version)) = versioned.get(release.tag_name.as_str()) else {
                debug!(
                    tag = %release.tag_name,
                    "release excluded: no matching version tag"
                );
                continue;
            };

            let record = ReleaseRecord {
                id: release.id,
                title: release.title.clone().unwrap_or_default(),
                tag_name: release.tag_name.clone(),
                commit_sha: tag.commit_sha.clone(),
                version: version.clone(),
                is_draft: release.is_draft,
                is_prerelease: release.is_prerelease,
            };

            // Two tags can reference one commit; keep the record with the
            // greater version so commit lookups are deterministic.
            match by_commit.get(&tag.commit_sha) {
                Some(existing)
                    if existing.version.precedence(&record.version) != Ordering::Less => {}
                _ => {
                    by_commit.insert(tag.commit_sha.clone(), record.clone());
                }
            }
            by_tag.insert(release.tag_name.clone(), record);
        }

        ReleaseIndex { by_tag, by_commit }
    }

    /// All indexed records, keyed-by-tag view, unspecified order
    pub fn records(&self) -> impl Iterator<Item = &ReleaseRecord> {
        self.by_tag.values()
    }

    /// Record for a tag name
    pub fn get(&self, tag_name: &str) -> Option<&ReleaseRecord> {
        self.by_tag.get(tag_name)
    }

    /// Record whose tag points at a commit SHA
    pub fn lookup_commit(&self, sha: &str) -> Option<&ReleaseRecord> {
        self.by_commit.get(sha)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Debug-dump the indexed releases
    pub fn log_records(&self) {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        debug!("Indexed releases");
        for record in self.by_tag.values() {
            debug!("{}", record);
        }
    }
}
