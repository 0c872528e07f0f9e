//! GitHub REST v3 implementation of the repository data provider

use crate::error::{LatestReleaseError, Result};
use crate::provider::{CommitRef, RawRelease, RawTag, RepositoryProvider};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Default base URL for GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Page size for list endpoints (GitHub maximum)
const PAGE_SIZE: usize = 100;

/// Entry from the tags API
#[derive(Debug, Deserialize)]
struct TagPayload {
    name: String,
    commit: CommitPayload,
}

/// Commit reference as embedded in tag and commit listings
#[derive(Debug, Deserialize)]
struct CommitPayload {
    sha: String,
}

/// Entry from the releases API
#[derive(Debug, Deserialize)]
struct ReleasePayload {
    id: u64,
    name: Option<String>,
    tag_name: String,
    draft: bool,
    prerelease: bool,
}

/// Repository data provider backed by the GitHub REST API
///
/// Performs read-only, synchronous requests. Tags and releases are fetched
/// eagerly across all pages; commit history is exposed as a lazy iterator
/// that requests one page at a time.
pub struct GithubProvider {
    client: Client,
    base_url: String,
    repository: String,
    token: Option<String>,
}

impl GithubProvider {
    /// Create a provider for a repository in "owner/name" form
    ///
    /// # Arguments
    /// * `repository` - Repository slug, e.g. "octocat/hello-world"
    /// * `token` - Optional access token, sent as bearer auth when present
    pub fn new(repository: impl Into<String>, token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, repository, token)
    }

    /// Create a provider against a custom API base URL (used by tests)
    pub fn with_base_url(
        base_url: &str,
        repository: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        GithubProvider {
            client: Client::builder()
                .user_agent(concat!("git-latest-release/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            repository: repository.into(),
            token,
        }
    }

    /// Fetch one page of a repository list endpoint
    fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        extra_query: &[(&str, &str)],
        page: usize,
    ) -> Result<Vec<T>> {
        let url = format!("{}/repos/{}/{}", self.base_url, self.repository, resource);
        debug!(url = %url, page, "fetching from GitHub API");

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(extra_query)
            .query(&[
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
            ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LatestReleaseError::provider(format!(
                "Repository '{}' not found or not accessible",
                self.repository
            )));
        }
        if !status.is_success() {
            return Err(LatestReleaseError::provider(format!(
                "GitHub API returned status {} for {}",
                status, url
            )));
        }

        Ok(response.json()?)
    }

    /// Drain every page of a list endpoint
    fn fetch_all<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for page in 1.. {
            let batch: Vec<T> = self.fetch_page(resource, &[], page)?;
            let batch_len = batch.len();
            items.extend(batch);
            if batch_len < PAGE_SIZE {
                break;
            }
        }
        Ok(items)
    }
}

/// Lazy, paged walk over a branch's commit history (newest first)
///
/// A short page marks the history as exhausted; an error ends the walk after
/// it is yielded once.
struct CommitPages<'a> {
    provider: &'a GithubProvider,
    branch: String,
    page: usize,
    buffer: std::vec::IntoIter<CommitRef>,
    exhausted: bool,
}

impl Iterator for CommitPages<'_> {
    type Item = Result<CommitRef>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(commit) = self.buffer.next() {
                return Some(Ok(commit));
            }
            if self.exhausted {
                return None;
            }

            let query = [("sha", self.branch.as_str())];
            match self
                .provider
                .fetch_page::<CommitPayload>("commits", &query, self.page)
            {
                Ok(batch) => {
                    self.page += 1;
                    if batch.len() < PAGE_SIZE {
                        self.exhausted = true;
                    }
                    self.buffer = batch
                        .into_iter()
                        .map(|c| CommitRef { sha: c.sha })
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl RepositoryProvider for GithubProvider {
    fn list_tags(&self) -> Result<Vec<RawTag>> {
        let tags: Vec<TagPayload> = self.fetch_all("tags")?;
        Ok(tags
            .into_iter()
            .map(|t| RawTag {
                name: t.name,
                commit_sha: t.commit.sha,
            })
            .collect())
    }

    fn list_releases(&self) -> Result<Vec<RawRelease>> {
        let releases: Vec<ReleasePayload> = self.fetch_all("releases")?;
        Ok(releases
            .into_iter()
            .map(|r| RawRelease {
                id: r.id,
                tag_name: r.tag_name,
                title: r.name,
                is_draft: r.draft,
                is_prerelease: r.prerelease,
            })
            .collect())
    }

    fn list_commits<'a>(
        &'a self,
        branch: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitRef>> + 'a>> {
        Ok(Box::new(CommitPages {
            provider: self,
            branch: branch.to_string(),
            page: 1,
            buffer: Vec::new().into_iter(),
            exhausted: false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_list_tags_maps_name_and_sha() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/repos/octo/widget/tags")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"name": "v1.1.0", "commit": {"sha": "bbb222"}},
                    {"name": "v1.0.0", "commit": {"sha": "aaa111"}}
                ]"#,
            )
            .create();

        let provider = GithubProvider::with_base_url(&server.url(), "octo/widget", None);
        let tags = provider.list_tags().unwrap();

        mock.assert();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v1.1.0");
        assert_eq!(tags[0].commit_sha, "bbb222");
    }

    #[test]
    fn test_list_releases_maps_flags_and_title() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/repos/octo/widget/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 10, "name": "Stable", "tag_name": "v1.0.0", "draft": false, "prerelease": false},
                    {"id": 11, "name": null, "tag_name": "v1.1.0-rc.1", "draft": false, "prerelease": true}
                ]"#,
            )
            .create();

        let provider = GithubProvider::with_base_url(&server.url(), "octo/widget", None);
        let releases = provider.list_releases().unwrap();

        mock.assert();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].title.as_deref(), Some("Stable"));
        assert!(releases[1].is_prerelease);
        assert_eq!(releases[1].title, None);
    }

    #[test]
    fn test_missing_repository_is_a_provider_error() {
        let mut server = Server::new();
        server
            .mock("GET", "/repos/octo/missing/tags")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create();

        let provider = GithubProvider::with_base_url(&server.url(), "octo/missing", None);
        let err = provider.list_tags().unwrap_err();

        assert!(matches!(err, LatestReleaseError::Provider(_)));
        assert!(err.to_string().contains("octo/missing"));
    }

    #[test]
    fn test_commit_iterator_requests_pages_lazily() {
        let mut server = Server::new();

        // A full first page means more history may follow
        let page_one: Vec<String> = (0..PAGE_SIZE)
            .map(|i| format!(r#"{{"sha": "commit{:03}"}}"#, i))
            .collect();
        let first = server
            .mock("GET", "/repos/octo/widget/commits")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sha".into(), "main".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("[{}]", page_one.join(",")))
            .create();
        let second = server
            .mock("GET", "/repos/octo/widget/commits")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sha".into(), "main".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"sha": "tail"}]"#)
            .create();

        let provider = GithubProvider::with_base_url(&server.url(), "octo/widget", None);
        let shas: Vec<String> = provider
            .list_commits("main")
            .unwrap()
            .map(|c| c.unwrap().sha)
            .collect();

        first.assert();
        second.assert();
        assert_eq!(shas.len(), PAGE_SIZE + 1);
        assert_eq!(shas[0], "commit000");
        assert_eq!(shas[PAGE_SIZE], "tail");
    }

    #[test]
    fn test_commit_iterator_stops_at_short_page() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/repos/octo/widget/commits")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"sha": "only"}]"#)
            .expect(1)
            .create();

        let provider = GithubProvider::with_base_url(&server.url(), "octo/widget", None);
        let shas: Vec<String> = provider
            .list_commits("main")
            .unwrap()
            .map(|c| c.unwrap().sha)
            .collect();

        mock.assert();
        assert_eq!(shas, ["only"]);
    }
}
