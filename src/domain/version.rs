use crate::domain::prerelease::Prerelease;
use crate::error::{LatestReleaseError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Tag grammar: optional non-digit prefix, major, optional minor/patch,
/// optional pre-release, optional build metadata. The truncated
/// `major` / `major.minor` forms are tolerated on purpose, which is where
/// this grammar departs from the formal SemVer one.
const VERSION_PATTERN: &str = r"^(?P<prefix>\D*)(?P<major>0|[1-9]\d*)(?:\.(?P<minor>0|[1-9]\d*))?(?:\.(?P<patch>0|[1-9]\d*))?(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*)(?:\.(?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*))*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Semantic version parsed from a tag string
///
/// Keeps the original tag text alongside the structured components. Two
/// instances are equal only when they were built from the identical source
/// string; `precedence` compares the structured components instead.
#[derive(Debug, Clone)]
pub struct SemVersion {
    /// Original tag string the version was parsed from
    pub raw: String,
    /// Leading non-version text, possibly empty (e.g. "v", "release.")
    pub prefix: String,
    pub major: u64,
    /// Defaults to 0 when absent from the source string
    pub minor: u64,
    /// Defaults to 0 when absent from the source string
    pub patch: u64,
    pub prerelease: Option<Prerelease>,
    /// Carried verbatim; participates in `precedence` only as the final
    /// tie-break key (see `precedence`)
    pub build_metadata: Option<String>,
}

impl SemVersion {
    /// Parse a tag string into a structured version
    ///
    /// # Arguments
    /// * `text` - Tag string, e.g. "v1.2.3", "release.2.0.1-beta.1+42", "v1"
    ///
    /// # Returns
    /// * `Ok(SemVersion)` - Parsed version; absent minor/patch default to 0
    /// * `Err` - If the text does not match the tag grammar; the error
    ///   message includes the offending input
    pub fn parse(text: &str) -> Result<Self> {
        let captures = version_regex().captures(text).ok_or_else(|| {
            LatestReleaseError::version(format!(
                "Unrecognized semantic version string: '{}'",
                text
            ))
        })?;

        let number = |name: &str| -> Result<u64> {
            match captures.name(name) {
                Some(m) => m.as_str().parse::<u64>().map_err(|_| {
                    LatestReleaseError::version(format!(
                        "Version component '{}' out of range in '{}'",
                        m.as_str(),
                        text
                    ))
                }),
                None => Ok(0),
            }
        };

        let prerelease = captures
            .name("prerelease")
            .map(|m| Prerelease::parse(m.as_str()))
            .transpose()?;

        Ok(SemVersion {
            raw: text.to_string(),
            prefix: captures
                .name("prefix")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            prerelease,
            build_metadata: captures.name("build").map(|m| m.as_str().to_string()),
        })
    }

    /// The numeric core as "major.minor.patch"
    pub fn base_version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// SemVer precedence comparison
    ///
    /// Applies, in order: numeric major/minor/patch comparison; pre-release
    /// presence (a version WITH a pre-release sorts below the bare version);
    /// positional pre-release identifier comparison; and finally a lexical
    /// build-metadata tie-break. The last step deviates from strict SemVer
    /// (which ignores build metadata) and is kept deliberately; absent
    /// metadata sorts before present metadata.
    ///
    /// Note this is intentionally not an `Ord` impl: equality is raw-string
    /// equality, so versions with different prefixes but identical numeric
    /// components compare `Equal` here while being unequal values.
    pub fn precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| self.build_metadata.cmp(&other.build_metadata))
    }

    /// Sort versions by precedence, stable among ties
    ///
    /// # Arguments
    /// * `versions` - Versions to sort (consumed)
    /// * `reverse` - When true, sort descending (greatest first)
    pub fn sort(mut versions: Vec<SemVersion>, reverse: bool) -> Vec<SemVersion> {
        if reverse {
            versions.sort_by(|a, b| b.precedence(a));
        } else {
            versions.sort_by(|a, b| a.precedence(b));
        }
        versions
    }
}

impl PartialEq for SemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for SemVersion {}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
