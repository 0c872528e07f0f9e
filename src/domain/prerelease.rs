//! Pre-release identifier handling for semantic versioning
//!
//! A pre-release is a dot-separated sequence of identifiers, each either numeric
//! or alphanumeric. According to semver.org: https://semver.org/#spec-item-9

use crate::error::{LatestReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// A single pre-release identifier
///
/// Numeric identifiers compare numerically and always sort below alphanumeric
/// identifiers; alphanumeric identifiers compare lexically. The derived `Ord`
/// implements exactly that: variant order first, then the payload comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Identifier {
    /// Purely numeric identifier (no leading zero unless it is `0`)
    Numeric(u64),
    /// Alphanumeric-hyphen identifier with at least one non-digit character
    Alphanumeric(String),
}

impl FromStr for Identifier {
    type Err = LatestReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(LatestReleaseError::version(
                "Empty pre-release identifier".to_string(),
            ));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(LatestReleaseError::version(format!(
                "Invalid pre-release identifier: '{}'",
                s
            )));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            if s.len() > 1 && s.starts_with('0') {
                return Err(LatestReleaseError::version(format!(
                    "Numeric pre-release identifier has a leading zero: '{}'",
                    s
                )));
            }
            let value = s.parse::<u64>().map_err(|_| {
                LatestReleaseError::version(format!(
                    "Numeric pre-release identifier out of range: '{}'",
                    s
                ))
            })?;
            Ok(Identifier::Numeric(value))
        } else {
            Ok(Identifier::Alphanumeric(s.to_string()))
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alphanumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release portion of a semantic version
///
/// Represents the sequence after the `-` separator, e.g. "beta.1.2" in
/// "1.2.3-beta.1.2". The derived `Ord` compares identifier sequences position
/// by position; a shorter sequence that is a prefix of a longer one sorts
/// lower, which is the `Vec` lexicographic rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl Prerelease {
    /// Parse a pre-release from the dot-separated identifier sequence
    ///
    /// # Arguments
    /// * `s` - String to parse, e.g. "beta.1" or "alpha"
    ///
    /// # Returns
    /// * `Ok(Prerelease)` - Parsed identifier sequence
    /// * `Err` - If any identifier is empty or contains invalid characters
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(LatestReleaseError::version(
                "Empty pre-release identifier".to_string(),
            ));
        }

        let identifiers = s
            .split('.')
            .map(Identifier::from_str)
            .collect::<Result<Vec<_>>>()?;

        Ok(Prerelease { identifiers })
    }

    /// The ordered identifier sequence
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.identifiers.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Identifier tests
    #[test]
    fn test_identifier_parse_numeric() {
        let id: Identifier = "42".parse().unwrap();
        assert_eq!(id, Identifier::Numeric(42));
    }

    #[test]
    fn test_identifier_parse_zero() {
        let id: Identifier = "0".parse().unwrap();
        assert_eq!(id, Identifier::Numeric(0));
    }

    #[test]
    fn test_identifier_parse_alphanumeric() {
        let id: Identifier = "beta".parse().unwrap();
        assert_eq!(id, Identifier::Alphanumeric("beta".to_string()));
    }

    #[test]
    fn test_identifier_parse_mixed_digits_and_letters() {
        let id: Identifier = "0a1".parse().unwrap();
        assert_eq!(id, Identifier::Alphanumeric("0a1".to_string()));
    }

    #[test]
    fn test_identifier_parse_hyphenated() {
        let id: Identifier = "x-y-z".parse().unwrap();
        assert_eq!(id, Identifier::Alphanumeric("x-y-z".to_string()));
    }

    #[test]
    fn test_identifier_parse_leading_zero_rejected() {
        assert!("01".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_identifier_parse_empty_rejected() {
        assert!("".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_identifier_parse_invalid_characters_rejected() {
        assert!("beta!".parse::<Identifier>().is_err());
        assert!("bet a".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_identifier_numeric_sorts_below_alphanumeric() {
        let numeric = Identifier::Numeric(999);
        let alpha = Identifier::Alphanumeric("0".to_string());
        assert!(numeric < alpha);
    }

    #[test]
    fn test_identifier_numeric_compares_numerically() {
        let a = Identifier::Numeric(2);
        let b = Identifier::Numeric(11);
        assert!(a < b);
    }

    #[test]
    fn test_identifier_alphanumeric_compares_lexically() {
        let a = Identifier::Alphanumeric("alpha".to_string());
        let b = Identifier::Alphanumeric("beta".to_string());
        assert!(a < b);
    }

    // Prerelease tests
    #[test]
    fn test_prerelease_parse_single() {
        let pr = Prerelease::parse("alpha").unwrap();
        assert_eq!(
            pr.identifiers(),
            &[Identifier::Alphanumeric("alpha".to_string())]
        );
    }

    #[test]
    fn test_prerelease_parse_sequence() {
        let pr = Prerelease::parse("beta.1.2").unwrap();
        assert_eq!(
            pr.identifiers(),
            &[
                Identifier::Alphanumeric("beta".to_string()),
                Identifier::Numeric(1),
                Identifier::Numeric(2),
            ]
        );
    }

    #[test]
    fn test_prerelease_parse_empty_rejected() {
        assert!(Prerelease::parse("").is_err());
    }

    #[test]
    fn test_prerelease_parse_trailing_dot_rejected() {
        assert!(Prerelease::parse("beta.").is_err());
    }

    #[test]
    fn test_prerelease_parse_consecutive_dots_rejected() {
        assert!(Prerelease::parse("beta..1").is_err());
    }

    #[test]
    fn test_prerelease_display_round_trip() {
        let pr = Prerelease::parse("beta.1.2").unwrap();
        assert_eq!(pr.to_string(), "beta.1.2");
    }

    #[test]
    fn test_prerelease_ordering_alpha_before_beta() {
        let alpha = Prerelease::parse("alpha").unwrap();
        let beta = Prerelease::parse("beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_prerelease_ordering_prefix_sorts_lower() {
        let short = Prerelease::parse("alpha").unwrap();
        let long = Prerelease::parse("alpha.1").unwrap();
        assert!(short < long);
    }

    #[test]
    fn test_prerelease_ordering_numeric_below_alphanumeric() {
        // 1.0.0-alpha.1 < 1.0.0-alpha.beta per semver.org spec item 11
        let numeric = Prerelease::parse("alpha.1").unwrap();
        let alpha = Prerelease::parse("alpha.beta").unwrap();
        assert!(numeric < alpha);
    }

    #[test]
    fn test_prerelease_ordering_semver_example_chain() {
        // alpha < alpha.1 < alpha.beta < beta < beta.2 < beta.11 < rc.1
        let chain = [
            "alpha", "alpha.1", "alpha.beta", "beta", "beta.2", "beta.11", "rc.1",
        ];
        let parsed: Vec<Prerelease> = chain
            .iter()
            .map(|s| Prerelease::parse(s).unwrap())
            .collect();
        for pair in parsed.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_prerelease_equality() {
        let a = Prerelease::parse("beta.1").unwrap();
        let b = Prerelease::parse("beta.1").unwrap();
        assert_eq!(a, b);
    }
}
