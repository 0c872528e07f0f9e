use std::fmt;

/// Non-fatal conditions encountered while indexing tags or walking commit
/// history. These are reported to the operator through log lines and never
/// abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Tag parsed but its prefix differs from the configured one
    PrefixMismatch {
        tag: String,
        expected: String,
        actual: String,
    },
    /// Branch-scope commit walk stopped at the configured ceiling
    ScanLimitReached { limit: usize },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            ScanWarning::PrefixMismatch {
                tag,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Tag '{}' has prefix '{}', expected '{}'",
                    tag, actual, expected
                )
            }
            ScanWarning::ScanLimitReached { limit } => {
                write!(
                    f,
                    "Max commit scan threshold {} reached. Please increase the limit.",
                    limit
                )
            }
        }
    }
}
