use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing order applied to discovered log files.
///
/// Both orders compare full paths case-insensitively. With single-digit
/// rotation suffixes the descending comparison lists `syslog.9*` first and
/// the live `syslog` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending path order: oldest rotation first, current log last
    #[default]
    Oldest,
    /// Ascending path order: current log first, oldest rotation last
    Newest,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Oldest => write!(f, "oldest"),
            SortOrder::Newest => write!(f, "newest"),
        }
    }
}

/// Uncompiled pattern check: a regular expression and the operator-facing
/// description reported when it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpec {
    pub pattern: String,
    pub description: String,
}

impl CheckSpec {
    pub fn new(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
        }
    }
}
