use crate::{CheckSpec, Error, Result, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Checks whose count is strictly above this value are escalated.
pub const DEFAULT_ESCALATE_ABOVE: usize = 1;

fn default_true() -> bool {
    true
}

fn default_escalate_above() -> usize {
    DEFAULT_ESCALATE_ABOVE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub log_dir: Option<String>,

    #[serde(default)]
    pub order: SortOrder,

    /// Decompress `syslog.N.gz` rotations before scanning. When false they
    /// are still discovered but skipped by the scanner.
    #[serde(default = "default_true")]
    pub decompress: bool,

    #[serde(default = "default_escalate_above")]
    pub escalate_above: usize,

    #[serde(default = "default_true")]
    pub include_builtin_checks: bool,

    /// Extra checks appended after the built-in set
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: None,
            order: SortOrder::default(),
            decompress: true,
            escalate_above: DEFAULT_ESCALATE_ABOVE,
            include_builtin_checks: true,
            checks: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.include_builtin_checks && self.checks.is_empty() {
            return Err(Error::Config(
                "built-in checks are disabled and no [[checks]] are defined".to_string(),
            ));
        }

        for (i, check) in self.checks.iter().enumerate() {
            if check.pattern.trim().is_empty() {
                return Err(Error::Config(format!("check #{} has an empty pattern", i + 1)));
            }
            if check.description.trim().is_empty() {
                return Err(Error::Config(format!(
                    "check #{} ({}) has an empty description",
                    i + 1,
                    check.pattern
                )));
            }
        }

        Ok(())
    }
}
