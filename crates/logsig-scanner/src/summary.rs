use crate::patterns::PatternCheck;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub description: String,
    pub pattern: String,
    pub count: usize,
    pub example: Option<String>,
    pub escalated: bool,
}

/// Totals computed once every file has been scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub checks: Vec<CheckResult>,
    pub total_matches: usize,
    /// Descriptions of checks whose count is strictly above `escalate_above`
    pub escalated: Vec<String>,
    pub escalate_above: usize,
}

impl ScanSummary {
    pub fn from_checks(checks: &[PatternCheck], escalate_above: usize) -> Self {
        let results: Vec<CheckResult> = checks
            .iter()
            .map(|check| CheckResult {
                description: check.description().to_string(),
                pattern: check.pattern().to_string(),
                count: check.count(),
                example: check.example().map(str::to_string),
                escalated: check.count() > escalate_above,
            })
            .collect();

        let total_matches = results.iter().map(|r| r.count).sum();
        let escalated: Vec<String> = results
            .iter()
            .filter(|r| r.escalated)
            .map(|r| r.description.clone())
            .collect();

        info!(total_matches, escalated = escalated.len(), "scan complete");

        Self {
            checks: results,
            total_matches,
            escalated,
            escalate_above,
        }
    }
}
