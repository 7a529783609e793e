use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScanReportViewModel {
    pub log_dir: String,
    pub files: Vec<FileScanViewModel>,
    pub checks: Vec<CheckReportViewModel>,
    pub total_matches: usize,
    pub escalate_above: usize,
    pub escalated: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FileScanViewModel {
    pub path: String,
    pub shape: String,
    /// "scanned", "skipped" or "failed"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReportViewModel {
    pub description: String,
    pub pattern: String,
    pub count: usize,
    pub example: Option<String>,
    pub escalated: bool,
}
