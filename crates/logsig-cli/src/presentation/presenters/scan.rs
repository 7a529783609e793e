use crate::presentation::view_models::{
    CheckReportViewModel, CommandResultViewModel, FileScanViewModel, Guidance,
    ScanReportViewModel, StatusBadge,
};
use logsig_scanner::{FileOutcome, FileStatus, ScanRun, ScanSummary};
use std::path::Path;

pub fn present_scan_report(
    log_dir: &Path,
    run: &ScanRun,
    summary: &ScanSummary,
) -> CommandResultViewModel<ScanReportViewModel> {
    let files: Vec<FileScanViewModel> = run.outcomes.iter().map(present_outcome).collect();

    let checks = summary
        .checks
        .iter()
        .map(|check| CheckReportViewModel {
            description: check.description.clone(),
            pattern: check.pattern.clone(),
            count: check.count,
            example: check.example.clone(),
            escalated: check.escalated,
        })
        .collect();

    let badge = if !summary.escalated.is_empty() {
        StatusBadge::warning(format!(
            "{} signature(s) matched more than {} time(s)",
            summary.escalated.len(),
            summary.escalate_above
        ))
    } else if summary.total_matches > 0 {
        StatusBadge::info(format!(
            "{} match(es), none above the escalation threshold",
            summary.total_matches
        ))
    } else {
        StatusBadge::success("No known error signatures found")
    };

    let skipped = files.iter().any(|f| f.status == "skipped");
    let failed = files.iter().any(|f| f.status == "failed");

    let content = ScanReportViewModel {
        log_dir: log_dir.display().to_string(),
        files,
        checks,
        total_matches: summary.total_matches,
        escalate_above: summary.escalate_above,
        escalated: summary.escalated.clone(),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if skipped {
        result = result.with_suggestion(
            Guidance::new(
                "Compressed rotations were skipped; scan them without --no-decompress \
                 and with `decompress = true` in the config file",
            )
            .with_command("logsig scan"),
        );
    }
    if failed {
        result = result.with_suggestion(
            Guidance::new("Some log files could not be read; check their permissions")
                .with_command(format!("ls -l {}", log_dir.display())),
        );
    }
    result
}

fn present_outcome(outcome: &FileOutcome) -> FileScanViewModel {
    let (status, lines, detail) = match &outcome.status {
        FileStatus::Scanned { lines } => ("scanned", Some(*lines), None),
        FileStatus::Skipped { reason } => ("skipped", None, Some(reason.clone())),
        FileStatus::Failed(err) => ("failed", None, Some(err.to_string())),
    };

    FileScanViewModel {
        path: outcome.path.display().to_string(),
        shape: outcome.shape.label().to_string(),
        status: status.to_string(),
        lines,
        detail,
    }
}
