use std::fmt;

use crate::presentation::view_models::{CreateView, ScanReportViewModel};

impl CreateView for ScanReportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScanReportView { data: self })
    }
}

struct ScanReportView<'a> {
    data: &'a ScanReportViewModel,
}

impl<'a> fmt::Display for ScanReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Log files ({}):", self.data.files.len())?;
        for file in &self.data.files {
            writeln!(f, "  {}", file.path)?;
        }

        for check in &self.data.checks {
            writeln!(f, "\nTotal matches for pattern: {}", check.description)?;
            writeln!(f, "Matches found: {}", check.count)?;
            if let Some(example) = &check.example {
                writeln!(f, "Example match: {}", example)?;
            }
            if check.escalated {
                writeln!(f, "Error: {}", check.description)?;
            }
        }

        writeln!(
            f,
            "\nTotal matches across all files: {}",
            self.data.total_matches
        )?;

        writeln!(f, "\nError messages across all files:")?;
        for description in &self.data.escalated {
            writeln!(f, "{}", description)?;
        }

        let unscanned: Vec<_> = self
            .data
            .files
            .iter()
            .filter(|file| file.status != "scanned")
            .collect();
        if !unscanned.is_empty() {
            writeln!(f, "\nFiles not scanned:")?;
            for file in unscanned {
                write!(f, "  {} ({})", file.path, file.status)?;
                if let Some(detail) = &file.detail {
                    write!(f, ": {}", detail)?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
