use crate::discovery::{LogFileSet, NameShape};
use crate::io::{Lines, open_log};
use crate::patterns::PatternCheck;
use crate::{Error, Result};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Decompress gzip rotations; when false they are skipped.
    pub decompress: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { decompress: true }
    }
}

#[derive(Debug)]
pub enum FileStatus {
    Scanned { lines: u64 },
    Skipped { reason: String },
    Failed(Error),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub shape: NameShape,
    pub status: FileStatus,
}

/// Per-file outcomes of a `load_all` pass, in processing order.
#[derive(Debug, Default)]
pub struct ScanRun {
    pub outcomes: Vec<FileOutcome>,
}

impl ScanRun {
    pub fn scanned_files(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Scanned { .. }))
            .count()
    }

    pub fn lines_read(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Scanned { lines } => lines,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o.status, FileStatus::Scanned { .. }))
    }
}

/// Scan one file, updating `checks` in place. Returns the number of lines read.
///
/// Gzip content is detected from a `.gz` extension. Matches recorded before
/// a read error are kept.
pub fn scan(path: &Path, checks: &mut [PatternCheck]) -> Result<u64> {
    scan_path(path, is_gzip_path(path), checks)
}

fn scan_path(path: &Path, compressed: bool, checks: &mut [PatternCheck]) -> Result<u64> {
    let reader = open_log(path, compressed).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    // The reader is dropped, closing the file, on every return path.
    scan_reader(reader, checks).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Test every line against every check in list order.
pub fn scan_reader<R: BufRead>(reader: R, checks: &mut [PatternCheck]) -> io::Result<u64> {
    let mut lines = 0;
    for line in Lines::new(reader) {
        let line = line?;
        lines += 1;
        for check in checks.iter_mut() {
            check.observe(&line);
        }
    }
    Ok(lines)
}

/// Scan every file strictly in set order. A file that cannot be opened or
/// read is logged and recorded, and the run moves on to the next file.
pub fn load_all(files: &LogFileSet, checks: &mut [PatternCheck], options: ScanOptions) -> ScanRun {
    let mut run = ScanRun::default();

    for file in files {
        let status = if file.shape.is_compressed() && !options.decompress {
            debug!(path = %file.path.display(), "skipping compressed rotation");
            FileStatus::Skipped {
                reason: "compressed rotation (decompression disabled)".to_string(),
            }
        } else {
            match scan_path(&file.path, file.shape.is_compressed(), checks) {
                Ok(lines) => {
                    debug!(path = %file.path.display(), lines, "scanned log file");
                    FileStatus::Scanned { lines }
                }
                Err(err) => {
                    warn!(path = %file.path.display(), error = %err, "error processing file");
                    FileStatus::Failed(err)
                }
            }
        };

        run.outcomes.push(FileOutcome {
            path: file.path.clone(),
            shape: file.shape,
            status,
        });
    }

    run
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
