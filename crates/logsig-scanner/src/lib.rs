//! Discovery and scanning of rotated syslog files.
//!
//! - `discovery`: locate `syslog`, `syslog.N` and `syslog.N.gz` in a directory
//!   and order them
//! - `scanner`: stream each file line by line against a list of pattern checks
//! - `patterns`: the built-in check table and compiled `PatternCheck`
//! - `summary`: totals and escalations once every file has been scanned

pub mod discovery;
pub mod error;
pub mod io;
pub mod patterns;
pub mod scanner;
pub mod summary;

pub use discovery::{LogFile, LogFileSet, LogLocator, NameShape, discover, sort_log_files};
pub use error::{Error, Result};
pub use patterns::{PatternCheck, builtin_checks, compile_checks};
pub use scanner::{FileOutcome, FileStatus, ScanOptions, ScanRun, load_all, scan, scan_reader};
pub use summary::{CheckResult, ScanSummary};
