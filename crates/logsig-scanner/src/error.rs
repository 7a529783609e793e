use std::fmt;
use std::path::PathBuf;

/// Result type for logsig-scanner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while discovering and scanning log files
#[derive(Debug)]
pub enum Error {
    /// Listing the log directory failed
    Discovery {
        dir: PathBuf,
        source: walkdir::Error,
    },

    /// Listing succeeded but no file matched any name shape
    NoFilesFound(PathBuf),

    /// A log file could not be opened for reading
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading a log file failed part way through
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A check pattern failed to compile
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Discovery { dir, source } => {
                write!(f, "failed to list log files in {}: {}", dir.display(), source)
            }
            Error::NoFilesFound(dir) => write!(f, "no log files found in {}", dir.display()),
            Error::FileOpen { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            Error::FileRead { path, source } => {
                write!(f, "error reading {}: {}", path.display(), source)
            }
            Error::Pattern { pattern, source } => {
                write!(f, "invalid check pattern {:?}: {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Discovery { source, .. } => Some(source),
            Error::FileOpen { source, .. } | Error::FileRead { source, .. } => Some(source),
            Error::Pattern { source, .. } => Some(source),
            Error::NoFilesFound(_) => None,
        }
    }
}
