use crate::{Error, Result};
use logsig_core::SortOrder;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const BASE_NAME: &str = "syslog";

/// The three file-name shapes a syslog directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameShape {
    /// `syslog`, the live log
    Current,
    /// `syslog.N`, an uncompressed rotation
    Rotated,
    /// `syslog.N.gz`, a compressed rotation
    Compressed,
}

impl NameShape {
    /// Order in which the shapes are listed before sorting.
    pub const LISTING_ORDER: [NameShape; 3] =
        [NameShape::Compressed, NameShape::Rotated, NameShape::Current];

    /// Classify a bare file name. Matching ignores ASCII case and accepts a
    /// single-digit rotation suffix only.
    pub fn classify(file_name: &str) -> Option<NameShape> {
        let lower = file_name.to_ascii_lowercase();
        if lower == BASE_NAME {
            return Some(NameShape::Current);
        }

        let rest = lower.strip_prefix(BASE_NAME)?.strip_prefix('.')?;
        let mut chars = rest.chars();
        if !chars.next()?.is_ascii_digit() {
            return None;
        }

        match chars.as_str() {
            "" => Some(NameShape::Rotated),
            ".gz" => Some(NameShape::Compressed),
            _ => None,
        }
    }

    pub fn matches(self, file_name: &str) -> bool {
        Self::classify(file_name) == Some(self)
    }

    pub fn is_compressed(self) -> bool {
        self == NameShape::Compressed
    }

    pub fn label(self) -> &'static str {
        match self {
            NameShape::Current => "current",
            NameShape::Rotated => "rotated",
            NameShape::Compressed => "compressed",
        }
    }
}

/// A discovered log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub shape: NameShape,
}

impl LogFile {
    /// Build from a path whose file name matches one of the name shapes.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let shape = NameShape::classify(path.file_name()?.to_str()?)?;
        Some(Self { path, shape })
    }

    /// Rotation index parsed from the file name; None for the live log.
    pub fn rotation(&self) -> Option<u32> {
        if self.shape == NameShape::Current {
            return None;
        }
        let name = self.path.file_name()?.to_str()?;
        name.get(BASE_NAME.len() + 1..BASE_NAME.len() + 2)?
            .parse()
            .ok()
    }
}

/// Ordered, non-empty set of log files produced by discovery.
#[derive(Debug, Clone)]
pub struct LogFileSet {
    files: Vec<LogFile>,
}

impl LogFileSet {
    /// Wrap already-ordered files. Fails with `NoFilesFound` when empty.
    pub fn new(dir: &Path, files: Vec<LogFile>) -> Result<Self> {
        if files.is_empty() {
            return Err(Error::NoFilesFound(dir.to_path_buf()));
        }
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a LogFileSet {
    type Item = &'a LogFile;
    type IntoIter = std::slice::Iter<'a, LogFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Finds syslog files in one directory.
#[derive(Debug, Clone)]
pub struct LogLocator {
    dir: PathBuf,
    order: SortOrder,
}

impl LogLocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            order: SortOrder::default(),
        }
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// List every shape independently, concatenate compressed, rotated and
    /// current matches, then apply a single sort over the combined list.
    pub fn discover(&self) -> Result<LogFileSet> {
        let mut files = Vec::new();
        for shape in NameShape::LISTING_ORDER {
            files.extend(self.list_shape(shape)?);
        }

        sort_log_files(&mut files, self.order);

        for file in &files {
            debug!(path = %file.path.display(), shape = file.shape.label(), "discovered log file");
        }

        LogFileSet::new(&self.dir, files)
    }

    fn list_shape(&self, shape: NameShape) -> Result<Vec<LogFile>> {
        // A missing directory only means nothing matches.
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| Error::Discovery {
                dir: self.dir.clone(),
                source,
            })?;

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !shape.matches(name) || !entry.path().is_file() {
                continue;
            }

            matches.push(LogFile {
                path: entry.into_path(),
                shape,
            });
        }

        Ok(matches)
    }
}

/// Discover log files in `dir` with the default order.
pub fn discover(dir: &Path) -> Result<LogFileSet> {
    LogLocator::new(dir).discover()
}

/// Sort by the lowercased full path string.
pub fn sort_log_files(files: &mut [LogFile], order: SortOrder) {
    match order {
        SortOrder::Oldest => files.sort_by_cached_key(|f| Reverse(path_key(&f.path))),
        SortOrder::Newest => files.sort_by_cached_key(|f| path_key(&f.path)),
    }
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}
