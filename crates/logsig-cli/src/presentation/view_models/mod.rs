use std::fmt;

pub mod checks;
pub mod common;
pub mod files;
pub mod result;
pub mod scan;

pub use checks::{CheckEntryViewModel, CheckListViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use files::{DiscoveredFileViewModel, FileListViewModel};
pub use result::CommandResultViewModel;
pub use scan::{CheckReportViewModel, FileScanViewModel, ScanReportViewModel};

/// Plain-text counterpart of a view model.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
