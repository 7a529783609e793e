use crate::presentation::view_models::{
    CommandResultViewModel, DiscoveredFileViewModel, FileListViewModel, StatusBadge,
};
use logsig_core::SortOrder;
use logsig_scanner::LogFileSet;
use std::path::Path;

pub fn present_file_list(
    log_dir: &Path,
    order: SortOrder,
    files: &LogFileSet,
) -> CommandResultViewModel<FileListViewModel> {
    let entries = files
        .iter()
        .map(|file| DiscoveredFileViewModel {
            path: file.path.display().to_string(),
            shape: file.shape.label().to_string(),
            rotation: file.rotation(),
        })
        .collect();

    let content = FileListViewModel {
        log_dir: log_dir.display().to_string(),
        order: order.to_string(),
        files: entries,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::info(format!("{} log file(s) found", files.len())))
}
