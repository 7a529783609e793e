use std::fmt;

use crate::presentation::view_models::{CreateView, FileListViewModel};

impl CreateView for FileListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(FileListView { data: self })
    }
}

struct FileListView<'a> {
    data: &'a FileListViewModel,
}

impl<'a> fmt::Display for FileListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Log files in {} ({} first):",
            self.data.log_dir, self.data.order
        )?;

        let width = self
            .data
            .files
            .iter()
            .map(|file| file.shape.len())
            .max()
            .unwrap_or(0);

        for file in &self.data.files {
            writeln!(f, "  {:<width$}  {}", file.shape, file.path, width = width)?;
        }
        Ok(())
    }
}
