use std::fmt;

use crate::presentation::view_models::{CheckListViewModel, CreateView};

impl CreateView for CheckListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckListView { data: self })
    }
}

struct CheckListView<'a> {
    data: &'a CheckListViewModel,
}

impl<'a> fmt::Display for CheckListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.data.config_path {
            writeln!(f, "Config: {}\n", path)?;
        }

        for check in &self.data.checks {
            writeln!(f, "{}. {} [{}]", check.index, check.description, check.source)?;
            writeln!(f, "   {}", check.pattern)?;
        }
        Ok(())
    }
}
