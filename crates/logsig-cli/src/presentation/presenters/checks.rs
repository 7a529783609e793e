use crate::context::CheckSource;
use crate::presentation::view_models::{
    CheckEntryViewModel, CheckListViewModel, CommandResultViewModel,
};
use logsig_core::CheckSpec;
use std::path::Path;

pub fn present_check_list(
    config_path: Option<&Path>,
    specs: &[(CheckSource, CheckSpec)],
) -> CommandResultViewModel<CheckListViewModel> {
    let checks = specs
        .iter()
        .enumerate()
        .map(|(i, (source, spec))| CheckEntryViewModel {
            index: i + 1,
            description: spec.description.clone(),
            pattern: spec.pattern.clone(),
            source: source.label().to_string(),
        })
        .collect();

    CommandResultViewModel::new(CheckListViewModel {
        config_path: config_path
            .filter(|p| p.exists())
            .map(|p| p.display().to_string()),
        checks,
    })
}
