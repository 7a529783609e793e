use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckListViewModel {
    pub config_path: Option<String>,
    pub checks: Vec<CheckEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CheckEntryViewModel {
    pub index: usize,
    pub description: String,
    pub pattern: String,
    pub source: String,
}
