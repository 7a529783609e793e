use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FileListViewModel {
    pub log_dir: String,
    pub order: String,
    pub files: Vec<DiscoveredFileViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DiscoveredFileViewModel {
    pub path: String,
    pub shape: String,
    pub rotation: Option<u32>,
}
