pub mod config;
pub mod error;
pub mod path;
pub mod types;

pub use config::{Config, DEFAULT_ESCALATE_ABOVE};
pub use error::{Error, Result};
pub use path::{DEFAULT_LOG_DIR, expand_tilde, resolve_config_path, resolve_log_dir};
pub use types::{CheckSpec, SortOrder};
