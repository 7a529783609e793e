//! Testing infrastructure for logsig integration tests.
//!
//! - `TestWorld`: isolated log directory and config, CLI execution
//! - `fixtures`: sample syslog lines for each built-in check, gzip writer
//! - `assertions`: checks against the JSON scan report

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
