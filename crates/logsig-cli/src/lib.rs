// logsig: known-signature scanning over rotated syslog files.
//
// Pipeline: locate `syslog*` files in one directory, stream every line of
// every file against a shared list of pattern checks, then report counts,
// first examples and escalations. Everything runs on one thread, in file
// order, so the first example of a check is deterministic.

mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ScanArgs};
pub use commands::run;
pub use logging::init_logging;
