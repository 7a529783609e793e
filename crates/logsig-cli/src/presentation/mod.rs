//! # Presentation Layer
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts. No calculation.
//! * `presenters/`: convert scanner results into view models.
//! * `views/`: `Display` implementations for plain text output.
//! * `renderers/`: print a `CommandResultViewModel` as text or JSON.
//!
//! The JSON test: if a view model is printed with `--format json`, it should be
//! clean and machine-readable without knowing anything about the scanner types.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
