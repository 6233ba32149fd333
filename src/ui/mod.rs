//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminals
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use envprofile::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("http://localhost:3000");
//! assert!(ui.has_message("localhost"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write command output. Always shown.
    fn message(&mut self, msg: &str);

    /// Write secondary information, such as a header line. Hidden in quiet mode.
    fn note(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
