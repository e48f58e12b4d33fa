//! Terminal output.
//!
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled output to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use netflags::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_entry("forceCurl", "false (default)");
//! assert!(ui.has_message("forceCurl"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show an aligned `key: value` line.
    fn show_entry(&mut self, key: &str, value: &str);

    /// Write machine-readable output. Shown in every mode, never styled.
    fn data(&mut self, data: &str);
}
