//! Command-line interface for netflags.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, ResolveArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
