//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
