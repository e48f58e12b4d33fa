//! netflags - Resolve Telegram network toggles.
//!
//! Decides whether the Telegram network layer should enable automatic
//! IP-family selection and whether it should force requests through curl,
//! by combining environment overrides, explicit configuration, the runtime
//! major version and defaults. Every decision records which source won.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`network`] - Toggle resolution
//! - [`runtime`] - Runtime major version detection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use netflags::network::{lookup_in, resolve_auto_select_family_with_env, resolve_force_curl_with_env};
//!
//! let env = HashMap::from([(
//!     "OPENCLAW_TELEGRAM_FORCE_CURL".to_string(),
//!     "1".to_string(),
//! )]);
//!
//! let family = resolve_auto_select_family_with_env(lookup_in(&env), None, Some(22));
//! assert_eq!(family.to_string(), "true (default-node22)");
//!
//! let curl = resolve_force_curl_with_env(lookup_in(&env), None);
//! assert_eq!(curl.to_string(), "true (env:OPENCLAW_TELEGRAM_FORCE_CURL)");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod runtime;
pub mod ui;

pub use error::{NetflagsError, Result};
