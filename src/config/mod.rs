//! Configuration loading and parsing for netflags.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use netflags::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".netflags");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "channels:\n  telegram:\n    network:\n      forceCurl: true\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.telegram_network(None).unwrap().force_curl, Some(true));
//! ```
//!
//! # Configuration File Locations
//!
//! netflags discovers and merges configuration in this order:
//! 1. Project config (`.netflags/config.yml`)
//! 2. Local overrides (`.netflags/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use schema::{
    ChannelsConfig, NetflagsConfig, NetworkConfig, TelegramAccountConfig, TelegramConfig,
};

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};
