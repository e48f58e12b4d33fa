//! Configuration file discovery and loading.
//!
//! This module finds the project's configuration files and loads them in
//! priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::NetflagsConfig;
use crate::error::{NetflagsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root holding configuration.
pub const CONFIG_DIR: &str = ".netflags";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.netflags/config.yml`)
/// 2. Local overrides (`.netflags/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .netflags/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .netflags/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any config file exists.
    pub fn has_any(&self) -> bool {
        self.project.is_some() || self.project_local.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<NetflagsConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<NetflagsConfig> {
    if content.trim().is_empty() {
        return Ok(NetflagsConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| NetflagsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| NetflagsError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NetflagsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NetflagsError::Io(e)
        }
    })
}

/// Load and merge the project's config files.
///
/// # Errors
///
/// Returns `ConfigNotFound` if neither config file exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<NetflagsConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_any() {
        return Err(NetflagsError::ConfigNotFound {
            path: project_root.join(CONFIG_DIR).join("config.yml"),
        });
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| NetflagsError::ConfigParseError {
        path: project_root.join(CONFIG_DIR),
        message: e.to_string(),
    })
}

/// Load config from an explicit path, or discover it under the project root.
///
/// A missing discovered config is not an error: it yields the default
/// config, meaning "no explicit opinion". A missing explicit path is.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<NetflagsConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match load_merged_config(project_root) {
        Err(NetflagsError::ConfigNotFound { path }) => {
            tracing::debug!("No config at {}; using defaults", path.display());
            Ok(NetflagsConfig::default())
        }
        other => other,
    }
}
