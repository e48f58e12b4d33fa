//! Config command implementation.
//!
//! The `netflags config` command shows the effective network configuration
//! and the files it came from.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config_file, load_merged_config, ConfigPaths, NetworkConfig};
use crate::error::{NetflagsError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn sources(&self) -> Vec<PathBuf> {
        match &self.config_path {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match &self.config_path {
            Some(path) => load_config_file(path),
            None => load_merged_config(&self.project_root),
        };
        let config = match loaded {
            Ok(c) => c,
            Err(NetflagsError::ConfigNotFound { path }) => {
                ui.error(&format!("No configuration found at {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e @ NetflagsError::ConfigParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let network = config
            .telegram_network(self.args.account.as_deref())
            .unwrap_or_default();

        if self.args.json {
            let json = serde_json::to_string_pretty(&network)
                .map_err(|e| NetflagsError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        for path in self.sources() {
            ui.message(&format!("# {}", path.display()));
        }

        if network.is_empty() {
            ui.warning("No Telegram network settings configured");
            return Ok(CommandResult::success());
        }

        show_network(ui, &network);
        Ok(CommandResult::success())
    }
}

fn show_network(ui: &mut dyn UserInterface, network: &NetworkConfig) {
    let fmt = |v: Option<bool>| v.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string());
    ui.show_header("Telegram network config");
    ui.show_entry("autoSelectFamily", &fmt(network.auto_select_family));
    ui.show_entry("forceCurl", &fmt(network.force_curl));
}
