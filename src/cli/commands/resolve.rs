//! Resolve command implementation.
//!
//! The `netflags resolve` command decides both network toggles from the
//! process environment, the loaded config and the runtime major version.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::load_config;
use crate::error::{NetflagsError, Result};
use crate::network::{lookup_in, Decision, NetworkDecisions, ALL_FLAGS};
use crate::runtime::detect_node_major;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ResolveArgs,
    env: HashMap<String, String>,
}

impl ResolveCommand {
    /// Create a new resolve command reading flags from the process environment.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ResolveArgs) -> Self {
        let env = ALL_FLAGS
            .iter()
            .filter_map(|var| std::env::var(var).ok().map(|v| (var.to_string(), v)))
            .collect();
        Self::with_env(project_root, config_path, args, env)
    }

    /// Create with an explicit set of environment variables (for testing).
    pub fn with_env(
        project_root: &Path,
        config_path: Option<&Path>,
        args: ResolveArgs,
        env: HashMap<String, String>,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
            env,
        }
    }

    fn node_major(&self) -> Option<u32> {
        if self.args.node_major.is_some() {
            return self.args.node_major;
        }
        if self.args.no_probe {
            return None;
        }
        detect_node_major()
    }
}

/// Human-readable rendering of a decision.
fn describe(decision: &Decision) -> String {
    if decision.is_decided() {
        decision.to_string()
    } else {
        "unset (runtime default applies)".to_string()
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(
                e @ (NetflagsError::ConfigNotFound { .. } | NetflagsError::ConfigParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let network = config.telegram_network(self.args.account.as_deref());
        let node_major = self.node_major();
        let decisions =
            NetworkDecisions::resolve_with_env(lookup_in(&self.env), network.as_ref(), node_major);

        tracing::debug!(
            "Resolved autoSelectFamily={} forceCurl={} (node major {:?})",
            decisions.auto_select_family,
            decisions.force_curl,
            node_major
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&decisions)
                .map_err(|e| NetflagsError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        let entries = [
            ("autoSelectFamily", describe(&decisions.auto_select_family)),
            ("forceCurl", describe(&decisions.force_curl)),
        ];

        // Quiet mode still prints the result, unstyled.
        if !ui.output_mode().shows_status() {
            for (key, value) in &entries {
                ui.data(&format!("{}: {}", key, value));
            }
            return Ok(CommandResult::success());
        }

        ui.show_header("Telegram network");
        for (key, value) in &entries {
            ui.show_entry(key, value);
        }

        if ui.output_mode().shows_detail() {
            let runtime = node_major
                .map(|m| m.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            ui.show_entry("nodeMajor", &runtime);
            if let Some(account) = &self.args.account {
                ui.show_entry("account", account);
            }
        }

        Ok(CommandResult::success())
    }
}
