//! Configuration schema definitions for netflags.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format:
//!
//! ```yaml
//! channels:
//!   telegram:
//!     network:
//!       autoSelectFamily: true
//!       forceCurl: false
//!     accounts:
//!       work:
//!         network:
//!           autoSelectFamily: false
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Root configuration structure for `.netflags/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetflagsConfig {
    /// Per-channel settings.
    pub channels: ChannelsConfig,
}

impl NetflagsConfig {
    /// Effective Telegram network config for an optional account.
    ///
    /// Returns `None` when neither the channel nor the account carries a
    /// `network` section.
    pub fn telegram_network(&self, account: Option<&str>) -> Option<NetworkConfig> {
        self.channels
            .telegram
            .as_ref()
            .and_then(|telegram| telegram.network_for(account))
    }
}

/// Channel sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    /// Telegram channel settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramConfig>,
}

/// Telegram channel settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Channel-wide network toggles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkConfig>,

    /// Per-account overrides, keyed by account id.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub accounts: HashMap<String, TelegramAccountConfig>,
}

impl TelegramConfig {
    /// Channel network config with the account's fields layered on top.
    pub fn network_for(&self, account: Option<&str>) -> Option<NetworkConfig> {
        let account_network = account
            .and_then(|id| self.accounts.get(id))
            .and_then(|a| a.network.as_ref());

        match (&self.network, account_network) {
            (Some(base), Some(over)) => Some(base.overlay(over)),
            (Some(base), None) => Some(base.clone()),
            (None, Some(over)) => Some(over.clone()),
            (None, None) => None,
        }
    }
}

/// A single Telegram account's settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramAccountConfig {
    /// Network toggles for this account only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkConfig>,
}

/// Explicit network toggles. An absent field means "no opinion".
///
/// Non-boolean values are read as absent rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Enable automatic IP-family selection.
    #[serde(
        alias = "auto_select_family",
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_select_family: Option<bool>,

    /// Force requests through curl.
    #[serde(
        alias = "force_curl",
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub force_curl: Option<bool>,
}

impl NetworkConfig {
    /// Fields set in `over` replace fields in `self`.
    pub fn overlay(&self, over: &NetworkConfig) -> NetworkConfig {
        NetworkConfig {
            auto_select_family: over.auto_select_family.or(self.auto_select_family),
            force_curl: over.force_curl.or(self.force_curl),
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.auto_select_family.is_none() && self.force_curl.is_none()
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match value {
        serde_yaml::Value::Bool(b) => Ok(Some(b)),
        serde_yaml::Value::Null => Ok(None),
        other => {
            tracing::warn!("Ignoring non-boolean network toggle: {:?}", other);
            Ok(None)
        }
    }
}
