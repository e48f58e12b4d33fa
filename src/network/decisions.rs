//! Both toggles resolved together.

use std::env::VarError;

use serde::Serialize;

use crate::config::NetworkConfig;

use super::auto_select_family::resolve_auto_select_family_with_env;
use super::decision::Decision;
use super::force_curl::resolve_force_curl_with_env;

/// The decisions a networking layer needs before building its client.
///
/// The two toggles are resolved independently from the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDecisions {
    /// Whether to enable automatic IP-family selection.
    pub auto_select_family: Decision,
    /// Whether to force requests through curl.
    pub force_curl: Decision,
}

impl NetworkDecisions {
    /// Resolve both toggles against the process environment.
    pub fn resolve(network: Option<&NetworkConfig>, node_major: Option<u32>) -> Self {
        Self::resolve_with_env(|key| std::env::var(key), network, node_major)
    }

    /// Resolve both toggles with a custom env var lookup.
    pub fn resolve_with_env<F>(
        env_fn: F,
        network: Option<&NetworkConfig>,
        node_major: Option<u32>,
    ) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Self {
            auto_select_family: resolve_auto_select_family_with_env(&env_fn, network, node_major),
            force_curl: resolve_force_curl_with_env(&env_fn, network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DecisionSource, FORCE_CURL_ENV};
    use std::collections::HashMap;

    #[test]
    fn resolves_each_toggle_independently() {
        let vars = HashMap::from([(FORCE_CURL_ENV.to_string(), "1".to_string())]);
        let config = NetworkConfig {
            auto_select_family: Some(false),
            force_curl: Some(false),
        };
        let decisions =
            NetworkDecisions::resolve_with_env(crate::network::lookup_in(&vars), Some(&config), None);
        assert_eq!(
            decisions.auto_select_family,
            Decision::new(false, DecisionSource::Config)
        );
        assert_eq!(
            decisions.force_curl,
            Decision::new(true, DecisionSource::Env(FORCE_CURL_ENV))
        );
    }

    #[test]
    fn serializes_camel_case() {
        let vars = HashMap::new();
        let decisions =
            NetworkDecisions::resolve_with_env(crate::network::lookup_in(&vars), None, Some(20));
        let json = serde_json::to_value(decisions).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "autoSelectFamily": { "value": null },
                "forceCurl": { "value": false, "source": "default" },
            })
        );
    }
}
