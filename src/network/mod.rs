//! Network toggle resolution.
//!
//! Decides two independent toggles for the Telegram network layer:
//! - [`resolve_auto_select_family`]: automatic IP-family selection
//! - [`resolve_force_curl`]: route requests through curl
//!
//! Each resolver walks an ordered list of tiers (environment flags, config,
//! defaults) and returns a [`Decision`] tagged with the tier that matched.
//! Resolution is pure and never fails.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use netflags::config::NetworkConfig;
//! use netflags::network::{lookup_in, NetworkDecisions};
//!
//! let env = HashMap::from([(
//!     "OPENCLAW_TELEGRAM_DISABLE_CURL".to_string(),
//!     "1".to_string(),
//! )]);
//! let config = NetworkConfig {
//!     auto_select_family: Some(true),
//!     force_curl: Some(true),
//! };
//!
//! let decisions = NetworkDecisions::resolve_with_env(lookup_in(&env), Some(&config), None);
//! assert_eq!(decisions.auto_select_family.to_string(), "true (config)");
//! assert_eq!(
//!     decisions.force_curl.to_string(),
//!     "false (env:OPENCLAW_TELEGRAM_DISABLE_CURL)"
//! );
//! ```

pub mod auto_select_family;
pub mod decision;
pub mod decisions;
pub mod env_flags;
pub mod force_curl;

pub use auto_select_family::{
    resolve_auto_select_family, resolve_auto_select_family_with_env,
    AUTO_SELECT_FAMILY_MIN_NODE_MAJOR,
};
pub use decision::{Decision, DecisionSource};
pub use decisions::NetworkDecisions;
pub use env_flags::{
    is_flag_set, lookup_in, ALL_FLAGS, DISABLE_AUTO_SELECT_FAMILY_ENV, DISABLE_CURL_ENV,
    ENABLE_AUTO_SELECT_FAMILY_ENV, FORCE_CURL_ENV,
};
pub use force_curl::{resolve_force_curl, resolve_force_curl_with_env};

use std::env::VarError;

/// Tier: `var` set to `"1"` forces `value`.
fn env_override<F>(env_fn: &F, var: &'static str, value: bool) -> Option<Decision>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    is_flag_set(env_fn, var).then(|| Decision::new(value, DecisionSource::Env(var)))
}

/// Tier: an explicitly configured value.
fn config_override(value: Option<bool>) -> Option<Decision> {
    value.map(|v| Decision::new(v, DecisionSource::Config))
}
