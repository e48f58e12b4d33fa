//! Auto-select-family resolution.
//!
//! Resolves whether outbound connections enable automatic IP-family
//! selection, using the priority chain:
//! 1. `OPENCLAW_TELEGRAM_ENABLE_AUTO_SELECT_FAMILY=1`
//! 2. `OPENCLAW_TELEGRAM_DISABLE_AUTO_SELECT_FAMILY=1`
//! 3. Config `autoSelectFamily`
//! 4. Runtime major version >= 22
//! 5. Undecided

use std::env::VarError;

use crate::config::NetworkConfig;

use super::decision::{Decision, DecisionSource};
use super::env_flags::{DISABLE_AUTO_SELECT_FAMILY_ENV, ENABLE_AUTO_SELECT_FAMILY_ENV};
use super::{config_override, env_override};

/// Lowest runtime major version that enables auto-select-family by default.
pub const AUTO_SELECT_FAMILY_MIN_NODE_MAJOR: u32 = 22;

/// Resolve auto-select-family against the process environment.
///
/// See [`resolve_auto_select_family_with_env`].
pub fn resolve_auto_select_family(
    network: Option<&NetworkConfig>,
    node_major: Option<u32>,
) -> Decision {
    resolve_auto_select_family_with_env(|key| std::env::var(key), network, node_major)
}

/// Resolve auto-select-family with a custom env var lookup.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use netflags::network::{lookup_in, resolve_auto_select_family_with_env, DecisionSource};
///
/// let env = HashMap::new();
/// let decision = resolve_auto_select_family_with_env(lookup_in(&env), None, Some(22));
/// assert_eq!(decision.value(), Some(true));
/// assert_eq!(decision.source(), Some(DecisionSource::DefaultNode22));
///
/// let decision = resolve_auto_select_family_with_env(lookup_in(&env), None, Some(20));
/// assert_eq!(decision.value(), None);
/// ```
pub fn resolve_auto_select_family_with_env<F>(
    env_fn: F,
    network: Option<&NetworkConfig>,
    node_major: Option<u32>,
) -> Decision
where
    F: Fn(&str) -> Result<String, VarError>,
{
    env_override(&env_fn, ENABLE_AUTO_SELECT_FAMILY_ENV, true)
        .or_else(|| env_override(&env_fn, DISABLE_AUTO_SELECT_FAMILY_ENV, false))
        .or_else(|| config_override(network.and_then(|n| n.auto_select_family)))
        .or_else(|| runtime_default(node_major))
        .unwrap_or_else(Decision::undecided)
}

fn runtime_default(node_major: Option<u32>) -> Option<Decision> {
    node_major
        .filter(|major| *major >= AUTO_SELECT_FAMILY_MIN_NODE_MAJOR)
        .map(|_| Decision::new(true, DecisionSource::DefaultNode22))
}
