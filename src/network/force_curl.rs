//! Force-curl resolution.
//!
//! Resolves whether outbound requests go through an external curl client
//! instead of the built-in stack. Priority chain:
//! 1. `OPENCLAW_TELEGRAM_FORCE_CURL=1`
//! 2. `OPENCLAW_TELEGRAM_DISABLE_CURL=1`
//! 3. Config `forceCurl`
//! 4. `false`
//!
//! Unlike auto-select-family, this chain always ends in a concrete value.

use std::env::VarError;

use crate::config::NetworkConfig;

use super::decision::{Decision, DecisionSource};
use super::env_flags::{DISABLE_CURL_ENV, FORCE_CURL_ENV};
use super::{config_override, env_override};

/// Resolve force-curl against the process environment.
pub fn resolve_force_curl(network: Option<&NetworkConfig>) -> Decision {
    resolve_force_curl_with_env(|key| std::env::var(key), network)
}

/// Resolve force-curl with a custom env var lookup.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use netflags::network::{lookup_in, resolve_force_curl_with_env, DecisionSource};
///
/// let env = HashMap::new();
/// let decision = resolve_force_curl_with_env(lookup_in(&env), None);
/// assert_eq!(decision.value(), Some(false));
/// assert_eq!(decision.source(), Some(DecisionSource::Fallback));
/// ```
pub fn resolve_force_curl_with_env<F>(env_fn: F, network: Option<&NetworkConfig>) -> Decision
where
    F: Fn(&str) -> Result<String, VarError>,
{
    env_override(&env_fn, FORCE_CURL_ENV, true)
        .or_else(|| env_override(&env_fn, DISABLE_CURL_ENV, false))
        .or_else(|| config_override(network.and_then(|n| n.force_curl)))
        .unwrap_or_else(|| Decision::new(false, DecisionSource::Fallback))
}
