//! Environment override flags.
//!
//! A flag counts as set only when its variable equals the literal `"1"`.
//! Any other value, including `""`, `"0"` or `"true"`, leaves it unset.

use std::collections::HashMap;
use std::env::VarError;

/// Forces auto-select-family on. Highest precedence.
pub const ENABLE_AUTO_SELECT_FAMILY_ENV: &str = "OPENCLAW_TELEGRAM_ENABLE_AUTO_SELECT_FAMILY";

/// Forces auto-select-family off.
pub const DISABLE_AUTO_SELECT_FAMILY_ENV: &str = "OPENCLAW_TELEGRAM_DISABLE_AUTO_SELECT_FAMILY";

/// Forces requests through curl. Highest precedence.
pub const FORCE_CURL_ENV: &str = "OPENCLAW_TELEGRAM_FORCE_CURL";

/// Forbids forcing requests through curl.
pub const DISABLE_CURL_ENV: &str = "OPENCLAW_TELEGRAM_DISABLE_CURL";

/// Every variable the resolvers read.
pub const ALL_FLAGS: [&str; 4] = [
    ENABLE_AUTO_SELECT_FAMILY_ENV,
    DISABLE_AUTO_SELECT_FAMILY_ENV,
    FORCE_CURL_ENV,
    DISABLE_CURL_ENV,
];

/// Check whether `var` is set to `"1"` according to `env_fn`.
pub fn is_flag_set<F>(env_fn: &F, var: &str) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    env_fn(var).as_deref() == Ok("1")
}

/// Adapt a map of variables into an env lookup.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use netflags::network::{is_flag_set, lookup_in, FORCE_CURL_ENV};
///
/// let vars = HashMap::from([(FORCE_CURL_ENV.to_string(), "1".to_string())]);
/// assert!(is_flag_set(&lookup_in(&vars), FORCE_CURL_ENV));
/// ```
pub fn lookup_in(
    vars: &HashMap<String, String>,
) -> impl Fn(&str) -> Result<String, VarError> + '_ {
    move |key: &str| vars.get(key).cloned().ok_or(VarError::NotPresent)
}
