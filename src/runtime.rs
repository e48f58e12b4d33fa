//! Runtime major version detection.
//!
//! The auto-select-family default depends on the JavaScript runtime's
//! major version. This module turns version strings like `v22.3.0` into a
//! major number and can probe the installed `node` binary for one.
//!
//! Anything unparseable or unavailable yields `None` (unknown).

use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

/// Runtime binary probed by [`detect_node_major`].
pub const NODE_BINARY: &str = "node";

static RE_MAJOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)(?:\.\d+)*").expect("valid version regex"));

/// Extract the major version from a version string.
///
/// # Example
///
/// ```
/// use netflags::runtime::parse_major_version;
///
/// assert_eq!(parse_major_version("v22.3.0"), Some(22));
/// assert_eq!(parse_major_version("20"), Some(20));
/// assert_eq!(parse_major_version("unknown"), None);
/// ```
pub fn parse_major_version(raw: &str) -> Option<u32> {
    RE_MAJOR
        .captures(raw.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Probe the installed `node` binary for its major version.
pub fn detect_node_major() -> Option<u32> {
    detect_major_with(NODE_BINARY)
}

/// Run `<binary> --version` and parse the major version it prints.
pub fn detect_major_with(binary: &str) -> Option<u32> {
    match Command::new(binary).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let major = parse_major_version(&stdout);
            tracing::debug!("{} --version reported {:?}", binary, major);
            major
        }
        Ok(output) => {
            tracing::debug!("{} --version exited with {}", binary, output.status);
            None
        }
        Err(e) => {
            tracing::debug!("Could not run {} --version: {}", binary, e);
            None
        }
    }
}
