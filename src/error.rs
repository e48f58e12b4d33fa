//! Error types for netflags operations.
//!
//! This module defines [`NetflagsError`], the error type used by the outer
//! surfaces of the crate (config loading and the CLI), and a [`Result`]
//! type alias for convenience.
//!
//! The resolvers in [`crate::network`] never fail: missing or malformed
//! input is treated as "not set" and falls through to the next tier.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for netflags operations.
#[derive(Debug, Error)]
pub enum NetflagsError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for netflags operations.
pub type Result<T> = std::result::Result<T, NetflagsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = NetflagsError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = NetflagsError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NetflagsError = io_err.into();
        assert!(matches!(err, NetflagsError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: NetflagsError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
