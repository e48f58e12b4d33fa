//! Resolved toggle values and the tier that produced them.

use serde::{Serialize, Serializer};

/// Which precedence tier produced a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionSource {
    /// Forced by an environment variable set to `"1"`.
    Env(&'static str),
    /// Explicitly set in the network configuration.
    Config,
    /// Runtime major version is at or above the auto-select-family threshold.
    DefaultNode22,
    /// Unconditional default.
    Fallback,
}

impl std::fmt::Display for DecisionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env(var) => write!(f, "env:{}", var),
            Self::Config => write!(f, "config"),
            Self::DefaultNode22 => write!(f, "default-node22"),
            Self::Fallback => write!(f, "default"),
        }
    }
}

impl Serialize for DecisionSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The outcome of a resolver.
///
/// Either a concrete value with the tier that produced it, or undecided.
/// An undecided result never carries a source; the consumer applies its
/// own fallback (see [`Decision::value_or`]).
///
/// # Example
///
/// ```
/// use netflags::network::{Decision, DecisionSource};
///
/// let decision = Decision::new(true, DecisionSource::Config);
/// assert_eq!(decision.value(), Some(true));
/// assert_eq!(decision.source().map(|s| s.to_string()), Some("config".to_string()));
///
/// let undecided = Decision::undecided();
/// assert_eq!(undecided.value(), None);
/// assert!(undecided.source().is_none());
/// assert!(undecided.value_or(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Decision {
    value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<DecisionSource>,
}

impl Decision {
    /// Create a decided result.
    pub fn new(value: bool, source: DecisionSource) -> Self {
        Self {
            value: Some(value),
            source: Some(source),
        }
    }

    /// Create a result where no tier applied.
    pub fn undecided() -> Self {
        Self {
            value: None,
            source: None,
        }
    }

    /// The decided value, if any.
    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// The tier that produced the value, if any.
    pub fn source(&self) -> Option<DecisionSource> {
        self.source
    }

    /// Whether a tier produced a value.
    pub fn is_decided(&self) -> bool {
        self.value.is_some()
    }

    /// The decided value, or `platform_default` when undecided.
    pub fn value_or(&self, platform_default: bool) -> bool {
        self.value.unwrap_or(platform_default)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.value, self.source) {
            (Some(value), Some(source)) => write!(f, "{} ({})", value, source),
            _ => write!(f, "unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_display_env() {
        assert_eq!(
            DecisionSource::Env("OPENCLAW_TELEGRAM_FORCE_CURL").to_string(),
            "env:OPENCLAW_TELEGRAM_FORCE_CURL"
        );
    }

    #[test]
    fn source_display_literal_tags() {
        assert_eq!(DecisionSource::Config.to_string(), "config");
        assert_eq!(DecisionSource::DefaultNode22.to_string(), "default-node22");
        assert_eq!(DecisionSource::Fallback.to_string(), "default");
    }

    #[test]
    fn undecided_has_no_source() {
        let decision = Decision::undecided();
        assert!(!decision.is_decided());
        assert_eq!(decision.value(), None);
        assert_eq!(decision.source(), None);
    }

    #[test]
    fn decided_false_is_distinct_from_undecided() {
        let decision = Decision::new(false, DecisionSource::Fallback);
        assert!(decision.is_decided());
        assert_ne!(decision, Decision::undecided());
    }

    #[test]
    fn value_or_only_applies_when_undecided() {
        assert!(Decision::undecided().value_or(true));
        assert!(!Decision::new(false, DecisionSource::Config).value_or(true));
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            Decision::new(true, DecisionSource::DefaultNode22).to_string(),
            "true (default-node22)"
        );
        assert_eq!(Decision::undecided().to_string(), "unset");
    }

    #[test]
    fn serializes_with_source_tag() {
        let json = serde_json::to_value(Decision::new(true, DecisionSource::Config)).unwrap();
        assert_eq!(json, serde_json::json!({ "value": true, "source": "config" }));
    }

    #[test]
    fn serializes_undecided_without_source() {
        let json = serde_json::to_value(Decision::undecided()).unwrap();
        assert_eq!(json, serde_json::json!({ "value": null }));
    }
}
