//! Error types for rendering and embed configuration

use std::fmt;

/// Rejected input to a render call. Reported before any drawing happens.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

impl RenderError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{}`: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Failure to load or apply an embed configuration
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    Color(String),
    Effect(String),
    /// Export target is not a usable element id
    Element(String),
    Render(RenderError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "malformed config JSON: {}", e),
            Self::Color(s) => write!(f, "invalid color {:?}, expected #RRGGBB", s),
            Self::Effect(s) => write!(f, "unknown effect {:?}", s),
            Self::Element(s) => write!(f, "invalid element {:?}, expected an id like #my-element", s),
            Self::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<RenderError> for ConfigError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = RenderError::invalid("angularStep", "must be > 0, got -1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `angularStep`: must be > 0, got -1"
        );
    }

    #[test]
    fn test_config_error_wraps_render_error() {
        let err: ConfigError = RenderError::invalid("ringCount", "negative").into();
        assert!(matches!(err, ConfigError::Render(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
