//! Crate-level error types.
//!
//! Runtime simulation never fails: out-of-range values are clamped. Errors
//! only arise at the configuration edge.

use std::fmt;

/// Errors produced by the orrery engine.
#[derive(Debug)]
pub enum OrreryError {
    /// Configuration JSON could not be parsed.
    ConfigParse(serde_json::Error),
    /// Configuration parsed but violates a constraint.
    InvalidConfig(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<serde_json::Error> for OrreryError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e)
    }
}
