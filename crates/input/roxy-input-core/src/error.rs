//! Error types for the input core.
//!
//! Frame classification never fails. These errors come from the
//! configuration and name-lookup boundary only.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InputError {
    /// Button name is not one of "A", "B", "up", "down", "left" or "right".
    #[error("Unknown button: {name}")]
    UnknownButton { name: String },

    /// Hold policy values must be at least one frame.
    #[error("Invalid hold policy: {field} must be >= 1 (got {value})")]
    InvalidPolicy { field: String, value: i64 },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl InputError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownButton { .. } => "button",
            Self::InvalidPolicy { .. } => "config",
            Self::SerializationError { .. } => "serialization",
        }
    }

    pub(crate) fn invalid_policy(field: &str, value: i64) -> Self {
        Self::InvalidPolicy {
            field: field.to_string(),
            value,
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
