//! Error types for the animation core.
//!
//! Evaluation itself is total; these errors only surface when host-provided
//! names or tokens are parsed strictly.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// No easing curve is registered under this name.
    #[error("Easing function not found: {name}")]
    UnknownEasing { name: String },

    /// Loop mode token is not one of "none", "loop" or "ping-pong".
    #[error("Unknown loop mode: {token}")]
    UnknownLoopMode { token: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl AnimationError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownEasing { .. } => "easing",
            Self::UnknownLoopMode { .. } => "sequence",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
