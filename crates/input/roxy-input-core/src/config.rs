//! Hold timing configuration.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Global hold thresholds, in frames. Shared by every button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HoldPolicyFields")]
pub struct HoldPolicy {
    /// Consecutive held frames before "pressed continuously" starts firing.
    pub continuous_hold_buffer: u32,
    /// Exact held frame on which the one-shot "custom held" event fires.
    pub custom_hold_threshold: u32,
}

impl HoldPolicy {
    pub const DEFAULT_CONTINUOUS_HOLD_BUFFER: u32 = 3;
    pub const DEFAULT_CUSTOM_HOLD_THRESHOLD: u32 = 20;

    pub fn new(continuous_hold_buffer: u32, custom_hold_threshold: u32) -> Result<Self, InputError> {
        let policy = Self {
            continuous_hold_buffer,
            custom_hold_threshold,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.continuous_hold_buffer == 0 {
            return Err(InputError::invalid_policy("continuous_hold_buffer", 0));
        }
        if self.custom_hold_threshold == 0 {
            return Err(InputError::invalid_policy("custom_hold_threshold", 0));
        }
        Ok(())
    }

    /// Parse a policy from JSON; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        let fields: HoldPolicyFields = serde_json::from_str(text)?;
        HoldPolicy::try_from(fields)
    }

    /// Convert a host-supplied frame count, rejecting anything below one.
    pub(crate) fn frames(field: &str, value: i64) -> Result<u32, InputError> {
        match u32::try_from(value) {
            Ok(frames) if frames >= 1 => Ok(frames),
            _ => Err(InputError::invalid_policy(field, value)),
        }
    }
}

impl Default for HoldPolicy {
    fn default() -> Self {
        Self {
            continuous_hold_buffer: Self::DEFAULT_CONTINUOUS_HOLD_BUFFER,
            custom_hold_threshold: Self::DEFAULT_CUSTOM_HOLD_THRESHOLD,
        }
    }
}

/// Unvalidated wire form; every deserialized policy goes through `validate`.
#[derive(Deserialize)]
#[serde(default)]
struct HoldPolicyFields {
    continuous_hold_buffer: u32,
    custom_hold_threshold: u32,
}

impl Default for HoldPolicyFields {
    fn default() -> Self {
        Self {
            continuous_hold_buffer: HoldPolicy::DEFAULT_CONTINUOUS_HOLD_BUFFER,
            custom_hold_threshold: HoldPolicy::DEFAULT_CUSTOM_HOLD_THRESHOLD,
        }
    }
}

impl TryFrom<HoldPolicyFields> for HoldPolicy {
    type Error = InputError;

    fn try_from(fields: HoldPolicyFields) -> Result<Self, Self::Error> {
        HoldPolicy::new(fields.continuous_hold_buffer, fields.custom_hold_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = HoldPolicy::default();
        assert_eq!(policy.continuous_hold_buffer, 3);
        assert_eq!(policy.custom_hold_threshold, 20);
    }

    #[test]
    fn json_fills_missing_fields() {
        let policy = HoldPolicy::from_json(r#"{ "custom_hold_threshold": 8 }"#).unwrap();
        assert_eq!(policy.continuous_hold_buffer, 3);
        assert_eq!(policy.custom_hold_threshold, 8);
        assert_eq!(HoldPolicy::from_json("{}").unwrap(), HoldPolicy::default());
    }

    #[test]
    fn zero_frames_rejected() {
        assert!(matches!(
            HoldPolicy::new(0, 5),
            Err(InputError::InvalidPolicy { .. })
        ));
        let err = HoldPolicy::from_json(r#"{ "custom_hold_threshold": 0 }"#).unwrap_err();
        assert_eq!(err, InputError::invalid_policy("custom_hold_threshold", 0));
    }

    #[test]
    fn deserializing_directly_still_validates() {
        let err = serde_json::from_str::<HoldPolicy>(r#"{ "continuous_hold_buffer": 0 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("continuous_hold_buffer must be >= 1"));

        let policy: HoldPolicy =
            serde_json::from_str(r#"{ "continuous_hold_buffer": 2 }"#).unwrap();
        assert_eq!(policy, HoldPolicy::new(2, 20).unwrap());

        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(serde_json::from_str::<HoldPolicy>(&json).unwrap(), policy);
    }

    #[test]
    fn negative_json_is_a_serialization_error() {
        let err = HoldPolicy::from_json(r#"{ "continuous_hold_buffer": -1 }"#).unwrap_err();
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn host_frame_counts() {
        assert_eq!(HoldPolicy::frames("x", 1).unwrap(), 1);
        assert_eq!(HoldPolicy::frames("x", 40).unwrap(), 40);
        assert!(HoldPolicy::frames("x", 0).is_err());
        assert!(HoldPolicy::frames("x", -3).is_err());
        assert!(HoldPolicy::frames("x", i64::MAX).is_err());
    }
}
