//! Sequence time mapping.
//!
//! Converts raw elapsed time into a time inside `[0, duration]` according to
//! the sequence's loop mode, plus a direction flag for ping-pong playback.
//! Stateless: callers keep their own elapsed time and call this every frame.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::easing::{Easing, EasingParams};
use crate::error::AnimationError;
use crate::math;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoopMode {
    /// Play once; time is clamped to the duration.
    #[default]
    #[serde(rename = "none")]
    Once,
    /// Wrap back to the start after each pass.
    #[serde(rename = "loop")]
    Loop,
    /// Run forward, then backward, then forward again.
    #[serde(rename = "ping-pong")]
    PingPong,
}

impl LoopMode {
    /// Lenient host-token parsing: a missing or unrecognized token means
    /// [`LoopMode::Once`].
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => LoopMode::Once,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::debug!("unrecognized loop mode token {raw:?}, clamping instead");
                LoopMode::Once
            }),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LoopMode::Once => "none",
            LoopMode::Loop => "loop",
            LoopMode::PingPong => "ping-pong",
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for LoopMode {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(LoopMode::Once),
            "loop" => Ok(LoopMode::Loop),
            "ping-pong" => Ok(LoopMode::PingPong),
            other => Err(AnimationError::UnknownLoopMode {
                token: other.to_string(),
            }),
        }
    }
}

/// Mapped sequence time and the direction of travel.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClampedTime {
    pub time: f32,
    /// `false` only on the return leg of a ping-pong cycle.
    pub forward: bool,
}

impl ClampedTime {
    #[inline]
    fn forward(time: f32) -> Self {
        Self {
            time,
            forward: true,
        }
    }
}

/// Map `time` into `[0, duration]` for the given loop mode.
///
/// - `Once`: clamp to `[0, duration]`.
/// - `Loop`: floating remainder by `duration`. The remainder keeps the sign of
///   `time`, so negative input stays negative.
/// - `PingPong`: remainder by `2 * duration`, mirrored on the return leg.
///
/// A non-positive (or NaN) duration maps everything to `0.0`, forward.
pub fn clamped_time(time: f32, duration: f32, mode: LoopMode) -> ClampedTime {
    if duration.is_nan() || duration <= 0.0 {
        log::debug!("sequence duration {duration} is not positive, pinning time to 0");
        return ClampedTime::forward(0.0);
    }
    match mode {
        LoopMode::Once => ClampedTime::forward(math::clamp(time, 0.0, duration)),
        LoopMode::Loop => ClampedTime::forward(time % duration),
        LoopMode::PingPong => {
            let period = 2.0 * duration;
            let wrapped = time % period;
            if wrapped > duration {
                ClampedTime {
                    time: period - wrapped,
                    forward: false,
                }
            } else {
                ClampedTime::forward(wrapped)
            }
        }
    }
}

/// Map `time` for the sequence and evaluate `easing` over `[0, duration]`
/// from `begin` by `change`. Returns the eased value and the direction flag.
pub fn sample_sequence(
    easing: Easing,
    params: &EasingParams,
    time: f32,
    duration: f32,
    mode: LoopMode,
    begin: f32,
    change: f32,
) -> (f32, bool) {
    let mapped = clamped_time(time, duration, mode);
    if duration.is_nan() || duration <= 0.0 {
        return (begin, mapped.forward);
    }
    (
        easing.ease_with(mapped.time, begin, change, duration, params),
        mapped.forward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_parsing() {
        assert_eq!(LoopMode::from_token(None), LoopMode::Once);
        assert_eq!(LoopMode::from_token(Some("loop")), LoopMode::Loop);
        assert_eq!(LoopMode::from_token(Some("ping-pong")), LoopMode::PingPong);
        assert_eq!(LoopMode::from_token(Some("pingpong")), LoopMode::Once);
        assert_eq!(LoopMode::from_token(Some("")), LoopMode::Once);
        assert!("LOOP".parse::<LoopMode>().is_err());
        assert_eq!("none".parse::<LoopMode>(), Ok(LoopMode::Once));
    }

    #[test]
    fn serde_tokens() {
        assert_eq!(
            serde_json::to_string(&LoopMode::PingPong).unwrap(),
            "\"ping-pong\""
        );
        let m: LoopMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(m, LoopMode::Once);
        assert_eq!(LoopMode::default(), LoopMode::Once);
    }

    #[test]
    fn once_clamps() {
        assert_eq!(clamped_time(-1.0, 2.0, LoopMode::Once), ClampedTime::forward(0.0));
        assert_eq!(clamped_time(1.5, 2.0, LoopMode::Once), ClampedTime::forward(1.5));
        assert_eq!(clamped_time(9.0, 2.0, LoopMode::Once), ClampedTime::forward(2.0));
    }

    #[test]
    fn loop_wraps() {
        assert_eq!(clamped_time(5.5, 2.0, LoopMode::Loop), ClampedTime::forward(1.5));
        assert_eq!(clamped_time(4.0, 2.0, LoopMode::Loop), ClampedTime::forward(0.0));
        // Remainder keeps the dividend's sign.
        assert_eq!(clamped_time(-0.5, 2.0, LoopMode::Loop).time, -0.5);
    }

    #[test]
    fn ping_pong_reverses_on_return_leg() {
        let c = clamped_time(7.5, 5.0, LoopMode::PingPong);
        assert_eq!(c.time, 2.5);
        assert!(!c.forward);

        // Exactly at the turn point the motion still counts as forward.
        let turn = clamped_time(5.0, 5.0, LoopMode::PingPong);
        assert_eq!(turn, ClampedTime::forward(5.0));

        let next_cycle = clamped_time(11.0, 5.0, LoopMode::PingPong);
        assert_eq!(next_cycle, ClampedTime::forward(1.0));
    }

    #[test]
    fn non_positive_duration_is_pinned() {
        for mode in [LoopMode::Once, LoopMode::Loop, LoopMode::PingPong] {
            assert_eq!(clamped_time(3.0, 0.0, mode), ClampedTime::forward(0.0));
            assert_eq!(clamped_time(3.0, -2.0, mode), ClampedTime::forward(0.0));
            assert_eq!(clamped_time(3.0, f32::NAN, mode), ClampedTime::forward(0.0));
        }
    }

    #[test]
    fn sample_sequence_eases_mapped_time() {
        let (v, fwd) = sample_sequence(
            Easing::Linear,
            &EasingParams::default(),
            7.5,
            5.0,
            LoopMode::PingPong,
            0.0,
            10.0,
        );
        assert_eq!(v, 5.0);
        assert!(!fwd);

        let (v, fwd) = sample_sequence(
            Easing::Linear,
            &EasingParams::default(),
            3.0,
            0.0,
            LoopMode::Loop,
            4.0,
            10.0,
        );
        assert_eq!(v, 4.0);
        assert!(fwd);
    }
}
