//! Roxy Animation Core (host-agnostic)
//!
//! Deterministic timing helpers for frame-stepped animation:
//! - `easing`: the Penner easing curves, addressable by their script names
//! - `sequence`: loop / ping-pong time mapping for animated sequences
//! - `math`: small scalar helpers (clamp, lerp, range mapping, rounding)
//!
//! Everything here is pure and re-entrant; hosts call it once per frame with
//! plain `f32` values.

pub mod easing;
pub mod error;
pub mod math;
pub mod sequence;

// Re-exports for consumers (host bindings)
pub use easing::{Direction, Easing, EasingParams, Family};
pub use error::AnimationError;
pub use sequence::{clamped_time, sample_sequence, ClampedTime, LoopMode};
