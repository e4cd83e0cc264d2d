//! Scalar helpers shared by sequence code and exposed to scripts.
//!
//! All helpers are `f32` to match the runtime's float width.

/// Drop the fractional part, keeping the sign of `n`.
#[inline]
pub fn truncate_decimal(n: f32) -> f32 {
    n - n % 1.0
}

/// Round half up: `floor(n + 0.5)`, so `-2.5` rounds to `-2.0`.
#[inline]
pub fn round(n: f32) -> f32 {
    (n + 0.5).floor()
}

#[inline]
pub fn round_down(n: f32) -> f32 {
    n.floor()
}

#[inline]
pub fn round_up(n: f32) -> f32 {
    n.ceil()
}

#[inline]
pub fn hypot(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

/// Clamp `value` into `[lower, upper]`. Inverted bounds are swapped rather
/// than rejected.
#[inline]
pub fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    let (lo, hi) = if lower > upper {
        (upper, lower)
    } else {
        (lower, upper)
    };
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `value` from `[from_low, from_high]` onto `[to_low, to_high]`.
/// Not clamped; a degenerate source range yields a non-finite result.
#[inline]
pub fn map_range(value: f32, from_low: f32, from_high: f32, to_low: f32, to_high: f32) -> f32 {
    (value - from_low) / (from_high - from_low) * (to_high - to_low) + to_low
}
