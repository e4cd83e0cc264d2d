//! Easing curve families (Robert Penner's equations, Tweener variant).
//!
//! Every function takes `(t, b, c, d)`:
//! - `t` elapsed time
//! - `b` begin value
//! - `c` change in value (end - begin)
//! - `d` duration
//!
//! Each family supplies its `in` and `out` curves. The `in_out` and `out_in`
//! forms default to [`bisect`], which runs one curve over each half of the
//! duration with half the change. Expo, elastic and back keep their own
//! reference `in_out` formulas because those differ numerically from the
//! bisected form.

use std::f32::consts::PI;

const TWO_PI: f32 = 2.0 * PI;

/// Default overshoot for the back family (~10% overshoot).
pub const BACK_OVERSHOOT: f32 = 1.70158;
/// In-out back scales the overshoot by this factor.
pub const BACK_IN_OUT_SCALE: f32 = 1.525;
/// Default elastic period, as a fraction of the duration.
pub const ELASTIC_PERIOD: f32 = 0.3;
/// Default in-out elastic period, as a fraction of the duration.
pub const ELASTIC_IN_OUT_PERIOD: f32 = 0.3 * 1.5;

/// Run `first` over `[0, d/2)` and `second` over `[d/2, d]`, each spanning half
/// of `c`. Both halves are evaluated with the full duration `d` and a doubled
/// local time.
#[inline]
pub fn bisect<F, S>(t: f32, b: f32, c: f32, d: f32, first: F, second: S) -> f32
where
    F: Fn(f32, f32, f32, f32) -> f32,
    S: Fn(f32, f32, f32, f32) -> f32,
{
    let half = c / 2.0;
    if t < d / 2.0 {
        first(t * 2.0, b, half, d)
    } else {
        second(t * 2.0 - d, b + half, half, d)
    }
}

/// A family of easing curves defined by its `in` and `out` halves.
pub trait Curve {
    /// Accelerate from zero velocity.
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32;

    /// Decelerate to zero velocity.
    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32;

    /// Accelerate until halfway, then decelerate.
    fn ease_in_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        bisect(
            t,
            b,
            c,
            d,
            |t, b, c, d| self.ease_in(t, b, c, d),
            |t, b, c, d| self.ease_out(t, b, c, d),
        )
    }

    /// Decelerate until halfway, then accelerate.
    fn ease_out_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        bisect(
            t,
            b,
            c,
            d,
            |t, b, c, d| self.ease_out(t, b, c, d),
            |t, b, c, d| self.ease_in(t, b, c, d),
        )
    }
}

/// Constant curve: always `b`.
#[inline]
pub fn flat(_t: f32, b: f32, _c: f32, _d: f32) -> f32 {
    b
}

#[inline]
pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

/// Polynomial curves: quad (2), cubic (3), quart (4), quint (5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Power(pub u32);

impl Power {
    /// `x * t * t * ...` with one factor of `t` per degree, multiplied left
    /// to right like the reference formulas.
    #[inline]
    fn chain(self, x: f32, t: f32) -> f32 {
        let mut v = x;
        for _ in 0..self.0 {
            v *= t;
        }
        v
    }
}

impl Curve for Power {
    #[inline]
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        self.chain(c, t) + b
    }

    #[inline]
    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self.0 {
            2 => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            n if n % 2 == 0 => {
                let t = t / d - 1.0;
                -c * (self.chain(1.0, t) - 1.0) + b
            }
            _ => {
                let t = t / d - 1.0;
                c * (self.chain(1.0, t) + 1.0) + b
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sine;

impl Curve for Sine {
    #[inline]
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        -c * (t / d * (PI / 2.0)).cos() + c + b
    }

    #[inline]
    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        c * (t / d * (PI / 2.0)).sin() + b
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Expo;

impl Curve for Expo {
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        c * 2f32.powf(10.0 * (t / d - 1.0)) + b - c * 0.001
    }

    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == d {
            return b + c;
        }
        c * 1.001 * (1.0 - 2f32.powf(-10.0 * t / d)) + b
    }

    fn ease_in_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        if t == d {
            return b + c;
        }
        let t = t / d * 2.0;
        if t < 1.0 {
            c / 2.0 * 2f32.powf(10.0 * (t - 1.0)) + b - c * 0.0005
        } else {
            let t = t - 1.0;
            c / 2.0 * 1.0005 * (2.0 - 2f32.powf(-10.0 * t)) + b
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Circ;

impl Curve for Circ {
    #[inline]
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        -c * ((1.0 - t * t).sqrt() - 1.0) + b
    }

    #[inline]
    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d - 1.0;
        c * (1.0 - t * t).sqrt() + b
    }
}

/// Elastic curves. `None` (or zero) amplitude/period select the defaults:
/// amplitude `|c|`, period `0.3 * d` (`0.45 * d` for in-out).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Elastic {
    pub amplitude: Option<f32>,
    pub period: Option<f32>,
}

impl Elastic {
    /// Resolve `(amplitude, phase shift)` for a given period.
    fn shape(&self, c: f32, p: f32) -> (f32, f32) {
        match self.amplitude {
            Some(a) if a != 0.0 && a >= c.abs() => (a, p / TWO_PI * (c / a).asin()),
            _ => (c, p / 4.0),
        }
    }

    fn period_or(&self, default: f32) -> f32 {
        match self.period {
            Some(p) if p != 0.0 => p,
            _ => default,
        }
    }
}

impl Curve for Elastic {
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        let t = t / d;
        if t == 1.0 {
            return b + c;
        }
        let p = self.period_or(d * ELASTIC_PERIOD);
        let (a, s) = self.shape(c, p);
        let t = t - 1.0;
        -(a * 2f32.powf(10.0 * t) * ((t * d - s) * TWO_PI / p).sin()) + b
    }

    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        let t = t / d;
        if t == 1.0 {
            return b + c;
        }
        let p = self.period_or(d * ELASTIC_PERIOD);
        let (a, s) = self.shape(c, p);
        a * 2f32.powf(-10.0 * t) * ((t * d - s) * TWO_PI / p).sin() + c + b
    }

    fn ease_in_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        let t = t / d * 2.0;
        if t == 2.0 {
            return b + c;
        }
        let p = self.period_or(d * ELASTIC_IN_OUT_PERIOD);
        let (a, s) = self.shape(c, p);
        let wave = |t: f32| ((t * d - s) * TWO_PI / p).sin();
        if t < 1.0 {
            let t = t - 1.0;
            -0.5 * (a * 2f32.powf(10.0 * t) * wave(t)) + b
        } else {
            let t = t - 1.0;
            a * 2f32.powf(-10.0 * t) * wave(t) * 0.5 + c + b
        }
    }
}

/// Back curves overshoot by `overshoot` (default [`BACK_OVERSHOOT`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Back {
    pub overshoot: Option<f32>,
}

impl Back {
    fn s(&self) -> f32 {
        match self.overshoot {
            Some(s) if s != 0.0 => s,
            _ => BACK_OVERSHOOT,
        }
    }
}

impl Curve for Back {
    #[inline]
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = self.s();
        let t = t / d;
        c * t * t * ((s + 1.0) * t - s) + b
    }

    #[inline]
    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = self.s();
        let t = t / d - 1.0;
        c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
    }

    fn ease_in_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = self.s() * BACK_IN_OUT_SCALE;
        let t = t / d * 2.0;
        if t < 1.0 {
            c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
        } else {
            let t = t - 2.0;
            c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounce;

impl Curve for Bounce {
    fn ease_in(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        c - self.ease_out(d - t, 0.0, c, d) + b
    }

    fn ease_out(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        if t < 1.0 / 2.75 {
            c * (7.5625 * t * t) + b
        } else if t < 2.0 / 2.75 {
            let t = t - 1.5 / 2.75;
            c * (7.5625 * t * t + 0.75) + b
        } else if t < 2.5 / 2.75 {
            let t = t - 2.25 / 2.75;
            c * (7.5625 * t * t + 0.9375) + b
        } else {
            let t = t - 2.625 / 2.75;
            c * (7.5625 * t * t + 0.984375) + b
        }
    }
}
