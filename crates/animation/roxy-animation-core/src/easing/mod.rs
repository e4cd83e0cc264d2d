//! Easing registry.
//!
//! An [`Easing`] names one of the 42 host-visible curves (`flat`, `linear`
//! and `{in,out,inOut,outIn}` x ten families). Names round-trip through
//! `Display`/`FromStr` and serde, so scripts and JSON config can refer to
//! curves by the same camelCase names.

pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use functions::{Back, Bounce, Circ, Curve, Elastic, Expo, Power, Sine};

/// Curve family shared by the four symmetry variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Back,
    Bounce,
}

impl Family {
    pub const ALL: [Family; 10] = [
        Family::Quad,
        Family::Cubic,
        Family::Quart,
        Family::Quint,
        Family::Sine,
        Family::Expo,
        Family::Circ,
        Family::Elastic,
        Family::Back,
        Family::Bounce,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Family::Quad => "Quad",
            Family::Cubic => "Cubic",
            Family::Quart => "Quart",
            Family::Quint => "Quint",
            Family::Sine => "Sine",
            Family::Expo => "Expo",
            Family::Circ => "Circ",
            Family::Elastic => "Elastic",
            Family::Back => "Back",
            Family::Bounce => "Bounce",
        }
    }

    /// Bounce registers `out` before `in`; every other family is in, out,
    /// inOut, outIn.
    const fn directions(self) -> [Direction; 4] {
        match self {
            Family::Bounce => [
                Direction::Out,
                Direction::In,
                Direction::InOut,
                Direction::OutIn,
            ],
            _ => Direction::ALL,
        }
    }
}

/// Symmetry variant of a curve family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
    OutIn,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::In,
        Direction::Out,
        Direction::InOut,
        Direction::OutIn,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inOut",
            Direction::OutIn => "outIn",
        }
    }
}

/// Optional shape parameters. `None` and `Some(0.0)` both select the curve's
/// default; families that don't use a field ignore it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EasingParams {
    /// Elastic amplitude. Values below `|c|` fall back to `c`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f32>,
    /// Elastic period in time units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<f32>,
    /// Back overshoot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overshoot: Option<f32>,
}

impl EasingParams {
    pub fn elastic(amplitude: f32, period: f32) -> Self {
        Self {
            amplitude: Some(amplitude),
            period: Some(period),
            overshoot: None,
        }
    }

    pub fn back(overshoot: f32) -> Self {
        Self {
            overshoot: Some(overshoot),
            ..Self::default()
        }
    }
}

/// One named easing curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Flat,
    Linear,
    Curve(Family, Direction),
}

impl Easing {
    /// Every registered curve, in the order scripts see them.
    pub const ALL: [Easing; 42] = build_all();

    /// Host-facing camelCase name, e.g. `"inOutQuad"`.
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Look up a curve by its host-facing name.
    pub fn from_name(name: &str) -> Result<Self, AnimationError> {
        name.parse()
    }

    /// Evaluate with default shape parameters.
    #[inline]
    pub fn ease(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        self.ease_with(t, b, c, d, &EasingParams::default())
    }

    /// Evaluate with explicit elastic/back parameters.
    pub fn ease_with(self, t: f32, b: f32, c: f32, d: f32, params: &EasingParams) -> f32 {
        let (family, direction) = match self {
            Easing::Flat => return functions::flat(t, b, c, d),
            Easing::Linear => return functions::linear(t, b, c, d),
            Easing::Curve(family, direction) => (family, direction),
        };
        match family {
            Family::Quad => run(&Power(2), direction, t, b, c, d),
            Family::Cubic => run(&Power(3), direction, t, b, c, d),
            Family::Quart => run(&Power(4), direction, t, b, c, d),
            Family::Quint => run(&Power(5), direction, t, b, c, d),
            Family::Sine => run(&Sine, direction, t, b, c, d),
            Family::Expo => run(&Expo, direction, t, b, c, d),
            Family::Circ => run(&Circ, direction, t, b, c, d),
            Family::Elastic => {
                let curve = Elastic {
                    amplitude: params.amplitude,
                    period: params.period,
                };
                run(&curve, direction, t, b, c, d)
            }
            Family::Back => {
                let curve = Back {
                    overshoot: params.overshoot,
                };
                run(&curve, direction, t, b, c, d)
            }
            Family::Bounce => run(&Bounce, direction, t, b, c, d),
        }
    }

    /// Whether this curve reads [`EasingParams`].
    pub fn takes_params(self) -> bool {
        matches!(
            self,
            Easing::Curve(Family::Elastic, _) | Easing::Curve(Family::Back, _)
        )
    }
}

#[inline]
fn run<C: Curve>(curve: &C, direction: Direction, t: f32, b: f32, c: f32, d: f32) -> f32 {
    match direction {
        Direction::In => curve.ease_in(t, b, c, d),
        Direction::Out => curve.ease_out(t, b, c, d),
        Direction::InOut => curve.ease_in_out(t, b, c, d),
        Direction::OutIn => curve.ease_out_in(t, b, c, d),
    }
}

const fn build_all() -> [Easing; 42] {
    let mut all = [Easing::Flat; 42];
    all[1] = Easing::Linear;
    let mut f = 0;
    while f < Family::ALL.len() {
        let family = Family::ALL[f];
        let dirs = family.directions();
        let mut d = 0;
        while d < 4 {
            all[2 + f * 4 + d] = Easing::Curve(family, dirs[d]);
            d += 1;
        }
        f += 1;
    }
    all
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Flat => f.write_str("flat"),
            Easing::Linear => f.write_str("linear"),
            Easing::Curve(family, direction) => {
                write!(f, "{}{}", direction.prefix(), family.suffix())
            }
        }
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => return Ok(Easing::Flat),
            "linear" => return Ok(Easing::Linear),
            _ => {}
        }
        // Longest prefixes first so "inOut" isn't read as "in" + "OutQuad".
        let by_length = [
            Direction::InOut,
            Direction::OutIn,
            Direction::Out,
            Direction::In,
        ];
        for direction in by_length {
            let Some(rest) = s.strip_prefix(direction.prefix()) else {
                continue;
            };
            if let Some(family) = Family::ALL.into_iter().find(|f| f.suffix() == rest) {
                return Ok(Easing::Curve(family, direction));
            }
        }
        Err(AnimationError::UnknownEasing {
            name: s.to_string(),
        })
    }
}

impl TryFrom<String> for Easing {
    type Error = AnimationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(value: Easing) -> Self {
        value.to_string()
    }
}
