//! The handheld's six digital buttons and bitsets over them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A digital button, named the way host scripts name it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    #[serde(rename = "up")]
    Up,
    #[serde(rename = "down")]
    Down,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

impl Button {
    pub const COUNT: usize = 6;

    /// Processing order for a full frame.
    pub const ALL: [Button; Button::COUNT] = [
        Button::A,
        Button::B,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
        }
    }

    /// Position in [`Button::ALL`], used to index per-button tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::Up => 2,
            Button::Down => 3,
            Button::Left => 4,
            Button::Right => 5,
        }
    }

    /// Bit in the host's raw button masks.
    #[inline]
    pub fn mask(self) -> u8 {
        match self {
            Button::Left => 1 << 0,
            Button::Right => 1 << 1,
            Button::Up => 1 << 2,
            Button::Down => 1 << 3,
            Button::B => 1 << 4,
            Button::A => 1 << 5,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, InputError> {
        Button::ALL
            .into_iter()
            .find(|button| button.name() == name)
            .ok_or_else(|| InputError::UnknownButton {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Button {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::from_name(s)
    }
}

/// Set of buttons stored in the host's bit layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonSet(u8);

impl ButtonSet {
    const VALID: u8 = 0b0011_1111;

    pub const fn empty() -> Self {
        ButtonSet(0)
    }

    /// Bits outside the six known buttons are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        ButtonSet(bits & Self::VALID)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.mask();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.mask();
    }

    /// Chainable insert.
    pub fn with(mut self, button: Button) -> Self {
        self.insert(button);
        self
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::empty();
        for button in iter {
            set.insert(button);
        }
        set
    }
}
