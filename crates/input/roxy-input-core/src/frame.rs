//! One frame's raw button snapshot as polled by the host.

use serde::{Deserialize, Serialize};

use crate::button::{Button, ButtonSet};

/// Current, pushed-this-frame and released-this-frame sets for a single
/// frame. Not stored between frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawButtonFrame {
    pub current: ButtonSet,
    pub pushed: ButtonSet,
    pub released: ButtonSet,
}

impl RawButtonFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Build from the host's three raw masks.
    pub fn from_bits(current: u8, pushed: u8, released: u8) -> Self {
        Self {
            current: ButtonSet::from_bits(current),
            pushed: ButtonSet::from_bits(pushed),
            released: ButtonSet::from_bits(released),
        }
    }

    /// Press edge: the button is down and was pushed this frame.
    pub fn with_pressed(mut self, button: Button) -> Self {
        self.current.insert(button);
        self.pushed.insert(button);
        self
    }

    /// Sustained hold with no edge.
    pub fn with_held(mut self, button: Button) -> Self {
        self.current.insert(button);
        self
    }

    /// Release edge: the button left `current` this frame.
    pub fn with_released(mut self, button: Button) -> Self {
        self.current.remove(button);
        self.released.insert(button);
        self
    }

    pub fn is_pushed(&self, button: Button) -> bool {
        self.pushed.contains(button)
    }

    pub fn is_released(&self, button: Button) -> bool {
        self.released.contains(button)
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.current.contains(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_expected_bits() {
        let frame = RawButtonFrame::idle()
            .with_pressed(Button::A)
            .with_held(Button::Up)
            .with_released(Button::Left);
        assert!(frame.is_pushed(Button::A) && frame.is_down(Button::A));
        assert!(frame.is_down(Button::Up) && !frame.is_pushed(Button::Up));
        assert!(frame.is_released(Button::Left) && !frame.is_down(Button::Left));
        assert_eq!(frame, RawButtonFrame::from_bits(32 | 4, 32, 1));
    }

    #[test]
    fn from_bits_ignores_unknown_bits() {
        let frame = RawButtonFrame::from_bits(0xff, 0x40, 0x80);
        assert_eq!(frame.current.bits(), 0x3f);
        assert!(frame.pushed.is_empty());
        assert!(frame.released.is_empty());
    }
}
