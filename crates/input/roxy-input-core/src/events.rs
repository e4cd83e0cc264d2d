//! Semantic button events and their host callback names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::button::Button;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonEvent {
    Pressed,
    Released,
    /// One-shot, on the frame the hold count equals the custom threshold.
    CustomHeld,
    /// Every held frame from the continuous buffer onward.
    PressedContinuously,
}

impl ButtonEvent {
    pub fn suffix(self) -> &'static str {
        match self {
            ButtonEvent::Pressed => "Pressed",
            ButtonEvent::Released => "Released",
            ButtonEvent::CustomHeld => "CustomHeld",
            ButtonEvent::PressedContinuously => "PressedContinuously",
        }
    }
}

/// An event raised for a specific button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonSignal {
    pub button: Button,
    pub event: ButtonEvent,
}

impl ButtonSignal {
    pub fn new(button: Button, event: ButtonEvent) -> Self {
        Self { button, event }
    }

    /// Script callback name, e.g. `"upButtonPressedContinuously"`.
    pub fn callback_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ButtonSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Button{}", self.button.name(), self.event.suffix())
    }
}
