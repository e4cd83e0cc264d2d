//! Per-button hold counting.
//!
//! [`classify`] is the pure transition for a single button. [`ButtonTracker`]
//! owns the hold counts between frames and applies it; callers hold the
//! tracker, so there is no process-wide state.

use serde::{Deserialize, Serialize};

use crate::button::Button;
use crate::config::HoldPolicy;
use crate::events::{ButtonEvent, ButtonSignal};
use crate::frame::RawButtonFrame;

/// Result of classifying one button for one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub event: Option<ButtonEvent>,
    pub hold_count: u32,
}

/// Decide at most one event for `button` and its next hold count.
///
/// Edges win over sustained holds, and a push wins over a release seen in
/// the same frame. While held, the custom threshold takes the frame it is
/// reached exactly; otherwise "pressed continuously" fires from the buffer
/// onward.
pub fn classify(
    button: Button,
    frame: &RawButtonFrame,
    previous_count: u32,
    policy: &HoldPolicy,
) -> Classification {
    if frame.is_pushed(button) {
        return Classification {
            event: Some(ButtonEvent::Pressed),
            hold_count: 1,
        };
    }
    if frame.is_released(button) {
        return Classification {
            event: Some(ButtonEvent::Released),
            hold_count: 0,
        };
    }
    if frame.is_down(button) {
        let hold_count = previous_count.saturating_add(1);
        let event = if hold_count == policy.custom_hold_threshold {
            Some(ButtonEvent::CustomHeld)
        } else if hold_count >= policy.continuous_hold_buffer {
            Some(ButtonEvent::PressedContinuously)
        } else {
            None
        };
        return Classification { event, hold_count };
    }
    if previous_count > 0 {
        // A held button left `current` without a release edge.
        log::debug!(
            "{} dropped out of the held set without a release edge (count {previous_count})",
            button.name()
        );
    }
    Classification {
        event: None,
        hold_count: previous_count,
    }
}

/// Hold counts for all six buttons, carried from frame to frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTracker {
    counts: [u32; Button::COUNT],
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold_count(&self, button: Button) -> u32 {
        self.counts[button.index()]
    }

    /// Classify one button and store its new count.
    pub fn process(
        &mut self,
        button: Button,
        frame: &RawButtonFrame,
        policy: &HoldPolicy,
    ) -> Option<ButtonSignal> {
        let slot = &mut self.counts[button.index()];
        let Classification { event, hold_count } = classify(button, frame, *slot, policy);
        *slot = hold_count;
        let signal = event.map(|event| ButtonSignal::new(button, event));
        if let Some(signal) = signal {
            log::trace!("{signal} (hold count {hold_count})");
        }
        signal
    }

    /// Classify every button in [`Button::ALL`] order.
    pub fn process_frame(
        &mut self,
        frame: &RawButtonFrame,
        policy: &HoldPolicy,
    ) -> Vec<ButtonSignal> {
        Button::ALL
            .into_iter()
            .filter_map(|button| self.process(button, frame, policy))
            .collect()
    }

    pub fn reset_button(&mut self, button: Button) {
        self.counts[button.index()] = 0;
    }

    pub fn reset(&mut self) {
        self.counts = [0; Button::COUNT];
    }
}
