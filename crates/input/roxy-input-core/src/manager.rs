//! Host-facing input entry point: a hold policy plus the tracked counts.

use serde::{Deserialize, Serialize};

use crate::button::Button;
use crate::config::HoldPolicy;
use crate::error::InputError;
use crate::events::ButtonSignal;
use crate::frame::RawButtonFrame;
use crate::hold::ButtonTracker;

/// Owns the hold policy and per-button counts for one input source.
///
/// Policy changes take effect on the next classification call. Counts are
/// left untouched when the policy changes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputManager {
    policy: HoldPolicy,
    tracker: ButtonTracker,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: HoldPolicy) -> Result<Self, InputError> {
        policy.validate()?;
        Ok(Self {
            policy,
            tracker: ButtonTracker::new(),
        })
    }

    pub fn policy(&self) -> &HoldPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: HoldPolicy) -> Result<(), InputError> {
        policy.validate()?;
        log::debug!(
            "hold policy set: buffer={} threshold={}",
            policy.continuous_hold_buffer,
            policy.custom_hold_threshold
        );
        self.policy = policy;
        Ok(())
    }

    pub fn set_continuous_hold_buffer(&mut self, frames: i64) -> Result<(), InputError> {
        let frames = HoldPolicy::frames("continuous_hold_buffer", frames)?;
        log::debug!("continuous hold buffer set to {frames} frames");
        self.policy.continuous_hold_buffer = frames;
        Ok(())
    }

    pub fn set_custom_hold_threshold(&mut self, frames: i64) -> Result<(), InputError> {
        let frames = HoldPolicy::frames("custom_hold_threshold", frames)?;
        log::debug!("custom hold threshold set to {frames} frames");
        self.policy.custom_hold_threshold = frames;
        Ok(())
    }

    pub fn tracker(&self) -> &ButtonTracker {
        &self.tracker
    }

    pub fn hold_count(&self, button: Button) -> u32 {
        self.tracker.hold_count(button)
    }

    pub fn process_button(
        &mut self,
        button: Button,
        frame: &RawButtonFrame,
    ) -> Option<ButtonSignal> {
        self.tracker.process(button, frame, &self.policy)
    }

    /// Like [`InputManager::process_button`], addressing the button by its
    /// script name.
    pub fn process_button_named(
        &mut self,
        name: &str,
        frame: &RawButtonFrame,
    ) -> Result<Option<ButtonSignal>, InputError> {
        let button = Button::from_name(name)?;
        Ok(self.process_button(button, frame))
    }

    /// Script callback to invoke for `name` this frame, or `""` when nothing
    /// fires.
    pub fn process_callback(
        &mut self,
        name: &str,
        frame: &RawButtonFrame,
    ) -> Result<String, InputError> {
        Ok(self
            .process_button_named(name, frame)?
            .map(|signal| signal.callback_name())
            .unwrap_or_default())
    }

    /// Classify all six buttons in the order A, B, up, down, left, right.
    pub fn process_frame(&mut self, frame: &RawButtonFrame) -> Vec<ButtonSignal> {
        self.tracker.process_frame(frame, &self.policy)
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
