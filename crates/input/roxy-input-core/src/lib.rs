//! Roxy Input Core (host-agnostic)
//!
//! Turns each frame's raw button transitions into semantic events:
//! pressed, released, pressed continuously, and a one-shot custom hold.
//! Hold counts live in a caller-owned [`ButtonTracker`] (or the
//! [`InputManager`] wrapping it); nothing here is global.

pub mod button;
pub mod config;
pub mod error;
pub mod events;
pub mod frame;
pub mod hold;
pub mod manager;

// Re-exports for consumers (host bindings)
pub use button::{Button, ButtonSet};
pub use config::HoldPolicy;
pub use error::InputError;
pub use events::{ButtonEvent, ButtonSignal};
pub use frame::RawButtonFrame;
pub use hold::{classify, ButtonTracker, Classification};
pub use manager::InputManager;
