//! Growth/idle animation for the helix scene node.
//!
//! The controller is a pure state machine: hosts sample inputs (frame
//! delta, scroll progress, pointer offset) and feed them in once per frame;
//! the controller mutates the [`AnimationState`] it is handed and returns
//! the transform to apply. Nothing here reads clocks or input devices.

mod controller;
mod state;
mod transform;

pub use controller::{AnimationController, FrameInput};
pub use state::{AnimationState, GrowthPhase};
pub use transform::HelixTransform;
