//! Shared utilities for the visualization core.
//!
//! Helpers for easing curves, frame timing, float hashing, and
//! direction-alignment quaternions.

pub mod easing;
pub mod frame_clock;
pub mod hash;
pub mod orientation;
