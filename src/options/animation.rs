use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Growth/idle state machine tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Vertical distance the helix climbs while growing to full height.
    #[schemars(title = "Vertical Travel", range(min = 0.0, max = 20.0), extend("step" = 0.25))]
    pub vertical_travel: f32,
    /// Yaw rate while growing, radians per second.
    #[schemars(title = "Growth Spin", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub growth_angular_velocity: f32,
    /// Ambient yaw rate in idle, radians per second.
    #[schemars(title = "Idle Spin", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub idle_angular_velocity: f32,
    /// Full yaw revolutions added across one full page scroll.
    #[schemars(title = "Scroll Rotations", range(min = 0.0, max = 8.0), extend("step" = 0.25))]
    pub rotations_per_full_scroll: f32,
    /// Tilt radians applied per unit of normalized pointer offset.
    #[schemars(title = "Pointer Tilt Gain", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub pointer_tilt_gain: f32,
    /// Upper bound on pointer tilt magnitude, radians.
    #[schemars(title = "Pointer Tilt Max", range(min = 0.0, max = 0.6), extend("step" = 0.01))]
    pub pointer_tilt_max: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            vertical_travel: 6.0,
            growth_angular_velocity: 0.25,
            idle_angular_velocity: 0.4,
            rotations_per_full_scroll: 2.0,
            pointer_tilt_gain: 0.12,
            pointer_tilt_max: 0.18,
        }
    }
}
