use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::state::{AnimationState, GrowthPhase};
use super::transform::HelixTransform;
use crate::options::AnimationOptions;

/// Inputs the host samples once per frame.
///
/// `dt` and `elapsed` come from the host's frame clock, `scroll_progress`
/// from the page scroll position normalized over the scrollable range, and
/// `pointer_offset` from the pointer position normalized to `[-1, 1]` per
/// axis around the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame. Negative values are treated as 0.
    pub dt: f32,
    /// Seconds since the scene started, used by lighting breathing.
    pub elapsed: f32,
    /// Page scroll progress; clamped to `[0, 1]` on recording.
    pub scroll_progress: f32,
    /// Pointer offset; clamped to `[-1, 1]` per axis on recording.
    pub pointer_offset: Vec2,
}

/// Growth/idle state machine producing the per-frame helix transform.
///
/// The controller itself is stateless policy; everything mutable lives in
/// the [`AnimationState`] passed to [`advance`](AnimationController::advance),
/// which keeps replays and tests deterministic.
#[derive(Debug, Clone)]
pub struct AnimationController {
    options: AnimationOptions,
}

impl AnimationController {
    /// Controller with the given tuning.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self { options }
    }

    /// Current tuning.
    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// Replace the tuning. Takes effect on the next advance; no state is
    /// touched.
    pub fn set_options(&mut self, options: AnimationOptions) {
        self.options = options;
    }

    /// Advance one frame: record inputs, run phase transitions, and return
    /// the transform for the helix scene node.
    ///
    /// A `dt` of zero leaves all accumulated state unchanged, so pausing
    /// the host loop freezes the helix rather than drifting it.
    pub fn advance(
        &self,
        state: &mut AnimationState,
        input: &FrameInput,
    ) -> HelixTransform {
        state.record_inputs(input.scroll_progress, input.pointer_offset);
        let dt = input.dt.max(0.0);

        if state.phase() == GrowthPhase::Dormant
            && state.growth_progress() > 0.0
        {
            log::debug!("helix growth triggered");
            state.set_phase(GrowthPhase::Growing);
        }
        if state.phase() == GrowthPhase::Growing
            && state.growth_progress() >= 1.0
        {
            log::debug!("helix growth complete, entering idle");
            state.set_phase(GrowthPhase::Idle);
        }

        match state.phase() {
            GrowthPhase::Dormant => HelixTransform::IDENTITY,
            GrowthPhase::Growing => self.advance_growing(state, dt),
            GrowthPhase::Idle => self.advance_idle(state, dt),
        }
    }

    /// Growing: the node scales vertically with growth progress while
    /// climbing toward its rest height, spinning at the slow growth rate.
    /// Scroll has no influence until growth completes.
    fn advance_growing(
        &self,
        state: &mut AnimationState,
        dt: f32,
    ) -> HelixTransform {
        state.advance_base_rotation(self.options.growth_angular_velocity * dt);

        let growth = state.growth_progress();
        HelixTransform {
            scale: Vec3::new(1.0, growth, 1.0),
            rotation: Quat::from_rotation_y(state.base_rotation()),
            translation: Vec3::new(
                0.0,
                -(1.0 - growth) * self.options.vertical_travel,
                0.0,
            ),
        }
    }

    /// Idle: ambient spin accumulates; the scroll contribution is computed
    /// fresh from the current scroll position every frame (never folded
    /// into the accumulator), so scrolling back up rewinds the extra yaw
    /// with zero lag. Pointer tilt is likewise recomputed, not accumulated.
    fn advance_idle(
        &self,
        state: &mut AnimationState,
        dt: f32,
    ) -> HelixTransform {
        state.advance_base_rotation(self.options.idle_angular_velocity * dt);

        let yaw = state.base_rotation()
            + state.scroll_progress()
                * TAU
                * self.options.rotations_per_full_scroll;

        let tilt = (state.pointer_offset() * self.options.pointer_tilt_gain)
            .clamp_length_max(self.options.pointer_tilt_max);

        let rotation = Quat::from_rotation_x(tilt.y)
            * Quat::from_rotation_z(-tilt.x)
            * Quat::from_rotation_y(yaw);

        HelixTransform {
            scale: Vec3::ONE,
            rotation,
            translation: Vec3::ZERO,
        }
    }
}
