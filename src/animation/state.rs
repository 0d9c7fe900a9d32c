use glam::Vec2;

/// Lifecycle phase of the helix entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPhase {
    /// Not yet triggered; the node holds the identity transform.
    #[default]
    Dormant,
    /// Scaling up from nothing as external growth progress climbs.
    Growing,
    /// Fully grown; ambient spin plus scroll and pointer response.
    Idle,
}

/// Mutable per-helix animation state.
///
/// Owned by the rig and mutated only through
/// [`feed_growth_progress`](AnimationState::feed_growth_progress),
/// [`reset`](AnimationState::reset), and the controller's per-frame
/// advance. All inputs are clamped on write so the state never holds
/// out-of-range values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationState {
    phase: GrowthPhase,
    growth_progress: f32,
    base_rotation: f32,
    scroll_progress: f32,
    pointer_offset: Vec2,
}

impl AnimationState {
    /// Fresh dormant state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GrowthPhase {
        self.phase
    }

    /// Externally fed growth progress in `[0, 1]`.
    #[must_use]
    pub fn growth_progress(&self) -> f32 {
        self.growth_progress
    }

    /// Accumulated ambient yaw in radians. Monotonically non-decreasing
    /// between resets; the scroll contribution is layered on top of this
    /// each frame rather than folded in.
    #[must_use]
    pub fn base_rotation(&self) -> f32 {
        self.base_rotation
    }

    /// Most recently recorded scroll progress in `[0, 1]`.
    #[must_use]
    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    /// Most recently recorded pointer offset, each axis in `[-1, 1]`.
    #[must_use]
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    /// Record externally driven growth progress, clamped to `[0, 1]`.
    /// Typically bound to an intersection-observer or entrance timeline.
    pub fn feed_growth_progress(&mut self, progress: f32) {
        self.growth_progress = progress.clamp(0.0, 1.0);
    }

    /// Return to dormant: phase, growth, rotation, and recorded inputs all
    /// zero, ready for the section to re-enter the viewport.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set_phase(&mut self, phase: GrowthPhase) {
        self.phase = phase;
    }

    pub(crate) fn advance_base_rotation(&mut self, delta: f32) {
        self.base_rotation += delta;
    }

    pub(crate) fn record_inputs(&mut self, scroll: f32, pointer: Vec2) {
        self.scroll_progress = scroll.clamp(0.0, 1.0);
        self.pointer_offset =
            pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }
}
