//! Scene rig owning geometry, animation state, and lighting for one helix.
//!
//! The rig is the host-facing integration point. It builds geometry once
//! per configuration and memoizes it behind a parameter digest, so
//! [`set_options`](HelixRig::set_options) during live tuning only pays for
//! meshing when a field that shapes geometry actually changed. Per-frame
//! work is a state-machine step plus keyframe interpolation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{
    AnimationController, AnimationState, FrameInput, HelixTransform,
};
use crate::error::HelicaError;
use crate::geometry::{
    build_helix_geometry, build_tube_mesh, DoubleHelix, HelixParameters,
    TubeMesh, TubeOptions,
};
use crate::lighting::{LightChoreographer, LightRigSettings};
use crate::options::{ColorOptions, GeometryOptions, Options};
use crate::util::frame_clock::FrameClock;
use crate::util::hash::{hash_f32, hash_rgb};

/// Per-frame output: the node transform and the light rig to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Transform for the helix scene node.
    pub transform: HelixTransform,
    /// Interpolated light rig settings.
    pub lights: LightRigSettings,
}

/// Everything needed to drive one double helix in a host scene.
#[derive(Debug)]
pub struct HelixRig {
    options: Options,
    geometry_digest: u64,
    helix: DoubleHelix,
    strand_meshes: [TubeMesh; 2],
    state: AnimationState,
    controller: AnimationController,
    choreographer: LightChoreographer,
    clock: FrameClock,
    rng: StdRng,
}

impl HelixRig {
    /// Build a rig with entropy-seeded nucleotide assignment.
    ///
    /// # Errors
    /// Returns [`HelicaError::Config`] when any option fails validation.
    pub fn new(options: Options) -> Result<Self, HelicaError> {
        Self::with_seed(options, rand::rng().random())
    }

    /// Build a rig with a fixed nucleotide seed, for reproducible scenes
    /// and tests.
    ///
    /// # Errors
    /// Returns [`HelicaError::Config`] when any option fails validation.
    pub fn with_seed(options: Options, seed: u64) -> Result<Self, HelicaError> {
        let choreographer = LightChoreographer::new(&options.lighting)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let (helix, strand_meshes) =
            build_scene_geometry(&options, &mut rng)?;

        Ok(Self {
            controller: AnimationController::new(options.animation.clone()),
            geometry_digest: geometry_digest(
                &options.geometry,
                &options.colors,
            ),
            options,
            helix,
            strand_meshes,
            state: AnimationState::new(),
            choreographer,
            clock: FrameClock::new(),
            rng,
        })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Static helix geometry (strand curves and base pairs).
    #[must_use]
    pub fn geometry(&self) -> &DoubleHelix {
        &self.helix
    }

    /// Tube meshes for the two strands, ready for upload.
    #[must_use]
    pub fn strand_meshes(&self) -> &[TubeMesh; 2] {
        &self.strand_meshes
    }

    /// Current animation state.
    #[must_use]
    pub fn animation_state(&self) -> &AnimationState {
        &self.state
    }

    /// Smoothed FPS of the realtime clock.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Replace the options, revalidating everything up front. Geometry is
    /// rebuilt only when a geometry-shaping field changed; animation and
    /// lighting tuning always swap in. On error the rig is left untouched.
    ///
    /// # Errors
    /// Returns [`HelicaError::Config`] when any option fails validation.
    pub fn set_options(&mut self, options: Options) -> Result<(), HelicaError> {
        let choreographer = LightChoreographer::new(&options.lighting)?;

        let digest = geometry_digest(&options.geometry, &options.colors);
        if digest != self.geometry_digest {
            let (helix, strand_meshes) =
                build_scene_geometry(&options, &mut self.rng)?;
            log::debug!(
                "helix geometry rebuilt: {} samples per strand, {} base pairs",
                helix.strand_a.len(),
                helix.base_pairs.len()
            );
            self.helix = helix;
            self.strand_meshes = strand_meshes;
            self.geometry_digest = digest;
        }

        self.controller.set_options(options.animation.clone());
        self.choreographer = choreographer;
        self.options = options;
        Ok(())
    }

    /// Record externally driven growth progress, clamped to `[0, 1]`.
    pub fn feed_growth_progress(&mut self, progress: f32) {
        self.state.feed_growth_progress(progress);
    }

    /// Return the animation to dormant and restart the realtime clock,
    /// for when the hero section leaves and re-enters the viewport.
    pub fn reset(&mut self) {
        self.state.reset();
        self.clock.restart();
    }

    /// Advance one frame from explicit inputs.
    pub fn advance(&mut self, input: &FrameInput) -> FrameUpdate {
        let transform = self.controller.advance(&mut self.state, input);
        let lights = self
            .choreographer
            .sample(self.state.scroll_progress(), input.elapsed);
        FrameUpdate { transform, lights }
    }

    /// Advance one frame using the rig's own clock for dt/elapsed. Hosts
    /// with their own timing should call [`advance`](HelixRig::advance)
    /// instead.
    pub fn advance_realtime(
        &mut self,
        scroll_progress: f32,
        pointer_offset: Vec2,
    ) -> FrameUpdate {
        let sample = self.clock.tick();
        self.advance(&FrameInput {
            dt: sample.dt,
            elapsed: sample.elapsed,
            scroll_progress,
            pointer_offset,
        })
    }
}

fn build_scene_geometry(
    options: &Options,
    rng: &mut StdRng,
) -> Result<(DoubleHelix, [TubeMesh; 2]), HelicaError> {
    let params = HelixParameters::from_options(&options.geometry)?;
    let tube = TubeOptions::from_options(&options.geometry)?;
    let helix = build_helix_geometry(
        &params,
        options.geometry.base_pair_stride as usize,
        &options.colors,
        rng,
    )?;
    let meshes = [
        build_tube_mesh(&helix.strand_a, &tube)?,
        build_tube_mesh(&helix.strand_b, &tube)?,
    ];
    Ok((helix, meshes))
}

/// Digest over every option that shapes built geometry. `base_pair_radius`
/// is host-side scale data and never baked into meshes, so it is left out
/// and never triggers a rebuild.
fn geometry_digest(geometry: &GeometryOptions, colors: &ColorOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_f32(geometry.helix_radius, &mut hasher);
    hash_f32(geometry.helix_height, &mut hasher);
    hash_f32(geometry.turns, &mut hasher);
    geometry.segments_per_turn.hash(&mut hasher);
    geometry.handedness.hash(&mut hasher);
    hash_f32(geometry.strand_radius, &mut hasher);
    geometry.strand_radial_segments.hash(&mut hasher);
    geometry.base_pair_stride.hash(&mut hasher);
    hash_rgb(colors.adenine, &mut hasher);
    hash_rgb(colors.thymine, &mut hasher);
    hash_rgb(colors.guanine, &mut hasher);
    hash_rgb(colors.cytosine, &mut hasher);
    hasher.finish()
}
