//! Parametric construction of double-helix strand curves.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::error::HelicaError;
use crate::options::{GeometryOptions, Handedness};

// Upper bounds mirror the documented ranges in the options schema.
const MAX_TURNS: f32 = 20.0;
const MAX_SEGMENTS_PER_TURN: u32 = 96;

/// Validated shape parameters for strand construction.
///
/// Construction fails fast on out-of-range values rather than clamping, so a
/// bad preset surfaces at load time instead of as silently wrong geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixParameters {
    radius: f32,
    height: f32,
    turns: f32,
    segments_per_turn: u32,
    handedness: Handedness,
}

impl HelixParameters {
    /// Validate and capture helix shape parameters.
    ///
    /// # Errors
    /// Returns [`HelicaError::Config`] when `radius`, `height`, or `turns`
    /// is non-positive or non-finite, when `segments_per_turn` is zero, or
    /// when `turns` or `segments_per_turn` exceeds its documented maximum
    /// (20 and 96).
    pub fn new(
        radius: f32,
        height: f32,
        turns: f32,
        segments_per_turn: u32,
        handedness: Handedness,
    ) -> Result<Self, HelicaError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(HelicaError::Config(format!(
                "helix radius must be positive, got {radius}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(HelicaError::Config(format!(
                "helix height must be positive, got {height}"
            )));
        }
        if !(turns.is_finite() && turns > 0.0) {
            return Err(HelicaError::Config(format!(
                "helix turns must be positive, got {turns}"
            )));
        }
        if turns > MAX_TURNS {
            return Err(HelicaError::Config(format!(
                "helix turns are capped at {MAX_TURNS}, got {turns}"
            )));
        }
        if segments_per_turn == 0 {
            return Err(HelicaError::Config(
                "segments_per_turn must be at least 1".to_owned(),
            ));
        }
        if segments_per_turn > MAX_SEGMENTS_PER_TURN {
            return Err(HelicaError::Config(format!(
                "segments_per_turn is capped at {MAX_SEGMENTS_PER_TURN}, \
                 got {segments_per_turn}"
            )));
        }
        Ok(Self {
            radius,
            height,
            turns,
            segments_per_turn,
            handedness,
        })
    }

    /// Validate the helix-shape subset of [`GeometryOptions`].
    ///
    /// # Errors
    /// Same conditions as [`HelixParameters::new`].
    pub fn from_options(
        options: &GeometryOptions,
    ) -> Result<Self, HelicaError> {
        Self::new(
            options.helix_radius,
            options.helix_height,
            options.turns,
            options.segments_per_turn,
            options.handedness,
        )
    }

    /// Horizontal distance from the helix axis to each strand center.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Total vertical extent of the helix.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Full revolutions each strand makes over the height.
    #[must_use]
    pub fn turns(&self) -> f32 {
        self.turns
    }

    /// Sample points per revolution.
    #[must_use]
    pub fn segments_per_turn(&self) -> u32 {
        self.segments_per_turn
    }

    /// Winding direction.
    #[must_use]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Number of samples along each strand curve (turns x segments per
    /// turn, never fewer than two).
    #[must_use]
    pub fn sample_count(&self) -> usize {
        let count =
            (self.turns * self.segments_per_turn as f32).round() as usize;
        count.max(2)
    }
}

/// Ordered samples along one helical strand.
///
/// Immutable after construction; meshing and base-pair placement read from
/// it without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct StrandCurve {
    points: Vec<Vec3>,
}

impl StrandCurve {
    pub(crate) fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// All sample points in order.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sample both strand curves for the given parameters.
///
/// The second strand trails the first by half a revolution, so paired
/// samples sit diametrically opposite across the axis at equal height. The
/// curve is centered vertically on the origin. Output depends only on the
/// parameters.
#[must_use]
pub fn build_strands(params: &HelixParameters) -> (StrandCurve, StrandCurve) {
    let count = params.sample_count();
    let mut strand_a = Vec::with_capacity(count);
    let mut strand_b = Vec::with_capacity(count);

    let direction = match params.handedness() {
        Handedness::Right => 1.0,
        Handedness::Left => -1.0,
    };
    let angle_span = params.turns() * TAU * direction;

    for i in 0..count {
        let f = i as f32 / (count - 1) as f32;
        let angle = f * angle_span;
        let y = (f - 0.5) * params.height();
        strand_a.push(helix_point(params.radius(), angle, y));
        strand_b.push(helix_point(params.radius(), angle + PI, y));
    }

    (StrandCurve::new(strand_a), StrandCurve::new(strand_b))
}

fn helix_point(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_params() -> HelixParameters {
        HelixParameters::new(2.2, 16.0, 5.0, 24, Handedness::Right).unwrap()
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(
            HelixParameters::new(0.0, 16.0, 5.0, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(-1.0, 16.0, 5.0, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(f32::NAN, 16.0, 5.0, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(2.2, 0.0, 5.0, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(2.2, 16.0, 0.0, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(2.2, 16.0, -2.0, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(2.2, 16.0, 5.0, 0, Handedness::Right)
                .is_err()
        );
        // Finite but absurd sampling requests are rejected, not allocated
        assert!(
            HelixParameters::new(2.2, 16.0, 1e9, 24, Handedness::Right)
                .is_err()
        );
        assert!(
            HelixParameters::new(2.2, 16.0, 5.0, 4096, Handedness::Right)
                .is_err()
        );
    }

    #[test]
    fn test_documented_maxima_are_valid() {
        assert!(
            HelixParameters::new(2.2, 16.0, 20.0, 96, Handedness::Right)
                .is_ok()
        );
    }

    #[test]
    fn test_sample_count_is_turns_times_segments() {
        assert_eq!(default_params().sample_count(), 120);
    }

    #[test]
    fn test_strands_share_length_and_heights() {
        let (a, b) = build_strands(&default_params());
        assert_eq!(a.len(), 120);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert!((pa.y - pb.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_strands_diametrically_opposite() {
        let (a, b) = build_strands(&default_params());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert!((pa.x + pb.x).abs() < 1e-4);
            assert!((pa.z + pb.z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_constant_radius() {
        let params = default_params();
        let (a, b) = build_strands(&params);
        for p in a.points().iter().chain(b.points()) {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - params.radius()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_vertical_span_is_centered() {
        let (a, _) = build_strands(&default_params());
        let first = a.points()[0];
        let last = a.points()[a.len() - 1];
        assert!((first.y + 8.0).abs() < 1e-5);
        assert!((last.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_deterministic() {
        let params = default_params();
        let (a1, b1) = build_strands(&params);
        let (a2, b2) = build_strands(&params);
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_left_handed_mirrors_right() {
        let right = default_params();
        let left =
            HelixParameters::new(2.2, 16.0, 5.0, 24, Handedness::Left)
                .unwrap();
        let (ra, _) = build_strands(&right);
        let (la, _) = build_strands(&left);
        for (rp, lp) in ra.points().iter().zip(la.points()) {
            assert!((rp.x - lp.x).abs() < 1e-4);
            assert!((rp.y - lp.y).abs() < 1e-6);
            assert!((rp.z + lp.z).abs() < 1e-4);
        }
    }
}
