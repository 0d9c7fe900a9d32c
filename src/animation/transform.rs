use glam::{Mat4, Quat, Vec3};

/// Scale/rotation/translation triple for the helix scene node.
///
/// Kept decomposed so hosts can compose it into whatever node or matrix
/// representation their scene graph uses; [`HelixTransform::matrix`] is a
/// convenience for hosts that consume a single model matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixTransform {
    /// Per-axis scale.
    pub scale: Vec3,
    /// Node rotation.
    pub rotation: Quat,
    /// Node translation.
    pub translation: Vec3,
}

impl HelixTransform {
    /// The do-nothing transform.
    pub const IDENTITY: Self = Self {
        scale: Vec3::ONE,
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Compose into a single model matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

impl Default for HelixTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        let m = HelixTransform::IDENTITY.matrix();
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_matrix_applies_scale_then_rotation_then_translation() {
        let transform = HelixTransform {
            scale: Vec3::new(1.0, 0.5, 1.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            translation: Vec3::new(0.0, -3.0, 0.0),
        };
        let moved = transform.matrix().transform_point3(Vec3::new(0.0, 2.0, 0.0));
        assert!(moved.distance(Vec3::new(0.0, -2.0, 0.0)) < 1e-5);
    }
}
