//! Quaternion construction for aligning geometry with a direction.
//!
//! Base-pair connectors (and any other prototype mesh modeled along +Y) are
//! oriented by a single shared rotation helper rather than per-call-site
//! quaternion math.

use glam::{Quat, Vec3};

/// Minimum squared length for a vector to define a direction.
const MIN_LENGTH_SQ: f32 = 1e-12;

/// Rotation mapping the `from` direction onto the `to` direction.
///
/// Inputs need not be normalized. Antiparallel inputs resolve to a half-turn
/// about an arbitrary perpendicular axis. Returns `None` when either vector
/// is too short to define a direction.
#[must_use]
pub fn alignment_quaternion(from: Vec3, to: Vec3) -> Option<Quat> {
    if from.length_squared() < MIN_LENGTH_SQ
        || to.length_squared() < MIN_LENGTH_SQ
    {
        return None;
    }
    Some(Quat::from_rotation_arc(from.normalize(), to.normalize()))
}
