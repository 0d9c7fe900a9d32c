//! Spline resampling and framing for strand paths.
//!
//! Tube extrusion wants a smooth, evenly framed path. Strand samples are
//! resampled with cubic Hermite interpolation using Catmull-Rom style
//! tangents, then framed with rotation minimizing frames so tube rings do
//! not twist through the curve.

use glam::Vec3;

/// One framed sample along a resampled strand path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathFrame {
    pub pos: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// Resample `points` with `subdivisions` interpolated steps per span and
/// attach rotation minimizing frames.
///
/// Returns an empty vector for fewer than two input points.
pub(crate) fn frame_path(
    points: &[Vec3],
    subdivisions: usize,
) -> Vec<PathFrame> {
    let n = points.len();
    if n < 2 || subdivisions == 0 {
        return Vec::new();
    }

    let tangents = catmull_rom_tangents(points);

    let mut frames = Vec::with_capacity((n - 1) * subdivisions + 1);
    for i in 0..n - 1 {
        let p0 = points[i];
        let p1 = points[i + 1];
        let m0 = tangents[i];
        let m1 = tangents[i + 1];

        for j in 0..subdivisions {
            let t = j as f32 / subdivisions as f32;
            frames.push(PathFrame {
                pos: hermite_position(p0, m0, p1, m1, t),
                tangent: hermite_velocity(p0, m0, p1, m1, t).normalize(),
                normal: Vec3::ZERO, // Filled in by the RMF pass
                binormal: Vec3::ZERO,
            });
        }
    }
    frames.push(PathFrame {
        pos: points[n - 1],
        tangent: tangents[n - 1].normalize(),
        normal: Vec3::ZERO,
        binormal: Vec3::ZERO,
    });

    apply_rotation_minimizing_frames(&mut frames);
    frames
}

/// Catmull-Rom style tangents: central differences inside, one-sided at the
/// endpoints.
fn catmull_rom_tangents(points: &[Vec3]) -> Vec<Vec3> {
    let n = points.len();
    (0..n)
        .map(|i| {
            if i == 0 {
                points[1] - points[0]
            } else if i == n - 1 {
                points[n - 1] - points[n - 2]
            } else {
                (points[i + 1] - points[i - 1]) * 0.5
            }
        })
        .collect()
}

fn hermite_position(p0: Vec3, m0: Vec3, p1: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
}

/// Derivative of [`hermite_position`] with respect to t.
fn hermite_velocity(p0: Vec3, m0: Vec3, p1: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    let dh00 = 6.0 * t2 - 6.0 * t;
    let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
    let dh01 = -6.0 * t2 + 6.0 * t;
    let dh11 = 3.0 * t2 - 2.0 * t;

    p0 * dh00 + m0 * dh10 + p1 * dh01 + m1 * dh11
}

/// Propagate normals/binormals along the path using the double reflection
/// method (Wang et al. 2008: "Computation of Rotation Minimizing Frames").
fn apply_rotation_minimizing_frames(frames: &mut [PathFrame]) {
    if frames.is_empty() {
        return;
    }

    let t0 = frames[0].tangent;
    let arbitrary = if t0.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let n0 = t0.cross(arbitrary).normalize();
    frames[0].normal = n0;
    frames[0].binormal = t0.cross(n0).normalize();

    for i in 0..frames.len() - 1 {
        let x_i = frames[i].pos;
        let x_i1 = frames[i + 1].pos;
        let t_i = frames[i].tangent;
        let t_i1 = frames[i + 1].tangent;
        let r_i = frames[i].normal;
        let s_i = frames[i].binormal;

        let v1 = x_i1 - x_i;
        let c1 = v1.dot(v1);

        if c1 < 1e-10 {
            // Coincident samples, carry the frame forward
            frames[i + 1].normal = r_i;
            frames[i + 1].binormal = s_i;
            continue;
        }

        // Reflect the frame across the plane perpendicular to v1
        let r_i_l = r_i - (2.0 / c1) * v1.dot(r_i) * v1;
        let t_i_l = t_i - (2.0 / c1) * v1.dot(t_i) * v1;

        // Second reflection aligns the reflected tangent with the real one
        let v2 = t_i1 - t_i_l;
        let c2 = v2.dot(v2);
        let r_i1 = if c2 < 1e-10 {
            r_i_l
        } else {
            r_i_l - (2.0 / c2) * v2.dot(r_i_l) * v2
        };

        // Re-orthonormalize against accumulated float drift
        let r_i1 = (r_i1 - t_i1 * t_i1.dot(r_i1)).normalize();
        frames[i + 1].normal = r_i1;
        frames[i + 1].binormal = t_i1.cross(r_i1).normalize();
    }
}
