//! Tube mesh extrusion for strand curves.
//!
//! Rings of `radial_segments` vertices are swept along the framed strand
//! path and adjacent rings are stitched with two triangles per quad.
//! Vertices carry the ring center so hosts can shade cylindrical normals
//! per pixel instead of relying on the coarse vertex normal.

use super::helix::StrandCurve;
use super::spline::{frame_path, PathFrame};
use crate::error::HelicaError;
use crate::options::GeometryOptions;

/// Interpolated steps per strand span when resampling for meshing. Strand
/// curves are already densely sampled, so two steps keep silhouettes smooth
/// without inflating vertex counts.
const SEGMENTS_PER_SPAN: usize = 2;

/// Validated cross-section settings for strand tube meshing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeOptions {
    radius: f32,
    radial_segments: u32,
}

impl TubeOptions {
    /// Validate and capture tube cross-section settings.
    ///
    /// # Errors
    /// Returns [`HelicaError::Config`] when `radius` is non-positive or
    /// non-finite, or when `radial_segments` is below three (the minimum to
    /// close a ring).
    pub fn new(radius: f32, radial_segments: u32) -> Result<Self, HelicaError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(HelicaError::Config(format!(
                "tube radius must be positive, got {radius}"
            )));
        }
        if radial_segments < 3 {
            return Err(HelicaError::Config(format!(
                "tube needs at least 3 radial segments, got {radial_segments}"
            )));
        }
        Ok(Self {
            radius,
            radial_segments,
        })
    }

    /// Validate the tube subset of [`GeometryOptions`].
    ///
    /// # Errors
    /// Same conditions as [`TubeOptions::new`].
    pub fn from_options(
        options: &GeometryOptions,
    ) -> Result<Self, HelicaError> {
        Self::new(options.strand_radius, options.strand_radial_segments)
    }

    /// Cross-section radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Vertex count around each ring.
    #[must_use]
    pub fn radial_segments(&self) -> u32 {
        self.radial_segments
    }
}

/// Vertex layout for strand tube meshes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TubeVertex {
    /// Surface position.
    pub position: [f32; 3],
    /// Outward surface normal.
    pub normal: [f32; 3],
    /// Ring center, for per-pixel cylindrical shading.
    pub center: [f32; 3],
}

/// Renderable triangle mesh for one strand tube.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TubeMesh {
    /// Ring vertices, `radial_segments` per ring.
    pub vertices: Vec<TubeVertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl TubeMesh {
    /// Raw vertex bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of indices to draw.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Extrude a tube mesh along one strand curve.
///
/// # Errors
/// Returns [`HelicaError::DegenerateGeometry`] when the curve has fewer
/// than two points, which cannot define a sweep direction.
pub fn build_tube_mesh(
    curve: &StrandCurve,
    options: &TubeOptions,
) -> Result<TubeMesh, HelicaError> {
    if curve.len() < 2 {
        return Err(HelicaError::DegenerateGeometry(format!(
            "strand tube needs at least 2 points, got {}",
            curve.len()
        )));
    }

    let frames = frame_path(curve.points(), SEGMENTS_PER_SPAN);
    let radial = options.radial_segments() as usize;

    let mut vertices = Vec::with_capacity(frames.len() * radial);
    for frame in &frames {
        push_ring(&mut vertices, frame, options.radius(), radial);
    }

    let mut indices = Vec::with_capacity((frames.len() - 1) * radial * 6);
    for ring in 0..frames.len() - 1 {
        let ring_offset = ring * radial;
        let next_offset = (ring + 1) * radial;

        for k in 0..radial {
            let k_next = (k + 1) % radial;

            let v0 = (ring_offset + k) as u32;
            let v1 = (ring_offset + k_next) as u32;
            let v2 = (next_offset + k) as u32;
            let v3 = (next_offset + k_next) as u32;

            // Two triangles per quad
            indices.extend_from_slice(&[v0, v2, v1]);
            indices.extend_from_slice(&[v1, v2, v3]);
        }
    }

    Ok(TubeMesh { vertices, indices })
}

fn push_ring(
    vertices: &mut Vec<TubeVertex>,
    frame: &PathFrame,
    radius: f32,
    radial: usize,
) {
    for k in 0..radial {
        let angle = (k as f32 / radial as f32) * std::f32::consts::TAU;
        let offset =
            frame.normal * angle.cos() + frame.binormal * angle.sin();

        vertices.push(TubeVertex {
            position: (frame.pos + offset * radius).into(),
            normal: offset.normalize().into(),
            center: frame.pos.into(),
        });
    }
}
