//! Static double-helix geometry: strand curves, base pairs, tube meshes.
//!
//! Everything here is pure construction. Geometry is built once per
//! configuration (the rig memoizes it behind a parameter digest) and is
//! never rebuilt per frame; per-frame motion lives entirely in the
//! scene-node transform produced by [`crate::animation`].

pub mod base_pair;
pub mod helix;
pub(crate) mod spline;
pub mod tube;

pub use base_pair::{place_base_pairs, BasePair, Nucleotide};
pub use helix::{build_strands, HelixParameters, StrandCurve};
use rand::Rng;
pub use tube::{build_tube_mesh, TubeMesh, TubeOptions, TubeVertex};

use crate::error::HelicaError;
use crate::options::ColorOptions;

/// Complete static geometry for one double helix.
#[derive(Debug, Clone)]
pub struct DoubleHelix {
    /// First strand curve.
    pub strand_a: StrandCurve,
    /// Second strand curve, trailing the first by half a revolution.
    pub strand_b: StrandCurve,
    /// Rungs connecting the strands.
    pub base_pairs: Vec<BasePair>,
}

/// Build both strand curves and their base-pair rungs.
///
/// Strand positions depend only on `params`; `rng` decides nucleotide
/// identities only.
///
/// # Errors
/// Returns [`HelicaError::Config`] when `stride` is zero.
pub fn build_helix_geometry<R: Rng + ?Sized>(
    params: &HelixParameters,
    stride: usize,
    colors: &ColorOptions,
    rng: &mut R,
) -> Result<DoubleHelix, HelicaError> {
    let (strand_a, strand_b) = build_strands(params);
    let base_pairs =
        place_base_pairs(&strand_a, &strand_b, stride, colors, rng)?;
    Ok(DoubleHelix {
        strand_a,
        strand_b,
        base_pairs,
    })
}
