//! Base-pair rung placement between paired strand curves.
//!
//! Every `stride`-th sample gets one rung: an endpoint on each strand, a
//! Watson-Crick nucleotide pair with palette colors, and the transform data
//! (midpoint, length, orientation) a host needs to stretch a unit connector
//! cylinder between the endpoints.

use glam::{Quat, Vec3};
use rand::Rng;

use super::helix::StrandCurve;
use crate::error::HelicaError;
use crate::options::ColorOptions;
use crate::util::orientation::alignment_quaternion;

/// Four-letter nucleotide alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    /// Adenine, pairs with thymine.
    Adenine,
    /// Thymine, pairs with adenine.
    Thymine,
    /// Guanine, pairs with cytosine.
    Guanine,
    /// Cytosine, pairs with guanine.
    Cytosine,
}

impl Nucleotide {
    /// All variants, indexable by a uniform draw.
    pub const ALL: [Self; 4] =
        [Self::Adenine, Self::Thymine, Self::Guanine, Self::Cytosine];

    /// Watson-Crick complement.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Adenine => Self::Thymine,
            Self::Thymine => Self::Adenine,
            Self::Guanine => Self::Cytosine,
            Self::Cytosine => Self::Guanine,
        }
    }

    /// Palette color for this nucleotide.
    #[must_use]
    pub fn color(self, colors: &ColorOptions) -> [f32; 3] {
        match self {
            Self::Adenine => colors.adenine,
            Self::Thymine => colors.thymine,
            Self::Guanine => colors.guanine,
            Self::Cytosine => colors.cytosine,
        }
    }

    /// One-letter code, handy for debug overlays.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Adenine => 'A',
            Self::Thymine => 'T',
            Self::Guanine => 'G',
            Self::Cytosine => 'C',
        }
    }
}

/// One rung connecting the two strands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePair {
    /// Endpoint on the first strand.
    pub end_a: Vec3,
    /// Endpoint on the second strand.
    pub end_b: Vec3,
    /// Nucleotide at the first-strand end.
    pub nucleotide_a: Nucleotide,
    /// Nucleotide at the second-strand end, always the complement.
    pub nucleotide_b: Nucleotide,
    /// Palette color of the first-strand half.
    pub color_a: [f32; 3],
    /// Palette color of the second-strand half.
    pub color_b: [f32; 3],
    /// Midpoint between the endpoints.
    pub midpoint: Vec3,
    /// Distance between the endpoints.
    pub length: f32,
    /// Rotation mapping +Y onto the rung direction, for a unit connector
    /// cylinder modeled along +Y.
    pub orientation: Quat,
}

/// Place rungs every `stride` samples along the paired strands.
///
/// Strand positions are read as-is; only nucleotide identity comes from
/// `rng`, so geometry stays deterministic for a given configuration. A
/// sample whose endpoints coincide is skipped with a warning rather than
/// emitting a rung with no orientation.
///
/// # Errors
/// Returns [`HelicaError::Config`] when `stride` is zero or the strands
/// have different lengths.
pub fn place_base_pairs<R: Rng + ?Sized>(
    strand_a: &StrandCurve,
    strand_b: &StrandCurve,
    stride: usize,
    colors: &ColorOptions,
    rng: &mut R,
) -> Result<Vec<BasePair>, HelicaError> {
    if stride == 0 {
        return Err(HelicaError::Config(
            "base-pair stride must be at least 1".to_owned(),
        ));
    }
    if strand_a.len() != strand_b.len() {
        return Err(HelicaError::Config(format!(
            "paired strands must have equal lengths, got {} and {}",
            strand_a.len(),
            strand_b.len()
        )));
    }

    let count = strand_a.len() / stride;
    let mut pairs = Vec::with_capacity(count);

    for k in 0..count {
        let i = k * stride;
        let end_a = strand_a.points()[i];
        let end_b = strand_b.points()[i];

        let Some(orientation) = alignment_quaternion(Vec3::Y, end_b - end_a)
        else {
            log::warn!("skipping zero-length base pair at sample {i}");
            continue;
        };

        let nucleotide_a =
            Nucleotide::ALL[rng.random_range(0..Nucleotide::ALL.len())];
        let nucleotide_b = nucleotide_a.complement();

        pairs.push(BasePair {
            end_a,
            end_b,
            nucleotide_a,
            nucleotide_b,
            color_a: nucleotide_a.color(colors),
            color_b: nucleotide_b.color(colors),
            midpoint: (end_a + end_b) * 0.5,
            length: end_a.distance(end_b),
            orientation,
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::helix::{build_strands, HelixParameters};
    use crate::options::Handedness;

    fn test_strands() -> (StrandCurve, StrandCurve) {
        let params =
            HelixParameters::new(2.2, 16.0, 5.0, 24, Handedness::Right)
                .unwrap();
        build_strands(&params)
    }

    #[test]
    fn test_complement_is_involutive() {
        for n in Nucleotide::ALL {
            assert_ne!(n, n.complement());
            assert_eq!(n, n.complement().complement());
        }
    }

    #[test]
    fn test_letter_codes() {
        assert_eq!(
            Nucleotide::ALL.map(Nucleotide::letter),
            ['A', 'T', 'G', 'C']
        );
        assert_eq!(
            Nucleotide::ALL.map(|n| n.complement().letter()),
            ['T', 'A', 'C', 'G']
        );
    }

    #[test]
    fn test_rejects_zero_stride() {
        let (a, b) = test_strands();
        let mut rng = StdRng::seed_from_u64(1);
        let result =
            place_base_pairs(&a, &b, 0, &ColorOptions::default(), &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_mismatched_strands() {
        let (a, _) = test_strands();
        let short = StrandCurve::new(a.points()[..10].to_vec());
        let mut rng = StdRng::seed_from_u64(1);
        let result = place_base_pairs(
            &a,
            &short,
            6,
            &ColorOptions::default(),
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_pair_count_is_floor_of_len_over_stride() {
        let (a, b) = test_strands();
        let colors = ColorOptions::default();
        let mut rng = StdRng::seed_from_u64(2);

        let by_six =
            place_base_pairs(&a, &b, 6, &colors, &mut rng).unwrap();
        assert_eq!(by_six.len(), 20); // 120 / 6

        let by_seven =
            place_base_pairs(&a, &b, 7, &colors, &mut rng).unwrap();
        assert_eq!(by_seven.len(), 17); // floor(120 / 7)
    }

    #[test]
    fn test_endpoints_lie_on_strands() {
        let (a, b) = test_strands();
        let mut rng = StdRng::seed_from_u64(3);
        let pairs =
            place_base_pairs(&a, &b, 6, &ColorOptions::default(), &mut rng)
                .unwrap();

        for (k, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.end_a, a.points()[k * 6]);
            assert_eq!(pair.end_b, b.points()[k * 6]);
        }
    }

    #[test]
    fn test_rungs_are_watson_crick_pairs() {
        let (a, b) = test_strands();
        let colors = ColorOptions::default();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs =
                place_base_pairs(&a, &b, 4, &colors, &mut rng).unwrap();
            for pair in &pairs {
                assert_eq!(pair.nucleotide_b, pair.nucleotide_a.complement());
                assert_ne!(pair.nucleotide_a, pair.nucleotide_b);
                assert_eq!(pair.color_a, pair.nucleotide_a.color(&colors));
                assert_eq!(pair.color_b, pair.nucleotide_b.color(&colors));
            }
        }
    }

    #[test]
    fn test_midpoint_length_and_orientation() {
        let (a, b) = test_strands();
        let mut rng = StdRng::seed_from_u64(4);
        let pairs =
            place_base_pairs(&a, &b, 6, &ColorOptions::default(), &mut rng)
                .unwrap();

        for pair in &pairs {
            let expected_mid = (pair.end_a + pair.end_b) * 0.5;
            assert!(pair.midpoint.distance(expected_mid) < 1e-5);
            // Strands sit diametrically opposite at radius 2.2
            assert!((pair.length - 4.4).abs() < 1e-3);

            let dir = (pair.end_b - pair.end_a).normalize();
            let rotated = pair.orientation * Vec3::Y;
            assert!(rotated.dot(dir) > 1.0 - 1e-4);
        }
    }

    #[test]
    fn test_geometry_independent_of_seed() {
        let (a, b) = test_strands();
        let colors = ColorOptions::default();
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(99);
        let p1 = place_base_pairs(&a, &b, 6, &colors, &mut rng1).unwrap();
        let p2 = place_base_pairs(&a, &b, 6, &colors, &mut rng2).unwrap();

        assert_eq!(p1.len(), p2.len());
        for (x, y) in p1.iter().zip(&p2) {
            assert_eq!(x.end_a, y.end_a);
            assert_eq!(x.end_b, y.end_b);
            assert_eq!(x.length, y.length);
        }
    }
}
