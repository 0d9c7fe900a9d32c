//! Bit-exact float hashing for geometry change detection.

use std::hash::{Hash, Hasher};

/// Hash a single `f32` by converting it to bits.
pub fn hash_f32(v: f32, hasher: &mut impl Hasher) {
    v.to_bits().hash(hasher);
}

/// Hash an RGB triple by converting each channel to bits.
pub fn hash_rgb(rgb: [f32; 3], hasher: &mut impl Hasher) {
    for channel in rgb {
        hash_f32(channel, hasher);
    }
}
