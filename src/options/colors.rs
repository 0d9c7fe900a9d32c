use serde::{Deserialize, Serialize};

/// Color palette options for the helix scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color for adenine rung halves.
    pub adenine: [f32; 3],
    /// RGB color for thymine rung halves.
    pub thymine: [f32; 3],
    /// RGB color for guanine rung halves.
    pub guanine: [f32; 3],
    /// RGB color for cytosine rung halves.
    pub cytosine: [f32; 3],
    /// RGB material color for the first strand tube.
    pub strand_a: [f32; 3],
    /// RGB material color for the second strand tube.
    pub strand_b: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            adenine: [0.36, 0.82, 0.65],
            thymine: [0.95, 0.76, 0.35],
            guanine: [0.42, 0.56, 0.95],
            cytosine: [0.92, 0.45, 0.55],
            strand_a: [0.88, 0.90, 0.96],
            strand_b: [0.62, 0.70, 0.92],
        }
    }
}
