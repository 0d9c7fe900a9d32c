use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Winding direction of the helix about its vertical axis.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// Counterclockwise rise viewed from above, like B-DNA.
    #[default]
    Right,
    /// Clockwise rise viewed from above.
    Left,
}

/// Helix shape, strand tube, and base-pair spacing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
pub struct GeometryOptions {
    /// Horizontal distance from the helix axis to each strand center.
    #[schemars(title = "Helix Radius", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub helix_radius: f32,
    /// Total vertical extent of the helix.
    #[schemars(title = "Helix Height", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub helix_height: f32,
    /// Full revolutions each strand makes over the height.
    #[schemars(title = "Turns", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub turns: f32,
    /// Sample points per revolution of each strand curve.
    #[schemars(title = "Segments Per Turn", range(min = 4, max = 96))]
    pub segments_per_turn: u32,
    /// Winding direction.
    #[schemars(title = "Handedness")]
    pub handedness: Handedness,
    /// Cross-section radius of each strand tube.
    #[schemars(title = "Strand Radius", range(min = 0.02, max = 2.0), extend("step" = 0.02))]
    pub strand_radius: f32,
    /// Vertex count around each strand tube ring.
    #[schemars(title = "Strand Radial Segments", range(min = 3, max = 32))]
    pub strand_radial_segments: u32,
    /// Strand samples between consecutive base-pair rungs.
    #[schemars(title = "Base Pair Stride", range(min = 1, max = 32))]
    pub base_pair_stride: u32,
    /// Cross-section radius the host applies to rung connector cylinders.
    #[schemars(title = "Base Pair Radius", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub base_pair_radius: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            helix_radius: 2.2,
            helix_height: 16.0,
            turns: 5.0,
            segments_per_turn: 24,
            handedness: Handedness::Right,
            strand_radius: 0.28,
            strand_radial_segments: 12,
            base_pair_stride: 6,
            base_pair_radius: 0.12,
        }
    }
}
