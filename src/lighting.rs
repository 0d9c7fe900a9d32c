//! Scroll-choreographed lighting for the helix scene.
//!
//! The light rig is fixed (key, fill, rim, ambient); what varies is the
//! interpolated [`LightRigSettings`] the choreographer hands the host each
//! frame. Keyframes are indexed by scroll progress, interpolation between
//! them is eased (smoothstep by default), and a slow sinusoidal breathing
//! term rides on the key light so the scene never looks frozen between
//! scroll positions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HelicaError;
use crate::options::LightingOptions;
use crate::util::easing::EasingFunction;

/// Intensities and colors for the fixed four-light rig.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct LightRigSettings {
    /// Key light intensity.
    pub key_intensity: f32,
    /// Key light RGB color.
    pub key_color: [f32; 3],
    /// Fill light intensity.
    pub fill_intensity: f32,
    /// Fill light RGB color.
    pub fill_color: [f32; 3],
    /// Rim light intensity.
    pub rim_intensity: f32,
    /// Rim light RGB color.
    pub rim_color: [f32; 3],
    /// Ambient intensity.
    pub ambient_intensity: f32,
    /// Ambient RGB color.
    pub ambient_color: [f32; 3],
}

impl Default for LightRigSettings {
    fn default() -> Self {
        Self {
            // Warm key over a cool fill reads well on the pale strands
            key_intensity: 2.4,
            key_color: [1.0, 0.96, 0.92],
            fill_intensity: 0.8,
            fill_color: [0.75, 0.82, 1.0],
            rim_intensity: 0.3,
            rim_color: [0.55, 0.8, 1.0],
            ambient_intensity: 0.3,
            ambient_color: [1.0, 1.0, 1.0],
        }
    }
}

impl LightRigSettings {
    /// Channel-wise linear blend toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            key_intensity: lerp_f32(self.key_intensity, other.key_intensity, t),
            key_color: lerp_rgb(self.key_color, other.key_color, t),
            fill_intensity: lerp_f32(
                self.fill_intensity,
                other.fill_intensity,
                t,
            ),
            fill_color: lerp_rgb(self.fill_color, other.fill_color, t),
            rim_intensity: lerp_f32(self.rim_intensity, other.rim_intensity, t),
            rim_color: lerp_rgb(self.rim_color, other.rim_color, t),
            ambient_intensity: lerp_f32(
                self.ambient_intensity,
                other.ambient_intensity,
                t,
            ),
            ambient_color: lerp_rgb(self.ambient_color, other.ambient_color, t),
        }
    }
}

fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// One choreography keyframe: the rig to show at a scroll position.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
pub struct LightKeyframe {
    /// Scroll progress at which these settings apply exactly.
    pub scroll_breakpoint: f32,
    /// Rig settings at the breakpoint.
    #[serde(default)]
    pub settings: LightRigSettings,
}

/// Additive sinusoidal modulation of the key light intensity.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct BreathingOptions {
    /// Peak intensity deviation. Zero disables breathing.
    #[schemars(title = "Breathing Amplitude", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub amplitude: f32,
    /// Oscillation rate in radians per second.
    #[schemars(title = "Breathing Rate", range(min = 0.0, max = 6.0), extend("step" = 0.05))]
    pub angular_frequency: f32,
}

impl Default for BreathingOptions {
    fn default() -> Self {
        Self {
            amplitude: 0.08,
            angular_frequency: 0.9,
        }
    }
}

/// Validated scroll-indexed light choreography.
///
/// Construction checks the keyframe list once so sampling never has to;
/// [`sample`](LightChoreographer::sample) is pure and runs every frame.
#[derive(Debug, Clone)]
pub struct LightChoreographer {
    keyframes: Vec<LightKeyframe>,
    breathing: BreathingOptions,
    easing: EasingFunction,
}

impl LightChoreographer {
    /// Validate choreography options.
    ///
    /// # Errors
    /// Returns [`HelicaError::Config`] when the keyframe list is empty,
    /// contains a non-finite breakpoint, or is not strictly ascending.
    pub fn new(options: &LightingOptions) -> Result<Self, HelicaError> {
        if options.keyframes.is_empty() {
            return Err(HelicaError::Config(
                "lighting choreography needs at least one keyframe"
                    .to_owned(),
            ));
        }
        for keyframe in &options.keyframes {
            if !keyframe.scroll_breakpoint.is_finite() {
                return Err(HelicaError::Config(format!(
                    "lighting breakpoint must be finite, got {}",
                    keyframe.scroll_breakpoint
                )));
            }
        }
        for pair in options.keyframes.windows(2) {
            if pair[1].scroll_breakpoint <= pair[0].scroll_breakpoint {
                return Err(HelicaError::Config(format!(
                    "lighting breakpoints must be strictly ascending, got {} after {}",
                    pair[1].scroll_breakpoint, pair[0].scroll_breakpoint
                )));
            }
        }

        Ok(Self {
            keyframes: options.keyframes.clone(),
            breathing: options.breathing,
            easing: options.easing,
        })
    }

    /// Validated keyframes in breakpoint order.
    #[must_use]
    pub fn keyframes(&self) -> &[LightKeyframe] {
        &self.keyframes
    }

    /// Rig settings for the current scroll position and elapsed time.
    ///
    /// Scroll positions outside the covered breakpoint range clamp to the
    /// nearest keyframe. Breathing applies after interpolation, so it stays
    /// visible while the page rests between sections.
    #[must_use]
    pub fn sample(&self, scroll_progress: f32, elapsed: f32) -> LightRigSettings {
        let mut settings = self.interpolate(scroll_progress);
        settings.key_intensity += self.breathing.amplitude
            * (self.breathing.angular_frequency * elapsed).sin();
        settings
    }

    fn interpolate(&self, scroll_progress: f32) -> LightRigSettings {
        let first = &self.keyframes[0];
        if scroll_progress <= first.scroll_breakpoint {
            return first.settings;
        }
        let last = &self.keyframes[self.keyframes.len() - 1];
        if scroll_progress >= last.scroll_breakpoint {
            return last.settings;
        }

        // Keyframe lists are a handful of entries; a linear scan beats a
        // binary search at this size
        for pair in self.keyframes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if scroll_progress > b.scroll_breakpoint {
                continue;
            }

            let span = b.scroll_breakpoint - a.scroll_breakpoint;
            // A zero-width span pins the blend to the left keyframe
            let u = if span > 0.0 {
                (scroll_progress - a.scroll_breakpoint) / span
            } else {
                0.0
            };
            return a.settings.lerp(&b.settings, self.easing.evaluate(u));
        }

        last.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig(key_intensity: f32) -> LightRigSettings {
        LightRigSettings {
            key_intensity,
            ..LightRigSettings::default()
        }
    }

    fn two_key_options() -> LightingOptions {
        LightingOptions {
            keyframes: vec![
                LightKeyframe {
                    scroll_breakpoint: 0.0,
                    settings: rig(1.0),
                },
                LightKeyframe {
                    scroll_breakpoint: 1.0,
                    settings: rig(2.0),
                },
            ],
            breathing: BreathingOptions {
                amplitude: 0.0,
                angular_frequency: 0.9,
            },
            easing: EasingFunction::SmoothStep,
        }
    }

    #[test]
    fn test_rejects_empty_keyframes() {
        let options = LightingOptions {
            keyframes: Vec::new(),
            ..LightingOptions::default()
        };
        assert!(LightChoreographer::new(&options).is_err());
    }

    #[test]
    fn test_rejects_unsorted_and_duplicate_breakpoints() {
        let mut options = two_key_options();
        options.keyframes[1].scroll_breakpoint = -0.5;
        assert!(LightChoreographer::new(&options).is_err());

        options.keyframes[1].scroll_breakpoint = 0.0;
        assert!(LightChoreographer::new(&options).is_err());

        options.keyframes[1].scroll_breakpoint = f32::NAN;
        assert!(LightChoreographer::new(&options).is_err());
    }

    #[test]
    fn test_midpoint_interpolation_is_exact() {
        // Smoothstep(0.5) = 0.5, so the midpoint blend is the exact mean.
        let choreographer =
            LightChoreographer::new(&two_key_options()).unwrap();
        let settings = choreographer.sample(0.5, 0.0);
        assert!((settings.key_intensity - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_scroll_clamps_to_end_keyframes() {
        let choreographer =
            LightChoreographer::new(&two_key_options()).unwrap();
        assert_eq!(choreographer.sample(-2.0, 0.0).key_intensity, 1.0);
        assert_eq!(choreographer.sample(7.5, 0.0).key_intensity, 2.0);
    }

    #[test]
    fn test_breakpoints_hit_exactly() {
        let choreographer =
            LightChoreographer::new(&two_key_options()).unwrap();
        assert_eq!(choreographer.sample(0.0, 0.0).key_intensity, 1.0);
        assert_eq!(choreographer.sample(1.0, 0.0).key_intensity, 2.0);
    }

    #[test]
    fn test_easing_biases_toward_nearest_keyframe() {
        let choreographer =
            LightChoreographer::new(&two_key_options()).unwrap();
        // Smoothstep is below linear before the midpoint
        let early = choreographer.sample(0.25, 0.0).key_intensity;
        assert!(early < 1.25);
        assert!(early > 1.0);
    }

    #[test]
    fn test_single_keyframe_is_constant() {
        let options = LightingOptions {
            keyframes: vec![LightKeyframe {
                scroll_breakpoint: 0.5,
                settings: rig(1.7),
            }],
            breathing: BreathingOptions {
                amplitude: 0.0,
                angular_frequency: 1.0,
            },
            easing: EasingFunction::SmoothStep,
        };
        let choreographer = LightChoreographer::new(&options).unwrap();
        assert_eq!(choreographer.sample(0.0, 0.0).key_intensity, 1.7);
        assert_eq!(choreographer.sample(1.0, 0.0).key_intensity, 1.7);
    }

    #[test]
    fn test_breathing_rides_on_key_light_only() {
        let mut options = two_key_options();
        options.breathing = BreathingOptions {
            amplitude: 0.5,
            angular_frequency: 1.0,
        };
        let choreographer = LightChoreographer::new(&options).unwrap();

        // sin(pi/2) = 1 at elapsed = pi/2
        let elapsed = std::f32::consts::FRAC_PI_2;
        let breathing = choreographer.sample(0.5, elapsed);
        let still = choreographer.sample(0.5, 0.0);

        assert!((breathing.key_intensity - (still.key_intensity + 0.5)).abs() < 1e-5);
        assert_eq!(breathing.fill_intensity, still.fill_intensity);
        assert_eq!(breathing.rim_intensity, still.rim_intensity);
        assert_eq!(breathing.ambient_intensity, still.ambient_intensity);
    }

    #[test]
    fn test_default_choreography_validates() {
        assert!(LightChoreographer::new(&LightingOptions::default()).is_ok());
    }

    #[test]
    fn test_color_channels_interpolate() {
        let mut options = two_key_options();
        options.keyframes[0].settings.rim_color = [0.0, 0.0, 0.0];
        options.keyframes[1].settings.rim_color = [1.0, 0.5, 0.0];
        options.easing = EasingFunction::Linear;
        let choreographer = LightChoreographer::new(&options).unwrap();

        let rim = choreographer.sample(0.5, 0.0).rim_color;
        assert!((rim[0] - 0.5).abs() < 1e-6);
        assert!((rim[1] - 0.25).abs() < 1e-6);
        assert!((rim[2] - 0.0).abs() < 1e-6);
    }
}
