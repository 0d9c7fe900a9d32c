use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lighting::{BreathingOptions, LightKeyframe, LightRigSettings};
use crate::util::easing::EasingFunction;

/// Scroll choreography for the light rig.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Choreography keyframes, ordered by strictly ascending breakpoint.
    #[schemars(title = "Keyframes")]
    pub keyframes: Vec<LightKeyframe>,
    /// Sinusoidal breathing superimposed on the key light.
    #[schemars(title = "Breathing")]
    pub breathing: BreathingOptions,
    /// Easing applied to the interpolation parameter between keyframes.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for LightingOptions {
    fn default() -> Self {
        // Hero section opens warm and key-lit; mid-scroll hands energy to the
        // fill and rim; the footer settles into a cool rim-heavy look.
        Self {
            keyframes: vec![
                LightKeyframe {
                    scroll_breakpoint: 0.0,
                    settings: LightRigSettings::default(),
                },
                LightKeyframe {
                    scroll_breakpoint: 0.45,
                    settings: LightRigSettings {
                        key_intensity: 1.5,
                        fill_intensity: 1.1,
                        rim_intensity: 0.9,
                        rim_color: [0.45, 0.85, 0.8],
                        ambient_intensity: 0.4,
                        ..LightRigSettings::default()
                    },
                },
                LightKeyframe {
                    scroll_breakpoint: 1.0,
                    settings: LightRigSettings {
                        key_intensity: 1.0,
                        key_color: [0.9, 0.93, 1.0],
                        fill_intensity: 0.6,
                        rim_intensity: 1.5,
                        rim_color: [0.6, 0.55, 0.95],
                        ambient_intensity: 0.22,
                        ..LightRigSettings::default()
                    },
                },
            ],
            breathing: BreathingOptions::default(),
            easing: EasingFunction::SmoothStep,
        }
    }
}
