//! Tuning for the note tracker, loaded as part of the host's configuration.

use serde::Deserialize;

use crate::{
    accent::ACCENT_GAIN_DEPTH,
    pitch::{DEFAULT_TUNING, PitchMode},
};


/// How cutoff, resonance and decay glide to new values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothingConfig {
    /// Fraction of the remaining distance covered each sample.
    pub coeff: f32,

    /// Smoothed values reach the voice on every `interval`th frame of a block.
    pub interval: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            coeff: 0.001,
            interval: 8,
        }
    }
}

/// Settings for a [`crate::Tracker`]. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Whether pitch CV picks notes or drives the oscillator directly.
    pub pitch_mode: PitchMode,

    /// Frequency of the A above middle C, in Hz. Only used in continuous mode.
    pub tuning: f32,

    /// Accent gain at full accent CV.
    pub accent_gain_depth: f32,

    /// Smoothing of the filter controls.
    pub smoothing: SmoothingConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pitch_mode: PitchMode::default(),
            tuning: DEFAULT_TUNING,
            accent_gain_depth: ACCENT_GAIN_DEPTH,
            smoothing: SmoothingConfig::default(),
        }
    }
}
