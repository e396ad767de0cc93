//! Runtime configuration.
//!
//! Everything has a default, so an empty JSON object is a complete
//! configuration.

use nt303_component::algorithm::{NUM_ENCODERS, NUM_POTS};
use nt303_takeover::{
    EncoderConfig, KnobConfig,
    display::{DISPLAY_TICK_FRAMES, DISPLAY_TIMEOUT_FRAMES},
};
use nt303_tracker::TrackerConfig;
use serde::Deserialize;

use crate::{
    layout::{default_encoders, default_knobs},
    parameters::Param,
};

#[cfg(test)]
mod tests;

/// Why a configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON was malformed or had unknown fields.
    #[error("couldn't parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A knob or encoder drives an enum parameter.
    #[error("{param:?} isn't numeric, so it can't be driven by a control")]
    NotNumeric {
        /// The enum parameter.
        param: Param,
    },

    /// `display_tick_frames` was 0.
    #[error("the display tick must be at least one frame")]
    ZeroDisplayTick,

    /// An encoder's `min` exceeds its `max`.
    #[error("the encoder for {param:?} has an empty range")]
    EmptyEncoderRange {
        /// The encoder's parameter.
        param: Param,
    },

    /// A knob's scaling can't map positions onto values and back.
    #[error("the knob scaling for {param:?} has no usable curve")]
    BadScaling {
        /// The knob mapping's parameter.
        param: Param,
    },
}

/// The control surface and display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// How long a changed parameter stays on the display.
    pub display_timeout_frames: u32,

    /// Audio frames between display ticks.
    pub display_tick_frames: u32,

    /// What each knob drives, left to right.
    pub knobs: [KnobConfig<Param>; NUM_POTS],

    /// What each encoder drives, left to right.
    pub encoders: [EncoderConfig<Param>; NUM_ENCODERS],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            display_timeout_frames: DISPLAY_TIMEOUT_FRAMES,
            display_tick_frames: DISPLAY_TICK_FRAMES,
            knobs: default_knobs(),
            encoders: default_encoders(),
        }
    }
}

/// Everything an instance is configured with.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Note tracking and smoothing.
    pub tracker: TrackerConfig,

    /// The control surface and display.
    pub ui: UiConfig,
}

impl Config {
    /// Parse and validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, or
    /// any error from [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "loaded configuration, pitch mode {:?}",
            config.tracker.pitch_mode
        );
        Ok(config)
    }

    /// # Errors
    ///
    /// - [`ConfigError::NotNumeric`] if a knob or encoder drives an enum parameter.
    /// - [`ConfigError::ZeroDisplayTick`] if the display tick is empty.
    /// - [`ConfigError::EmptyEncoderRange`] if an encoder's `min` exceeds its `max`.
    /// - [`ConfigError::BadScaling`] if a knob's exponential curve has a `min` at or
    ///   below 0 or a `base` at or below 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let controlled = self
            .ui
            .knobs
            .iter()
            .flat_map(|knob| [knob.normal.param, knob.alt.param])
            .chain(self.ui.encoders.iter().map(|encoder| encoder.param));
        for param in controlled {
            if !param.is_numeric() {
                return Err(ConfigError::NotNumeric { param });
            }
        }
        if let Some(mapping) = self
            .ui
            .knobs
            .iter()
            .flat_map(|knob| [knob.normal, knob.alt])
            .find(|mapping| !mapping.scaling.is_well_formed())
        {
            return Err(ConfigError::BadScaling {
                param: mapping.param,
            });
        }
        if self.ui.display_tick_frames == 0 {
            return Err(ConfigError::ZeroDisplayTick);
        }
        if let Some(encoder) = self.ui.encoders.iter().find(|encoder| {
            encoder.min.is_nan() || encoder.max.is_nan() || encoder.min > encoder.max
        }) {
            return Err(ConfigError::EmptyEncoderRange {
                param: encoder.param,
            });
        }
        Ok(())
    }
}
