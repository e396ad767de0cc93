use assert_approx_eq::assert_approx_eq;
use nt303_takeover::Scaling;
use nt303_tracker::PitchMode;

use super::{Config, ConfigError};
use crate::parameters::Param;

#[test]
fn empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn default_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn default_ui() {
    let config = Config::default();
    assert_eq!(config.ui.display_timeout_frames, 48_000);
    assert_eq!(config.ui.display_tick_frames, 128);
    assert_eq!(config.ui.knobs[0].normal.param, Param::Cutoff);
    assert_eq!(config.ui.encoders[1].param, Param::Volume);
}

#[test]
fn nested_fields() {
    let config = Config::from_json(
        r#"{
            "tracker": {"pitch_mode": "continuous", "tuning": 432.0},
            "ui": {"display_timeout_frames": 24000}
        }"#,
    )
    .unwrap();
    assert_eq!(config.tracker.pitch_mode, PitchMode::Continuous);
    assert_approx_eq!(config.tracker.tuning, 432.0);
    assert_eq!(config.ui.display_timeout_frames, 24_000);
    assert_eq!(config.ui.display_tick_frames, 128);
}

#[test]
fn remapped_encoder() {
    let config = Config::from_json(
        r#"{"ui": {"encoders": [
            {"param": "slide_time", "step": 10, "min": 1, "max": 200},
            {"param": "volume", "step": 1, "min": -40, "max": 6}
        ]}}"#,
    )
    .unwrap();
    assert_eq!(config.ui.encoders[0].param, Param::SlideTime);
}

#[test]
fn malformed_json() {
    assert!(matches!(
        Config::from_json("{"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn unknown_field() {
    assert!(matches!(
        Config::from_json(r#"{"trakcer": {}}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn enum_parameter_on_control() {
    let result = Config::from_json(
        r#"{"ui": {"encoders": [
            {"param": "oversampling", "step": 1, "min": 0, "max": 2},
            {"param": "volume", "step": 1, "min": -40, "max": 6}
        ]}}"#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::NotNumeric {
            param: Param::Oversampling
        })
    ));
}

#[test]
fn zero_display_tick() {
    assert!(matches!(
        Config::from_json(r#"{"ui": {"display_tick_frames": 0}}"#),
        Err(ConfigError::ZeroDisplayTick)
    ));
}

#[test]
fn inverted_encoder_range() {
    let result = Config::from_json(
        r#"{"ui": {"encoders": [
            {"param": "waveform", "step": 5, "min": 0, "max": 100},
            {"param": "volume", "step": 1, "min": 6, "max": -40}
        ]}}"#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::EmptyEncoderRange {
            param: Param::Volume
        })
    ));
}

#[test]
fn flat_exponential_knob() {
    let mut config = Config::default();
    config.ui.knobs[0].alt.scaling = Scaling::Exponential {
        min: 20.0,
        base: 1.0,
    };
    let param = config.ui.knobs[0].alt.param;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BadScaling { param: bad }) if bad == param
    ));
}

#[test]
fn exponential_knob_from_zero() {
    let result = Config::from_json(
        r#"{"ui": {"knobs": [
            {"normal": {"param": "cutoff", "scaling": {"kind": "exponential", "min": 0, "base": 1000}},
             "alt": {"param": "env_mod", "scaling": {"kind": "linear", "min": 0, "max": 100}}},
            {"normal": {"param": "resonance", "scaling": {"kind": "linear", "min": 0, "max": 100}},
             "alt": {"param": "accent", "scaling": {"kind": "linear", "min": 0, "max": 100}}},
            {"normal": {"param": "decay", "scaling": {"kind": "linear", "min": 30, "max": 3000}},
             "alt": {"param": "slide_time", "scaling": {"kind": "linear", "min": 1, "max": 200}}}
        ]}}"#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::BadScaling {
            param: Param::Cutoff
        })
    ));
}
