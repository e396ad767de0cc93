//! What the knobs and encoders control unless configured otherwise.

use nt303_component::algorithm::{NUM_ENCODERS, NUM_POTS};
use nt303_takeover::{EncoderConfig, KnobConfig, Mapping, Scaling};

use crate::parameters::Param;

#[cfg(test)]
mod tests;

const fn percent(param: Param) -> Mapping<Param> {
    Mapping {
        param,
        scaling: Scaling::Linear {
            min: 0.0,
            max: 100.0,
        },
    }
}

/// Left: cutoff, or env mod with the button held. Centre: resonance, or
/// accent. Right: decay, or slide time.
#[must_use]
pub fn default_knobs() -> [KnobConfig<Param>; NUM_POTS] {
    [
        KnobConfig {
            normal: Mapping {
                param: Param::Cutoff,
                scaling: Scaling::Exponential {
                    min: 20.0,
                    base: 1000.0,
                },
            },
            alt: percent(Param::EnvMod),
        },
        KnobConfig {
            normal: percent(Param::Resonance),
            alt: percent(Param::Accent),
        },
        KnobConfig {
            normal: Mapping {
                param: Param::Decay,
                scaling: Scaling::Linear {
                    min: 30.0,
                    max: 3000.0,
                },
            },
            alt: Mapping {
                param: Param::SlideTime,
                scaling: Scaling::Linear {
                    min: 1.0,
                    max: 200.0,
                },
            },
        },
    ]
}

/// Left: waveform in steps of 5%. Right: volume in steps of 1 dB.
#[must_use]
pub fn default_encoders() -> [EncoderConfig<Param>; NUM_ENCODERS] {
    [
        EncoderConfig {
            param: Param::Waveform,
            step: 5.0,
            min: 0.0,
            max: 100.0,
        },
        EncoderConfig {
            param: Param::Volume,
            step: 1.0,
            min: -40.0,
            max: 6.0,
        },
    ]
}
