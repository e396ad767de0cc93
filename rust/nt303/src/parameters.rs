//! The parameter table, and the pages that group it in the host's menus.

use nt303_component::parameters::{Page, StaticInfoRef, TypeSpecificInfoRef};
use serde::Deserialize;


/// Every parameter, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    /// Output bus, 1-based.
    Output,
    /// Add to or replace the output bus.
    OutputMode,
    /// Filter cutoff in Hz.
    Cutoff,
    /// Filter resonance in percent.
    Resonance,
    /// Filter envelope depth in percent.
    EnvMod,
    /// Filter envelope decay in milliseconds.
    Decay,
    /// Accent depth in percent.
    Accent,
    /// Saw to square blend in percent.
    Waveform,
    /// Output level in dB.
    Volume,
    /// Slide time in milliseconds.
    SlideTime,
    /// 1x, 2x or 4x oversampling.
    Oversampling,
    /// MIDI channel, or 0 for any channel.
    MidiChannel,
    /// Pitch CV input bus, or 0 when unpatched.
    PitchCv,
    /// Gate input bus, or 0 when unpatched.
    Gate,
    /// Accent CV input bus, or 0 when unpatched.
    AccentCv,
}

/// Number of entries in [`PARAMETERS`].
pub const NUM_PARAMETERS: usize = 15;

impl Param {
    /// Every parameter, in table order.
    pub const ALL: [Param; NUM_PARAMETERS] = [
        Param::Output,
        Param::OutputMode,
        Param::Cutoff,
        Param::Resonance,
        Param::EnvMod,
        Param::Decay,
        Param::Accent,
        Param::Waveform,
        Param::Volume,
        Param::SlideTime,
        Param::Oversampling,
        Param::MidiChannel,
        Param::PitchCv,
        Param::Gate,
        Param::AccentCv,
    ];

    /// Index into [`PARAMETERS`] and the parameter store.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The parameter at `index` in [`PARAMETERS`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// This parameter's entry in [`PARAMETERS`].
    #[must_use]
    pub fn info(self) -> &'static StaticInfoRef {
        &PARAMETERS[self.index()]
    }

    /// Whether this parameter holds a number rather than an enum index.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self.info().type_specific, TypeSpecificInfoRef::Numeric { .. })
    }
}

const fn percentage(default: f32) -> TypeSpecificInfoRef<'static, &'static str> {
    TypeSpecificInfoRef::Numeric {
        default,
        valid_range: 0.0..=100.0,
        units: Some("%"),
    }
}

/// A CV input, where `0` means not patched.
const fn cv_input() -> TypeSpecificInfoRef<'static, &'static str> {
    TypeSpecificInfoRef::Numeric {
        default: 0.0,
        valid_range: 0.0..=28.0,
        units: None,
    }
}

/// Oversampling factor of each value of the oversampling parameter.
pub const OVERSAMPLING_FACTORS: [u32; 3] = [1, 2, 4];

/// Every parameter the host stores for an instance.
pub static PARAMETERS: [StaticInfoRef; NUM_PARAMETERS] = [
    StaticInfoRef {
        title: "Output",
        short_title: "OUT",
        unique_id: "output",
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 13.0,
            valid_range: 1.0..=28.0,
            units: None,
        },
    },
    StaticInfoRef {
        title: "Output mode",
        short_title: "MODE",
        unique_id: "output_mode",
        type_specific: TypeSpecificInfoRef::Enum {
            default: 0,
            values: &["Add", "Replace"],
        },
    },
    StaticInfoRef {
        title: "Cutoff",
        short_title: "CUT",
        unique_id: "cutoff",
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 1000.0,
            valid_range: 20.0..=20000.0,
            units: Some("Hz"),
        },
    },
    StaticInfoRef {
        title: "Resonance",
        short_title: "RES",
        unique_id: "resonance",
        type_specific: percentage(50.0),
    },
    StaticInfoRef {
        title: "Env Mod",
        short_title: "ENV",
        unique_id: "env_mod",
        type_specific: percentage(25.0),
    },
    StaticInfoRef {
        title: "Decay",
        short_title: "DEC",
        unique_id: "decay",
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 300.0,
            valid_range: 30.0..=3000.0,
            units: Some("ms"),
        },
    },
    StaticInfoRef {
        title: "Accent",
        short_title: "ACC",
        unique_id: "accent",
        type_specific: percentage(50.0),
    },
    StaticInfoRef {
        title: "Waveform",
        short_title: "WAVE",
        unique_id: "waveform",
        type_specific: percentage(0.0),
    },
    StaticInfoRef {
        title: "Volume",
        short_title: "VOL",
        unique_id: "volume",
        type_specific: TypeSpecificInfoRef::Numeric {
            default: -12.0,
            valid_range: -40.0..=6.0,
            units: Some("dB"),
        },
    },
    StaticInfoRef {
        title: "Slide Time",
        short_title: "SLIDE",
        unique_id: "slide_time",
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 60.0,
            valid_range: 1.0..=200.0,
            units: Some("ms"),
        },
    },
    StaticInfoRef {
        title: "Oversample",
        short_title: "OS",
        unique_id: "oversampling",
        type_specific: TypeSpecificInfoRef::Enum {
            default: 1,
            values: &["1x", "2x", "4x"],
        },
    },
    StaticInfoRef {
        title: "MIDI Ch",
        short_title: "CH",
        unique_id: "midi_channel",
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 0.0,
            valid_range: 0.0..=16.0,
            units: None,
        },
    },
    StaticInfoRef {
        title: "Pitch CV",
        short_title: "PITCH",
        unique_id: "pitch_cv",
        type_specific: cv_input(),
    },
    StaticInfoRef {
        title: "Gate",
        short_title: "GATE",
        unique_id: "gate",
        type_specific: cv_input(),
    },
    StaticInfoRef {
        title: "Accent CV",
        short_title: "ACCCV",
        unique_id: "accent_cv",
        type_specific: cv_input(),
    },
];

/// The Sound and Routing menu pages.
pub static PAGES: [Page; 2] = [
    Page {
        name: "Sound",
        params: &[
            Param::Cutoff as usize,
            Param::Resonance as usize,
            Param::EnvMod as usize,
            Param::Decay as usize,
            Param::Accent as usize,
            Param::Waveform as usize,
            Param::Volume as usize,
            Param::SlideTime as usize,
            Param::Oversampling as usize,
        ],
    },
    Page {
        name: "Routing",
        params: &[
            Param::Output as usize,
            Param::OutputMode as usize,
            Param::MidiChannel as usize,
            Param::PitchCv as usize,
            Param::Gate as usize,
            Param::AccentCv as usize,
        ],
    },
];
