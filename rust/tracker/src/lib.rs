#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::private_doc_tests,
    rustdoc::unescaped_backticks,
    clippy::pedantic,
    clippy::todo
)]
#![allow(
    clippy::type_complexity,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::default_trait_access
)]
//! Turns a gate/pitch/accent control voltage triplet and MIDI into note events
//! for a single monophonic [`Voice`].
//!
//! The [`Tracker`] runs once per audio sample inside the audio callback. It owns
//! no buffers and never allocates; all of its state is a handful of scalars.
//!
//! CV and MIDI notes share one voice. A gate closing always silences the voice,
//! including any note that arrived over MIDI.

use nt303_component::{events::ChannelFilter, voice::Voice};

pub mod accent;
pub mod config;
pub mod gate;
pub mod midi;
pub mod pitch;
pub mod smoothing;

pub use config::{SmoothingConfig, TrackerConfig};
pub use pitch::PitchMode;
pub use smoothing::FilterControls;

use gate::{Edge, SchmittGate};
use pitch::MIDDLE_C;
use smoothing::Smoother;


/// One sample of the three control voltage inputs.
///
/// `None` means the input isn't patched, which carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CvFrame {
    /// Pitch in volts, 1 V per octave with 0 V at middle C.
    pub pitch: Option<f32>,

    /// Gate in volts.
    pub gate: Option<f32>,

    /// Accent in volts, 0 to 5.
    pub accent: Option<f32>,
}

/// Gate and note state for one voice, plus smoothing of its filter controls.
#[derive(Debug, Clone)]
pub struct Tracker {
    config: TrackerConfig,
    gate: SchmittGate,
    current_note: u8,
    note_active: bool,
    channel: ChannelFilter,
    smoother: Smoother,
}

impl Tracker {
    /// A tracker with the gate low and the filter controls resting at `filter`.
    #[must_use]
    pub fn new(config: TrackerConfig, filter: FilterControls) -> Self {
        let smoother = Smoother::new(&config.smoothing, filter);
        Self {
            config,
            gate: SchmittGate::default(),
            current_note: MIDDLE_C,
            note_active: false,
            channel: ChannelFilter::default(),
            smoother,
        }
    }

    /// The settings this tracker was built with.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Whether the gate is open.
    #[must_use]
    pub fn gate_high(&self) -> bool {
        self.gate.is_high()
    }

    /// The last note sent by the CV path.
    #[must_use]
    pub fn current_note(&self) -> u8 {
        self.current_note
    }

    /// Whether a note started by the gate is still sounding.
    #[must_use]
    pub fn note_active(&self) -> bool {
        self.note_active
    }

    /// The MIDI channels this tracker listens to.
    #[must_use]
    pub fn channel_filter(&self) -> ChannelFilter {
        self.channel
    }

    /// Change the MIDI channels this tracker listens to.
    pub fn set_channel_filter(&mut self, channel: ChannelFilter) {
        if channel != self.channel {
            log::debug!("MIDI channel filter changed to {channel:?}");
        }
        self.channel = channel;
    }

    /// The filter control values currently reaching the voice.
    #[must_use]
    pub fn filter_controls(&self) -> FilterControls {
        self.smoother.current()
    }

    /// Where the smoothed filter controls are heading.
    #[must_use]
    pub fn filter_targets(&self) -> FilterControls {
        self.smoother.target()
    }

    /// Set where the smoothed filter controls are heading.
    ///
    /// Nothing reaches the voice until the next processed frame.
    pub fn set_filter_targets(&mut self, targets: FilterControls) {
        self.smoother.set_target(targets);
    }

    /// Process one sample of control voltages.
    ///
    /// `frame` is the sample's index within the current block.
    pub fn process_frame(&mut self, frame: usize, cv: CvFrame, voice: &mut impl Voice) {
        self.smoother.process(frame, voice);

        let Some(gate) = cv.gate else {
            return;
        };
        let edge = self.gate.process(gate);

        match (edge, self.config.pitch_mode) {
            (Some(Edge::Rising), PitchMode::Quantized) => {
                let note = cv.pitch.map_or(self.current_note, pitch::cv_to_note);
                self.start_note(note, cv.accent, voice);
            }
            (Some(Edge::Rising), PitchMode::Continuous) => {
                self.start_note(MIDDLE_C, cv.accent, voice);
            }
            (None, PitchMode::Quantized) if self.gate.is_high() => {
                if let Some(volts) = cv.pitch {
                    let note = pitch::cv_to_note(volts);
                    if note != self.current_note {
                        // Legato: the voice decides how to glide between the two.
                        self.start_note(note, cv.accent, voice);
                    }
                }
            }
            _ => {}
        }

        if self.gate.is_high() {
            if let (PitchMode::Continuous, Some(volts)) = (self.config.pitch_mode, cv.pitch) {
                voice.set_oscillator_frequency(pitch::cv_to_frequency(volts, self.config.tuning));
            }
            if let Some(volts) = cv.accent {
                voice.set_accent_gain(accent::accent_level(volts) * self.config.accent_gain_depth);
            }
        }

        if edge == Some(Edge::Falling) {
            voice.all_notes_off();
            self.note_active = false;
        }
    }

    /// Handle one MIDI channel message.
    ///
    /// MIDI notes go straight to the voice and don't affect the gate state.
    pub fn midi_message(&mut self, status: u8, data1: u8, data2: u8, voice: &mut impl Voice) {
        midi::dispatch(self.channel, status, data1, data2, voice);
    }

    fn start_note(&mut self, note: u8, accent: Option<f32>, voice: &mut impl Voice) {
        voice.note_on(note, accent::velocity(accent));
        self.current_note = note;
        self.note_active = true;
    }
}
