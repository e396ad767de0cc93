//! A recording [`Voice`] for tests.

#![allow(missing_docs)]

use super::Voice;

/// A single call made into a [`RecordingVoice`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    NoteOn { note: u8, velocity: u8 },
    AllNotesOff,
    PitchBend(f32),
    OscillatorFrequency(f32),
    AccentGain(f32),
    Cutoff(f32),
    Resonance(f32),
    EnvMod(f32),
    Decay(f32),
    Accent(f32),
    Waveform(f32),
    Volume(f32),
    SlideTime(f32),
    Oversampling(u32),
    SampleRate(f32),
}

impl Call {
    /// Whether this call starts, stops or silences a note.
    #[must_use]
    pub fn is_note_event(&self) -> bool {
        matches!(self, Call::NoteOn { .. } | Call::AllNotesOff)
    }
}

/// A [`Voice`] that produces a constant output and remembers every call made into it.
#[derive(Debug, Clone, Default)]
pub struct RecordingVoice {
    pub calls: Vec<Call>,

    /// The value returned from every call to [`Voice::sample`].
    pub output: f32,
}

impl RecordingVoice {
    #[must_use]
    pub fn with_output(output: f32) -> Self {
        Self {
            calls: Vec::new(),
            output,
        }
    }

    /// All note events, in order.
    #[must_use]
    pub fn note_events(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|call| call.is_note_event())
            .copied()
            .collect()
    }

    /// The last value passed to the setter `select` picks out.
    pub fn last<T>(&self, select: impl Fn(&Call) -> Option<T>) -> Option<T> {
        self.calls.iter().rev().find_map(select)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Voice for RecordingVoice {
    fn note_on(&mut self, note: u8, velocity: u8) {
        self.calls.push(Call::NoteOn { note, velocity });
    }

    fn all_notes_off(&mut self) {
        self.calls.push(Call::AllNotesOff);
    }

    fn set_pitch_bend(&mut self, semitones: f32) {
        self.calls.push(Call::PitchBend(semitones));
    }

    fn set_oscillator_frequency(&mut self, hz: f32) {
        self.calls.push(Call::OscillatorFrequency(hz));
    }

    fn set_accent_gain(&mut self, level: f32) {
        self.calls.push(Call::AccentGain(level));
    }

    fn set_cutoff(&mut self, hz: f32) {
        self.calls.push(Call::Cutoff(hz));
    }

    fn set_resonance(&mut self, percent: f32) {
        self.calls.push(Call::Resonance(percent));
    }

    fn set_env_mod(&mut self, percent: f32) {
        self.calls.push(Call::EnvMod(percent));
    }

    fn set_decay(&mut self, ms: f32) {
        self.calls.push(Call::Decay(ms));
    }

    fn set_accent(&mut self, percent: f32) {
        self.calls.push(Call::Accent(percent));
    }

    fn set_waveform(&mut self, blend: f32) {
        self.calls.push(Call::Waveform(blend));
    }

    fn set_volume(&mut self, db: f32) {
        self.calls.push(Call::Volume(db));
    }

    fn set_slide_time(&mut self, ms: f32) {
        self.calls.push(Call::SlideTime(ms));
    }

    fn set_oversampling(&mut self, factor: u32) {
        self.calls.push(Call::Oversampling(factor));
    }

    fn set_sample_rate(&mut self, hz: f32) {
        self.calls.push(Call::SampleRate(hz));
    }

    fn sample(&mut self) -> f32 {
        self.output
    }
}
