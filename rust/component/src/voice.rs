//! The interface to the monophonic voice engine.
//!
//! The engine owns the oscillator, filter, envelopes and sample generation.
//! Algorithms only decide _when_ notes start and stop and which values the
//! continuous controls take; how a note sounds, including any slide between
//! overlapping notes, is entirely up to the engine.

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// A single monophonic synthesizer voice.
///
/// All methods are called from the audio callback, so implementations must not
/// allocate or block.
pub trait Voice {
    /// Start a note. A velocity of `0` releases `note` instead.
    ///
    /// Starting a note while another is held is a legato transition.
    fn note_on(&mut self, note: u8, velocity: u8);

    /// Silence the voice regardless of which notes it believes are held.
    fn all_notes_off(&mut self);

    /// Global pitch bend in semitones.
    fn set_pitch_bend(&mut self, semitones: f32);

    /// Override the oscillator frequency of the sounding note.
    fn set_oscillator_frequency(&mut self, hz: f32);

    /// Extra accent gain, 0 for none.
    fn set_accent_gain(&mut self, level: f32);

    /// Filter cutoff in Hz.
    fn set_cutoff(&mut self, hz: f32);

    /// Filter resonance in percent.
    fn set_resonance(&mut self, percent: f32);

    /// Filter envelope modulation depth in percent.
    fn set_env_mod(&mut self, percent: f32);

    /// Filter envelope decay in milliseconds.
    fn set_decay(&mut self, ms: f32);

    /// Accent amount in percent.
    fn set_accent(&mut self, percent: f32);

    /// Oscillator waveform blend, 0 is saw and 1 is square.
    fn set_waveform(&mut self, blend: f32);

    /// Output volume in dB.
    fn set_volume(&mut self, db: f32);

    /// Slide time in milliseconds.
    fn set_slide_time(&mut self, ms: f32);

    /// Oversampling factor, one of 1, 2 or 4.
    fn set_oversampling(&mut self, factor: u32);

    /// The rate [`Voice::sample`] is called at.
    fn set_sample_rate(&mut self, hz: f32);

    /// Render the next sample.
    fn sample(&mut self) -> f32;
}
