//! Mapping pitch control voltages to notes and frequencies at 1 V/octave.


/// The note a pitch CV of 0 V plays.
pub const MIDDLE_C: u8 = 60;

/// The highest MIDI note.
pub const MAX_NOTE: u8 = 127;

/// The pitch of the standard tuning reference (A above middle C).
pub const DEFAULT_TUNING: f32 = 440.0;

/// Semitones from middle C up to the tuning reference.
const TUNING_REFERENCE_OFFSET: f32 = 9.0;

/// The nearest note to `volts`, clamped to the MIDI range.
#[must_use]
pub fn cv_to_note(volts: f32) -> u8 {
    let note = (f32::from(MIDDLE_C) + volts * 12.0).round();
    if note.is_nan() {
        return MIDDLE_C;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let note = note.clamp(0.0, f32::from(MAX_NOTE)) as u8;
    note
}

/// The unquantized oscillator frequency for `volts`, with 0 V at middle C.
///
/// `tuning` is the frequency of the A above middle C.
#[must_use]
pub fn cv_to_frequency(volts: f32, tuning: f32) -> f32 {
    tuning * ((volts * 12.0 - TUNING_REFERENCE_OFFSET) / 12.0).exp2()
}

/// How the pitch CV reaches the voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchMode {
    /// Pitch is rounded to the nearest semitone and sent as note numbers, so a
    /// changing pitch under a held gate retriggers the note legato.
    #[default]
    Quantized,

    /// Notes always start at middle C and the oscillator frequency follows the
    /// pitch CV continuously while the gate is high.
    Continuous,
}
