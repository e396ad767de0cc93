//! Accent control voltage handling.

use nt303_util::f32::rescale_clamped;


/// Accent CV above this is an accented note. Also the CV at which accent gain starts.
pub const ACCENT_THRESHOLD: f32 = 2.5;

/// Accent CV at which accent gain is at its maximum.
pub const ACCENT_FULL: f32 = 5.0;

/// Velocity of an accented note.
pub const ACCENTED_VELOCITY: u8 = 127;

/// Velocity of every other note, including notes with no accent CV patched.
pub const NORMAL_VELOCITY: u8 = 80;

/// Accent gain at full accent CV, unless configured otherwise.
pub const ACCENT_GAIN_DEPTH: f32 = 0.5;

/// Note-on velocity for the accent CV at the time of the note.
///
/// An unpatched accent input never accents.
#[must_use]
pub fn velocity(accent: Option<f32>) -> u8 {
    match accent {
        Some(volts) if volts > ACCENT_THRESHOLD => ACCENTED_VELOCITY,
        _ => NORMAL_VELOCITY,
    }
}

/// Accent level, 0->1, from the accent CV.
#[must_use]
pub fn accent_level(volts: f32) -> f32 {
    if volts.is_nan() {
        return 0.0;
    }
    rescale_clamped(volts, ACCENT_THRESHOLD..=ACCENT_FULL, 0.0..=1.0)
}
