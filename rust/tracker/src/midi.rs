//! Forwarding MIDI channel messages to the voice.

use nt303_component::{
    events::{ALL_NOTES_OFF, ALL_SOUND_OFF, ChannelFilter, Data, PITCH_BEND_CENTRE},
    voice::Voice,
};


/// Pitch bend at either extreme of the wheel, in semitones.
pub const PITCH_BEND_RANGE: f32 = 2.0;

/// Convert a 14-bit pitch bend value to semitones.
#[must_use]
pub fn bend_semitones(value: u16) -> f32 {
    (f32::from(value) - f32::from(PITCH_BEND_CENTRE)) * PITCH_BEND_RANGE
        / f32::from(PITCH_BEND_CENTRE)
}

/// Send one MIDI message to `voice` if `filter` accepts it.
///
/// Messages other than notes, all-notes-off controllers and pitch bend are
/// ignored.
pub fn dispatch(filter: ChannelFilter, status: u8, data1: u8, data2: u8, voice: &mut impl Voice) {
    let Some(data) = Data::from_bytes(status, data1, data2) else {
        return;
    };
    if !filter.accepts(&data) {
        return;
    }
    match data {
        Data::NoteOn { data } => voice.note_on(data.pitch, data.velocity),
        Data::NoteOff { data } => voice.note_on(data.pitch, 0),
        Data::ControlChange {
            controller: ALL_SOUND_OFF | ALL_NOTES_OFF,
            ..
        } => voice.all_notes_off(),
        Data::ControlChange { .. } => {}
        Data::PitchBend { value, .. } => voice.set_pitch_bend(bend_semitones(value)),
    }
}
