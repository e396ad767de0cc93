//! Channel messages arriving from MIDI.
//!
//! Only status-byte dispatch is done here: we recognize the handful of
//! messages a monophonic bass voice cares about and ignore the rest.


/// Controller number for "All Sound Off".
pub const ALL_SOUND_OFF: u8 = 120;

/// Controller number for "All Notes Off".
pub const ALL_NOTES_OFF: u8 = 123;

/// Centre value of the 14-bit pitch bend range.
pub const PITCH_BEND_CENTRE: u16 = 8192;

/// The payload of a note on or note off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteData {
    /// 0-based MIDI channel.
    pub channel: u8,

    /// MIDI note number.
    pub pitch: u8,

    /// 0->127 velocity of the note on or off
    pub velocity: u8,
}

/// A decoded channel message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Data {
    /// A note started.
    NoteOn {
        /// The note that started.
        data: NoteData,
    },

    /// A note was released.
    NoteOff {
        /// The note that was released.
        data: NoteData,
    },

    /// A controller moved.
    ControlChange {
        /// 0-based MIDI channel.
        channel: u8,

        /// Controller number.
        controller: u8,

        /// 0->127 controller value.
        value: u8,
    },

    /// The pitch wheel moved.
    PitchBend {
        /// 0-based MIDI channel.
        channel: u8,

        /// The raw 14-bit bend, centred on [`PITCH_BEND_CENTRE`].
        value: u16,
    },
}

impl Data {
    /// Decode a three byte channel message.
    ///
    /// Data bytes are masked to 7 bits rather than rejected. Returns `None` for
    /// messages that aren't one of the types in [`Data`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use nt303_component::events::{Data, NoteData};
    /// assert_eq!(
    ///     Data::from_bytes(0x91, 60, 100),
    ///     Some(Data::NoteOn { data: NoteData { channel: 1, pitch: 60, velocity: 100 } })
    /// );
    /// assert_eq!(Data::from_bytes(0xF8, 0, 0), None);
    /// ```
    #[must_use]
    pub fn from_bytes(status: u8, data1: u8, data2: u8) -> Option<Self> {
        let channel = status & 0x0f;
        let data1 = data1 & 0x7f;
        let data2 = data2 & 0x7f;
        match status & 0xf0 {
            0x90 => Some(Data::NoteOn {
                data: NoteData {
                    channel,
                    pitch: data1,
                    velocity: data2,
                },
            }),
            0x80 => Some(Data::NoteOff {
                data: NoteData {
                    channel,
                    pitch: data1,
                    velocity: data2,
                },
            }),
            0xB0 => Some(Data::ControlChange {
                channel,
                controller: data1,
                value: data2,
            }),
            0xE0 => Some(Data::PitchBend {
                channel,
                value: (u16::from(data2) << 7) | u16::from(data1),
            }),
            _ => None,
        }
    }

    /// The 0-based channel this message was sent on.
    #[must_use]
    pub fn channel(&self) -> u8 {
        match self {
            Data::NoteOn { data } | Data::NoteOff { data } => data.channel,
            Data::ControlChange { channel, .. } | Data::PitchBend { channel, .. } => *channel,
        }
    }
}

/// Which MIDI channels an algorithm listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    /// Respond to every channel.
    #[default]
    Omni,

    /// Respond only to this 0-based channel.
    Channel(u8),
}

impl ChannelFilter {
    /// Build a filter from the host's channel parameter, where `0` means
    /// "any channel" and `1..=16` select a channel. Larger values clamp to 16.
    #[must_use]
    pub fn from_parameter(value: u8) -> Self {
        match value {
            0 => ChannelFilter::Omni,
            v => ChannelFilter::Channel(v.min(16) - 1),
        }
    }

    /// Whether `data` arrived on a channel this filter listens to.
    #[must_use]
    pub fn accepts(self, data: &Data) -> bool {
        match self {
            ChannelFilter::Omni => true,
            ChannelFilter::Channel(channel) => data.channel() == channel,
        }
    }
}
