//! The entry points a host calls on an algorithm instance.
//!
//! Every entry point runs to completion on the caller's thread, and the host
//! never calls two of them at the same time. [`Algorithm::step`] and
//! [`Algorithm::midi_message`] run in the audio callback and must not allocate
//! or block.

use arrayvec::ArrayVec;

use crate::{
    audio::Busses,
    parameters::{
        InternalValue,
        store::{SetError, Store, Values},
    },
};


/// Number of knobs on the control surface.
pub const NUM_POTS: usize = 3;

/// Number of encoders on the control surface.
pub const NUM_ENCODERS: usize = 2;

bitflags::bitflags! {
    /// Which controls moved or are held during a UI tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Controls: u16 {
        const POT_LEFT = 1 << 0;
        const POT_CENTRE = 1 << 1;
        const POT_RIGHT = 1 << 2;
        const POT_BUTTON_LEFT = 1 << 3;
        const POT_BUTTON_CENTRE = 1 << 4;
        const POT_BUTTON_RIGHT = 1 << 5;
    }
}

impl Controls {
    /// The "knob moved" flag for each knob, left to right.
    pub const POTS: [Controls; NUM_POTS] =
        [Controls::POT_LEFT, Controls::POT_CENTRE, Controls::POT_RIGHT];

    /// The "knob pushed" flag for each knob, left to right.
    pub const POT_BUTTONS: [Controls; NUM_POTS] = [
        Controls::POT_BUTTON_LEFT,
        Controls::POT_BUTTON_CENTRE,
        Controls::POT_BUTTON_RIGHT,
    ];

    /// Whether knob `pot` moved this tick.
    #[must_use]
    pub fn pot_moved(self, pot: usize) -> bool {
        Self::POTS.get(pot).is_some_and(|flag| self.contains(*flag))
    }

    /// Whether the push button of knob `pot` is held.
    #[must_use]
    pub fn pot_pressed(self, pot: usize) -> bool {
        Self::POT_BUTTONS
            .get(pot)
            .is_some_and(|flag| self.contains(*flag))
    }
}

/// A snapshot of the control surface for one UI tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UiData {
    /// Which knobs moved and which buttons are held.
    pub controls: Controls,

    /// Absolute knob positions, 0->1.
    pub pots: [f32; NUM_POTS],

    /// Encoder detents turned since the last tick.
    pub encoders: [i8; NUM_ENCODERS],
}

/// A write into the host's parameter store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterWrite {
    /// Index into the component's parameter table.
    pub index: usize,

    /// The value to store, before clamping.
    pub value: InternalValue,
}

/// At most one write per knob and one per encoder per tick.
pub type UiWrites = ArrayVec<ParameterWrite, { NUM_POTS + NUM_ENCODERS }>;

/// A trait for algorithms hosted in the audio callback.
pub trait Algorithm {
    /// What the display shows this tick.
    type Readout;

    /// The host-visible parameter values.
    fn values(&self) -> &Values;

    fn values_mut(&mut self) -> &mut Values;

    /// Called by the host whenever the stored value of parameter `index` changes.
    fn parameter_changed(&mut self, index: usize);

    /// Process one block of audio.
    ///
    /// `sampling_rate` is the host's current sample rate, which may differ from
    /// the rate at construction.
    fn step(&mut self, busses: &mut Busses<'_>, sampling_rate: f32);

    /// Handle one MIDI channel message.
    fn midi_message(&mut self, status: u8, data1: u8, data2: u8);

    /// Handle one UI tick of the control surface, returning the parameter
    /// writes it caused.
    fn custom_ui(&mut self, data: &UiData) -> UiWrites;

    /// Called when the control surface is taken over by this algorithm.
    ///
    /// Returns the knob positions that reflect the current parameter values.
    fn setup_ui(&mut self) -> [f32; NUM_POTS];

    /// Called once per display tick.
    fn draw(&mut self) -> Self::Readout;

    /// Write a parameter into the store, notifying the algorithm if it changed.
    ///
    /// # Errors
    ///
    /// Forwards any [`SetError`] from the store.
    fn set_parameter(&mut self, index: usize, value: InternalValue) -> Result<(), SetError> {
        if self.values_mut().set(index, value)? {
            self.parameter_changed(index);
        }
        Ok(())
    }

    /// Run [`Algorithm::custom_ui`] and apply its writes the way the host does.
    ///
    /// # Errors
    ///
    /// Forwards any [`SetError`] from the store.
    fn apply_ui(&mut self, data: &UiData) -> Result<(), SetError> {
        for write in self.custom_ui(data) {
            self.set_parameter(write.index, write.value)?;
        }
        Ok(())
    }
}
