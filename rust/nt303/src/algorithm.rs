//! The NT-303 algorithm: CV and MIDI in, one voice and one output bus out.

use nt303_component::{
    ProcessingEnvironment,
    algorithm::{Algorithm, NUM_ENCODERS, NUM_POTS, ParameterWrite, UiData, UiWrites},
    audio::{BusIndex, Busses, OutputMode},
    events::ChannelFilter,
    parameters::{InternalValue, TypeSpecificInfoRef, store::Values},
    voice::Voice,
};
use nt303_takeover::{Change, DisplayFocus, EncoderConfig, SoftTakeover};
use nt303_tracker::{CvFrame, FilterControls, Tracker};

use crate::{
    config::Config,
    parameters::{OVERSAMPLING_FACTORS, PARAMETERS, Param},
    readout::{Field, Readout},
};


/// The voice produces ±1, busses carry ±5 V.
const OUTPUT_GAIN: f32 = 5.0;

const TITLE: &str = "NT-303";

/// Shown on the display when nothing is being changed.
const OVERVIEW: [Param; 3] = [Param::Cutoff, Param::Resonance, Param::Decay];

fn numeric(values: &Values, param: Param) -> f32 {
    values.numeric(param.index()).unwrap_or_default()
}

fn enum_index(values: &Values, param: Param) -> usize {
    values
        .enum_index(param.index())
        .map_or(0, |index| index as usize)
}

#[allow(clippy::cast_possible_truncation)]
fn whole(value: f32) -> i32 {
    value as i32
}

fn units(param: Param) -> Option<&'static str> {
    match &param.info().type_specific {
        TypeSpecificInfoRef::Numeric { units, .. } => *units,
        TypeSpecificInfoRef::Enum { .. } => None,
    }
}

fn overview_field(values: &Values, param: Param) -> Field {
    Field {
        label: param.info().short_title,
        value: whole(numeric(values, param)),
        units: units(param),
    }
}

/// A bus parameter's bus, or `None` if it's set to `0`.
fn bus(values: &Values, param: Param) -> Option<BusIndex> {
    let number = numeric(values, param).round();
    if number < 1.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let number = number as usize;
    BusIndex::new(number)
}

fn filter_controls(values: &Values) -> FilterControls {
    FilterControls {
        cutoff: numeric(values, Param::Cutoff),
        resonance: numeric(values, Param::Resonance),
        decay: numeric(values, Param::Decay),
    }
}

/// A TB-303 style bass voice driven by CV, MIDI and the control surface.
#[derive(Debug)]
pub struct Nt303<V> {
    values: Values,
    voice: V,
    tracker: Tracker,
    takeover: SoftTakeover<Param, NUM_POTS>,
    encoders: [EncoderConfig<Param>; NUM_ENCODERS],
    display: DisplayFocus<Param>,
    sampling_rate: f32,
}

impl<V: Voice> Nt303<V> {
    /// Set up `voice` with every parameter at its default.
    #[must_use]
    pub fn new(config: &Config, environment: &ProcessingEnvironment, mut voice: V) -> Self {
        let values = Values::new(&PARAMETERS);
        voice.set_sample_rate(environment.sampling_rate);
        let tracker = Tracker::new(config.tracker.clone(), filter_controls(&values));
        let mut this = Self {
            values,
            voice,
            tracker,
            takeover: SoftTakeover::new(config.ui.knobs),
            encoders: config.ui.encoders,
            display: DisplayFocus::new(
                config.ui.display_timeout_frames,
                config.ui.display_tick_frames,
            ),
            sampling_rate: environment.sampling_rate,
        };
        let FilterControls {
            cutoff,
            resonance,
            decay,
        } = this.tracker.filter_controls();
        this.voice.set_cutoff(cutoff);
        this.voice.set_resonance(resonance);
        this.voice.set_decay(decay);
        for param in Param::ALL {
            this.forward(param);
        }
        log::info!(
            "constructed at {} Hz, pitch mode {:?}",
            environment.sampling_rate,
            config.tracker.pitch_mode
        );
        this
    }

    /// The voice engine this instance plays.
    #[must_use]
    pub fn voice(&self) -> &V {
        &self.voice
    }

    /// Mutable access to the voice engine.
    pub fn voice_mut(&mut self) -> &mut V {
        &mut self.voice
    }

    /// The gate, note and smoothing state.
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    fn output_mode(&self) -> OutputMode {
        match enum_index(&self.values, Param::OutputMode) {
            0 => OutputMode::Add,
            _ => OutputMode::Replace,
        }
    }

    /// Push the stored value of `param` wherever it goes.
    fn forward(&mut self, param: Param) {
        let value = numeric(&self.values, param);
        match param {
            Param::Cutoff | Param::Resonance | Param::Decay => {
                self.tracker.set_filter_targets(filter_controls(&self.values));
            }
            Param::EnvMod => self.voice.set_env_mod(value),
            Param::Accent => self.voice.set_accent(value),
            Param::Waveform => self.voice.set_waveform(value / 100.0),
            Param::Volume => self.voice.set_volume(value),
            Param::SlideTime => self.voice.set_slide_time(value),
            Param::Oversampling => {
                let index = enum_index(&self.values, param).min(OVERSAMPLING_FACTORS.len() - 1);
                self.voice.set_oversampling(OVERSAMPLING_FACTORS[index]);
            }
            Param::MidiChannel => {
                #[allow(clippy::cast_possible_truncation)]
                let channel = value.round().clamp(0.0, 16.0) as u8;
                self.tracker
                    .set_channel_filter(ChannelFilter::from_parameter(channel));
            }
            // Routing is read at the start of every block.
            Param::Output | Param::OutputMode | Param::PitchCv | Param::Gate | Param::AccentCv => {}
        }
    }

    fn commit(&mut self, change: Change<Param>, writes: &mut UiWrites) {
        self.display.activate(change);
        writes.push(ParameterWrite {
            index: change.param.index(),
            value: InternalValue::Numeric(change.value),
        });
    }
}

impl<V: Voice> Algorithm for Nt303<V> {
    type Readout = Readout;

    fn values(&self) -> &Values {
        &self.values
    }

    fn values_mut(&mut self) -> &mut Values {
        &mut self.values
    }

    fn parameter_changed(&mut self, index: usize) {
        if let Some(param) = Param::from_index(index) {
            self.forward(param);
        }
    }

    #[allow(clippy::float_cmp)]
    fn step(&mut self, busses: &mut Busses<'_>, sampling_rate: f32) {
        if sampling_rate != self.sampling_rate {
            log::info!("sample rate changed to {sampling_rate} Hz");
            self.voice.set_sample_rate(sampling_rate);
            self.sampling_rate = sampling_rate;
        }

        let pitch = busses.present(bus(&self.values, Param::PitchCv));
        let gate = busses.present(bus(&self.values, Param::Gate));
        let accent = busses.present(bus(&self.values, Param::AccentCv));
        let output = busses.present(bus(&self.values, Param::Output));
        let mode = self.output_mode();

        for frame in 0..busses.num_frames() {
            let cv = CvFrame {
                pitch: pitch.map(|input| busses.sample(input, frame)),
                gate: gate.map(|input| busses.sample(input, frame)),
                accent: accent.map(|input| busses.sample(input, frame)),
            };
            self.tracker.process_frame(frame, cv, &mut self.voice);
            let sample = self.voice.sample() * OUTPUT_GAIN;
            if let Some(output) = output {
                busses.write(output, frame, sample, mode);
            }
        }
    }

    fn midi_message(&mut self, status: u8, data1: u8, data2: u8) {
        self.tracker
            .midi_message(status, data1, data2, &mut self.voice);
    }

    fn custom_ui(&mut self, data: &UiData) -> UiWrites {
        let mut writes = UiWrites::new();
        for (knob, position) in data.pots.into_iter().enumerate() {
            if !data.controls.pot_moved(knob) {
                continue;
            }
            let alt = data.controls.pot_pressed(knob);
            if let Some(change) = self.takeover.turn(knob, position, alt) {
                self.commit(change, &mut writes);
            }
        }
        for (encoder, detents) in self.encoders.into_iter().zip(data.encoders) {
            let current = numeric(&self.values, encoder.param);
            if let Some(change) = encoder.turn(current, detents) {
                self.commit(change, &mut writes);
            }
        }
        writes
    }

    fn setup_ui(&mut self) -> [f32; NUM_POTS] {
        let values = &self.values;
        let positions = self.takeover.setup(|param| numeric(values, param));
        log::debug!("control surface positions {positions:?}");
        positions
    }

    fn draw(&mut self) -> Readout {
        self.display.tick();
        match self.display.active() {
            Some((param, value)) => Readout::Active(Field {
                label: param.info().title,
                value,
                units: units(param),
            }),
            None => Readout::Overview {
                title: TITLE,
                fields: OVERVIEW.map(|param| overview_field(&self.values, param)),
            },
        }
    }
}
