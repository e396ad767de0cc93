//! Whole-instance scenarios driven the way a host drives them.

use assert_approx_eq::assert_approx_eq;
use more_asserts::assert_gt;
use nt303::{Component, Config, Instances, Param, Readout};
use nt303_component::{
    Component as _, ProcessingEnvironment,
    algorithm::{Algorithm, Controls, UiData},
    audio::{Busses, NUM_BUSSES},
    parameters::InternalValue,
    voice::test_utils::{Call, RecordingVoice},
};

const FRAMES: usize = 32;
const RATE: f32 = 48_000.0;

const GATE: usize = 1;
const PITCH: usize = 2;
const ACCENT: usize = 3;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Rig {
    algorithm: nt303::Nt303<RecordingVoice>,
    memory: Vec<f32>,
}

impl Rig {
    fn new(config: Config) -> Self {
        init_logging();
        let mut algorithm = Component::<RecordingVoice>::new(config).construct(
            &ProcessingEnvironment {
                sampling_rate: RATE,
            },
        );
        for (param, bus) in [(Param::Gate, GATE), (Param::PitchCv, PITCH), (Param::AccentCv, ACCENT)]
        {
            #[allow(clippy::cast_precision_loss)]
            let bus = bus as f32;
            algorithm
                .set_parameter(param.index(), InternalValue::Numeric(bus))
                .unwrap();
        }
        Self {
            algorithm,
            memory: vec![0.0; NUM_BUSSES * FRAMES],
        }
    }

    fn fill(&mut self, bus: usize, volts: f32) {
        self.memory[(bus - 1) * FRAMES..bus * FRAMES].fill(volts);
    }

    /// Run one block with the CV inputs held constant.
    fn block(&mut self, gate: f32, pitch: f32, accent: f32) {
        self.memory.fill(0.0);
        self.fill(GATE, gate);
        self.fill(PITCH, pitch);
        self.fill(ACCENT, accent);
        let mut busses = Busses::new(&mut self.memory, FRAMES).unwrap();
        self.algorithm.step(&mut busses, RATE);
    }

    fn notes(&self) -> Vec<Call> {
        self.algorithm.voice().note_events()
    }
}

#[test]
fn bassline() {
    let mut rig = Rig::new(Config::default());
    rig.block(0.0, 0.0, 0.0);
    rig.block(5.0, 0.0, 0.0);
    rig.block(5.0, 0.25, 0.0);
    rig.block(0.0, 0.25, 0.0);
    rig.block(5.0, -1.0, 5.0);
    rig.block(0.0, -1.0, 5.0);
    assert_eq!(
        rig.notes(),
        vec![
            Call::NoteOn {
                note: 60,
                velocity: 80
            },
            Call::NoteOn {
                note: 63,
                velocity: 80
            },
            Call::AllNotesOff,
            Call::NoteOn {
                note: 48,
                velocity: 127
            },
            Call::AllNotesOff,
        ]
    );
}

#[test]
fn continuous_pitch_mode_from_json() {
    let config = Config::from_json(r#"{"tracker": {"pitch_mode": "continuous"}}"#).unwrap();
    let mut rig = Rig::new(config);
    rig.block(5.0, 0.75, 0.0);
    rig.block(5.0, 1.75, 0.0);
    assert_eq!(
        rig.notes(),
        vec![Call::NoteOn {
            note: 60,
            velocity: 80
        }]
    );
    let last = rig
        .algorithm
        .voice()
        .last(|call| match call {
            Call::OscillatorFrequency(hz) => Some(*hz),
            _ => None,
        })
        .unwrap();
    assert_approx_eq!(last, 880.0, 1e-2);
}

#[test]
fn cv_gate_silences_midi_note() {
    let mut rig = Rig::new(Config::default());
    rig.block(5.0, 0.0, 0.0);
    rig.algorithm.midi_message(0x90, 40, 100);
    rig.block(0.0, 0.0, 0.0);
    assert_eq!(rig.notes().last(), Some(&Call::AllNotesOff));
    assert!(!rig.algorithm.tracker().note_active());
}

#[test]
fn audio_reaches_output() {
    let mut rig = Rig::new(Config::default());
    rig.algorithm.voice_mut().output = 0.5;
    rig.block(0.0, 0.0, 0.0);
    let output = &rig.memory[12 * FRAMES..13 * FRAMES];
    assert!(output.iter().all(|sample| (sample - 2.5).abs() < 1e-6));
}

#[test]
fn control_surface_session() {
    let mut rig = Rig::new(Config::default());
    let positions = rig.algorithm.setup_ui();

    // Sweep the cutoff knob up from where it was taken over.
    let mut position = positions[0];
    for _ in 0..10 {
        position += 0.02;
        rig.algorithm
            .apply_ui(&UiData {
                controls: Controls::POT_LEFT,
                pots: [position, positions[1], positions[2]],
                encoders: [0, 0],
            })
            .unwrap();
    }
    let cutoff = rig
        .algorithm
        .values()
        .numeric(Param::Cutoff.index())
        .unwrap();
    assert_gt!(cutoff, 1000.0);

    let Readout::Active(field) = rig.algorithm.draw() else {
        panic!("expected the changed parameter on the display");
    };
    assert_eq!(field.label, "Cutoff");
    #[allow(clippy::cast_possible_truncation)]
    let shown = cutoff as i32;
    assert_eq!(field.value, shown);

    // The smoothed cutoff heads for the new value over the following blocks.
    for _ in 0..500 {
        rig.block(0.0, 0.0, 0.0);
    }
    let smoothed = rig.algorithm.tracker().filter_controls().cutoff;
    assert_gt!(smoothed, 1000.0);
    assert_approx_eq!(smoothed, cutoff, 1.0);
}

#[test]
fn factory_round_trip() {
    init_logging();
    let mut instances: Instances<Component<RecordingVoice>, 1> =
        Instances::new(Component::default());
    let environment = ProcessingEnvironment {
        sampling_rate: RATE,
    };
    let handle = instances.construct(&environment);
    assert!(instances.try_construct(&environment).is_err());
    assert!(instances.destroy(handle).is_some());
    assert!(instances.try_construct(&environment).is_ok());
}
