//! One-pole smoothing of the filter controls.
//!
//! Cutoff, resonance and decay are zipper-prone, so the values the host sets are
//! only targets. Every sample the smoothed values move a small step towards
//! their targets, and every few samples the smoothed values are pushed into the
//! voice.

use nt303_component::voice::Voice;
use nt303_util::f32::one_pole;

use crate::config::SmoothingConfig;


/// The smoothed filter controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterControls {
    /// Cutoff in Hz.
    pub cutoff: f32,

    /// Resonance in percent.
    pub resonance: f32,

    /// Decay in milliseconds.
    pub decay: f32,
}

impl FilterControls {
    fn step_towards(self, target: Self, coeff: f32) -> Self {
        Self {
            cutoff: one_pole(self.cutoff, target.cutoff, coeff),
            resonance: one_pole(self.resonance, target.resonance, coeff),
            decay: one_pole(self.decay, target.decay, coeff),
        }
    }
}

/// One-pole smoothing of the [`FilterControls`], pushed to the voice at a fixed
/// frame interval.
#[derive(Debug, Clone)]
pub struct Smoother {
    current: FilterControls,
    target: FilterControls,
    coeff: f32,
    interval: usize,
}

impl Smoother {
    /// A smoother resting at `initial`.
    #[must_use]
    pub fn new(config: &SmoothingConfig, initial: FilterControls) -> Self {
        Self {
            current: initial,
            target: initial,
            coeff: if config.coeff.is_nan() {
                SmoothingConfig::default().coeff
            } else {
                config.coeff.clamp(0.0, 1.0)
            },
            interval: config.interval.max(1),
        }
    }

    /// The smoothed values.
    #[must_use]
    pub fn current(&self) -> FilterControls {
        self.current
    }

    /// Where the smoothed values are heading.
    #[must_use]
    pub fn target(&self) -> FilterControls {
        self.target
    }

    /// Change where the smoothed values are heading, without moving them.
    pub fn set_target(&mut self, target: FilterControls) {
        self.target = target;
    }

    /// Advance by one sample. `frame` is the sample's index within the block.
    pub fn process(&mut self, frame: usize, voice: &mut impl Voice) {
        self.current = self.current.step_towards(self.target, self.coeff);
        if frame % self.interval == 0 {
            voice.set_cutoff(self.current.cutoff);
            voice.set_resonance(self.current.resonance);
            voice.set_decay(self.current.decay);
        }
    }
}
