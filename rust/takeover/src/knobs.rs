//! Soft takeover for absolute knobs.

use itertools::izip;
use serde::Deserialize;

use crate::{Change, scaling::Scaling};


/// A knob closer than this to its target takes over the target.
pub const SNAP_DISTANCE: f32 = 0.02;

/// Knobs at either end of their travel always take over, so a parameter can
/// always be driven to its extremes.
pub const SNAP_LOW: f32 = 0.01;

/// See [`SNAP_LOW`].
pub const SNAP_HIGH: f32 = 0.99;

/// Slack on [`SNAP_DISTANCE`] so that a nominal distance of exactly
/// `SNAP_DISTANCE` snaps despite rounding.
const SNAP_TOLERANCE: f32 = 1e-5;

/// Where a target and the knob start before [`SoftTakeover::setup`].
const INITIAL_POSITION: f32 = 0.5;

/// One parameter a knob can drive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Mapping<P> {
    /// The driven parameter.
    pub param: P,

    /// How knob travel maps onto the parameter's values.
    pub scaling: Scaling,
}

/// The two parameters of a knob.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct KnobConfig<P> {
    /// Driven while the knob's push button is released.
    pub normal: Mapping<P>,

    /// Driven while the knob's push button is held.
    pub alt: Mapping<P>,
}

impl<P> KnobConfig<P> {
    fn mapping(&self, alt: bool) -> &Mapping<P> {
        if alt { &self.alt } else { &self.normal }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct KnobState {
    last_position: f32,
    normal_target: f32,
    alt_target: f32,
}

impl Default for KnobState {
    fn default() -> Self {
        Self {
            last_position: INITIAL_POSITION,
            normal_target: INITIAL_POSITION,
            alt_target: INITIAL_POSITION,
        }
    }
}

impl KnobState {
    fn target_mut(&mut self, alt: bool) -> &mut f32 {
        if alt {
            &mut self.alt_target
        } else {
            &mut self.normal_target
        }
    }
}

fn takes_over(position: f32, target: f32) -> bool {
    (position - target).abs() <= SNAP_DISTANCE + SNAP_TOLERANCE
        || position <= SNAP_LOW
        || position >= SNAP_HIGH
}

/// Soft takeover state for `N` knobs.
///
/// Targets are knob positions, 0->1, not parameter values; each knob's
/// [`Mapping`] converts a target to a value.
#[derive(Debug, Clone)]
pub struct SoftTakeover<P, const N: usize> {
    knobs: [KnobConfig<P>; N],
    state: [KnobState; N],
}

impl<P: Copy, const N: usize> SoftTakeover<P, N> {
    /// Knob state starts mid-travel until [`SoftTakeover::setup`] is called.
    #[must_use]
    pub fn new(knobs: [KnobConfig<P>; N]) -> Self {
        Self {
            knobs,
            state: [KnobState::default(); N],
        }
    }

    /// What each knob drives.
    #[must_use]
    pub fn knobs(&self) -> &[KnobConfig<P>; N] {
        &self.knobs
    }

    /// Synchronize with the current parameter values when the control surface
    /// is taken over.
    ///
    /// Returns the position each knob should be considered at, which is the
    /// position of its normal parameter. The alt parameters keep their values
    /// and will be taken over softly.
    pub fn setup(&mut self, value_of: impl Fn(P) -> f32) -> [f32; N] {
        let mut positions = [0.0; N];
        for (knob, state, position) in izip!(&self.knobs, &mut self.state, &mut positions) {
            *position = knob.normal.scaling.to_position(value_of(knob.normal.param));
            *state = KnobState {
                last_position: *position,
                normal_target: *position,
                alt_target: knob.alt.scaling.to_position(value_of(knob.alt.param)),
            };
        }
        positions
    }

    /// Apply a movement of knob `knob` to `position`, with its push button
    /// held if `alt` is set.
    ///
    /// Returns the new value of the driven parameter, or `None` if there's no
    /// such knob or the position isn't a number.
    pub fn turn(&mut self, knob: usize, position: f32, alt: bool) -> Option<Change<P>> {
        if position.is_nan() {
            return None;
        }
        let config = self.knobs.get(knob)?;
        let state = self.state.get_mut(knob)?;
        let position = position.clamp(0.0, 1.0);

        let delta = position - state.last_position;
        let target = state.target_mut(alt);
        *target = (*target + delta).clamp(0.0, 1.0);
        if takes_over(position, *target) {
            *target = position;
        }
        let target = *target;
        state.last_position = position;

        let mapping = config.mapping(alt);
        Some(Change {
            param: mapping.param,
            value: mapping.scaling.to_value(target),
        })
    }

    /// The position the parameter driven by `knob` is at.
    #[must_use]
    pub fn target(&self, knob: usize, alt: bool) -> Option<f32> {
        self.state.get(knob).map(|state| {
            if alt {
                state.alt_target
            } else {
                state.normal_target
            }
        })
    }

    /// The knob's physical position as of its last movement.
    #[must_use]
    pub fn last_position(&self, knob: usize) -> Option<f32> {
        self.state.get(knob).map(|state| state.last_position)
    }
}
