//! Curves from knob position to parameter value.

use serde::Deserialize;

use nt303_util::f32::{exp_scale, exp_unscale, lerp, rescale};


/// How a 0->1 knob position maps onto a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaling {
    /// `min` at position 0, `max` at position 1.
    Linear {
        /// Value at position 0.
        min: f32,
        /// Value at position 1.
        max: f32,
    },

    /// `min * base^position`.
    Exponential {
        /// Value at position 0.
        min: f32,
        /// Ratio of the value at position 1 to the value at position 0.
        base: f32,
    },
}

impl Scaling {
    /// Whether positions map onto finite values that rise with the knob.
    ///
    /// An exponential curve needs a positive `min` and a `base` above 1.
    #[must_use]
    pub fn is_well_formed(self) -> bool {
        match self {
            Scaling::Linear { min, max } => min.is_finite() && max.is_finite(),
            Scaling::Exponential { min, base } => {
                min.is_finite() && base.is_finite() && min > 0.0 && base > 1.0
            }
        }
    }

    /// The parameter value at knob `position`.
    #[must_use]
    pub fn to_value(self, position: f32) -> f32 {
        match self {
            Scaling::Linear { min, max } => lerp(min, max, position),
            Scaling::Exponential { min, base } => exp_scale(min, base, position),
        }
    }

    /// The knob position that produces `value`, clamped to 0->1.
    #[must_use]
    pub fn to_position(self, value: f32) -> f32 {
        let position = match self {
            Scaling::Linear { min, max } => {
                if (max - min).abs() < f32::EPSILON {
                    return 0.0;
                }
                rescale(value, min..=max, 0.0..=1.0)
            }
            Scaling::Exponential { min, base } => exp_unscale(min, base, value),
        };
        if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        }
    }
}
