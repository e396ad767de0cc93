//! Relative encoders that step a parameter by a fixed amount per detent.

use serde::Deserialize;

use crate::Change;


/// A relative encoder stepping a parameter through its range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EncoderConfig<P> {
    /// The driven parameter.
    pub param: P,

    /// Parameter change per detent.
    pub step: f32,

    /// Lowest value the encoder can reach.
    pub min: f32,

    /// Highest value the encoder can reach.
    pub max: f32,
}

impl<P: Copy> EncoderConfig<P> {
    /// The parameter's new value after turning `detents` from `current`, or
    /// `None` if the encoder didn't move.
    #[must_use]
    pub fn turn(&self, current: f32, detents: i8) -> Option<Change<P>> {
        if detents == 0 {
            return None;
        }
        let value = (current + f32::from(detents) * self.step).clamp(self.min, self.max);
        Some(Change {
            param: self.param,
            value,
        })
    }
}
