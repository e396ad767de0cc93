//! Schmitt trigger for gate voltages.


/// A low gate goes high only above this voltage.
pub const GATE_ON_THRESHOLD: f32 = 1.5;

/// A high gate stays high down to this voltage.
pub const GATE_OFF_THRESHOLD: f32 = 1.0;

/// A change of gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The gate opened.
    Rising,

    /// The gate closed.
    Falling,
}

/// A gate input with hysteresis between [`GATE_OFF_THRESHOLD`] and
/// [`GATE_ON_THRESHOLD`]. Starts low.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchmittGate {
    high: bool,
}

impl SchmittGate {
    /// Whether the gate is open.
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Feed one gate sample, returning the edge it caused, if any.
    pub fn process(&mut self, volts: f32) -> Option<Edge> {
        let high = if self.high {
            volts >= GATE_OFF_THRESHOLD
        } else {
            volts > GATE_ON_THRESHOLD
        };
        let edge = match (self.high, high) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        };
        self.high = high;
        edge
    }
}
