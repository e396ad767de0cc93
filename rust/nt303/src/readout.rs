//! What the display shows. Rendering it is up to the host.

/// A labelled whole-number value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The parameter's short title.
    pub label: &'static str,

    /// The value, truncated towards zero.
    pub value: i32,

    /// The parameter's units, if it has any.
    pub units: Option<&'static str>,
}

/// What to draw for one display tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    /// The resting display: the name and the main filter controls.
    Overview {
        /// The algorithm's name.
        title: &'static str,

        /// Cutoff, resonance and decay.
        fields: [Field; 3],
    },

    /// A parameter that was just changed from the control surface.
    Active(Field),
}
