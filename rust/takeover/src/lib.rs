#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::private_doc_tests,
    rustdoc::unescaped_backticks,
    clippy::pedantic,
    clippy::todo
)]
#![allow(
    clippy::type_complexity,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::default_trait_access
)]
//! Maps absolute knobs, their push buttons and relative encoders onto
//! parameters without value jumps.
//!
//! Each knob controls two parameters: a _normal_ one, and an _alt_ one used
//! while the knob's push button is held. Since a knob has one physical position
//! but two values, the knob usually disagrees with at least one of them. Rather
//! than jumping a parameter to the knob position, knob movements are applied
//! _relatively_ to the parameter's own position until the two meet again, at
//! which point the parameter follows the knob exactly ("soft takeover").

pub mod display;
pub mod encoder;
pub mod knobs;
pub mod scaling;

pub use display::DisplayFocus;
pub use encoder::EncoderConfig;
pub use knobs::{KnobConfig, Mapping, SoftTakeover};
pub use scaling::Scaling;

/// A parameter value produced by the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change<P> {
    /// The parameter that changed.
    pub param: P,

    /// Its new value, in the parameter's own units.
    pub value: f32,
}
