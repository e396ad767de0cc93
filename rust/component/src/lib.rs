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
//! Host-facing abstractions for the NT-303 bass voice controller.
//!
//! The host calls into an [`algorithm::Algorithm`] once per audio block, once per
//! MIDI message and once per UI tick. The algorithm in turn drives a single
//! monophonic [`voice::Voice`] engine, which is an external collaborator.

pub mod algorithm;
pub mod audio;
pub mod events;
pub mod parameters;
pub mod voice;

/// Information about the processing environment that an algorithm will run in.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingEnvironment {
    /// The sample rate of the audio at construction time.
    ///
    /// Note that the host may change the sample rate later, this is reported
    /// on every call to [`algorithm::Algorithm::step`].
    pub sampling_rate: f32,
}

/// Memory and parameter requirements reported to the host before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    /// Number of parameters in the algorithm's parameter table.
    pub num_parameters: usize,

    /// Size in bytes of one algorithm instance.
    pub instance_size: usize,
}

/// The main host abstraction.
///
/// A [`Component`] contains information about the parameters of an algorithm
/// as well as the ability to construct instances of it.
pub trait Component {
    /// The algorithm that this component constructs.
    type Algorithm: algorithm::Algorithm;

    /// Get information about the parameters of this component.
    ///
    /// This must return the same value every time it is called.
    fn parameter_infos(&self) -> &'static [parameters::StaticInfoRef];

    /// Group the parameters into pages for the host's menus.
    ///
    /// Every parameter should appear on exactly one page.
    fn parameter_pages(&self) -> &'static [parameters::Page];

    /// Report how much memory an instance needs.
    fn requirements(&self) -> Requirements {
        Requirements {
            num_parameters: self.parameter_infos().len(),
            instance_size: std::mem::size_of::<Self::Algorithm>(),
        }
    }

    /// Construct an algorithm instance.
    ///
    /// Note any state needed in the audio callback should be allocated here.
    fn construct(&self, environment: &ProcessingEnvironment) -> Self::Algorithm;
}
