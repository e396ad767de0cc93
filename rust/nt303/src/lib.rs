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
//! The control layer of a TB-303 style bass voice.
//!
//! [`Nt303`] plays a single monophonic [`Voice`] from a gate/pitch/accent CV
//! triplet and MIDI, and maps a three knob, two encoder control surface onto
//! its sound parameters with soft takeover. The voice engine itself is
//! supplied by the host.

use std::marker::PhantomData;

use nt303_component::{
    Component as ComponentT, ProcessingEnvironment,
    parameters::{Page, StaticInfoRef},
    voice::Voice,
};

pub mod algorithm;
pub mod config;
pub mod factory;
pub mod layout;
pub mod parameters;
pub mod readout;

pub use algorithm::Nt303;
pub use config::{Config, ConfigError};
pub use factory::Instances;
pub use parameters::Param;
pub use readout::Readout;

#[cfg(test)]
mod tests;

/// Builds [`Nt303`] instances, each with a fresh `V`.
#[derive(Debug, Clone)]
pub struct Component<V> {
    config: Config,
    voice: PhantomData<fn() -> V>,
}

impl<V> Default for Component<V> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<V> Component<V> {
    /// A component whose instances all use `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            voice: PhantomData,
        }
    }

    /// The configuration every instance is built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<V: Voice + Default> ComponentT for Component<V> {
    type Algorithm = Nt303<V>;

    fn parameter_infos(&self) -> &'static [StaticInfoRef] {
        &parameters::PARAMETERS
    }

    fn parameter_pages(&self) -> &'static [Page] {
        &parameters::PAGES
    }

    fn construct(&self, environment: &ProcessingEnvironment) -> Self::Algorithm {
        Nt303::new(&self.config, environment, V::default())
    }
}
