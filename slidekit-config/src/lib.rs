//! Configuration loading for slidekit carousels.
//!
//! Settings come from a TOML or JSON file, inline JSON in the environment,
//! or the engine defaults, and are validated into
//! [`slidekit_core::CarouselOptions`]. The [`sim`] module drives a carousel
//! through a scripted sequence of steps for the `slidekit-sim` binary.

pub mod settings;
pub mod sim;

pub use settings::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, CarouselSettings, SettingsSource,
};
pub use sim::{Simulation, Step, StepParseError, StepReport};
