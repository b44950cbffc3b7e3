//! Immutability tour: a guided replay of copy-in/copy-out immutability.
//!
//! - [`config`]: environment-driven settings with defaults
//! - [`tour`]: the steps, returned as observations

pub mod config;
pub mod tour;

pub use config::{TourConfig, TourError};
pub use tour::{Observation, run};
