//! Tour configuration.
//!
//! Values come from environment variables (optionally via a `.env` file).
//! Every variable has a default, so an empty environment replays the classic
//! `Main Street` / `New York` walk-through.
//!
//! # Environment Variables
//!
//! - `TOUR_PERSON_ID`: Person identifier (default: 25)
//! - `TOUR_PERSON_NAME`: Person name (default: "John")
//! - `TOUR_STREET`: Initial street (default: "Main Street")
//! - `TOUR_CITY`: Initial city (default: "New York")
//! - `TOUR_CHANGED_STREET`: Street written to the original address (default: "Changed Street")
//! - `TOUR_CHANGED_CITY`: City written to the accessor copy (default: "Los Angeles")

use std::env;

use thiserror::Error;

/// Errors raised while loading the tour configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// An environment variable has a value that cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Values used by the tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    /// Identifier of the person.
    pub person_id: i64,
    /// Name of the person.
    pub person_name: String,
    /// Initial street.
    pub street: String,
    /// Initial city.
    pub city: String,
    /// Street written to the caller's address after construction.
    pub changed_street: String,
    /// City written to the copy returned by the accessor.
    pub changed_city: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            person_id: 25,
            person_name: "John".to_string(),
            street: "Main Street".to_string(),
            city: "New York".to_string(),
            changed_street: "Changed Street".to_string(),
            changed_city: "Los Angeles".to_string(),
        }
    }
}

impl TourConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `TourError::InvalidValue` if `TOUR_PERSON_ID` is set but is not
    /// an integer.
    pub fn from_env() -> Result<Self, TourError> {
        if let Err(error) = dotenvy::dotenv() {
            report_dotenv_error(&error);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `TourError::InvalidValue` if `TOUR_PERSON_ID` is set but is not
    /// an integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TourError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let person_id = match lookup("TOUR_PERSON_ID") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|error: std::num::ParseIntError| TourError::InvalidValue {
                    key: "TOUR_PERSON_ID".to_string(),
                    message: error.to_string(),
                })?,
            None => defaults.person_id,
        };

        Ok(Self {
            person_id,
            person_name: lookup("TOUR_PERSON_NAME").unwrap_or(defaults.person_name),
            street: lookup("TOUR_STREET").unwrap_or(defaults.street),
            city: lookup("TOUR_CITY").unwrap_or(defaults.city),
            changed_street: lookup("TOUR_CHANGED_STREET").unwrap_or(defaults.changed_street),
            changed_city: lookup("TOUR_CHANGED_CITY").unwrap_or(defaults.changed_city),
        })
    }
}

/// Logs a `.env` problem unless the file is simply absent.
///
/// Returns whether anything was reported.
fn report_dotenv_error(error: &dotenvy::Error) -> bool {
    if error.not_found() {
        return false;
    }
    tracing::warn!(%error, ".env file could not be loaded; using the process environment");
    true
}
