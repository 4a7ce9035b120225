//! Scenario configuration: the single set of inputs for one forward step.
//!
//! JSON uses the `camelCase` field names
//! `initialVelocityKmh, accelerationMs2, elapsedTimeSec, initialDistanceKm,
//! fuelKg, fuelBurnRateKgS, allowReverse`. Missing fields fall back to
//! [`Scenario::default`]. Loading does not check physical constraints; each
//! calculation reports its own invalid inputs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core_types::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds,
};

/// Failure to load a [`Scenario`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read scenario file {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not a valid scenario.
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inputs for a single kinematic step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Scenario {
    /// Velocity at the start of the interval
    pub initial_velocity_kmh: KilometersPerHour,
    /// Constant acceleration over the interval (negative decelerates)
    pub acceleration_ms2: MetersPerSecondSquared,
    /// Length of the interval
    pub elapsed_time_sec: Seconds,
    /// Position at the start of the interval
    pub initial_distance_km: Kilometers,
    /// Fuel on board at the start of the interval
    pub fuel_kg: Kilograms,
    /// Constant fuel burn rate
    pub fuel_burn_rate_kg_s: KilogramsPerSecond,
    /// Accept a velocity that has reversed sign within the interval
    pub allow_reverse: bool,
}

impl Default for Scenario {
    /// One hour of 3 m/s² thrust from 10 000 km/h, burning 0.5 kg/s from a
    /// 5000 kg tank.
    fn default() -> Self {
        Scenario {
            initial_velocity_kmh: KilometersPerHour::new(10000.0),
            acceleration_ms2: MetersPerSecondSquared::new(3.0),
            elapsed_time_sec: Seconds::new(3600.0),
            initial_distance_km: Kilometers::new(0.0),
            fuel_kg: Kilograms::new(5000.0),
            fuel_burn_rate_kg_s: KilogramsPerSecond::new(0.5),
            allow_reverse: false,
        }
    }
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] if the text is not valid JSON, has a field of the
    /// wrong type, or names an unknown field.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario from a JSON file.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Scenario::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
