//! Scenario runner: evaluates the three independent calculations for one
//! [`Scenario`] and collects each outcome separately.
//!
//! A failed calculation never hides the others. The rendered report always
//! has three lines, with a failure message in place of any value that could
//! not be computed.

pub mod config;

pub use config::{ConfigError, Scenario};

use std::fmt;

use tracing::{info, warn};

use crate::calculator::{distance_update, fuel_depletion, velocity_update};
use crate::core_types::{Kilograms, Kilometers, KilometersPerHour};
use crate::error::KinematicsError;

/// The three reported quantities, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Velocity,
    Distance,
    Fuel,
}

impl Quantity {
    /// Label printed before the value.
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Velocity => "Corrected New Velocity",
            Quantity::Distance => "Corrected New Distance",
            Quantity::Fuel => "Corrected Remaining Fuel",
        }
    }
}

impl Scenario {
    /// Velocity at the end of the interval.
    ///
    /// # Errors
    /// See [`velocity_update`].
    pub fn new_velocity(&self) -> Result<KilometersPerHour, KinematicsError> {
        velocity_update(
            self.initial_velocity_kmh,
            self.acceleration_ms2,
            self.elapsed_time_sec,
            self.allow_reverse,
        )
    }

    /// Distance at the end of the interval.
    ///
    /// # Errors
    /// See [`distance_update`].
    pub fn new_distance(&self) -> Result<Kilometers, KinematicsError> {
        distance_update(
            self.initial_distance_km,
            self.initial_velocity_kmh,
            self.acceleration_ms2,
            self.elapsed_time_sec,
        )
    }

    /// Fuel left at the end of the interval.
    ///
    /// # Errors
    /// See [`fuel_depletion`].
    pub fn remaining_fuel(&self) -> Result<Kilograms, KinematicsError> {
        fuel_depletion(
            self.fuel_kg,
            self.fuel_burn_rate_kg_s,
            self.elapsed_time_sec,
        )
    }
}

/// Outcome of every calculation in a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub velocity: Result<KilometersPerHour, KinematicsError>,
    pub distance: Result<Kilometers, KinematicsError>,
    pub fuel: Result<Kilograms, KinematicsError>,
}

impl ScenarioReport {
    /// True when all three calculations succeeded.
    pub fn is_success(&self) -> bool {
        self.velocity.is_ok() && self.distance.is_ok() && self.fuel.is_ok()
    }

    /// Failed calculations in output order.
    pub fn failures(&self) -> Vec<(Quantity, &KinematicsError)> {
        [
            (Quantity::Velocity, self.velocity.as_ref().err()),
            (Quantity::Distance, self.distance.as_ref().err()),
            (Quantity::Fuel, self.fuel.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(quantity, err)| err.map(|e| (quantity, e)))
        .collect()
    }
}

fn write_line<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    quantity: Quantity,
    result: &Result<T, KinematicsError>,
) -> fmt::Result {
    match result {
        Ok(value) => write!(f, "{}: {value}", quantity.label()),
        Err(err) => write!(f, "{}: failed: {err}", quantity.label()),
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, Quantity::Velocity, &self.velocity)?;
        writeln!(f)?;
        write_line(f, Quantity::Distance, &self.distance)?;
        writeln!(f)?;
        write_line(f, Quantity::Fuel, &self.fuel)
    }
}

/// Evaluate velocity, distance and fuel for `scenario`.
///
/// The calculations do not depend on one another. With the `parallel`
/// feature they run through `rayon::join`; the report is identical either way.
pub fn run_scenario(scenario: &Scenario) -> ScenarioReport {
    info!(
        initial_velocity_kmh = *scenario.initial_velocity_kmh,
        acceleration_ms2 = *scenario.acceleration_ms2,
        elapsed_time_sec = *scenario.elapsed_time_sec,
        initial_distance_km = *scenario.initial_distance_km,
        fuel_kg = *scenario.fuel_kg,
        fuel_burn_rate_kg_s = *scenario.fuel_burn_rate_kg_s,
        allow_reverse = scenario.allow_reverse,
        "running scenario"
    );

    #[cfg(feature = "parallel")]
    let (velocity, (distance, fuel)) = rayon::join(
        || scenario.new_velocity(),
        || rayon::join(|| scenario.new_distance(), || scenario.remaining_fuel()),
    );

    #[cfg(not(feature = "parallel"))]
    let (velocity, distance, fuel) = (
        scenario.new_velocity(),
        scenario.new_distance(),
        scenario.remaining_fuel(),
    );

    let report = ScenarioReport {
        velocity,
        distance,
        fuel,
    };

    for (quantity, err) in report.failures() {
        warn!(
            quantity = quantity.label(),
            code = err.kind().code(),
            kind = %err.kind(),
            "calculation failed: {err}"
        );
    }

    report
}
