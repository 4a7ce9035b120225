//! Spacecraft Kinematics Core Library
//!
//! Works out a spacecraft's velocity, distance travelled and remaining fuel
//! after one fixed interval of constant acceleration and constant fuel burn.
//! This is a single forward step, not a trajectory integrator.
//!
//! ## Layout
//!
//! - [`core_types`]: typed physical quantities (km/h, m/s, m/s², s, m, km, kg, kg/s)
//! - [`calculator`]: unit conversion and the velocity, distance and fuel calculations
//! - [`error`]: typed failures with stable error codes
//! - [`scenario`]: the configuration object, the scenario runner and its report
//!
//! ```
//! use spacecraft_kinematics::{run_scenario, Scenario};
//!
//! let report = run_scenario(&Scenario::default());
//! assert!(report.is_success());
//! assert_eq!(report.to_string().lines().count(), 3);
//! ```

// Core types and utilities
pub mod core_types;

// Calculations, errors and orchestration
pub mod calculator;
pub mod error;
pub mod scenario;

// Re-export core types
pub use core_types::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, Meters, MetersPerSecond,
    MetersPerSecondSquared, Seconds,
};

// Re-export the calculator surface
pub use calculator::{
    distance_update, fuel_depletion, fuel_exhaustion_time, velocity_kmh_to_ms, velocity_ms_to_kmh,
    velocity_update, KM_TO_M, SECONDS_IN_HOUR,
};
pub use error::{ErrorKind, InvalidResult, KinematicsError};
pub use scenario::{run_scenario, ConfigError, Quantity, Scenario, ScenarioReport};
