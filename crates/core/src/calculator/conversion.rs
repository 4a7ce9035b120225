//! Velocity unit conversion between km/h and m/s.
//!
//! These two factors are the only conversion constants in the crate.

/// Meters per kilometer
pub const KM_TO_M: f64 = 1000.0;

/// Seconds per hour
pub const SECONDS_IN_HOUR: f64 = 3600.0;

/// Convert a velocity from km/h to m/s.
#[inline]
pub fn velocity_kmh_to_ms(velocity_kmh: f64) -> f64 {
    velocity_kmh * KM_TO_M / SECONDS_IN_HOUR
}

/// Convert a velocity from m/s to km/h. Inverse of [`velocity_kmh_to_ms`].
#[inline]
pub fn velocity_ms_to_kmh(velocity_ms: f64) -> f64 {
    velocity_ms * SECONDS_IN_HOUR / KM_TO_M
}
