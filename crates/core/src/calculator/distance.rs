//! Distance update under constant acceleration (`s = u·t + ½·a·t²`).
//!
//! Distance here is a signed position along the initial direction of travel.
//! Unlike [`velocity_update`](super::velocity_update), a deceleration that
//! turns the craft around is not an error: the displacement formula still
//! holds, the position simply decreases and may fall below the start or below
//! zero.

use tracing::debug;

use super::validation::{require_finite, require_finite_result, require_non_negative};
use crate::core_types::{Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds};
use crate::error::KinematicsError;

/// Distance after `time` seconds, starting at `initial_distance` with
/// `initial_velocity` and constant `acceleration`.
///
/// # Errors
/// [`KinematicsError::InvalidArgument`] if any input is non-finite, `time` is
/// negative, or the initial distance or velocity is negative.
/// [`KinematicsError::PhysicallyInvalidResult`] if the result overflows.
pub fn distance_update(
    initial_distance: Kilometers,
    initial_velocity: KilometersPerHour,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
) -> Result<Kilometers, KinematicsError> {
    require_non_negative("initial_distance", *initial_distance)?;
    require_non_negative("initial_velocity", *initial_velocity)?;
    require_finite("acceleration", *acceleration)?;
    require_non_negative("elapsed_time", *time)?;

    let cruise = initial_velocity.to_mps() * time;
    let accelerated = acceleration * time * time * 0.5;
    let displacement = cruise + accelerated;

    let new_distance = initial_distance + displacement.to_kilometers();
    require_finite_result("new distance", *new_distance)?;

    debug!(
        initial = *initial_distance,
        displacement_m = *displacement,
        result = *new_distance,
        "distance update"
    );

    Ok(new_distance)
}
