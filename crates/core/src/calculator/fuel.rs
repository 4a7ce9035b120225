//! Fuel depletion at a constant burn rate.

use tracing::debug;

use super::validation::require_non_negative;
use crate::core_types::{Kilograms, KilogramsPerSecond, Seconds};
use crate::error::KinematicsError;

/// Fuel left after burning at `burn_rate` for `time` seconds.
///
/// Burning exactly the fuel on board leaves 0 kg and succeeds; burning more is
/// reported, never clamped.
///
/// # Errors
/// - [`KinematicsError::InvalidArgument`] if any input is negative or non-finite.
/// - [`KinematicsError::FuelExhausted`] if `burn_rate × time` exceeds `fuel`.
pub fn fuel_depletion(
    fuel: Kilograms,
    burn_rate: KilogramsPerSecond,
    time: Seconds,
) -> Result<Kilograms, KinematicsError> {
    require_non_negative("fuel", *fuel)?;
    require_non_negative("fuel_burn_rate", *burn_rate)?;
    require_non_negative("elapsed_time", *time)?;

    let burned = burn_rate * time;
    if *burned > *fuel {
        // burned > fuel >= 0 implies a positive burn rate
        return Err(KinematicsError::FuelExhausted {
            required: burned,
            available: fuel,
            exhausted_after: fuel / burn_rate,
        });
    }

    let remaining = fuel - burned;
    debug!(
        fuel = *fuel,
        burned = *burned,
        remaining = *remaining,
        "fuel depletion"
    );
    Ok(remaining)
}

/// Elapsed time at which `fuel` runs out at `burn_rate`, or `None` if the
/// burn rate is zero.
///
/// # Errors
/// [`KinematicsError::InvalidArgument`] if either input is negative or non-finite.
pub fn fuel_exhaustion_time(
    fuel: Kilograms,
    burn_rate: KilogramsPerSecond,
) -> Result<Option<Seconds>, KinematicsError> {
    require_non_negative("fuel", *fuel)?;
    require_non_negative("fuel_burn_rate", *burn_rate)?;

    if *burn_rate == 0.0 {
        return Ok(None);
    }
    Ok(Some(fuel / burn_rate))
}
