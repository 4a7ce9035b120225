//! Input checks shared by the calculations.

use crate::error::KinematicsError;

/// Reject NaN and infinities.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::invalid_argument(
            name,
            value,
            "must be a finite number",
        ))
    }
}

/// Reject non-finite and negative values. `-0.0` is accepted.
pub(crate) fn require_non_negative(
    name: &'static str,
    value: f64,
) -> Result<f64, KinematicsError> {
    let value = require_finite(name, value)?;
    if value < 0.0 {
        return Err(KinematicsError::invalid_argument(
            name,
            value,
            "must be non-negative",
        ));
    }
    Ok(value)
}

/// Turn an overflowed result into an error instead of returning it.
pub(crate) fn require_finite_result(
    quantity: &'static str,
    value: f64,
) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::non_finite(quantity))
    }
}
