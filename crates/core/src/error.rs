//! Error taxonomy for the kinematic calculations.
//!
//! Every calculation validates its own inputs and reports failures through
//! [`KinematicsError`]. Callers that need to branch on the failure category
//! rather than the message use [`KinematicsError::kind`], whose numeric
//! [`ErrorKind::code`] is stable.
//!
//! # Example
//! ```rust
//! use spacecraft_kinematics::{fuel_depletion, ErrorKind, Kilograms, KilogramsPerSecond, Seconds};
//!
//! let err = fuel_depletion(Kilograms::new(10.0), KilogramsPerSecond::new(1.0), Seconds::new(20.0))
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::FuelExhausted);
//! assert_eq!(err.kind().code(), 2);
//! ```

use std::fmt;

use thiserror::Error;

use crate::core_types::{Kilograms, MetersPerSecond, Seconds};

/// Failure of a single kinematic calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// An input is non-finite, or negative where the quantity must not be.
    #[error("invalid argument `{name}`: {constraint}, got {value}")]
    InvalidArgument {
        /// Name of the offending parameter (e.g. `"elapsed_time"`)
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Description of the violated constraint
        constraint: &'static str,
    },

    /// The burn would consume more fuel than is on board.
    #[error(
        "fuel exhausted: burn needs {required} but only {available} is available \
         (tank runs dry after {exhausted_after})"
    )]
    FuelExhausted {
        /// Fuel the full burn would consume
        required: Kilograms,
        /// Fuel on board
        available: Kilograms,
        /// Elapsed time at which the tank is empty
        exhausted_after: Seconds,
    },

    /// Inputs were valid but their combination leaves the modelled domain.
    #[error("physically invalid result: {0}")]
    PhysicallyInvalidResult(InvalidResult),
}

/// Why a result fell outside the modelled domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidResult {
    /// Deceleration stopped the craft and drove it backwards before the
    /// interval elapsed, and reversal was not permitted.
    #[error(
        "velocity reversed to {velocity} (craft came to rest after {stopped_after}); \
         enable allow_reverse to accept signed velocities"
    )]
    Reversal {
        /// Signed velocity at the end of the interval
        velocity: MetersPerSecond,
        /// Elapsed time at which velocity crossed zero
        stopped_after: Seconds,
    },

    /// The arithmetic overflowed to infinity or NaN.
    #[error("{quantity} is not a finite number")]
    NonFinite {
        /// Name of the quantity that overflowed
        quantity: &'static str,
    },
}

/// Branchable failure category of a [`KinematicsError`].
///
/// Follows the usual convention of non-zero codes for errors; 0 is never used.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`KinematicsError::InvalidArgument`].
    InvalidArgument = 1,

    /// See [`KinematicsError::FuelExhausted`].
    FuelExhausted = 2,

    /// See [`KinematicsError::PhysicallyInvalidResult`].
    PhysicallyInvalidResult = 3,
}

impl ErrorKind {
    /// Stable numeric code for this category.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::FuelExhausted => "FuelExhausted",
            ErrorKind::PhysicallyInvalidResult => "PhysicallyInvalidResult",
        };
        f.write_str(name)
    }
}

impl KinematicsError {
    /// Failure category, for callers that branch on the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KinematicsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            KinematicsError::FuelExhausted { .. } => ErrorKind::FuelExhausted,
            KinematicsError::PhysicallyInvalidResult(_) => ErrorKind::PhysicallyInvalidResult,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, value: f64, constraint: &'static str) -> Self {
        KinematicsError::InvalidArgument {
            name,
            value,
            constraint,
        }
    }

    pub(crate) fn non_finite(quantity: &'static str) -> Self {
        KinematicsError::PhysicallyInvalidResult(InvalidResult::NonFinite { quantity })
    }
}
