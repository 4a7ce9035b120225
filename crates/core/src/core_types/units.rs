//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities a single forward
//! kinematic step works with, so that a velocity in km/h can never be handed
//! to a formula expecting m/s.
//!
//! # Design
//! - All types wrap `f64`; the round-trip conversion law is checked to 1e-9
//! - Constructors do not validate; the calculator reports invalid inputs as errors
//! - Distances are signed positions along the initial direction of travel
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//!
//! # Usage
//! ```
//! use spacecraft_kinematics::core_types::units::{KilometersPerHour, MetersPerSecond};
//!
//! let cruise = KilometersPerHour::new(36.0);
//! let mps: MetersPerSecond = cruise.into();
//! assert!((*mps - 10.0).abs() < 1e-12);
//! assert_eq!(mps.to_string(), "10.00 m/s");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

use crate::calculator::conversion::{velocity_kmh_to_ms, velocity_ms_to_kmh, KM_TO_M};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Value to print at two decimals: anything that rounds to zero prints as
/// `0.00`, never `-0.00`.
#[inline]
fn display_value(value: f64) -> f64 {
    if value.abs() < 0.005 {
        0.0
    } else {
        value
    }
}

/// Shared boilerplate for every unit newtype: ordering, deref, raw access,
/// `f64` conversions, same-unit arithmetic and a two-decimal `Display`.
macro_rules! unit_type {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            #[doc = concat!("Create a new value in ", $symbol, ".")]
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub fn value(self) -> f64 {
                self.0
            }

            /// True when the wrapped value is neither NaN nor infinite
            #[inline]
            #[must_use]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = $name;
            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl PartialOrd<f64> for $name {
            fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("{:.2} ", $symbol), display_value(self.0))
            }
        }
    };
}

// ============================================================================
// VELOCITY / ACCELERATION TYPES
// ============================================================================

unit_type!(
    /// Velocity in kilometers per hour
    KilometersPerHour,
    "km/h"
);

impl KilometersPerHour {
    /// Convert to m/s
    #[inline]
    #[must_use]
    pub fn to_mps(self) -> MetersPerSecond {
        MetersPerSecond(velocity_kmh_to_ms(self.0))
    }
}

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(k: KilometersPerHour) -> MetersPerSecond {
        k.to_mps()
    }
}

unit_type!(
    /// Velocity in meters per second
    MetersPerSecond,
    "m/s"
);

impl MetersPerSecond {
    /// Convert to km/h
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(velocity_ms_to_kmh(self.0))
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(v: MetersPerSecond) -> KilometersPerHour {
        v.to_kmh()
    }
}

// Cross-type operation: velocity × time = distance
impl Mul<Seconds> for MetersPerSecond {
    type Output = Meters;
    fn mul(self, rhs: Seconds) -> Meters {
        Meters(self.0 * rhs.0)
    }
}

// Cross-type operation: velocity ÷ acceleration = time
impl Div<MetersPerSecondSquared> for MetersPerSecond {
    type Output = Seconds;
    fn div(self, rhs: MetersPerSecondSquared) -> Seconds {
        Seconds(self.0 / rhs.0)
    }
}

unit_type!(
    /// Acceleration in meters per second squared. Negative values decelerate.
    MetersPerSecondSquared,
    "m/s²"
);

// Cross-type operation: acceleration × time = velocity change
impl Mul<Seconds> for MetersPerSecondSquared {
    type Output = MetersPerSecond;
    fn mul(self, rhs: Seconds) -> MetersPerSecond {
        MetersPerSecond(self.0 * rhs.0)
    }
}

// ============================================================================
// TIME TYPES
// ============================================================================

unit_type!(
    /// Time duration in seconds
    Seconds,
    "s"
);

// ============================================================================
// DISTANCE TYPES
// ============================================================================

unit_type!(
    /// Signed position in meters along the initial direction of travel
    Meters,
    "m"
);

impl Meters {
    /// Convert to kilometers
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / KM_TO_M)
    }
}

unit_type!(
    /// Signed position in kilometers along the initial direction of travel
    Kilometers,
    "km"
);

impl Kilometers {
    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * KM_TO_M)
    }
}

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Kilometers {
        m.to_kilometers()
    }
}

// ============================================================================
// MASS / MASS FLOW TYPES
// ============================================================================

unit_type!(
    /// Mass in kilograms
    Kilograms,
    "kg"
);

// Cross-type operation: mass ÷ mass flow = time
impl Div<KilogramsPerSecond> for Kilograms {
    type Output = Seconds;
    fn div(self, rhs: KilogramsPerSecond) -> Seconds {
        Seconds(self.0 / rhs.0)
    }
}

unit_type!(
    /// Mass flow (fuel burn rate) in kilograms per second
    KilogramsPerSecond,
    "kg/s"
);

// Cross-type operation: mass flow × time = mass
impl Mul<Seconds> for KilogramsPerSecond {
    type Output = Kilograms;
    fn mul(self, rhs: Seconds) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kmh_to_mps() {
        let kmh = KilometersPerHour(36.0);
        assert_relative_eq!(*kmh.to_mps(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mps_to_kmh() {
        let mps = MetersPerSecond(10.0);
        assert_relative_eq!(*mps.to_kmh(), 36.0, max_relative = 1e-12);
    }

    #[test]
    fn test_meters_to_kilometers() {
        let m = Meters(5000.0);
        assert_relative_eq!(*m.to_kilometers(), 5.0);
        assert_relative_eq!(*Kilometers(-2.5).to_meters(), -2500.0);
    }

    #[test]
    fn test_cross_type_products() {
        let dv = MetersPerSecondSquared(3.0) * Seconds(10.0);
        assert_eq!(dv, MetersPerSecond(30.0));

        let burned = KilogramsPerSecond(0.5) * Seconds(3600.0);
        assert_eq!(burned, Kilograms(1800.0));

        let travelled = MetersPerSecond(12.0) * Seconds(5.0);
        assert_eq!(travelled, Meters(60.0));

        assert_eq!(Kilograms(10.0) / KilogramsPerSecond(4.0), Seconds(2.5));
        assert_eq!(
            MetersPerSecond(-20.0) / MetersPerSecondSquared(-4.0),
            Seconds(5.0)
        );
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(KilometersPerHour(48880.0).to_string(), "48880.00 km/h");
        assert_eq!(Kilometers(29440.004).to_string(), "29440.00 km");
        assert_eq!(Kilograms(3200.0).to_string(), "3200.00 kg");
        assert_eq!(MetersPerSecondSquared(-1.5).to_string(), "-1.50 m/s²");
    }

    #[test]
    fn test_display_never_shows_negative_zero() {
        assert_eq!(KilometersPerHour(-1e-300).to_string(), "0.00 km/h");
        assert_eq!(Kilometers(-0.004).to_string(), "0.00 km");
        assert_eq!(Kilograms(-0.0).to_string(), "0.00 kg");
        assert_eq!(Kilometers(-0.006).to_string(), "-0.01 km");
        assert_eq!(Meters(f64::NAN).to_string(), "NaN m");
    }

    #[test]
    fn test_total_ordering_puts_nan_last() {
        let mut values = vec![Seconds(f64::NAN), Seconds(2.0), Seconds(-1.0)];
        values.sort();
        assert_eq!(values[0], Seconds(-1.0));
        assert_eq!(values[1], Seconds(2.0));
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Kilograms(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: KilometersPerHour = serde_json::from_str("100.0").unwrap();
        assert_eq!(back, KilometersPerHour(100.0));
    }
}
