//! Velocity update under constant acceleration (`v = u + a·t`).

use tracing::debug;

use super::validation::{require_finite, require_finite_result, require_non_negative};
use crate::core_types::{KilometersPerHour, MetersPerSecondSquared, Seconds};
use crate::error::{InvalidResult, KinematicsError};

/// Velocity after `time` seconds of constant `acceleration`.
///
/// The change in velocity is worked out in m/s and converted once, so a zero
/// change hands back `initial` bit-for-bit.
///
/// A negative final velocity means the craft stopped and reversed inside the
/// interval. That is rejected unless `allow_reverse` is set, in which case the
/// signed velocity is returned.
///
/// # Errors
/// - [`KinematicsError::InvalidArgument`] if any input is non-finite, `time` is
///   negative, or `initial` is negative.
/// - [`KinematicsError::PhysicallyInvalidResult`] on an unpermitted reversal,
///   or if the result overflows.
pub fn velocity_update(
    initial: KilometersPerHour,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
    allow_reverse: bool,
) -> Result<KilometersPerHour, KinematicsError> {
    require_non_negative("initial_velocity", *initial)?;
    require_finite("acceleration", *acceleration)?;
    require_non_negative("elapsed_time", *time)?;

    let delta = acceleration * time;
    if *delta == 0.0 {
        return Ok(initial);
    }

    // direction is decided in m/s; the km/h sum rounds differently near zero
    let final_mps = initial.to_mps() + delta;
    require_finite_result("new velocity", *final_mps)?;

    if *final_mps < 0.0 && !allow_reverse {
        // acceleration is negative here, so the craft was at rest at u / -a
        let stopped_after = initial.to_mps() / -acceleration;
        return Err(KinematicsError::PhysicallyInvalidResult(
            InvalidResult::Reversal {
                velocity: final_mps,
                stopped_after,
            },
        ));
    }

    let mut final_velocity = initial + delta.to_kmh();
    if *final_velocity < 0.0 && *final_mps >= 0.0 {
        final_velocity = final_mps.to_kmh();
    }
    require_finite_result("new velocity", *final_velocity)?;

    debug!(
        initial = *initial,
        acceleration = *acceleration,
        time = *time,
        result = *final_velocity,
        "velocity update"
    );

    Ok(final_velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::conversion::velocity_kmh_to_ms;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn kmh(v: f64) -> KilometersPerHour {
        KilometersPerHour::new(v)
    }

    fn accel(a: f64) -> MetersPerSecondSquared {
        MetersPerSecondSquared::new(a)
    }

    fn secs(t: f64) -> Seconds {
        Seconds::new(t)
    }

    #[test]
    fn test_default_scenario_velocity() {
        // 10000 km/h + 3 m/s² × 3600 s × 3.6
        let v = velocity_update(kmh(10000.0), accel(3.0), secs(3600.0), false).unwrap();
        assert_relative_eq!(*v, 48880.0, max_relative = 1e-12);
        assert_eq!(v.to_string(), "48880.00 km/h");
    }

    #[test]
    fn test_zero_acceleration_keeps_velocity() {
        for u in [0.0, 1.0, 123.456, 27_000.0] {
            let v = velocity_update(kmh(u), accel(0.0), secs(7200.0), false).unwrap();
            assert_eq!(*v, u);
        }
    }

    #[test]
    fn test_zero_time_keeps_velocity_exactly() {
        let v = velocity_update(kmh(1234.5678), accel(-9.81), secs(0.0), false).unwrap();
        assert_eq!(*v, 1234.5678);
    }

    #[test]
    fn test_deceleration_to_rest_is_allowed() {
        // 36 km/h = 10 m/s, stops after exactly 5 s at -2 m/s²
        let v = velocity_update(kmh(36.0), accel(-2.0), secs(5.0), false).unwrap();
        assert_relative_eq!(*v, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coming_to_rest_exactly_at_interval_end() {
        // braking that cancels u in m/s, even where the km/h sum rounds below zero
        let u = 28.9;
        for t in [3.0, 7.0, 10.0, 13.0, 60.0] {
            let a = -(u * 1000.0 / 3600.0) / t;
            let final_mps = velocity_kmh_to_ms(u) + a * t;
            assert_eq!(final_mps, 0.0, "t={t}");

            let v = velocity_update(kmh(u), accel(a), secs(t), false).unwrap();
            assert!(*v >= 0.0, "t={t} v={v:?}");
            assert_relative_eq!(*v, 0.0, epsilon = 1e-9);
            assert_eq!(v.to_string(), "0.00 km/h");
        }
    }

    #[test]
    fn test_reversal_rejected_by_default() {
        // 10 m/s, -2 m/s² for 10 s -> -10 m/s
        let err = velocity_update(kmh(36.0), accel(-2.0), secs(10.0), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PhysicallyInvalidResult);
        match err {
            KinematicsError::PhysicallyInvalidResult(InvalidResult::Reversal {
                velocity,
                stopped_after,
            }) => {
                assert_relative_eq!(*velocity, -10.0, epsilon = 1e-9);
                assert_relative_eq!(*stopped_after, 5.0, epsilon = 1e-9);
            }
            other => panic!("expected reversal, got {other:?}"),
        }
    }

    #[test]
    fn test_reversal_permitted_returns_signed_velocity() {
        let v = velocity_update(kmh(36.0), accel(-2.0), secs(10.0), true).unwrap();
        assert_relative_eq!(*v, -36.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_arguments() {
        let cases = [
            (kmh(100.0), accel(1.0), secs(-1.0)),
            (kmh(-1.0), accel(1.0), secs(1.0)),
            (kmh(f64::NAN), accel(1.0), secs(1.0)),
            (kmh(100.0), accel(f64::INFINITY), secs(1.0)),
            (kmh(100.0), accel(1.0), secs(f64::NAN)),
        ];
        for (u, a, t) in cases {
            let err = velocity_update(u, a, t, true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{u:?} {a:?} {t:?}");
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = velocity_update(kmh(1.0), accel(f64::MAX), secs(10.0), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PhysicallyInvalidResult);
    }
}
