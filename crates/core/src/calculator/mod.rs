//! Kinematics calculator: unit conversion and the three single-step
//! calculations (velocity, distance, fuel).
//!
//! Every function is pure and independent of the others; none consumes
//! another's output.

pub mod conversion;
mod distance;
mod fuel;
mod validation;
mod velocity;

pub use conversion::{velocity_kmh_to_ms, velocity_ms_to_kmh, KM_TO_M, SECONDS_IN_HOUR};
pub use distance::distance_update;
pub use fuel::{fuel_depletion, fuel_exhaustion_time};
pub use velocity::velocity_update;
