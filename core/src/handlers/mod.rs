//! Per-obstacle behaviour.
//!
//! Handlers are plain state plus pure responses: they compute impulses,
//! torques, motor commands and score awards. The [`crate::table::Table`]
//! dispatcher routes physics events to them and applies the results.

mod ball;
mod bumper;
mod flipper;
mod spinner;
mod target;

pub use ball::{BallController, SteeringInput};
pub use bumper::{Bumper, BUMPER_LIFT_RATIO};
pub use flipper::FlipperActuator;
pub use spinner::Spinner;
pub use target::{pulse_scale, CoinTarget, Target, TargetState};

use glam::Vec3;

/// Unit vector from `center` toward `point`.
///
/// Falls back to `-Z` (up-table) when the two coincide.
pub fn away_from(center: Vec3, point: Vec3) -> Vec3 {
    (point - center).try_normalize().unwrap_or(Vec3::NEG_Z)
}

/// Like [`away_from`], ignoring the vertical offset.
pub fn away_from_horizontal(center: Vec3, point: Vec3) -> Vec3 {
    let flat = Vec3::new(point.x - center.x, 0.0, point.z - center.z);
    flat.try_normalize().unwrap_or(Vec3::NEG_Z)
}
