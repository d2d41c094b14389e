use glam::Vec3;

use crate::config::BallConfig;

/// Directional keys held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteeringInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl SteeringInput {
    /// Unit direction in the table plane, or zero if nothing (or only
    /// opposing keys) is held. Forward is up-table (`-Z`).
    pub fn direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir += Vec3::NEG_Z;
        }
        if self.back {
            dir += Vec3::Z;
        }
        if self.left {
            dir += Vec3::NEG_X;
        }
        if self.right {
            dir += Vec3::X;
        }
        dir.normalize_or_zero()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BallController {
    pub move_force: f32,
    pub max_speed: f32,
    pub launch_force: f32,
}

impl BallController {
    pub fn new(config: &BallConfig) -> Self {
        Self {
            move_force: config.move_force,
            max_speed: config.max_speed,
            launch_force: config.launch_force,
        }
    }

    /// Steering force for this tick. Withheld entirely at or above the
    /// speed cap.
    pub fn steering_force(&self, input: SteeringInput, velocity: Vec3) -> Option<Vec3> {
        let dir = input.direction();
        if dir == Vec3::ZERO || velocity.length() >= self.max_speed {
            return None;
        }
        Some(dir * self.move_force)
    }

    /// Forward impulse for a launch of `charge` (clamped to 0..=1).
    pub fn launch_impulse(&self, charge: f32) -> Vec3 {
        let charge = if charge.is_finite() {
            charge.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Vec3::NEG_Z * (self.launch_force * charge)
    }
}
