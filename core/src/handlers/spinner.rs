use glam::Vec3;

use super::away_from;
use crate::config::SpinnerConfig;

/// Free-spinning post. Torque is reasserted every fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    pub center: Vec3,
    pub spin_torque: f32,
    pub reaction_force: f32,
    pub score_per_hit: u64,
}

impl Spinner {
    pub fn new(center: Vec3, config: &SpinnerConfig) -> Self {
        Self {
            center,
            spin_torque: config.spin_torque,
            reaction_force: config.reaction_force,
            score_per_hit: config.score_per_hit,
        }
    }

    pub fn idle_torque(&self) -> Vec3 {
        Vec3::Y * self.spin_torque
    }

    pub fn reaction_impulse(&self, contact: Vec3) -> Vec3 {
        away_from(self.center, contact) * self.reaction_force
    }
}
