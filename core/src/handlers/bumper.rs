use glam::Vec3;

use super::away_from_horizontal;
use crate::config::BumperConfig;

/// Upward share of the bounce, relative to its horizontal magnitude.
pub const BUMPER_LIFT_RATIO: f32 = 0.2;

/// Stateless pop bumper: every contact scores and kicks the ball away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bumper {
    pub center: Vec3,
    pub bounce_force: f32,
    pub score_value: u64,
}

impl Bumper {
    pub fn new(center: Vec3, config: &BumperConfig) -> Self {
        Self {
            center,
            bounce_force: config.bounce_force,
            score_value: config.score_value,
        }
    }

    /// Impulse for the ball touching this bumper at `contact`.
    pub fn impulse(&self, contact: Vec3) -> Vec3 {
        let dir = away_from_horizontal(self.center, contact);
        dir * self.bounce_force + Vec3::Y * (self.bounce_force * BUMPER_LIFT_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumper() -> Bumper {
        Bumper::new(Vec3::new(1.0, 1.0, -10.0), &BumperConfig::default())
    }

    #[test]
    fn pushes_ball_away_from_center() {
        let b = bumper();
        let impulse = b.impulse(b.center + Vec3::new(0.0, 0.0, 0.75));
        assert!((impulse.z - b.bounce_force).abs() < 1e-5);
        assert!(impulse.x.abs() < 1e-5);
    }

    #[test]
    fn lift_is_fifth_of_horizontal_magnitude() {
        let b = bumper();
        for contact in [
            Vec3::new(1.7, 1.3, -10.2),
            Vec3::new(0.2, 0.8, -9.5),
            Vec3::new(1.0, 2.0, -10.75),
        ] {
            let impulse = b.impulse(contact);
            let horizontal = Vec3::new(impulse.x, 0.0, impulse.z).length();
            assert!((horizontal - b.bounce_force).abs() < 1e-4);
            assert!((impulse.y - horizontal * BUMPER_LIFT_RATIO).abs() < 1e-4);
        }
    }

    #[test]
    fn contact_at_center_pushes_up_table() {
        let b = bumper();
        let impulse = b.impulse(b.center);
        assert!(impulse.z < 0.0);
        assert!(impulse.is_finite());
    }
}
