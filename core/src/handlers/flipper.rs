use crate::config::FlipperConfig;
use crate::geometry::FlipperSide;
use crate::physics::{BodyId, MotorCommand};

/// Drives one flipper hinge toward its active or rest velocity.
///
/// Angle limits live on the hinge itself; the actuator only picks the
/// motor target and reasserts its strength every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipperActuator {
    pub side: FlipperSide,
    pub paddle: BodyId,
    pub motor_strength: f32,
    pub active_speed: f32,
    pub rest_speed: f32,
}

impl FlipperActuator {
    pub fn new(side: FlipperSide, paddle: BodyId, config: &FlipperConfig) -> Self {
        Self {
            side,
            paddle,
            motor_strength: config.motor_strength,
            active_speed: config.active_speed,
            rest_speed: config.rest_speed,
        }
    }

    pub fn rest_command(&self) -> MotorCommand {
        MotorCommand {
            target_velocity: self.rest_speed,
            max_force: self.motor_strength,
        }
    }

    pub fn command(&self, held: bool) -> MotorCommand {
        let target_velocity = if held {
            self.active_speed
        } else {
            self.rest_speed
        };
        MotorCommand {
            target_velocity,
            max_force: self.motor_strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actuator(side: FlipperSide) -> FlipperActuator {
        FlipperActuator::new(side, BodyId(1), &FlipperConfig::default())
    }

    #[test]
    fn held_key_drives_active_speed() {
        for side in [FlipperSide::Left, FlipperSide::Right] {
            let cmd = actuator(side).command(true);
            assert_eq!(cmd.target_velocity, 1000.0);
            assert_eq!(cmd.max_force, 800.0);
        }
    }

    #[test]
    fn released_key_drives_rest_speed() {
        let a = actuator(FlipperSide::Left);
        assert_eq!(a.command(false), a.rest_command());
        assert_eq!(a.command(false).target_velocity, -200.0);
    }

    #[test]
    fn strength_is_part_of_every_command() {
        let a = actuator(FlipperSide::Right);
        assert_eq!(a.command(true).max_force, a.command(false).max_force);
    }
}
