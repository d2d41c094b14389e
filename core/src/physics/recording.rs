use std::collections::BTreeMap;

use glam::Vec3;

use super::{BodyDesc, BodyId, HingeBodies, HingeDesc, MotorCommand, PhysicsWorld, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBody {
    pub desc: BodyDesc,
    pub collider_enabled: bool,
    pub velocity: Vec3,
}

/// In-memory world that keeps body descriptions and logs every command.
///
/// Nothing moves on its own: velocities change only through `set_velocity`.
/// Used to drive the core headlessly.
#[derive(Debug, Default)]
pub struct RecordingWorld {
    next_id: u64,
    bodies: BTreeMap<BodyId, RecordedBody>,
    pub forces: Vec<(BodyId, Vec3)>,
    pub impulses: Vec<(BodyId, Vec3)>,
    pub torques: Vec<(BodyId, Vec3)>,
    pub motors: Vec<(BodyId, MotorCommand)>,
    pub hinges: Vec<(HingeDesc, HingeBodies)>,
    pub despawned: Vec<BodyId>,
}

impl RecordingWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self, id: BodyId) -> Option<&RecordedBody> {
        self.bodies.get(&id)
    }

    pub fn is_alive(&self, id: BodyId) -> bool {
        self.bodies.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies_with(&self, surface: Surface) -> Vec<BodyId> {
        self.bodies
            .iter()
            .filter(|(_, b)| b.desc.surface == surface)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec3) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.velocity = velocity;
        }
    }

    /// Drop logged commands, keep bodies.
    pub fn clear_commands(&mut self) {
        self.forces.clear();
        self.impulses.clear();
        self.torques.clear();
        self.motors.clear();
    }

    fn insert(&mut self, desc: BodyDesc) -> BodyId {
        self.next_id += 1;
        let id = BodyId(self.next_id);
        self.bodies.insert(
            id,
            RecordedBody {
                desc,
                collider_enabled: true,
                velocity: Vec3::ZERO,
            },
        );
        id
    }
}

impl PhysicsWorld for RecordingWorld {
    fn spawn_body(&mut self, desc: &BodyDesc) -> BodyId {
        self.insert(desc.clone())
    }

    fn spawn_hinge(&mut self, desc: &HingeDesc) -> HingeBodies {
        let anchor = self.insert(BodyDesc {
            label: format!("{}_Pivot", desc.paddle.label),
            surface: Surface::FlipperPivot,
            motion: super::Motion::Fixed,
            shape: super::Shape::Sphere { radius: 0.05 },
            position: desc.anchor,
            rotation: glam::Quat::IDENTITY,
            sensor: false,
            visible: false,
        });
        let paddle = self.insert(desc.paddle.clone());
        let bodies = HingeBodies { anchor, paddle };
        self.hinges.push((desc.clone(), bodies));
        self.motors.push((paddle, desc.motor));
        bodies
    }

    fn despawn(&mut self, body: BodyId) {
        if self.bodies.remove(&body).is_some() {
            self.despawned.push(body);
        }
    }

    fn linear_velocity(&self, body: BodyId) -> Option<Vec3> {
        self.bodies.get(&body).map(|b| b.velocity)
    }

    fn apply_force(&mut self, body: BodyId, force: Vec3) {
        if self.is_alive(body) {
            self.forces.push((body, force));
        }
    }

    fn apply_impulse(&mut self, body: BodyId, impulse: Vec3) {
        if self.is_alive(body) {
            self.impulses.push((body, impulse));
        }
    }

    fn apply_torque(&mut self, body: BodyId, torque: Vec3) {
        if self.is_alive(body) {
            self.torques.push((body, torque));
        }
    }

    fn set_motor(&mut self, hinge: BodyId, motor: MotorCommand) {
        if self.is_alive(hinge) {
            self.motors.push((hinge, motor));
        }
    }

    fn set_collider_enabled(&mut self, body: BodyId, enabled: bool) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.collider_enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Motion, Shape};
    use glam::Quat;

    fn wall() -> BodyDesc {
        BodyDesc {
            label: "Wall".to_string(),
            surface: Surface::Wall,
            motion: Motion::Fixed,
            shape: Shape::Cuboid {
                half_extents: Vec3::ONE,
            },
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            sensor: false,
            visible: true,
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut world = RecordingWorld::new();
        let a = world.spawn_body(&wall());
        let b = world.spawn_body(&wall());
        assert_ne!(a, b);
        assert_eq!(world.live_count(), 2);
    }

    #[test]
    fn commands_to_despawned_bodies_are_dropped() {
        let mut world = RecordingWorld::new();
        let a = world.spawn_body(&wall());
        world.despawn(a);
        world.apply_impulse(a, Vec3::X);
        world.apply_force(a, Vec3::X);
        assert!(world.impulses.is_empty());
        assert!(world.forces.is_empty());
        assert_eq!(world.linear_velocity(a), None);
    }

    #[test]
    fn double_despawn_is_recorded_once() {
        let mut world = RecordingWorld::new();
        let a = world.spawn_body(&wall());
        world.despawn(a);
        world.despawn(a);
        assert_eq!(world.despawned, vec![a]);
    }
}
