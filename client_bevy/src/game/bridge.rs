//! Rapier-backed implementation of the core's physics interface.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use pinball_core::physics::{
    BodyDesc, BodyId, HingeBodies, HingeDesc, Motion, MotorCommand, PhysicsWorld, Shape, Surface,
};

use crate::constants::{friction, restitution, MOTOR_DAMPING};

/// Rendering hints picked up by the visuals plugin.
#[derive(Component, Clone, Copy)]
pub(crate) struct BodyVisual {
    pub(crate) surface: Surface,
    pub(crate) shape: Shape,
}

#[derive(Component)]
pub(crate) struct BallBody;

pub(crate) fn body_of(entity: Entity) -> BodyId {
    BodyId(entity.to_bits())
}

pub(crate) fn entity_of(body: BodyId) -> Entity {
    Entity::from_bits(body.0)
}

#[derive(SystemParam)]
pub(crate) struct RapierBridge<'w, 's> {
    commands: Commands<'w, 's>,
    velocities: Query<'w, 's, &'static Velocity>,
    forces: Query<'w, 's, &'static mut ExternalForce>,
    impulses: Query<'w, 's, &'static mut ExternalImpulse>,
    joints: Query<'w, 's, &'static mut ImpulseJoint>,
}

impl RapierBridge<'_, '_> {
    /// Forces are per-tick in the core; rapier keeps them until replaced.
    pub(crate) fn clear_forces(&mut self) {
        for mut force in &mut self.forces {
            force.force = Vec3::ZERO;
            force.torque = Vec3::ZERO;
        }
    }

    fn spawn(&mut self, desc: &BodyDesc) -> Entity {
        let transform = Transform::from_translation(desc.position).with_rotation(desc.rotation);
        let mut entity = self.commands.spawn((
            Name::new(desc.label.clone()),
            transform,
            Visibility::default(),
            collider_for(desc.shape),
            Restitution::coefficient(restitution(desc.surface)),
            Friction::coefficient(friction(desc.surface)),
        ));

        match desc.motion {
            Motion::Fixed => {
                entity.insert(RigidBody::Fixed);
            }
            Motion::Dynamic {
                mass,
                linear_damping,
                angular_damping,
                spin_only,
            } => {
                entity.insert((
                    RigidBody::Dynamic,
                    ColliderMassProperties::Mass(mass),
                    Damping {
                        linear_damping,
                        angular_damping,
                    },
                    Velocity::zero(),
                    ExternalForce::default(),
                    ExternalImpulse::default(),
                ));
                if spin_only {
                    entity.insert(
                        LockedAxes::TRANSLATION_LOCKED
                            | LockedAxes::ROTATION_LOCKED_X
                            | LockedAxes::ROTATION_LOCKED_Z,
                    );
                }
            }
        }

        if desc.sensor {
            entity.insert((Sensor, ActiveEvents::COLLISION_EVENTS));
        }
        if desc.surface == Surface::Ball {
            entity.insert((BallBody, Ccd::enabled(), ActiveEvents::COLLISION_EVENTS));
        }
        if desc.visible {
            entity.insert(BodyVisual {
                surface: desc.surface,
                shape: desc.shape,
            });
        }

        entity.id()
    }
}

impl PhysicsWorld for RapierBridge<'_, '_> {
    fn spawn_body(&mut self, desc: &BodyDesc) -> BodyId {
        body_of(self.spawn(desc))
    }

    fn spawn_hinge(&mut self, desc: &HingeDesc) -> HingeBodies {
        let anchor = self
            .commands
            .spawn((
                Name::new(format!("{}_Pivot", desc.paddle.label)),
                Transform::from_translation(desc.anchor),
                RigidBody::Fixed,
            ))
            .id();

        let paddle = self.spawn(&desc.paddle);
        let local_pivot = desc.paddle.rotation.inverse() * (desc.anchor - desc.paddle.position);
        let joint = RevoluteJointBuilder::new(desc.axis)
            .local_anchor1(Vec3::ZERO)
            .local_anchor2(local_pivot)
            .limits([
                desc.min_angle_deg.to_radians(),
                desc.max_angle_deg.to_radians(),
            ])
            .motor_velocity(desc.motor.target_velocity.to_radians(), MOTOR_DAMPING)
            .motor_max_force(desc.motor.max_force);
        self.commands
            .entity(paddle)
            .insert(ImpulseJoint::new(anchor, joint));

        HingeBodies {
            anchor: body_of(anchor),
            paddle: body_of(paddle),
        }
    }

    fn despawn(&mut self, body: BodyId) {
        if let Ok(mut entity) = self.commands.get_entity(entity_of(body)) {
            entity.try_despawn();
        }
    }

    fn linear_velocity(&self, body: BodyId) -> Option<Vec3> {
        self.velocities.get(entity_of(body)).ok().map(|v| v.linvel)
    }

    fn apply_force(&mut self, body: BodyId, force: Vec3) {
        if let Ok(mut ext) = self.forces.get_mut(entity_of(body)) {
            ext.force += force;
        }
    }

    fn apply_impulse(&mut self, body: BodyId, impulse: Vec3) {
        if let Ok(mut ext) = self.impulses.get_mut(entity_of(body)) {
            ext.impulse += impulse;
        }
    }

    fn apply_torque(&mut self, body: BodyId, torque: Vec3) {
        if let Ok(mut ext) = self.forces.get_mut(entity_of(body)) {
            ext.torque += torque;
        }
    }

    fn set_motor(&mut self, hinge: BodyId, motor: MotorCommand) {
        let Ok(mut joint) = self.joints.get_mut(entity_of(hinge)) else {
            return;
        };
        if let TypedJoint::RevoluteJoint(revolute) = &mut joint.data {
            revolute
                .set_motor_velocity(motor.target_velocity.to_radians(), MOTOR_DAMPING)
                .set_motor_max_force(motor.max_force);
        }
    }

    fn set_collider_enabled(&mut self, body: BodyId, enabled: bool) {
        let Ok(mut entity) = self.commands.get_entity(entity_of(body)) else {
            return;
        };
        if enabled {
            entity.try_remove::<ColliderDisabled>();
        } else {
            entity.try_insert(ColliderDisabled);
        }
    }
}

fn collider_for(shape: Shape) -> Collider {
    match shape {
        Shape::Cuboid { half_extents } => {
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }
        Shape::Sphere { radius } => Collider::ball(radius),
        Shape::Cylinder {
            half_height,
            radius,
        } => Collider::cylinder(half_height, radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_ids_map_back_to_entities() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        assert_eq!(entity_of(body_of(entity)), entity);
    }
}
