//! Interface to the rigid-body simulator.
//!
//! The core never integrates motion itself. It describes bodies, receives
//! contact and trigger events, and pushes forces, impulses and motor targets
//! back through [`PhysicsWorld`].

mod recording;

pub use recording::{RecordedBody, RecordingWorld};

use glam::{Quat, Vec3};

/// Opaque handle to a body owned by the physics world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
    /// Axis along local Y
    Cylinder { half_height: f32, radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Kinematic: never moved by forces, no dynamic mass.
    Fixed,
    Dynamic {
        mass: f32,
        linear_damping: f32,
        angular_damping: f32,
        /// Translation locked, rotation only about the vertical axis
        spin_only: bool,
    },
}

/// What a body is, for presentation purposes (mesh, colour, visibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Playfield,
    Wall,
    Rim,
    Ramp,
    LaneDivider,
    Ceiling,
    Bumper,
    Target,
    Spinner,
    FlipperPivot,
    Flipper,
    Drain,
    Ball,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyDesc {
    pub label: String,
    pub surface: Surface,
    pub motion: Motion,
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Quat,
    /// Trigger volume: reports overlaps, no contact response
    pub sensor: bool,
    pub visible: bool,
}

impl BodyDesc {
    pub fn is_fixed(&self) -> bool {
        matches!(self.motion, Motion::Fixed)
    }
}

/// Hinge motor target. Velocity in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorCommand {
    pub target_velocity: f32,
    pub max_force: f32,
}

/// Single-axis hinge between a fixed anchor and a dynamic paddle.
#[derive(Debug, Clone, PartialEq)]
pub struct HingeDesc {
    pub anchor: Vec3,
    pub axis: Vec3,
    pub paddle: BodyDesc,
    pub min_angle_deg: f32,
    pub max_angle_deg: f32,
    pub motor: MotorCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HingeBodies {
    pub anchor: BodyId,
    /// The body the motor drives
    pub paddle: BodyId,
}

/// Solid contact between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub a: BodyId,
    pub b: BodyId,
    pub point: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Enter,
    Exit,
}

/// Overlap start/stop between a trigger volume and another body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    pub phase: TriggerPhase,
    pub a: BodyId,
    pub b: BodyId,
}

/// Operations the core issues into the simulator.
///
/// Calls naming a body that no longer exists must be ignored.
pub trait PhysicsWorld {
    fn spawn_body(&mut self, desc: &BodyDesc) -> BodyId;

    fn spawn_hinge(&mut self, desc: &HingeDesc) -> HingeBodies;

    fn despawn(&mut self, body: BodyId);

    fn linear_velocity(&self, body: BodyId) -> Option<Vec3>;

    /// Continuous force for the current tick
    fn apply_force(&mut self, body: BodyId, force: Vec3);

    fn apply_impulse(&mut self, body: BodyId, impulse: Vec3);

    /// Continuous torque for the current tick
    fn apply_torque(&mut self, body: BodyId, torque: Vec3);

    fn set_motor(&mut self, hinge: BodyId, motor: MotorCommand);

    fn set_collider_enabled(&mut self, body: BodyId, enabled: bool);
}
