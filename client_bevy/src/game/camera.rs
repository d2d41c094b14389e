use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

use crate::constants::{CAMERA_OFFSET, CAMERA_SMOOTH_SPEED};

use super::bridge::entity_of;
use super::core::{PresentationState, Settings};
use super::UpdateSet;

pub struct CameraPlugin;

#[derive(Component)]
struct MainCamera;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_ball.in_set(UpdateSet::Visuals));
    }
}

/// One smoothing step toward `desired`; `speed * dt` is the lerp factor.
pub(crate) fn follow_step(current: Vec3, desired: Vec3, speed: f32, dt: f32) -> Vec3 {
    current.lerp(desired, (speed * dt).clamp(0.0, 1.0))
}

fn setup_camera(mut commands: Commands, settings: Res<Settings>) {
    let table = &settings.0.table;
    let center = Vec3::new(0.0, 0.0, -table.height * 0.5);
    commands.spawn((
        Camera3d::default(),
        Tonemapping::None,
        Msaa::Sample4,
        Transform::from_translation(center + Vec3::new(0.0, table.height, table.height * 0.6))
            .looking_at(center, Vec3::Y),
        MainCamera,
    ));
}

fn follow_ball(
    time: Res<Time>,
    presentation: Res<PresentationState>,
    q_targets: Query<&GlobalTransform, Without<MainCamera>>,
    mut q_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(ball) = presentation.follow else {
        return;
    };
    let Ok(target) = q_targets.get(entity_of(ball)) else {
        return;
    };
    let Ok(mut camera) = q_camera.single_mut() else {
        return;
    };

    let target = target.translation();
    camera.translation = follow_step(
        camera.translation,
        target + CAMERA_OFFSET,
        CAMERA_SMOOTH_SPEED,
        time.delta_secs(),
    );
    camera.look_at(target, Vec3::Y);
}
