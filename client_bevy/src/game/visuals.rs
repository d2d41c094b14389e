use std::collections::HashMap;

use bevy::prelude::*;

use pinball_core::physics::{BodyId, Shape, Surface};

use crate::constants::{color_from_hex, surface_color};

use super::bridge::{body_of, BodyVisual};
use super::table::TableRuntime;
use super::UpdateSet;

pub struct VisualsPlugin;

/// Mesh child of a target body; scaled and spun by the coin state.
#[derive(Component)]
struct CoinMesh {
    body: BodyId,
}

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (attach_body_meshes, update_coin_meshes)
                .chain()
                .in_set(UpdateSet::Visuals),
        );
    }
}

pub(crate) fn mesh_for(shape: Shape) -> Mesh {
    match shape {
        Shape::Cuboid { half_extents } => Cuboid::from_size(half_extents * 2.0).into(),
        Shape::Sphere { radius } => Sphere::new(radius).mesh().uv(32, 18),
        Shape::Cylinder {
            half_height,
            radius,
        } => Cylinder::new(radius, half_height * 2.0).into(),
    }
}

fn material_for(surface: Surface) -> StandardMaterial {
    let base_color = color_from_hex(surface_color(surface));
    match surface {
        Surface::Bumper | Surface::Target | Surface::Spinner => StandardMaterial {
            base_color,
            emissive: base_color.to_linear() * 0.6,
            ..default()
        },
        Surface::Ball => StandardMaterial {
            base_color,
            metallic: 0.9,
            perceptual_roughness: 0.2,
            ..default()
        },
        _ => StandardMaterial {
            base_color,
            perceptual_roughness: 0.8,
            ..default()
        },
    }
}

fn attach_body_meshes(
    mut commands: Commands,
    q_new: Query<(Entity, &BodyVisual), Added<BodyVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, visual) in &q_new {
        let mesh = meshes.add(mesh_for(visual.shape));
        let material = materials.add(material_for(visual.surface));
        commands.entity(entity).with_children(|parent| {
            let mut child = parent.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
                Visibility::default(),
            ));
            if visual.surface == Surface::Target {
                child.insert(CoinMesh {
                    body: body_of(entity),
                });
            }
        });
    }
}

fn update_coin_meshes(
    runtime: Res<TableRuntime>,
    mut q_coins: Query<(&CoinMesh, &mut Transform, &mut Visibility)>,
) {
    let Some(table) = runtime.table.as_ref() else {
        return;
    };
    let coins: HashMap<BodyId, _> = table
        .coin_visuals()
        .into_iter()
        .map(|coin| (coin.body, coin))
        .collect();

    for (mesh, mut transform, mut visibility) in &mut q_coins {
        let Some(coin) = coins.get(&mesh.body) else {
            continue;
        };
        transform.scale = Vec3::splat(coin.scale);
        transform.rotation = Quat::from_rotation_z(coin.spin_degrees.to_radians());
        *visibility = if coin.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
