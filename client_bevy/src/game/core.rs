use bevy::prelude::*;
use bevy_rapier3d::prelude::{PhysicsSet, RapierConfiguration, TimestepMode};

use pinball_core::config::GameConfig;
use pinball_core::physics::BodyId;
use pinball_core::presentation::PresentationSink;

use crate::constants::{color_from_hex, Colors, GRAVITY_Y, PHYSICS_DT, PHYSICS_SUBSTEPS};

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Visuals,
}

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    Simulate,
    PostPhysics,
}

pub struct CorePlugin {
    pub config: GameConfig,
}

#[derive(Resource, Clone)]
pub(crate) struct Settings(pub(crate) GameConfig);

/// Notifications from the core, read by the HUD and camera.
#[derive(Resource, Default)]
pub(crate) struct PresentationState {
    pub(crate) score: u64,
    pub(crate) target_hits: u32,
    pub(crate) coin_pulses: u32,
    pub(crate) follow: Option<BodyId>,
}

impl PresentationSink for PresentationState {
    fn on_score_changed(&mut self, score: u64) {
        self.score = score;
    }

    fn on_target_hit(&mut self, position: Vec3) {
        self.target_hits += 1;
        debug!("Target hit at {:?}", position);
    }

    fn on_coin_pulse(&mut self, _position: Vec3) {
        self.coin_pulses += 1;
    }

    fn on_ball_ready(&mut self, ball: BodyId) {
        self.follow = Some(ball);
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Settings(self.config.clone()))
            .init_resource::<PresentationState>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .insert_resource(Time::<Fixed>::from_seconds(PHYSICS_DT as f64))
            .insert_resource(TimestepMode::Fixed {
                dt: PHYSICS_DT,
                substeps: PHYSICS_SUBSTEPS,
            })
            .configure_sets(Update, (UpdateSet::Input, UpdateSet::Visuals).chain())
            .configure_sets(
                FixedUpdate,
                (FixedSet::Simulate, FixedSet::PostPhysics).chain(),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::Simulate.before(PhysicsSet::SyncBackend),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::PostPhysics.after(PhysicsSet::Writeback),
            )
            .add_systems(Startup, (configure_rapier_gravity, setup_lights));
    }
}

/// Read the config named by `path`, or the defaults when unset.
pub fn load_config(path: Option<&str>) -> Result<GameConfig, String> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path, e))?;
            GameConfig::from_json(&json)?
        }
        None => GameConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn configure_rapier_gravity(mut q_config: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q_config {
        cfg.gravity = Vec3::new(0.0, GRAVITY_Y, 0.0);
    }
}

fn setup_lights(mut commands: Commands, settings: Res<Settings>) {
    let table = &settings.0.table;
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-4.0, 12.0, 4.0)
            .looking_at(Vec3::new(0.0, 0.0, -table.height * 0.5), Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            range: table.height * 2.0,
            ..default()
        },
        Transform::from_xyz(0.0, table.wall_height + 4.0, -table.height * 0.5),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let err = load_config(Some("/nonexistent/pinball.json")).unwrap_err();
        assert!(err.contains("cannot read"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = std::env::temp_dir().join("pinball_client_config_test.json");
        std::fs::write(&dir, r#"{"table":{"flipperGap":20.0}}"#).unwrap();
        let result = load_config(dir.to_str());
        let _ = std::fs::remove_file(&dir);
        assert!(result.is_err());
    }

    #[test]
    fn sink_tracks_score_and_follow_target() {
        let mut state = PresentationState::default();
        state.on_score_changed(150);
        state.on_ball_ready(BodyId(3));
        state.on_target_hit(Vec3::ZERO);
        assert_eq!(state.score, 150);
        assert_eq!(state.follow, Some(BodyId(3)));
        assert_eq!(state.target_hits, 1);
    }
}
