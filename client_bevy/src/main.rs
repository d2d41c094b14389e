mod constants;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_rapier3d::prelude::*;

use constants::{CONFIG_ENV, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{
    load_config, CameraPlugin, CorePlugin, HudPlugin, InputPlugin, TablePlugin, VisualsPlugin,
};

fn main() {
    let config = match load_config(std::env::var(CONFIG_ENV).ok().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Procedural Pinball".to_string(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins(RapierDebugRenderPlugin {
            enabled: false,
            ..default()
        })
        .add_plugins(CorePlugin { config })
        .add_plugins(InputPlugin)
        .add_plugins(TablePlugin)
        .add_plugins(VisualsPlugin)
        .add_plugins(CameraPlugin)
        .add_plugins(HudPlugin)
        .run();
}
