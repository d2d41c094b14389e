use bevy::prelude::*;
use bevy_rapier3d::render::DebugRenderContext;

use pinball_core::handlers::SteeringInput;
use pinball_core::input::InputState;

use super::UpdateSet;

pub struct InputPlugin;

#[derive(Resource, Default)]
pub(crate) struct PlayerInput {
    pub(crate) state: InputState,
    pub(crate) reset_requested: bool,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

pub(crate) fn sample_input(keys: &ButtonInput<KeyCode>) -> InputState {
    let any = |codes: &[KeyCode]| keys.any_pressed(codes.iter().copied());
    InputState {
        left_flipper: keys.pressed(KeyCode::KeyZ),
        right_flipper: keys.pressed(KeyCode::KeyX),
        steering: SteeringInput {
            forward: any(&[KeyCode::KeyW, KeyCode::ArrowUp]),
            back: any(&[KeyCode::KeyS, KeyCode::ArrowDown]),
            left: any(&[KeyCode::KeyA, KeyCode::ArrowLeft]),
            right: any(&[KeyCode::KeyD, KeyCode::ArrowRight]),
        },
        launch: keys.pressed(KeyCode::Space),
    }
}

fn input_system(
    mut input: ResMut<PlayerInput>,
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
    debug_render: Option<ResMut<DebugRenderContext>>,
) {
    input.state = sample_input(&keys);
    if keys.just_pressed(KeyCode::KeyR) {
        input.reset_requested = true;
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
    if keys.just_pressed(KeyCode::F1) {
        if let Some(mut debug_render) = debug_render {
            debug_render.enabled = !debug_render.enabled;
        }
    }
}
