use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

use pinball_core::physics::{ContactEvent, TriggerEvent, TriggerPhase};
use pinball_core::session::SessionHost;
use pinball_core::table::{contact_point, Table};

use super::bridge::{body_of, RapierBridge};
use super::core::{PresentationState, Settings};
use super::input::PlayerInput;
use super::{FixedSet, UpdateSet};

pub struct TablePlugin;

#[derive(Resource, Default)]
pub(crate) struct TableRuntime {
    pub(crate) table: Option<Table>,
}

#[derive(Resource, Default)]
pub(crate) struct Session(pub(crate) SessionHost);

impl Plugin for TablePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TableRuntime>()
            .init_resource::<Session>()
            .add_systems(Startup, setup_table)
            .add_systems(
                FixedUpdate,
                (clear_forces, simulate_table)
                    .chain()
                    .in_set(FixedSet::Simulate),
            )
            .add_systems(FixedUpdate, route_collisions.in_set(FixedSet::PostPhysics))
            .add_systems(
                Update,
                (handle_reset, frame_tick)
                    .chain()
                    .after(UpdateSet::Input)
                    .before(UpdateSet::Visuals),
            )
            .add_systems(Last, teardown_on_exit);
    }
}

fn setup_table(
    mut bridge: RapierBridge,
    settings: Res<Settings>,
    mut runtime: ResMut<TableRuntime>,
    mut session: ResMut<Session>,
    mut presentation: ResMut<PresentationState>,
) {
    let config = &settings.0;
    let mut table = Table::build(config, &mut bridge);
    let game = session.0.open(config.session.clone());
    table.spawn_ball(game, &mut bridge, &mut *presentation);
    runtime.table = Some(table);
}

fn clear_forces(mut bridge: RapierBridge) {
    bridge.clear_forces();
}

fn simulate_table(
    time: Res<Time<Fixed>>,
    input: Res<PlayerInput>,
    mut bridge: RapierBridge,
    mut runtime: ResMut<TableRuntime>,
    mut session: ResMut<Session>,
    mut presentation: ResMut<PresentationState>,
) {
    let (Some(table), Some(game)) = (runtime.table.as_mut(), session.0.session_mut()) else {
        return;
    };
    table.fixed_tick(
        time.delta_secs(),
        &input.state,
        game,
        &mut bridge,
        &mut *presentation,
    );
}

fn route_collisions(
    mut collision_events: MessageReader<CollisionEvent>,
    q_transforms: Query<&Transform>,
    settings: Res<Settings>,
    mut bridge: RapierBridge,
    mut runtime: ResMut<TableRuntime>,
    mut session: ResMut<Session>,
    mut presentation: ResMut<PresentationState>,
) {
    let (Some(table), Some(game)) = (runtime.table.as_mut(), session.0.session_mut()) else {
        collision_events.clear();
        return;
    };
    let ball_radius = settings.0.ball.radius;

    for event in collision_events.read() {
        let (a, b, flags, phase) = match event {
            CollisionEvent::Started(a, b, flags) => (*a, *b, *flags, TriggerPhase::Enter),
            CollisionEvent::Stopped(a, b, flags) => (*a, *b, *flags, TriggerPhase::Exit),
        };

        if flags.contains(CollisionEventFlags::SENSOR) {
            let trigger = TriggerEvent {
                phase,
                a: body_of(a),
                b: body_of(b),
            };
            table.handle_trigger(&trigger, game, &mut bridge, &mut *presentation);
            continue;
        }

        if phase != TriggerPhase::Enter {
            continue;
        }
        let (ball, other) = if table.is_ball(body_of(a)) { (a, b) } else { (b, a) };
        let (Ok(ball_tf), Ok(other_tf)) = (q_transforms.get(ball), q_transforms.get(other)) else {
            continue;
        };
        let contact = ContactEvent {
            a: body_of(ball),
            b: body_of(other),
            point: contact_point(ball_tf.translation, other_tf.translation, ball_radius),
        };
        table.handle_contact(&contact, game, &mut bridge, &mut *presentation);
    }
}

fn handle_reset(
    mut input: ResMut<PlayerInput>,
    mut bridge: RapierBridge,
    mut runtime: ResMut<TableRuntime>,
    mut session: ResMut<Session>,
    mut presentation: ResMut<PresentationState>,
) {
    if !input.reset_requested {
        return;
    }
    input.reset_requested = false;

    let (Some(table), Some(game)) = (runtime.table.as_mut(), session.0.session_mut()) else {
        return;
    };
    table.reset(game, &mut bridge, &mut *presentation);
    presentation.target_hits = 0;
}

fn frame_tick(time: Res<Time>, mut runtime: ResMut<TableRuntime>) {
    if let Some(table) = runtime.table.as_mut() {
        table.frame_tick(time.delta_secs());
    }
}

fn teardown_on_exit(mut exits: MessageReader<AppExit>, mut session: ResMut<Session>) {
    if exits.read().next().is_some() {
        session.0.teardown();
    }
}
