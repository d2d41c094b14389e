use glam::Vec3;
use pinball_core::config::GameConfig;
use pinball_core::input::InputState;
use pinball_core::physics::{
    BodyId, ContactEvent, PhysicsWorld, RecordingWorld, Surface, TriggerEvent, TriggerPhase,
};
use pinball_core::presentation::RecordingSink;
use pinball_core::session::{SessionHost, SessionPhase};
use pinball_core::table::Table;

const DT: f32 = 1.0 / 120.0;

struct Game {
    world: RecordingWorld,
    sink: RecordingSink,
    host: SessionHost,
    table: Table,
}

impl Game {
    fn start(config: GameConfig) -> Self {
        let mut world = RecordingWorld::new();
        let mut sink = RecordingSink::new();
        let mut host = SessionHost::new();
        let mut table = Table::build(&config, &mut world);
        let session = host.open(config.session.clone());
        table.spawn_ball(session, &mut world, &mut sink);
        Self {
            world,
            sink,
            host,
            table,
        }
    }

    fn ball(&self) -> Option<BodyId> {
        self.host.session().and_then(|s| s.current_ball())
    }

    fn score(&self) -> u64 {
        self.host.session().map_or(0, |s| s.score())
    }

    fn step(&mut self, input: &InputState) {
        let session = self.host.session_mut().unwrap();
        self.table
            .fixed_tick(DT, input, session, &mut self.world, &mut self.sink);
        self.table.frame_tick(DT);
    }

    fn idle(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step(&InputState::default());
        }
    }

    fn trigger(&mut self, ball: BodyId, volume: BodyId) {
        let session = self.host.session_mut().unwrap();
        self.table.handle_trigger(
            &TriggerEvent {
                phase: TriggerPhase::Enter,
                a: volume,
                b: ball,
            },
            session,
            &mut self.world,
            &mut self.sink,
        );
    }

    fn contact(&mut self, ball: BodyId, other: BodyId) {
        let point = self.world.body(ball).unwrap().desc.position;
        let session = self.host.session_mut().unwrap();
        self.table.handle_contact(
            &ContactEvent {
                a: ball,
                b: other,
                point,
            },
            session,
            &mut self.world,
            &mut self.sink,
        );
    }

    fn drain(&self) -> BodyId {
        self.world.bodies_with(Surface::Drain)[0]
    }
}

#[test]
fn bumper_then_spinner_scores_accumulate() {
    let mut game = Game::start(GameConfig::default());
    let ball = game.ball().unwrap();
    let bumper = game.world.bodies_with(Surface::Bumper)[0];
    let spinner = game.world.bodies_with(Surface::Spinner)[0];

    game.contact(ball, bumper);
    game.contact(ball, spinner);

    assert_eq!(game.score(), 110);
    assert_eq!(game.sink.scores(), vec![100, 110]);
}

#[test]
fn drained_ball_is_destroyed_then_replaced_on_schedule() {
    let mut game = Game::start(GameConfig::default());
    let first = game.ball().unwrap();
    let drain = game.drain();

    game.trigger(first, drain);
    assert_eq!(game.ball(), None);

    // 0.5 s at 120 Hz
    game.idle(59);
    assert!(game.world.is_alive(first));
    game.idle(1);
    assert!(!game.world.is_alive(first));

    // a further 1.0 s
    game.idle(119);
    assert_eq!(game.ball(), None);
    game.idle(1);

    let second = game.ball().unwrap();
    assert_ne!(first, second);
    assert_eq!(game.sink.balls_ready(), vec![first, second]);
    assert_eq!(
        game.world.body(second).unwrap().desc.position,
        game.table.layout().ball_spawn
    );
}

#[test]
fn no_drain_accepted_while_sequence_pending() {
    let mut game = Game::start(GameConfig::default());
    let first = game.ball().unwrap();
    let drain = game.drain();

    game.trigger(first, drain);
    game.idle(10);
    game.trigger(first, drain);
    game.idle(70);
    game.trigger(first, drain);

    let phase = game.host.session().unwrap().phase();
    assert!(matches!(phase, SessionPhase::WaitingToSpawn { .. }));
    game.idle(110);
    assert!(game.ball().is_some());
    assert_eq!(game.sink.balls_ready().len(), 2);
}

#[test]
fn foreign_body_in_drain_changes_nothing() {
    let mut game = Game::start(GameConfig::default());
    let ball = game.ball().unwrap();
    let desc = game.world.body(ball).unwrap().desc.clone();
    let stray = game.world.spawn_body(&desc);
    let drain = game.drain();

    game.trigger(stray, drain);
    game.idle(400);

    assert_eq!(game.ball(), Some(ball));
    assert!(game.world.is_alive(ball));
    assert_eq!(game.host.session().unwrap().phase(), SessionPhase::InPlay);
}

#[test]
fn flipper_motor_follows_key() {
    let mut game = Game::start(GameConfig::default());
    let left = game.table.flippers()[0].bodies.paddle;
    let held = InputState {
        left_flipper: true,
        ..Default::default()
    };

    let last_left = |world: &RecordingWorld| {
        world
            .motors
            .iter()
            .rev()
            .find(|(id, _)| *id == left)
            .map(|(_, m)| m.target_velocity)
    };

    game.idle(1);
    assert_eq!(last_left(&game.world), Some(-200.0));
    game.step(&held);
    assert_eq!(last_left(&game.world), Some(1000.0));
    game.step(&InputState::default());
    assert_eq!(last_left(&game.world), Some(-200.0));
}

#[test]
fn target_rearms_after_respawn_time() {
    let mut game = Game::start(GameConfig::default());
    let ball = game.ball().unwrap();
    let target = game.world.bodies_with(Surface::Target)[0];

    game.trigger(ball, target);
    assert_eq!(game.score(), 50);

    // 3 s at 120 Hz, minus one tick
    for _ in 0..359 {
        game.idle(1);
        game.trigger(ball, target);
    }
    assert_eq!(game.score(), 50);
    assert!(!game.world.body(target).unwrap().collider_enabled);

    game.idle(1);
    assert!(game.world.body(target).unwrap().collider_enabled);
    game.trigger(ball, target);
    assert_eq!(game.score(), 100);
}

#[test]
fn coin_pulse_settles_back_to_rest() {
    let mut game = Game::start(GameConfig::default());
    let ball = game.ball().unwrap();
    let target = game.world.bodies_with(Surface::Target)[0];

    game.trigger(ball, target);
    game.idle(10);
    let pulsing = game
        .table
        .coin_visuals()
        .into_iter()
        .find(|v| v.body == target)
        .unwrap();
    assert!(pulsing.scale > 1.0);

    game.idle(30);
    let settled = game
        .table
        .coin_visuals()
        .into_iter()
        .find(|v| v.body == target)
        .unwrap();
    assert_eq!(settled.scale, 1.0);
}

#[test]
fn rebuild_leaves_only_new_layout_alive() {
    let mut game = Game::start(GameConfig::default());
    let old_ids = game.table.body_ids();

    let mut bigger = GameConfig::default();
    bigger.table.width = 14.0;
    bigger.table.bumper_count = 7;
    game.table.rebuild(&bigger, &mut game.world);

    for id in &old_ids {
        assert!(!game.world.is_alive(*id));
    }
    let new_ids = game.table.body_ids();
    assert_eq!(game.world.live_count(), new_ids.len());
    assert_eq!(game.table.layout().bumpers.len(), 7);
}

#[test]
fn reset_mid_drain_cancels_pending_sequence() {
    let mut game = Game::start(GameConfig::default());
    let first = game.ball().unwrap();
    let drain = game.drain();
    let bumper = game.world.bodies_with(Surface::Bumper)[0];
    game.contact(first, bumper);

    game.trigger(first, drain);
    game.idle(20);

    {
        let session = game.host.session_mut().unwrap();
        game.table.reset(session, &mut game.world, &mut game.sink);
    }
    let second = game.ball().unwrap();
    assert!(!game.world.is_alive(first));
    assert_eq!(game.score(), 0);
    assert_eq!(game.sink.scores().last(), Some(&0));

    game.idle(400);
    assert_eq!(game.ball(), Some(second));
    assert!(game.world.is_alive(second));
    assert_eq!(game.sink.balls_ready().len(), 2);
}

#[test]
fn steering_respects_speed_cap() {
    let mut game = Game::start(GameConfig::default());
    let ball = game.ball().unwrap();
    let mut input = InputState::default();
    input.steering.forward = true;

    game.world.clear_commands();
    game.world.set_velocity(ball, Vec3::new(0.0, 0.0, -3.0));
    game.step(&input);
    assert_eq!(game.world.forces.len(), 1);

    game.world.clear_commands();
    game.world.set_velocity(ball, Vec3::new(0.0, 0.0, -12.0));
    game.step(&input);
    assert!(game.world.forces.is_empty());
}

#[test]
fn single_obstacle_tables_still_play() {
    let mut config = GameConfig::default();
    config.table.bumper_count = 0;
    config.table.target_count = 1;
    config.table.spinner_count = -2;
    let mut game = Game::start(config);

    assert_eq!(game.world.bodies_with(Surface::Bumper).len(), 1);
    assert_eq!(game.world.bodies_with(Surface::Target).len(), 1);
    assert_eq!(game.world.bodies_with(Surface::Spinner).len(), 1);
    game.idle(10);
    assert!(game.ball().is_some());
}
