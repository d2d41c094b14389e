//! Runtime table: spawns the generated layout into a physics world and
//! routes contact/trigger events to the obstacle that owns each body.

use std::collections::{BTreeMap, BTreeSet};

use glam::{Quat, Vec3};

use crate::config::GameConfig;
use crate::geometry::{
    self, FlipperPlacement, StaticKind, StaticObstacle, TableLayout, BUMPER_RADIUS,
    SPINNER_HALF_HEIGHT, SPINNER_RADIUS, TARGET_HALF_DEPTH, TARGET_RADIUS,
};
use crate::handlers::{BallController, Bumper, CoinTarget, FlipperActuator, Spinner, Target};
use crate::input::InputState;
use crate::launcher::{step_launcher, LauncherState};
use crate::physics::{
    BodyDesc, BodyId, ContactEvent, HingeBodies, HingeDesc, Motion, MotorCommand, PhysicsWorld,
    Shape, Surface, TriggerEvent, TriggerPhase,
};
use crate::presentation::PresentationSink;
use crate::session::{GameSession, SessionEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum Obstacle {
    Static(StaticKind),
    Bumper(Bumper),
    Spinner(Spinner),
    Target {
        target: Target,
        coin: Option<CoinTarget>,
    },
    Drain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flipper {
    pub actuator: FlipperActuator,
    pub bodies: HingeBodies,
}

/// What the client needs to draw one coin this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinVisual {
    pub body: BodyId,
    pub scale: f32,
    pub spin_degrees: f32,
    pub visible: bool,
}

pub struct Table {
    config: GameConfig,
    layout: TableLayout,
    obstacles: BTreeMap<BodyId, Obstacle>,
    flippers: Vec<Flipper>,
    ball: BallController,
    launcher: LauncherState,
    balls: BTreeSet<BodyId>,
}

impl Table {
    /// Generate the layout for `config` and spawn every body of it.
    pub fn build(config: &GameConfig, world: &mut dyn PhysicsWorld) -> Self {
        let layout = geometry::generate(&config.table);
        let mut obstacles = BTreeMap::new();

        for obstacle in &layout.statics {
            let id = world.spawn_body(&static_desc(obstacle));
            obstacles.insert(id, Obstacle::Static(obstacle.kind));
        }

        for (i, placement) in layout.bumpers.iter().enumerate() {
            let id = world.spawn_body(&BodyDesc {
                label: format!("Bumper_{}", i),
                surface: Surface::Bumper,
                motion: Motion::Fixed,
                shape: Shape::Sphere {
                    radius: BUMPER_RADIUS,
                },
                position: placement.position,
                rotation: Quat::IDENTITY,
                sensor: false,
                visible: true,
            });
            let bumper = Bumper::new(placement.position, &config.bumper);
            obstacles.insert(id, Obstacle::Bumper(bumper));
        }

        for (i, placement) in layout.targets.iter().enumerate() {
            let id = world.spawn_body(&BodyDesc {
                label: format!("Target_{}", i),
                surface: Surface::Target,
                motion: Motion::Fixed,
                shape: Shape::Cylinder {
                    half_height: TARGET_HALF_DEPTH,
                    radius: TARGET_RADIUS,
                },
                position: placement.position,
                rotation: placement.rotation,
                sensor: true,
                visible: true,
            });
            let coin = config.coin.enabled.then(|| CoinTarget::new(&config.coin));
            obstacles.insert(
                id,
                Obstacle::Target {
                    target: Target::new(placement.position, &config.target),
                    coin,
                },
            );
        }

        for (i, placement) in layout.spinners.iter().enumerate() {
            let id = world.spawn_body(&BodyDesc {
                label: format!("Spinner_{}", i),
                surface: Surface::Spinner,
                motion: Motion::Dynamic {
                    mass: config.spinner.mass,
                    linear_damping: 0.0,
                    angular_damping: config.spinner.angular_drag,
                    spin_only: true,
                },
                shape: Shape::Cylinder {
                    half_height: SPINNER_HALF_HEIGHT,
                    radius: SPINNER_RADIUS,
                },
                position: placement.position,
                rotation: Quat::IDENTITY,
                sensor: false,
                visible: true,
            });
            let spinner = Spinner::new(placement.position, &config.spinner);
            obstacles.insert(id, Obstacle::Spinner(spinner));
        }

        let drain_id = world.spawn_body(&BodyDesc {
            label: "Drain".to_string(),
            surface: Surface::Drain,
            motion: Motion::Fixed,
            shape: Shape::Cuboid {
                half_extents: layout.drain.half_extents,
            },
            position: layout.drain.position,
            rotation: Quat::IDENTITY,
            sensor: true,
            visible: false,
        });
        obstacles.insert(drain_id, Obstacle::Drain);

        let flippers = layout
            .flippers
            .iter()
            .map(|placement| {
                let bodies = world.spawn_hinge(&hinge_desc(placement, config));
                Flipper {
                    actuator: FlipperActuator::new(
                        placement.side,
                        bodies.paddle,
                        &config.flipper,
                    ),
                    bodies,
                }
            })
            .collect();

        tracing::info!(
            "Table built: {} bumpers, {} targets, {} spinners",
            layout.bumpers.len(),
            layout.targets.len(),
            layout.spinners.len()
        );

        Self {
            config: config.clone(),
            layout,
            obstacles,
            flippers,
            ball: BallController::new(&config.ball),
            launcher: LauncherState::default(),
            balls: BTreeSet::new(),
        }
    }

    /// Despawn every body this table owns, balls included.
    pub fn teardown(&mut self, world: &mut dyn PhysicsWorld) {
        for id in self.body_ids() {
            world.despawn(id);
        }
        self.obstacles.clear();
        self.flippers.clear();
        self.balls.clear();
        self.launcher = LauncherState::default();
    }

    /// Replace the table with one generated from `config`. Balls are removed
    /// with the old layout; the caller starts a new game afterwards.
    pub fn rebuild(&mut self, config: &GameConfig, world: &mut dyn PhysicsWorld) {
        self.teardown(world);
        *self = Table::build(config, world);
        tracing::info!("Table rebuilt");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn obstacle(&self, body: BodyId) -> Option<&Obstacle> {
        self.obstacles.get(&body)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = (BodyId, &Obstacle)> {
        self.obstacles.iter().map(|(id, o)| (*id, o))
    }

    pub fn flippers(&self) -> &[Flipper] {
        &self.flippers
    }

    pub fn launcher(&self) -> LauncherState {
        self.launcher
    }

    pub fn is_ball(&self, body: BodyId) -> bool {
        self.balls.contains(&body)
    }

    pub fn balls(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.balls.iter().copied()
    }

    /// Every body currently owned by the table.
    pub fn body_ids(&self) -> Vec<BodyId> {
        let mut ids: Vec<BodyId> = self.obstacles.keys().copied().collect();
        for flipper in &self.flippers {
            ids.push(flipper.bodies.anchor);
            ids.push(flipper.bodies.paddle);
        }
        ids.extend(self.balls.iter().copied());
        ids
    }

    /// Spawn a ball at the layout's spawn point and hand it to the session.
    pub fn spawn_ball(
        &mut self,
        session: &mut GameSession,
        world: &mut dyn PhysicsWorld,
        sink: &mut dyn PresentationSink,
    ) -> Option<BodyId> {
        let ball = &self.config.ball;
        let id = world.spawn_body(&BodyDesc {
            label: "Ball".to_string(),
            surface: Surface::Ball,
            motion: Motion::Dynamic {
                mass: ball.mass,
                linear_damping: ball.drag,
                angular_damping: ball.angular_drag,
                spin_only: false,
            },
            shape: Shape::Sphere {
                radius: ball.radius,
            },
            position: self.layout.ball_spawn,
            rotation: Quat::IDENTITY,
            sensor: false,
            visible: true,
        });

        if !session.register_ball(id) {
            world.despawn(id);
            return None;
        }

        tracing::info!("Ball {:?} spawned", id);
        self.balls.insert(id);
        sink.on_ball_ready(id);
        Some(id)
    }

    /// One fixed simulation step: motors, torques, steering, launcher,
    /// target cooldowns and the session's drain timers.
    pub fn fixed_tick(
        &mut self,
        dt: f32,
        input: &InputState,
        session: &mut GameSession,
        world: &mut dyn PhysicsWorld,
        sink: &mut dyn PresentationSink,
    ) {
        for flipper in &self.flippers {
            let held = input.flipper_held(flipper.actuator.side);
            world.set_motor(flipper.bodies.paddle, flipper.actuator.command(held));
        }

        for (id, obstacle) in self.obstacles.iter_mut() {
            match obstacle {
                Obstacle::Spinner(spinner) => world.apply_torque(*id, spinner.idle_torque()),
                Obstacle::Target { target, .. } => {
                    if target.tick(dt) {
                        tracing::debug!("Target {:?} re-armed", id);
                        world.set_collider_enabled(*id, true);
                    }
                }
                _ => {}
            }
        }

        let current = session.current_ball();
        if let Some(ball) = current {
            if let Some(velocity) = world.linear_velocity(ball) {
                if let Some(force) = self.ball.steering_force(input.steering, velocity) {
                    world.apply_force(ball, force);
                }
            }
        }

        let (launcher, fired) =
            step_launcher(self.launcher, dt, input.launch, &self.config.launcher);
        self.launcher = launcher;
        if let (Some(charge), Some(ball)) = (fired, current) {
            tracing::debug!("Ball {:?} launched at {:.2} charge", ball, charge);
            world.apply_impulse(ball, self.ball.launch_impulse(charge));
        }

        for event in session.tick(dt) {
            self.apply_session_event(event, session, world, sink);
        }
    }

    /// Frame-rate cosmetic update.
    pub fn frame_tick(&mut self, dt: f32) {
        for obstacle in self.obstacles.values_mut() {
            if let Obstacle::Target {
                coin: Some(coin), ..
            } = obstacle
            {
                coin.frame_tick(dt);
            }
        }
    }

    pub fn handle_contact(
        &mut self,
        event: &ContactEvent,
        session: &mut GameSession,
        world: &mut dyn PhysicsWorld,
        sink: &mut dyn PresentationSink,
    ) {
        let Some((ball, other)) = self.ball_and_other(event.a, event.b) else {
            return;
        };

        match self.obstacles.get(&other) {
            Some(Obstacle::Bumper(bumper)) => {
                world.apply_impulse(ball, bumper.impulse(event.point));
                session.add_score(bumper.score_value, sink);
            }
            Some(Obstacle::Spinner(spinner)) => {
                world.apply_impulse(ball, spinner.reaction_impulse(event.point));
                session.add_score(spinner.score_per_hit, sink);
            }
            _ => {}
        }
    }

    pub fn handle_trigger(
        &mut self,
        event: &TriggerEvent,
        session: &mut GameSession,
        world: &mut dyn PhysicsWorld,
        sink: &mut dyn PresentationSink,
    ) {
        if event.phase != TriggerPhase::Enter {
            return;
        }
        let Some((ball, other)) = self.ball_and_other(event.a, event.b) else {
            return;
        };

        match self.obstacles.get_mut(&other) {
            Some(Obstacle::Drain) => {
                session.ball_drained(ball);
            }
            Some(Obstacle::Target { target, coin }) => {
                let Some(award) = target.trigger() else {
                    return;
                };
                tracing::debug!("Target {:?} hit", other);
                let position = target.position;
                world.set_collider_enabled(other, false);
                session.add_score(award, sink);
                sink.on_target_hit(position);
                if let Some(coin) = coin {
                    if coin.trigger() {
                        sink.on_coin_pulse(position);
                    }
                }
            }
            _ => {}
        }
    }

    /// Start a new game on the current layout.
    pub fn reset(
        &mut self,
        session: &mut GameSession,
        world: &mut dyn PhysicsWorld,
        sink: &mut dyn PresentationSink,
    ) {
        self.launcher = LauncherState::default();
        for event in session.reset(sink) {
            self.apply_session_event(event, session, world, sink);
        }
        // Strays from an interrupted drain would otherwise linger.
        for ball in std::mem::take(&mut self.balls) {
            if Some(ball) == session.current_ball() {
                self.balls.insert(ball);
            } else {
                world.despawn(ball);
            }
        }
    }

    pub fn coin_visuals(&self) -> Vec<CoinVisual> {
        self.obstacles
            .iter()
            .filter_map(|(id, obstacle)| match obstacle {
                Obstacle::Target { target, coin } => Some(CoinVisual {
                    body: *id,
                    scale: coin.as_ref().map_or(1.0, |c| c.scale()),
                    spin_degrees: coin.as_ref().map_or(0.0, |c| c.spin_degrees()),
                    visible: target.is_active(),
                }),
                _ => None,
            })
            .collect()
    }

    fn apply_session_event(
        &mut self,
        event: SessionEvent,
        session: &mut GameSession,
        world: &mut dyn PhysicsWorld,
        sink: &mut dyn PresentationSink,
    ) {
        match event {
            SessionEvent::DestroyBall(ball) => {
                tracing::info!("Ball {:?} destroyed", ball);
                self.balls.remove(&ball);
                world.despawn(ball);
            }
            SessionEvent::SpawnBall => {
                self.spawn_ball(session, world, sink);
            }
        }
    }

    fn ball_and_other(&self, a: BodyId, b: BodyId) -> Option<(BodyId, BodyId)> {
        match (self.is_ball(a), self.is_ball(b)) {
            (true, false) => Some((a, b)),
            (false, true) => Some((b, a)),
            _ => None,
        }
    }
}

fn static_desc(obstacle: &StaticObstacle) -> BodyDesc {
    let surface = match obstacle.kind {
        StaticKind::Playfield => Surface::Playfield,
        StaticKind::Wall | StaticKind::FrontWall => Surface::Wall,
        StaticKind::Rim => Surface::Rim,
        StaticKind::Ramp => Surface::Ramp,
        StaticKind::LaneDivider => Surface::LaneDivider,
        StaticKind::Ceiling => Surface::Ceiling,
    };
    BodyDesc {
        label: obstacle.name.clone(),
        surface,
        motion: Motion::Fixed,
        shape: Shape::Cuboid {
            half_extents: obstacle.half_extents,
        },
        position: obstacle.position,
        rotation: obstacle.rotation,
        sensor: false,
        visible: obstacle.visible,
    }
}

fn hinge_desc(placement: &FlipperPlacement, config: &GameConfig) -> HingeDesc {
    let flipper = &config.flipper;
    HingeDesc {
        anchor: placement.pivot,
        axis: placement.hinge_axis,
        paddle: BodyDesc {
            label: format!("{:?}Flipper", placement.side),
            surface: Surface::Flipper,
            motion: Motion::Dynamic {
                mass: flipper.mass,
                linear_damping: 0.0,
                angular_damping: flipper.angular_drag,
                spin_only: false,
            },
            shape: Shape::Cuboid {
                half_extents: placement.paddle_half_extents,
            },
            position: placement.paddle_center,
            rotation: placement.paddle_rotation,
            sensor: false,
            visible: true,
        },
        min_angle_deg: flipper.min_angle,
        max_angle_deg: flipper.max_angle,
        motor: MotorCommand {
            target_velocity: flipper.rest_speed,
            max_force: flipper.motor_strength,
        },
    }
}

/// Approximate contact point on the ball's surface facing `obstacle`.
pub fn contact_point(ball_center: Vec3, obstacle_center: Vec3, ball_radius: f32) -> Vec3 {
    ball_center + (obstacle_center - ball_center).normalize_or_zero() * ball_radius
}
