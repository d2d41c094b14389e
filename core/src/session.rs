//! Score keeping and the drain → destroy → respawn sequence.

use crate::config::SessionConfig;
use crate::physics::BodyId;
use crate::presentation::PresentationSink;
use crate::timer::Countdown;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    /// No ball registered yet
    Idle,
    InPlay,
    /// Drain accepted; the ball is destroyed when the countdown runs out
    Draining { ball: BodyId, countdown: Countdown },
    WaitingToSpawn { countdown: Countdown },
}

/// Work the session asks its host to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    DestroyBall(BodyId),
    SpawnBall,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    score: u64,
    current_ball: Option<BodyId>,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            score: 0,
            current_ball: None,
            phase: SessionPhase::Idle,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn current_ball(&self) -> Option<BodyId> {
        self.current_ball
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_drain_pending(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Draining { .. } | SessionPhase::WaitingToSpawn { .. }
        )
    }

    pub fn add_score(&mut self, amount: u64, sink: &mut dyn PresentationSink) {
        self.score = self.score.saturating_add(amount);
        sink.on_score_changed(self.score);
    }

    /// Make `ball` the one eligible for drain handling.
    pub fn register_ball(&mut self, ball: BodyId) -> bool {
        if self.is_drain_pending() {
            tracing::debug!("Ignoring ball {:?} registration while a drain is pending", ball);
            return false;
        }
        self.current_ball = Some(ball);
        self.phase = SessionPhase::InPlay;
        true
    }

    /// Start the drain sequence for `ball`. No-op unless it is the current ball.
    pub fn ball_drained(&mut self, ball: BodyId) -> bool {
        if self.phase != SessionPhase::InPlay || self.current_ball != Some(ball) {
            tracing::debug!("Ignoring drain for ball {:?}", ball);
            return false;
        }

        tracing::info!("Ball {:?} drained", ball);
        self.current_ball = None;
        self.phase = SessionPhase::Draining {
            ball,
            countdown: Countdown::new(self.config.destroy_delay),
        };
        true
    }

    /// Advance pending timers. Both phases may complete in one call when the
    /// delays are shorter than `dt`.
    pub fn tick(&mut self, dt: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if let SessionPhase::Draining { ball, mut countdown } = self.phase {
            if !countdown.advance(dt) {
                self.phase = SessionPhase::Draining { ball, countdown };
                return events;
            }
            events.push(SessionEvent::DestroyBall(ball));
            let respawn = Countdown::chained(self.config.respawn_delay, &countdown);
            if respawn.is_finished() {
                events.push(SessionEvent::SpawnBall);
                self.phase = SessionPhase::Idle;
            } else {
                self.phase = SessionPhase::WaitingToSpawn { countdown: respawn };
            }
        } else if let SessionPhase::WaitingToSpawn { mut countdown } = self.phase {
            if countdown.advance(dt) {
                events.push(SessionEvent::SpawnBall);
                self.phase = SessionPhase::Idle;
            } else {
                self.phase = SessionPhase::WaitingToSpawn { countdown };
            }
        }

        events
    }

    /// New game: cancel pending timers, zero the score, and ask for the
    /// current ball (if any) to be replaced immediately.
    pub fn reset(&mut self, sink: &mut dyn PresentationSink) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match self.phase {
            SessionPhase::Draining { ball, .. } => events.push(SessionEvent::DestroyBall(ball)),
            _ => {
                if let Some(ball) = self.current_ball {
                    events.push(SessionEvent::DestroyBall(ball));
                }
            }
        }
        events.push(SessionEvent::SpawnBall);

        tracing::info!("Game reset (score was {})", self.score);
        self.score = 0;
        self.current_ball = None;
        self.phase = SessionPhase::Idle;
        sink.on_score_changed(0);
        events
    }
}

/// Owner of the single live session.
#[derive(Debug, Default)]
pub struct SessionHost {
    active: Option<GameSession>,
}

impl SessionHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the session unless one already exists. A duplicate request
    /// is discarded and the existing session kept.
    pub fn open(&mut self, config: SessionConfig) -> &mut GameSession {
        if self.active.is_some() {
            tracing::warn!("Game session already open; discarding duplicate");
        } else {
            tracing::info!("Game session opened");
        }
        self.active.get_or_insert_with(|| GameSession::new(config))
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.active.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.active.as_mut()
    }

    pub fn teardown(&mut self) -> Option<GameSession> {
        let ended = self.active.take();
        if let Some(session) = &ended {
            tracing::info!("Game session ended with score {}", session.score());
        }
        ended
    }
}
