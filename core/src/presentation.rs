use glam::Vec3;

use crate::physics::BodyId;

/// Fire-and-forget notifications for display, camera and effects.
///
/// Implementations must return promptly; the simulation tick calls these inline.
pub trait PresentationSink {
    fn on_score_changed(&mut self, score: u64);

    fn on_target_hit(&mut self, position: Vec3);

    fn on_coin_pulse(&mut self, position: Vec3);

    /// A new ball is in play; camera follow rebinds to it.
    fn on_ball_ready(&mut self, ball: BodyId);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    ScoreChanged(u64),
    TargetHit(Vec3),
    CoinPulse(Vec3),
    BallReady(BodyId),
}

/// Sink that stores every notification in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> Vec<u64> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::ScoreChanged(score) => Some(*score),
                _ => None,
            })
            .collect()
    }

    pub fn target_hits(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| matches!(n, Notification::TargetHit(_)))
            .count()
    }

    pub fn coin_pulses(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| matches!(n, Notification::CoinPulse(_)))
            .count()
    }

    pub fn balls_ready(&self) -> Vec<BodyId> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::BallReady(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn on_score_changed(&mut self, score: u64) {
        self.notifications.push(Notification::ScoreChanged(score));
    }

    fn on_target_hit(&mut self, position: Vec3) {
        self.notifications.push(Notification::TargetHit(position));
    }

    fn on_coin_pulse(&mut self, position: Vec3) {
        self.notifications.push(Notification::CoinPulse(position));
    }

    fn on_ball_ready(&mut self, ball: BodyId) {
        self.notifications.push(Notification::BallReady(ball));
    }
}
