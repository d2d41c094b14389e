use glam::Vec3;

use crate::config::{CoinConfig, TargetConfig};
use crate::timer::Countdown;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetState {
    Active,
    /// Collider disabled until the countdown runs out
    Hit(Countdown),
}

/// Drop target: scores once, then stays down for `respawn_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub position: Vec3,
    pub score_value: u64,
    pub respawn_time: f32,
    state: TargetState,
}

impl Target {
    pub fn new(position: Vec3, config: &TargetConfig) -> Self {
        Self {
            position,
            score_value: config.score_value,
            respawn_time: config.respawn_time,
            state: TargetState::Active,
        }
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TargetState::Active)
    }

    /// Ball entered the trigger. Returns the award if the target went down.
    pub fn trigger(&mut self) -> Option<u64> {
        match self.state {
            TargetState::Active => {
                self.state = TargetState::Hit(Countdown::new(self.respawn_time));
                Some(self.score_value)
            }
            TargetState::Hit(_) => None,
        }
    }

    /// Advance the cooldown. Returns true on the tick the target re-arms.
    pub fn tick(&mut self, dt: f32) -> bool {
        match &mut self.state {
            TargetState::Hit(countdown) => {
                if countdown.advance(dt) {
                    self.state = TargetState::Active;
                    true
                } else {
                    false
                }
            }
            TargetState::Active => false,
        }
    }
}

/// Scale factor at `elapsed` seconds into a pulse.
pub fn pulse_scale(elapsed: f32, duration: f32, hit_scale: f32) -> f32 {
    if duration <= 0.0 || elapsed >= duration {
        return 1.0;
    }
    let ease = (std::f32::consts::PI * elapsed / duration).sin();
    1.0 + (hit_scale - 1.0) * ease
}

/// Cosmetic coin: spins constantly and pulses in size when touched.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinTarget {
    pub hit_scale: f32,
    pub hit_duration: f32,
    pub spin_speed: f32,
    spin_degrees: f32,
    pulse_elapsed: Option<f32>,
}

impl CoinTarget {
    pub fn new(config: &CoinConfig) -> Self {
        Self {
            hit_scale: config.hit_scale,
            hit_duration: config.hit_duration,
            spin_speed: config.spin_speed,
            spin_degrees: 0.0,
            pulse_elapsed: None,
        }
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse_elapsed.is_some()
    }

    /// Returns false if a pulse is already running.
    pub fn trigger(&mut self) -> bool {
        if self.is_pulsing() {
            return false;
        }
        self.pulse_elapsed = Some(0.0);
        true
    }

    /// Frame-rate update: spin angle and pulse progress.
    pub fn frame_tick(&mut self, dt: f32) {
        self.spin_degrees = (self.spin_degrees + self.spin_speed * dt).rem_euclid(360.0);

        if let Some(elapsed) = self.pulse_elapsed.as_mut() {
            *elapsed += dt;
            if *elapsed >= self.hit_duration {
                self.pulse_elapsed = None;
            }
        }
    }

    pub fn scale(&self) -> f32 {
        match self.pulse_elapsed {
            Some(elapsed) => pulse_scale(elapsed, self.hit_duration, self.hit_scale),
            None => 1.0,
        }
    }

    pub fn spin_degrees(&self) -> f32 {
        self.spin_degrees
    }
}
