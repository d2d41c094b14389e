use crate::config::LauncherConfig;
use crate::timer::Countdown;

/// Hold-to-charge, release-to-fire plunger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LauncherState {
    /// Seconds the launch key has been held, capped at the max charge
    pub charge: f32,
    /// Running after a launch; input is ignored until it finishes
    pub cooldown: Option<Countdown>,
    pub charging: bool,
}

impl LauncherState {
    pub fn charge_fraction(&self, config: &LauncherConfig) -> f32 {
        (self.charge / config.max_charge).clamp(0.0, 1.0)
    }
}

/// Advance one tick. Returns the charge fraction (0..=1) on the tick the
/// launch key is released.
pub fn step_launcher(
    mut state: LauncherState,
    dt: f32,
    active: bool,
    config: &LauncherConfig,
) -> (LauncherState, Option<f32>) {
    if let Some(cooldown) = state.cooldown.as_mut() {
        if cooldown.advance(dt) {
            state.cooldown = None;
        }
        return (state, None);
    }

    if active {
        state.charge = (state.charge + dt).min(config.max_charge);
        state.charging = true;
        return (state, None);
    }

    if !state.charging {
        return (state, None);
    }

    let fired = state.charge_fraction(config);
    let state = LauncherState {
        cooldown: Some(Countdown::new(config.cooldown)),
        ..LauncherState::default()
    };
    (state, Some(fired))
}
