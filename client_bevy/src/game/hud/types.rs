use bevy::prelude::*;

pub(super) const SCORE_TOP: f32 = 10.0;
pub(super) const HIT_TOP: f32 = 36.0;

pub(super) const CHARGE_LEFT: f32 = 12.0;
pub(super) const CHARGE_TOP: f32 = 12.0;
pub(super) const CHARGE_WIDTH: f32 = 120.0;
pub(super) const CHARGE_HEIGHT: f32 = 8.0;

pub(super) const INFO_BUTTON_LEFT: f32 = 12.0;
pub(super) const BUTTON_BOTTOM: f32 = 12.0;
pub(super) const BUTTON_SIZE: f32 = 28.0;

pub(super) const PANEL_LEFT: f32 = 12.0;
pub(super) const PANEL_BOTTOM: f32 = 48.0;
pub(super) const PANEL_WIDTH: f32 = 190.0;

pub(super) const UI_DIM: u32 = 0x888888;

pub(super) const KEY_HELP: [&str; 6] = [
    "Z / X  flippers",
    "WASD / arrows  steer",
    "Space  hold to launch",
    "R  new game",
    "F1  collider outlines",
    "Esc  quit",
];

#[derive(Resource, Default)]
pub(crate) struct HudUiState {
    pub(crate) info_visible: bool,
}

#[derive(Component)]
pub(super) struct HudScoreText;

#[derive(Component)]
pub(super) struct HudHitCountText;

#[derive(Component)]
pub(super) struct HudChargeFill;

#[derive(Component)]
pub(super) struct HudInfoButton;

#[derive(Component)]
pub(super) struct HudInfoPanel;

/// Fill width in pixels for a launcher charge in [0, 1].
pub(super) fn charge_width(fraction: f32) -> f32 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0) * CHARGE_WIDTH
}

pub(super) fn panel_bg(alpha: f32) -> Color {
    Color::srgba(5.0 / 255.0, 5.0 / 255.0, 16.0 / 255.0, alpha)
}

pub(super) fn panel_border(alpha: f32) -> Color {
    Color::srgba(77.0 / 255.0, 166.0 / 255.0, 166.0 / 255.0, alpha)
}
