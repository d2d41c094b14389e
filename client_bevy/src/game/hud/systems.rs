use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::super::core::PresentationState;
use super::super::table::TableRuntime;
use super::types::{
    charge_width, HudChargeFill, HudHitCountText, HudInfoButton, HudInfoPanel, HudScoreText,
    HudUiState,
};

type ButtonInteractionQuery<'w, 's> =
    Query<'w, 's, &'static Interaction, (Changed<Interaction>, With<HudInfoButton>)>;

#[derive(SystemParam)]
pub(super) struct ButtonQueries<'w, 's> {
    query: ButtonInteractionQuery<'w, 's>,
}

pub(super) fn handle_button_interactions(
    buttons: ButtonQueries,
    mut hud_ui: ResMut<HudUiState>,
) {
    for interaction in &buttons.query {
        if *interaction == Interaction::Pressed {
            hud_ui.info_visible = !hud_ui.info_visible;
        }
    }
}

pub(super) fn update_score_ui(
    state: Res<PresentationState>,
    mut q_score: Query<&mut Text, With<HudScoreText>>,
) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut text) = q_score.single_mut() {
        text.0 = state.score.to_string();
    }
}

pub(super) fn update_hit_ui(
    state: Res<PresentationState>,
    mut q_hit: Query<&mut Text, With<HudHitCountText>>,
) {
    if let Ok(mut text) = q_hit.single_mut() {
        text.0 = state.target_hits.to_string();
    }
}

pub(super) fn update_charge_ui(
    runtime: Res<TableRuntime>,
    mut q_fill: Query<&mut Node, With<HudChargeFill>>,
) {
    let Some(table) = runtime.table.as_ref() else {
        return;
    };
    let fraction = table.launcher().charge_fraction(&table.config().launcher);
    if let Ok(mut node) = q_fill.single_mut() {
        node.width = Val::Px(charge_width(fraction));
    }
}

pub(super) fn update_info_panel_ui(
    hud_ui: Res<HudUiState>,
    mut q_panel: Query<&mut Visibility, With<HudInfoPanel>>,
) {
    if let Ok(mut visibility) = q_panel.single_mut() {
        *visibility = if hud_ui.info_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
