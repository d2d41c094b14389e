mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use super::UpdateSet;
use types::HudUiState;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudUiState>()
            .add_systems(Startup, spawn::spawn_hud)
            .add_systems(
                Update,
                (
                    systems::handle_button_interactions,
                    systems::update_score_ui,
                    systems::update_hit_ui,
                    systems::update_charge_ui,
                    systems::update_info_panel_ui,
                )
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}
