use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::types::{
    panel_bg, panel_border, HudChargeFill, HudHitCountText, HudInfoButton, HudInfoPanel,
    HudScoreText, BUTTON_BOTTOM, BUTTON_SIZE, CHARGE_HEIGHT, CHARGE_LEFT, CHARGE_TOP,
    CHARGE_WIDTH, HIT_TOP, INFO_BUTTON_LEFT, KEY_HELP, PANEL_BOTTOM, PANEL_LEFT, PANEL_WIDTH,
    SCORE_TOP, UI_DIM,
};

pub(super) fn spawn_hud(mut commands: Commands) {
    let small = TextFont::from_font_size(10.0);
    let medium = TextFont::from_font_size(14.0);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(72.0),
            top: Val::Px(SCORE_TOP),
            ..default()
        },
        Text::new("S"),
        medium.clone(),
        TextColor(color_from_hex(UI_DIM).with_alpha(0.9)),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(SCORE_TOP),
            ..default()
        },
        Text::new("0"),
        medium.clone(),
        TextColor(color_from_hex(Colors::HUD)),
        HudScoreText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(72.0),
            top: Val::Px(HIT_TOP),
            ..default()
        },
        Text::new("H"),
        medium.clone(),
        TextColor(color_from_hex(UI_DIM).with_alpha(0.9)),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(HIT_TOP),
            ..default()
        },
        Text::new("0"),
        small.clone(),
        TextColor(color_from_hex(Colors::TARGET)),
        HudHitCountText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(CHARGE_LEFT),
                top: Val::Px(CHARGE_TOP),
                width: Val::Px(CHARGE_WIDTH),
                height: Val::Px(CHARGE_HEIGHT),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(panel_bg(0.6)),
            BorderColor::all(panel_border(0.4)),
            BorderRadius::all(Val::Px(3.0)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color_from_hex(Colors::BUMPER)),
                BorderRadius::all(Val::Px(2.0)),
                HudChargeFill,
            ));
        });

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(INFO_BUTTON_LEFT),
                bottom: Val::Px(BUTTON_BOTTOM),
                width: Val::Px(BUTTON_SIZE),
                height: Val::Px(BUTTON_SIZE),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(panel_bg(0.6)),
            BorderColor::all(panel_border(0.4)),
            BorderRadius::MAX,
            HudInfoButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("i"),
                TextFont::from_font_size(16.0),
                TextColor(panel_border(0.7)),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PANEL_LEFT),
                bottom: Val::Px(PANEL_BOTTOM),
                width: Val::Px(PANEL_WIDTH),
                flex_direction: FlexDirection::Column,
                border: UiRect::all(Val::Px(1.0)),
                padding: UiRect {
                    left: Val::Px(10.0),
                    right: Val::Px(10.0),
                    top: Val::Px(8.0),
                    bottom: Val::Px(8.0),
                },
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(panel_bg(0.92)),
            BorderColor::all(panel_border(0.3)),
            BorderRadius::all(Val::Px(6.0)),
            Visibility::Hidden,
            HudInfoPanel,
        ))
        .with_children(|parent| {
            for line in KEY_HELP {
                parent.spawn((
                    Text::new(line),
                    small.clone(),
                    TextColor(Color::srgb(0.55, 0.8, 0.8)),
                ));
            }
            parent.spawn((
                Text::new(format!("v{}", env!("CARGO_PKG_VERSION"))),
                small,
                TextColor(color_from_hex(UI_DIM)),
            ));
        });
}
