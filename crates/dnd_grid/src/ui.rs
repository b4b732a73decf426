use bevy::prelude::*;
use bits_helpers::restart::ResetButton;

use crate::board::{DebugMode, GridBoard};

const BUTTON_NORMAL: Color = Color::srgb(0.85, 0.86, 0.88);
const BUTTON_HOVERED: Color = Color::srgb(0.75, 0.77, 0.8);
const BUTTON_PRESSED: Color = Color::srgb(0.6, 0.63, 0.68);
const TEXT_COLOR: Color = Color::srgb(0.1, 0.1, 0.12);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigButton {
    Decrease,
    Increase,
    ToggleDebug,
}

#[derive(Component)]
struct ItemsPerLineLabel;

#[derive(Component)]
struct DebugLabel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup).add_systems(
            Update,
            (button_colors, config_buttons, update_labels).chain(),
        );
    }
}

fn text_bundle(value: impl Into<String>, font_size: f32) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(TEXT_COLOR),
    )
}

fn button_bundle(width: f32) -> impl Bundle {
    (
        Button,
        Node {
            width: Val::Px(width),
            height: Val::Px(32.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BorderRadius::all(Val::Px(4.0)),
        BackgroundColor(BUTTON_NORMAL),
    )
}

fn setup(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(12.0)),
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|panel| {
            panel.spawn(text_bundle("Demo dnd grid", 24.0));
            panel.spawn(text_bundle("Configuration", 20.0));

            panel
                .spawn(Node {
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(text_bundle("Max items per line:", 18.0));
                    row.spawn((button_bundle(32.0), ConfigButton::Decrease))
                        .with_child(text_bundle("-", 20.0));
                    row.spawn((text_bundle("", 18.0), ItemsPerLineLabel));
                    row.spawn((button_bundle(32.0), ConfigButton::Increase))
                        .with_child(text_bundle("+", 20.0));
                });

            panel
                .spawn(Node {
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((button_bundle(140.0), ConfigButton::ToggleDebug))
                        .with_child((text_bundle("", 16.0), DebugLabel));
                    row.spawn((button_bundle(80.0), ResetButton))
                        .with_child(text_bundle("Reset", 16.0));
                });
        });
}

fn button_colors(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut color) in &mut buttons {
        *color = match *interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::None => BUTTON_NORMAL,
        }
        .into();
    }
}

fn config_buttons(
    buttons: Query<(&Interaction, &ConfigButton), Changed<Interaction>>,
    mut board: ResMut<GridBoard>,
    mut debug: ResMut<DebugMode>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            ConfigButton::Decrease => {
                if board.bypass_change_detection().decrease_items_per_line() {
                    board.set_changed();
                }
            }
            ConfigButton::Increase => {
                if board.bypass_change_detection().increase_items_per_line() {
                    board.set_changed();
                }
            }
            ConfigButton::ToggleDebug => {
                debug.0 = !debug.0;
                let enabled = debug.0;
                info!("debug mode {}", if enabled { "on" } else { "off" });
            }
        }
    }
}

fn update_labels(
    board: Res<GridBoard>,
    debug: Res<DebugMode>,
    mut width_label: Query<&mut Text, (With<ItemsPerLineLabel>, Without<DebugLabel>)>,
    mut debug_label: Query<&mut Text, (With<DebugLabel>, Without<ItemsPerLineLabel>)>,
) {
    if board.is_changed() {
        for mut text in &mut width_label {
            text.0 = board.items_per_line().to_string();
        }
    }
    if debug.is_changed() {
        for mut text in &mut debug_label {
            text.0 = format!("Debug mode: {}", if debug.0 { "on" } else { "off" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_has_configuration_heading_and_controls() {
        let mut app = App::new();
        app.add_systems(Startup, setup);
        app.update();

        let world = app.world_mut();
        let mut texts = world.query::<&Text>();
        let labels: Vec<String> = texts.iter(world).map(|text| text.0.clone()).collect();
        assert!(labels.iter().any(|label| label == "Configuration"), "{labels:?}");

        let mut buttons = world.query::<&ConfigButton>();
        assert_eq!(buttons.iter(world).count(), 3);
    }
}
