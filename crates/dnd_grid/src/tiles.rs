use bevy::prelude::*;
use bevy::sprite::Anchor;
use grid_reorder::{DragPosition, LineId, TileColor};

use crate::board::{DebugMode, GridBoard};
use crate::layout::{GridLayout, TILE_SIZE};

const TILE_Z: f32 = 1.0;
const LINE_Z: f32 = 0.0;

const LINE_BORDER_COLOR: Color = Color::srgb(0.9, 0.91, 0.92);
const LINE_FILL_COLOR: Color = Color::WHITE;

// Just to tell lines apart in debug mode
const LINE_COLORS: [Color; 6] = [
    Color::srgb(0.863, 0.988, 0.906),
    Color::srgb(0.996, 0.886, 0.886),
    Color::srgb(0.859, 0.918, 0.996),
    Color::srgb(0.996, 0.976, 0.765),
    Color::srgb(0.8, 0.984, 0.945),
    Color::srgb(0.953, 0.91, 1.0),
];

/// A rendered item, placed at `slot` in the current layout.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tile {
    pub slot: DragPosition,
    pub home: Vec3,
}

/// Everything rebuilt when the board or the debug flag changes.
#[derive(Component)]
struct GridElement;

pub struct TilesPlugin;

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rebuild_grid);
    }
}

pub const fn tile_color(color: TileColor) -> Color {
    match color {
        TileColor::Green => Color::srgb(0.133, 0.773, 0.369),
        TileColor::Red => Color::srgb(0.937, 0.267, 0.267),
        TileColor::Blue => Color::srgb(0.231, 0.51, 0.965),
        TileColor::Yellow => Color::srgb(0.918, 0.702, 0.031),
        TileColor::Purple => Color::srgb(0.659, 0.333, 0.969),
        TileColor::Teal => Color::srgb(0.078, 0.722, 0.651),
        TileColor::Gray => Color::srgb(0.42, 0.447, 0.502),
        TileColor::Rose => Color::srgb(0.957, 0.247, 0.369),
    }
}

fn line_color(line: usize, debug: bool) -> Color {
    if !debug {
        return LINE_FILL_COLOR;
    }
    LINE_COLORS
        .get(line % LINE_COLORS.len())
        .copied()
        .unwrap_or(LINE_FILL_COLOR)
}

pub fn current_layout(board: &GridBoard) -> GridLayout {
    GridLayout::new(board.items_per_line(), board.line_count())
}

fn rebuild_grid(
    mut commands: Commands,
    board: Res<GridBoard>,
    debug: Res<DebugMode>,
    elements: Query<Entity, With<GridElement>>,
) {
    if !board.is_changed() && !debug.is_changed() {
        return;
    }

    for entity in &elements {
        commands.entity(entity).despawn_recursive();
    }

    let layout = current_layout(&board);
    let DebugMode(debug) = *debug;

    for line in board.lines() {
        let rect = layout.line_rect(line.index());

        commands
            .spawn((
                Sprite::from_color(LINE_BORDER_COLOR, rect.size() + Vec2::splat(2.0)),
                Transform::from_translation(rect.center().extend(LINE_Z)),
                GridElement,
            ))
            .with_child((
                Sprite::from_color(line_color(line.index(), debug), rect.size()),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));

        if debug {
            commands.spawn((
                Text2d::new(LineId(line.index()).to_string()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Anchor::CenterRight,
                Transform::from_xyz(rect.min.x - 8.0, rect.center().y, LINE_Z),
                GridElement,
            ));
        }

        for (position, global, item) in line.iter_indexed() {
            let slot = DragPosition::new(line.index(), position);
            let home = layout.slot_center(slot).extend(TILE_Z);

            let mut tile = commands.spawn((
                Sprite::from_color(tile_color(item.color), Vec2::splat(TILE_SIZE)),
                Transform::from_translation(home),
                Tile { slot, home },
                Name::new(item.id.to_string()),
                GridElement,
            ));

            tile.with_child((
                Text2d::new(item.label.clone()),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, 0.0, 0.5),
            ));

            if debug {
                tile.with_child((
                    Text2d::new(format!("line index: {position}\nglobal index: {global}")),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(Color::BLACK),
                    TextLayout::new_with_justify(JustifyText::Left),
                    Anchor::BottomLeft,
                    Transform::from_xyz(-TILE_SIZE / 2.0 + 4.0, -TILE_SIZE / 2.0 + 4.0, 0.5),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_tints_cycle_in_debug_mode() {
        assert_eq!(line_color(0, true), line_color(LINE_COLORS.len(), true));
        assert_ne!(line_color(0, true), line_color(1, true));
        assert_eq!(line_color(3, false), LINE_FILL_COLOR);
    }
}
