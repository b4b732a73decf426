use bevy::prelude::*;
use bits_helpers::input::{
    held_world_position, just_pressed_world_position, just_released, just_released_world_position,
};
use grid_reorder::{DragPosition, DropLocation, DropResult};

use crate::board::GridBoard;
use crate::tiles::{Tile, current_layout};

const DRAGGED_Z: f32 = 10.0;

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    tile: Entity,
    source: DragPosition,
    grab_offset: Vec2,
}

/// The gesture in progress, if any. The board itself never sees it.
#[derive(Resource, Default)]
struct DragState(Option<ActiveDrag>);

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .add_systems(Update, (start_drag, follow_pointer, finish_drag).chain());
    }
}

fn start_drag(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    board: Res<GridBoard>,
    tiles: Query<(Entity, &Tile)>,
    mut drag: ResMut<DragState>,
) {
    if drag.0.is_some() {
        return;
    }
    let Some(world_position) =
        just_pressed_world_position(&buttons, &touch_input, &windows, &camera_q)
    else {
        return;
    };
    let Some(source) = current_layout(&board).slot_at(world_position) else {
        return;
    };
    let Some((entity, tile)) = tiles.iter().find(|(_, tile)| tile.slot == source) else {
        // Empty slot at the end of a short line.
        return;
    };

    debug!("picked up tile at {source:?}");
    drag.0 = Some(ActiveDrag {
        tile: entity,
        source,
        grab_offset: world_position - tile.home.truncate(),
    });
}

fn follow_pointer(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    drag: Res<DragState>,
    mut transforms: Query<&mut Transform, With<Tile>>,
) {
    let Some(active) = drag.0 else {
        return;
    };
    let Some(world_position) = held_world_position(&buttons, &touch_input, &windows, &camera_q)
    else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(active.tile) {
        transform.translation = (world_position - active.grab_offset).extend(DRAGGED_Z);
    }
}

fn finish_drag(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut board: ResMut<GridBoard>,
    mut drag: ResMut<DragState>,
    mut tiles: Query<(&Tile, &mut Transform)>,
) {
    if drag.0.is_none() || !just_released(&buttons, &touch_input) {
        return;
    }
    let Some(active) = drag.0.take() else {
        return;
    };

    // Snap back home. A real move rebuilds the grid on top of this.
    if let Ok((tile, mut transform)) = tiles.get_mut(active.tile) {
        transform.translation = tile.home;
    }

    let layout = current_layout(&board);
    let destination = just_released_world_position(&buttons, &touch_input, &windows, &camera_q)
        .and_then(|position| layout.slot_at(position));

    let drop = DropResult {
        source: DropLocation::new(active.source.line, active.source.position),
        destination: destination.map(|slot| DropLocation::new(slot.line, slot.position)),
    };

    // Only flag the board as changed on a real move so no-op drops don't redraw.
    match board.bypass_change_detection().apply_drop(&drop) {
        Ok(true) => board.set_changed(),
        Ok(false) => debug!("drop from {:?} left the order unchanged", active.source),
        Err(err) => error!("{err}"),
    }
}
