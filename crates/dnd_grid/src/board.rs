use bevy::prelude::*;
use bits_helpers::restart::{Resettable, handle_reset};
use grid_reorder::Board;

/// The session's flat order, shared by every system.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct GridBoard(pub Board);

impl Resettable for GridBoard {
    fn reset(&mut self) -> bool {
        self.0.reset()
    }
}

/// Shows line ids, tinted lines and per-tile indices.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugMode(pub bool);

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridBoard>()
            .init_resource::<DebugMode>()
            .add_systems(Startup, log_initial_board)
            .add_systems(Update, handle_reset::<GridBoard>);
    }
}

fn log_initial_board(board: Res<GridBoard>) {
    info!(
        "{} items, {} per line, {} lines: {}",
        board.items().len(),
        board.items_per_line(),
        board.line_count(),
        **board
    );
}
