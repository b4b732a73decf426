use bevy::prelude::*;

mod board;
mod input;
mod layout;
mod tiles;
mod ui;

use board::BoardPlugin;
use input::InputPlugin;
use tiles::TilesPlugin;
use ui::UiPlugin;

pub fn run() {
    bits_helpers::get_default_app("Demo dnd grid")
        .add_plugins(BoardPlugin)
        .add_plugins(TilesPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(UiPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
