use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{WgpuSettings, WgpuSettingsPriority};
use bevy::window::{WindowMode, WindowResolution};

pub const WINDOW_WIDTH: f32 = 720.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.96, 0.96, 0.97);

// Window, render backends and frame pacing shared by every demo app
pub fn get_default_app(app_name: &str) -> App {
    let mut app = App::new();

    let asset_plugin = AssetPlugin {
        mode: bevy::asset::AssetMode::Unprocessed,
        file_path: "assets".to_string(),
        processed_file_path: "imported_assets/Default".to_string(),
        watch_for_changes_override: None,
        meta_check: AssetMetaCheck::Never,
    };

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: app_name.to_string(),
            present_mode: bevy::window::PresentMode::Fifo,
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            canvas: Some("#demo".into()),
            fit_canvas_to_parent: true,
            mode: WindowMode::Windowed,
            // Keep browser shortcuts like F5 and Ctrl+R working on wasm.
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    };

    let render_plugin = RenderPlugin {
        render_creation: bevy::render::settings::RenderCreation::Automatic(WgpuSettings {
            backends: Some(bevy::render::settings::Backends::all()),
            priority: WgpuSettingsPriority::Functionality,
            ..Default::default()
        }),
        ..Default::default()
    };

    app.add_plugins(
        DefaultPlugins
            .set(asset_plugin)
            .set(window_plugin)
            .set(render_plugin),
    );

    // The demo is idle most of the time, no need to redraw at full rate.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(BACKGROUND_COLOR));

    app
}
