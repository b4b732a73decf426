use bevy::prelude::*;

fn screen_to_world(
    position: Vec2,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let (camera, camera_transform) = camera.get_single().ok()?;

    camera
        .viewport_to_world(camera_transform, position)
        .map(|ray| ray.origin.truncate())
        .ok()
}

fn cursor_position(windows: &Query<&Window>) -> Option<Vec2> {
    windows.get_single().ok()?.cursor_position()
}

pub fn just_pressed_screen_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_pressed(MouseButton::Left) {
        cursor_position(windows)
    } else {
        let touch = touch_input.iter_just_pressed().next()?;
        Some(touch.position())
    }
}

/// Pointer position while the left button or a finger is held down.
pub fn held_screen_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.pressed(MouseButton::Left) {
        cursor_position(windows)
    } else {
        let touch = touch_input.iter().next()?;
        Some(touch.position())
    }
}

pub fn just_released_screen_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_released(MouseButton::Left) {
        cursor_position(windows)
    } else {
        let touch = touch_input.iter_just_released().next()?;
        Some(touch.position())
    }
}

/// True on the frame the pointer was lifted, even if it left the window.
pub fn just_released(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
) -> bool {
    button_input.just_released(MouseButton::Left)
        || touch_input.any_just_released()
        || touch_input.any_just_canceled()
}

pub fn just_pressed_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = just_pressed_screen_position(button_input, touch_input, windows)?;
    screen_to_world(position, camera)
}

pub fn held_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = held_screen_position(button_input, touch_input, windows)?;
    screen_to_world(position, camera)
}

pub fn just_released_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = just_released_screen_position(button_input, touch_input, windows)?;
    screen_to_world(position, camera)
}
