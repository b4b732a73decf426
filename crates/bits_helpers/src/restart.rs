use bevy::prelude::*;

/// Marks a UI button that resets a [`Resettable`] resource when pressed.
#[derive(Component)]
pub struct ResetButton;

pub trait Resettable: Resource {
    /// Returns whether anything changed.
    fn reset(&mut self) -> bool;
}

pub fn handle_reset<T: Resettable>(
    mut resettable: ResMut<T>,
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
) {
    for interaction in &interaction_query {
        if *interaction == Interaction::Pressed {
            // Skip change detection when the reset was a no-op.
            if resettable.bypass_change_detection().reset() {
                resettable.set_changed();
            }
        }
    }
}
