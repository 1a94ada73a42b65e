#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::interaction::controls::SceneControls;

/// `D` / `F1` toggle the collider wireframe + impulse overlay.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Res<ButtonInput<KeyCode>>, mut controls: ResMut<SceneControls>) {
    if keys.any_just_pressed([KeyCode::KeyD, KeyCode::F1]) {
        let on = controls.toggle_debug_overlay();
        info!(target: "scene", "debug overlay {}", if on { "on" } else { "off" });
    }
}
