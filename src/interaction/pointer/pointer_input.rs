use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::pointer_actor::PointerInput;

/// Window position (logical pixels, top-left origin) -> normalized `[-1, 1]`, +y up.
pub fn cursor_to_normalized(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y * 2.0 - 1.0),
    ))
}

/// World-space size of the plane at `distance` in front of a perspective camera.
pub fn viewport_at_distance(fov_y: f32, aspect_ratio: f32, distance: f32) -> Vec2 {
    let height = 2.0 * distance * (fov_y * 0.5).tan();
    Vec2::new(height * aspect_ratio, height)
}

/// Samples the first touch (or the mouse cursor) of the primary window into `PointerInput`.
/// The last known pointer is kept while the cursor is outside the window.
pub fn sample_pointer_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    touches: Res<Touches>,
    cameras: Query<(&Projection, &GlobalTransform), With<Camera3d>>,
    mut input: ResMut<PointerInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = window.size();
    if let Ok((Projection::Perspective(p), cam_tf)) = cameras.single() {
        let distance = cam_tf.translation().z.abs();
        let aspect = if size.y > 0.0 { size.x / size.y } else { p.aspect_ratio };
        let viewport = viewport_at_distance(p.fov, aspect, distance);
        if input.viewport != viewport {
            input.viewport = viewport;
        }
    }
    let cursor = touches
        .iter()
        .next()
        .map(|t| t.position())
        .or_else(|| window.cursor_position());
    if let Some(pointer) = cursor.and_then(|c| cursor_to_normalized(c, size)) {
        if input.pointer != pointer {
            input.pointer = pointer;
        }
    }
}
