#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier3d::render::DebugRenderContext;

#[cfg(feature = "debug")]
use crate::core::components::{DynamicBody, VectorWorkspace};
#[cfg(feature = "debug")]
use crate::interaction::controls::SceneControls;

#[cfg(feature = "debug")]
const IMPULSE_ARROW_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

/// Rapier's own collider wireframes follow the overlay switch.
#[cfg(feature = "debug")]
pub fn sync_rapier_debug_render(
    controls: Res<SceneControls>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if let Some(mut c) = ctx {
        let enable = controls.debug_overlay();
        if c.enabled != enable {
            c.enabled = enable;
        }
    }
}

/// Last centering impulse of every body, drawn from its center.
#[cfg(feature = "debug")]
pub fn draw_impulse_gizmos(
    controls: Res<SceneControls>,
    q: Query<(&GlobalTransform, &VectorWorkspace), With<DynamicBody>>,
    mut gizmos: Gizmos,
) {
    if !controls.debug_overlay() {
        return;
    }
    for (tf, impulse) in q.iter() {
        if impulse.length_squared() < 1e-6 {
            continue;
        }
        let start = tf.translation();
        gizmos.arrow(start, start + impulse.0, IMPULSE_ARROW_COLOR);
    }
}
