use bevy::prelude::*;

use crate::core::config::SceneConfig;
use crate::core::error::SceneError;
use crate::core::system::system_order::ControlsSet;
use crate::interaction::pointer::{validate_radius, PointerActor};

/// Radius change per key press.
pub const RADIUS_STEP: f32 = 0.5;

/// Live user-facing settings. Changes go through the setters so the pointer radius can never
/// leave its bounds.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneControls {
    debug_overlay: bool,
    pointer_radius: f32,
}

impl Default for SceneControls {
    fn default() -> Self {
        Self { debug_overlay: false, pointer_radius: 1.0 }
    }
}

impl SceneControls {
    pub fn new(debug_overlay: bool, pointer_radius: f32) -> Result<Self, SceneError> {
        Ok(Self { debug_overlay, pointer_radius: validate_radius(pointer_radius)? })
    }

    /// Out-of-range radii from the config fall back to the default radius.
    pub fn from_config(cfg: &SceneConfig) -> Self {
        Self::new(cfg.debug.overlay, cfg.pointer.radius).unwrap_or_else(|e| {
            warn!(target: "config", "pointer.radius: {e}; using default");
            Self { debug_overlay: cfg.debug.overlay, ..default() }
        })
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn pointer_radius(&self) -> f32 {
        self.pointer_radius
    }

    pub fn set_debug_overlay(&mut self, on: bool) {
        self.debug_overlay = on;
    }

    pub fn toggle_debug_overlay(&mut self) -> bool {
        self.debug_overlay = !self.debug_overlay;
        self.debug_overlay
    }

    /// Rejected values leave the current radius untouched.
    pub fn set_pointer_radius(&mut self, radius: f32) -> Result<(), SceneError> {
        self.pointer_radius = validate_radius(radius)?;
        Ok(())
    }
}

pub struct SceneControlsPlugin;

impl Plugin for SceneControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneControls>()
            .add_systems(Update, sync_controls_to_pointer.in_set(ControlsSet));
    }
}

/// Pushes the controls' radius onto every pointer actor whose radius differs.
pub fn sync_controls_to_pointer(
    controls: Res<SceneControls>,
    mut q: Query<&mut PointerActor>,
) {
    if !controls.is_changed() {
        return;
    }
    for mut actor in q.iter_mut() {
        if actor.radius() == controls.pointer_radius() {
            continue;
        }
        match actor.update_radius(controls.pointer_radius()) {
            Ok(()) => info!(target: "pointer", "pointer radius -> {:.2}", actor.radius()),
            Err(e) => warn!(target: "pointer", "pointer radius rejected: {e}"),
        }
    }
}

/// `=` / `-` (and the numpad equivalents) step the pointer radius.
pub fn pointer_radius_keys(keys: Res<ButtonInput<KeyCode>>, mut controls: ResMut<SceneControls>) {
    let mut delta = 0.0;
    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        delta += RADIUS_STEP;
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        delta -= RADIUS_STEP;
    }
    if delta == 0.0 {
        return;
    }
    let wanted = controls.pointer_radius() + delta;
    if let Err(e) = controls.set_pointer_radius(wanted) {
        warn!(target: "pointer", "{e}; radius stays {:.2}", controls.pointer_radius());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setter_rejects_out_of_range_and_keeps_value() {
        let mut c = SceneControls::new(false, 2.0).unwrap();
        assert!(matches!(c.set_pointer_radius(5.5), Err(SceneError::OutOfRange { .. })));
        assert_eq!(c.pointer_radius(), 2.0);
        c.set_pointer_radius(5.0).unwrap();
        assert_eq!(c.pointer_radius(), 5.0);
        assert!(SceneControls::new(true, 0.5).is_err());
    }

    #[test]
    fn toggle_flips_overlay() {
        let mut c = SceneControls::default();
        assert!(c.toggle_debug_overlay());
        assert!(!c.toggle_debug_overlay());
        c.set_debug_overlay(true);
        assert!(c.debug_overlay());
    }

    #[test]
    fn bad_config_radius_falls_back_to_default() {
        let mut cfg = SceneConfig::default();
        cfg.pointer.radius = 9.0;
        cfg.debug.overlay = true;
        let c = SceneControls::from_config(&cfg);
        assert_eq!(c.pointer_radius(), 1.0);
        assert!(c.debug_overlay());
    }

    fn app_with_pointer() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(SceneControlsPlugin);
        let e = app
            .world_mut()
            .spawn(PointerActor::create(1.0).unwrap())
            .id();
        (app, e)
    }

    #[test]
    fn controls_radius_reaches_pointer_actor() {
        let (mut app, e) = app_with_pointer();
        app.world_mut()
            .resource_mut::<SceneControls>()
            .set_pointer_radius(3.5)
            .unwrap();
        app.update();
        assert_eq!(app.world().get::<PointerActor>(e).unwrap().radius(), 3.5);
    }

    #[test]
    fn radius_keys_step_and_clamp_by_rejection() {
        let (mut app, e) = app_with_pointer();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, pointer_radius_keys.before(ControlsSet));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Equal);
        app.update();
        assert_eq!(app.world().resource::<SceneControls>().pointer_radius(), 1.5);
        assert_eq!(app.world().get::<PointerActor>(e).unwrap().radius(), 1.5);

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.clear();
        keys.release(KeyCode::Equal);
        keys.clear();
        keys.press(KeyCode::Minus);
        app.update();
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::Minus);
        keys.clear();
        keys.press(KeyCode::Minus);
        app.update();
        // 1.5 -> 1.0 -> 0.5 rejected
        assert_eq!(app.world().resource::<SceneControls>().pointer_radius(), 1.0);
        assert_eq!(app.world().get::<PointerActor>(e).unwrap().radius(), 1.0);
    }
}
