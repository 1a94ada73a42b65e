use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy_rapier3d::render::RapierDebugRenderPlugin;

use crate::core::config::{log_config_report, SceneConfig};
use crate::core::error::SceneError;
use crate::core::system::system_order::{ControlsSet, PointerInputSet, PrePhysicsSet};
use crate::debug::{DebugPlugin, SimulationStatsPlugin};
use crate::gameplay::spawn::{SceneComposerPlugin, ScenePlan};
use crate::interaction::controls::{pointer_radius_keys, SceneControls, SceneControlsPlugin};
use crate::interaction::pointer::{sample_pointer_input, PointerActorPlugin};
use crate::physics::gravity::{Attractor, AttractorPlugin};
use crate::physics::rapier::SimulationHostPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::visuals::VisualsPlugin;

/// The simulation itself: physics host, attractor, pointer actor and scene composition.
/// Needs no window or renderer.
pub struct ScenePlugin {
    config: SceneConfig,
    plan: ScenePlan,
    attractor: Attractor,
}

impl ScenePlugin {
    /// Resolves every fallible part of the scene up front.
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let plan = ScenePlan::resolve(&config)?;
        let attractor = Attractor::new(config.physics.attractor_strength)?;
        Ok(Self { config, plan, attractor })
    }
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .configure_sets(PreUpdate, PointerInputSet.after(InputSystem))
            .configure_sets(Update, (ControlsSet, PrePhysicsSet.after(ControlsSet)))
            .add_plugins((
                SimulationHostPlugin,
                AttractorPlugin,
                PointerActorPlugin,
                SceneControlsPlugin,
                SceneComposerPlugin { plan: self.plan.clone() },
                SimulationStatsPlugin,
            ))
            // after the plugins' defaults
            .insert_resource(self.attractor)
            .insert_resource(SceneControls::from_config(&self.config))
            .add_systems(Startup, log_config_report);
    }
}

/// Window-facing layer on top of `ScenePlugin`: camera, lights, meshes, input, debug overlay.
pub struct ScenePresentationPlugin;

impl Plugin for ScenePresentationPlugin {
    fn build(&self, app: &mut App) {
        let overlay = app
            .world()
            .get_resource::<SceneControls>()
            .is_some_and(|c| c.debug_overlay());
        app.add_plugins((
            CameraPlugin,
            VisualsPlugin,
            DebugPlugin,
            RapierDebugRenderPlugin { enabled: overlay, ..default() },
        ))
        .add_systems(PreUpdate, sample_pointer_input.in_set(PointerInputSet))
        .add_systems(Update, (pointer_radius_keys.before(ControlsSet), exit_on_escape));
    }
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!(target: "scene", "escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}
