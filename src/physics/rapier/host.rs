use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::rapier_physics::WorldState;
use crate::app::game::ScenePlugin;
use crate::core::components::DynamicBody;
use crate::core::config::SceneConfig;
use crate::core::error::SceneError;
use crate::interaction::controls::SceneControls;
use crate::interaction::pointer::{PointerActor, PointerInput};

/// Headless simulation: the whole scene minus window, renderer and input sampling.
///
/// The world is composed and instantiated by `init_world`; each `step` is exactly one frame
/// with one physics step of the requested length.
pub struct SimulationHost {
    app: App,
}

impl SimulationHost {
    /// Fails, before any world exists, if the configured scene cannot be built.
    pub fn init_world(config: SceneConfig) -> Result<Self, SceneError> {
        let scene = ScenePlugin::new(config)?;
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .add_plugins(scene);
        app.finish();
        app.cleanup();
        // First frame: startup composition, then the engine instantiates every body.
        app.update();
        if *app.world().resource::<WorldState>() != WorldState::Running {
            return Err(SceneError::EngineUnavailable);
        }
        Ok(Self { app })
    }

    /// Stock population with the given gravity and starting overlay state.
    pub fn init_default_world(gravity: Vec3, debug_overlay: bool) -> Result<Self, SceneError> {
        let mut cfg = SceneConfig::default();
        cfg.physics.gravity = gravity.to_array();
        cfg.debug.overlay = debug_overlay;
        Self::init_world(cfg)
    }

    /// Advances one frame; the physics step is exactly `dt` seconds with no sub-stepping.
    pub fn step(&mut self, dt: f32) -> Result<(), SceneError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SceneError::InvalidParameter { what: "step dt", value: dt });
        }
        self.app.insert_resource(TimestepMode::Fixed { dt, substeps: 1 });
        self.app.update();
        Ok(())
    }

    pub fn run(&mut self, ticks: usize, dt: f32) -> Result<(), SceneError> {
        for _ in 0..ticks {
            self.step(dt)?;
        }
        Ok(())
    }

    pub fn state(&self) -> WorldState {
        *self.app.world().resource::<WorldState>()
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Pointer and viewport used by the next step.
    pub fn set_pointer(&mut self, pointer: Vec2, viewport: Vec2) {
        self.app.insert_resource(PointerInput { pointer, viewport });
    }

    pub fn controls_mut(&mut self) -> Mut<'_, SceneControls> {
        self.app.world_mut().resource_mut::<SceneControls>()
    }

    pub fn dynamic_translations(&mut self) -> Vec<Vec3> {
        let world = self.app.world_mut();
        world
            .query_filtered::<&Transform, With<DynamicBody>>()
            .iter(world)
            .map(|tf| tf.translation)
            .collect()
    }

    pub fn pointer_translation(&mut self) -> Option<Vec3> {
        let world = self.app.world_mut();
        world
            .query_filtered::<&Transform, With<PointerActor>>()
            .iter(world)
            .next()
            .map(|tf| tf.translation)
    }

    /// Engine-instantiated bodies as `(dynamic, kinematic)`.
    pub fn body_counts(&mut self) -> (usize, usize) {
        let world = self.app.world_mut();
        world
            .query_filtered::<&RigidBody, With<RapierRigidBodyHandle>>()
            .iter(world)
            .fold((0, 0), |(d, k), rb| match rb {
                RigidBody::Dynamic => (d + 1, k),
                RigidBody::KinematicPositionBased | RigidBody::KinematicVelocityBased => (d, k + 1),
                RigidBody::Fixed => (d, k),
            })
    }
}
