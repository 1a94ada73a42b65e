use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::SceneConfig;

/// Lifecycle of the dynamics world. `Running` once the Rapier context has been configured.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WorldState {
    #[default]
    Uninitialized,
    Running,
}

/// One fixed physics step per frame at `timestep_hz`; `0` (or anything non-positive) steps by
/// frame time instead, capped at 1/60 s.
pub fn timestep_mode(timestep_hz: f32) -> TimestepMode {
    if timestep_hz.is_finite() && timestep_hz > 0.0 {
        TimestepMode::Fixed { dt: 1.0 / timestep_hz, substeps: 1 }
    } else {
        TimestepMode::Variable { max_dt: 1.0 / 60.0, time_scale: 1.0, substeps: 1 }
    }
}

pub struct SimulationHostPlugin; // our wrapper to configure Rapier

impl Plugin for SimulationHostPlugin {
    fn build(&self, app: &mut App) {
        let hz = app
            .world()
            .get_resource::<SceneConfig>()
            .map(|c| c.physics.timestep_hz)
            .unwrap_or(60.0);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            // after the plugin, which inserts its own default
            .insert_resource(timestep_mode(hz))
            .init_resource::<WorldState>()
            .add_systems(
                PreUpdate,
                configure_physics_world.run_if(resource_equals(WorldState::Uninitialized)),
            );
    }
}

fn configure_physics_world(
    mut q_cfg: Query<&mut RapierConfiguration>,
    scene_cfg: Option<Res<SceneConfig>>,
    mut state: ResMut<WorldState>,
) {
    // RapierConfiguration lives on the default context entity, spawned by the plugin.
    let Ok(mut cfg) = q_cfg.single_mut() else {
        return;
    };
    let gravity = scene_cfg.map(|c| c.gravity()).unwrap_or(Vec3::ZERO);
    cfg.gravity = gravity;
    *state = WorldState::Running;
    info!(target: "physics", "physics world running (gravity={gravity})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestep_from_rate() {
        assert_eq!(timestep_mode(120.0), TimestepMode::Fixed { dt: 1.0 / 120.0, substeps: 1 });
        for hz in [0.0, -5.0, f32::NAN] {
            assert!(matches!(timestep_mode(hz), TimestepMode::Variable { substeps: 1, .. }));
        }
    }
}
