//! Debug module: feature gated overlay, key bindings and periodic stats logging.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::SimulationStats;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::system_order::{ControlsSet, PrePhysicsSet};

/// Windowed-only debug surface: overlay toggle and drawing.
#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use overlay::{draw_impulse_gizmos, sync_rapier_debug_render};

        app.add_systems(Update, debug_key_input_system.before(ControlsSet))
            .add_systems(
                Update,
                (sync_rapier_debug_render, draw_impulse_gizmos).after(PrePhysicsSet),
            );
    }
}

/// Stats collection + periodic `SIM` log line; also runs headless.
#[cfg(feature = "debug")]
pub struct SimulationStatsPlugin;
#[cfg(feature = "debug")]
impl Plugin for SimulationStatsPlugin {
    fn build(&self, app: &mut App) {
        use logging::{simulation_logging_system, StatsLogTimer};
        use stats::simulation_stats_collect_system;

        app.init_resource::<SimulationStats>()
            .init_resource::<StatsLogTimer>()
            .add_systems(
                Last,
                (simulation_stats_collect_system, simulation_logging_system).chain(),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}

#[cfg(not(feature = "debug"))]
pub struct SimulationStatsPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for SimulationStatsPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
