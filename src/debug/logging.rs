#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::stats::SimulationStats;
#[cfg(feature = "debug")]
use crate::core::config::SceneConfig;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct StatsLogTimer {
    pub time_accum: f32,
}

#[cfg(feature = "debug")]
pub fn simulation_logging_system(
    time: Res<Time>,
    cfg: Res<SceneConfig>,
    mut timer: ResMut<StatsLogTimer>,
    stats: Res<SimulationStats>,
) {
    let interval = cfg.debug.log_interval;
    if interval <= 0.0 {
        return;
    }
    timer.time_accum += time.delta_secs();
    if timer.time_accum >= interval {
        timer.time_accum = 0.0;
        info!(
            target: "scene",
            "SIM frame={} t={:.3}s fps={:.1} bodies={} mean_dist={:.3} max_dist={:.3} radius={:.2}",
            stats.frame,
            time.elapsed_secs(),
            stats.fps,
            stats.bodies,
            stats.mean_distance,
            stats.max_distance,
            stats.pointer_radius
        );
    }
}
