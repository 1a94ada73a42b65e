#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::DynamicBody;
#[cfg(feature = "debug")]
use crate::interaction::pointer::PointerActor;

/// Per-frame snapshot of the scene, refreshed after the physics writeback.
#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SimulationStats {
    pub frame: u64,
    pub bodies: usize,
    pub mean_distance: f32,
    pub max_distance: f32,
    pub pointer_radius: f32,
    pub fps: f32,
}

#[cfg(feature = "debug")]
pub fn simulation_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<SimulationStats>,
    q_bodies: Query<&Transform, With<DynamicBody>>,
    q_pointer: Query<&PointerActor>,
) {
    stats.frame += 1;
    let inst_fps = 1.0 / time.delta_secs().max(1e-6);
    stats.fps = if stats.fps == 0.0 { inst_fps } else { stats.fps * 0.9 + inst_fps * 0.1 };

    let (count, sum, max) = q_bodies.iter().fold((0usize, 0.0f32, 0.0f32), |(n, s, m), tf| {
        let d = tf.translation.length();
        (n + 1, s + d, m.max(d))
    });
    stats.bodies = count;
    stats.mean_distance = if count > 0 { sum / count as f32 } else { 0.0 };
    stats.max_distance = max;
    if let Some(actor) = q_pointer.iter().next() {
        stats.pointer_radius = actor.radius();
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;

    #[test]
    fn distances_are_measured_from_origin() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<SimulationStats>()
            .add_systems(Update, simulation_stats_collect_system);
        app.world_mut().spawn((DynamicBody, Transform::from_xyz(3.0, 4.0, 0.0)));
        app.world_mut().spawn((DynamicBody, Transform::from_xyz(0.0, 0.0, -1.0)));
        app.world_mut().spawn(PointerActor::create(2.5).unwrap());
        app.update();
        let stats = app.world().resource::<SimulationStats>();
        assert_eq!(stats.frame, 1);
        assert_eq!(stats.bodies, 2);
        assert!((stats.mean_distance - 3.0).abs() < 1e-6);
        assert!((stats.max_distance - 5.0).abs() < 1e-6);
        assert_eq!(stats.pointer_radius, 2.5);
    }
}
