use attractor_scene::core::config::{BodySpawnConfig, SceneConfig};
use attractor_scene::interaction::pointer::PointerActor;
use attractor_scene::physics::rapier::SimulationHost;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: Vec2 = Vec2::new(20.0, 10.0);

fn single_sphere_at(position: Vec3) -> SimulationHost {
    let cfg = SceneConfig {
        population: vec![BodySpawnConfig::sphere("#20ffa0").at(position)],
        ..default()
    };
    SimulationHost::init_world(cfg).unwrap()
}

#[test]
fn pointer_starts_at_origin_and_follows_input() {
    let mut host = single_sphere_at(Vec3::new(0.0, 4.0, 0.0));
    let start = host.pointer_translation().unwrap();
    assert!(start.length() < 1e-4, "pointer starts at {start}");

    host.set_pointer(Vec2::new(0.5, -0.5), VIEWPORT);
    host.step(DT).unwrap();
    let p = host.pointer_translation().unwrap();
    assert!((p - Vec3::new(5.0, -2.5, 0.0)).length() < 1e-4, "pointer at {p}");
}

#[test]
fn sweeping_pointer_shoves_a_resting_body() {
    let mut host = single_sphere_at(Vec3::new(3.0, 0.0, 0.0));
    // Pointer parked at x = 6 while the body settles on the origin.
    host.set_pointer(Vec2::new(0.6, 0.0), VIEWPORT);
    host.run(120, DT).unwrap();
    assert!(host.dynamic_translations()[0].length() < 0.2);

    let mut min_x = f32::MAX;
    for i in 0..=240 {
        let x = 6.0 - 12.0 * i as f32 / 240.0;
        host.set_pointer(Vec2::new(x / 10.0, 0.0), VIEWPORT);
        host.step(DT).unwrap();
        min_x = min_x.min(host.dynamic_translations()[0].x);
    }
    assert!(min_x < -1.0, "body was never pushed past the origin (min x {min_x})");
}

#[test]
fn radius_change_resizes_collider_without_recreating_body() {
    let mut host = single_sphere_at(Vec3::new(0.0, 4.0, 0.0));
    let pointer = {
        let world = host.world_mut();
        world
            .query_filtered::<Entity, With<PointerActor>>()
            .single(world)
            .unwrap()
    };
    let handle_before = host.world().get::<RapierRigidBodyHandle>(pointer).map(|h| h.0);

    host.controls_mut().set_pointer_radius(4.0).unwrap();
    host.step(DT).unwrap();
    assert_eq!(host.world().get::<PointerActor>(pointer).unwrap().radius(), 4.0);
    let collider = host.world().get::<Collider>(pointer).unwrap();
    assert_eq!(collider.as_ball().map(|b| b.radius()), Some(4.0));
    assert_eq!(host.world().get::<RapierRigidBodyHandle>(pointer).map(|h| h.0), handle_before);

    assert!(host.controls_mut().set_pointer_radius(6.0).is_err());
    host.step(DT).unwrap();
    assert_eq!(host.world().get::<PointerActor>(pointer).unwrap().radius(), 4.0);
}
