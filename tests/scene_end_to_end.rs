use attractor_scene::core::components::DynamicBody;
use attractor_scene::core::config::SceneConfig;
use attractor_scene::gameplay::spawn::{ScenePlan, SceneRoster};
use attractor_scene::interaction::pointer::PointerActor;
use attractor_scene::physics::bodies::{collider_half_extents, ShapeKind};
use attractor_scene::physics::rapier::{SimulationHost, WorldState};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn stock_host(seed: u64) -> SimulationHost {
    let cfg = SceneConfig { seed: Some(seed), ..default() };
    SimulationHost::init_world(cfg).expect("stock scene builds")
}

#[test]
fn stock_scene_has_twelve_dynamic_and_one_kinematic_body() {
    let mut host = stock_host(1);
    assert_eq!(host.state(), WorldState::Running);
    assert_eq!(host.body_counts(), (12, 1));

    let world = host.world_mut();
    let shapes: Vec<ShapeKind> = world
        .query_filtered::<&ShapeKind, With<DynamicBody>>()
        .iter(world)
        .copied()
        .collect();
    assert_eq!(shapes.iter().filter(|s| matches!(s, ShapeKind::Sphere { .. })).count(), 6);
    assert_eq!(shapes.iter().filter(|s| matches!(s, ShapeKind::Box { .. })).count(), 6);

    let pointers: Vec<f32> = world
        .query::<&PointerActor>()
        .iter(world)
        .map(|p| p.radius())
        .collect();
    assert_eq!(pointers, vec![1.0]);
}

#[test]
fn initial_positions_lie_inside_spread_cube() {
    for seed in [1, 2, 3, 99] {
        let host = stock_host(seed);
        let plan = host.world().resource::<ScenePlan>();
        let half = plan.spread / 2.0;
        assert_eq!(plan.bodies.len(), 12);
        for body in &plan.bodies {
            assert!(
                body.position.abs().max_element() <= half,
                "seed {seed}: {} outside ±{half}",
                body.position
            );
        }
    }
}

#[test]
fn every_collider_matches_its_visual_geometry() {
    let mut host = stock_host(4);
    let world = host.world_mut();
    let mut checked = 0;
    for (shape, collider) in world.query::<(&ShapeKind, &Collider)>().iter(world) {
        let half = collider_half_extents(collider).expect("ball or cuboid");
        assert_eq!(half, shape.visual_half_extents(), "{shape:?}");
        checked += 1;
    }
    assert_eq!(checked, 12);
    for (actor, collider) in world.query::<(&PointerActor, &Collider)>().iter(world) {
        assert_eq!(collider.as_ball().map(|b| b.radius()), Some(actor.radius()));
    }
}

#[test]
fn roster_lists_spawned_entities_in_plan_order() {
    let host = stock_host(5);
    let roster = host.world().resource::<SceneRoster>();
    let plan = host.world().resource::<ScenePlan>();
    assert_eq!(roster.bodies.len(), plan.bodies.len());
    for (entity, body) in roster.bodies.iter().zip(&plan.bodies) {
        assert_eq!(host.world().get::<ShapeKind>(*entity), Some(&body.shape));
    }
    assert!(roster.pointer.is_some());
}

#[test]
fn zero_gravity_is_installed_in_the_engine() {
    let mut host = stock_host(6);
    let world = host.world_mut();
    let cfg = world.query::<&RapierConfiguration>().single(world).expect("one context");
    assert_eq!(cfg.gravity, Vec3::ZERO);
}
