use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::VectorWorkspace;
use crate::core::config::{POINTER_RADIUS_MAX, POINTER_RADIUS_MIN};
use crate::core::error::SceneError;
use crate::core::system::system_order::PrePhysicsSet;
use crate::physics::rapier::handle::{RapierBodyView, RigidBodyHandle};

/// Pointer position and visible viewport for the current frame.
///
/// `pointer` is normalized to `[-1, 1]` on both axes (+y up); `viewport` is the world-space
/// width/height visible on the `z = 0` plane.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pointer: Vec2,
    pub viewport: Vec2,
}

/// Checks a pointer radius against the inclusive `[1, 5]` bounds.
pub fn validate_radius(radius: f32) -> Result<f32, SceneError> {
    if (POINTER_RADIUS_MIN..=POINTER_RADIUS_MAX).contains(&radius) {
        Ok(radius)
    } else {
        Err(SceneError::OutOfRange {
            value: radius,
            min: POINTER_RADIUS_MIN,
            max: POINTER_RADIUS_MAX,
        })
    }
}

/// World-space target for a normalized pointer. Always on the camera-facing `z = 0` plane.
pub fn pointer_world_target(pointer: Vec2, viewport: Vec2) -> Vec3 {
    Vec3::new(pointer.x * viewport.x / 2.0, pointer.y * viewport.y / 2.0, 0.0)
}

/// Kinematic sphere that follows the pointer and shoves dynamic bodies around.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PointerActor {
    radius: f32,
}

impl PointerActor {
    pub fn create(initial_radius: f32) -> Result<Self, SceneError> {
        Ok(Self { radius: validate_radius(initial_radius)? })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Rejected values leave the current radius untouched.
    pub fn update_radius(&mut self, new_radius: f32) -> Result<(), SceneError> {
        self.radius = validate_radius(new_radius)?;
        Ok(())
    }

    pub fn collider(&self) -> Collider {
        Collider::ball(self.radius)
    }

    /// Positions the kinematic body under the pointer, bypassing forces entirely.
    pub fn tick(&self, body: &mut impl RigidBodyHandle, pointer: Vec2, viewport: Vec2) -> Vec3 {
        let target = pointer_world_target(pointer, viewport);
        body.set_next_kinematic_translation(target);
        target
    }

    pub fn bundle(&self) -> impl Bundle {
        (
            *self,
            Name::new("PointerActor"),
            Transform::IDENTITY,
            GlobalTransform::IDENTITY,
            RigidBody::KinematicPositionBased,
            self.collider(),
            VectorWorkspace::default(),
        )
    }
}

pub struct PointerActorPlugin;

impl Plugin for PointerActorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInput>().add_systems(
            Update,
            (refresh_pointer_collider, drive_pointer_actor).in_set(PrePhysicsSet),
        );
    }
}

fn drive_pointer_actor(
    input: Res<PointerInput>,
    mut q: Query<(&PointerActor, &mut Transform, &mut VectorWorkspace)>,
) {
    for (actor, transform, mut workspace) in q.iter_mut() {
        let mut body = RapierBodyView {
            transform,
            instantiated: true,
            impulse: None,
            sleeping: None,
        };
        workspace.0 = actor.tick(&mut body, input.pointer, input.viewport);
    }
}

/// Swaps the ball collider in place when the radius changed; the body itself is kept.
fn refresh_pointer_collider(
    mut q: Query<(&PointerActor, &mut Collider), Changed<PointerActor>>,
) {
    for (actor, mut collider) in q.iter_mut() {
        let current = collider.as_ball().map(|b| b.radius());
        if current != Some(actor.radius()) {
            *collider = actor.collider();
            debug!(target: "pointer", "pointer collider radius -> {:.2}", actor.radius());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::rapier::handle::mock::MockBody;

    #[test]
    fn centered_pointer_maps_to_origin_for_any_viewport() {
        for viewport in [Vec2::new(20.0, 10.0), Vec2::new(1.0, 1.0), Vec2::new(123.4, 0.5)] {
            assert_eq!(pointer_world_target(Vec2::ZERO, viewport), Vec3::ZERO);
        }
    }

    #[test]
    fn corner_pointer_maps_to_half_viewport() {
        assert_eq!(
            pointer_world_target(Vec2::new(1.0, 1.0), Vec2::new(20.0, 10.0)),
            Vec3::new(10.0, 5.0, 0.0)
        );
        assert_eq!(
            pointer_world_target(Vec2::new(-0.5, 1.0), Vec2::new(20.0, 10.0)),
            Vec3::new(-5.0, 5.0, 0.0)
        );
    }

    #[test]
    fn radius_bounds_are_inclusive() {
        let mut actor = PointerActor::create(1.0).unwrap();
        for bad in [0.0, 0.999, 5.001, -1.0] {
            assert!(
                matches!(actor.update_radius(bad), Err(SceneError::OutOfRange { .. })),
                "{bad} accepted"
            );
            assert_eq!(actor.radius(), 1.0, "rejected {bad} must keep the previous radius");
        }
        for good in [1.0, 3.0, 5.0] {
            actor.update_radius(good).unwrap();
            assert_eq!(actor.radius(), good);
        }
        assert!(PointerActor::create(5.5).is_err());
    }

    #[test]
    fn tick_drives_kinematic_target_on_plane() {
        let actor = PointerActor::create(2.0).unwrap();
        let mut body = MockBody::at(Vec3::new(0.0, 0.0, 3.0));
        let target = actor.tick(&mut body, Vec2::new(1.0, -1.0), Vec2::new(20.0, 10.0));
        assert_eq!(target, Vec3::new(10.0, -5.0, 0.0));
        assert_eq!(body.kinematic_targets, vec![target]);
        assert!(body.impulses.is_empty());
    }

    #[test]
    fn radius_change_swaps_collider() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(PointerActorPlugin);
        let actor = PointerActor::create(1.0).unwrap();
        let e = app.world_mut().spawn(actor.bundle()).id();
        app.update();
        app.world_mut()
            .get_mut::<PointerActor>(e)
            .unwrap()
            .update_radius(4.0)
            .unwrap();
        app.update();
        let collider = app.world().get::<Collider>(e).unwrap();
        assert_eq!(collider.as_ball().map(|b| b.radius()), Some(4.0));
    }

    #[test]
    fn system_moves_pointer_to_input_target() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(PointerActorPlugin);
        let e = app
            .world_mut()
            .spawn(PointerActor::create(1.0).unwrap().bundle())
            .id();
        app.insert_resource(PointerInput {
            pointer: Vec2::new(0.5, 0.5),
            viewport: Vec2::new(20.0, 10.0),
        });
        app.update();
        let tf = app.world().get::<Transform>(e).unwrap();
        assert_eq!(tf.translation, Vec3::new(5.0, 2.5, 0.0));
        assert_eq!(app.world().get::<VectorWorkspace>(e).unwrap().0, tf.translation);
    }
}
