use bevy::prelude::*;

use crate::core::components::{BodyColor, BodyVisual};
use crate::interaction::pointer::PointerActor;
use crate::physics::bodies::{ShapeKind, SPHERE_SECTORS, SPHERE_STACKS};

/// Tag for the pointer's mesh child. Unit sphere, scaled by the live radius.
#[derive(Component, Debug, Copy, Clone)]
pub struct PointerVisual;

pub const POINTER_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.25);

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (attach_body_visuals, attach_pointer_visual, sync_pointer_visual)
                .chain()
                .before(bevy::transform::TransformSystem::TransformPropagate),
        );
    }
}

/// Mesh child per body, built from the same `ShapeKind` as its collider.
fn attach_body_visuals(
    mut commands: Commands,
    q: Query<(Entity, &ShapeKind, &BodyColor), Added<ShapeKind>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, shape, color) in q.iter() {
        let mesh = meshes.add(shape.mesh());
        let material = materials.add(StandardMaterial {
            base_color: color.0,
            perceptual_roughness: 0.4,
            ..default()
        });
        commands.entity(entity).with_child((
            BodyVisual,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::IDENTITY,
        ));
    }
}

fn attach_pointer_visual(
    mut commands: Commands,
    q: Query<(Entity, &PointerActor), Added<PointerActor>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, actor) in q.iter() {
        let mesh = meshes.add(Sphere::new(1.0).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
        let material = materials.add(StandardMaterial {
            base_color: POINTER_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        commands.entity(entity).with_child((
            PointerVisual,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_scale(Vec3::splat(actor.radius())),
        ));
    }
}

fn sync_pointer_visual(
    actors: Query<&PointerActor, Changed<PointerActor>>,
    mut visuals: Query<(&ChildOf, &mut Transform), With<PointerVisual>>,
) {
    for (child_of, mut tf) in visuals.iter_mut() {
        let Ok(actor) = actors.get(child_of.parent()) else {
            continue;
        };
        let scale = Vec3::splat(actor.radius());
        if tf.scale != scale {
            tf.scale = scale;
        }
    }
}
