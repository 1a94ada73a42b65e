use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{DynamicBody, VectorWorkspace};
use crate::core::error::{non_negative, SceneError};
use crate::core::system::system_order::PrePhysicsSet;
use crate::physics::rapier::handle::{DynamicBodyView, RigidBodyHandle};

/// Impulse pulling a body at `translation` back toward the origin.
///
/// Magnitude grows linearly with distance (spring-like); with damping on the body this gives
/// a decaying oscillation around the origin rather than a hard stop.
#[inline]
pub fn centering_impulse(translation: Vec3, strength: f32) -> Vec3 {
    -translation * strength
}

/// Per-body centering force, applied once per frame before the physics step.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    strength: f32,
}

impl Default for Attractor {
    fn default() -> Self {
        Self { strength: 1.0 }
    }
}

impl Attractor {
    pub fn new(strength: f32) -> Result<Self, SceneError> {
        Ok(Self { strength: non_negative("physics.attractor_strength", strength)? })
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Reads the body's translation and applies the centering impulse (waking it).
    /// Returns the impulse, or `None` when the engine has not instantiated the body yet.
    pub fn apply(&self, body: &mut impl RigidBodyHandle) -> Option<Vec3> {
        let translation = body.translation().ok()?;
        let impulse = centering_impulse(translation, self.strength);
        body.apply_impulse(impulse, true);
        Some(impulse)
    }
}

/// Plugin adding the per-body centering impulse applied before physics.
pub struct AttractorPlugin;

impl Plugin for AttractorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Attractor>()
            .add_systems(Update, apply_attractor_impulses.in_set(PrePhysicsSet));
    }
}

fn apply_attractor_impulses(
    attractor: Res<Attractor>,
    mut q: Query<
        (
            Entity,
            &Transform,
            Has<RapierRigidBodyHandle>,
            &mut ExternalImpulse,
            Option<&mut Sleeping>,
            &mut VectorWorkspace,
        ),
        With<DynamicBody>,
    >,
) {
    for (entity, transform, instantiated, impulse, sleeping, mut workspace) in q.iter_mut() {
        let mut body = DynamicBodyView {
            transform,
            instantiated,
            impulse,
            sleeping,
        };
        match attractor.apply(&mut body) {
            Some(applied) => workspace.0 = applied,
            None => trace!(target: "physics", "attractor skipped {entity:?}: body not instantiated yet"),
        }
    }
}
