use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::core::components::{BodyColor, DynamicBody, VectorWorkspace};
use crate::core::config::{BodyDefaults, BodySpawnConfig};
use crate::core::error::{non_negative, positive, SceneError};
use crate::gameplay::spawn::spread::spread_vec3;

/// Segment counts of the UV sphere mesh.
pub const SPHERE_SECTORS: u32 = 32;
pub const SPHERE_STACKS: u32 = 32;

/// Collision + render geometry of a dynamic body. Fixed at creation.
///
/// Collider and mesh are both derived from these dimensions so they cannot diverge.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl ShapeKind {
    pub fn sphere(radius: f32) -> Result<Self, SceneError> {
        Ok(Self::Sphere { radius: positive("sphere radius", radius)? })
    }

    /// Cube with the given edge length.
    pub fn cube(edge: f32) -> Result<Self, SceneError> {
        let edge = positive("cube edge", edge)?;
        Ok(Self::Box { half_extents: Vec3::splat(edge * 0.5) })
    }

    pub fn cuboid(half_extents: Vec3) -> Result<Self, SceneError> {
        positive("box half extent x", half_extents.x)?;
        positive("box half extent y", half_extents.y)?;
        positive("box half extent z", half_extents.z)?;
        Ok(Self::Box { half_extents })
    }

    /// Shape from a population entry: `"Sphere"` / `"Box"`, `size` = radius / edge.
    pub fn from_config(entry: &BodySpawnConfig, defaults: &BodyDefaults) -> Result<Self, SceneError> {
        match entry.shape.as_str() {
            "Sphere" => Self::sphere(entry.size.unwrap_or(defaults.sphere_radius)),
            "Box" => Self::cube(entry.size.unwrap_or(defaults.cube_size)),
            other => Err(SceneError::UnknownShape { name: other.to_string() }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Sphere { .. } => "Sphere",
            ShapeKind::Box { .. } => "Box",
        }
    }

    pub fn collider(&self) -> Collider {
        match *self {
            ShapeKind::Sphere { radius } => Collider::ball(radius),
            ShapeKind::Box { half_extents: h } => Collider::cuboid(h.x, h.y, h.z),
        }
    }

    pub fn mesh(&self) -> Mesh {
        match *self {
            ShapeKind::Sphere { radius } => {
                Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS)
            }
            ShapeKind::Box { half_extents } => Mesh::from(Cuboid::from_size(half_extents * 2.0)),
        }
    }

    /// Half extents of the rendered mesh's bounding box.
    pub fn visual_half_extents(&self) -> Vec3 {
        match *self {
            ShapeKind::Sphere { radius } => Vec3::splat(radius),
            ShapeKind::Box { half_extents } => half_extents,
        }
    }
}

/// Half extents of a collider's bounding box, for the shapes scene bodies use.
pub fn collider_half_extents(collider: &Collider) -> Option<Vec3> {
    if let Some(ball) = collider.as_ball() {
        return Some(Vec3::splat(ball.radius()));
    }
    collider.as_cuboid().map(|cuboid| cuboid.half_extents())
}

/// Creation request for a dynamic body. `position: None` = scatter inside the spread cube.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicBodySpec {
    pub shape: ShapeKind,
    pub position: Option<Vec3>,
    pub color: BodyColor,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
}

impl DynamicBodySpec {
    pub fn from_config(entry: &BodySpawnConfig, defaults: &BodyDefaults) -> Result<Self, SceneError> {
        Ok(Self {
            shape: ShapeKind::from_config(entry, defaults)?,
            position: entry.position.map(Vec3::from_array),
            color: BodyColor::parse(&entry.color)?,
            linear_damping: defaults.linear_damping,
            angular_damping: defaults.angular_damping,
            friction: defaults.friction,
        })
    }
}

/// A resolved dynamic body: every parameter fixed, ready to spawn.
///
/// Position is the spawn position only; once spawned the engine owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicBodyEntity {
    pub shape: ShapeKind,
    pub position: Vec3,
    pub color: BodyColor,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
}

impl DynamicBodyEntity {
    /// Validates `spec` and resolves its position (explicit, or drawn once from `rng`
    /// within `[-spread / 2, spread / 2]` per axis).
    pub fn create(spec: &DynamicBodySpec, rng: &mut impl Rng, spread: f32) -> Result<Self, SceneError> {
        // Re-run geometry checks: specs can be built by hand, bypassing the constructors.
        match spec.shape {
            ShapeKind::Sphere { radius } => {
                ShapeKind::sphere(radius)?;
            }
            ShapeKind::Box { half_extents } => {
                ShapeKind::cuboid(half_extents)?;
            }
        }
        let linear_damping = non_negative("linear_damping", spec.linear_damping)?;
        let angular_damping = non_negative("angular_damping", spec.angular_damping)?;
        let friction = non_negative("friction", spec.friction)?;
        let position = match spec.position {
            Some(p) => p,
            None => spread_vec3(rng, non_negative("spread", spread)?),
        };
        Ok(Self {
            shape: spec.shape,
            position,
            color: spec.color,
            linear_damping,
            angular_damping,
            friction,
        })
    }

    pub fn bundle(&self) -> impl Bundle {
        let transform = Transform::from_translation(self.position);
        (
            DynamicBody,
            self.shape,
            self.color,
            Name::new(format!("{}Body", self.shape.label())),
            transform,
            GlobalTransform::from(transform),
            RigidBody::Dynamic,
            self.shape.collider(),
            Damping {
                linear_damping: self.linear_damping,
                angular_damping: self.angular_damping,
            },
            Friction::coefficient(self.friction),
            ExternalImpulse::default(),
            VectorWorkspace::default(),
        )
    }
}
