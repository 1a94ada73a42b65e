pub mod body;

pub use body::{
    collider_half_extents, DynamicBodyEntity, DynamicBodySpec, ShapeKind, SPHERE_SECTORS,
    SPHERE_STACKS,
};
