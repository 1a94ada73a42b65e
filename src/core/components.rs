use bevy::prelude::*;

use crate::core::error::SceneError;

/// Marker component for a dynamic, attractor-driven body (holds physics body & collider).
#[derive(Component, Debug, Default, Copy, Clone)]
pub struct DynamicBody;

/// Per-entity scratch vector. Overwritten each tick before use with the last computed
/// impulse (dynamic bodies) or kinematic target (pointer); never read as input.
#[derive(Component, Debug, Default, Deref, DerefMut, Copy, Clone, PartialEq)]
pub struct VectorWorkspace(pub Vec3);

/// Render color of a body. Carries no simulation meaning.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq)]
pub struct BodyColor(pub Color);

impl BodyColor {
    pub fn parse(hex: &str) -> Result<Self, SceneError> {
        Srgba::hex(hex)
            .map(|c| Self(Color::Srgba(c)))
            .map_err(|_| SceneError::InvalidColor { value: hex.to_string() })
    }
}

/// Tag for the mesh child attached to a body by the rendering plugin.
#[derive(Component, Debug, Copy, Clone)]
pub struct BodyVisual;
