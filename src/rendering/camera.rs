use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::core::config::{CameraConfig, LightingConfig, SceneConfig};

/// Key light position; it always points at the origin.
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const SHADOW_MAP_SIZE: usize = 1024;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DirectionalLightShadowMap { size: SHADOW_MAP_SIZE })
            .add_systems(Startup, (setup_camera, setup_lighting));
    }
}

/// Background color from the config, falling back to the stock dark gray.
pub fn background_color(cfg: &CameraConfig) -> Color {
    match Srgba::hex(&cfg.background) {
        Ok(c) => Color::Srgba(c),
        Err(_) => {
            warn!(target: "config", "camera.background '{}' unparsable; using #333333", cfg.background);
            Color::srgb_u8(0x33, 0x33, 0x33)
        }
    }
}

pub fn camera_transform(cfg: &CameraConfig) -> Transform {
    Transform::from_xyz(0.0, 0.0, cfg.distance).looking_at(Vec3::ZERO, Vec3::Y)
}

fn setup_camera(mut commands: Commands, cfg: Res<SceneConfig>) {
    commands.insert_resource(ClearColor(background_color(&cfg.camera)));
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: cfg.camera.fov_degrees.to_radians(),
            ..default()
        }),
        camera_transform(&cfg.camera),
    ));
}

fn setup_lighting(mut commands: Commands, cfg: Res<SceneConfig>) {
    let LightingConfig { ambient_brightness, directional_illuminance, shadows } = &cfg.lighting;
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: *ambient_brightness,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: *directional_illuminance,
            shadows_enabled: *shadows,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_camera_looks_down_negative_z_from_fifteen() {
        let tf = camera_transform(&CameraConfig::default());
        assert_eq!(tf.translation, Vec3::new(0.0, 0.0, 15.0));
        assert!((tf.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn bad_background_falls_back() {
        let cfg = CameraConfig { background: "nope".into(), ..default() };
        assert_eq!(background_color(&cfg), Color::srgb_u8(0x33, 0x33, 0x33));
        let stock = background_color(&CameraConfig::default());
        assert_eq!(stock.to_srgba(), Srgba::rgb_u8(0x33, 0x33, 0x33));
    }
}
