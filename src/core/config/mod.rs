pub mod config;
pub mod report;

pub use config::{
    default_population, BodyDefaults, BodySpawnConfig, CameraConfig, DebugConfig, LightingConfig,
    PhysicsConfig, PointerConfig, SceneConfig, WindowConfig, DEFAULT_LAYERS, DEFAULT_PALETTE,
    POINTER_RADIUS_MAX, POINTER_RADIUS_MIN,
};
pub use report::{log_config_report, ConfigReport};
