pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{ScenePlugin, ScenePresentationPlugin};
pub use self::core::config::{config::SceneConfig, config::WindowConfig};
pub use self::core::error::SceneError;
pub use physics::rapier::host::SimulationHost;
