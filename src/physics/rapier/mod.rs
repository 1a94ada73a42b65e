pub mod handle;
pub mod host;
pub mod rapier_physics;

pub use handle::{DynamicBodyView, RapierBodyView, RigidBodyHandle};
pub use host::SimulationHost;
pub use rapier_physics::{timestep_mode, SimulationHostPlugin, WorldState};
