pub mod pointer_actor;
pub mod pointer_input;

pub use pointer_actor::{
    pointer_world_target, validate_radius, PointerActor, PointerActorPlugin, PointerInput,
};
pub use pointer_input::{cursor_to_normalized, sample_pointer_input, viewport_at_distance};
