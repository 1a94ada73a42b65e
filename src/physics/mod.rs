pub mod bodies;
pub mod gravity;
pub mod rapier;
