pub mod attractor;

pub use attractor::{centering_impulse, Attractor, AttractorPlugin};
