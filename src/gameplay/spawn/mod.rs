pub mod composer;
pub mod spread;

pub use composer::{SceneComposerPlugin, ScenePlan, SceneRoster};
pub use spread::{rand_float_spread, spread_vec3, SpreadRng};
