use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform value in `[-range / 2, range / 2]`.
pub fn rand_float_spread(rng: &mut impl Rng, range: f32) -> f32 {
    range * (0.5 - rng.gen::<f32>())
}

/// Point inside the axis-aligned cube of edge `range` centered on the origin.
pub fn spread_vec3(rng: &mut impl Rng, range: f32) -> Vec3 {
    Vec3::new(
        rand_float_spread(rng, range),
        rand_float_spread(rng, range),
        rand_float_spread(rng, range),
    )
}

/// Source of initial scatter positions; seeded for reproducible scenes.
#[derive(Debug, Clone)]
pub struct SpreadRng(pub StdRng);

impl SpreadRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}
