use bevy::prelude::*;
use rand::Rng;

use super::spread::SpreadRng;
use crate::core::config::SceneConfig;
use crate::core::error::SceneError;
use crate::interaction::controls::SceneControls;
use crate::interaction::pointer::PointerActor;
use crate::physics::bodies::{DynamicBodyEntity, DynamicBodySpec};

/// Fully validated scene, ready to spawn. Resolving it is the only fallible step of
/// composition, so a bad population never yields a partial world.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScenePlan {
    pub bodies: Vec<DynamicBodyEntity>,
    pub pointer: PointerActor,
    pub spread: f32,
}

impl ScenePlan {
    pub fn resolve(cfg: &SceneConfig) -> Result<Self, SceneError> {
        let mut rng = SpreadRng::new(cfg.seed);
        Self::resolve_with(cfg, &mut rng.0)
    }

    /// Population entries are resolved in order; positions without an explicit value are drawn
    /// from `rng` exactly once.
    pub fn resolve_with(cfg: &SceneConfig, rng: &mut impl Rng) -> Result<Self, SceneError> {
        let spread = cfg.bodies.spread;
        let bodies = cfg
            .population
            .iter()
            .map(|entry| {
                let spec = DynamicBodySpec::from_config(entry, &cfg.bodies)?;
                DynamicBodyEntity::create(&spec, rng, spread)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let radius = SceneControls::from_config(cfg).pointer_radius();
        let pointer = PointerActor::create(radius)?;
        Ok(Self { bodies, pointer, spread })
    }
}

/// Entities created at composition, in spawn order.
#[derive(Resource, Debug, Default, Clone)]
pub struct SceneRoster {
    pub bodies: Vec<Entity>,
    pub pointer: Option<Entity>,
}

pub struct SceneComposerPlugin {
    pub plan: ScenePlan,
}

impl Plugin for SceneComposerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.plan.clone())
            .init_resource::<SceneRoster>()
            .add_systems(Startup, compose_scene);
    }
}

fn compose_scene(mut commands: Commands, plan: Res<ScenePlan>, mut roster: ResMut<SceneRoster>) {
    roster.bodies = plan
        .bodies
        .iter()
        .map(|body| commands.spawn(body.bundle()).id())
        .collect();
    roster.pointer = Some(commands.spawn(plan.pointer.bundle()).id());
    let spheres = plan
        .bodies
        .iter()
        .filter(|b| b.shape.label() == "Sphere")
        .count();
    info!(
        target: "scene",
        "composed scene: {} bodies ({} spheres, {} boxes), pointer radius {:.2}, spread {:.1}",
        plan.bodies.len(),
        spheres,
        plan.bodies.len() - spheres,
        plan.pointer.radius(),
        plan.spread
    );
}
