use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::error::SceneError;

/// The slice of a dynamics-engine body the scene logic talks to.
///
/// Implementations never own the body: they borrow whatever the engine exposes for the
/// duration of one tick.
pub trait RigidBodyHandle {
    /// Current engine-owned translation, or `EngineUnavailable` if the engine has not
    /// instantiated the body yet.
    fn translation(&self) -> Result<Vec3, SceneError>;
    fn apply_impulse(&mut self, impulse: Vec3, wake: bool);
    fn set_next_kinematic_translation(&mut self, target: Vec3);
}

/// Borrowed view of a bevy_rapier body for one system iteration.
///
/// `instantiated` mirrors the presence of `RapierRigidBodyHandle`, which bevy_rapier inserts
/// once the backing Rapier body exists (first physics sync after spawn).
pub struct RapierBodyView<'a> {
    pub transform: Mut<'a, Transform>,
    pub instantiated: bool,
    pub impulse: Option<Mut<'a, ExternalImpulse>>,
    pub sleeping: Option<Mut<'a, Sleeping>>,
}

impl RigidBodyHandle for RapierBodyView<'_> {
    fn translation(&self) -> Result<Vec3, SceneError> {
        if !self.instantiated {
            return Err(SceneError::EngineUnavailable);
        }
        Ok(self.transform.translation)
    }

    fn apply_impulse(&mut self, impulse: Vec3, wake: bool) {
        // One writer per body per frame; bevy_rapier applies it on the next step.
        if let Some(ext) = self.impulse.as_mut() {
            ext.impulse = impulse;
        }
        if wake {
            if let Some(sleeping) = self.sleeping.as_mut() {
                if sleeping.sleeping {
                    sleeping.sleeping = false;
                }
            }
        }
    }

    fn set_next_kinematic_translation(&mut self, target: Vec3) {
        // Kinematic position-based bodies pick up Transform changes as their next kinematic
        // position; only touch it on change so Changed<Transform> stays meaningful.
        if self.transform.translation != target {
            self.transform.translation = target;
        }
    }
}

/// Impulse-only view of a dynamic body: the solver owns its `Transform`, so it is only read.
pub struct DynamicBodyView<'a> {
    pub transform: &'a Transform,
    pub instantiated: bool,
    pub impulse: Mut<'a, ExternalImpulse>,
    pub sleeping: Option<Mut<'a, Sleeping>>,
}

impl RigidBodyHandle for DynamicBodyView<'_> {
    fn translation(&self) -> Result<Vec3, SceneError> {
        if !self.instantiated {
            return Err(SceneError::EngineUnavailable);
        }
        Ok(self.transform.translation)
    }

    fn apply_impulse(&mut self, impulse: Vec3, wake: bool) {
        self.impulse.impulse = impulse;
        if wake {
            if let Some(sleeping) = self.sleeping.as_mut() {
                if sleeping.sleeping {
                    sleeping.sleeping = false;
                }
            }
        }
    }

    fn set_next_kinematic_translation(&mut self, target: Vec3) {
        trace!(target: "physics", "kinematic target {target} ignored on a dynamic body");
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// In-memory stand-in for an engine body.
    #[derive(Debug, Default, Clone)]
    pub struct MockBody {
        pub translation: Option<Vec3>,
        pub impulses: Vec<(Vec3, bool)>,
        pub kinematic_targets: Vec<Vec3>,
    }

    impl MockBody {
        pub fn at(translation: Vec3) -> Self {
            Self { translation: Some(translation), ..default() }
        }
    }

    impl RigidBodyHandle for MockBody {
        fn translation(&self) -> Result<Vec3, SceneError> {
            self.translation.ok_or(SceneError::EngineUnavailable)
        }
        fn apply_impulse(&mut self, impulse: Vec3, wake: bool) {
            self.impulses.push((impulse, wake));
        }
        fn set_next_kinematic_translation(&mut self, target: Vec3) {
            self.kinematic_targets.push(target);
        }
    }
}
