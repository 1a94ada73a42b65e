//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. PointerInputSet (PreUpdate: sample window cursor into `PointerInput`)
//! 2. ControlsSet (Update: push live settings onto the pointer actor)
//! 3. PrePhysicsSet (Update: centering impulses + kinematic pointer target, once per frame)
//! 4. Rapier (PostUpdate, handled by plugin: sync, single step, writeback)
//! 5. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PointerInputSet; // window/camera -> PointerInput

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ControlsSet; // SceneControls -> PointerActor

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // impulses and kinematic targets written before the physics step
