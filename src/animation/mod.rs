//! Animation domain: character animation state driver and facing.

mod rig;
mod systems;

#[cfg(test)]
mod tests;

pub use rig::{AnimFlags, AnimState, AnimationRig, AnimatorParams, Facing};

use bevy::prelude::*;

use crate::animation::systems::{apply_anim_flags, apply_deferred_anim_updates};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (apply_deferred_anim_updates, apply_anim_flags).chain(),
        );
    }
}
