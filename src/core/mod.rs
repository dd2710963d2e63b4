//! Core domain: game states, camera, and the deferred-action scheduler.

mod scheduler;
mod state;
mod systems;


pub use scheduler::{DeferredFired, DeferredKind, DeferredQueue};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{drain_deferred, finish_boot, follow_player_camera, setup_camera};

/// Label for the scheduler drain so downstream domains can order
/// their consumers after it within the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrainDeferredSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<DeferredQueue>()
            .add_message::<DeferredFired>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(Update, follow_player_camera)
            .add_systems(FixedUpdate, drain_deferred.in_set(DrainDeferredSet));
    }
}
