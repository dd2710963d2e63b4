//! Level domain: the RON-described level, its loader, and spawning.

pub mod data;
mod loader;
mod resources;
mod spawn;

#[cfg(test)]
mod tests;

pub use loader::{LevelLoadError, load_level_config};
pub use resources::LevelRules;
pub use spawn::{LevelEntity, LoadedLevel};

use bevy::prelude::*;

use crate::core::{DrainDeferredSet, GameState};
use crate::level::spawn::{consume_reset_scene, spawn_level};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level).add_systems(
            FixedUpdate,
            consume_reset_scene
                .after(DrainDeferredSet)
                .run_if(in_state(GameState::GameOver)),
        );
    }
}
