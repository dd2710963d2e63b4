//! Core domain: game state definitions for the level run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    GameOver,
    Victory,
}
