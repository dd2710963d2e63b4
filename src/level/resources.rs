//! Level domain: runtime rules derived from the loaded config.

use bevy::prelude::*;

/// The level facts the game loop needs every tick, pulled out of the
/// config at spawn time.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelRules {
    pub start_position: Vec3,
    pub start_rotation: Quat,
    pub finish_position: Vec3,
    pub fall_kill_y: f32,
}
