//! Level domain: data definitions for the level RON file.
//!
//! These structs mirror assets/config/level.ron. Positions are plain
//! arrays so the file format stays independent of the math types.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::Facing;
use crate::ladder::LadderAngle;
use crate::locomotion::LocomotionTuning;

pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelConfig {
    pub tuning: LocomotionTuning,
    pub start_position: [f32; 3],
    /// Yaw applied to the player root at spawn and respawn.
    pub start_rotation_degrees: f32,
    /// Yaw the visual model child spawns with, before the first
    /// facing update takes over.
    pub model_start_rotation_degrees: f32,
    pub finish_position: [f32; 3],
    pub fall_kill_y: f32,
    pub lives: u32,
    pub countdown_seconds: f32,
    pub blocks: Vec<BlockDef>,
    pub push_blocks: Vec<BlockDef>,
    pub platforms: Vec<PlatformDef>,
    pub elevators: Vec<ElevatorDef>,
    pub ladders: Vec<LadderDef>,
    pub ledges: Vec<LedgeDef>,
    pub coins: Vec<[f32; 3]>,
    pub time_pickups: Vec<TimePickupDef>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tuning: LocomotionTuning::default(),
            start_position: [0.0, 2.0, 0.0],
            start_rotation_degrees: 0.0,
            model_start_rotation_degrees: 90.0,
            finish_position: [24.0, 2.0, 0.0],
            fall_kill_y: -50.0,
            lives: 3,
            countdown_seconds: 120.0,
            blocks: vec![BlockDef {
                position: [0.0, -0.5, 0.0],
                size: [60.0, 1.0, 4.0],
                kind: BlockKindDef::Ground,
            }],
            push_blocks: Vec::new(),
            platforms: Vec::new(),
            elevators: Vec::new(),
            ladders: Vec::new(),
            ledges: Vec::new(),
            coins: Vec::new(),
            time_pickups: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
pub enum BlockKindDef {
    #[default]
    Ground,
    Wall,
    /// A wall the character may bounce-jump off.
    JumpableWall,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
    #[serde(default)]
    pub kind: BlockKindDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub waypoints: Vec<[f32; 3]>,
    pub speed: f32,
    pub size: [f32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElevatorDef {
    pub top: [f32; 3],
    pub bottom: [f32; 3],
    pub speed: f32,
    pub size: [f32; 3],
    /// Landing zone centers; standing in one summons the carriage.
    pub zones: Vec<[f32; 3]>,
    #[serde(default)]
    pub zone_size: Option<[f32; 3]>,
    #[serde(default)]
    pub panel: Option<PanelDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PanelDef {
    pub position: [f32; 3],
    #[serde(default = "default_required_coins")]
    pub required_coins: u32,
}

fn default_required_coins() -> u32 {
    7
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub enum LadderLeanDef {
    TopLeftToBottomRight,
    TopRightToBottomLeft,
}

impl LadderLeanDef {
    pub fn angle(self) -> LadderAngle {
        match self {
            LadderLeanDef::TopLeftToBottomRight => LadderAngle::TopLeftToBottomRight,
            LadderLeanDef::TopRightToBottomLeft => LadderAngle::TopRightToBottomLeft,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LadderDef {
    pub lean: LadderLeanDef,
    pub snap_bottom: [f32; 3],
    pub snap_top: [f32; 3],
    pub reached_bottom: [f32; 3],
    pub reached_top: [f32; 3],
    pub volume_center: [f32; 3],
    pub volume_size: [f32; 3],
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub enum FacingDef {
    Right,
    Left,
}

impl FacingDef {
    pub fn facing(self) -> Facing {
        match self {
            FacingDef::Right => Facing::Right,
            FacingDef::Left => Facing::Left,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgeDef {
    pub position: [f32; 3],
    pub facing: FacingDef,
    pub size: [f32; 3],
    /// Index into `platforms`; the volume rides that platform and a
    /// hanging character rides along with it.
    #[serde(default)]
    pub parent_platform: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimePickupDef {
    pub position: [f32; 3],
    pub add_time: f32,
}
