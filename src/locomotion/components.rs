//! Locomotion domain: player state, motor, and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimState;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platform tops)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Trigger volumes (ladders, ledges, zones, collectables)
    Trigger,
    /// Dynamic bodies the player can shove around
    PushBody,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for walls the player may bounce-jump off.
#[derive(Component, Debug)]
pub struct JumpableWall;

/// Per-character traversal state. Facing and the animation state live
/// on the [`crate::animation::AnimationRig`].
#[derive(Component, Debug)]
pub struct PlayerState {
    pub velocity: Vec3,
    pub grounded: bool,
    /// Suppresses horizontal input application during ladder, ledge
    /// and respawn hand-offs.
    pub movement_disabled: bool,
    /// Resets to 0 on landing; caps the double jump at 2.
    pub jumps_used: u8,
    /// One-shot flag set by the jump-pressed edge, cleared every
    /// integration tick.
    pub jump_requested: bool,
    pub wall_jump_armed: bool,
    pub wall_jumping: bool,
    /// While true, jump/use route to the hang drop/climb handlers.
    pub hang_input_enabled: bool,
    /// Last airborne contact normal; latched between contacts.
    pub wall_normal: Vec3,
    /// When the last jumpable-wall contact was observed; the disarm
    /// window counts from here.
    pub last_wall_contact_at: f32,
    pub walk_started_at: f32,
    /// Gait recorded when the first jump began, restored on landing.
    pub gait_before_jump: AnimState,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            grounded: false,
            movement_disabled: false,
            jumps_used: 0,
            jump_requested: false,
            wall_jump_armed: false,
            wall_jumping: false,
            hang_input_enabled: false,
            wall_normal: Vec3::ZERO,
            last_wall_contact_at: 0.0,
            walk_started_at: 0.0,
            gait_before_jump: AnimState::Idle,
        }
    }
}

/// The physics-controller boundary: grounded status plus the enable
/// gate scripted sequences flip while they own the character.
#[derive(Component, Debug)]
pub struct CharacterMotor {
    pub enabled: bool,
    /// Ground contact reported by the probe this tick.
    pub grounded: bool,
    pub half_extents: Vec3,
}

impl Default for CharacterMotor {
    fn default() -> Self {
        Self {
            enabled: true,
            grounded: false,
            half_extents: Vec3::new(0.3, 0.9, 0.3),
        }
    }
}
