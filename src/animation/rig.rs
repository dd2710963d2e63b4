//! Animation domain: state enum, one-hot flag mapping, and the rig component.

use bevy::prelude::*;

/// Character animation states. Exactly one is active at a time; the
/// one-hot boolean set consumed by the rendering layer is derived from
/// this value by [`AnimState::flags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Walking,
    Running,
    Jumping,
    DoubleJumping,
    JumpToHanging,
    HangingIdle,
    HangingDropping,
    HangingClimbing,
    LadderClimbingUp,
    LadderClimbingDown,
    LadderDropping,
    LadderTopClimb,
}

impl AnimState {
    pub const ALL: [AnimState; 13] = [
        AnimState::Idle,
        AnimState::Walking,
        AnimState::Running,
        AnimState::Jumping,
        AnimState::DoubleJumping,
        AnimState::JumpToHanging,
        AnimState::HangingIdle,
        AnimState::HangingDropping,
        AnimState::HangingClimbing,
        AnimState::LadderClimbingUp,
        AnimState::LadderClimbingDown,
        AnimState::LadderDropping,
        AnimState::LadderTopClimb,
    ];

    /// Map the state to the boolean parameter set the rendering layer
    /// consumes. One flag true, all siblings false, by construction.
    pub fn flags(self) -> AnimFlags {
        let mut flags = AnimFlags::default();
        match self {
            AnimState::Idle => flags.is_idle = true,
            AnimState::Walking => flags.is_walking = true,
            AnimState::Running => flags.is_running = true,
            AnimState::Jumping => flags.is_jumping = true,
            AnimState::DoubleJumping => flags.is_double_jumping = true,
            AnimState::JumpToHanging => flags.is_jump_to_hanging = true,
            AnimState::HangingIdle => flags.is_hanging_idle = true,
            AnimState::HangingDropping => flags.is_hanging_dropping = true,
            AnimState::HangingClimbing => flags.is_hanging_climbing = true,
            AnimState::LadderClimbingUp => flags.is_ladder_climbing_up = true,
            AnimState::LadderClimbingDown => flags.is_ladder_climbing_down = true,
            AnimState::LadderDropping => flags.is_ladder_dropping = true,
            AnimState::LadderTopClimb => flags.is_ladder_top_climb = true,
        }
        flags
    }

    /// True for the gait sub-states usable as a pre-jump record.
    pub fn is_gait(self) -> bool {
        matches!(
            self,
            AnimState::Idle | AnimState::Walking | AnimState::Running
        )
    }

    /// Any phase of the ledge-hang sequence.
    pub fn is_hanging(self) -> bool {
        matches!(
            self,
            AnimState::JumpToHanging
                | AnimState::HangingIdle
                | AnimState::HangingDropping
                | AnimState::HangingClimbing
        )
    }
}

/// The one-hot boolean parameter set handed to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimFlags {
    pub is_idle: bool,
    pub is_walking: bool,
    pub is_running: bool,
    pub is_jumping: bool,
    pub is_double_jumping: bool,
    pub is_jump_to_hanging: bool,
    pub is_hanging_idle: bool,
    pub is_hanging_dropping: bool,
    pub is_hanging_climbing: bool,
    pub is_ladder_climbing_up: bool,
    pub is_ladder_climbing_down: bool,
    pub is_ladder_dropping: bool,
    pub is_ladder_top_climb: bool,
}

impl AnimFlags {
    pub fn count_active(&self) -> usize {
        [
            self.is_idle,
            self.is_walking,
            self.is_running,
            self.is_jumping,
            self.is_double_jumping,
            self.is_jump_to_hanging,
            self.is_hanging_idle,
            self.is_hanging_dropping,
            self.is_hanging_climbing,
            self.is_ladder_climbing_up,
            self.is_ladder_climbing_down,
            self.is_ladder_dropping,
            self.is_ladder_top_climb,
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}

/// Boolean parameter sink on the visual model entity. This is the
/// boundary with the excluded rendering/animation layer: whatever
/// plays clips reads these.
#[derive(Component, Debug, Default)]
pub struct AnimatorParams(pub AnimFlags);

/// Which way the character model faces along the play axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Model yaw in degrees for this facing.
    pub fn yaw_degrees(self) -> f32 {
        match self {
            Facing::Right => 90.0,
            Facing::Left => -90.0,
        }
    }
}

/// Animation state driver for one character. Owns the current state,
/// the facing, and the reference to the visual model entity (resolved
/// once at spawn, never searched for).
#[derive(Component, Debug)]
pub struct AnimationRig {
    pub state: AnimState,
    pub facing: Facing,
    /// Visual model child; yaw-rotated on facing changes.
    pub model: Option<Entity>,
    /// Offset from the rig origin to the animation-driven body pose.
    pub body_offset: Vec3,
    /// Set when `state` changed and the flags must be pushed out.
    pub flags_dirty: bool,
}

impl Default for AnimationRig {
    fn default() -> Self {
        Self {
            state: AnimState::Idle,
            facing: Facing::Right,
            model: None,
            body_offset: Vec3::ZERO,
            flags_dirty: true,
        }
    }
}

impl AnimationRig {
    pub fn new(model: Entity, body_offset: Vec3) -> Self {
        Self {
            model: Some(model),
            body_offset,
            ..default()
        }
    }

    pub fn set_state(&mut self, state: AnimState) {
        if self.state != state {
            debug!("anim state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.flags_dirty = true;
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    /// Animation-driven body pose in world space, queried when a
    /// scripted climb ends and the logical position must be
    /// reconciled with the played animation.
    pub fn body_position(&self, rig_translation: Vec3) -> Vec3 {
        rig_translation + self.body_offset
    }
}
