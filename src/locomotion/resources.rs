//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Traversal tuning. The jump formulas assume `gravity < 0`; the
/// products `jump_height * factor * -gravity` must stay non-negative,
/// which is a configuration precondition rather than a runtime check.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_height: f32,
    /// Negative; integrated into `velocity.y` every airborne tick.
    pub gravity: f32,
    /// Continuous movement longer than this promotes walking to running.
    pub run_delay: f32,
    pub first_jump_factor: f32,
    pub double_jump_factor: f32,
    /// Vertical factor for the wall-jump burst.
    pub wall_jump_factor: f32,
    /// Horizontal bounce multiplier applied to the wall normal while
    /// wall jumping.
    pub wall_bounce_factor: f32,
    /// Forced fall speed after a ceiling hit.
    pub ceiling_bounce: f32,
    /// Window after a jumpable-wall contact in which the bounce stays
    /// armed.
    pub wall_jump_disarm: f32,
    pub hang_enable_delay: f32,
    /// Matches the hang-climb animation length.
    pub hang_climb_delay: f32,
    pub hang_drop_idle_delay: f32,
    /// Lift applied to the animation body pose on climb completion so
    /// the character does not clip into the ground.
    pub climb_exit_offset_y: f32,
    pub snap_move_speed: f32,
    pub snap_window: f32,
    pub ladder_climb_speed: f32,
    /// Matches the top-climb exit animation length.
    pub ladder_top_exit_delay: f32,
    pub ladder_drop_idle_delay: f32,
    /// Lateral offset applied after climbing down so the ladder
    /// volume is not immediately re-entered.
    pub ladder_exit_nudge: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 4.0,
            jump_height: 1.5,
            gravity: -30.0,
            run_delay: 0.25,
            first_jump_factor: 3.0,
            double_jump_factor: 2.5,
            wall_jump_factor: 1.25,
            wall_bounce_factor: 4.0,
            ceiling_bounce: -20.0,
            wall_jump_disarm: 0.15,
            hang_enable_delay: 0.5,
            hang_climb_delay: 3.51,
            hang_drop_idle_delay: 2.0,
            climb_exit_offset_y: 0.39254,
            snap_move_speed: 5.0,
            snap_window: 0.5,
            ladder_climb_speed: 3.0,
            ladder_top_exit_delay: 3.5,
            ladder_drop_idle_delay: 0.5,
            ladder_exit_nudge: 0.6,
        }
    }
}

impl LocomotionTuning {
    /// Replaces invalid tunables with documented defaults, logging
    /// each substitution. Applied once at startup; never re-checked.
    pub fn validate(&mut self) {
        if self.run_speed <= 0.0 {
            self.run_speed = 1.0;
            warn!("LocomotionTuning: run_speed <= 0, set to 1");
        }
        if self.walk_speed <= 0.0 {
            self.walk_speed = 1.0;
            warn!("LocomotionTuning: walk_speed <= 0, set to 1");
        }
        if self.jump_height <= 0.0 {
            self.jump_height = 1.0;
            warn!("LocomotionTuning: jump_height <= 0, set to 1");
        }
        if self.gravity == 0.0 {
            self.gravity = -100.0;
            warn!("LocomotionTuning: gravity is 0, set to -100");
        }
        if self.snap_move_speed == 0.0 {
            self.snap_move_speed = 5.0;
            warn!("LocomotionTuning: snap_move_speed is 0, set to 5");
        }
        if self.ladder_climb_speed == 0.0 {
            self.ladder_climb_speed = 3.0;
            warn!("LocomotionTuning: ladder_climb_speed is 0, set to 3");
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub use_just_pressed: bool,
}
