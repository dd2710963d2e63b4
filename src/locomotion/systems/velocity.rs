//! Locomotion domain: per-tick velocity integration.
//!
//! `integrate_tick` is the traversal state machine's core step. The
//! ordering inside it is contractual: grounded handling, wall-jump
//! horizontal override, fall-speed clamp, jump resolution, ceiling
//! bounce, gravity, then motion.

use bevy::prelude::*;

use crate::animation::{AnimState, AnimationRig, Facing};
use crate::locomotion::{CharacterMotor, LocomotionInput, LocomotionTuning, Player, PlayerState};

/// Advances one character by one physics tick, producing the new
/// velocity and any gait/jump animation transitions. Motion itself is
/// applied by the caller so scripted sequences can withhold it.
pub(crate) fn integrate_tick(
    state: &mut PlayerState,
    rig: &mut AnimationRig,
    axis_x: f32,
    grounded: bool,
    tuning: &LocomotionTuning,
    now: f32,
    dt: f32,
) {
    let is_moving = axis_x != 0.0;
    state.grounded = grounded;

    if grounded {
        state.jumps_used = 0;
        state.wall_jump_armed = false;
        state.wall_jumping = false;
        state.velocity.x = axis_x;

        if !state.movement_disabled {
            if axis_x > 0.0 {
                rig.set_facing(Facing::Right);
            } else if axis_x < 0.0 {
                rig.set_facing(Facing::Left);
            }
        }

        match rig.state {
            AnimState::Idle => {
                if is_moving {
                    state.walk_started_at = now;
                    rig.set_state(AnimState::Walking);
                    state.velocity.x *= tuning.walk_speed;
                }
            }
            AnimState::Walking => {
                if is_moving {
                    if now - state.walk_started_at > tuning.run_delay {
                        rig.set_state(AnimState::Running);
                        state.velocity.x *= tuning.run_speed;
                    } else {
                        state.velocity.x *= tuning.walk_speed;
                    }
                } else {
                    rig.set_state(AnimState::Idle);
                }
            }
            AnimState::Running => {
                if is_moving {
                    state.velocity.x *= tuning.run_speed;
                } else {
                    // Running decays through walking, never straight
                    // to idle; the walk timer restarts.
                    state.walk_started_at = now;
                    rig.set_state(AnimState::Walking);
                    state.velocity.x *= tuning.walk_speed;
                }
            }
            AnimState::Jumping | AnimState::DoubleJumping => {
                rig.set_state(state.gait_before_jump);
            }
            _ => {}
        }
    } else if state.wall_jumping {
        state.velocity.x = state.wall_normal.x * tuning.wall_bounce_factor;
    }

    // Residual fall speed must not carry into the next grounded frame.
    if grounded && state.velocity.y < -2.0 {
        state.velocity.y = 0.0;
    }

    if state.wall_jumping && !state.wall_jump_armed {
        // Alternate jump/double-jump so repeated wall bounces read as
        // distinct in the animation.
        if rig.state == AnimState::Jumping {
            rig.set_state(AnimState::DoubleJumping);
        } else {
            rig.set_state(AnimState::Jumping);
        }
        state.velocity.y = (tuning.jump_height * tuning.wall_jump_factor * -tuning.gravity).sqrt();
    } else if state.jump_requested && grounded {
        state.gait_before_jump = rig.state;
        rig.set_state(AnimState::Jumping);
        state.velocity.y += (tuning.jump_height * tuning.first_jump_factor * -tuning.gravity).sqrt();
    } else if state.jump_requested && !grounded && state.jumps_used < 2 {
        rig.set_state(AnimState::DoubleJumping);
        state.velocity.y +=
            (tuning.jump_height * tuning.double_jump_factor * -tuning.gravity).sqrt();
    }
    state.jump_requested = false;

    // Ceiling bounce: the latched contact normal pointing straight
    // down forces a hard fall.
    if !grounded && state.wall_normal.y == -1.0 {
        state.velocity.y = tuning.ceiling_bounce;
    }

    if !grounded {
        state.velocity.y += tuning.gravity * dt;
    }
}

pub(crate) fn integrate_velocity(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<LocomotionInput>,
    mut query: Query<
        (&mut PlayerState, &mut AnimationRig, &CharacterMotor, &mut Transform),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (mut state, mut rig, motor, mut transform) in &mut query {
        // Scripted sequences own the character while the motor is off.
        if !motor.enabled {
            continue;
        }
        integrate_tick(
            &mut state,
            &mut rig,
            input.axis_x,
            motor.grounded,
            &tuning,
            now,
            dt,
        );

        if !state.movement_disabled {
            transform.translation += state.velocity * dt;
        }
    }
}
