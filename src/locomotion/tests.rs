//! Locomotion domain: tests for the per-tick integration step.

use bevy::prelude::*;

use super::systems::velocity::integrate_tick;
use super::{LocomotionTuning, PlayerState};
use crate::animation::{AnimState, AnimationRig, Facing};

const DT: f32 = 1.0 / 64.0;

fn setup() -> (PlayerState, AnimationRig, LocomotionTuning) {
    (
        PlayerState::default(),
        AnimationRig::default(),
        LocomotionTuning::default(),
    )
}

fn tick(
    state: &mut PlayerState,
    rig: &mut AnimationRig,
    tuning: &LocomotionTuning,
    axis_x: f32,
    grounded: bool,
    now: f32,
) {
    integrate_tick(state, rig, axis_x, grounded, tuning, now, DT);
}

// -----------------------------------------------------------------------------
// Grounded invariants
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_resets_jumps_and_wall_flags() {
    let (mut state, mut rig, tuning) = setup();
    state.jumps_used = 2;
    state.wall_jump_armed = true;
    state.wall_jumping = true;

    tick(&mut state, &mut rig, &tuning, 0.0, true, 0.0);

    assert_eq!(state.jumps_used, 0);
    assert!(!state.wall_jump_armed);
    assert!(!state.wall_jumping);
}

#[test]
fn test_grounded_clamps_residual_fall_speed() {
    let (mut state, mut rig, tuning) = setup();
    state.velocity.y = -5.0;

    tick(&mut state, &mut rig, &tuning, 0.0, true, 0.0);

    assert_eq!(state.velocity.y, 0.0);
}

#[test]
fn test_small_grounded_fall_speed_is_kept() {
    let (mut state, mut rig, tuning) = setup();
    state.velocity.y = -1.0;

    tick(&mut state, &mut rig, &tuning, 0.0, true, 0.0);

    assert_eq!(state.velocity.y, -1.0);
}

// -----------------------------------------------------------------------------
// Gait sub-state-machine
// -----------------------------------------------------------------------------

#[test]
fn test_idle_to_walking_on_movement() {
    let (mut state, mut rig, tuning) = setup();

    tick(&mut state, &mut rig, &tuning, 1.0, true, 10.0);

    assert_eq!(rig.state, AnimState::Walking);
    assert_eq!(state.walk_started_at, 10.0);
    assert_eq!(state.velocity.x, tuning.walk_speed);
}

#[test]
fn test_walking_stays_walking_before_run_delay() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Walking);
    state.walk_started_at = 10.0;

    tick(&mut state, &mut rig, &tuning, 1.0, true, 10.2);

    assert_eq!(rig.state, AnimState::Walking);
    assert_eq!(state.velocity.x, tuning.walk_speed);
}

#[test]
fn test_walking_to_running_after_run_delay() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Walking);
    state.walk_started_at = 10.0;

    tick(&mut state, &mut rig, &tuning, 1.0, true, 10.3);

    assert_eq!(rig.state, AnimState::Running);
    assert_eq!(state.velocity.x, tuning.run_speed);
}

#[test]
fn test_walking_to_idle_when_movement_stops() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Walking);

    tick(&mut state, &mut rig, &tuning, 0.0, true, 11.0);

    assert_eq!(rig.state, AnimState::Idle);
}

#[test]
fn test_running_decays_to_walking_not_idle() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Running);
    state.walk_started_at = 5.0;

    tick(&mut state, &mut rig, &tuning, 0.0, true, 20.0);

    assert_eq!(rig.state, AnimState::Walking);
    // Walk timer restarts so the next run promotion needs fresh
    // continuous movement.
    assert_eq!(state.walk_started_at, 20.0);
}

#[test]
fn test_leftward_movement_scales_speed_and_faces_left() {
    let (mut state, mut rig, tuning) = setup();

    tick(&mut state, &mut rig, &tuning, -1.0, true, 0.0);

    assert_eq!(rig.facing, Facing::Left);
    assert_eq!(state.velocity.x, -tuning.walk_speed);
}

#[test]
fn test_facing_frozen_while_movement_disabled() {
    let (mut state, mut rig, tuning) = setup();
    state.movement_disabled = true;

    tick(&mut state, &mut rig, &tuning, -1.0, true, 0.0);

    assert_eq!(rig.facing, Facing::Right);
}

// -----------------------------------------------------------------------------
// Jump resolution
// -----------------------------------------------------------------------------

#[test]
fn test_first_jump_records_gait_and_boosts() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Running);
    state.jump_requested = true;

    tick(&mut state, &mut rig, &tuning, 1.0, true, 1.0);

    assert_eq!(rig.state, AnimState::Jumping);
    assert_eq!(state.gait_before_jump, AnimState::Running);
    assert!(state.velocity.y > 0.0);
    assert!(!state.jump_requested);
}

#[test]
fn test_double_jump_boosts_while_airborne() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Jumping);
    state.jumps_used = 1;
    state.jump_requested = true;
    state.velocity.y = -1.0;

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0);

    assert_eq!(rig.state, AnimState::DoubleJumping);
    assert!(state.velocity.y > -1.0);
}

#[test]
fn test_third_jump_request_is_ignored() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::DoubleJumping);
    state.jumps_used = 2;
    state.jump_requested = true;
    state.velocity.y = 0.0;

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0);

    // Only gravity applied, no boost; the one-shot flag still clears.
    assert!(state.velocity.y < 0.0);
    assert!(!state.jump_requested);
    assert_eq!(rig.state, AnimState::DoubleJumping);
}

#[test]
fn test_jump_cap_between_landings() {
    let (mut state, mut rig, tuning) = setup();
    let mut boosts = 0;

    // Ground jump.
    state.jump_requested = true;
    tick(&mut state, &mut rig, &tuning, 0.0, true, 0.0);
    if state.velocity.y > 0.0 {
        boosts += 1;
    }
    state.jumps_used = 1; // jump-released edge

    // Air jump.
    let before = state.velocity.y;
    state.jump_requested = true;
    tick(&mut state, &mut rig, &tuning, 0.0, false, 0.1);
    if state.velocity.y > before {
        boosts += 1;
    }
    state.jumps_used = 2;

    // Further requests do nothing until landing.
    for i in 0..5 {
        let before = state.velocity.y;
        state.jump_requested = true;
        tick(&mut state, &mut rig, &tuning, 0.0, false, 0.2 + i as f32 * DT);
        assert!(state.velocity.y < before, "no boost after the double jump");
    }
    assert_eq!(boosts, 2);
}

#[test]
fn test_landing_reverts_jump_state_to_recorded_gait() {
    let (mut state, mut rig, tuning) = setup();
    rig.set_state(AnimState::Jumping);
    state.gait_before_jump = AnimState::Running;

    tick(&mut state, &mut rig, &tuning, 1.0, true, 2.0);

    assert_eq!(rig.state, AnimState::Running);
}

// -----------------------------------------------------------------------------
// Wall jump
// -----------------------------------------------------------------------------

#[test]
fn test_wall_jump_overrides_horizontal_velocity() {
    let (mut state, mut rig, tuning) = setup();
    state.wall_jumping = true;
    state.wall_jump_armed = false;
    state.wall_normal = Vec3::new(-1.0, 0.0, 0.0);

    tick(&mut state, &mut rig, &tuning, 1.0, false, 1.0);

    // Bounce away from the wall, scaled by the tunable; direction is
    // the contract, the magnitude is feel-tuning.
    assert!(state.velocity.x < 0.0);
    assert_eq!(state.velocity.x, -tuning.wall_bounce_factor);
    assert!(state.velocity.y > 0.0);
}

#[test]
fn test_wall_jump_anim_alternates() {
    let (mut state, mut rig, tuning) = setup();
    state.wall_jumping = true;
    state.wall_normal = Vec3::X;
    rig.set_state(AnimState::Jumping);

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0);
    assert_eq!(rig.state, AnimState::DoubleJumping);

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0 + DT);
    assert_eq!(rig.state, AnimState::Jumping);
}

#[test]
fn test_armed_wall_jump_suppresses_bounce_until_consumed() {
    let (mut state, mut rig, tuning) = setup();
    state.wall_jumping = true;
    state.wall_jump_armed = true;
    state.wall_normal = Vec3::X;
    state.velocity.y = 0.0;

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0);

    // Armed but unconsumed: no vertical burst, only gravity.
    assert!(state.velocity.y < 0.0);
}

// -----------------------------------------------------------------------------
// Ceiling bounce and gravity
// -----------------------------------------------------------------------------

#[test]
fn test_ceiling_hit_forces_hard_fall() {
    let (mut state, mut rig, tuning) = setup();
    state.wall_normal = Vec3::new(0.0, -1.0, 0.0);
    state.velocity.y = 6.0;

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0);

    assert_eq!(state.velocity.y, tuning.ceiling_bounce + tuning.gravity * DT);
}

#[test]
fn test_gravity_integrates_while_airborne() {
    let (mut state, mut rig, tuning) = setup();
    state.velocity.y = 0.0;

    tick(&mut state, &mut rig, &tuning, 0.0, false, 1.0);

    assert_eq!(state.velocity.y, tuning.gravity * DT);
}

#[test]
fn test_no_gravity_while_grounded() {
    let (mut state, mut rig, tuning) = setup();
    state.velocity.y = 0.0;

    tick(&mut state, &mut rig, &tuning, 0.0, true, 1.0);

    assert_eq!(state.velocity.y, 0.0);
}

// -----------------------------------------------------------------------------
// Tuning validation
// -----------------------------------------------------------------------------

#[test]
fn test_validation_substitutes_documented_defaults() {
    let mut tuning = LocomotionTuning {
        run_speed: 0.0,
        walk_speed: -1.0,
        jump_height: 0.0,
        gravity: 0.0,
        snap_move_speed: 0.0,
        ladder_climb_speed: 0.0,
        ..Default::default()
    };

    tuning.validate();

    assert_eq!(tuning.run_speed, 1.0);
    assert_eq!(tuning.walk_speed, 1.0);
    assert_eq!(tuning.jump_height, 1.0);
    assert_eq!(tuning.gravity, -100.0);
    assert_eq!(tuning.snap_move_speed, 5.0);
    assert_eq!(tuning.ladder_climb_speed, 3.0);
}

#[test]
fn test_validation_keeps_valid_tunables() {
    let mut tuning = LocomotionTuning::default();
    let reference = tuning.clone();

    tuning.validate();

    assert_eq!(tuning.run_speed, reference.run_speed);
    assert_eq!(tuning.gravity, reference.gravity);
}

#[test]
fn jump_press_requests_only_while_the_body_is_free() {
    use super::systems::jumps::{JumpPressAction, jump_press_action};

    assert_eq!(jump_press_action(false, false, false), JumpPressAction::Request);
    // An armed wall jump always wins the press.
    assert_eq!(jump_press_action(true, false, false), JumpPressAction::ConsumeWallJump);
    assert_eq!(jump_press_action(true, false, true), JumpPressAction::ConsumeWallJump);
    // Hang handlers own the press while hang input is live.
    assert_eq!(jump_press_action(false, true, false), JumpPressAction::Ignore);
    // A scripted sequence drops the press instead of latching it.
    assert_eq!(jump_press_action(false, false, true), JumpPressAction::Ignore);
}

#[test]
fn push_only_happens_while_moving_into_the_body() {
    use super::systems::contacts::push_speed;

    assert_eq!(push_speed(4.0, 1.0), Some(2.0));
    assert_eq!(push_speed(-4.0, -1.0), Some(-2.0));
    // Standing next to a sliding body leaves its velocity alone.
    assert_eq!(push_speed(0.0, 1.0), None);
    assert_eq!(push_speed(0.0, -1.0), None);
    // Moving away from the body does not drag it along.
    assert_eq!(push_speed(4.0, -1.0), None);
    assert_eq!(push_speed(-4.0, 1.0), None);
}
