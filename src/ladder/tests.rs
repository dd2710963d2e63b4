use bevy::prelude::*;

use crate::animation::{AnimState, AnimationRig, Facing};
use crate::ladder::components::{
    ApproachEnd, ClimbDirection, LadderAngle, LadderGeometry, LadderPhase, LadderSession,
    decide_approach,
};
use crate::ladder::systems::{apply_ladder_drop_exit, apply_ladder_top_exit};
use crate::locomotion::{CharacterMotor, LocomotionTuning, PlayerState};

fn geometry(angle: LadderAngle) -> LadderGeometry {
    LadderGeometry {
        angle,
        snap_bottom: Vec3::new(1.0, 0.5, 0.0),
        snap_top: Vec3::new(-1.0, 5.5, 0.0),
        reached_bottom: Vec3::new(1.0, 1.0, 0.0),
        reached_top: Vec3::new(-1.0, 5.0, 0.0),
    }
}

#[test]
fn approach_below_bottom_threshold_is_bottom() {
    let geo = geometry(LadderAngle::TopLeftToBottomRight);
    assert_eq!(decide_approach(0.2, &geo), (ApproachEnd::Bottom, false));
}

#[test]
fn approach_above_top_threshold_is_top() {
    let geo = geometry(LadderAngle::TopLeftToBottomRight);
    assert_eq!(decide_approach(6.0, &geo), (ApproachEnd::Top, false));
}

#[test]
fn approach_between_thresholds_falls_back_to_bottom_and_flags_it() {
    let geo = geometry(LadderAngle::TopLeftToBottomRight);
    let (end, ambiguous) = decide_approach(3.0, &geo);
    assert_eq!(end, ApproachEnd::Bottom);
    assert!(ambiguous);
}

#[test]
fn climb_facing_follows_lean() {
    assert_eq!(
        LadderAngle::TopLeftToBottomRight.climb_facing(),
        Facing::Left
    );
    assert_eq!(
        LadderAngle::TopRightToBottomLeft.climb_facing(),
        Facing::Right
    );
}

#[test]
fn exit_nudge_pushes_away_from_the_lean() {
    assert_eq!(LadderAngle::TopLeftToBottomRight.exit_nudge_sign(), 1.0);
    assert_eq!(LadderAngle::TopRightToBottomLeft.exit_nudge_sign(), -1.0);
}

#[test]
fn coincident_points_are_degenerate() {
    let mut geo = geometry(LadderAngle::TopLeftToBottomRight);
    assert!(!geo.is_degenerate());
    geo.snap_top = geo.snap_bottom;
    assert!(geo.is_degenerate());

    let mut geo = geometry(LadderAngle::TopRightToBottomLeft);
    geo.reached_top = geo.reached_bottom;
    assert!(geo.is_degenerate());
}

#[test]
fn bottom_entry_climbs_up_toward_reached_top() {
    let geo = geometry(LadderAngle::TopLeftToBottomRight);
    let session = LadderSession::new(Entity::from_bits(42), &geo, ApproachEnd::Bottom);
    assert_eq!(session.snap_to, geo.snap_bottom);
    assert_eq!(session.reached, geo.reached_top);
    assert_eq!(session.direction, ClimbDirection::Up);
    assert_eq!(session.phase, LadderPhase::Snapping);
}

#[test]
fn top_entry_climbs_down_toward_reached_bottom() {
    let geo = geometry(LadderAngle::TopRightToBottomLeft);
    let session = LadderSession::new(Entity::from_bits(42), &geo, ApproachEnd::Top);
    assert_eq!(session.snap_to, geo.snap_top);
    assert_eq!(session.reached, geo.reached_bottom);
    assert_eq!(session.direction, ClimbDirection::Down);
    assert_eq!(session.angle, LadderAngle::TopRightToBottomLeft);
}

fn scripted_player() -> (Transform, PlayerState, AnimationRig, CharacterMotor) {
    let mut state = PlayerState::default();
    state.movement_disabled = true;
    let mut motor = CharacterMotor::default();
    motor.enabled = false;
    let rig = AnimationRig::new(Entity::from_bits(42), Vec3::new(0.0, 1.8, 0.0));
    (Transform::from_xyz(3.0, 7.0, 0.0), state, rig, motor)
}

#[test]
fn top_exit_hands_control_back_above_the_reached_top() {
    let tuning = LocomotionTuning::default();
    let (mut transform, mut state, mut rig, mut motor) = scripted_player();
    rig.set_state(AnimState::LadderTopClimb);

    apply_ladder_top_exit(&mut transform, &mut state, &mut rig, &mut motor, &tuning);

    assert!(!state.movement_disabled);
    assert!(motor.enabled);
    assert_eq!(rig.state, AnimState::Idle);
    assert_eq!(state.velocity, Vec3::ZERO);
    assert!(transform.translation.y >= 7.0 + tuning.climb_exit_offset_y);
}

#[test]
fn drop_exit_nudges_and_faces_away_from_the_ladder() {
    let tuning = LocomotionTuning::default();
    let (mut transform, mut state, mut rig, mut motor) = scripted_player();
    rig.set_state(AnimState::LadderDropping);
    rig.set_facing(LadderAngle::TopRightToBottomLeft.climb_facing());

    apply_ladder_drop_exit(
        &mut transform,
        &mut state,
        &mut rig,
        &mut motor,
        LadderAngle::TopRightToBottomLeft,
        &tuning,
    );

    // Nudged to the left, turned to face left, away from the lean.
    assert!(transform.translation.x < 3.0);
    assert_eq!(rig.facing, Facing::Left);
    assert_eq!(rig.state, AnimState::Idle);
    assert!(!state.movement_disabled);
    assert!(motor.enabled);
}
