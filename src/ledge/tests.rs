use bevy::prelude::*;

use crate::animation::{AnimState, Facing};
use crate::ledge::components::{hang_gate, hang_target};

#[test]
fn hang_target_zeroes_depth() {
    let target = hang_target(Vec3::new(4.0, 7.5, -0.35));
    assert_eq!(target, Vec3::new(4.0, 7.5, 0.0));
}

#[test]
fn hang_target_preserves_plane_position() {
    let target = hang_target(Vec3::new(-2.25, 3.0, 0.0));
    assert_eq!(target.x, -2.25);
    assert_eq!(target.y, 3.0);
}

#[test]
fn hanging_states_cover_the_full_sequence() {
    for state in [
        AnimState::JumpToHanging,
        AnimState::HangingIdle,
        AnimState::HangingDropping,
        AnimState::HangingClimbing,
    ] {
        assert!(state.is_hanging());
    }
    assert!(!AnimState::Idle.is_hanging());
    assert!(!AnimState::LadderClimbingUp.is_hanging());
}

#[test]
fn hang_gate_requires_matching_facing() {
    assert!(hang_gate(Facing::Right, Facing::Right, false, false, AnimState::Jumping));
    assert!(hang_gate(Facing::Left, Facing::Left, false, false, AnimState::DoubleJumping));
    assert!(!hang_gate(Facing::Right, Facing::Left, false, false, AnimState::Jumping));
    assert!(!hang_gate(Facing::Left, Facing::Right, false, false, AnimState::Jumping));
}

#[test]
fn hang_gate_refuses_a_body_already_claimed() {
    // Mid-snap onto another hold.
    assert!(!hang_gate(Facing::Right, Facing::Right, true, false, AnimState::JumpToHanging));
    // Established hang with live input.
    assert!(!hang_gate(Facing::Right, Facing::Right, false, true, AnimState::HangingIdle));
    // Any hanging animation state, even before input unlocks.
    assert!(!hang_gate(Facing::Right, Facing::Right, false, false, AnimState::HangingClimbing));
}
