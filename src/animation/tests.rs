//! Animation domain: tests for the one-hot mapping and facing.

use super::{AnimFlags, AnimState, AnimationRig, Facing};

// -----------------------------------------------------------------------------
// One-hot mapping
// -----------------------------------------------------------------------------

#[test]
fn test_every_state_maps_to_exactly_one_flag() {
    for state in AnimState::ALL {
        let flags = state.flags();
        assert_eq!(
            flags.count_active(),
            1,
            "state {:?} must set exactly one flag",
            state
        );
    }
}

#[test]
fn test_all_states_map_to_distinct_flags() {
    let mut seen = Vec::new();
    for state in AnimState::ALL {
        let flags = state.flags();
        assert!(
            !seen.contains(&flags),
            "state {:?} maps to a flag set already used",
            state
        );
        seen.push(flags);
    }
    assert_eq!(seen.len(), AnimState::ALL.len());
}

#[test]
fn test_default_flags_are_all_false() {
    assert_eq!(AnimFlags::default().count_active(), 0);
}

#[test]
fn test_idle_flag_mapping() {
    let flags = AnimState::Idle.flags();
    assert!(flags.is_idle);
    assert!(!flags.is_walking);
    assert!(!flags.is_ladder_top_climb);
}

// -----------------------------------------------------------------------------
// Gait classification
// -----------------------------------------------------------------------------

#[test]
fn test_gait_states() {
    assert!(AnimState::Idle.is_gait());
    assert!(AnimState::Walking.is_gait());
    assert!(AnimState::Running.is_gait());
    assert!(!AnimState::Jumping.is_gait());
    assert!(!AnimState::HangingIdle.is_gait());
    assert!(!AnimState::LadderClimbingUp.is_gait());
}

// -----------------------------------------------------------------------------
// Facing
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flip_is_symmetric() {
    assert_eq!(Facing::Left.flipped(), Facing::Right);
    assert_eq!(Facing::Right.flipped(), Facing::Left);
    assert_eq!(Facing::Left.flipped().flipped(), Facing::Left);
}

#[test]
fn test_facing_yaw() {
    assert_eq!(Facing::Right.yaw_degrees(), 90.0);
    assert_eq!(Facing::Left.yaw_degrees(), -90.0);
}

// -----------------------------------------------------------------------------
// Rig state driver
// -----------------------------------------------------------------------------

#[test]
fn test_set_state_marks_flags_dirty() {
    let mut rig = AnimationRig::default();
    rig.flags_dirty = false;

    rig.set_state(AnimState::Walking);

    assert_eq!(rig.state, AnimState::Walking);
    assert!(rig.flags_dirty);
}

#[test]
fn test_body_position_applies_offset() {
    let rig = AnimationRig {
        body_offset: bevy::prelude::Vec3::new(0.0, 0.39254, 0.0),
        ..Default::default()
    };
    let pos = rig.body_position(bevy::prelude::Vec3::new(2.0, 1.0, 0.0));
    assert_eq!(pos, bevy::prelude::Vec3::new(2.0, 1.39254, 0.0));
}
