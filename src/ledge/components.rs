//! Ledge domain: sensor, volume, and snap components.

use bevy::prelude::*;

use crate::animation::{AnimState, Facing};

/// Overlap sensor parented to the character, sized to reach above the
/// head so it meets ledge volumes before the body collider does.
#[derive(Component, Debug)]
pub struct LedgeSensor {
    pub owner: Entity,
}

/// Authored hang point near the top edge of a surface. Only a
/// character facing the same way the volume faces may latch on.
#[derive(Component, Debug, Clone, Copy)]
pub struct LedgeTriggerVolume {
    pub facing: Facing,
}

/// Present on the character while it interpolates onto the hold.
/// The target is expressed in the same space as the character's
/// transform at insert time.
#[derive(Component, Debug, Clone, Copy)]
pub struct HangSnap {
    pub target: Vec3,
}

/// The hold position for a volume: its position with depth zeroed so
/// the body hangs on the gameplay plane.
pub fn hang_target(volume_position: Vec3) -> Vec3 {
    Vec3::new(volume_position.x, volume_position.y, 0.0)
}

/// Whether an overlapping hold may start a hang. The hold works only
/// from its own side, and a body already claimed by a hang (snapping,
/// with hang input live, or in any hanging state) stays claimed.
pub fn hang_gate(
    hold_facing: Facing,
    character_facing: Facing,
    already_snapping: bool,
    hang_input_enabled: bool,
    anim: AnimState,
) -> bool {
    hold_facing == character_facing
        && !already_snapping
        && !hang_input_enabled
        && !anim.is_hanging()
}
