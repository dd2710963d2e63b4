//! Animation domain: flag propagation and deferred state updates.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::rig::{AnimationRig, AnimatorParams};
use crate::core::{DeferredFired, DeferredKind};

/// Applies scheduled animation updates in arrival order. A pending
/// delayed update never blocks a later immediate one; whichever lands
/// last wins.
pub(crate) fn apply_deferred_anim_updates(
    mut fired: MessageReader<DeferredFired>,
    mut rigs: Query<&mut AnimationRig>,
) {
    for message in fired.read() {
        if let DeferredKind::SetAnimState { target, state } = message.kind {
            if let Ok(mut rig) = rigs.get_mut(target) {
                rig.set_state(state);
            }
        }
    }
}

/// Pushes the one-hot flag set and the facing yaw out to the model
/// entity whenever the rig changed.
pub(crate) fn apply_anim_flags(
    mut rigs: Query<&mut AnimationRig>,
    mut models: Query<(&mut Transform, &mut AnimatorParams)>,
) {
    for mut rig in &mut rigs {
        let Some(model) = rig.model else {
            continue;
        };
        let Ok((mut transform, mut params)) = models.get_mut(model) else {
            continue;
        };

        transform.rotation = Quat::from_rotation_y(rig.facing.yaw_degrees().to_radians());

        if rig.flags_dirty {
            params.0 = rig.state.flags();
            rig.flags_dirty = false;
        }
    }
}
