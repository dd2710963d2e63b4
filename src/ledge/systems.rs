//! Ledge domain: hang entry and the snap interpolation.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimState, AnimationRig};
use crate::core::{DeferredKind, DeferredQueue};
use crate::ledge::components::{HangSnap, LedgeTriggerVolume, hang_gate, hang_target};
use crate::locomotion::{
    CharacterMotor, LocomotionTuning, Player, PlayerState, TriggerEvent, TriggerKind, TriggerPhase,
};

/// Hang entry. The sensor met a ledge volume; if the character faces
/// the way the volume faces, control is taken away, the body starts
/// snapping onto the hold, and hang input unlocks after the reach
/// animation delay. Exit overlaps are ignored; an established hang
/// out-lives the sensor overlap.
pub(crate) fn handle_ledge_triggers(
    mut triggers: MessageReader<TriggerEvent>,
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut commands: Commands,
    volumes: Query<(&LedgeTriggerVolume, &GlobalTransform, Option<&ChildOf>)>,
    parent_globals: Query<&GlobalTransform>,
    mut players: Query<
        (
            &mut Transform,
            &GlobalTransform,
            &mut PlayerState,
            &mut AnimationRig,
            &mut CharacterMotor,
            Option<&HangSnap>,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs_f64();

    for event in triggers.read() {
        let TriggerKind::Ledge(volume) = event.kind else {
            continue;
        };
        if event.phase != TriggerPhase::Enter {
            continue;
        }
        let Ok((mut transform, player_global, mut state, mut rig, mut motor, snap)) =
            players.get_mut(event.player)
        else {
            continue;
        };
        let Ok((ledge, volume_global, volume_parent)) = volumes.get(volume) else {
            continue;
        };
        if !hang_gate(
            ledge.facing,
            rig.facing,
            snap.is_some(),
            state.hang_input_enabled,
            rig.state,
        ) {
            debug!("ledge ignored, facing {:?} against {:?}", rig.facing, ledge.facing);
            continue;
        }

        let mut target = hang_target(volume_global.translation());

        // Hold onto the ledge's surface so a moving carrier takes the
        // hanging body along. Both the current position and the snap
        // target move into the carrier's local space.
        if let Some(parent) = volume_parent {
            if let Ok(parent_global) = parent_globals.get(parent.parent()) {
                let inverse = parent_global.affine().inverse();
                transform.translation = inverse.transform_point3(player_global.translation());
                target = inverse.transform_point3(target);
                commands.entity(event.player).insert(ChildOf(parent.parent()));
            }
        }

        state.movement_disabled = true;
        state.velocity = Vec3::ZERO;
        motor.enabled = false;
        rig.set_state(AnimState::JumpToHanging);
        commands.entity(event.player).insert(HangSnap { target });
        queue.schedule(
            now,
            tuning.hang_enable_delay,
            DeferredKind::EnableHangInput {
                player: event.player,
            },
        );
        info!("hang started on ledge volume {:?}", volume);
    }
}

/// Interpolates the body onto the hold each physics tick. The snap
/// component stays attached for the whole hang; drop and climb remove
/// it when they resolve.
pub(crate) fn run_hang_snap(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut Transform, &HangSnap), With<Player>>,
) {
    let step = tuning.snap_move_speed * time.delta_secs();

    for (mut transform, snap) in &mut query {
        transform.translation = transform.translation.move_towards(snap.target, step);
    }
}
