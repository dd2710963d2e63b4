//! Locomotion domain: discrete input edges, wall contacts, and the
//! hang drop/climb resolutions.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{AnimState, AnimationRig};
use crate::core::{DeferredFired, DeferredKind, DeferredQueue};
use crate::ledge::HangSnap;
use crate::locomotion::events::SurfaceContact;
use crate::locomotion::{CharacterMotor, LocomotionInput, LocomotionTuning, Player, PlayerState};

/// Jump-pressed edge. Consumes an armed wall jump (flipping the
/// facing); otherwise requests a normal jump and detaches from any
/// support surface. A hanging character ignores this edge; the hang
/// handlers own jump input while hang input is enabled.
pub(crate) fn handle_jump_pressed(
    input: Res<LocomotionInput>,
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &mut PlayerState,
            &mut AnimationRig,
            &mut Transform,
            &GlobalTransform,
            Option<&ChildOf>,
        ),
        With<Player>,
    >,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (entity, mut state, mut rig, mut transform, global, child_of) in &mut query {
        match jump_press_action(
            state.wall_jump_armed,
            state.hang_input_enabled,
            state.movement_disabled,
        ) {
            JumpPressAction::ConsumeWallJump => {
                state.wall_jump_armed = false;
                state.wall_jumping = true;
                let flipped = rig.facing.flipped();
                rig.set_facing(flipped);
                debug!("wall jump consumed, now facing {:?}", flipped);
            }
            JumpPressAction::Request => {
                state.jump_requested = true;
                if child_of.is_some() {
                    transform.translation = global.translation();
                    commands.entity(entity).remove::<ChildOf>();
                }
            }
            JumpPressAction::Ignore => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JumpPressAction {
    ConsumeWallJump,
    Request,
    Ignore,
}

/// What a jump press does given the current claims on the body. An
/// armed wall jump always wins; a hang routes the press to the hang
/// handlers; and while a scripted ladder or respawn sequence owns the
/// body, the press is dropped so no stale request fires when control
/// comes back.
pub(crate) fn jump_press_action(
    wall_jump_armed: bool,
    hang_input_enabled: bool,
    movement_disabled: bool,
) -> JumpPressAction {
    if wall_jump_armed {
        JumpPressAction::ConsumeWallJump
    } else if !hang_input_enabled && !movement_disabled {
        JumpPressAction::Request
    } else {
        JumpPressAction::Ignore
    }
}

/// Jump-released edge. Counts the jump; while hanging this is the
/// drop: the motor is handed back, velocity zeroed, and idle follows
/// after the drop animation delay.
pub(crate) fn handle_jump_released(
    input: Res<LocomotionInput>,
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut commands: Commands,
    mut query: Query<
        (Entity, &mut PlayerState, &mut AnimationRig, &mut CharacterMotor),
        With<Player>,
    >,
) {
    if !input.jump_just_released {
        return;
    }
    let now = time.elapsed_secs_f64();

    for (entity, mut state, mut rig, mut motor) in &mut query {
        state.jumps_used = state.jumps_used.saturating_add(1);

        if state.hang_input_enabled {
            rig.set_state(AnimState::HangingDropping);
            motor.enabled = true;
            state.velocity = Vec3::ZERO;
            state.movement_disabled = false;
            state.hang_input_enabled = false;
            queue.schedule(
                now,
                tuning.hang_drop_idle_delay,
                DeferredKind::SetAnimState {
                    target: entity,
                    state: AnimState::Idle,
                },
            );
            commands.entity(entity).remove::<HangSnap>();
            info!("hang drop");
        }
    }
}

/// Use-pressed edge: begins the hang-climb sequence while hanging.
pub(crate) fn handle_use_pressed(
    input: Res<LocomotionInput>,
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut query: Query<(Entity, &PlayerState, &mut AnimationRig), With<Player>>,
) {
    if !input.use_just_pressed {
        return;
    }
    let now = time.elapsed_secs_f64();

    for (entity, state, mut rig) in &mut query {
        if state.hang_input_enabled {
            rig.set_state(AnimState::HangingClimbing);
            queue.schedule(
                now,
                tuning.hang_climb_delay,
                DeferredKind::FinishHangClimb { player: entity },
            );
            info!("hang climb started");
        }
    }
}

/// Latches airborne contact normals and arms the wall jump on
/// jumpable-wall hits, scheduling the disarm window.
pub(crate) fn handle_surface_contacts(
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut contacts: MessageReader<SurfaceContact>,
    mut query: Query<&mut PlayerState, With<Player>>,
) {
    let now = time.elapsed_secs_f64();

    for contact in contacts.read() {
        let Ok(mut state) = query.get_mut(contact.player) else {
            continue;
        };
        if state.grounded {
            continue;
        }

        state.wall_normal = contact.normal;

        if contact.jumpable {
            state.last_wall_contact_at = now as f32;
            if !state.wall_jump_armed {
                debug!("wall jump armed");
            }
            state.wall_jump_armed = true;
            queue.schedule(
                now,
                tuning.wall_jump_disarm,
                DeferredKind::DisarmWallJump {
                    player: contact.player,
                },
            );
        }
    }
}

/// Consumes the deferred actions owned by this domain: the wall-jump
/// disarm, hang-input enablement, and hang-climb completion.
pub(crate) fn consume_deferred_actions(
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut fired: MessageReader<DeferredFired>,
    mut commands: Commands,
    mut query: Query<
        (
            &mut PlayerState,
            &mut AnimationRig,
            &mut CharacterMotor,
            &mut Transform,
            &GlobalTransform,
            Option<&ChildOf>,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();

    for message in fired.read() {
        match message.kind {
            DeferredKind::DisarmWallJump { player } => {
                let Ok((mut state, ..)) = query.get_mut(player) else {
                    continue;
                };
                // The window counts from the last contact; a fresh
                // contact keeps the arm alive for its own window.
                if now - state.last_wall_contact_at >= tuning.wall_jump_disarm * 0.9 {
                    state.wall_jump_armed = false;
                }
                state.wall_jumping = false;
            }
            DeferredKind::EnableHangInput { player } => {
                let Ok((mut state, mut rig, ..)) = query.get_mut(player) else {
                    continue;
                };
                state.hang_input_enabled = true;
                rig.set_state(AnimState::HangingIdle);
            }
            DeferredKind::FinishHangClimb { player } => {
                let Ok((mut state, mut rig, mut motor, mut transform, global, child_of)) =
                    query.get_mut(player)
                else {
                    continue;
                };
                // Reconcile with the animation-driven body pose, with
                // a small lift to avoid clipping into the ledge top.
                let mut target = rig.body_position(global.translation());
                target.y += tuning.climb_exit_offset_y;

                if child_of.is_some() {
                    commands.entity(player).remove::<ChildOf>();
                }
                transform.translation = target;
                transform.rotation = Quat::IDENTITY;
                rig.set_state(AnimState::Idle);
                state.hang_input_enabled = false;
                state.velocity = Vec3::ZERO;
                motor.enabled = true;
                state.movement_disabled = false;
                commands.entity(player).remove::<HangSnap>();
                info!("hang climb finished");
            }
            _ => {}
        }
    }
}
