//! Ladder domain: entry, scripted climb movement, and exits.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimState, AnimationRig};
use crate::core::{DeferredFired, DeferredKind, DeferredQueue};
use crate::ladder::components::{
    ClimbDirection, LadderAngle, LadderGeometry, LadderPhase, LadderSession, decide_approach,
};
use crate::locomotion::{
    CharacterMotor, LocomotionTuning, Player, PlayerState, TriggerEvent, TriggerKind, TriggerPhase,
};

/// Ladder volume entry and exit. Entry decides the approach end,
/// faces the character per the ladder's lean, takes the motor away
/// and starts the snap phase; exit without a completed climb clears
/// the session guard so re-entry works.
pub(crate) fn handle_ladder_triggers(
    mut triggers: MessageReader<TriggerEvent>,
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut commands: Commands,
    ladders: Query<&LadderGeometry>,
    mut players: Query<
        (
            &Transform,
            &mut PlayerState,
            &mut AnimationRig,
            &mut CharacterMotor,
            Option<&mut LadderSession>,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs_f64();

    for event in triggers.read() {
        let TriggerKind::Ladder(ladder) = event.kind else {
            continue;
        };
        let Ok((transform, mut state, mut rig, mut motor, session)) =
            players.get_mut(event.player)
        else {
            continue;
        };

        match event.phase {
            TriggerPhase::Enter => {
                // No re-entry mid-session, and never while a ledge
                // hang owns the character.
                if session.is_some() || state.hang_input_enabled || rig.state.is_hanging() {
                    continue;
                }
                let Ok(geometry) = ladders.get(ladder) else {
                    continue;
                };

                let (approach, ambiguous) = decide_approach(transform.translation.y, geometry);
                if ambiguous {
                    warn!(
                        "ladder approach ambiguous at y={}, falling back to bottom entry",
                        transform.translation.y
                    );
                }

                let session = LadderSession::new(ladder, geometry, approach);
                rig.set_facing(geometry.angle.climb_facing());
                rig.set_state(match session.direction {
                    ClimbDirection::Up => AnimState::LadderClimbingUp,
                    ClimbDirection::Down => AnimState::LadderClimbingDown,
                });
                state.movement_disabled = true;
                state.velocity = Vec3::ZERO;
                motor.enabled = false;
                queue.schedule(
                    now,
                    tuning.snap_window,
                    DeferredKind::EndLadderSnap {
                        player: event.player,
                    },
                );
                info!("ladder entry: {:?} via {:?}", session.direction, approach);
                commands.entity(event.player).insert(session);
            }
            TriggerPhase::Exit => {
                let Some(mut session) = session else {
                    continue;
                };
                if session.ladder != ladder {
                    continue;
                }
                match session.phase {
                    // Leaving mid-snap means the entry never took hold
                    // (e.g. the character was yanked away); hand
                    // control back and clear the guard.
                    LadderPhase::Snapping => {
                        warn!("ladder session aborted during snap");
                        state.movement_disabled = false;
                        motor.enabled = true;
                        rig.set_state(AnimState::Idle);
                        commands.entity(event.player).remove::<LadderSession>();
                    }
                    // The capsule clears the volume slightly before the
                    // top waypoint; treat that as arrival so the exit
                    // sequence still runs.
                    LadderPhase::Climbing if session.direction == ClimbDirection::Up => {
                        begin_ladder_exit(
                            event.player,
                            &mut session,
                            &mut rig,
                            &tuning,
                            &mut queue,
                            now,
                        );
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Scripted ladder movement each physics tick: the snap interpolation
/// first, then the climb along the ladder axis; reaching the far end
/// starts the exit sequence.
pub(crate) fn run_ladder_sessions(
    time: Res<Time>,
    clock: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut players: Query<
        (Entity, &mut Transform, &mut LadderSession, &mut AnimationRig),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let now = clock.elapsed_secs_f64();

    for (player, mut transform, mut session, mut rig) in &mut players {
        match session.phase {
            LadderPhase::Snapping => {
                let step = tuning.snap_move_speed * dt;
                transform.translation = transform.translation.move_towards(session.snap_to, step);
                if transform.translation == session.snap_to {
                    session.phase = LadderPhase::Climbing;
                }
            }
            LadderPhase::Climbing => {
                let step = tuning.ladder_climb_speed * dt;
                transform.translation = transform.translation.move_towards(session.reached, step);
                if transform.translation == session.reached {
                    begin_ladder_exit(player, &mut session, &mut rig, &tuning, &mut queue, now);
                }
            }
            LadderPhase::Exiting => {}
        }
    }
}

/// Far end reached: play the matching exit animation and schedule the
/// completion that hands the motor back.
fn begin_ladder_exit(
    player: Entity,
    session: &mut LadderSession,
    rig: &mut AnimationRig,
    tuning: &LocomotionTuning,
    queue: &mut DeferredQueue,
    now: f64,
) {
    session.phase = LadderPhase::Exiting;
    match session.direction {
        ClimbDirection::Up => {
            rig.set_state(AnimState::LadderTopClimb);
            queue.schedule(
                now,
                tuning.ladder_top_exit_delay,
                DeferredKind::FinishLadderTopExit { player },
            );
        }
        ClimbDirection::Down => {
            rig.set_state(AnimState::LadderDropping);
            queue.schedule(
                now,
                tuning.ladder_drop_idle_delay,
                DeferredKind::FinishLadderDrop { player },
            );
        }
    }
    info!("ladder exit started: {:?}", session.direction);
}

/// Deferred completions owned by this domain: the snap-window end and
/// both exit repositionings.
pub(crate) fn consume_deferred_actions(
    tuning: Res<LocomotionTuning>,
    mut fired: MessageReader<DeferredFired>,
    mut commands: Commands,
    mut players: Query<
        (
            &mut Transform,
            &mut PlayerState,
            &mut AnimationRig,
            &mut CharacterMotor,
            Option<&mut LadderSession>,
        ),
        With<Player>,
    >,
) {
    for message in fired.read() {
        match message.kind {
            DeferredKind::EndLadderSnap { player } => {
                let Ok((_, _, _, _, Some(mut session))) = players.get_mut(player) else {
                    continue;
                };
                if session.phase == LadderPhase::Snapping {
                    session.phase = LadderPhase::Climbing;
                }
            }
            DeferredKind::FinishLadderTopExit { player } => {
                let Ok((mut transform, mut state, mut rig, mut motor, session)) =
                    players.get_mut(player)
                else {
                    continue;
                };
                if session.is_none() {
                    continue;
                }
                apply_ladder_top_exit(&mut transform, &mut state, &mut rig, &mut motor, &tuning);
                commands.entity(player).remove::<LadderSession>();
                info!("ladder top exit finished");
            }
            DeferredKind::FinishLadderDrop { player } => {
                let Ok((mut transform, mut state, mut rig, mut motor, session)) =
                    players.get_mut(player)
                else {
                    continue;
                };
                let Some(session) = session else {
                    continue;
                };
                apply_ladder_drop_exit(
                    &mut transform,
                    &mut state,
                    &mut rig,
                    &mut motor,
                    session.angle,
                    &tuning,
                );
                commands.entity(player).remove::<LadderSession>();
                info!("ladder drop finished");
            }
            _ => {}
        }
    }
}

/// Hands control back at the end of the top-exit sequence. The logical
/// position is reconciled with the climb animation's body pose plus
/// the authored exit offset.
pub(crate) fn apply_ladder_top_exit(
    transform: &mut Transform,
    state: &mut PlayerState,
    rig: &mut AnimationRig,
    motor: &mut CharacterMotor,
    tuning: &LocomotionTuning,
) {
    let mut target = rig.body_position(transform.translation);
    target.y += tuning.climb_exit_offset_y;
    transform.translation = target;
    transform.rotation = Quat::IDENTITY;
    rig.set_state(AnimState::Idle);
    state.velocity = Vec3::ZERO;
    state.movement_disabled = false;
    motor.enabled = true;
}

/// Hands control back after a climb down. The body is nudged off the
/// ladder axis and turned away from the lean so the volume does not
/// immediately re-trigger.
pub(crate) fn apply_ladder_drop_exit(
    transform: &mut Transform,
    state: &mut PlayerState,
    rig: &mut AnimationRig,
    motor: &mut CharacterMotor,
    angle: LadderAngle,
    tuning: &LocomotionTuning,
) {
    transform.translation.x += angle.exit_nudge_sign() * tuning.ladder_exit_nudge;
    rig.set_facing(angle.climb_facing().flipped());
    rig.set_state(AnimState::Idle);
    state.velocity = Vec3::ZERO;
    state.movement_disabled = false;
    motor.enabled = true;
}
