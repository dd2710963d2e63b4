//! Pickups domain: collection, countdown, and the fall/respawn loop.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{AnimState, AnimationRig};
use crate::core::{DeferredFired, DeferredKind, DeferredQueue, GameState};
use crate::ladder::LadderSession;
use crate::ledge::HangSnap;
use crate::level::LevelRules;
use crate::locomotion::{
    CharacterMotor, Player, PlayerState, TriggerEvent, TriggerKind, TriggerPhase,
};
use crate::pickups::components::{Coin, TimeCollectable};
use crate::pickups::events::CoinCollected;
use crate::pickups::resources::{CountdownTimer, Inventory};

const RESPAWN_DELAY: f32 = 3.0;
const FINISH_RADIUS: f32 = 1.0;

/// Applies touched collectables and despawns them.
pub(crate) fn collect_pickups(
    mut triggers: MessageReader<TriggerEvent>,
    coins: Query<&Coin>,
    time_pickups: Query<&TimeCollectable>,
    mut inventory: ResMut<Inventory>,
    mut countdown: ResMut<CountdownTimer>,
    mut collected: MessageWriter<CoinCollected>,
    mut commands: Commands,
) {
    for event in triggers.read() {
        let TriggerKind::Collectable(item) = event.kind else {
            continue;
        };
        if event.phase != TriggerPhase::Enter {
            continue;
        }

        if let Ok(coin) = coins.get(item) {
            let total = inventory.add_coins(coin.value);
            collected.write(CoinCollected {
                value: coin.value,
                total,
            });
            info!("coin worth {} collected, {} total", coin.value, total);
        } else if let Ok(pickup) = time_pickups.get(item) {
            countdown.add(pickup.add_time);
            info!("+{}s on the clock", pickup.add_time);
        }
        commands.entity(item).despawn();
    }
}

/// Ticks the level countdown; running out ends the run.
pub(crate) fn tick_countdown(
    time: Res<Time>,
    mut countdown: ResMut<CountdownTimer>,
    mut players: Query<&mut PlayerState, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if countdown.tick(time.delta_secs()) {
        warn!("countdown expired");
        for mut state in &mut players {
            state.movement_disabled = true;
        }
        next_state.set(GameState::GameOver);
    }
}

/// Falling below the kill height costs a life. With lives left the
/// body is hidden and parked at the start until the respawn fires;
/// with none left the run is over.
pub(crate) fn check_fall(
    time: Res<Time<Virtual>>,
    rules: Res<LevelRules>,
    mut inventory: ResMut<Inventory>,
    mut queue: ResMut<DeferredQueue>,
    mut commands: Commands,
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &mut PlayerState,
            &AnimationRig,
            &mut CharacterMotor,
            Option<&ChildOf>,
        ),
        With<Player>,
    >,
    mut visibility: Query<&mut Visibility>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let now = time.elapsed_secs_f64();

    for (entity, mut transform, mut state, rig, mut motor, child_of) in &mut players {
        if transform.translation.y >= rules.fall_kill_y {
            continue;
        }

        // Park at the start immediately; the kill plane must not
        // trigger twice for one fall.
        if child_of.is_some() {
            commands.entity(entity).remove::<ChildOf>();
        }
        commands.entity(entity).remove::<LadderSession>();
        commands.entity(entity).remove::<HangSnap>();
        transform.translation = rules.start_position;
        transform.rotation = rules.start_rotation;
        state.velocity = Vec3::ZERO;
        state.movement_disabled = true;
        state.hang_input_enabled = false;
        motor.enabled = false;
        set_model_visibility(rig, &mut visibility, Visibility::Hidden);

        if inventory.lose_life() {
            info!("fell out of the level, {} lives left", inventory.lives);
            queue.schedule(now, RESPAWN_DELAY, DeferredKind::RespawnPlayer { player: entity });
        } else {
            warn!("fell out of the level with no lives left");
            next_state.set(GameState::GameOver);
        }
    }
}

/// Reaching the finish marker wins the run.
pub(crate) fn check_finish(
    rules: Res<LevelRules>,
    players: Query<&Transform, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for transform in &players {
        if transform.translation.distance(rules.finish_position) < FINISH_RADIUS {
            info!("finish reached");
            next_state.set(GameState::Victory);
        }
    }
}

/// The deferred respawn: show the body again and hand control back.
pub(crate) fn consume_deferred_actions(
    mut fired: MessageReader<DeferredFired>,
    mut players: Query<
        (&mut PlayerState, &mut AnimationRig, &mut CharacterMotor),
        With<Player>,
    >,
    mut visibility: Query<&mut Visibility>,
) {
    for message in fired.read() {
        let DeferredKind::RespawnPlayer { player } = message.kind else {
            continue;
        };
        let Ok((mut state, mut rig, mut motor)) = players.get_mut(player) else {
            continue;
        };
        rig.set_state(AnimState::Idle);
        set_model_visibility(&rig, &mut visibility, Visibility::Inherited);
        state.velocity = Vec3::ZERO;
        state.jumps_used = 0;
        state.movement_disabled = false;
        motor.enabled = true;
        info!("respawned");
    }
}

fn set_model_visibility(
    rig: &AnimationRig,
    visibility: &mut Query<&mut Visibility>,
    value: Visibility,
) {
    let Some(model) = rig.model else {
        return;
    };
    if let Ok(mut vis) = visibility.get_mut(model) {
        *vis = value;
    }
}
