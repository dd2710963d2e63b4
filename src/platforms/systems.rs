//! Platforms domain: patrol and elevator motion plus the call logic.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{DeferredFired, DeferredKind, DeferredQueue};
use crate::locomotion::{TriggerEvent, TriggerKind, TriggerPhase};
use crate::pickups::Inventory;
use crate::platforms::components::{Elevator, ElevatorPanel, ElevatorStop, MovingPlatform};

/// Standing in a landing zone summons the carriage after this long.
const CALL_DELAY: f32 = 2.0;

const LIGHT_GREEN: Color = Color::srgb(0.2, 0.9, 0.2);
const LIGHT_RED: Color = Color::srgb(0.9, 0.2, 0.2);

/// Moves each platform toward its current waypoint, stepping the
/// route on arrival.
pub(crate) fn move_platforms(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut MovingPlatform)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut platform) in &mut query {
        let Some(target) = platform.target_point() else {
            continue;
        };
        let step = platform.speed * dt;
        transform.translation = transform.translation.move_towards(target, step);
        if transform.translation == target {
            platform.step_target();
        }
    }
}

/// Drives an in-progress elevator ride and settles the carriage at
/// the stop on arrival.
pub(crate) fn move_elevators(
    time: Res<Time>,
    mut elevators: Query<&mut Elevator>,
    mut transforms: Query<&mut Transform>,
) {
    let dt = time.delta_secs();

    for mut elevator in &mut elevators {
        let Some(stop) = elevator.moving else {
            continue;
        };
        let Ok(mut transform) = transforms.get_mut(elevator.carriage) else {
            continue;
        };
        let target = elevator.stop_point(stop);
        transform.translation = transform
            .translation
            .move_towards(target, elevator.speed * dt);
        if transform.translation == target {
            elevator.at = stop;
            elevator.moving = None;
            info!("elevator arrived at {:?}", stop);
        }
    }
}

/// Entering a landing zone while the elevator is idle schedules a
/// ride toward the other stop. A redundant summon resolves as a no-op
/// when the deferred call fires.
pub(crate) fn handle_elevator_triggers(
    mut triggers: MessageReader<TriggerEvent>,
    time: Res<Time<Virtual>>,
    mut queue: ResMut<DeferredQueue>,
    elevators: Query<&Elevator>,
) {
    let now = time.elapsed_secs_f64();

    for event in triggers.read() {
        let TriggerKind::Elevator(elevator_entity) = event.kind else {
            continue;
        };
        if event.phase != TriggerPhase::Enter {
            continue;
        }
        let Ok(elevator) = elevators.get(elevator_entity) else {
            continue;
        };
        if !elevator.is_idle() {
            continue;
        }
        let target = elevator.at.opposite();
        queue.schedule(
            now,
            CALL_DELAY,
            DeferredKind::StartElevator {
                elevator: elevator_entity,
                target,
            },
        );
        info!("elevator summoned toward {:?}", target);
    }
}

/// The coin-gated panel: stepping on it with enough coins lights it
/// green and sends the carriage down immediately; stepping off resets
/// the light.
pub(crate) fn handle_panel_triggers(
    mut triggers: MessageReader<TriggerEvent>,
    inventory: Res<Inventory>,
    panels: Query<&ElevatorPanel>,
    mut elevators: Query<&mut Elevator>,
    lights: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in triggers.read() {
        let TriggerKind::Panel(panel_entity) = event.kind else {
            continue;
        };
        let Ok(panel) = panels.get(panel_entity) else {
            continue;
        };

        match event.phase {
            TriggerPhase::Enter => {
                if inventory.coins <= panel.required_coins {
                    debug!(
                        "panel refused: {} coins, needs more than {}",
                        inventory.coins, panel.required_coins
                    );
                    continue;
                }
                let Ok(mut elevator) = elevators.get_mut(panel.elevator) else {
                    continue;
                };
                // The call report gates the light so a redundant call
                // changes nothing.
                if elevator.call(ElevatorStop::Bottom) {
                    set_light(&lights, &mut materials, panel.light, LIGHT_GREEN);
                    info!("panel accepted, elevator descending");
                } else {
                    debug!("panel call redundant, carriage already committed");
                }
            }
            TriggerPhase::Exit => {
                set_light(&lights, &mut materials, panel.light, LIGHT_RED);
            }
        }
    }
}

fn set_light(
    lights: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
    light: Entity,
    color: Color,
) {
    let Ok(handle) = lights.get(light) else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.0) {
        material.base_color = color;
    }
}

/// Deferred elevator starts. A summon that became redundant while
/// waiting (the carriage already left, or is already there) lands as
/// a no-op.
pub(crate) fn consume_deferred_actions(
    mut fired: MessageReader<DeferredFired>,
    mut elevators: Query<&mut Elevator>,
) {
    for message in fired.read() {
        let DeferredKind::StartElevator { elevator, target } = message.kind else {
            continue;
        };
        let Ok(mut elevator) = elevators.get_mut(elevator) else {
            continue;
        };
        if !elevator.call(target) {
            debug!("redundant elevator call toward {:?}", target);
        }
    }
}
