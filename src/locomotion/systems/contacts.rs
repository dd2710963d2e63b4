//! Locomotion domain: contact probing and trigger-volume translation.
//!
//! The physics layer's raw facts (raycast hits, sensor overlap
//! messages) are converted here into the typed events the rest of the
//! domains consume.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::ladder::LadderGeometry;
use crate::ledge::{LedgeSensor, LedgeTriggerVolume};
use crate::locomotion::events::{SurfaceContact, TriggerEvent, TriggerKind, TriggerPhase};
use crate::locomotion::{CharacterMotor, GameLayer, JumpableWall, Player, PlayerState};
use crate::pickups::Collectable;
use crate::platforms::{CarrySurface, ElevatorZone, ElevatorPanel};

const GROUND_PROBE: f32 = 0.08;
const WALL_PROBE: f32 = 0.06;

/// Casts a short ray down from the character's feet to derive
/// grounded status for this tick.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut CharacterMotor, &PlayerState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut motor, state) in &mut query {
        if !motor.enabled {
            continue;
        }
        // Skip the ground check while moving upward so a jump's first
        // tick does not read as grounded.
        if state.velocity.y > 0.0 {
            motor.grounded = false;
            continue;
        }

        let origin = transform.translation - Vec3::new(0.0, motor.half_extents.y, 0.0);
        let hit = spatial_query.cast_ray(origin, Dir3::NEG_Y, GROUND_PROBE, true, &ground_filter);
        motor.grounded = hit.is_some();
    }
}

/// Probes sideways and upward for solid contacts, reporting jumpable
/// walls and ceilings as [`SurfaceContact`]s and shoving dynamic
/// bodies struck with a horizontal normal.
pub(crate) fn probe_surface_contacts(
    spatial_query: SpatialQuery,
    query: Query<(Entity, &Transform, &CharacterMotor, &PlayerState), With<Player>>,
    jumpable: Query<(), With<JumpableWall>>,
    mut bodies: Query<&mut LinearVelocity>,
    mut contacts: MessageWriter<SurfaceContact>,
) {
    let wall_filter = SpatialQueryFilter::from_mask([GameLayer::Wall, GameLayer::Ground]);
    let body_filter = SpatialQueryFilter::from_mask(GameLayer::PushBody);

    for (player, transform, motor, state) in &query {
        if !motor.enabled {
            continue;
        }
        let origin = transform.translation;

        for dir in [Dir3::NEG_X, Dir3::X] {
            let reach = motor.half_extents.x + WALL_PROBE;
            if let Some(hit) = spatial_query.cast_ray(origin, dir, reach, true, &wall_filter) {
                contacts.write(SurfaceContact {
                    player,
                    normal: hit.normal,
                    jumpable: jumpable.get(hit.entity).is_ok(),
                });
            }

            // Push-object interaction: a dynamic body hit with a
            // purely horizontal normal inherits half the player's
            // horizontal speed, but only while the player actually
            // moves into it. A stationary overlap must not brake a
            // body that is already sliding.
            if let Some(hit) = spatial_query.cast_ray(origin, dir, reach, true, &body_filter) {
                if hit.normal.y == 0.0 {
                    if let Some(vx) = push_speed(state.velocity.x, dir.as_vec3().x) {
                        if let Ok(mut velocity) = bodies.get_mut(hit.entity) {
                            velocity.x = vx;
                        }
                    }
                }
            }
        }

        let up_reach = motor.half_extents.y + WALL_PROBE;
        if let Some(hit) = spatial_query.cast_ray(origin, Dir3::Y, up_reach, true, &wall_filter) {
            contacts.write(SurfaceContact {
                player,
                normal: hit.normal,
                jumpable: false,
            });
        }
    }
}

/// Horizontal speed handed to a pushable body in the probe direction.
/// `None` when the player is stationary or moving away from the body.
pub(crate) fn push_speed(player_vx: f32, probe_dir_x: f32) -> Option<f32> {
    if player_vx == 0.0 || player_vx.signum() != probe_dir_x.signum() {
        return None;
    }
    Some(probe_dir_x * (player_vx.abs() / 2.0))
}

/// Classifies avian sensor overlaps into typed trigger events. The
/// overlap either involves the player's body collider or, for ledge
/// volumes, the dedicated ledge sensor child.
pub(crate) fn translate_trigger_events(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    player_query: Query<(), With<Player>>,
    sensor_query: Query<&LedgeSensor>,
    ladder_query: Query<(), With<LadderGeometry>>,
    ledge_query: Query<(), With<LedgeTriggerVolume>>,
    surface_query: Query<(), With<CarrySurface>>,
    elevator_zone_query: Query<&ElevatorZone>,
    panel_query: Query<(), With<ElevatorPanel>>,
    collectable_query: Query<(), With<Collectable>>,
    mut triggers: MessageWriter<TriggerEvent>,
) {
    let mut classify = |a: Entity, b: Entity| -> Option<(Entity, TriggerKind)> {
        // Ledge volumes pair with the ledge sensor, everything else
        // with the player body.
        if let Ok(sensor) = sensor_query.get(a) {
            if ledge_query.get(b).is_ok() {
                return Some((sensor.owner, TriggerKind::Ledge(b)));
            }
            return None;
        }
        if player_query.get(a).is_err() {
            return None;
        }
        if ladder_query.get(b).is_ok() {
            Some((a, TriggerKind::Ladder(b)))
        } else if surface_query.get(b).is_ok() {
            Some((a, TriggerKind::Surface(b)))
        } else if let Ok(zone) = elevator_zone_query.get(b) {
            Some((a, TriggerKind::Elevator(zone.elevator)))
        } else if panel_query.get(b).is_ok() {
            Some((a, TriggerKind::Panel(b)))
        } else if collectable_query.get(b).is_ok() {
            Some((a, TriggerKind::Collectable(b)))
        } else {
            None
        }
    };

    for event in collision_start_events.read() {
        let pair = classify(event.collider1, event.collider2)
            .or_else(|| classify(event.collider2, event.collider1));
        if let Some((player, kind)) = pair {
            triggers.write(TriggerEvent {
                player,
                phase: TriggerPhase::Enter,
                kind,
            });
        }
    }

    for event in collision_end_events.read() {
        let pair = classify(event.collider1, event.collider2)
            .or_else(|| classify(event.collider2, event.collider1));
        if let Some((player, kind)) = pair {
            triggers.write(TriggerEvent {
                player,
                phase: TriggerPhase::Exit,
                kind,
            });
        }
    }
}

/// Parents the player under a carrying surface on overlap-enter and
/// detaches on overlap-exit, preserving the world position both ways.
pub(crate) fn ride_support_surfaces(
    mut commands: Commands,
    mut triggers: MessageReader<TriggerEvent>,
    globals: Query<&GlobalTransform>,
    mut transforms: Query<&mut Transform>,
    parents: Query<&ChildOf>,
) {
    for event in triggers.read() {
        let TriggerKind::Surface(surface) = event.kind else {
            continue;
        };
        match event.phase {
            TriggerPhase::Enter => {
                let (Ok(player_global), Ok(surface_global)) =
                    (globals.get(event.player), globals.get(surface))
                else {
                    continue;
                };
                let local = surface_global
                    .affine()
                    .inverse()
                    .transform_point3(player_global.translation());
                if let Ok(mut transform) = transforms.get_mut(event.player) {
                    transform.translation = local;
                }
                commands.entity(event.player).insert(ChildOf(surface));
                debug!("player riding surface {:?}", surface);
            }
            TriggerPhase::Exit => {
                // Only detach from the surface currently ridden; a
                // stale exit for another volume must not orphan us.
                if parents.get(event.player).map(|p| p.parent()) != Ok(surface) {
                    continue;
                }
                if let Ok(global) = globals.get(event.player) {
                    let world = global.translation();
                    if let Ok(mut transform) = transforms.get_mut(event.player) {
                        transform.translation = world;
                    }
                }
                commands.entity(event.player).remove::<ChildOf>();
                debug!("player left surface {:?}", surface);
            }
        }
    }
}
