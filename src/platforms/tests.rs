use bevy::prelude::*;

use crate::platforms::components::{Elevator, ElevatorStop, MovingPlatform};

fn two_point_platform() -> MovingPlatform {
    MovingPlatform::new(
        vec![Vec3::new(0.0, 4.0, 0.0), Vec3::new(6.0, 4.0, 0.0)],
        1.5,
    )
}

#[test]
fn two_waypoints_ping_pong() {
    let mut platform = two_point_platform();
    assert_eq!(platform.target, 0);
    platform.step_target();
    assert_eq!(platform.target, 1);
    platform.step_target();
    assert_eq!(platform.target, 0);
    platform.step_target();
    assert_eq!(platform.target, 1);
}

#[test]
fn longer_routes_settle_on_the_final_pair() {
    let mut platform = MovingPlatform::new(
        vec![
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ],
        1.0,
    );
    let mut visited = Vec::new();
    for _ in 0..8 {
        visited.push(platform.target);
        platform.step_target();
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 2, 3, 2, 3]);
}

#[test]
fn single_waypoint_stays_put() {
    let mut platform = MovingPlatform::new(vec![Vec3::ONE], 1.0);
    platform.step_target();
    assert_eq!(platform.target, 0);
    assert_eq!(platform.target_point(), Some(Vec3::ONE));
}

#[test]
fn empty_route_has_no_target() {
    let platform = MovingPlatform::new(Vec::new(), 1.0);
    assert_eq!(platform.target_point(), None);
}

fn elevator() -> Elevator {
    Elevator {
        top: Vec3::new(0.0, 10.0, 0.0),
        bottom: Vec3::new(0.0, 1.0, 0.0),
        speed: 2.0,
        at: ElevatorStop::Bottom,
        moving: None,
        carriage: Entity::from_bits(42),
    }
}

#[test]
fn call_toward_the_other_stop_starts_a_ride() {
    let mut elevator = elevator();
    assert!(elevator.call(ElevatorStop::Top));
    assert_eq!(elevator.moving, Some(ElevatorStop::Top));
    assert!(!elevator.is_idle());
}

#[test]
fn call_toward_the_current_stop_is_redundant() {
    let mut elevator = elevator();
    assert!(!elevator.call(ElevatorStop::Bottom));
    // The false report means nothing changed; panels rely on it to
    // skip the light update.
    assert!(elevator.is_idle());
    assert_eq!(elevator.at, ElevatorStop::Bottom);
    assert_eq!(elevator.moving, None);
}

#[test]
fn call_during_a_ride_is_redundant() {
    let mut elevator = elevator();
    assert!(elevator.call(ElevatorStop::Top));
    assert!(!elevator.call(ElevatorStop::Bottom));
    assert_eq!(elevator.moving, Some(ElevatorStop::Top));
}

#[test]
fn stops_are_opposites() {
    assert_eq!(ElevatorStop::Top.opposite(), ElevatorStop::Bottom);
    assert_eq!(ElevatorStop::Bottom.opposite(), ElevatorStop::Top);
}

#[test]
fn stop_points_match_the_authored_ends() {
    let elevator = elevator();
    assert_eq!(elevator.stop_point(ElevatorStop::Top), elevator.top);
    assert_eq!(elevator.stop_point(ElevatorStop::Bottom), elevator.bottom);
}
