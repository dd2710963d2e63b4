//! Platforms domain: patrol, elevator, and carry components.

use bevy::prelude::*;

/// Marks a surface the character is parented under while standing on
/// it, so the surface's motion carries the character along.
#[derive(Component, Debug)]
pub struct CarrySurface;

/// A platform patrolling its authored waypoints at constant speed.
#[derive(Component, Debug, Clone)]
pub struct MovingPlatform {
    pub waypoints: Vec<Vec3>,
    pub target: usize,
    pub speed: f32,
}

impl MovingPlatform {
    pub fn new(waypoints: Vec<Vec3>, speed: f32) -> Self {
        Self {
            waypoints,
            target: 0,
            speed,
        }
    }

    pub fn target_point(&self) -> Option<Vec3> {
        self.waypoints.get(self.target).copied()
    }

    /// Advances to the next waypoint on arrival. The last waypoint
    /// steps back one instead of wrapping, so routes with more than
    /// two waypoints settle into shuttling between the final pair.
    /// Long-standing authored behavior; levels rely on it.
    pub fn step_target(&mut self) {
        if self.target + 1 == self.waypoints.len() {
            self.target = self.target.saturating_sub(1);
        } else {
            self.target += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorStop {
    Top,
    Bottom,
}

impl ElevatorStop {
    pub fn opposite(self) -> Self {
        match self {
            ElevatorStop::Top => ElevatorStop::Bottom,
            ElevatorStop::Bottom => ElevatorStop::Top,
        }
    }
}

/// Two-stop elevator. The component lives on a controller entity; the
/// carriage is the moving child that actually carries the character.
#[derive(Component, Debug)]
pub struct Elevator {
    pub top: Vec3,
    pub bottom: Vec3,
    pub speed: f32,
    pub at: ElevatorStop,
    pub moving: Option<ElevatorStop>,
    pub carriage: Entity,
}

impl Elevator {
    pub fn stop_point(&self, stop: ElevatorStop) -> Vec3 {
        match stop {
            ElevatorStop::Top => self.top,
            ElevatorStop::Bottom => self.bottom,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.moving.is_none()
    }

    /// Starts moving toward the requested stop. A call to the stop the
    /// carriage already occupies, or while a ride is in progress, is
    /// redundant and reports false.
    pub fn call(&mut self, target: ElevatorStop) -> bool {
        if self.moving.is_some() || self.at == target {
            return false;
        }
        self.moving = Some(target);
        true
    }
}

/// Sensor region at an elevator landing; standing in it summons a
/// ride toward the other stop.
#[derive(Component, Debug)]
pub struct ElevatorZone {
    pub elevator: Entity,
}

/// Coin-gated call panel. Enough coins turns the light green and
/// sends the carriage down; stepping off turns it red again.
#[derive(Component, Debug)]
pub struct ElevatorPanel {
    pub light: Entity,
    pub elevator: Entity,
    pub required_coins: u32,
}
