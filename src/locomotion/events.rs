//! Locomotion domain: typed contact and trigger events.
//!
//! Raw physics callbacks are translated in one place into these
//! tagged events; consuming domains pattern-match on the category
//! instead of inspecting tags or colliders themselves.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// An airborne-relevant solid contact reported by the motor probes.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceContact {
    pub player: Entity,
    pub normal: Vec3,
    /// Contacted surface carries the jumpable-wall marker.
    pub jumpable: bool,
}

impl Message for SurfaceContact {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Enter,
    Exit,
}

/// Category of the trigger volume involved in an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// A climbable ladder volume.
    Ladder(Entity),
    /// A ledge-trigger volume overlapping the ledge sensor.
    Ledge(Entity),
    /// A carrying surface (moving platform or elevator carriage).
    Surface(Entity),
    /// An elevator's call zone.
    Elevator(Entity),
    /// An elevator panel's activation zone.
    Panel(Entity),
    /// A coin or time collectable.
    Collectable(Entity),
}

/// Overlap between the player (or its ledge sensor) and a trigger
/// volume, already classified by category.
#[derive(Debug, Clone, Copy)]
pub struct TriggerEvent {
    pub player: Entity,
    pub phase: TriggerPhase,
    pub kind: TriggerKind,
}

impl Message for TriggerEvent {}
