//! Pickups domain: collectable markers.

use bevy::prelude::*;

/// Marks a sensor the character can collect by touch.
#[derive(Component, Debug)]
pub struct Collectable;

/// A coin worth `value`, rolled once at spawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct Coin {
    pub value: u32,
}

/// A pickup that adds seconds to the countdown.
#[derive(Component, Debug, Clone, Copy)]
pub struct TimeCollectable {
    pub add_time: f32,
}

/// Visual convention: a time pickup's size telegraphs its worth.
pub fn time_collectable_scale(add_time: f32) -> f32 {
    add_time / 5.0
}
