//! Pickups domain: inventory and countdown resources.

use bevy::prelude::*;

/// What the character holds: coins collected this run and lives left.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Inventory {
    pub coins: u32,
    pub lives: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self { coins: 0, lives: 3 }
    }
}

impl Inventory {
    pub fn add_coins(&mut self, value: u32) -> u32 {
        self.coins += value;
        self.coins
    }

    /// Spends a life. Reports whether any remain afterwards.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }
}

/// Seconds left to finish the level.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CountdownTimer {
    pub remaining: f32,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self { remaining: 120.0 }
    }
}

impl CountdownTimer {
    /// Ticks down, clamping at zero. Reports whether time ran out on
    /// this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining == 0.0
    }

    pub fn add(&mut self, seconds: f32) {
        self.remaining += seconds;
    }
}
