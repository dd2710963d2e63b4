//! Ledge domain: hang entry volumes and the snap onto the hold.
//!
//! A dedicated sensor child on the character overlaps authored ledge
//! volumes; the entry system here takes the motor away and snaps the
//! body onto the hold. The hang inputs themselves (drop, climb) are
//! resolved by the locomotion domain once hang input is enabled.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{HangSnap, LedgeSensor, LedgeTriggerVolume, hang_target};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ledge::systems::{handle_ledge_triggers, run_hang_snap};

pub struct LedgePlugin;

impl Plugin for LedgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            handle_ledge_triggers.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            run_hang_snap.run_if(in_state(GameState::Playing)),
        );
    }
}
