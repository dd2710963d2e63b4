//! Platforms domain: patrolling platforms, the two-stop elevator, and
//! the surfaces that carry the character.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    CarrySurface, Elevator, ElevatorPanel, ElevatorStop, ElevatorZone, MovingPlatform,
};

use bevy::prelude::*;

use crate::core::{DrainDeferredSet, GameState};
use crate::platforms::systems::{
    consume_deferred_actions, handle_elevator_triggers, handle_panel_triggers, move_elevators,
    move_platforms,
};

pub struct PlatformsPlugin;

impl Plugin for PlatformsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_elevator_triggers, handle_panel_triggers)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            (move_platforms, move_elevators).run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            consume_deferred_actions
                .after(DrainDeferredSet)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
