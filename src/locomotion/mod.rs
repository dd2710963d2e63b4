//! Locomotion domain: the traversal state machine.
//!
//! Owns grounded/jump/wall-jump state, integrates velocity every
//! physics tick, and issues animation-state and facing updates. The
//! ladder and ledge domains command it through [`PlayerState`] and
//! the shared trigger events.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CharacterMotor, GameLayer, JumpableWall, Player, PlayerState};
pub use events::{SurfaceContact, TriggerEvent, TriggerKind, TriggerPhase};
pub use resources::{LocomotionInput, LocomotionTuning};

use bevy::prelude::*;

use crate::core::{DrainDeferredSet, GameState};
use crate::locomotion::systems::{
    consume_deferred_actions, detect_ground, handle_jump_pressed, handle_jump_released,
    handle_surface_contacts, handle_use_pressed, integrate_velocity, probe_surface_contacts,
    read_input, ride_support_surfaces, translate_trigger_events,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_message::<SurfaceContact>()
            .add_message::<TriggerEvent>()
            .add_systems(Update, read_input)
            .add_systems(
                Update,
                (
                    handle_jump_pressed,
                    handle_jump_released,
                    handle_use_pressed,
                )
                    .after(read_input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (translate_trigger_events, ride_support_surfaces)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (
                    detect_ground,
                    probe_surface_contacts,
                    handle_surface_contacts,
                    integrate_velocity,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                consume_deferred_actions
                    .after(DrainDeferredSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
