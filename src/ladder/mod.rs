//! Ladder domain: climbable segments and the climb session flow.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ApproachEnd, ClimbDirection, LadderAngle, LadderGeometry, LadderPhase, LadderSession,
    decide_approach,
};

use bevy::prelude::*;

use crate::core::{DrainDeferredSet, GameState};
use crate::ladder::systems::{consume_deferred_actions, handle_ladder_triggers, run_ladder_sessions};

pub struct LadderPlugin;

impl Plugin for LadderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            handle_ladder_triggers.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            run_ladder_sessions.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            consume_deferred_actions
                .after(DrainDeferredSet)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
