//! Pickups domain: collectables, the coin/lives inventory, the level
//! countdown, and the fall/respawn loop.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{Coin, Collectable, TimeCollectable, time_collectable_scale};
pub use events::CoinCollected;
pub use resources::{CountdownTimer, Inventory};

use bevy::prelude::*;

use crate::core::{DrainDeferredSet, GameState};
use crate::pickups::systems::{
    check_fall, check_finish, collect_pickups, consume_deferred_actions, tick_countdown,
};

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .init_resource::<CountdownTimer>()
            .add_message::<CoinCollected>()
            .add_systems(
                Update,
                collect_pickups.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (tick_countdown, check_fall, check_finish)
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
