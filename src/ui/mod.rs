//! UI domain: in-run HUD and the end-of-run overlays.

mod hud;
mod overlays;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud::{
    spawn_hud, update_coin_display, update_lives_display, update_timer_display,
};
use crate::ui::overlays::{
    despawn_game_over_screen, despawn_victory_screen, spawn_game_over_screen,
    spawn_victory_screen,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (
                    update_coin_display,
                    update_lives_display,
                    update_timer_display,
                ),
            )
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
            .add_systems(OnExit(GameState::GameOver), despawn_game_over_screen)
            .add_systems(OnEnter(GameState::Victory), spawn_victory_screen)
            .add_systems(OnExit(GameState::Victory), despawn_victory_screen);
    }
}
