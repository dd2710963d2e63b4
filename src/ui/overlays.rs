//! UI domain: game-over and victory overlays.

use bevy::prelude::*;

use crate::core::{DeferredKind, DeferredQueue};

/// The scene rebuilds itself this long after the game-over screen
/// appears.
const SCENE_RESET_DELAY: f32 = 10.0;

/// Marker for the game-over overlay
#[derive(Component)]
pub struct GameOverScreenUI;

/// Marker for the victory overlay
#[derive(Component)]
pub struct VictoryScreenUI;

pub(crate) fn spawn_game_over_screen(
    mut commands: Commands,
    time: Res<Time<Virtual>>,
    mut queue: ResMut<DeferredQueue>,
) {
    queue.schedule(
        time.elapsed_secs_f64(),
        SCENE_RESET_DELAY,
        DeferredKind::ResetScene,
    );

    spawn_overlay(
        &mut commands,
        GameOverScreenUI,
        "GAME OVER",
        Color::srgb(0.8, 0.15, 0.15),
        "Restarting shortly...",
    );
}

pub(crate) fn despawn_game_over_screen(
    mut commands: Commands,
    screens: Query<Entity, With<GameOverScreenUI>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn spawn_victory_screen(mut commands: Commands) {
    spawn_overlay(
        &mut commands,
        VictoryScreenUI,
        "YOU MADE IT",
        Color::srgb(0.9, 0.85, 0.3),
        "The level is cleared.",
    );
}

pub(crate) fn despawn_victory_screen(
    mut commands: Commands,
    screens: Query<Entity, With<VictoryScreenUI>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}

fn spawn_overlay(
    commands: &mut Commands,
    marker: impl Component,
    title: &str,
    title_color: Color,
    subtext: &str,
) {
    let title = title.to_string();
    let subtext = subtext.to_string();

    // Full screen dark overlay
    commands
        .spawn((
            marker,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            // High z-index to be on top of everything
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtext),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}
