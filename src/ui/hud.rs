//! UI domain: coin, lives, and countdown HUD elements.

use bevy::prelude::*;

use crate::pickups::{CountdownTimer, Inventory};

const HUD_PADDING: f32 = 12.0;
const HUD_ROW_GAP: f32 = 6.0;

/// Marker for the HUD container
#[derive(Component)]
pub struct HudRoot;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

/// Marker for the lives text
#[derive(Component)]
pub struct LivesText;

/// Marker for the countdown text
#[derive(Component)]
pub struct TimerText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(HUD_ROW_GAP),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    // Coin icon (gold square)
                    row.spawn((
                        Node {
                            width: Val::Px(16.0),
                            height: Val::Px(16.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
                    ));
                    row.spawn((
                        CoinAmountText,
                        Text::new("0"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.85, 0.5)),
                    ));
                });

            parent.spawn((
                LivesText,
                Text::new("Lives: 3"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.5, 0.5)),
            ));

            parent.spawn((
                TimerText,
                Text::new("Time: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.9, 0.95)),
            ));
        });
}

pub(crate) fn update_coin_display(
    inventory: Res<Inventory>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    if inventory.is_changed() {
        for mut text in &mut query {
            **text = format!("{}", inventory.coins);
        }
    }
}

pub(crate) fn update_lives_display(
    inventory: Res<Inventory>,
    mut query: Query<&mut Text, With<LivesText>>,
) {
    if inventory.is_changed() {
        for mut text in &mut query {
            **text = format!("Lives: {}", inventory.lives);
        }
    }
}

pub(crate) fn update_timer_display(
    countdown: Res<CountdownTimer>,
    mut query: Query<&mut Text, With<TimerText>>,
) {
    if countdown.is_changed() {
        for mut text in &mut query {
            **text = format!("Time: {}", countdown.remaining.ceil() as i64);
        }
    }
}
