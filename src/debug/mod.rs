//! Debug overlay for fast iteration: a toggleable readout of the
//! traversal state.

use bevy::prelude::*;

use crate::animation::AnimationRig;
use crate::locomotion::{CharacterMotor, Player, PlayerState};
use crate::pickups::{CountdownTimer, Inventory};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the debug overlay root
#[derive(Component, Debug)]
pub struct DebugOverlay;

/// Marker for the overlay text
#[derive(Component, Debug)]
pub struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay));
    }
}

/// Toggle the overlay with F1 or backtick
pub(crate) fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(50),
        ))
        .with_children(|parent| {
            parent.spawn((
                DebugOverlayText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.95, 0.8)),
            ));
        });
}

pub(crate) fn update_overlay(
    debug_state: Res<DebugState>,
    players: Query<(&Transform, &PlayerState, &CharacterMotor, &AnimationRig), With<Player>>,
    inventory: Res<Inventory>,
    countdown: Res<CountdownTimer>,
    mut query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !debug_state.overlay_visible {
        return;
    }
    let Ok((transform, state, motor, rig)) = players.single() else {
        return;
    };
    for mut text in &mut query {
        **text = format!(
            "pos {:.2} {:.2}\nvel {:.2} {:.2}\nanim {:?} facing {:?}\n\
             grounded {} jumps {} armed {}\nmotor {} input {}\ncoins {} lives {} time {:.0}",
            transform.translation.x,
            transform.translation.y,
            state.velocity.x,
            state.velocity.y,
            rig.state,
            rig.facing,
            motor.grounded,
            state.jumps_used,
            state.wall_jump_armed,
            motor.enabled,
            !state.movement_disabled,
            inventory.coins,
            inventory.lives,
            countdown.remaining,
        );
    }
}
