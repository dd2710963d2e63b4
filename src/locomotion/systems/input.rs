//! Locomotion domain: input sampling for traversal.

use bevy::prelude::*;

use crate::locomotion::LocomotionInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x;
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.jump_just_released = keyboard.just_released(KeyCode::Space);
    input.use_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
}
