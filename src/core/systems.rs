//! Core domain: camera setup, boot hand-off, and the scheduler drain.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::scheduler::{DeferredFired, DeferredQueue};
use crate::core::state::GameState;
use crate::locomotion::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    // Side view of the XY play plane.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, 28.0).looking_at(Vec3::new(0.0, 4.0, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(8.0, 16.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Trails the character along the play plane, easing toward it so
/// snaps and respawns do not jolt the view.
pub(crate) fn follow_player_camera(
    time: Res<Time>,
    players: Query<&GlobalTransform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera3d>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let focus = player.translation();
    let target = Vec3::new(focus.x, focus.y + 4.0, 28.0);
    let t = (4.0 * time.delta_secs()).min(1.0);

    for mut camera in &mut cameras {
        camera.translation = camera.translation.lerp(target, t);
    }
}

/// Level spawning runs during Startup; once the first frame has gone
/// through, hand over to gameplay.
pub(crate) fn finish_boot(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

/// Drains every deferred action that came due this tick and republishes
/// it as a message for the owning domain.
pub(crate) fn drain_deferred(
    time: Res<Time<Virtual>>,
    mut queue: ResMut<DeferredQueue>,
    mut fired: MessageWriter<DeferredFired>,
) {
    for kind in queue.drain_due(time.elapsed_secs_f64()) {
        debug!("deferred action fired: {:?}", kind);
        fired.write(DeferredFired { kind });
    }
}
