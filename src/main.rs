mod animation;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod ladder;
mod ledge;
mod level;
mod locomotion;
mod pickups;
mod platforms;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ledgewalker".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        animation::AnimationPlugin,
        locomotion::LocomotionPlugin,
        ladder::LadderPlugin,
        ledge::LedgePlugin,
        platforms::PlatformsPlugin,
        pickups::PickupsPlugin,
        level::LevelPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
