//! Level domain: spawning the level from the loaded config, and the
//! full reset after a game over.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;
use std::path::Path;

use crate::animation::{AnimationRig, AnimatorParams};
use crate::core::{DeferredFired, DeferredKind, DeferredQueue, GameState};
use crate::ladder::LadderGeometry;
use crate::ledge::{LedgeSensor, LedgeTriggerVolume};
use crate::level::data::{BlockKindDef, LevelConfig, vec3};
use crate::level::loader::load_level_config;
use crate::level::resources::LevelRules;
use crate::locomotion::{
    CharacterMotor, GameLayer, JumpableWall, Player, PlayerState,
};
use crate::pickups::{
    Coin, Collectable, CountdownTimer, Inventory, TimeCollectable, time_collectable_scale,
};
use crate::platforms::{
    CarrySurface, Elevator, ElevatorPanel, ElevatorStop, ElevatorZone, MovingPlatform,
};

const LEVEL_FILE: &str = "assets/config/level.ron";

/// Everything spawned from the level config, player included. The
/// scene reset despawns by this marker and rebuilds.
#[derive(Component)]
pub struct LevelEntity;

/// Retained copy of the loaded config so the scene reset can rebuild
/// the level exactly as it started.
#[derive(Resource)]
pub struct LoadedLevel(pub LevelConfig);

pub(crate) fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = match load_level_config(Path::new(LEVEL_FILE)) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using the built-in level", e);
            LevelConfig::default()
        }
    };

    let mut tuning = config.tuning.clone();
    tuning.validate();
    commands.insert_resource(tuning);
    commands.insert_resource(LevelRules {
        start_position: vec3(config.start_position),
        start_rotation: Quat::from_rotation_y(config.start_rotation_degrees.to_radians()),
        finish_position: vec3(config.finish_position),
        fall_kill_y: config.fall_kill_y,
    });
    commands.insert_resource(Inventory {
        coins: 0,
        lives: config.lives,
    });
    commands.insert_resource(CountdownTimer {
        remaining: config.countdown_seconds,
    });

    spawn_level_content(&mut commands, &mut meshes, &mut materials, &config);
    commands.insert_resource(LoadedLevel(config));
}

/// The deferred scene reset after a game over: tear down every level
/// entity, restore the resources, rebuild from the retained config,
/// and return to play.
pub(crate) fn consume_reset_scene(
    mut fired: MessageReader<DeferredFired>,
    level: Res<LoadedLevel>,
    mut inventory: ResMut<Inventory>,
    mut countdown: ResMut<CountdownTimer>,
    mut queue: ResMut<DeferredQueue>,
    existing: Query<Entity, With<LevelEntity>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for message in fired.read() {
        if !matches!(message.kind, DeferredKind::ResetScene) {
            continue;
        }
        // A rider may already go down with its carrying surface.
        for entity in &existing {
            commands.entity(entity).try_despawn();
        }
        queue.clear();
        *inventory = Inventory {
            coins: 0,
            lives: level.0.lives,
        };
        *countdown = CountdownTimer {
            remaining: level.0.countdown_seconds,
        };
        spawn_level_content(&mut commands, &mut meshes, &mut materials, &level.0);
        next_state.set(GameState::Playing);
        info!("scene reset");
    }
}

fn spawn_level_content(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &LevelConfig,
) {
    let trigger_layers = CollisionLayers::new(GameLayer::Trigger, [GameLayer::Player]);
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::PushBody]);
    let wall_layers =
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::PushBody]);

    // Static geometry
    for block in &config.blocks {
        let size = vec3(block.size);
        let (color, layers) = match block.kind {
            BlockKindDef::Ground => (Color::srgb(0.4, 0.5, 0.4), ground_layers),
            BlockKindDef::Wall => (Color::srgb(0.3, 0.3, 0.4), wall_layers),
            BlockKindDef::JumpableWall => (Color::srgb(0.45, 0.35, 0.5), wall_layers),
        };
        let mut block_entity = commands.spawn((
            LevelEntity,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(vec3(block.position)),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            layers,
        ));
        if matches!(block.kind, BlockKindDef::JumpableWall) {
            block_entity.insert(JumpableWall);
        }
    }

    // Shovable crates
    for block in &config.push_blocks {
        let size = vec3(block.size);
        commands.spawn((
            LevelEntity,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(Color::srgb(0.6, 0.45, 0.3))),
            Transform::from_translation(vec3(block.position)),
            RigidBody::Dynamic,
            Collider::cuboid(size.x, size.y, size.z),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            CollisionLayers::new(
                GameLayer::PushBody,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::PushBody,
                ],
            ),
        ));
    }

    // Patrolling platforms
    let mut platform_entities = Vec::with_capacity(config.platforms.len());
    for def in &config.platforms {
        let size = vec3(def.size);
        let waypoints: Vec<Vec3> = def.waypoints.iter().copied().map(vec3).collect();
        let start = waypoints.first().copied().unwrap_or(Vec3::ZERO);
        let mut platform = commands.spawn((
            LevelEntity,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(Color::srgb(0.5, 0.4, 0.3))),
            Transform::from_translation(start),
            RigidBody::Kinematic,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
        platform.with_children(|parent| {
            spawn_carry_sensor(parent, size, trigger_layers);
        });
        if waypoints.len() < 2 {
            error!("platform at {:?} needs two waypoints, left inert", start);
        } else {
            platform.insert(MovingPlatform::new(waypoints, def.speed));
        }
        platform_entities.push(platform.id());
    }

    // Elevators
    for def in &config.elevators {
        let size = vec3(def.size);
        let carriage = commands
            .spawn((
                LevelEntity,
                Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
                MeshMaterial3d(materials.add(Color::srgb(0.35, 0.45, 0.55))),
                Transform::from_translation(vec3(def.bottom)),
                RigidBody::Kinematic,
                Collider::cuboid(size.x, size.y, size.z),
                ground_layers,
            ))
            .with_children(|parent| {
                spawn_carry_sensor(parent, size, trigger_layers);
            })
            .id();

        let controller = commands
            .spawn((
                LevelEntity,
                Elevator {
                    top: vec3(def.top),
                    bottom: vec3(def.bottom),
                    speed: def.speed,
                    at: ElevatorStop::Bottom,
                    moving: None,
                    carriage,
                },
            ))
            .id();

        let zone_size = vec3(def.zone_size.unwrap_or([2.0, 2.0, 2.0]));
        for center in &def.zones {
            commands.spawn((
                LevelEntity,
                ElevatorZone {
                    elevator: controller,
                },
                Sensor,
                CollisionEventsEnabled,
                Collider::cuboid(zone_size.x, zone_size.y, zone_size.z),
                Transform::from_translation(vec3(*center)),
                trigger_layers,
            ));
        }

        if let Some(panel) = &def.panel {
            let position = vec3(panel.position);
            let light = commands
                .spawn((
                    LevelEntity,
                    Mesh3d(meshes.add(Sphere::new(0.15))),
                    MeshMaterial3d(materials.add(Color::srgb(0.9, 0.2, 0.2))),
                    Transform::from_translation(position + Vec3::new(0.0, 1.2, 0.0)),
                ))
                .id();
            commands.spawn((
                LevelEntity,
                ElevatorPanel {
                    light,
                    elevator: controller,
                    required_coins: panel.required_coins,
                },
                Mesh3d(meshes.add(Cuboid::new(1.2, 0.1, 1.2))),
                MeshMaterial3d(materials.add(Color::srgb(0.25, 0.25, 0.3))),
                Transform::from_translation(position),
                Sensor,
                CollisionEventsEnabled,
                Collider::cuboid(1.2, 1.0, 1.2),
                trigger_layers,
            ));
        }
    }

    // Ladders
    for def in &config.ladders {
        let geometry = LadderGeometry {
            angle: def.lean.angle(),
            snap_bottom: vec3(def.snap_bottom),
            snap_top: vec3(def.snap_top),
            reached_bottom: vec3(def.reached_bottom),
            reached_top: vec3(def.reached_top),
        };
        if geometry.is_degenerate() {
            error!("degenerate ladder at {:?}, volume left inert", def.volume_center);
            continue;
        }
        let size = vec3(def.volume_size);
        commands.spawn((
            LevelEntity,
            geometry,
            Sensor,
            CollisionEventsEnabled,
            Collider::cuboid(size.x, size.y, size.z),
            Transform::from_translation(vec3(def.volume_center)),
            trigger_layers,
        ));
    }

    // Ledge hang volumes
    for def in &config.ledges {
        let size = vec3(def.size);
        let volume = commands
            .spawn((
                LevelEntity,
                LedgeTriggerVolume {
                    facing: def.facing.facing(),
                },
                Sensor,
                CollisionEventsEnabled,
                Collider::cuboid(size.x, size.y, size.z),
                Transform::from_translation(vec3(def.position)),
                trigger_layers,
            ))
            .id();
        if let Some(index) = def.parent_platform {
            // Parented volumes author their position in platform-local
            // space and carry their hanger along with the platform.
            match platform_entities.get(index) {
                Some(platform) => {
                    commands.entity(volume).insert(ChildOf(*platform));
                }
                None => warn!("ledge references missing platform {}", index),
            }
        }
    }

    // Coins, worth rolled once here
    let mut rng = rand::rng();
    for position in &config.coins {
        let value = rng.random_range(1..5);
        commands.spawn((
            LevelEntity,
            Collectable,
            Coin { value },
            Mesh3d(meshes.add(Sphere::new(0.25))),
            MeshMaterial3d(materials.add(Color::srgb(0.95, 0.8, 0.2))),
            Transform::from_translation(vec3(*position)),
            Sensor,
            CollisionEventsEnabled,
            Collider::sphere(0.25),
            trigger_layers,
        ));
    }

    // Time pickups, sized by their worth
    for def in &config.time_pickups {
        let scale = time_collectable_scale(def.add_time);
        commands.spawn((
            LevelEntity,
            Collectable,
            TimeCollectable {
                add_time: def.add_time,
            },
            Mesh3d(meshes.add(Cuboid::new(0.5, 0.5, 0.5))),
            MeshMaterial3d(materials.add(Color::srgb(0.3, 0.8, 0.9))),
            Transform::from_translation(vec3(def.position)).with_scale(Vec3::splat(scale)),
            Sensor,
            CollisionEventsEnabled,
            Collider::cuboid(0.5, 0.5, 0.5),
            trigger_layers,
        ));
    }

    spawn_player(
        commands,
        meshes,
        materials,
        Transform::from_translation(vec3(config.start_position))
            .with_rotation(Quat::from_rotation_y(config.start_rotation_degrees.to_radians())),
        Quat::from_rotation_y(config.model_start_rotation_degrees.to_radians()),
    );

    // Finish marker
    commands.spawn((
        LevelEntity,
        Mesh3d(meshes.add(Cylinder::new(0.4, 3.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.3))),
        Transform::from_translation(vec3(config.finish_position)),
    ));
}

fn spawn_carry_sensor(
    parent: &mut ChildSpawnerCommands,
    surface_size: Vec3,
    trigger_layers: CollisionLayers,
) {
    // Slightly taller than the surface so a standing character stays
    // inside the overlap.
    parent.spawn((
        CarrySurface,
        Sensor,
        CollisionEventsEnabled,
        Collider::cuboid(surface_size.x, surface_size.y + 1.0, surface_size.z),
        Transform::from_xyz(0.0, 0.6, 0.0),
        trigger_layers,
    ));
}

fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    start: Transform,
    model_rotation: Quat,
) {
    let model = commands
        .spawn((
            Mesh3d(meshes.add(Capsule3d::new(0.3, 1.2))),
            MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.9))),
            Transform::from_rotation(model_rotation),
            AnimatorParams::default(),
        ))
        .id();

    let player = commands
        .spawn((
            LevelEntity,
            Player,
            PlayerState::default(),
            CharacterMotor::default(),
            AnimationRig::new(model, Vec3::new(0.0, 1.8, 0.0)),
            start,
            RigidBody::Kinematic,
            Collider::capsule(0.3, 1.2),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Trigger,
                    GameLayer::PushBody,
                ],
            ),
        ))
        .add_child(model)
        .id();

    // The overhead sensor that meets ledge volumes during a jump.
    commands.spawn((
        LedgeSensor { owner: player },
        Sensor,
        CollisionEventsEnabled,
        Collider::cuboid(0.5, 0.4, 0.6),
        Transform::from_xyz(0.0, 1.1, 0.0),
        CollisionLayers::new(GameLayer::Player, [GameLayer::Trigger]),
        ChildOf(player),
    ));
}
