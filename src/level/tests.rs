use bevy::prelude::*;
use ron::Options;

use crate::animation::Facing;
use crate::ladder::LadderAngle;
use crate::level::data::{BlockKindDef, FacingDef, LadderLeanDef, LevelConfig, vec3};

fn parse(source: &str) -> LevelConfig {
    Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(source)
        .expect("config should parse")
}

#[test]
fn vec3_converts_component_wise() {
    assert_eq!(vec3([1.0, -2.5, 3.0]), Vec3::new(1.0, -2.5, 3.0));
}

#[test]
fn minimal_config_fills_defaults() {
    let config = parse("(start_position: (5.0, 2.0, 0.0))");
    assert_eq!(config.start_position, [5.0, 2.0, 0.0]);
    assert_eq!(config.fall_kill_y, -50.0);
    assert_eq!(config.lives, 3);
    assert_eq!(config.countdown_seconds, 120.0);
    assert!(config.platforms.is_empty());
}

#[test]
fn start_rotations_parse_and_default() {
    let config = parse("(start_rotation_degrees: 180.0)");
    assert_eq!(config.start_rotation_degrees, 180.0);
    assert_eq!(config.model_start_rotation_degrees, 90.0);

    let defaults = LevelConfig::default();
    assert_eq!(defaults.start_rotation_degrees, 0.0);
}

#[test]
fn block_kind_defaults_to_ground() {
    let config = parse(
        "(blocks: [(position: (0.0, 0.0, 0.0), size: (4.0, 1.0, 4.0))])",
    );
    assert!(matches!(config.blocks[0].kind, BlockKindDef::Ground));
}

#[test]
fn panel_required_coins_defaults_to_seven() {
    let config = parse(
        "(elevators: [(top: (0.0, 8.0, 0.0), bottom: (0.0, 1.0, 0.0), \
         speed: 2.0, size: (3.0, 0.4, 3.0), zones: [], \
         panel: (position: (1.0, 1.0, 0.0)))])",
    );
    let panel = config.elevators[0].panel.as_ref().expect("panel present");
    assert_eq!(panel.required_coins, 7);
}

#[test]
fn lean_defs_map_onto_ladder_angles() {
    assert_eq!(
        LadderLeanDef::TopLeftToBottomRight.angle(),
        LadderAngle::TopLeftToBottomRight
    );
    assert_eq!(
        LadderLeanDef::TopRightToBottomLeft.angle(),
        LadderAngle::TopRightToBottomLeft
    );
}

#[test]
fn facing_defs_map_onto_facings() {
    assert_eq!(FacingDef::Right.facing(), Facing::Right);
    assert_eq!(FacingDef::Left.facing(), Facing::Left);
}

#[test]
fn builtin_level_has_standable_ground() {
    let config = LevelConfig::default();
    assert!(!config.blocks.is_empty());
    assert!(config.start_position[1] > config.fall_kill_y);
    assert_ne!(config.start_position, config.finish_position);
}
