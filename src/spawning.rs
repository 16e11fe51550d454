//! Archetype factories.
//!
//! Each function assembles the fixed component set for one kind of entity.
//! Balance numbers come from the session configuration, never from call
//! sites.

use crate::components::{
    Aggressive, Bomb, Coin, Collectable, Collector, Fuse, Health, InputDriven, Monster, Movement,
    Offset, Player, Position, Pursue, RandomWalk, Shape, Sprite, StateTag, StateTags,
};
use crate::config::SessionConfig;
use hecs::{Entity, World};

pub fn spawn_player(world: &mut World, (x, y): (i32, i32), config: &SessionConfig) -> Entity {
    world.spawn((
        Player,
        Position::new(x, y),
        Offset::default(),
        Movement::new(config.player_speed),
        InputDriven::new(config.min_bomb_interval),
        Collector,
        StateTags::default(),
        Sprite::new(Shape::Rectangle, 0.8, [0, 255, 0]),
    ))
}

/// Monster that wanders until the target comes within its attack radius,
/// then chases it along the shortest path.
pub fn spawn_aggressive_monster(
    world: &mut World,
    (x, y): (i32, i32),
    target: Entity,
    config: &SessionConfig,
) -> Entity {
    world.spawn((
        Monster,
        Position::new(x, y),
        Offset::default(),
        Movement::new(config.monster_walk_speed),
        Aggressive::new(
            target,
            config.monster_walk_speed,
            config.monster_attack_speed,
            config.monster_engage_distance,
            config.monster_disengage_distance,
        ),
        Health::new(None),
        StateTags::default(),
        Sprite::new(Shape::Rectangle, 0.8, [255, 128, 0])
            .with_state_color(StateTag::Chasing, [255, 0, 0]),
    ))
}

/// Monster that drifts around the maze with no goal.
pub fn spawn_random_walker(
    world: &mut World,
    (x, y): (i32, i32),
    config: &SessionConfig,
) -> Entity {
    world.spawn((
        Monster,
        Position::new(x, y),
        Offset::default(),
        Movement::new(config.walker_speed),
        RandomWalk::default(),
        Health::new(None),
        StateTags::default(),
        Sprite::new(Shape::Rectangle, 0.8, [255, 0, 255]),
    ))
}

/// Monster that relentlessly follows its target.
pub fn spawn_pursuer(
    world: &mut World,
    (x, y): (i32, i32),
    target: Entity,
    config: &SessionConfig,
) -> Entity {
    world.spawn((
        Monster,
        Position::new(x, y),
        Offset::default(),
        Movement::new(config.pursuer_speed),
        Pursue { target },
        Health::new(None),
        StateTags::default(),
        Sprite::new(Shape::Rectangle, 0.8, [255, 0, 0]),
    ))
}

pub fn spawn_coin(world: &mut World, (x, y): (i32, i32)) -> Entity {
    world.spawn((
        Coin,
        Position::new(x, y),
        Health::new(None),
        Collectable,
        Sprite::new(Shape::Circle, 0.4, [255, 255, 0]),
    ))
}

pub fn spawn_bomb(world: &mut World, (x, y): (i32, i32), config: &SessionConfig) -> Entity {
    world.spawn((
        Bomb,
        Position::new(x, y),
        Fuse::new(config.bomb_power, Some(config.bomb_fuse_seconds)),
        Sprite::new(Shape::Circle, 0.8, [255, 0, 0]),
    ))
}
