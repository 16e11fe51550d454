//! Common read-only world query helpers.

use std::collections::HashMap;

use hecs::{Entity, World};

use crate::components::Position;

/// All entities whose committed cell is (x, y), optionally excluding one
/// (usually the entity doing the scanning).
pub fn entities_at(world: &World, x: i32, y: i32, exclude: Option<Entity>) -> Vec<Entity> {
    world
        .query::<&Position>()
        .iter()
        .filter(|(id, pos)| {
            pos.x == x && pos.y == y && exclude.map_or(true, |ex| *id != ex)
        })
        .map(|(id, _)| id)
        .collect()
}

/// Snapshot of every positioned entity, taken before a mutable pass so
/// behaviors can look up their targets without re-borrowing the world.
pub fn position_snapshot(world: &World) -> HashMap<Entity, (i32, i32)> {
    world
        .query::<&Position>()
        .iter()
        .map(|(id, pos)| (id, (pos.x, pos.y)))
        .collect()
}
