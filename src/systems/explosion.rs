//! Fuse countdown and blast resolution.

use crate::components::{Destroyed, Fuse, Position};
use crate::events::{Message, MessageQueue};
use crate::grid::Grid;
use crate::queries;
use hecs::{Entity, World};

/// Blast radius implied by a charge's power.
pub fn blast_radius(power: f32) -> f32 {
    (8.0 * power).sqrt()
}

/// Damage dealt at `distance` from the blast center: full power at the
/// center, falling off quadratically to zero at the radius.
pub fn damage_at(power: f32, distance: f32) -> f32 {
    let radius = blast_radius(power);
    if distance > radius {
        return 0.0;
    }
    power * (1.0 - (distance / radius) * (distance / radius))
}

/// Tick every fuse down and resolve the blasts that go off.
pub fn update(world: &mut World, grid: &mut Grid, dt: f32, messages: &mut MessageQueue) {
    let mut blasts: Vec<(Entity, (i32, i32), f32)> = Vec::new();

    for (id, (fuse, pos)) in world.query_mut::<(&mut Fuse, &Position)>() {
        let Some(remaining) = fuse.remaining.as_mut() else {
            continue;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            blasts.push((id, pos.coord(), fuse.power));
            fuse.remaining = None;
        }
    }

    for (entity, center, power) in blasts {
        detonate(world, grid, center, power, messages);
        let _ = world.insert_one(entity, Destroyed);
    }
}

/// Damage the map and every entity within the blast radius of `center`.
/// Entity damage is delivered as messages so health, chained fuses, and any
/// other reactive component handle it uniformly.
fn detonate(
    world: &World,
    grid: &mut Grid,
    center: (i32, i32),
    power: f32,
    messages: &mut MessageQueue,
) {
    let radius = blast_radius(power);
    let reach = radius.ceil() as i32;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let distance = ((dx * dx + dy * dy) as f32).sqrt();
            if distance > radius {
                continue;
            }
            let damage = damage_at(power, distance);
            let (x, y) = (center.0 + dx, center.1 + dy);
            grid.hit(x, y, damage);
            if damage > 0.0 {
                for target in queries::entities_at(world, x, y, None) {
                    messages.push(Message::Damage {
                        target,
                        amount: damage,
                    });
                }
            }
        }
    }

    log::debug!(
        "explosion at {:?}: power {}, radius {:.2}",
        center,
        power,
        radius
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Health;
    use crate::tile::TileType;

    #[test]
    fn test_falloff_is_full_at_center_and_zero_at_radius() {
        let power = 2.0;
        let radius = blast_radius(power);
        assert_eq!(damage_at(power, 0.0), power);
        assert_eq!(damage_at(power, radius), 0.0);
        assert_eq!(damage_at(power, radius + 1.0), 0.0);
    }

    #[test]
    fn test_falloff_is_monotonically_non_increasing() {
        let power = 2.0;
        let mut previous = damage_at(power, 0.0);
        let mut distance = 0.0;
        while distance < blast_radius(power) + 1.0 {
            let damage = damage_at(power, distance);
            assert!(damage <= previous);
            previous = damage;
            distance += 0.1;
        }
    }

    #[test]
    fn test_blast_damages_map_cells_by_distance() {
        // power 2.0 gives radius 4: stone at distance 1 takes more than
        // enough damage, stone at distance 4 takes none.
        let mut grid = Grid::new(11, 11);
        grid.set_tile(6, 5, TileType::Stone);
        grid.set_tile(9, 5, TileType::Stone);
        let mut world = World::new();
        let bomb = world.spawn((Position::new(5, 5), Fuse::new(2.0, Some(0.0))));
        let mut messages = MessageQueue::new();

        update(&mut world, &mut grid, 0.1, &mut messages);

        assert_eq!(grid.get(6, 5).unwrap().tile_type, TileType::Floor);
        assert_eq!(grid.get(9, 5).unwrap().tile_type, TileType::Stone);
        assert_eq!(grid.get(9, 5).unwrap().health_fraction(), 1.0);
        assert!(world.get::<&Destroyed>(bomb).is_ok());
    }

    #[test]
    fn test_blast_queues_damage_for_occupants() {
        let mut grid = Grid::new(11, 11);
        let mut world = World::new();
        let victim = world.spawn((Position::new(5, 5), Health::new(Some(1.0))));
        let bystander = world.spawn((Position::new(9, 5), Health::new(Some(1.0))));
        world.spawn((Position::new(5, 5), Fuse::new(2.0, Some(0.5))));
        let mut messages = MessageQueue::new();

        // Fuse still burning: nothing happens.
        update(&mut world, &mut grid, 0.25, &mut messages);
        assert!(messages.is_empty());

        update(&mut world, &mut grid, 0.3, &mut messages);
        let mut victim_hits = 0;
        let mut bystander_hits = 0;
        while let Some(message) = messages.pop() {
            if let Message::Damage { target, amount } = message {
                assert!(amount > 0.0);
                if target == victim {
                    victim_hits += 1;
                    assert_eq!(amount, 2.0);
                }
                if target == bystander {
                    bystander_hits += 1;
                }
            }
        }
        // Distance 4 sits exactly on the radius where damage is zero.
        assert_eq!(victim_hits, 1);
        assert_eq!(bystander_hits, 0);
    }

    #[test]
    fn test_untriggered_fuse_never_detonates() {
        let mut grid = Grid::new(7, 7);
        let mut world = World::new();
        let bomb = world.spawn((Position::new(3, 3), Fuse::new(2.0, None)));
        let mut messages = MessageQueue::new();

        for _ in 0..100 {
            update(&mut world, &mut grid, 1.0, &mut messages);
        }
        assert!(world.get::<&Destroyed>(bomb).is_err());
        assert!(messages.is_empty());
    }
}
