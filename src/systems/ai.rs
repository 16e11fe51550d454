//! Autonomous movement behaviors: random walk, pursuit, and the
//! aggressive composite.
//!
//! Behaviors only issue a fresh direction while their entity is stationary;
//! while it travels they request nothing, so the movement system brings it
//! to rest at the next cell center and the behavior decides again.

use crate::components::{Aggressive, Movement, Position, Pursue, RandomWalk, StateTag, StateTags};
use crate::constants::*;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::pathfinding;
use crate::queries;
use hecs::World;
use rand::Rng;

/// Run every AI behavior for one tick.
pub fn update(world: &mut World, grid: &Grid, rng: &mut impl Rng) {
    puffin::profile_function!();

    // Target positions are read up front so the mutable behavior passes
    // never reach into another entity mid-update.
    let positions = queries::position_snapshot(world);

    for (_id, (walk, mov, pos)) in
        world.query_mut::<(&mut RandomWalk, &mut Movement, &Position)>()
    {
        if mov.is_stationary() {
            let dir = wander_direction(grid, pos, walk.last_direction, rng);
            walk.last_direction = dir;
            mov.request(dir);
        } else {
            mov.request(None);
        }
    }

    for (_id, (pursue, mov, pos)) in
        world.query_mut::<(&Pursue, &mut Movement, &Position)>()
    {
        if mov.is_stationary() {
            let dir = positions
                .get(&pursue.target)
                .and_then(|&goal| pathfinding::next_step(grid, pos.coord(), goal));
            mov.request(dir);
        } else {
            mov.request(None);
        }
    }

    for (_id, (agg, mov, pos, tags)) in world.query_mut::<(
        &mut Aggressive,
        &mut Movement,
        &Position,
        &mut StateTags,
    )>() {
        let target = positions.get(&agg.target).copied();

        if let Some(goal) = target {
            let dx = (pos.x - goal.0) as f32;
            let dy = (pos.y - goal.1) as f32;
            let distance = (dx * dx + dy * dy).sqrt();

            // Hysteresis band: engage below the attack radius, give up only
            // beyond the wider walk radius.
            if !agg.pursuing && distance <= agg.engage_distance {
                agg.pursuing = true;
                mov.speed = agg.attack_speed;
                tags.set(StateTag::Chasing, true);
            } else if agg.pursuing && distance >= agg.disengage_distance {
                agg.pursuing = false;
                mov.speed = agg.walk_speed;
                tags.set(StateTag::Chasing, false);
            }
        } else if agg.pursuing {
            // Target is gone; drop back to wandering.
            agg.pursuing = false;
            mov.speed = agg.walk_speed;
            tags.set(StateTag::Chasing, false);
        }

        if !mov.is_stationary() {
            mov.request(None);
            continue;
        }

        let dir = match (agg.pursuing, target) {
            (true, Some(goal)) => pathfinding::next_step(grid, pos.coord(), goal),
            _ => {
                let dir = wander_direction(grid, pos, agg.last_direction, rng);
                agg.last_direction = dir;
                dir
            }
        };
        mov.request(dir);
    }
}

/// Weighted choice among the passable neighbour directions. Continuing
/// straight is strongly preferred and reversing strongly discouraged, which
/// produces long runs instead of jitter. No passable neighbour means no
/// move.
fn wander_direction(
    grid: &Grid,
    pos: &Position,
    last: Option<Direction>,
    rng: &mut impl Rng,
) -> Option<Direction> {
    let mut candidates: Vec<(u32, Direction)> = Vec::with_capacity(4);
    for dir in Direction::ALL {
        let next = pos.step(dir);
        if !grid.is_walkable(next.x, next.y) {
            continue;
        }
        let weight = match last {
            Some(last) if dir == last => WALK_WEIGHT_STRAIGHT,
            Some(last) if dir == last.opposite() => WALK_WEIGHT_REVERSE,
            _ => WALK_WEIGHT_TURN,
        };
        candidates.push((weight, dir));
    }

    if candidates.is_empty() {
        return None;
    }
    let total: u32 = candidates.iter().map(|(weight, _)| weight).sum();
    let mut roll = rng.gen_range(0..total);
    for (weight, dir) in candidates {
        if roll < weight {
            return Some(dir);
        }
        roll -= weight;
    }
    unreachable!("roll exceeded total weight");
}
