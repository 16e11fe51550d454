//! Sub-cell movement and collision resolution.
//!
//! A moving entity is anchored to a committed discrete cell (`Position`)
//! with a fractional remainder (`Offset`); the exact position is the sum of
//! the two. The committed cell is rounded toward the movement target, so it
//! flips to the next cell the moment the entity leaves a cell center, and
//! entry is validated at that same moment. The committed cell is therefore
//! always a walkable cell.
//!
//! Direction changes only take effect at cell centers, except for 180
//! degree reversals, which are honored immediately: the vacated cell is
//! always safe to re-enter.

use crate::components::{Movement, Offset, Position, StateTag, StateTags};
use crate::events::{Message, MessageQueue};
use crate::grid::Grid;
use hecs::World;

/// Advance every moving entity by `dt` seconds.
pub fn update(world: &mut World, grid: &Grid, dt: f32, messages: &mut MessageQueue) {
    puffin::profile_function!();

    for (entity, (mov, pos, off, tags)) in
        world.query_mut::<(&mut Movement, &mut Position, &mut Offset, &mut StateTags)>()
    {
        // The collision flag only describes the tick it happened in.
        tags.set(StateTag::Colliding, false);

        match mov.direction {
            None => {
                // At rest: adopt this tick's request, if any.
                mov.direction = mov.pending;
            }
            Some(dir) => {
                if mov.pending == Some(dir.opposite()) {
                    // Instant turnaround. Mid-cell, the rounded cell swaps
                    // back to the cell being vacated.
                    let axis = dir.axis();
                    let o = off.axis(axis);
                    if o != 0.0 {
                        let from = pos.coord();
                        *pos = pos.step(dir.opposite());
                        off.set_axis(axis, o + dir.sign());
                        messages.push(Message::LocationChanged {
                            entity,
                            from,
                            to: pos.coord(),
                        });
                    }
                    mov.direction = Some(dir.opposite());
                }
            }
        }

        let Some(mut dir) = mov.direction else {
            tags.set(StateTag::Moving, false);
            continue;
        };

        let mut remaining = mov.speed * dt;
        loop {
            let axis = dir.axis();
            let sign = dir.sign();
            let o = off.axis(axis);

            if o * sign < 0.0 {
                // Travelling toward the center of the committed cell.
                let to_center = -o * sign;
                if remaining < to_center {
                    off.set_axis(axis, o + sign * remaining);
                    break;
                }
                remaining -= to_center;
                off.set_axis(axis, 0.0);
            }

            // At a cell center: the decision point. Any request other than
            // the current direction takes over here, never mid-cell.
            if mov.pending != Some(dir) {
                mov.direction = mov.pending;
                match mov.direction {
                    Some(next) => {
                        dir = next;
                        continue;
                    }
                    None => break,
                }
            }

            if remaining <= 0.0 {
                break;
            }

            // Departing the cell center: validate and commit the next cell.
            let target = pos.step(dir);
            if !grid.is_walkable(target.x, target.y) {
                off.set_axis(axis, 0.0);
                mov.direction = None;
                mov.pending = None;
                tags.set(StateTag::Colliding, true);
                break;
            }
            let from = pos.coord();
            *pos = target;
            off.set_axis(axis, off.axis(axis) - sign);
            messages.push(Message::LocationChanged {
                entity,
                from,
                to: pos.coord(),
            });
        }

        tags.set(StateTag::Moving, mov.direction.is_some());
    }
}
