//! Manual-input behavior: movement intent and bomb planting.

use crate::components::{InputDriven, Movement, Position};
use crate::input::InputState;
use hecs::World;

/// Feed this tick's input intent to every input-driven entity. Returns the
/// cells where bombs were planted; the session spawns them afterwards.
pub fn update(world: &mut World, input: &InputState, dt: f32) -> Vec<(i32, i32)> {
    let mut bomb_cells = Vec::new();

    for (_id, (driver, mov, pos)) in
        world.query_mut::<(&mut InputDriven, &mut Movement, &Position)>()
    {
        mov.request(input.movement_intent());

        driver.since_last_bomb += dt;
        if input.plant_bomb && driver.since_last_bomb >= driver.min_bomb_interval {
            bomb_cells.push(pos.coord());
            driver.since_last_bomb = 0.0;
        }
    }

    bomb_cells
}
