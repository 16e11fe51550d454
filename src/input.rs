//! Abstract per-tick input intent.
//!
//! The core never talks to an input device; the host samples its keyboard
//! (or replay, or script) into an `InputState` once per tick.

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub plant_bomb: bool,
}

impl InputState {
    /// Resolve held keys into a single movement intent. A held key counts
    /// only while its opposite is released, so opposite pairs cancel out.
    pub fn movement_intent(&self) -> Option<Direction> {
        let candidates = [
            (self.left, self.right, Direction::Left),
            (self.right, self.left, Direction::Right),
            (self.up, self.down, Direction::Up),
            (self.down, self.up, Direction::Down),
        ];
        for (key, opposite, dir) in candidates {
            if key && !opposite {
                return Some(dir);
            }
        }
        None
    }
}
