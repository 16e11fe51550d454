//! Movement and bomb constants.

/// Player movement speed, map cells per second.
pub const PLAYER_SPEED: f32 = 10.0;
/// Minimum seconds between two bomb plants.
pub const MIN_BOMB_INTERVAL: f32 = 1.0;
/// Maximum damage in the center of a bomb blast.
pub const BOMB_POWER: f32 = 2.0;
/// Seconds until a planted bomb detonates on its own.
pub const BOMB_FUSE_SECONDS: f32 = 3.0;

/// Random-walk sampling weight for continuing straight ahead.
pub const WALK_WEIGHT_STRAIGHT: u32 = 100;
/// Random-walk sampling weight for turning left or right.
pub const WALK_WEIGHT_TURN: u32 = 30;
/// Random-walk sampling weight for reversing.
pub const WALK_WEIGHT_REVERSE: u32 = 1;
