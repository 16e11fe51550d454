//! Monster and pickup defaults.

/// Aggressive monster speed while wandering, cells per second.
pub const MONSTER_WALK_SPEED: f32 = 3.0;
/// Aggressive monster speed while chasing, cells per second.
pub const MONSTER_ATTACK_SPEED: f32 = 5.0;
/// Distance at which an aggressive monster starts chasing.
pub const MONSTER_ENGAGE_DISTANCE: f32 = 10.0;
/// Distance at which a chasing monster gives up. Kept wider than the
/// engage distance so the mode cannot flap at a single threshold.
pub const MONSTER_DISENGAGE_DISTANCE: f32 = 15.0;
/// Random-walker monster speed, cells per second.
pub const WALKER_SPEED: f32 = 3.0;
/// Pursuit monster speed, cells per second.
pub const PURSUER_SPEED: f32 = 3.0;

/// Coins placed at session start.
pub const COIN_COUNT: usize = 10;
/// Aggressive monsters placed at session start.
pub const AGGRESSIVE_MONSTER_COUNT: usize = 2;
/// Random-walker monsters placed at session start.
pub const RANDOM_WALKER_COUNT: usize = 2;
/// Pursuit monsters placed at session start.
pub const PURSUER_COUNT: usize = 1;
