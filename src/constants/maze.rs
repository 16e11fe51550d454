//! Maze generation constants.

/// Smallest accepted map side. Anything below this cannot hold a 3x3
/// interior inside the border walls.
pub const MIN_MAP_SIZE: usize = 5;
/// Default map width in cells.
pub const DEFAULT_MAP_WIDTH: usize = 32;
/// Default map height in cells.
pub const DEFAULT_MAP_HEIGHT: usize = 24;
/// Rooms carved into the maze.
pub const ROOM_COUNT: usize = 1;
/// Minimum distance (in maze nodes) between a room and the map border.
pub const ROOM_BORDER_MARGIN: i32 = 1;
/// Doors keep this many maze nodes away from room corners.
pub const ROOM_DOOR_MARGIN: i32 = 1;
/// Chance that the scatter generator turns a cell into rubble.
pub const SCATTER_STONE_CHANCE: f64 = 0.25;
/// Fraction of scattered rubble that is dense rock instead of stone.
pub const SCATTER_ROCK_CHANCE: f64 = 0.25;
