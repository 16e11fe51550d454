//! Core simulation for a tile-based arcade game: a procedurally carved
//! maze, a player-driven entity, autonomous monsters, and interactive
//! objects (coins, bombs).
//!
//! The crate is presentation-free. A host samples its input device into an
//! [`InputState`], calls [`Session::tick`] once per frame, and draws
//! through the [`render::Canvas`] contract.

pub mod components;
pub mod config;
pub mod constants;
pub mod direction;
pub mod events;
pub mod grid;
pub mod input;
pub mod maze_gen;
pub mod pathfinding;
pub mod queries;
pub mod render;
pub mod session;
pub mod spawning;
pub mod systems;
pub mod tile;

pub use config::{ConfigError, SessionConfig};
pub use direction::{Axis, Direction};
pub use events::{Message, MessageQueue};
pub use grid::Grid;
pub use input::InputState;
pub use session::Session;
pub use tile::{Tile, TileType};
