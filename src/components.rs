//! Component types attached to entities.
//!
//! An entity carries at most one component of each type; systems probe for
//! optional capabilities with `world.get`, where a missing component is a
//! normal absent result rather than an error.

use crate::direction::{Axis, Direction};
use glam::Vec2;
use hecs::Entity;

/// Discrete cell coordinate of an entity. For moving entities this is the
/// committed (rounded-toward-target) cell and is always a walkable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn coord(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(&self, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Sub-cell remainder of a moving entity; its exact position is
/// `position + offset`. At most one axis is ever non-zero and its magnitude
/// stays below one cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offset(pub Vec2);

impl Offset {
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.0.x,
            Axis::Y => self.0.y,
        }
    }

    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.0.x = value,
            Axis::Y => self.0.y = value,
        }
    }
}

/// Movement state of an entity that can travel between cells.
///
/// `direction` is the committed movement; `pending` is this tick's requested
/// direction, rewritten by a behavior every tick and read by the movement
/// system at cell centers.
#[derive(Debug, Clone, Copy)]
pub struct Movement {
    /// Speed in map cells per second.
    pub speed: f32,
    pub direction: Option<Direction>,
    pub pending: Option<Direction>,
}

impl Movement {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: None,
            pending: None,
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.direction.is_none()
    }

    /// Request a direction for this tick.
    pub fn request(&mut self, dir: Option<Direction>) {
        self.pending = dir;
    }
}

/// Semantic state flags used for presentation and behavior branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateTag {
    Moving,
    Colliding,
    Chasing,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StateTags {
    moving: bool,
    colliding: bool,
    chasing: bool,
}

impl StateTags {
    pub fn has(&self, tag: StateTag) -> bool {
        match tag {
            StateTag::Moving => self.moving,
            StateTag::Colliding => self.colliding,
            StateTag::Chasing => self.chasing,
        }
    }

    pub fn set(&mut self, tag: StateTag, value: bool) {
        match tag {
            StateTag::Moving => self.moving = value,
            StateTag::Colliding => self.colliding = value,
            StateTag::Chasing => self.chasing = value,
        }
    }
}

/// RGB color passed through the draw contract; the presentation layer owns
/// the actual pixel format.
pub type Color = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Circle,
}

/// Visual description of an entity for the draw contract.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub shape: Shape,
    /// Size relative to one cell (1.0 fills the cell).
    pub size: f32,
    pub color: Color,
    /// Color overrides checked in order; the first tag the entity carries
    /// wins.
    pub state_colors: Vec<(StateTag, Color)>,
}

impl Sprite {
    pub fn new(shape: Shape, size: f32, color: Color) -> Self {
        Self {
            shape,
            size,
            color,
            state_colors: Vec::new(),
        }
    }

    pub fn with_state_color(mut self, tag: StateTag, color: Color) -> Self {
        self.state_colors.push((tag, color));
        self
    }

    pub fn color_for(&self, tags: Option<&StateTags>) -> Color {
        if let Some(tags) = tags {
            for (tag, color) in &self.state_colors {
                if tags.has(*tag) {
                    return *color;
                }
            }
        }
        self.color
    }
}

/// Behavior: movement driven by external input intent, with bomb planting.
#[derive(Debug, Clone, Copy)]
pub struct InputDriven {
    /// Minimum seconds between two bomb plants.
    pub min_bomb_interval: f32,
    pub since_last_bomb: f32,
}

impl InputDriven {
    pub fn new(min_bomb_interval: f32) -> Self {
        Self {
            min_bomb_interval,
            // Allow planting immediately after spawn.
            since_last_bomb: min_bomb_interval,
        }
    }
}

/// Behavior: weighted random walk that prefers long straight runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalk {
    pub last_direction: Option<Direction>,
}

/// Behavior: shortest-path pursuit of a target entity.
#[derive(Debug, Clone, Copy)]
pub struct Pursue {
    pub target: Entity,
}

/// Behavior: wander until the target comes close, then chase it.
///
/// The engage distance is smaller than the disengage distance, giving the
/// mode switch a hysteresis band.
#[derive(Debug, Clone, Copy)]
pub struct Aggressive {
    pub target: Entity,
    pub walk_speed: f32,
    pub attack_speed: f32,
    pub engage_distance: f32,
    pub disengage_distance: f32,
    pub pursuing: bool,
    pub last_direction: Option<Direction>,
}

impl Aggressive {
    pub fn new(
        target: Entity,
        walk_speed: f32,
        attack_speed: f32,
        engage_distance: f32,
        disengage_distance: f32,
    ) -> Self {
        Self {
            target,
            walk_speed,
            attack_speed,
            engage_distance,
            disengage_distance,
            pursuing: false,
            last_direction: None,
        }
    }
}

/// Destructible entity. `points: None` means the entity survives until the
/// first hit and is destroyed by it outright.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub points: Option<f32>,
}

impl Health {
    pub fn new(points: Option<f32>) -> Self {
        Self { points }
    }

    /// Apply damage; returns true when the entity should be destroyed.
    pub fn apply(&mut self, damage: f32) -> bool {
        match self.points.as_mut() {
            Some(points) => {
                *points -= damage;
                *points <= 0.0
            }
            None => true,
        }
    }
}

/// Countdown bomb charge.
#[derive(Debug, Clone, Copy)]
pub struct Fuse {
    /// Maximum damage at the center of the blast.
    pub power: f32,
    /// Seconds until detonation; `None` never detonates on its own.
    pub remaining: Option<f32>,
}

impl Fuse {
    pub fn new(power: f32, remaining: Option<f32>) -> Self {
        Self { power, remaining }
    }

    /// Force detonation on the next explosion update.
    pub fn trigger(&mut self) {
        self.remaining = Some(0.0);
    }
}

/// Single-use pickup; destroyed when collected.
#[derive(Debug, Clone, Copy)]
pub struct Collectable;

/// Picks up collectables on the cells it enters.
#[derive(Debug, Clone, Copy)]
pub struct Collector;

/// Marks an entity for removal at the end of the current tick.
#[derive(Debug, Clone, Copy)]
pub struct Destroyed;

// Archetype markers, used to group the registry by category.
#[derive(Debug, Clone, Copy)]
pub struct Player;
#[derive(Debug, Clone, Copy)]
pub struct Monster;
#[derive(Debug, Clone, Copy)]
pub struct Coin;
#[derive(Debug, Clone, Copy)]
pub struct Bomb;
