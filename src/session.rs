//! One game session: the entity registry, the map, and the tick loop.
//!
//! A tick runs behaviors, movement, and fuses, then drains the message
//! queue synchronously and finally removes destroyed entities. Entities are
//! never removed mid-iteration; destruction only marks them and the prune
//! pass at the end of the tick despawns them.

use crate::components::{Collectable, Collector, Destroyed, Fuse, Health};
use crate::config::{ConfigError, SessionConfig};
use crate::events::{Message, MessageQueue};
use crate::grid::Grid;
use crate::input::InputState;
use crate::maze_gen::MazeGenerator;
use crate::queries;
use crate::spawning;
use crate::systems;
use crate::tile::TileType;
use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Session {
    config: SessionConfig,
    world: World,
    grid: Grid,
    messages: MessageQueue,
    rng: StdRng,
    player: Entity,
}

impl Session {
    /// Start a session on a freshly generated maze.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a session with an explicit random source, making generation
    /// and behavior reproducible.
    pub fn with_rng(config: SessionConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.map_width, config.map_height);
        MazeGenerator::generate(&mut grid, &mut rng);
        Self::with_map(config, grid, rng)
    }

    /// Start a session on a map the host supplies.
    pub fn with_map(
        config: SessionConfig,
        mut grid: Grid,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();

        // The player starts at the map midpoint, snapped onto an odd maze
        // node: node cells are carved Floor and belong to the connected
        // maze subgraph, so the spawn is never boxed in. The clear keeps
        // host-supplied maps walkable at the spawn too.
        let spawn = ((grid.width as i32 / 2) | 1, (grid.height as i32 / 2) | 1);
        grid.set_tile(spawn.0, spawn.1, TileType::Floor);
        let player = spawning::spawn_player(&mut world, spawn, &config);

        for _ in 0..config.aggressive_monster_count {
            if let Some(cell) = grid.random_cell_of_type(TileType::Floor, &mut rng) {
                spawning::spawn_aggressive_monster(&mut world, cell, player, &config);
            }
        }
        for _ in 0..config.random_walker_count {
            if let Some(cell) = grid.random_cell_of_type(TileType::Floor, &mut rng) {
                spawning::spawn_random_walker(&mut world, cell, &config);
            }
        }
        for _ in 0..config.pursuer_count {
            if let Some(cell) = grid.random_cell_of_type(TileType::Floor, &mut rng) {
                spawning::spawn_pursuer(&mut world, cell, player, &config);
            }
        }
        for _ in 0..config.coin_count {
            if let Some(cell) = grid.random_cell_of_type(TileType::Floor, &mut rng) {
                spawning::spawn_coin(&mut world, cell);
            }
        }

        log::info!(
            "session started: {}x{} map, {} entities",
            grid.width,
            grid.height,
            world.len()
        );

        Ok(Self {
            config,
            world,
            grid,
            messages: MessageQueue::new(),
            rng,
            player,
        })
    }

    /// Advance the simulation by `dt` seconds of game time.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        puffin::profile_function!();

        let bomb_cells = systems::player_input::update(&mut self.world, input, dt);
        systems::ai::update(&mut self.world, &self.grid, &mut self.rng);
        for cell in bomb_cells {
            spawning::spawn_bomb(&mut self.world, cell, &self.config);
        }

        systems::movement::update(&mut self.world, &self.grid, dt, &mut self.messages);
        systems::explosion::update(&mut self.world, &mut self.grid, dt, &mut self.messages);

        self.process_messages();
        self.prune_destroyed();
    }

    /// Drain the queue in order. Each message is fully handled before the
    /// next is popped; handlers may enqueue follow-ups into the same drain.
    fn process_messages(&mut self) {
        while let Some(message) = self.messages.pop() {
            log::trace!("dispatch {:?}", message);
            match message {
                Message::LocationChanged { entity, to, .. } => {
                    if self.world.get::<&Collector>(entity).is_ok() {
                        for target in
                            queries::entities_at(&self.world, to.0, to.1, Some(entity))
                        {
                            self.messages.push(Message::Collect { target, by: entity });
                        }
                    }
                }
                Message::Collect { target, .. } => {
                    if self.world.get::<&Collectable>(target).is_ok() {
                        let _ = self.world.insert_one(target, Destroyed);
                    }
                }
                Message::Damage { target, amount } => {
                    let destroyed = self
                        .world
                        .get::<&mut Health>(target)
                        .map(|mut health| health.apply(amount))
                        .unwrap_or(false);
                    if destroyed {
                        let _ = self.world.insert_one(target, Destroyed);
                    }
                    // A hit bomb goes off on its next update.
                    if let Ok(mut fuse) = self.world.get::<&mut Fuse>(target) {
                        fuse.trigger();
                    }
                }
            }
        }
    }

    fn prune_destroyed(&mut self) {
        let dead: Vec<Entity> = self
            .world
            .query::<&Destroyed>()
            .iter()
            .map(|(id, _)| id)
            .collect();
        for entity in dead {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> Entity {
        self.player
    }
}
