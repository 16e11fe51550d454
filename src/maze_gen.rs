//! Procedural map generators.
//!
//! `MazeGenerator` carves a recursive-backtracker maze with rooms and extra
//! shortcut holes; `ScatterGenerator` is a trivial uniform generator for
//! quick open maps. Both fill every cell of a pre-allocated grid and are
//! deterministic for a given rng.

use crate::constants::*;
use crate::grid::Grid;
use crate::tile::TileType;
use rand::Rng;

/// A room footprint in maze-node units (half map resolution).
#[derive(Clone, Copy, Debug)]
struct Room {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

pub struct MazeGenerator;

impl MazeGenerator {
    /// Fill the grid with a maze. The caller must have validated the grid
    /// size (see `SessionConfig::validate`); behaviour below a 3x3 interior
    /// is undefined.
    pub fn generate(grid: &mut Grid, rng: &mut impl Rng) {
        // The maze is generated on a node grid about half the map size.
        // Node (x, y) sits at map cell (2x + 1, 2y + 1); even rows and
        // columns become the walls between nodes.
        let width = grid.width as i32;
        let height = grid.height as i32;
        let w = (width - 1) / 2;
        let h = (height - 1) / 2;

        // Start pattern: indestructible border, stone interior, open nodes.
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
                grid.set_tile(x, y, if border { TileType::Wall } else { TileType::Stone });
            }
        }
        for ny in 0..h {
            for nx in 0..w {
                grid.set_tile(2 * nx + 1, 2 * ny + 1, TileType::Floor);
            }
        }

        let node = |x: i32, y: i32| (y * w + x) as usize;
        let mut unvisited = vec![true; (w * h) as usize];

        // Reserve room footprints so the backtracker walks around them.
        let rooms = Self::place_rooms(w, h, &mut unvisited, rng);

        // Random start node outside any room.
        let start = loop {
            let x = rng.gen_range(0..w);
            let y = rng.gen_range(0..h);
            if unvisited[node(x, y)] {
                break (x, y);
            }
        };
        unvisited[node(start.0, start.1)] = false;
        let mut stack = vec![start];

        // Depth-first carve: connect the current node to a random unvisited
        // neighbour; drop nodes from the stack once they run out of
        // unvisited neighbours. The result is a spanning tree over all
        // non-room nodes.
        while let Some(&(cx, cy)) = stack.last() {
            let mut neighbours: Vec<(i32, i32)> = Vec::with_capacity(4);
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (nx, ny) = (cx + dx, cy + dy);
                if nx >= 0 && ny >= 0 && nx < w && ny < h && unvisited[node(nx, ny)] {
                    neighbours.push((nx, ny));
                }
            }

            if !neighbours.is_empty() {
                let (nx, ny) = neighbours[rng.gen_range(0..neighbours.len())];
                unvisited[node(nx, ny)] = false;
                // The wall cell between two adjacent nodes is their midpoint.
                grid.set_tile(cx + nx + 1, cy + ny + 1, TileType::Floor);
                stack.push((nx, ny));
            }

            if neighbours.len() <= 1 {
                if let Some(pos) = stack.iter().rposition(|&c| c == (cx, cy)) {
                    stack.remove(pos);
                }
            }
        }

        // Punch random holes through maze walls. This introduces cycles so
        // the maze does not funnel everything down a single path.
        for _ in 0..(w * h / 2) {
            let (x, y) = if rng.gen_bool(0.5) {
                (2 * rng.gen_range(1..=w - 1), 2 * rng.gen_range(1..=h) - 1)
            } else {
                (2 * rng.gen_range(1..=w) - 1, 2 * rng.gen_range(1..=h - 1))
            };
            grid.set_tile(x, y, TileType::Floor);
        }

        Self::draw_rooms(grid, &rooms, rng);

        log::debug!(
            "generated {}x{} maze: {} floor cells, {} rooms",
            width,
            height,
            grid.cells_of_type(TileType::Floor).len(),
            rooms.len()
        );
    }

    /// Reserve up to `ROOM_COUNT` room footprints in the node grid. Rooms
    /// are skipped entirely on maps too small to hold a door margin.
    fn place_rooms(
        w: i32,
        h: i32,
        unvisited: &mut [bool],
        rng: &mut impl Rng,
    ) -> Vec<Room> {
        let room_w = w / 3;
        let room_h = h / 3;
        let min_side = 2 * ROOM_DOOR_MARGIN + 1;
        if room_w < min_side || room_h < min_side {
            return Vec::new();
        }

        let mut rooms = Vec::with_capacity(ROOM_COUNT);
        for _ in 0..ROOM_COUNT {
            let x = rng.gen_range(ROOM_BORDER_MARGIN..=w - room_w - ROOM_BORDER_MARGIN);
            let y = rng.gen_range(ROOM_BORDER_MARGIN..=h - room_h - ROOM_BORDER_MARGIN);
            for ny in y..y + room_h {
                for nx in x..x + room_w {
                    unvisited[(ny * w + nx) as usize] = false;
                }
            }
            rooms.push(Room {
                x,
                y,
                width: room_w,
                height: room_h,
            });
        }
        rooms
    }

    /// Draw reserved rooms onto the map: a destructible stone shell, an
    /// open interior, and one door per side.
    fn draw_rooms(grid: &mut Grid, rooms: &[Room], rng: &mut impl Rng) {
        for room in rooms {
            let (x0, y0) = (2 * room.x, 2 * room.y);
            let (x1, y1) = (2 * (room.x + room.width), 2 * (room.y + room.height));

            for y in y0..=y1 {
                for x in x0..=x1 {
                    grid.set_tile(x, y, TileType::Stone);
                }
            }
            for y in y0 + 1..y1 {
                for x in x0 + 1..x1 {
                    grid.set_tile(x, y, TileType::Floor);
                }
            }

            let d = ROOM_DOOR_MARGIN;
            let door_xs = room.x + d..=room.x + room.width - 1 - d;
            let door_ys = room.y + d..=room.y + room.height - 1 - d;
            let doors = [
                (2 * rng.gen_range(door_xs.clone()) + 1, y0),
                (2 * rng.gen_range(door_xs) + 1, y1),
                (x0, 2 * rng.gen_range(door_ys.clone()) + 1),
                (x1, 2 * rng.gen_range(door_ys) + 1),
            ];
            for (x, y) in doors {
                grid.set_tile(x, y, TileType::Floor);
            }
        }
    }
}

pub struct ScatterGenerator;

impl ScatterGenerator {
    /// Fill the grid with uniformly scattered rubble on open floor. Most
    /// rubble is soft stone; a fraction is dense rock.
    pub fn generate(grid: &mut Grid, rng: &mut impl Rng) {
        for y in 0..grid.height as i32 {
            for x in 0..grid.width as i32 {
                let tile_type = if rng.gen_bool(SCATTER_STONE_CHANCE) {
                    if rng.gen_bool(SCATTER_ROCK_CHANCE) {
                        TileType::Rock
                    } else {
                        TileType::Stone
                    }
                } else {
                    TileType::Floor
                };
                grid.set_tile(x, y, tile_type);
            }
        }
    }
}
