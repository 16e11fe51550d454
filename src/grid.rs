//! The map: a fixed-size grid of tiles with bounds-checked access.

use crate::tile::{Tile, TileType};
use rand::Rng;

pub struct Grid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid filled with floor. Generators overwrite every cell.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(TileType::Floor); width * height],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), or `None` outside the grid. Out-of-range lookups are
    /// a normal outcome, not an error.
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        let idx = self.index(x, y)?;
        Some(&self.tiles[idx])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        let idx = self.index(x, y)?;
        Some(&mut self.tiles[idx])
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile_type: TileType) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = Tile::new(tile_type);
        }
    }

    /// Whether an entity may occupy (x, y). Anything outside the grid is
    /// impassable.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map(|t| t.is_walkable()).unwrap_or(false)
    }

    /// Apply damage to the cell at (x, y), if there is one.
    pub fn hit(&mut self, x: i32, y: i32, damage: f32) {
        if let Some(tile) = self.get_mut(x, y) {
            tile.hit(damage);
        }
    }

    /// In-bounds 4-neighbours of (x, y), optionally restricted to one tile
    /// type.
    pub fn adjacent_cells(
        &self,
        x: i32,
        y: i32,
        tile_type: Option<TileType>,
    ) -> Vec<(i32, i32)> {
        let mut cells = Vec::with_capacity(4);
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (nx, ny) = (x + dx, y + dy);
            if let Some(tile) = self.get(nx, ny) {
                if tile_type.map_or(true, |t| tile.tile_type == t) {
                    cells.push((nx, ny));
                }
            }
        }
        cells
    }

    /// All coordinates holding the given tile type.
    pub fn cells_of_type(&self, tile_type: TileType) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.tiles[y as usize * self.width + x as usize].tile_type == tile_type {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// A uniformly random cell of the given type, used for entity placement.
    pub fn random_cell_of_type(
        &self,
        tile_type: TileType,
        rng: &mut impl Rng,
    ) -> Option<(i32, i32)> {
        let cells = self.cells_of_type(tile_type);
        if cells.is_empty() {
            None
        } else {
            Some(cells[rng.gen_range(0..cells.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_out_of_range_is_none_and_impassable() {
        let grid = Grid::new(4, 3);
        assert!(grid.get(-1, 0).is_none());
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert!(!grid.is_walkable(-1, 0));
        assert!(!grid.is_walkable(0, 3));
    }

    #[test]
    fn test_set_and_get_tile() {
        let mut grid = Grid::new(4, 4);
        grid.set_tile(2, 1, TileType::Wall);
        assert_eq!(grid.get(2, 1).unwrap().tile_type, TileType::Wall);
        assert!(!grid.is_walkable(2, 1));
        assert!(grid.is_walkable(1, 1));
    }

    #[test]
    fn test_adjacent_cells_respects_bounds_and_filter() {
        let mut grid = Grid::new(3, 3);
        grid.set_tile(1, 0, TileType::Wall);
        // Corner cell has only two in-bounds neighbours.
        let all = grid.adjacent_cells(0, 0, None);
        assert_eq!(all.len(), 2);
        let floors = grid.adjacent_cells(0, 0, Some(TileType::Floor));
        assert_eq!(floors, vec![(0, 1)]);
    }

    #[test]
    fn test_random_cell_of_type_matches_type() {
        let mut grid = Grid::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                grid.set_tile(x, y, TileType::Wall);
            }
        }
        grid.set_tile(3, 2, TileType::Floor);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            grid.random_cell_of_type(TileType::Floor, &mut rng),
            Some((3, 2))
        );
        assert_eq!(grid.random_cell_of_type(TileType::Rock, &mut rng), None);
    }

    #[test]
    fn test_hit_forwards_to_tile() {
        let mut grid = Grid::new(3, 3);
        grid.set_tile(1, 1, TileType::Stone);
        grid.hit(1, 1, 1.0);
        assert_eq!(grid.get(1, 1).unwrap().tile_type, TileType::Floor);
        // Hitting outside the grid is a no-op.
        grid.hit(-5, 0, 1.0);
    }
}
