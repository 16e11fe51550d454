//! Map cell types, passability, and destructibility.

/// Kind of terrain occupying one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Open ground, the only walkable terrain.
    Floor,
    /// Indestructible border/structure wall.
    Wall,
    /// Soft rubble, destroyed by a single point of damage.
    Stone,
    /// Dense rubble, needs cumulative damage to clear.
    Rock,
}

impl TileType {
    pub fn is_walkable(self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Starting health for destructible terrain. `None` means the tile
    /// cannot be damaged at all.
    pub fn max_health(self) -> Option<f32> {
        match self {
            TileType::Floor | TileType::Wall => None,
            TileType::Stone => Some(1.0),
            TileType::Rock => Some(3.0),
        }
    }
}

/// One cell of the map grid.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub tile_type: TileType,
    health: f32,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            health: tile_type.max_health().unwrap_or(0.0),
        }
    }

    pub fn is_walkable(&self) -> bool {
        self.tile_type.is_walkable()
    }

    /// Apply damage to the tile. Destructible terrain that drops to zero
    /// health becomes walkable floor; indestructible terrain ignores the hit.
    pub fn hit(&mut self, damage: f32) {
        if self.tile_type.max_health().is_none() {
            return;
        }
        self.health -= damage;
        if self.health <= 0.0 {
            *self = Tile::new(TileType::Floor);
        }
    }

    /// Remaining health as a fraction of the starting health, for
    /// presentation (damaged terrain is drawn darker). Undamageable tiles
    /// report 1.0.
    pub fn health_fraction(&self) -> f32 {
        match self.tile_type.max_health() {
            Some(max) => (self.health / max).clamp(0.0, 1.0),
            None => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_floor_is_walkable() {
        assert!(TileType::Floor.is_walkable());
        assert!(!TileType::Wall.is_walkable());
        assert!(!TileType::Stone.is_walkable());
        assert!(!TileType::Rock.is_walkable());
    }

    #[test]
    fn test_stone_destroyed_by_single_hit() {
        let mut tile = Tile::new(TileType::Stone);
        tile.hit(1.0);
        assert_eq!(tile.tile_type, TileType::Floor);
        assert!(tile.is_walkable());
    }

    #[test]
    fn test_rock_needs_cumulative_damage() {
        let mut tile = Tile::new(TileType::Rock);
        tile.hit(1.0);
        assert_eq!(tile.tile_type, TileType::Rock);
        tile.hit(1.0);
        assert_eq!(tile.tile_type, TileType::Rock);
        tile.hit(1.5);
        assert_eq!(tile.tile_type, TileType::Floor);
    }

    #[test]
    fn test_wall_ignores_damage() {
        let mut tile = Tile::new(TileType::Wall);
        tile.hit(1000.0);
        assert_eq!(tile.tile_type, TileType::Wall);
    }

    #[test]
    fn test_health_fraction_tracks_damage() {
        let mut tile = Tile::new(TileType::Rock);
        assert_eq!(tile.health_fraction(), 1.0);
        tile.hit(1.5);
        assert_eq!(tile.health_fraction(), 0.5);
        assert_eq!(Tile::new(TileType::Wall).health_fraction(), 1.0);
    }

    #[test]
    fn test_zero_damage_hit_is_harmless() {
        let mut tile = Tile::new(TileType::Stone);
        tile.hit(0.0);
        assert_eq!(tile.tile_type, TileType::Stone);
        assert_eq!(tile.health_fraction(), 1.0);
    }
}
