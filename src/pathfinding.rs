//! Shortest-path pursuit search over walkable cells.

use crate::direction::Direction;
use crate::grid::Grid;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Copy, PartialEq, Eq)]
struct ScoredCell {
    coord: (i32, i32),
    /// g + h: path cost so far plus Manhattan distance to the goal.
    f_score: i32,
}

// BinaryHeap is a max-heap, so the ordering is reversed for min-heap
// behavior.
impl Ord for ScoredCell {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_score.cmp(&self.f_score)
    }
}

impl PartialOrd for ScoredCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path from `start` to `goal` over walkable cells.
/// Returns the cells to visit in order, excluding `start`, or `None` when
/// the goal is unreachable. No path is a normal outcome, not an error.
pub fn find_path(
    grid: &Grid,
    start: (i32, i32),
    goal: (i32, i32),
) -> Option<Vec<(i32, i32)>> {
    puffin::profile_function!();

    if !grid.is_walkable(goal.0, goal.1) {
        return None;
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<(i32, i32), (i32, i32)> = HashMap::new();
    let mut g_score: HashMap<(i32, i32), i32> = HashMap::new();

    g_score.insert(start, 0);
    open_set.push(ScoredCell {
        coord: start,
        f_score: manhattan(start, goal),
    });

    while let Some(current) = open_set.pop() {
        if current.coord == goal {
            return Some(reconstruct_path(&came_from, current.coord));
        }

        let current_g = *g_score.get(&current.coord).unwrap_or(&i32::MAX);

        for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
            let neighbour = (current.coord.0 + dx, current.coord.1 + dy);
            if !grid.is_walkable(neighbour.0, neighbour.1) {
                continue;
            }

            let tentative_g = current_g + 1;
            if tentative_g < *g_score.get(&neighbour).unwrap_or(&i32::MAX) {
                came_from.insert(neighbour, current.coord);
                g_score.insert(neighbour, tentative_g);
                open_set.push(ScoredCell {
                    coord: neighbour,
                    f_score: tentative_g + manhattan(neighbour, goal),
                });
            }
        }
    }

    None
}

/// Direction of the first step on a shortest path toward `goal`, or `None`
/// when already there or no path exists.
pub fn next_step(grid: &Grid, start: (i32, i32), goal: (i32, i32)) -> Option<Direction> {
    if start == goal {
        return None;
    }
    let path = find_path(grid, start, goal)?;
    let (nx, ny) = *path.first()?;
    Direction::from_offset(nx - start.0, ny - start.1)
}

fn manhattan(from: (i32, i32), to: (i32, i32)) -> i32 {
    (from.0 - to.0).abs() + (from.1 - to.1).abs()
}

fn reconstruct_path(
    came_from: &HashMap<(i32, i32), (i32, i32)>,
    mut current: (i32, i32),
) -> Vec<(i32, i32)> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    // Drop the start cell itself.
    path.remove(0);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;

    /// Build a grid from rows of '#' (wall) and '.' (floor).
    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let tile_type = if c == '#' {
                    TileType::Wall
                } else {
                    TileType::Floor
                };
                grid.set_tile(x as i32, y as i32, tile_type);
            }
        }
        grid
    }

    #[test]
    fn test_straight_corridor_path_length() {
        let grid = grid_from(&["#####", "#...#", "#####"]);
        let path = find_path(&grid, (1, 1), (3, 1)).unwrap();
        assert_eq!(path, vec![(2, 1), (3, 1)]);
    }

    #[test]
    fn test_no_path_through_walls() {
        let grid = grid_from(&["#####", "#.#.#", "#####"]);
        assert!(find_path(&grid, (1, 1), (3, 1)).is_none());
        assert!(next_step(&grid, (1, 1), (3, 1)).is_none());
    }

    #[test]
    fn test_next_step_follows_unique_path() {
        let grid = grid_from(&[
            "#####",
            "#...#",
            "##.##",
            "#...#",
            "#####",
        ]);
        // Unique shortest path from (1,1) to (1,3) goes right, down, left.
        assert_eq!(next_step(&grid, (1, 1), (1, 3)), Some(Direction::Right));
        assert_eq!(next_step(&grid, (2, 1), (1, 3)), Some(Direction::Down));
        assert_eq!(next_step(&grid, (2, 3), (1, 3)), Some(Direction::Left));
    }

    #[test]
    fn test_already_at_goal() {
        let grid = grid_from(&["###", "#.#", "###"]);
        assert_eq!(next_step(&grid, (1, 1), (1, 1)), None);
    }

    #[test]
    fn test_unwalkable_goal_has_no_path() {
        let grid = grid_from(&["####", "#..#", "####"]);
        assert!(find_path(&grid, (1, 1), (3, 1)).is_none());
    }

    #[test]
    fn test_path_length_matches_manhattan_on_open_grid() {
        let grid = grid_from(&["......", "......", "......", "......"]);
        let path = find_path(&grid, (0, 0), (5, 3)).unwrap();
        assert_eq!(path.len(), 8);
    }
}
