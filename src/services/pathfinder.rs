//! Breadth-first shortest-path search
//!
//! Used by the level generator to prove a candidate board is solvable, and
//! by the stats display to report the optimal path length.

use std::collections::{HashMap, VecDeque};

use crate::models::grid::Grid;
use crate::models::position::{Direction, Position};

/// Shortest path from `start` to `target` over walkable cells of the grid,
/// moving in the four cardinal directions.
///
/// Returns the path including both endpoints, or `None` when the target is
/// unreachable. BFS on an unweighted grid, so the result is minimal in step
/// count; neighbors are expanded in [`Direction::ALL`] order, which makes
/// the returned path deterministic for a given board. O(size^2) time and
/// space.
pub fn shortest_path(start: Position, target: Position, grid: &Grid) -> Option<Vec<Position>> {
    if !grid.is_walkable(start) {
        return None;
    }
    if start == target {
        return Some(vec![start]);
    }

    let mut queue = VecDeque::new();
    // Maps each discovered cell to its predecessor; doubles as the visited set.
    let mut came_from: HashMap<Position, Position> = HashMap::new();

    queue.push_back(start);
    came_from.insert(start, start);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let next = current.step(direction);
            if !grid.is_walkable(next) || came_from.contains_key(&next) {
                continue;
            }
            came_from.insert(next, current);
            if next == target {
                return Some(reconstruct(start, target, &came_from));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct(
    start: Position,
    target: Position,
    came_from: &HashMap<Position, Position>,
) -> Vec<Position> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}
