// src/pathfinding/pathfinding.rs

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;

use crate::map::{GridCoord, Node, TileMatrix};

/// Route finder over a shared tile matrix.
///
/// Holds an alias of the level's grid rather than a copy, so every search sees
/// whatever has been placed so far. Results are only meaningful once
/// generation has finished.
pub struct Pathfinding {
    grid: Arc<RwLock<TileMatrix>>,
    path: Vec<Node>,
}

impl Pathfinding {
    pub fn new(grid: Arc<RwLock<TileMatrix>>) -> Self {
        Self {
            grid,
            path: Vec::new(),
        }
    }

    /// The most recently computed path (empty if none was found).
    pub fn path(&self) -> &[Node] {
        &self.path
    }

    /// True if both handles point at the same grid.
    pub fn shares_grid(&self, grid: &Arc<RwLock<TileMatrix>>) -> bool {
        Arc::ptr_eq(&self.grid, grid)
    }

    /// A* search with a Manhattan heuristic over orthogonal neighbours.
    ///
    /// Walkable means "slot filled and not a blockade". The result includes
    /// both endpoints and is also kept in [`Pathfinding::path`].
    pub fn find_path(&mut self, from: GridCoord, to: GridCoord) -> &[Node] {
        self.path.clear();
        let grid = self.grid.read();

        let walkable = |coord: GridCoord| {
            grid.get(coord)
                .is_some_and(|tile| tile.role().is_walkable())
        };
        if !walkable(from) || !walkable(to) {
            trace!("no path {} -> {}: endpoint not walkable", from, to);
            return &self.path;
        }

        let (width, height) = (grid.width(), grid.height());
        let mut open = BinaryHeap::new();
        let mut g_score: HashMap<GridCoord, usize> = HashMap::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();

        g_score.insert(from, 0);
        open.push(Reverse((from.manhattan(to), from)));

        while let Some(Reverse((_, current))) = open.pop() {
            if current == to {
                let mut route = vec![current];
                let mut cursor = current;
                while let Some(&previous) = came_from.get(&cursor) {
                    route.push(previous);
                    cursor = previous;
                }
                route.reverse();
                self.path = route
                    .into_iter()
                    .filter_map(|coord| grid.get(coord).map(|tile| tile.node()))
                    .collect();
                break;
            }

            let current_g = g_score.get(&current).copied().unwrap_or(usize::MAX);
            for neighbor in current.neighbors(width, height) {
                if !walkable(neighbor) {
                    continue;
                }
                let tentative = current_g + 1;
                if g_score.get(&neighbor).is_some_and(|&known| known <= tentative) {
                    continue;
                }
                g_score.insert(neighbor, tentative);
                came_from.insert(neighbor, current);
                open.push(Reverse((tentative + neighbor.manhattan(to), neighbor)));
            }
        }

        trace!("path {} -> {}: {} nodes", from, to, self.path.len());
        &self.path
    }
}
