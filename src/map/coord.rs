// src/map/coord.rs
use std::fmt;

use crate::utils::Point2D;

/// Column/row position of a slot in the tile matrix. Doubles as the tile's
/// logical "matrix position".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
}

impl GridCoord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// World position of this slot's top-left corner for the given tile size.
    pub fn to_world(self, tile_size: Point2D) -> Point2D {
        Point2D::new(self.x as f32, self.y as f32).scaled(tile_size)
    }

    /// Orthogonal neighbours that fall inside a `width` x `height` grid.
    pub fn neighbors(self, width: usize, height: usize) -> impl Iterator<Item = GridCoord> {
        let mut candidates = [None; 4];
        if let Some(y) = self.y.checked_sub(1) {
            candidates[0] = Some(GridCoord::new(self.x, y));
        }
        if self.x + 1 < width {
            candidates[1] = Some(GridCoord::new(self.x + 1, self.y));
        }
        if self.y + 1 < height {
            candidates[2] = Some(GridCoord::new(self.x, self.y + 1));
        }
        if let Some(x) = self.x.checked_sub(1) {
            candidates[3] = Some(GridCoord::new(x, self.y));
        }
        candidates.into_iter().flatten()
    }

    pub fn manhattan(self, other: GridCoord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
