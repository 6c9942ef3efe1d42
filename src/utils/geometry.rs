// src/utils/geometry.rs
use serde::{Deserialize, Serialize};

/// A point or extent in world (pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise scale, used to turn a matrix position into a world position.
    pub fn scaled(&self, factor: Point2D) -> Point2D {
        Point2D::new(self.x * factor.x, self.y * factor.y)
    }
}

/// Axis-aligned rectangle; `position` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect2D {
    pub position: Point2D,
    pub size: Point2D,
}

impl Rect2D {
    pub fn new(position: Point2D, size: Point2D) -> Self {
        Self { position, size }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < self.position.x + self.size.x
            && point.y < self.position.y + self.size.y
    }
}
