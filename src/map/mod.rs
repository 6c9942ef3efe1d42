// src/map/mod.rs
pub mod coord;
pub mod item;
pub mod matrix;
pub mod tile;

pub use coord::GridCoord;
pub use item::{Item, ItemKind, TreasureChest};
pub use matrix::TileMatrix;
pub use tile::{Node, Tile, TileRole};
