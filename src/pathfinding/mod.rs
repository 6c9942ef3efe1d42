// src/pathfinding/mod.rs
mod pathfinding;

pub use self::pathfinding::Pathfinding;
