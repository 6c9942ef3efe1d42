// src/level/mod.rs
pub mod factory;
pub mod generator;
pub mod host;
mod level;
pub mod player;
pub mod task;
pub mod template;

pub use self::level::Level;
pub use factory::{ItemCatalog, ItemFactory, TileCatalog, TileFactory};
pub use generator::{LevelGenerator, EXIT_TILE, START_TILE};
pub use host::{HostLoop, HostObject, RecordingHost};
pub use player::{ItemInventory, Player};
pub use task::{GenerationTask, TaskQueue, TerrainFill};
pub use template::{ItemAssembly, LevelTemplate, MapSize, TileAssembly};
