// src/lib.rs
//! # Tile Forge
//!
//! Procedural generation of single tile-grid levels: a barrier ring, one start
//! and one exit tile, randomized terrain, optional treasure chests and an
//! optional player spawn.
//!
//! Generation is progressive. [`LevelGenerator::generate`] places the start and
//! exit tiles immediately and queues everything else as deferred tasks; the
//! host drains the queue a bounded number of tasks per tick so generation can
//! be animated or throttled.
//!
//! ```no_run
//! use tile_forge::{LevelGenerator, LevelTemplate};
//!
//! let mut generator = LevelGenerator::with_seed(42);
//! let mut level = generator
//!     .generate(&LevelTemplate::default(), 32, true, true)
//!     .unwrap();
//! while !level.is_fully_generated() {
//!     generator.tick(&mut level).unwrap();
//! }
//! println!("{}", level.render_ascii());
//! ```

pub mod error;
pub mod level;
pub mod map;
pub mod pathfinding;
pub mod utils;

pub use error::{GenerationError, TaskError};
pub use level::{Level, LevelGenerator, LevelTemplate};
