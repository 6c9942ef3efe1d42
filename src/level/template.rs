// src/level/template.rs
//! # Level Templates
//!
//! A [`LevelTemplate`] is the immutable description a generator works from:
//! map size, tile pixel size, which tile kinds may appear and how items are
//! spawned. Templates can be written by hand or loaded from JSON; every field
//! left out of the JSON falls back to the built-in 24x24 grass-and-mountains
//! configuration.
//!
//! ```json
//! {
//!   "map_size": { "width": 32, "height": 16 },
//!   "tile_assembly": { "traversable_tiles": ["Grass", "Sand"] },
//!   "item_assembly": { "spawn_frequency": 0.1 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::utils::Point2D;

/// Smallest width that leaves a border plus two distinct interior columns
/// (x = 1 and x = width - 2) for the start and exit tiles.
pub const MIN_WIDTH: usize = 4;
/// Smallest height that leaves a border plus one interior row.
pub const MIN_HEIGHT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub width: usize,
    pub height: usize,
}

impl MapSize {
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// The tile kinds a level may be built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileAssembly {
    /// Walkable kinds. The first entry is the default fill.
    pub traversable_tiles: Vec<String>,
    pub blockade_tiles: Vec<String>,
    /// Kind used for the outer ring of the map.
    pub barrier_tile: String,
}

impl TileAssembly {
    pub fn new(traversable_tiles: Vec<String>, blockade_tiles: Vec<String>) -> Self {
        Self {
            traversable_tiles,
            blockade_tiles,
            ..Self::default()
        }
    }

    /// First traversable kind, used for most of the terrain.
    pub fn default_tile(&self) -> Option<&str> {
        self.traversable_tiles.first().map(String::as_str)
    }
}

impl Default for TileAssembly {
    fn default() -> Self {
        Self {
            traversable_tiles: vec!["Grass".to_string()],
            blockade_tiles: vec!["Mountains".to_string()],
            barrier_tile: "Mountains".to_string(),
        }
    }
}

/// Item spawn policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAssembly {
    /// Fraction of the map area that receives a treasure chest, in `[0, 1]`.
    pub spawn_frequency: f32,
    pub spawn_player_with_items: bool,
    pub player_start_item_amount: usize,
}

impl ItemAssembly {
    pub fn new(
        spawn_frequency: f32,
        spawn_player_with_items: bool,
        player_start_item_amount: usize,
    ) -> Self {
        Self {
            spawn_frequency,
            spawn_player_with_items,
            player_start_item_amount,
        }
    }
}

impl Default for ItemAssembly {
    fn default() -> Self {
        Self::new(0.05, false, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTemplate {
    pub map_size: MapSize,
    pub tile_size: Point2D,
    pub tile_assembly: TileAssembly,
    pub item_assembly: ItemAssembly,
}

impl LevelTemplate {
    /// Builds a template and validates it.
    pub fn new(
        tile_assembly: TileAssembly,
        map_size: MapSize,
        tile_size: Point2D,
        item_assembly: ItemAssembly,
    ) -> Result<Self> {
        let template = Self {
            map_size,
            tile_size,
            tile_assembly,
            item_assembly,
        };
        template.validate()?;
        Ok(template)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let template: LevelTemplate = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn width(&self) -> usize {
        self.map_size.width
    }

    pub fn height(&self) -> usize {
        self.map_size.height
    }

    /// Checks the shape constraints the generator relies on.
    pub fn validate(&self) -> Result<()> {
        let MapSize { width, height } = self.map_size;
        // Below 4 columns the start (x = 1) and exit (x = width - 2) tiles
        // land on the same column and can collide.
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GenerationError::InvalidTemplate(format!(
                "map size {}x{} is below the minimum {}x{}",
                width, height, MIN_WIDTH, MIN_HEIGHT
            )));
        }

        let size = self.tile_size;
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(GenerationError::InvalidTemplate(format!(
                "tile size must be positive, got {}x{}",
                size.x, size.y
            )));
        }

        let tiles = &self.tile_assembly;
        if tiles.traversable_tiles.is_empty() {
            return Err(GenerationError::InvalidTemplate(
                "traversable tile pool is empty".to_string(),
            ));
        }
        if tiles.blockade_tiles.is_empty() {
            return Err(GenerationError::InvalidTemplate(
                "blockade tile pool is empty".to_string(),
            ));
        }
        if tiles.barrier_tile.is_empty() {
            return Err(GenerationError::InvalidTemplate(
                "barrier tile kind is empty".to_string(),
            ));
        }

        let frequency = self.item_assembly.spawn_frequency;
        if !(0.0..=1.0).contains(&frequency) {
            return Err(GenerationError::InvalidTemplate(format!(
                "spawn frequency {} is outside [0, 1]",
                frequency
            )));
        }

        Ok(())
    }
}

impl Default for LevelTemplate {
    fn default() -> Self {
        Self {
            map_size: MapSize {
                width: 24,
                height: 24,
            },
            tile_size: Point2D::new(8.0, 8.0),
            tile_assembly: TileAssembly::default(),
            item_assembly: ItemAssembly::default(),
        }
    }
}
