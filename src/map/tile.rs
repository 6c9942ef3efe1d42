// src/map/tile.rs

use serde::{Deserialize, Serialize};

use crate::map::{GridCoord, TreasureChest};
use crate::utils::{Point2D, Rect2D};

/// What a tile does for movement and level flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileRole {
    /// Walkable terrain.
    Traversable,
    /// Terrain that cannot be walked on or occupied by an actor.
    Blockade,
    /// Where the player spawns.
    Start,
    /// Where the level is left.
    Exit,
}

impl TileRole {
    pub fn is_walkable(&self) -> bool {
        !matches!(self, TileRole::Blockade)
    }
}

/// The pathfinding-facing half of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Node {
    pub matrix_position: GridCoord,
    pub world_position: Point2D,
}

/// A placed unit of terrain.
///
/// A tile is built by a tile factory with only its kind, role and occupiable
/// flag set, then positioned exactly once with [`Tile::place_at`]. After that the
/// only mutation allowed is attaching a treasure chest.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Catalog name of the tile kind (e.g. "Grass").
    kind: String,

    role: TileRole,

    /// Whether an item container may be dropped on this tile. Independent of
    /// the role.
    occupiable: bool,

    node: Node,

    /// Visual footprint of the tile itself.
    tile_rect: Rect2D,

    /// Footprint used by hosts to draw hover highlights. Same extents as
    /// `tile_rect`.
    highlight_rect: Rect2D,

    treasure: Option<TreasureChest>,
}

impl Tile {
    pub fn new(kind: impl Into<String>, role: TileRole, occupiable: bool) -> Self {
        Self {
            kind: kind.into(),
            role,
            occupiable,
            node: Node::default(),
            tile_rect: Rect2D::default(),
            highlight_rect: Rect2D::default(),
            treasure: None,
        }
    }

    /// Positions the tile at `coord`, keeping the world position equal to the
    /// matrix position scaled by `tile_size`.
    pub fn place_at(&mut self, coord: GridCoord, tile_size: Point2D) {
        let world = coord.to_world(tile_size);
        self.node = Node {
            matrix_position: coord,
            world_position: world,
        };
        self.tile_rect = Rect2D::new(world, tile_size);
        self.highlight_rect = Rect2D::new(world, tile_size);
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn role(&self) -> TileRole {
        self.role
    }

    pub fn is_occupiable(&self) -> bool {
        self.occupiable
    }

    pub fn node(&self) -> Node {
        self.node
    }

    pub fn matrix_position(&self) -> GridCoord {
        self.node.matrix_position
    }

    pub fn world_position(&self) -> Point2D {
        self.node.world_position
    }

    pub fn tile_rect(&self) -> Rect2D {
        self.tile_rect
    }

    pub fn highlight_rect(&self) -> Rect2D {
        self.highlight_rect
    }

    pub fn treasure(&self) -> Option<&TreasureChest> {
        self.treasure.as_ref()
    }

    /// Occupiable and not yet holding a chest.
    pub fn is_unoccupied(&self) -> bool {
        self.occupiable && self.treasure.is_none()
    }

    pub fn attach_treasure(&mut self, chest: TreasureChest) {
        self.treasure = Some(chest);
    }
}
