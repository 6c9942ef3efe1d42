// src/level/factory.rs

use std::collections::HashMap;

use crate::error::{GenerationError, Result};
use crate::map::{Item, ItemKind, Tile, TileRole};

/// Turns a tile-kind name into a fresh, unpositioned tile.
pub trait TileFactory {
    fn create_tile(&self, kind: &str) -> Result<Tile>;
}

/// Turns an item-kind name into an item.
pub trait ItemFactory {
    fn create_item(&self, kind: &str) -> Result<Item>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProfile {
    pub role: TileRole,
    pub occupiable: bool,
}

/// Registry of known tile kinds.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    kinds: HashMap<String, TileProfile>,
}

impl TileCatalog {
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Adds or replaces a kind.
    pub fn register(&mut self, kind: impl Into<String>, role: TileRole, occupiable: bool) {
        self.kinds
            .insert(kind.into(), TileProfile { role, occupiable });
    }

    pub fn with_kind(mut self, kind: impl Into<String>, role: TileRole, occupiable: bool) -> Self {
        self.register(kind, role, occupiable);
        self
    }

    pub fn profile(&self, kind: &str) -> Option<TileProfile> {
        self.kinds.get(kind).copied()
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::empty()
            .with_kind("Grass", TileRole::Traversable, true)
            .with_kind("Sand", TileRole::Traversable, true)
            .with_kind("Water", TileRole::Blockade, false)
            .with_kind("Mountains", TileRole::Blockade, false)
            .with_kind("StartTile", TileRole::Start, false)
            .with_kind("ExitTile", TileRole::Exit, false)
    }
}

impl TileFactory for TileCatalog {
    fn create_tile(&self, kind: &str) -> Result<Tile> {
        let profile = self
            .profile(kind)
            .ok_or_else(|| GenerationError::UnknownTileKind(kind.to_string()))?;
        Ok(Tile::new(kind, profile.role, profile.occupiable))
    }
}

/// Knows the three built-in item kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemCatalog;

impl ItemFactory for ItemCatalog {
    fn create_item(&self, kind: &str) -> Result<Item> {
        ItemKind::ALL
            .into_iter()
            .find(|candidate| candidate.name() == kind)
            .map(|kind| Item { kind })
            .ok_or_else(|| GenerationError::UnknownItemKind(kind.to_string()))
    }
}
