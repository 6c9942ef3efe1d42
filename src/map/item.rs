// src/map/item.rs
use std::fmt;

use crate::utils::Point2D;

/// The item kinds that can turn up in treasure chests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Ring,
    Armor,
    Weapon,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Ring, ItemKind::Armor, ItemKind::Weapon];

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Ring => "Ring",
            ItemKind::Armor => "Armor",
            ItemKind::Weapon => "Weapon",
        }
    }

    /// Maps a draw from `0..=2` to a kind. Anything else falls back to a ring.
    pub fn from_draw(draw: i32) -> ItemKind {
        match draw {
            0 => ItemKind::Ring,
            1 => ItemKind::Armor,
            2 => ItemKind::Weapon,
            _ => ItemKind::Ring,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
}

/// Container attached to a tile; holds at most one item.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasureChest {
    pub position: Point2D,
    pub item: Option<Item>,
}

impl TreasureChest {
    pub fn new(position: Point2D) -> Self {
        Self {
            position,
            item: None,
        }
    }

    pub fn hold_item(&mut self, item: Item) {
        self.item = Some(item);
    }
}
