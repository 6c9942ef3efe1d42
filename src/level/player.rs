// src/level/player.rs

use crate::error::{GenerationError, Result};
use crate::map::{Item, Node};
use crate::utils::Point2D;

/// Capacity of the inventory a freshly spawned player carries.
pub const PLAYER_INVENTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemInventory {
    capacity: usize,
    items: Vec<Item>,
}

impl ItemInventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(GenerationError::InventoryFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The player actor as far as generation is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub inventory: ItemInventory,
    pub position: Point2D,
    /// The grid node the player stands on.
    pub occupied_node: Node,
}

impl Player {
    pub fn new(inventory: ItemInventory) -> Self {
        Self {
            inventory,
            position: Point2D::default(),
            occupied_node: Node::default(),
        }
    }
}
