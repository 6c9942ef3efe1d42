// src/map/matrix.rs

use crate::map::{GridCoord, Tile};

/// Fixed-size grid of tile slots, stored row-major.
///
/// A slot starts empty and can be filled once: [`TileMatrix::place`] refuses
/// to overwrite, so whichever placement reaches a slot first keeps it.
#[derive(Debug, Clone, Default)]
pub struct TileMatrix {
    width: usize,
    height: usize,
    slots: Vec<Option<Tile>>,
}

impl TileMatrix {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            slots: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    pub fn get(&self, coord: GridCoord) -> Option<&Tile> {
        self.index(coord).and_then(|i| self.slots[i].as_ref())
    }

    pub fn get_mut(&mut self, coord: GridCoord) -> Option<&mut Tile> {
        match self.index(coord) {
            Some(i) => self.slots[i].as_mut(),
            None => None,
        }
    }

    /// True for an in-bounds slot nothing has been placed in yet.
    pub fn is_empty(&self, coord: GridCoord) -> bool {
        self.index(coord).is_some_and(|i| self.slots[i].is_none())
    }

    /// Stores `tile` at its own matrix position if that slot is still empty.
    /// Returns whether the tile was placed.
    pub fn place(&mut self, tile: Tile) -> bool {
        let Some(i) = self.index(tile.matrix_position()) else {
            return false;
        };
        if self.slots[i].is_some() {
            return false;
        }
        self.slots[i] = Some(tile);
        true
    }

    /// Placed tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().flatten()
    }

    pub fn empty_coords(&self) -> Vec<GridCoord> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| GridCoord::new(i % self.width, i / self.width))
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
