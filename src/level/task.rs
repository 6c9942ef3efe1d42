// src/level/task.rs
//! # Generation Tasks
//!
//! Progressive generation is a FIFO queue of [`GenerationTask`] values. Each
//! task is a self-contained record: the coordinates and parameters it acts on
//! are copied into the variant when it is enqueued, so a task created on
//! iteration `(x, y)` of a loop still targets `(x, y)` when it runs many ticks
//! later.
//!
//! Every placement checks that its slot is still empty before writing. That
//! keeps tasks safe to run in any number of ticks, and it is what lets the
//! essential tiles (placed before any task runs) and the barrier ring (queued
//! first) keep their cells even though a terrain task exists for every cell.

use std::collections::VecDeque;
use std::fmt;

use log::trace;

use crate::error::{GenerationError, Result};
use crate::level::factory::{ItemFactory, TileFactory};
use crate::level::host::{HostLoop, HostObject};
use crate::level::player::{ItemInventory, Player, PLAYER_INVENTORY_CAPACITY};
use crate::level::Level;
use crate::map::{GridCoord, ItemKind, Tile, TreasureChest};
use crate::utils::RandomSource;

/// Which pool a terrain task draws its tile kind from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainFill {
    /// A random kind from the traversable pool.
    Traversable,
    /// A random kind from the blockade pool.
    Blockade,
    /// The template's default (first) traversable kind.
    Default,
}

impl TerrainFill {
    /// Maps a draw from `0..=10`: `0` picks a random traversable kind, `1` and
    /// `2` a blockade, anything else the default kind.
    pub fn from_draw(draw: i32) -> TerrainFill {
        match draw {
            0 => TerrainFill::Traversable,
            1 | 2 => TerrainFill::Blockade,
            _ => TerrainFill::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationTask {
    /// Fills the outer ring of the map with the barrier kind.
    PlaceBarriers {
        width: usize,
        height: usize,
        kind: String,
    },
    /// Fills one cell with randomized terrain.
    PlaceTerrain { coord: GridCoord, fill: TerrainFill },
    /// Drops treasure chests on `round(area * percentage)` free occupiable tiles.
    PlaceItems { percentage: f32 },
    /// Creates the player on the given (start) tile.
    SpawnPlayer { coord: GridCoord },
    /// Hands the spawned player `amount` random items when `enabled`.
    GrantStartingItems { enabled: bool, amount: usize },
}

impl fmt::Display for GenerationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationTask::PlaceBarriers {
                width,
                height,
                kind,
            } => write!(f, "place {} barriers around {}x{}", kind, width, height),
            GenerationTask::PlaceTerrain { coord, fill } => {
                write!(f, "place {:?} terrain at {}", fill, coord)
            }
            GenerationTask::PlaceItems { percentage } => {
                write!(f, "place items at density {}", percentage)
            }
            GenerationTask::SpawnPlayer { coord } => write!(f, "spawn player at {}", coord),
            GenerationTask::GrantStartingItems { enabled, amount } => {
                write!(f, "grant {} starting items (enabled: {})", amount, enabled)
            }
        }
    }
}

/// Collaborators a task needs while it runs.
pub struct TaskContext<'a> {
    pub tiles: &'a dyn TileFactory,
    pub items: &'a dyn ItemFactory,
    pub rng: &'a mut dyn RandomSource,
    pub host: &'a mut dyn HostLoop,
}

impl TaskContext<'_> {
    /// Creates a tile of `kind` and places it at `coord` unless something got
    /// there first. Returns whether it was placed.
    fn place_if_empty(&mut self, level: &Level, kind: &str, coord: GridCoord) -> Result<bool> {
        if !level.is_slot_empty(coord) {
            return Ok(false);
        }
        let tile = create_tile(self.tiles, level, kind, coord)?;
        let placed = level.grid().write().place(tile);
        Ok(placed)
    }

    fn random_kind<'k>(&mut self, pool: &'k [String]) -> Option<&'k str> {
        if pool.is_empty() {
            return None;
        }
        pool.get(self.rng.index(pool.len())).map(String::as_str)
    }
}

/// Builds a positioned tile for `level`.
pub(crate) fn create_tile(
    tiles: &dyn TileFactory,
    level: &Level,
    kind: &str,
    coord: GridCoord,
) -> Result<Tile> {
    let mut tile = tiles.create_tile(kind)?;
    tile.place_at(coord, level.tile_size());
    Ok(tile)
}

impl GenerationTask {
    pub fn execute(&self, level: &mut Level, ctx: &mut TaskContext<'_>) -> Result<()> {
        match self {
            GenerationTask::PlaceBarriers {
                width,
                height,
                kind,
            } => {
                let (width, height) = (*width, *height);
                if width == 0 || height == 0 {
                    return Ok(());
                }
                let mut border = Vec::with_capacity(2 * (width + height));
                for y in 0..height {
                    border.push(GridCoord::new(0, y));
                    border.push(GridCoord::new(width - 1, y));
                }
                for x in 1..width - 1 {
                    border.push(GridCoord::new(x, 0));
                    border.push(GridCoord::new(x, height - 1));
                }
                for coord in border {
                    ctx.place_if_empty(level, kind, coord)?;
                }
                Ok(())
            }
            GenerationTask::PlaceTerrain { coord, fill } => {
                if !level.is_slot_empty(*coord) {
                    trace!("{} already filled, skipping terrain", coord);
                    return Ok(());
                }
                let assembly = level.template().tile_assembly.clone();
                let kind = match fill {
                    TerrainFill::Traversable => ctx.random_kind(&assembly.traversable_tiles),
                    TerrainFill::Blockade => ctx.random_kind(&assembly.blockade_tiles),
                    TerrainFill::Default => assembly.default_tile(),
                }
                .ok_or_else(|| {
                    GenerationError::InvalidTemplate(format!("no tile kind for {:?} fill", fill))
                })?;
                ctx.place_if_empty(level, kind, *coord)?;
                Ok(())
            }
            GenerationTask::PlaceItems { percentage } => place_items(level, *percentage, ctx),
            GenerationTask::SpawnPlayer { coord } => {
                let node = level
                    .tile(*coord)
                    .map(|tile| tile.node())
                    .ok_or(GenerationError::MissingTile(*coord))?;
                let position = coord.to_world(level.tile_size());

                let mut player = Player::new(ItemInventory::new(PLAYER_INVENTORY_CAPACITY));
                player.position = position;
                player.occupied_node = node;

                ctx.host.register_object(HostObject::Player { position });
                level.set_active_player(player);
                Ok(())
            }
            GenerationTask::GrantStartingItems { enabled, amount } => {
                if !*enabled {
                    return Ok(());
                }
                level.grant_random_items(*amount, &mut *ctx.rng, ctx.items)
            }
        }
    }
}

fn place_items(level: &mut Level, percentage: f32, ctx: &mut TaskContext<'_>) -> Result<()> {
    let requested = (level.area() as f32 * percentage).round() as usize;
    let tile_size = level.tile_size();

    // Every chest takes exactly one free tile.
    let mut free = level.unoccupied_tiles();
    if free.len() < requested {
        return Err(GenerationError::OutOfCapacity {
            requested,
            available: free.len(),
        });
    }

    // Nothing touches the grid or the host until every chest is built.
    let mut chests = Vec::with_capacity(requested);
    for _ in 0..requested {
        let coord = free.swap_remove(ctx.rng.index(free.len()));
        let kind = ItemKind::from_draw(ctx.rng.next(0, 2));
        let item = ctx.items.create_item(kind.name())?;

        let mut chest = TreasureChest::new(coord.to_world(tile_size));
        chest.hold_item(item);
        chests.push((coord, chest));
    }

    let grid = level.grid();
    let mut grid = grid.write();
    if let Some(&(coord, _)) = chests.iter().find(|(coord, _)| grid.get(*coord).is_none()) {
        return Err(GenerationError::MissingTile(coord));
    }
    for (coord, chest) in chests {
        let position = chest.position;
        if let Some(tile) = grid.get_mut(coord) {
            tile.attach_treasure(chest);
        }
        ctx.host.register_object(HostObject::TreasureChest { position });
    }
    Ok(())
}

/// Append-only FIFO of pending tasks.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<GenerationTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, task: GenerationTask) {
        self.tasks.push_back(task);
    }

    pub fn pop(&mut self) -> Option<GenerationTask> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenerationTask> {
        self.tasks.iter()
    }
}
