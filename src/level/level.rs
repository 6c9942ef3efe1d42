// src/level/level.rs

use std::sync::Arc;

use log::warn;
use parking_lot::RwLock;

use crate::error::{GenerationError, Result};
use crate::level::factory::ItemFactory;
use crate::level::player::Player;
use crate::level::task::{GenerationTask, TaskQueue};
use crate::level::template::LevelTemplate;
use crate::map::{GridCoord, ItemKind, Tile, TileMatrix, TileRole};
use crate::pathfinding::Pathfinding;
use crate::utils::{Point2D, RandomSource};

/// A generated (or still generating) level.
///
/// The level owns the tile matrix. Both pathfinders hold an alias of the same
/// `Arc`, never a copy, so they always see the latest placements. Access is
/// serialised through the `RwLock`; generation itself only ever runs one task
/// at a time.
pub struct Level {
    template: LevelTemplate,
    grid: Arc<RwLock<TileMatrix>>,
    queue: TaskQueue,

    spawn_tile: GridCoord,
    exit_tile: GridCoord,

    /// Tasks processed per drain cycle.
    generating_speed: usize,

    /// Pathfinder reserved for drawing routes.
    pub pathfinding_visualizer: Pathfinding,
    /// Pathfinder used for actual agent movement.
    pub pathfinding_walker: Pathfinding,

    active_player: Option<Player>,
}

impl Level {
    pub(crate) fn new(template: LevelTemplate, generating_speed: usize) -> Self {
        if generating_speed == 0 {
            warn!("Generating speed of 0 would never finish; using 1.");
        }
        let size = template.map_size;
        let grid = Arc::new(RwLock::new(TileMatrix::new(size.width, size.height)));
        Self {
            template,
            pathfinding_visualizer: Pathfinding::new(Arc::clone(&grid)),
            pathfinding_walker: Pathfinding::new(Arc::clone(&grid)),
            grid,
            queue: TaskQueue::new(),
            spawn_tile: GridCoord::default(),
            exit_tile: GridCoord::default(),
            generating_speed: generating_speed.max(1),
            active_player: None,
        }
    }

    pub fn template(&self) -> &LevelTemplate {
        &self.template
    }

    pub fn width(&self) -> usize {
        self.template.width()
    }

    pub fn height(&self) -> usize {
        self.template.height()
    }

    pub fn area(&self) -> usize {
        self.template.map_size.area()
    }

    pub fn tile_size(&self) -> Point2D {
        self.template.tile_size
    }

    /// Shared handle to the tile matrix.
    pub fn grid(&self) -> Arc<RwLock<TileMatrix>> {
        Arc::clone(&self.grid)
    }

    pub fn generating_speed(&self) -> usize {
        self.generating_speed
    }

    /// Matrix position of the start tile.
    pub fn spawn_tile(&self) -> GridCoord {
        self.spawn_tile
    }

    /// Matrix position of the exit tile.
    pub fn exit_tile(&self) -> GridCoord {
        self.exit_tile
    }

    pub(crate) fn set_spawn_tile(&mut self, coord: GridCoord) {
        self.spawn_tile = coord;
    }

    pub(crate) fn set_exit_tile(&mut self, coord: GridCoord) {
        self.exit_tile = coord;
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.active_player.as_ref()
    }

    pub(crate) fn set_active_player(&mut self, player: Player) {
        self.active_player = Some(player);
    }

    // --- Task queue ---

    pub(crate) fn enqueue(&mut self, task: GenerationTask) {
        self.queue.enqueue(task);
    }

    pub(crate) fn next_task(&mut self) -> Option<GenerationTask> {
        self.queue.pop()
    }

    /// Pending tasks in the order they will run.
    pub fn tasks(&self) -> impl Iterator<Item = &GenerationTask> {
        self.queue.iter()
    }

    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// A level counts as generated only once its queue has been drained,
    /// including the tasks generation appended at the end.
    pub fn is_fully_generated(&self) -> bool {
        self.queue.is_empty()
    }

    // --- Grid queries ---

    /// A copy of the tile at `coord`, if one has been placed.
    pub fn tile(&self, coord: GridCoord) -> Option<Tile> {
        self.grid.read().get(coord).cloned()
    }

    pub fn is_slot_empty(&self, coord: GridCoord) -> bool {
        self.grid.read().is_empty(coord)
    }

    pub fn find_empty_tiles(&self) -> Vec<GridCoord> {
        self.grid.read().empty_coords()
    }

    /// Occupiable tiles that do not hold a treasure chest yet.
    pub fn unoccupied_tiles(&self) -> Vec<GridCoord> {
        self.grid
            .read()
            .tiles()
            .filter(|tile| tile.is_unoccupied())
            .map(Tile::matrix_position)
            .collect()
    }

    pub fn treasure_count(&self) -> usize {
        self.grid
            .read()
            .tiles()
            .filter(|tile| tile.treasure().is_some())
            .count()
    }

    /// The tile whose footprint contains `point`, for hover highlighting.
    pub fn tile_at_world(&self, point: Point2D) -> Option<GridCoord> {
        self.grid
            .read()
            .tiles()
            .find(|tile| tile.tile_rect().contains(point))
            .map(Tile::matrix_position)
    }

    /// Gives the active player `amount` items of random kinds. Either all of
    /// them fit in the inventory or none are added.
    pub fn grant_random_items(
        &mut self,
        amount: usize,
        rng: &mut dyn RandomSource,
        items: &dyn ItemFactory,
    ) -> Result<()> {
        let player = self
            .active_player
            .as_mut()
            .ok_or(GenerationError::NoActivePlayer)?;
        let inventory = &mut player.inventory;
        if inventory.items().len() + amount > inventory.capacity() {
            return Err(GenerationError::InventoryFull {
                capacity: inventory.capacity(),
            });
        }

        let bundle = (0..amount)
            .map(|_| items.create_item(ItemKind::from_draw(rng.next(0, 2)).name()))
            .collect::<Result<Vec<_>>>()?;
        for item in bundle {
            inventory.add(item)?;
        }
        Ok(())
    }

    /// One line per row: `#` blockade, `.` traversable, `S` start, `E` exit,
    /// `$` treasure, `@` player, blank for a slot not filled yet.
    pub fn render_ascii(&self) -> String {
        let grid = self.grid.read();
        let player_at = self
            .active_player
            .as_ref()
            .map(|player| player.occupied_node.matrix_position);

        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let coord = GridCoord::new(x, y);
                let glyph = match grid.get(coord) {
                    _ if player_at == Some(coord) => '@',
                    None => ' ',
                    Some(tile) if tile.treasure().is_some() => '$',
                    Some(tile) => match tile.role() {
                        TileRole::Traversable => '.',
                        TileRole::Blockade => '#',
                        TileRole::Start => 'S',
                        TileRole::Exit => 'E',
                    },
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
