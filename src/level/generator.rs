// src/level/generator.rs

use log::{debug, info, trace, warn};

use crate::error::{GenerationError, Result, TaskError};
use crate::level::factory::{ItemCatalog, ItemFactory, TileCatalog, TileFactory};
use crate::level::host::{HostLoop, RecordingHost};
use crate::level::task::{create_tile, GenerationTask, TaskContext, TerrainFill};
use crate::level::template::LevelTemplate;
use crate::level::Level;
use crate::map::{GridCoord, Node};
use crate::pathfinding::Pathfinding;
use crate::utils::{RandomSource, SeededRandom};

pub const START_TILE: &str = "StartTile";
pub const EXIT_TILE: &str = "ExitTile";

/// Builds levels from templates and drains their task queues.
///
/// `generate` does the cheap synchronous part and queues the rest; the host
/// then calls [`LevelGenerator::tick`] (or [`LevelGenerator::drain`]) once per
/// frame until the level reports it is fully generated.
pub struct LevelGenerator {
    tiles: Box<dyn TileFactory>,
    items: Box<dyn ItemFactory>,
    rng: Box<dyn RandomSource>,
    host: Box<dyn HostLoop>,
}

impl LevelGenerator {
    /// A generator with the built-in catalogs and an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_random(Box::new(SeededRandom::from_os_rng()))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_random(Box::new(SeededRandom::from_seed(seed)))
    }

    pub fn with_random(rng: Box<dyn RandomSource>) -> Self {
        Self {
            tiles: Box::new(TileCatalog::default()),
            items: Box::new(ItemCatalog),
            rng,
            host: Box::new(RecordingHost::new()),
        }
    }

    pub fn tile_factory(mut self, tiles: Box<dyn TileFactory>) -> Self {
        self.tiles = tiles;
        self
    }

    pub fn item_factory(mut self, items: Box<dyn ItemFactory>) -> Self {
        self.items = items;
        self
    }

    pub fn host(mut self, host: Box<dyn HostLoop>) -> Self {
        self.host = host;
        self
    }

    /// Starts generating a level.
    ///
    /// Order matters: the barrier task is queued first, the start and exit
    /// tiles are placed right away, then one terrain task per cell is queued
    /// in row-major order, followed by the item, spawn and starting-item
    /// tasks. The returned level is not finished until its queue is drained.
    pub fn generate(
        &mut self,
        template: &LevelTemplate,
        generating_speed: usize,
        allow_items: bool,
        allow_player: bool,
    ) -> Result<Level> {
        template.validate()?;
        info!(
            "Generating {}x{} level (speed {}, items: {}, player: {})",
            template.width(),
            template.height(),
            generating_speed,
            allow_items,
            allow_player
        );

        let mut level = Level::new(template.clone(), generating_speed);

        self.place_map_barriers(&mut level);
        self.place_essential_tiles(&mut level)?;
        self.generate_random_tiles(&mut level);

        if allow_items {
            self.place_items(&mut level, template.item_assembly.spawn_frequency);
        }
        if allow_player {
            let spawn = level.spawn_tile();
            self.spawn_player(&mut level, spawn);
        }

        let assembly = &template.item_assembly;
        level.enqueue(GenerationTask::GrantStartingItems {
            enabled: assembly.spawn_player_with_items && allow_player,
            amount: assembly.player_start_item_amount,
        });

        debug!("Queued {} generation tasks", level.pending_tasks());
        Ok(level)
    }

    fn place_map_barriers(&mut self, level: &mut Level) {
        level.enqueue(GenerationTask::PlaceBarriers {
            width: level.width(),
            height: level.height(),
            kind: level.template().tile_assembly.barrier_tile.clone(),
        });
    }

    /// Puts the start and exit tiles on the two interior columns, in random
    /// order. Runs before any queued task, so these cells are never contested.
    fn place_essential_tiles(&mut self, level: &mut Level) -> Result<()> {
        let mut names = [START_TILE, EXIT_TILE];
        if self.rng.next(0, 1) == 1 {
            names.swap(0, 1);
        }

        let left = GridCoord::new(1, self.random_row(level.height()));
        let right = GridCoord::new(level.width() - 2, self.random_row(level.height()));

        for (name, coord) in names.into_iter().zip([left, right]) {
            let tile = create_tile(self.tiles.as_ref(), level, name, coord)?;
            if !level.grid().write().place(tile) {
                return Err(GenerationError::InvalidTemplate(format!(
                    "{} at {} collides with an existing tile",
                    name, coord
                )));
            }
            if name == START_TILE {
                level.set_spawn_tile(coord);
            } else {
                level.set_exit_tile(coord);
            }
        }

        debug!(
            "Start tile at {}, exit tile at {}",
            level.spawn_tile(),
            level.exit_tile()
        );
        Ok(())
    }

    /// A row in `1..=height - 2`.
    fn random_row(&mut self, height: usize) -> usize {
        let hi = i32::try_from(height.saturating_sub(2)).unwrap_or(i32::MAX);
        usize::try_from(self.rng.next(1, hi)).unwrap_or(1)
    }

    fn generate_random_tiles(&mut self, level: &mut Level) {
        for y in 0..level.height() {
            for x in 0..level.width() {
                let fill = TerrainFill::from_draw(self.rng.next(0, 10));
                level.enqueue(GenerationTask::PlaceTerrain {
                    coord: GridCoord::new(x, y),
                    fill,
                });
            }
        }
    }

    pub fn place_items(&mut self, level: &mut Level, percentage: f32) {
        level.enqueue(GenerationTask::PlaceItems { percentage });
    }

    pub fn spawn_player(&mut self, level: &mut Level, coord: GridCoord) {
        level.enqueue(GenerationTask::SpawnPlayer { coord });
    }

    /// Runs up to `max_tasks` queued tasks and returns how many remain.
    ///
    /// A failing task has already been taken off the queue when its error is
    /// returned; nothing it would have placed is placed. The rest of the
    /// queue is untouched, so the next call carries on with the following task.
    pub fn drain(
        &mut self,
        level: &mut Level,
        max_tasks: usize,
    ) -> std::result::Result<usize, TaskError> {
        let mut ctx = TaskContext {
            tiles: self.tiles.as_ref(),
            items: self.items.as_ref(),
            rng: self.rng.as_mut(),
            host: self.host.as_mut(),
        };

        for _ in 0..max_tasks {
            let Some(task) = level.next_task() else {
                break;
            };
            trace!("Running task: {}", task);
            if let Err(source) = task.execute(level, &mut ctx) {
                warn!("Generation task `{}` failed: {}", task, source);
                return Err(TaskError {
                    task: task.to_string(),
                    source,
                });
            }
        }

        if level.is_fully_generated() {
            debug!("Level generation complete");
        }
        Ok(level.pending_tasks())
    }

    /// One drain cycle at the level's own generating speed.
    pub fn tick(&mut self, level: &mut Level) -> std::result::Result<usize, TaskError> {
        let speed = level.generating_speed();
        self.drain(level, speed)
    }

    /// Drains the whole queue, stopping at the first failing task.
    pub fn finish(&mut self, level: &mut Level) -> std::result::Result<(), TaskError> {
        while !level.is_fully_generated() {
            self.drain(level, usize::MAX)?;
        }
        Ok(())
    }

    /// `count` random points with both coordinates in `2..=size - 2`.
    pub fn generate_path_points(
        &mut self,
        count: usize,
        template: &LevelTemplate,
    ) -> Vec<GridCoord> {
        let max_x = i32::try_from(template.width().saturating_sub(2)).unwrap_or(i32::MAX);
        let max_y = i32::try_from(template.height().saturating_sub(2)).unwrap_or(i32::MAX);
        (0..count)
            .map(|_| {
                let x = self.rng.next(2, max_x);
                let y = self.rng.next(2, max_y);
                GridCoord::new(usize::try_from(x).unwrap_or(2), usize::try_from(y).unwrap_or(2))
            })
            .collect()
    }

    /// Path from the spawn tile to the first of `points`.
    ///
    /// Only the first segment is traced; the remaining points are not
    /// stitched on.
    pub fn create_path(&self, level: &Level, points: &[GridCoord]) -> Result<Vec<Node>> {
        let Some(&first) = points.first() else {
            return Ok(Vec::new());
        };
        if !level.is_fully_generated() {
            warn!("Tracing a path on a level that is still generating");
        }
        if level.tile(level.spawn_tile()).is_none() {
            return Err(GenerationError::MissingTile(level.spawn_tile()));
        }

        let mut pathfinder = Pathfinding::new(level.grid());
        Ok(pathfinder.find_path(level.spawn_tile(), first).to_vec())
    }
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::player::PLAYER_INVENTORY_CAPACITY;
    use crate::level::template::{ItemAssembly, MapSize, TileAssembly};
    use crate::map::{Tile, TileRole};
    use crate::utils::random::ScriptedRandom;
    use crate::utils::Point2D;

    fn template(width: usize, height: usize) -> LevelTemplate {
        LevelTemplate {
            map_size: MapSize { width, height },
            ..LevelTemplate::default()
        }
    }

    fn tiles_with_role(level: &Level, role: TileRole) -> Vec<Tile> {
        level
            .grid()
            .read()
            .tiles()
            .filter(|tile| tile.role() == role)
            .cloned()
            .collect()
    }

    fn is_border(level: &Level, coord: GridCoord) -> bool {
        coord.x == 0 || coord.y == 0 || coord.x == level.width() - 1 || coord.y == level.height() - 1
    }

    #[test]
    fn test_full_scenario_24x24() {
        let host = RecordingHost::new();
        let mut generator = LevelGenerator::with_seed(2024).host(Box::new(host.clone()));
        let template = LevelTemplate::default();

        let mut level = generator.generate(&template, 9999, true, true).unwrap();
        assert!(!level.is_fully_generated());

        let remaining = generator.tick(&mut level).unwrap();
        assert_eq!(remaining, 0);
        assert!(level.is_fully_generated());

        let grid = level.grid();
        let grid = grid.read();
        assert_eq!(grid.filled_count(), 576);
        assert!(grid.is_full());

        for tile in grid.tiles() {
            if is_border(&level, tile.matrix_position()) {
                assert_eq!(tile.kind(), "Mountains", "border at {}", tile.matrix_position());
            }
        }
        drop(grid);

        let starts = tiles_with_role(&level, TileRole::Start);
        let exits = tiles_with_role(&level, TileRole::Exit);
        assert_eq!(starts.len(), 1);
        assert_eq!(exits.len(), 1);
        let mut columns = [starts[0].matrix_position().x, exits[0].matrix_position().x];
        columns.sort_unstable();
        assert_eq!(columns, [1, 22]);
        assert_eq!(starts[0].matrix_position(), level.spawn_tile());
        assert_eq!(exits[0].matrix_position(), level.exit_tile());

        assert_eq!(level.treasure_count(), 29);
        assert_eq!(host.chest_count(), 29);
        for tile in level.grid().read().tiles() {
            if tile.treasure().is_some() {
                assert!(tile.is_occupiable());
                assert!(tile.treasure().unwrap().item.is_some());
            }
        }

        let player = level.active_player().expect("player spawned");
        assert_eq!(player.occupied_node, starts[0].node());
        assert_eq!(player.position, starts[0].world_position());
        assert_eq!(player.inventory.capacity(), PLAYER_INVENTORY_CAPACITY);
        assert!(player.inventory.items().is_empty());
        assert_eq!(host.player_count(), 1);
    }

    #[test]
    fn test_rate_one_needs_one_call_per_task() {
        let mut generator = LevelGenerator::with_seed(5);
        let mut level = generator
            .generate(&LevelTemplate::default(), 1, true, true)
            .unwrap();

        // barriers + 576 terrain + items + spawn + starting items
        let total = level.pending_tasks();
        assert_eq!(total, 1 + 576 + 3);

        for _ in 0..100 {
            generator.tick(&mut level).unwrap();
        }
        assert!(!level.find_empty_tiles().is_empty());
        assert!(!level.is_fully_generated());

        let mut calls = 100;
        while generator.tick(&mut level).unwrap() > 0 {
            calls += 1;
        }
        calls += 1;
        assert_eq!(calls, total);
        assert!(level.find_empty_tiles().is_empty());
    }

    #[test]
    fn test_tasks_capture_loop_coordinates() {
        let mut generator = LevelGenerator::with_seed(11);
        let mut level = generator
            .generate(&template(6, 5), 1, false, false)
            .unwrap();

        let coords: Vec<GridCoord> = level
            .tasks()
            .filter_map(|task| match task {
                GenerationTask::PlaceTerrain { coord, .. } => Some(*coord),
                _ => None,
            })
            .collect();
        let expected: Vec<GridCoord> = (0..5)
            .flat_map(|y| (0..6).map(move |x| GridCoord::new(x, y)))
            .collect();
        assert_eq!(coords, expected);

        generator.finish(&mut level).unwrap();
        for coord in expected {
            let tile = level.tile(coord).expect("slot filled");
            assert_eq!(tile.matrix_position(), coord);
            assert_eq!(tile.world_position(), coord.to_world(level.tile_size()));
        }
    }

    #[test]
    fn test_barrier_wins_over_terrain() {
        // Essentials: order draw, two rows. Then every cell draws 1 (blockade).
        let mut draws = vec![0, 1, 1];
        draws.extend(std::iter::repeat(1).take(16));
        let assembly = TileAssembly {
            traversable_tiles: vec!["Grass".to_string()],
            blockade_tiles: vec!["Water".to_string()],
            barrier_tile: "Mountains".to_string(),
        };
        let template = LevelTemplate {
            map_size: MapSize { width: 4, height: 4 },
            tile_assembly: assembly,
            ..LevelTemplate::default()
        };

        let mut generator = LevelGenerator::with_random(Box::new(ScriptedRandom::new(draws)));
        let mut level = generator.generate(&template, 1000, false, false).unwrap();
        generator.finish(&mut level).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let coord = GridCoord::new(x, y);
                let tile = level.tile(coord).unwrap();
                if is_border(&level, coord) {
                    assert_eq!(tile.kind(), "Mountains");
                } else if coord == level.spawn_tile() || coord == level.exit_tile() {
                    assert!(matches!(tile.role(), TileRole::Start | TileRole::Exit));
                } else {
                    assert_eq!(tile.kind(), "Water");
                }
            }
        }
    }

    #[test]
    fn test_essential_tiles_same_row_do_not_collide() {
        // Swap order (draw 1), both rows 2.
        let mut generator = LevelGenerator::with_random(Box::new(ScriptedRandom::new([1, 2, 2])));
        let level = generator.generate(&template(8, 6), 1, false, false).unwrap();

        assert_eq!(level.exit_tile(), GridCoord::new(1, 2));
        assert_eq!(level.spawn_tile(), GridCoord::new(6, 2));
        assert_eq!(level.tile(level.spawn_tile()).unwrap().role(), TileRole::Start);
        assert_eq!(level.tile(level.exit_tile()).unwrap().role(), TileRole::Exit);
    }

    #[test]
    fn test_essential_tiles_are_placed_synchronously() {
        let mut generator = LevelGenerator::with_seed(3);
        let level = generator
            .generate(&template(10, 10), 1, false, false)
            .unwrap();
        assert_eq!(level.grid().read().filled_count(), 2);
        assert!(matches!(
            level.tasks().next(),
            Some(GenerationTask::PlaceBarriers { .. })
        ));
    }

    #[test]
    fn test_essential_tile_collision_is_an_error() {
        let mut level = Level::new(template(6, 5), 1);
        for y in 1..4 {
            let mut tile = Tile::new("Grass", TileRole::Traversable, true);
            tile.place_at(GridCoord::new(1, y), level.tile_size());
            assert!(level.grid().write().place(tile));
        }

        // No swap, start tile drawn into the already filled left column.
        let mut generator = LevelGenerator::with_random(Box::new(ScriptedRandom::new([0, 2, 2])));
        let result = generator.place_essential_tiles(&mut level);
        assert!(matches!(result, Err(GenerationError::InvalidTemplate(_))));
        assert_eq!(level.spawn_tile(), GridCoord::default());
        assert_eq!(level.tile(GridCoord::new(1, 2)).unwrap().kind(), "Grass");
    }

    #[test]
    fn test_every_size_is_filled_with_barrier_border() {
        for seed in [1, 2, 3] {
            for width in 4..40 {
                for height in 3..20 {
                    let mut generator = LevelGenerator::with_seed(seed);
                    let mut level = generator
                        .generate(&template(width, height), 10_000, false, false)
                        .unwrap();
                    generator.finish(&mut level).unwrap();

                    let grid = level.grid();
                    let grid = grid.read();
                    assert!(grid.is_full(), "{}x{} seed {}", width, height, seed);
                    for tile in grid.tiles() {
                        if is_border(&level, tile.matrix_position()) {
                            assert_eq!(tile.kind(), "Mountains");
                        }
                    }

                    let starts: Vec<_> = grid
                        .tiles()
                        .filter(|tile| tile.role() == TileRole::Start)
                        .map(Tile::matrix_position)
                        .collect();
                    let exits: Vec<_> = grid
                        .tiles()
                        .filter(|tile| tile.role() == TileRole::Exit)
                        .map(Tile::matrix_position)
                        .collect();
                    assert_eq!(starts.len(), 1);
                    assert_eq!(exits.len(), 1);
                    let mut columns = [starts[0].x, exits[0].x];
                    columns.sort_unstable();
                    assert_eq!(columns, [1, width - 2]);
                }
            }
        }
    }

    #[test]
    fn test_invalid_template_aborts() {
        let mut generator = LevelGenerator::with_seed(1);
        let result = generator.generate(&template(3, 3), 1, true, true);
        assert!(matches!(result, Err(GenerationError::InvalidTemplate(_))));
    }

    #[test]
    fn test_unknown_tile_kind_is_surfaced_and_drain_resumes() {
        let template = LevelTemplate {
            map_size: MapSize { width: 5, height: 5 },
            tile_assembly: TileAssembly {
                barrier_tile: "Lava".to_string(),
                ..TileAssembly::default()
            },
            ..LevelTemplate::default()
        };
        let mut generator = LevelGenerator::with_seed(8);
        let mut level = generator.generate(&template, 100, false, false).unwrap();

        let err = generator.drain(&mut level, 100).unwrap_err();
        assert!(matches!(err.source, GenerationError::UnknownTileKind(ref kind) if kind == "Lava"));
        assert!(err.task.contains("barriers"));

        // The barrier task is gone; terrain fills the border instead.
        generator.finish(&mut level).unwrap();
        assert!(level.find_empty_tiles().is_empty());
    }

    #[test]
    fn test_out_of_capacity() {
        let template = LevelTemplate {
            map_size: MapSize { width: 4, height: 3 },
            item_assembly: ItemAssembly::new(1.0, false, 0),
            ..LevelTemplate::default()
        };
        let host = RecordingHost::new();
        let mut generator = LevelGenerator::with_seed(4).host(Box::new(host.clone()));
        let mut level = generator.generate(&template, 1000, true, false).unwrap();

        let err = generator.finish(&mut level).unwrap_err();
        match err.source {
            GenerationError::OutOfCapacity {
                requested,
                available,
            } => {
                assert_eq!(requested, 12);
                assert_eq!(available, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(level.treasure_count(), 0);
        assert_eq!(host.chest_count(), 0);
    }

    #[test]
    fn test_out_of_capacity_leaves_free_tiles_untouched() {
        let template = LevelTemplate {
            map_size: MapSize { width: 8, height: 8 },
            item_assembly: ItemAssembly::new(1.0, false, 0),
            ..LevelTemplate::default()
        };
        let host = RecordingHost::new();
        let mut generator = LevelGenerator::with_seed(21).host(Box::new(host.clone()));
        let mut level = generator.generate(&template, 1000, true, false).unwrap();

        // Stop right before the item task.
        generator.drain(&mut level, 65).unwrap();
        let free_before = level.unoccupied_tiles();
        assert!(!free_before.is_empty());

        let err = generator.finish(&mut level).unwrap_err();
        match err.source {
            GenerationError::OutOfCapacity {
                requested,
                available,
            } => {
                assert_eq!(requested, 64);
                assert_eq!(available, free_before.len());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(level.treasure_count(), 0);
        assert_eq!(host.chest_count(), 0);
        assert_eq!(level.unoccupied_tiles(), free_before);
        assert_eq!(level.pending_tasks(), 1);
    }

    /// Hands out items until its stock runs dry.
    struct LimitedItems {
        stock: std::cell::Cell<usize>,
    }

    impl ItemFactory for LimitedItems {
        fn create_item(&self, kind: &str) -> Result<crate::map::Item> {
            if self.stock.get() == 0 {
                return Err(GenerationError::UnknownItemKind(kind.to_string()));
            }
            self.stock.set(self.stock.get() - 1);
            ItemCatalog.create_item(kind)
        }
    }

    #[test]
    fn test_failed_item_creation_places_no_chests() {
        let template = LevelTemplate {
            item_assembly: ItemAssembly::new(0.05, false, 0),
            ..LevelTemplate::default()
        };
        let host = RecordingHost::new();
        let mut generator = LevelGenerator::with_seed(5)
            .item_factory(Box::new(LimitedItems {
                stock: std::cell::Cell::new(10),
            }))
            .host(Box::new(host.clone()));
        let mut level = generator.generate(&template, 1000, true, false).unwrap();

        let err = generator.finish(&mut level).unwrap_err();
        assert!(matches!(err.source, GenerationError::UnknownItemKind(_)));
        assert_eq!(level.treasure_count(), 0);
        assert_eq!(host.chest_count(), 0);
    }

    #[test]
    fn test_player_starts_with_items() {
        let template = LevelTemplate {
            item_assembly: ItemAssembly::new(0.0, true, 4),
            ..LevelTemplate::default()
        };
        let mut generator = LevelGenerator::with_seed(12);
        let mut level = generator.generate(&template, 50, true, true).unwrap();
        generator.finish(&mut level).unwrap();

        assert_eq!(level.treasure_count(), 0);
        let player = level.active_player().unwrap();
        assert_eq!(player.inventory.items().len(), 4);
    }

    #[test]
    fn test_starting_items_skipped_without_player() {
        let template = LevelTemplate {
            item_assembly: ItemAssembly::new(0.0, true, 4),
            ..LevelTemplate::default()
        };
        let mut generator = LevelGenerator::with_seed(12);
        let mut level = generator.generate(&template, 50, false, false).unwrap();
        generator.finish(&mut level).unwrap();
        assert!(level.active_player().is_none());
    }

    #[test]
    fn test_same_seed_same_level() {
        let render = |seed| {
            let mut generator = LevelGenerator::with_seed(seed);
            let mut level = generator
                .generate(&LevelTemplate::default(), 64, true, true)
                .unwrap();
            generator.finish(&mut level).unwrap();
            level.render_ascii()
        };
        assert_eq!(render(77), render(77));
    }

    #[test]
    fn test_path_points_stay_inside() {
        let mut generator = LevelGenerator::with_seed(21);
        let template = template(12, 9);
        for point in generator.generate_path_points(50, &template) {
            assert!((2..=10).contains(&point.x));
            assert!((2..=7).contains(&point.y));
        }
    }

    #[test]
    fn test_create_path_single_segment() {
        // Open field: every interior cell draws the default fill.
        let mut draws = vec![0, 3, 3];
        draws.extend(std::iter::repeat(5).take(7 * 7));
        let mut generator = LevelGenerator::with_random(Box::new(ScriptedRandom::new(draws)));
        let mut level = generator.generate(&template(7, 7), 1000, false, false).unwrap();
        generator.finish(&mut level).unwrap();

        assert_eq!(level.spawn_tile(), GridCoord::new(1, 3));
        let points = [GridCoord::new(4, 3), GridCoord::new(2, 2)];
        let path = generator.create_path(&level, &points).unwrap();
        assert_eq!(path.first().map(|n| n.matrix_position), Some(GridCoord::new(1, 3)));
        assert_eq!(path.last().map(|n| n.matrix_position), Some(GridCoord::new(4, 3)));
        assert_eq!(path.len(), 4);

        assert!(generator.create_path(&level, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_level_pathfinders_see_generated_grid() {
        let mut draws = vec![0, 3, 3];
        draws.extend(std::iter::repeat(5).take(7 * 7));
        let mut generator = LevelGenerator::with_random(Box::new(ScriptedRandom::new(draws)));
        let mut level = generator.generate(&template(7, 7), 1000, false, false).unwrap();

        let (spawn, exit) = (level.spawn_tile(), level.exit_tile());
        assert!(level.pathfinding_walker.find_path(spawn, exit).is_empty());

        generator.finish(&mut level).unwrap();
        let path = level.pathfinding_walker.find_path(spawn, exit).to_vec();
        assert_eq!(path.len(), 5);
        assert!(level.pathfinding_visualizer.path().is_empty());

        let world = path[0].world_position;
        assert_eq!(world, spawn.to_world(Point2D::new(8.0, 8.0)));
    }
}
