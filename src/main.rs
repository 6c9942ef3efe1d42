#![warn(non_snake_case)]
//! # Tile Forge Entry Point
//!
//! Generates one level from a template, drains its task queue tick by tick at
//! the requested rate and prints the finished grid as ASCII.
//!
//! ```text
//! RUST_LOG=debug tile_forge --seed 7 --rate 64 --path-points 3
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use tile_forge::level::{LevelGenerator, LevelTemplate, RecordingHost};
use tile_forge::utils::SeededRandom;

#[derive(Parser, Debug)]
#[command(name = "tile_forge", about = "Generate a tile level and print it")]
struct Args {
    /// JSON level template; the built-in 24x24 template is used when omitted.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Tasks drained per tick.
    #[arg(long, default_value_t = 64)]
    rate: usize,

    /// Seed for reproducible levels.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    no_items: bool,

    #[arg(long)]
    no_player: bool,

    /// Trace a path from the spawn tile to the first of this many random points.
    #[arg(long, default_value_t = 0)]
    path_points: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let args = Args::parse();

    let template = match &args.template {
        Some(path) => {
            info!("Loading template from {}", path.display());
            LevelTemplate::from_json_file(path)?
        }
        None => LevelTemplate::default(),
    };

    let rng = match args.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_os_rng(),
    };
    let host = RecordingHost::new();
    let mut generator = LevelGenerator::with_random(Box::new(rng)).host(Box::new(host.clone()));

    let mut level = generator.generate(&template, args.rate, !args.no_items, !args.no_player)?;

    let mut ticks = 0usize;
    while !level.is_fully_generated() {
        ticks += 1;
        match generator.tick(&mut level) {
            Ok(remaining) => info!("Tick {}: {} tasks remaining", ticks, remaining),
            Err(err) => warn!("Tick {}: {}", ticks, err),
        }
    }
    info!(
        "Generated in {} ticks; {} treasure chests, {} objects registered with the host",
        ticks,
        level.treasure_count(),
        host.objects().len()
    );

    print!("{}", level.render_ascii());

    if args.path_points > 0 {
        let points = generator.generate_path_points(args.path_points, &template);
        let path = generator.create_path(&level, &points)?;
        if path.is_empty() {
            println!("No path from {} to {}", level.spawn_tile(), points[0]);
        } else {
            let route: Vec<String> = path
                .iter()
                .map(|node| node.matrix_position.to_string())
                .collect();
            println!("Path to {}: {}", points[0], route.join(" -> "));
        }
    }

    Ok(())
}
