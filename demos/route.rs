//! Loads a Level, shows the Path between two Waypoints and saves the Cost to every Cell.
//!
//! Usage: `cargo run --example route [level] [src] [dst] [output.csv]`

use env_logger::Env;
use level_pathfinding::prelude::*;
use log::{info, warn};
use std::time::Instant;

fn main() -> Result<(), LevelError> {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info")
        .write_style_or("MY_LOG_STYLE", "always");
    env_logger::init_from_env(env);

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/test_maze.txt").into());
    let src = args.next().and_then(|s| s.chars().next()).unwrap_or('a');
    let dst = args.next().and_then(|s| s.chars().next()).unwrap_or('e');
    let output = args.next().unwrap_or_else(|| "maze_costs.csv".into());

    let level = Level::load(&filename)?;
    println!("{}", level);

    let start_time = Instant::now();
    match find_route(&level, src, dst)? {
        Some(path) => {
            info!("found route in {:?}", start_time.elapsed());
            println!("total cost = {}", path.cost());
            println!();
            println!("{}", level.render(&path));
        }
        None => warn!("No path possible from '{}' to '{}'", src, dst),
    }

    let start_time = Instant::now();
    let costs = costs_from(&level, src)?;
    info!(
        "calculated {} costs in {:?}",
        costs.len(),
        start_time.elapsed()
    );
    level.save_costs(&costs, &output)?;
    info!("saved costs to {}", output);

    Ok(())
}
