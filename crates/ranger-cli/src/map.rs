//! The `ranger map` command: generation, rendering and the reachability check.

use anyhow::{ensure, Result};
use clap::ValueEnum;
use ranger_world::{is_reachable, path_length, MapGenerator, ParkMap, Tile};
use tracing::info;

use crate::RangerConfig;

/// How a generated map is printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MapFormat {
    /// One glyph per tile
    Ascii,
    /// JSON object with dimensions, seed and tile names
    Json,
}

/// Generates a map with the configured generator. `None` picks a random seed.
#[must_use]
pub fn build_map(config: &RangerConfig, seed: Option<u32>) -> ParkMap {
    let generator = MapGenerator::new(config.generator.clone());
    match seed {
        Some(seed) => generator.generate(seed),
        None => generator.generate_random(),
    }
}

/// Renders `map` in the requested format.
pub fn render_map(map: &ParkMap, format: MapFormat) -> Result<String> {
    Ok(match format {
        MapFormat::Ascii => map.to_string(),
        MapFormat::Json => serde_json::to_string_pretty(map)?,
    })
}

/// Fails unless the spawn and camp are walkable and connected.
pub fn check_map(map: &ParkMap) -> Result<()> {
    let (start, camp) = (map.start(), map.camp());
    ensure!(map.is_walkable_at(start), "spawn {start} is not walkable");
    ensure!(map.is_walkable_at(camp), "camp {camp} is not walkable");
    ensure!(
        is_reachable(map, start, camp),
        "camp {camp} is not reachable from spawn {start}"
    );
    info!(
        seed = map.seed(),
        steps = path_length(map, start, camp),
        trail = map.count(Tile::Trail),
        river = map.count(Tile::River),
        tree = map.count(Tile::Tree),
        "map check passed"
    );
    Ok(())
}
