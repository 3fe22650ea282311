//! Park map generator.

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::grid::{ParkMap, TileGrid};
use crate::painter::{paint_rivers, paint_trails, scatter_trees};
use crate::repair::{repair_camp, repair_start};
use crate::rng::ParkRng;
use crate::tile::Tile;

/// Default seed used when callers have no preference.
pub const DEFAULT_SEED: u32 = 1;

/// Procedural park generator.
///
/// Holds only configuration; each call to [`MapGenerator::generate`] owns
/// its own grid and random stream, so one generator can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct MapGenerator {
    config: GeneratorConfig,
}

impl MapGenerator {
    /// Creates a generator. The config is validated first.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the map for `seed`. The same seed always gives the same map.
    #[must_use]
    pub fn generate(&self, seed: u32) -> ParkMap {
        let config = &self.config;
        let mut rng = ParkRng::new(seed);
        let mut grid = TileGrid::new(config.width, config.height);

        let rivers = paint_rivers(&mut grid, &mut rng);
        paint_trails(&mut grid, &mut rng, config.trail_count);
        let trees = scatter_trees(&mut grid, &mut rng, config.tree_density);
        debug!(seed, rivers, trees, "terrain painted");

        let start = config.start;
        let camp = config.camp_tile();
        repair_start(&mut grid, start, config.pocket_radius, config.fallback_offset);
        repair_camp(&mut grid, start, camp, config.pocket_radius);

        debug!(
            seed,
            trail = grid.count(Tile::Trail),
            river = grid.count(Tile::River),
            tree = grid.count(Tile::Tree),
            "map generated"
        );
        ParkMap::from_grid(grid, start, camp, Some(seed))
    }

    /// Generates a map from a freshly drawn random seed.
    #[must_use]
    pub fn generate_random(&self) -> ParkMap {
        let seed = fastrand::u32(..);
        info!(seed, "generating map from random seed");
        self.generate(seed)
    }
}

/// Generates a map with the default configuration.
#[must_use]
pub fn generate(seed: u32) -> ParkMap {
    MapGenerator::default().generate(seed)
}

/// Generates a map with the default configuration and a random seed.
#[must_use]
pub fn generate_random() -> ParkMap {
    MapGenerator::default().generate_random()
}
