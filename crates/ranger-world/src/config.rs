//! Map generator configuration.

use ranger_common::{TileCoord, WorldPos, MAP_H, MAP_W, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// Smallest map edge that leaves room for the river band rows `[2, H-3]`
/// and a full 5x5 pocket.
pub const MIN_MAP_EDGE: usize = 8;

/// Largest map edge accepted by [`GeneratorConfig::validate`].
pub const MAX_MAP_EDGE: usize = 1024;

/// Tunable parameters for [`MapGenerator`](crate::MapGenerator).
///
/// The defaults give the standard park: 40x30 tiles of 24 units,
/// spawn at tile (1, 1) and the camp drawn at world (760, 40).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Map width in tiles
    pub width: usize,
    /// Map height in tiles
    pub height: usize,
    /// World units per tile, used to convert the camp anchor
    pub tile_size: f32,
    /// Spawn tile
    pub start: TileCoord,
    /// Camp position in world space
    pub camp_anchor: WorldPos,
    /// Number of trail walks (at most three distinct edge origins; extra
    /// trails reuse the top-edge origin)
    pub trail_count: usize,
    /// Probability that a grass tile becomes a tree
    pub tree_density: f64,
    /// Half-width of the cleared pockets (2 gives 5x5)
    pub pocket_radius: i32,
    /// Start-repair target offset when the map has no trail at all
    pub fallback_offset: TileCoord,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: MAP_W,
            height: MAP_H,
            tile_size: TILE_SIZE,
            start: TileCoord::new(1, 1),
            camp_anchor: WorldPos::new(760.0, 40.0),
            trail_count: 3,
            tree_density: 0.25,
            pocket_radius: 2,
            fallback_offset: TileCoord::new(10, 6),
        }
    }
}

impl GeneratorConfig {
    /// Clamps values into workable ranges.
    pub fn validate(&mut self) {
        self.width = self.width.clamp(MIN_MAP_EDGE, MAX_MAP_EDGE);
        self.height = self.height.clamp(MIN_MAP_EDGE, MAX_MAP_EDGE);
        if !(self.tile_size.is_finite() && self.tile_size >= 1.0) {
            self.tile_size = TILE_SIZE;
        }
        self.start = self.start.clamped(self.width, self.height);
        self.trail_count = self.trail_count.min(16);
        self.tree_density = if self.tree_density.is_finite() {
            self.tree_density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.pocket_radius = self.pocket_radius.clamp(0, 8);
    }

    /// Returns a validated copy.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Camp tile: anchor rounded down to tile space, then clamped to the grid.
    #[must_use]
    pub fn camp_tile(&self) -> TileCoord {
        self.camp_anchor
            .to_tile_with(self.tile_size)
            .clamped(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camp_tile() {
        let config = GeneratorConfig::default();
        assert_eq!(config.camp_tile(), TileCoord::new(31, 1));
    }

    #[test]
    fn test_camp_tile_clamped() {
        let config = GeneratorConfig {
            camp_anchor: WorldPos::new(5000.0, -90.0),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.camp_tile(), TileCoord::new(39, 0));
    }

    #[test]
    fn test_validate_clamps() {
        let mut config = GeneratorConfig {
            width: 2,
            height: 100_000,
            tile_size: 0.0,
            start: TileCoord::new(50, 50),
            tree_density: 3.0,
            ..GeneratorConfig::default()
        };
        config.validate();
        assert_eq!(config.width, MIN_MAP_EDGE);
        assert_eq!(config.height, MAX_MAP_EDGE);
        assert!((config.tile_size - TILE_SIZE).abs() < f32::EPSILON);
        assert_eq!(config.start, TileCoord::new(7, 50));
        assert!((config.tree_density - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_survive_validation() {
        assert_eq!(GeneratorConfig::default().validated(), GeneratorConfig::default());
    }
}
