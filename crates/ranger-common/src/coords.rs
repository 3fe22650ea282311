//! Coordinate types for tile space and world space.
//!
//! Tile coordinates index the park grid; world coordinates are tile
//! coordinates scaled by [`TILE_SIZE`]. Row 0 is the top of the map.

use serde::{Deserialize, Serialize};

use crate::constants::TILE_SIZE;

/// Tile coordinate (column `x`, row `y`).
///
/// Signed so that walks and line carving may step outside the grid;
/// callers check [`TileCoord::in_bounds`] before touching tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies within a `width` x `height` grid.
    #[must_use]
    pub const fn in_bounds(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }

    /// Clamps both axes into a `width` x `height` grid.
    #[must_use]
    pub fn clamped(self, width: usize, height: usize) -> Self {
        let max_x = width.saturating_sub(1) as i32;
        let max_y = height.saturating_sub(1) as i32;
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
        }
    }

    /// Converts to a row-major linear index. The coordinate must be in bounds.
    #[must_use]
    pub const fn to_index(self, width: usize) -> usize {
        (self.y as usize) * width + (self.x as usize)
    }

    /// Creates from a row-major linear index.
    #[must_use]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }

    /// Squared Euclidean distance to another tile.
    #[must_use]
    pub const fn distance_sq(self, other: Self) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    /// The four orthogonal neighbours (right, left, down, up).
    #[must_use]
    pub const fn neighbors4(self) -> [Self; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }

    /// World position of the tile's top-left corner.
    #[must_use]
    pub fn to_world_origin(self) -> WorldPos {
        WorldPos::new(self.x as f32 * TILE_SIZE, self.y as f32 * TILE_SIZE)
    }

    /// World position of the tile's centre.
    #[must_use]
    pub fn to_world_center(self) -> WorldPos {
        let half = TILE_SIZE / 2.0;
        WorldPos::new(self.x as f32 * TILE_SIZE + half, self.y as f32 * TILE_SIZE + half)
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position in world space (pixels). Also used for velocities and directions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    /// X coordinate in world space
    pub x: f32,
    /// Y coordinate in world space
    pub y: f32,
}

impl WorldPos {
    /// Origin / zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new world position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Tile containing this position (floor division by [`TILE_SIZE`]).
    #[must_use]
    pub fn to_tile(self) -> TileCoord {
        self.to_tile_with(TILE_SIZE)
    }

    /// Tile containing this position for an arbitrary tile size.
    #[must_use]
    pub fn to_tile_with(self, tile_size: f32) -> TileCoord {
        TileCoord::new(
            (self.x / tile_size).floor() as i32,
            (self.y / tile_size).floor() as i32,
        )
    }

    /// Length of the vector.
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit-length copy, or zero when the length is negligible.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 1e-3 {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    /// Scales both components.
    #[must_use]
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl std::ops::Add for WorldPos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for WorldPos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_negative_world_maps_out_of_bounds() {
        let tile = WorldPos::new(-0.5, 10.0).to_tile();
        assert_eq!(tile, TileCoord::new(-1, 0));
        assert!(!tile.in_bounds(40, 30));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(TileCoord::new(55, -3).clamped(40, 30), TileCoord::new(39, 0));
        assert_eq!(TileCoord::new(31, 1).clamped(40, 30), TileCoord::new(31, 1));
    }

    #[test]
    fn test_normalized_zero_stays_zero() {
        assert_eq!(WorldPos::ZERO.normalized(), WorldPos::ZERO);
        let unit = WorldPos::new(3.0, 4.0).normalized();
        assert!((unit.length() - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn index_roundtrip(x in 0i32..40, y in 0i32..30) {
            let coord = TileCoord::new(x, y);
            prop_assert_eq!(TileCoord::from_index(coord.to_index(40), 40), coord);
        }

        #[test]
        fn clamped_is_always_in_bounds(x in any::<i32>(), y in any::<i32>()) {
            prop_assert!(TileCoord::new(x, y).clamped(40, 30).in_bounds(40, 30));
        }
    }
}
