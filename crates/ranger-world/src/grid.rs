//! Tile storage: a mutable grid for generation and the read-only map
//! handed to everything else.

use std::fmt;

use ranger_common::{TileCoord, WorldError};
use serde::Serialize;

use crate::tile::Tile;

/// Row-major tile buffer of fixed `width * height`.
///
/// Writes outside the grid are ignored, so painting code never has to
/// special-case the edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid filled with one tile.
    #[must_use]
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// Creates an all-grass grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Tile::Grass)
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        TileCoord::new(x, y).in_bounds(self.width, self.height)
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if !self.contains(x, y) {
            return None;
        }
        self.tiles.get(TileCoord::new(x, y).to_index(self.width)).copied()
    }

    /// Sets the tile at `(x, y)`. Returns false (and writes nothing) outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let index = TileCoord::new(x, y).to_index(self.width);
        if let Some(slot) = self.tiles.get_mut(index) {
            *slot = tile;
            return true;
        }
        false
    }

    /// One row of tiles.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Tile]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.tiles.get(start..start + self.width)
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // `max(1)` keeps `chunks_exact` happy on a zero-width grid.
        self.tiles.chunks_exact(self.width.max(1))
    }

    /// All tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterates over `(coord, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (TileCoord::from_index(i, width), tile))
    }

    /// Number of tiles of the given variant.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Parses glyph rows (see [`Tile::glyph`]). Blank lines are skipped.
    pub fn from_ascii(text: &str) -> Result<Self, WorldError> {
        let mut width = None;
        let mut tiles = Vec::new();
        let mut height = 0;

        for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let row_width = line.chars().count();
            let expected = *width.get_or_insert(row_width);
            if row_width != expected {
                return Err(WorldError::RaggedRow {
                    row: height,
                    expected,
                    actual: row_width,
                });
            }
            for (x, glyph) in line.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(WorldError::UnknownGlyph {
                    glyph,
                    x,
                    y: height,
                })?;
                tiles.push(tile);
            }
            height += 1;
        }

        let width = width.ok_or(WorldError::Empty)?;
        Ok(Self {
            width,
            height,
            tiles,
        })
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
        }
        Ok(())
    }
}

/// A finished park map.
///
/// Terrain is frozen once generation completes: there is no way to
/// mutate tiles through this type, so it can be shared freely between
/// movement, spawning and rendering code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkMap {
    seed: Option<u32>,
    start: TileCoord,
    camp: TileCoord,
    #[serde(flatten)]
    grid: TileGrid,
}

impl ParkMap {
    /// Freezes a grid into a map. `start` and `camp` are clamped into bounds.
    #[must_use]
    pub fn from_grid(grid: TileGrid, start: TileCoord, camp: TileCoord, seed: Option<u32>) -> Self {
        let (w, h) = (grid.width(), grid.height());
        Self {
            seed,
            start: start.clamped(w, h),
            camp: camp.clamped(w, h),
            grid,
        }
    }

    /// Parses a map from glyph rows, with the given points of interest.
    pub fn from_ascii(text: &str, start: TileCoord, camp: TileCoord) -> Result<Self, WorldError> {
        Ok(Self::from_grid(TileGrid::from_ascii(text)?, start, camp, None))
    }

    /// Seed the map was generated from, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Spawn tile.
    #[must_use]
    pub const fn start(&self) -> TileCoord {
        self.start
    }

    /// Camp (delivery / safe zone) tile.
    #[must_use]
    pub const fn camp(&self) -> TileCoord {
        self.camp
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Tile at `(x, y)`, or `None` outside the map.
    #[must_use]
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.grid.get(x, y)
    }

    /// Tile at a coordinate, or `None` outside the map.
    #[must_use]
    pub fn tile_at(&self, coord: TileCoord) -> Option<Tile> {
        self.grid.get(coord.x, coord.y)
    }

    /// Whether the coordinate is inside the map and walkable.
    #[must_use]
    pub fn is_walkable_at(&self, coord: TileCoord) -> bool {
        self.tile_at(coord).is_some_and(Tile::is_walkable)
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.grid.rows()
    }

    /// Iterates over `(coord, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, Tile)> + '_ {
        self.grid.iter()
    }

    /// Number of tiles of the given variant.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.grid.count(tile)
    }

    /// Read-only view of the underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }
}

impl fmt::Display for ParkMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
