//! Connectivity repair.
//!
//! After painting, the spawn tile and the camp may be walled off by trees
//! or water. Repair clears a grass pocket around each point and carves a
//! straight trail corridor, so both are always walkable and joined by
//! trail tiles. Nothing here searches or verifies; the corridors make the
//! guarantee by construction.

use ranger_common::TileCoord;
use tracing::debug;

use crate::grid::TileGrid;
use crate::tile::Tile;

/// Clears a `(2r+1)` square around `center` to grass, clipped to the grid.
/// Existing trail tiles are kept.
pub fn clear_pocket(grid: &mut TileGrid, center: TileCoord, radius: i32) {
    for y in center.y - radius..=center.y + radius {
        for x in center.x - radius..=center.x + radius {
            if grid.get(x, y).is_some_and(|tile| tile != Tile::Trail) {
                grid.set(x, y, Tile::Grass);
            }
        }
    }
}

/// Nearest trail tile to `from` by Euclidean distance. Ties go to the
/// first tile in row-major scan order.
#[must_use]
pub fn nearest_trail(grid: &TileGrid, from: TileCoord) -> Option<TileCoord> {
    grid.iter()
        .filter(|&(_, tile)| tile == Tile::Trail)
        .map(|(coord, _)| coord)
        .min_by_key(|coord| coord.distance_sq(from))
}

/// Writes trail along the Bresenham line from `(x0, y0)` to `(x1, y1)`,
/// both endpoints included, whatever the tiles held before. Points outside
/// the grid are skipped.
pub fn carve_line(grid: &mut TileGrid, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        grid.set(x, y, Tile::Trail);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Clears the spawn pocket and links the spawn to the nearest trail.
///
/// With no trail anywhere the corridor heads for `start + fallback`,
/// clamped to the grid. Returns the corridor's far end.
pub fn repair_start(
    grid: &mut TileGrid,
    start: TileCoord,
    radius: i32,
    fallback: TileCoord,
) -> TileCoord {
    clear_pocket(grid, start, radius);

    let target = nearest_trail(grid, start).unwrap_or_else(|| {
        TileCoord::new(start.x + fallback.x, start.y + fallback.y)
            .clamped(grid.width(), grid.height())
    });

    carve_line(grid, start.x, start.y, target.x, target.y);
    debug!(%start, %target, "start corridor carved");
    target
}

/// Clears the camp pocket and carves a corridor from the spawn straight to it.
pub fn repair_camp(grid: &mut TileGrid, start: TileCoord, camp: TileCoord, radius: i32) {
    clear_pocket(grid, camp, radius);
    carve_line(grid, start.x, start.y, camp.x, camp.y);
    debug!(%start, %camp, "camp corridor carved");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_tiles(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<TileCoord> {
        let mut grid = TileGrid::filled(40, 30, Tile::Tree);
        carve_line(&mut grid, x0, y0, x1, y1);
        grid.iter()
            .filter(|&(_, tile)| tile == Tile::Trail)
            .map(|(coord, _)| coord)
            .collect()
    }

    #[test]
    fn test_pocket_keeps_trails() {
        let mut grid = TileGrid::filled(10, 10, Tile::River);
        grid.set(2, 2, Tile::Trail);
        clear_pocket(&mut grid, TileCoord::new(1, 1), 2);

        assert_eq!(grid.get(2, 2), Some(Tile::Trail));
        assert_eq!(grid.get(0, 0), Some(Tile::Grass));
        assert_eq!(grid.get(3, 3), Some(Tile::Grass));
        assert_eq!(grid.get(4, 4), Some(Tile::River));
        // Clipped at the top-left edge: a 4x4 area, one tile is trail.
        assert_eq!(grid.count(Tile::Grass), 15);
    }

    #[test]
    fn test_nearest_trail_tie_breaks_in_scan_order() {
        let mut grid = TileGrid::new(10, 10);
        grid.set(3, 5, Tile::Trail);
        grid.set(5, 3, Tile::Trail);
        assert_eq!(nearest_trail(&grid, TileCoord::new(1, 1)), Some(TileCoord::new(5, 3)));
        assert_eq!(nearest_trail(&TileGrid::new(4, 4), TileCoord::new(1, 1)), None);
    }

    #[test]
    fn test_horizontal_line() {
        let tiles = line_tiles(1, 1, 31, 1);
        assert_eq!(tiles.len(), 31);
        assert!(tiles.iter().all(|c| c.y == 1 && (1..=31).contains(&c.x)));
    }

    #[test]
    fn test_diagonal_line_includes_endpoints() {
        let tiles = line_tiles(1, 1, 6, 4);
        assert!(tiles.contains(&TileCoord::new(1, 1)));
        assert!(tiles.contains(&TileCoord::new(6, 4)));
        // One tile per step along the major axis.
        assert_eq!(tiles.len(), 6);
    }

    #[test]
    fn test_line_is_symmetric_in_length() {
        assert_eq!(line_tiles(10, 20, 2, 3).len(), line_tiles(2, 3, 10, 20).len());
    }

    #[test]
    fn test_line_clips_outside_grid() {
        let tiles = line_tiles(-5, 0, 3, 0);
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_start_repair_fallback() {
        let mut grid = TileGrid::filled(40, 30, Tile::Tree);
        let target = repair_start(&mut grid, TileCoord::new(1, 1), 2, TileCoord::new(10, 6));
        assert_eq!(target, TileCoord::new(11, 7));
        assert_eq!(grid.get(11, 7), Some(Tile::Trail));
        assert_eq!(grid.get(1, 1), Some(Tile::Trail));
    }

    #[test]
    fn test_start_repair_links_existing_trail() {
        let mut grid = TileGrid::filled(40, 30, Tile::Tree);
        grid.set(20, 1, Tile::Trail);
        let target = repair_start(&mut grid, TileCoord::new(1, 1), 2, TileCoord::new(10, 6));
        assert_eq!(target, TileCoord::new(20, 1));
        assert!((1..=20).all(|x| grid.get(x, 1) == Some(Tile::Trail)));
    }

    #[test]
    fn test_camp_repair_overrides_rivers() {
        let mut grid = TileGrid::filled(40, 30, Tile::River);
        repair_camp(&mut grid, TileCoord::new(1, 1), TileCoord::new(31, 1), 2);
        assert!((1..=31).all(|x| grid.get(x, 1) == Some(Tile::Trail)));
        assert_eq!(grid.get(33, 3), Some(Tile::Grass));
        assert_eq!(grid.get(34, 3), Some(Tile::River));
    }
}
