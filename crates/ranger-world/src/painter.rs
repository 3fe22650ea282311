//! Terrain painting: rivers, trails and tree scatter.
//!
//! Painting gives no reachability guarantees; see [`crate::repair`].

use tracing::trace;

use crate::grid::TileGrid;
use crate::rng::ParkRng;
use crate::tile::Tile;

/// Topmost row a river may occupy.
pub const RIVER_MIN_ROW: i32 = 2;

/// Paints one or two meandering horizontal river bands.
///
/// Each band starts on a random row and crosses every column, drifting by
/// [`ParkRng::meander`] per step with the row clamped to `[2, H-3]`. Half
/// of the columns are thickened by one tile downwards.
///
/// Returns the number of rivers painted.
pub fn paint_rivers(grid: &mut TileGrid, rng: &mut ParkRng) -> usize {
    let rivers = 1 + rng.below(2);
    let max_row = (grid.height() as i32 - 3).max(RIVER_MIN_ROW);

    for _ in 0..rivers {
        let mut y = rng.below(grid.height()) as i32;
        for x in 0..grid.width() as i32 {
            y = (y + rng.meander()).clamp(RIVER_MIN_ROW, max_row);
            grid.set(x, y, Tile::River);
            if rng.chance(0.5) {
                grid.set(x, y + 1, Tile::River);
            }
        }
    }

    trace!(rivers, "painted rivers");
    rivers
}

/// Starting tile of trail walk `index`: left edge, right edge, then top edge.
fn trail_origin(index: usize, grid: &TileGrid, rng: &mut ParkRng) -> (i32, i32) {
    match index {
        0 => (0, rng.below(grid.height()) as i32),
        1 => (grid.width() as i32 - 1, rng.below(grid.height()) as i32),
        _ => (rng.below(grid.width()) as i32, 0),
    }
}

/// Carves `count` diagonal random-walk trails of `W + H` steps each.
///
/// Rivers take priority: a walk crossing water leaves it untouched. Walks
/// may wander off the grid; those steps mark nothing but the walk goes on.
pub fn paint_trails(grid: &mut TileGrid, rng: &mut ParkRng, count: usize) {
    let steps = grid.width() + grid.height();

    for index in 0..count {
        let (mut x, mut y) = trail_origin(index, grid, rng);
        for _ in 0..steps {
            if grid.get(x, y).is_some_and(|tile| tile != Tile::River) {
                grid.set(x, y, Tile::Trail);
            }
            x += rng.sign();
            y += rng.sign();
        }
    }

    trace!(count, steps, "painted trails");
}

/// Turns each remaining grass tile into a tree with probability `density`.
///
/// Returns the number of trees planted.
pub fn scatter_trees(grid: &mut TileGrid, rng: &mut ParkRng, density: f64) -> usize {
    let mut planted = 0;
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if grid.get(x, y) == Some(Tile::Grass) && rng.chance(density) {
                grid.set(x, y, Tile::Tree);
                planted += 1;
            }
        }
    }

    trace!(planted, "scattered trees");
    planted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn river_rows(grid: &TileGrid) -> Vec<i32> {
        grid.iter()
            .filter(|&(_, tile)| tile == Tile::River)
            .map(|(coord, _)| coord.y)
            .collect()
    }

    #[test]
    fn test_rivers_cross_every_column() {
        let mut grid = TileGrid::new(40, 30);
        let rivers = paint_rivers(&mut grid, &mut ParkRng::new(5));
        assert!((1..=2).contains(&rivers));
        for x in 0..40 {
            assert!((0..30).any(|y| grid.get(x, y) == Some(Tile::River)));
        }
    }

    #[test]
    fn test_river_rows_clamped() {
        for seed in 0..200 {
            let mut grid = TileGrid::new(40, 30);
            paint_rivers(&mut grid, &mut ParkRng::new(seed));
            for row in river_rows(&grid) {
                // Walk rows stay in [2, H-3]; thickening reaches H-2.
                assert!((RIVER_MIN_ROW..=28).contains(&row), "seed {seed}: row {row}");
            }
        }
    }

    #[test]
    fn test_trails_never_overwrite_rivers() {
        let mut grid = TileGrid::filled(40, 30, Tile::River);
        paint_trails(&mut grid, &mut ParkRng::new(11), 3);
        assert_eq!(grid.count(Tile::Trail), 0);
    }

    #[test]
    fn test_first_trails_start_on_edges() {
        let mut grid = TileGrid::new(40, 30);
        paint_trails(&mut grid, &mut ParkRng::new(8), 2);
        assert!((0..30).any(|y| grid.get(0, y) == Some(Tile::Trail)));
        assert!((0..30).any(|y| grid.get(39, y) == Some(Tile::Trail)));
    }

    #[test]
    fn test_trees_only_replace_grass() {
        let mut grid = TileGrid::new(40, 30);
        grid.set(0, 0, Tile::Trail);
        grid.set(1, 0, Tile::River);
        let planted = scatter_trees(&mut grid, &mut ParkRng::new(2), 1.0);
        assert_eq!(planted, 40 * 30 - 2);
        assert_eq!(grid.get(0, 0), Some(Tile::Trail));
        assert_eq!(grid.get(1, 0), Some(Tile::River));
    }

    #[test]
    fn test_zero_density_plants_nothing() {
        let mut grid = TileGrid::new(40, 30);
        assert_eq!(scatter_trees(&mut grid, &mut ParkRng::new(2), 0.0), 0);
    }
}
