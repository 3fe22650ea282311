//! # Ranger World
//!
//! Procedural park map generation.
//!
//! A map is painted in strict stages over an all-grass grid:
//! 1. Rivers: one or two meandering horizontal bands
//! 2. Trails: three diagonal random walks from the map edges
//! 3. Trees: random scatter over the remaining grass
//! 4. Start repair: clear a pocket at the spawn tile and carve a trail to
//!    the nearest existing trail
//! 5. Camp repair: clear a pocket at the camp and carve a trail from the
//!    spawn tile to it
//!
//! Every random choice is drawn from one seeded [`ParkRng`], so a seed
//! always reproduces the same map.
//!
//! ## Example
//!
//! ```rust
//! use ranger_world::{generate, is_reachable};
//!
//! let map = generate(1);
//! assert!(map.is_walkable_at(map.start()));
//! assert!(is_reachable(&map, map.start(), map.camp()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod generator;
pub mod grid;
pub mod painter;
pub mod reachability;
pub mod repair;
pub mod rng;
pub mod tile;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::generator::*;
    pub use crate::grid::*;
    pub use crate::reachability::*;
    pub use crate::rng::*;
    pub use crate::tile::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let map = generate(1);
        assert_eq!(map.width(), ranger_common::MAP_W);
        assert_eq!(map.height(), ranger_common::MAP_H);
    }

    #[test]
    fn test_generation_deterministic() {
        assert_eq!(generate(42), generate(42));
    }
}
