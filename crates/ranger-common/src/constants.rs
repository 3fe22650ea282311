//! Map dimensions and world-space scale.

/// World units (pixels) per tile edge.
pub const TILE_SIZE: f32 = 24.0;

/// Map width in tiles.
pub const MAP_W: usize = 40;

/// Map height in tiles.
pub const MAP_H: usize = 30;

/// Width of the playfield in world units.
pub const CANVAS_WIDTH: f32 = 960.0;

/// Height of the playfield in world units.
pub const CANVAS_HEIGHT: f32 = 720.0;
