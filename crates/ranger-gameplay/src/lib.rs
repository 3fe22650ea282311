//! # Ranger Gameplay
//!
//! Headless rules for the park patrol game, built on a generated
//! [`ParkMap`](ranger_world::ParkMap):
//! - Entities whose moves are gated by tile walkability
//! - A task queue of trash, rescues and birds placed on walkable tiles
//! - A poacher that chases the player and can escape off the map edge
//! - A timed session with scoring
//!
//! Drawing, HUD text and input devices live elsewhere; callers feed a
//! movement axis and interaction presses and read state back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod entity;
pub mod session;
pub mod tasks;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::entity::*;
    pub use crate::session::*;
    pub use crate::tasks::*;
}

pub use prelude::*;
