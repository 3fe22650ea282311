//! # Ranger Common
//!
//! Common types shared by every park ranger crate.
//!
//! This crate provides:
//! - Map dimensions and the tile size constant
//! - Coordinate types (tile space, world space)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod constants;
pub mod coords;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::coords::*;
    pub use crate::error::*;
}

pub use prelude::*;
