//! # Ranger CLI
//!
//! Command line front end for the park generator and game rules:
//! - `ranger map` prints a generated park as ASCII or JSON and can verify
//!   that the camp is reachable from the spawn
//! - `ranger simulate` plays a headless session on autopilot
//! - `ranger init-config` writes a default `ranger.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod map;
pub mod simulate;

pub use config::{LoadedConfig, RangerConfig, CONFIG_FILE};
pub use map::{build_map, check_map, render_map, MapFormat};
pub use simulate::{run as run_simulation, SimulationReport};
