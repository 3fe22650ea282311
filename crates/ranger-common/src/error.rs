//! Error types for the park ranger crates.
//!
//! Map generation itself is infallible. Errors only arise at the edges:
//! parsing maps from text and reading or writing configuration.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum RangerError {
    /// Map errors
    #[error("Map error: {0}")]
    World(#[from] WorldError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building a map from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// No rows were supplied
    #[error("map text is empty")]
    Empty,

    /// A row's width differs from the first row
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// A character that does not name a tile
    #[error("unknown tile glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph {
        /// The offending character
        glyph: char,
        /// Column
        x: usize,
        /// Row
        y: usize,
    },
}

/// Configuration load/save errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse the config file
    #[error("failed to parse {path}: {reason}")]
    Parse {
        /// File path
        path: String,
        /// Parser message
        reason: String,
    },

    /// Failed to serialize the config
    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// Result type alias for ranger operations.
pub type RangerResult<T> = Result<T, RangerError>;
