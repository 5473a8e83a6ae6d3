//! # Error Types
//!
//! Errors surfaced by the terrain crate. Only configuration is fatal; a chunk
//! that fails to generate is logged by the world and skipped.

use cgmath::Point2;
use thiserror::Error;

/// A rejected or unreadable [`WorldConfig`](crate::config::WorldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chunk size must be at least 1 voxel")]
    ZeroChunkSize,

    #[error("chunk size {0} exceeds the maximum of {max}", max = crate::config::MAX_CHUNK_SIZE)]
    ChunkSizeTooLarge(u32),

    #[error("render distance must be at least 1 chunk, got {0}")]
    RenderDistanceTooSmall(i32),

    #[error("render distance {0} exceeds the maximum of {max}", max = crate::config::MAX_RENDER_DISTANCE)]
    RenderDistanceTooLarge(i32),

    #[error("water level {water_level} exceeds chunk height {chunk_size}")]
    WaterLevelTooHigh { water_level: u32, chunk_size: u32 },

    #[error("height exponent must be finite and positive, got {0}")]
    InvalidHeightExponent(f64),

    #[error("noise field needs at least one octave")]
    NoOctaves,

    #[error("octave {index} has a non-finite or negative parameter")]
    InvalidOctave { index: usize },

    #[error("total octave amplitude must be positive")]
    ZeroAmplitude,

    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("chunks per tick must be at least 1")]
    ZeroChunksPerTick,

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single chunk that could not be produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("chunk {x},{z} lies outside the addressable world")]
    OutOfRange { x: i32, z: i32 },
}

impl GenerationError {
    /// Builds an [`GenerationError::OutOfRange`] for a chunk coordinate.
    pub fn out_of_range(coordinate: Point2<i32>) -> Self {
        GenerationError::OutOfRange {
            x: coordinate.x,
            z: coordinate.y,
        }
    }
}
