//! # World Configuration
//!
//! Every tunable of terrain generation and chunk streaming lives in
//! [`WorldConfig`]. It deserializes from JSON with per-field defaults, so a
//! config file only needs to name the values it overrides:
//!
//! ```json
//! { "seed": 42, "render_distance": 4, "octaves": [{ "amplitude": 1.0, "frequency": 0.02, "offset": 0.0 }] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted chunk edge, in voxels.
pub const MAX_CHUNK_SIZE: u32 = 1024;

/// Largest accepted render distance, in chunks.
pub const MAX_RENDER_DISTANCE: i32 = 64;

/// One layer of the height noise stack.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseOctave {
    /// Weight of this octave in the normalized sum
    pub amplitude: f64,
    /// Scale applied to world coordinates before sampling
    pub frequency: f64,
    /// Shift applied after scaling, decorrelates octaves sharing a lattice
    pub offset: f64,
}

impl NoiseOctave {
    /// Creates an octave from its three parameters.
    pub fn new(amplitude: f64, frequency: f64, offset: f64) -> Self {
        NoiseOctave {
            amplitude,
            frequency,
            offset,
        }
    }

    /// The default stack: six octaves starting at amplitude 2.0 with a
    /// persistence of 0.3, each halving the frequency of the previous one.
    pub fn default_stack() -> Vec<NoiseOctave> {
        let mut octaves = Vec::with_capacity(6);
        let mut amplitude = 2.0;
        let mut frequency = 1.0 / 32.0;
        for i in 0..6 {
            octaves.push(NoiseOctave::new(amplitude, frequency, i as f64 * 17.31));
            amplitude *= 0.3;
            frequency /= 2.0;
        }
        octaves
    }
}

/// Probabilities for the ground cover scattered on dry columns.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VegetationConfig {
    /// Chance that a dry column grows a short grass tuft
    pub cover_chance: f64,
    /// Chance that a dry column without a tuft grows a flower
    pub flower_chance: f64,
}

impl Default for VegetationConfig {
    fn default() -> Self {
        VegetationConfig {
            cover_chance: 1.0 / 20.0,
            flower_chance: 1.0 / 50.0,
        }
    }
}

/// Configuration for terrain generation and chunk streaming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Voxels per chunk edge, also the maximum terrain height
    pub chunk_size: u32,
    /// Chebyshev radius, in chunks, kept loaded around the camera
    pub render_distance: i32,
    /// Seed for height noise and vegetation scatter
    pub seed: u32,
    /// Columns lower than this are flooded up to it
    pub water_level: u32,
    /// Exponent applied to the noise sample before scaling to a height
    pub height_exponent: f64,
    /// Height noise stack
    pub octaves: Vec<NoiseOctave>,
    /// Vegetation scatter probabilities
    pub vegetation: VegetationConfig,
    /// Upper bound on chunks generated (or dispatched) per tick
    pub chunks_per_tick: usize,
    /// Whether the mesher emits downward facing faces of solid blocks
    pub emit_bottom_faces: bool,
    /// Drop queued coordinates that left the render distance before generation
    pub prune_stale_requests: bool,
    /// Background generation threads; 0 generates on the ticking thread
    pub worker_threads: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_size: 32,
            render_distance: 2,
            seed: 1_666_154,
            water_level: 6,
            height_exponent: 2.5,
            octaves: NoiseOctave::default_stack(),
            vegetation: VegetationConfig::default(),
            chunks_per_tick: 1,
            emit_bottom_faces: false,
            prune_stale_requests: true,
            worker_threads: 0,
        }
    }
}

impl WorldConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Rejects configurations that would produce degenerate grids or an
    /// empty streaming window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::ChunkSizeTooLarge(self.chunk_size));
        }
        validate_render_distance(self.render_distance)?;
        if self.water_level > self.chunk_size {
            return Err(ConfigError::WaterLevelTooHigh {
                water_level: self.water_level,
                chunk_size: self.chunk_size,
            });
        }
        if !self.height_exponent.is_finite() || self.height_exponent <= 0.0 {
            return Err(ConfigError::InvalidHeightExponent(self.height_exponent));
        }
        validate_octaves(&self.octaves)?;
        for (name, value) in [
            ("cover_chance", self.vegetation.cover_chance),
            ("flower_chance", self.vegetation.flower_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if self.chunks_per_tick == 0 {
            return Err(ConfigError::ZeroChunksPerTick);
        }
        Ok(())
    }
}

/// Checks a render distance against `1..=MAX_RENDER_DISTANCE`.
pub fn validate_render_distance(render_distance: i32) -> Result<(), ConfigError> {
    if render_distance < 1 {
        return Err(ConfigError::RenderDistanceTooSmall(render_distance));
    }
    if render_distance > MAX_RENDER_DISTANCE {
        return Err(ConfigError::RenderDistanceTooLarge(render_distance));
    }
    Ok(())
}

/// Checks an octave stack on its own; the noise field reuses this.
pub fn validate_octaves(octaves: &[NoiseOctave]) -> Result<(), ConfigError> {
    if octaves.is_empty() {
        return Err(ConfigError::NoOctaves);
    }
    for (index, octave) in octaves.iter().enumerate() {
        let finite = octave.amplitude.is_finite()
            && octave.frequency.is_finite()
            && octave.offset.is_finite();
        if !finite || octave.amplitude < 0.0 {
            return Err(ConfigError::InvalidOctave { index });
        }
    }
    if octaves.iter().map(|o| o.amplitude).sum::<f64>() <= 0.0 {
        return Err(ConfigError::ZeroAmplitude);
    }
    Ok(())
}
