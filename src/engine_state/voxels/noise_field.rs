//! # Noise Field
//!
//! Layered 2D Perlin noise that turns a horizontal world position into a
//! normalized terrain height sample.
//!
//! Every octave owns a Perlin source seeded from the world seed and its index,
//! so the field is a pure function of `(seed, x, z)`: two chunks that sample
//! the same world column independently always agree, which is what keeps
//! chunk borders seamless.

use noise::{NoiseFn, Perlin};

use crate::config::{validate_octaves, NoiseOctave};
use crate::error::ConfigError;

/// A stack of Perlin octaves composited into one `[0, 1]` signal.
pub struct NoiseField {
    layers: Vec<(NoiseOctave, Perlin)>,
    total_amplitude: f64,
}

impl NoiseField {
    /// Builds a noise field for the given seed and octave stack.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the stack is empty, has non-finite values
    /// or no positive amplitude to normalize by.
    pub fn new(seed: u32, octaves: &[NoiseOctave]) -> Result<Self, ConfigError> {
        validate_octaves(octaves)?;

        let layers = octaves
            .iter()
            .enumerate()
            .map(|(i, octave)| (*octave, Perlin::new(seed.wrapping_add(i as u32))))
            .collect::<Vec<_>>();
        let total_amplitude = octaves.iter().map(|o| o.amplitude).sum();

        Ok(NoiseField {
            layers,
            total_amplitude,
        })
    }

    /// Samples the field at a world column.
    ///
    /// The amplitude-weighted octave sum is normalized by the total amplitude
    /// and remapped from Perlin's `[-1, 1]` into `[0, 1]`.
    pub fn sample(&self, world_x: f64, world_z: f64) -> f64 {
        let mut sum = 0.0;
        for (octave, perlin) in &self.layers {
            let point = [
                world_x * octave.frequency + octave.offset,
                world_z * octave.frequency + octave.offset,
            ];
            sum += perlin.get(point) * octave.amplitude;
        }

        let normalized = sum / self.total_amplitude;
        ((normalized + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Number of octaves in the stack.
    pub fn octave_count(&self) -> usize {
        self.layers.len()
    }
}
