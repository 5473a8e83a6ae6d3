//! # Chunk Creation Module
//!
//! Heightmap terrain fill. Each column of a chunk (ghost margin included) is
//! shaped by one noise sample:
//!
//! 1. `h = floor(sample ^ exponent * size)`
//! 2. stone below `h / 2`, dirt up to `h - 1`, grass on top
//! 3. columns lower than the water level are flooded and stay bare
//! 4. dry columns may grow a grass tuft, or failing that a flower
//!
//! Vegetation rolls come from a generator seeded by `(seed, world x, world z)`,
//! so a column always grows the same plant no matter which chunk (or margin)
//! generates it.

use cgmath::Point2;
use log::trace;

use crate::config::{VegetationConfig, WorldConfig};
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::noise_field::NoiseField;
use crate::error::{ConfigError, GenerationError};

use super::voxel_grid::{VoxelGrid, GRID_MARGIN};

/// Fills voxel grids from the world seed and terrain parameters.
///
/// Immutable once built, so one generator can be shared between worker
/// threads behind an `Arc`.
pub struct TerrainGenerator {
    noise: NoiseField,
    seed: u32,
    chunk_size: u32,
    water_level: u32,
    height_exponent: f64,
    vegetation: VegetationConfig,
}

impl TerrainGenerator {
    /// Builds a generator from a validated configuration.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(TerrainGenerator {
            noise: NoiseField::new(config.seed, &config.octaves)?,
            seed: config.seed,
            chunk_size: config.chunk_size,
            water_level: config.water_level,
            height_exponent: config.height_exponent,
            vegetation: config.vegetation,
        })
    }

    /// Voxels per chunk edge.
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// World seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Water surface height in voxels.
    pub fn water_level(&self) -> u32 {
        self.water_level
    }

    /// World-space voxel origin of a chunk, `None` if it overflows.
    pub fn chunk_origin(&self, coordinate: Point2<i32>) -> Option<Point2<i32>> {
        let size = self.chunk_size as i32;
        Some(Point2::new(
            coordinate.x.checked_mul(size)?,
            coordinate.y.checked_mul(size)?,
        ))
    }

    /// Terrain height of a world column, in `[0, chunk_size]`.
    pub fn height_at(&self, world_x: i32, world_z: i32) -> u32 {
        let sample = self.noise.sample(world_x as f64, world_z as f64);
        let height = (sample.powf(self.height_exponent) * self.chunk_size as f64).floor();
        (height.max(0.0) as u32).min(self.chunk_size)
    }

    /// Generates the voxel grid of the chunk at `coordinate`.
    ///
    /// # Errors
    /// Returns [`GenerationError::OutOfRange`] when the chunk's voxels do not
    /// fit in `i32` world coordinates.
    pub fn generate(&self, coordinate: Point2<i32>) -> Result<VoxelGrid, GenerationError> {
        let origin = self
            .chunk_origin(coordinate)
            .filter(|origin| {
                let reach = self.chunk_size as i32 + GRID_MARGIN;
                origin.x.checked_add(reach).is_some()
                    && origin.y.checked_add(reach).is_some()
                    && origin.x.checked_sub(GRID_MARGIN).is_some()
                    && origin.y.checked_sub(GRID_MARGIN).is_some()
            })
            .ok_or_else(|| GenerationError::out_of_range(coordinate))?;

        let mut grid = match VoxelGrid::new(self.chunk_size) {
            Ok(grid) => grid,
            // chunk_size was validated when the generator was built
            Err(_) => return Err(GenerationError::out_of_range(coordinate)),
        };

        let size = self.chunk_size as i32;
        for z in -GRID_MARGIN..size + GRID_MARGIN {
            for x in -GRID_MARGIN..size + GRID_MARGIN {
                self.fill_column(&mut grid, x, z, origin.x + x, origin.y + z);
            }
        }

        trace!("Filled chunk {:?} at origin {:?}", coordinate, origin);
        Ok(grid)
    }

    fn fill_column(&self, grid: &mut VoxelGrid, x: i32, z: i32, world_x: i32, world_z: i32) {
        let size = self.chunk_size as i32;
        let height = self.height_at(world_x, world_z) as i32;

        grid.fill_column(x, z, 0, height / 2, BlockType::STONE);
        grid.fill_column(x, z, height / 2, height - 1, BlockType::DIRT);
        if height > 0 {
            grid.set(x, height - 1, z, BlockType::GRASS);
        }

        let water_level = self.water_level as i32;
        if height < water_level {
            grid.fill_column(x, z, height, water_level, BlockType::WATER);
            return;
        }

        if height == 0 || height >= size {
            return;
        }

        if let Some(plant) = self.roll_vegetation(world_x, world_z) {
            grid.set(x, height, z, plant);
        }
    }

    /// Ground cover for a dry column. The tuft roll comes first; the flower
    /// roll only happens when it fails.
    fn roll_vegetation(&self, world_x: i32, world_z: i32) -> Option<BlockType> {
        let mut rng = fastrand::Rng::with_seed(column_seed(self.seed, world_x, world_z));
        if rng.f64() < self.vegetation.cover_chance {
            return Some(BlockType::SHORT_GRASS);
        }
        if rng.f64() < self.vegetation.flower_chance {
            return Some(BlockType::random_flower(&mut rng));
        }
        None
    }
}

/// Mixes a world seed and a column position into an independent RNG seed.
fn column_seed(seed: u32, world_x: i32, world_z: i32) -> u64 {
    let mut hash = seed as u64 ^ 0x9E37_79B9_7F4A_7C15;
    for value in [world_x as u32 as u64, world_z as u32 as u64] {
        hash ^= value;
        hash = hash.wrapping_mul(0x517C_C1B7_2722_0A95);
        hash ^= hash >> 32;
    }
    hash
}
