//! # Chunk Module
//!
//! A chunk is a `size × size × size` column of terrain identified by its
//! horizontal grid coordinate. It owns its voxels and the mesh built from
//! them, and only ever exists fully generated: the world keeps queued
//! coordinates separately and drops a chunk as a whole on eviction.

use cgmath::{Point2, Point3};
use log::debug;
use web_time::Instant;

use crate::engine_state::rendering::meshing::{mesh_grid, ChunkMesh, MesherOptions};
use crate::error::GenerationError;

use super::block::block_type::BlockType;

pub mod chunk_creation;
pub mod chunk_iteration;
pub mod voxel_grid;

use chunk_creation::TerrainGenerator;
use voxel_grid::VoxelGrid;

/// One generated, meshed chunk of terrain.
#[derive(Debug)]
pub struct Chunk {
    /// Chunk grid coordinate, `x` and `z` in chunk units.
    pub coordinate: Point2<i32>,
    /// World-space voxel position of local `(0, 0, 0)`.
    pub origin: Point3<i32>,
    /// Block data, ghost margin included.
    pub grid: VoxelGrid,
    /// Render buffers derived from `grid`.
    pub mesh: ChunkMesh,
}

impl Chunk {
    /// Fills and meshes the chunk at `coordinate`.
    ///
    /// This is a pure function of the generator and coordinate, which is what
    /// lets worker threads run it without touching the world.
    pub fn generate(
        generator: &TerrainGenerator,
        coordinate: Point2<i32>,
        options: MesherOptions,
    ) -> Result<Chunk, GenerationError> {
        let start = Instant::now();

        let grid = generator.generate(coordinate)?;
        let origin = generator
            .chunk_origin(coordinate)
            .ok_or_else(|| GenerationError::out_of_range(coordinate))?;
        let origin = Point3::new(origin.x, 0, origin.y);
        let mesh = mesh_grid(&grid, origin, options);

        debug!(
            "Generated chunk {:?}: {} solid, {} billboard, {} water quads in {:?}",
            coordinate,
            mesh.solid.quad_count(),
            mesh.billboard.quad_count(),
            mesh.water.quad_count(),
            start.elapsed()
        );

        Ok(Chunk {
            coordinate,
            origin,
            grid,
            mesh,
        })
    }

    /// Block at a world-space voxel position, `None` if it lies outside this
    /// chunk.
    pub fn block_at_world(&self, world: Point3<i32>) -> Option<BlockType> {
        let local = world - self.origin;
        if self.grid.is_interior(local.x, local.y, local.z) {
            Some(self.grid.get(local.x, local.y, local.z))
        } else {
            None
        }
    }
}
