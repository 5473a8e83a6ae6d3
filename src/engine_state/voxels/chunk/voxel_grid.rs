//! # Voxel Grid
//!
//! Dense block storage for one chunk.
//!
//! The grid stores one extra column on every horizontal side of the chunk (the
//! ghost margin). Margin columns are generated from the neighboring chunk's
//! world coordinates, so the mesher can look one voxel past the chunk edge
//! without consulting any other chunk. Vertically there is no margin: below
//! the floor and above the ceiling read as air.
//!
//! Storage is indexed `x + y * W + z * W * H`, with `W = size + 2` and
//! `H = size`, after shifting local `x`/`z` by one to skip the margin.

use crate::config::MAX_CHUNK_SIZE;
use crate::engine_state::voxels::block::{block_type::BlockType, BlockTypeSize};
use crate::error::ConfigError;

/// Width of the ghost margin on each horizontal side.
pub const GRID_MARGIN: i32 = 1;

/// Block ids for one chunk plus its horizontal margin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    size: u32,
    /// Stored width in x and z, margin included
    wrapped: usize,
    blocks: Vec<BlockTypeSize>,
}

impl VoxelGrid {
    /// Allocates an all-air grid for a chunk of `size` voxels per edge.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroChunkSize`] for a zero size and
    /// [`ConfigError::ChunkSizeTooLarge`] above [`MAX_CHUNK_SIZE`].
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if size > MAX_CHUNK_SIZE {
            return Err(ConfigError::ChunkSizeTooLarge(size));
        }
        let wrapped = size as usize + 2 * GRID_MARGIN as usize;
        let len = wrapped
            .checked_mul(wrapped)
            .and_then(|area| area.checked_mul(size as usize))
            .ok_or(ConfigError::ChunkSizeTooLarge(size))?;
        Ok(VoxelGrid {
            size,
            wrapped,
            blocks: vec![BlockType::AIR.id(); len],
        })
    }

    /// Voxels per chunk edge, margin excluded.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether chunk-local `(x, y, z)` falls inside the stored extent,
    /// margin included.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        let size = self.size as i32;
        let horizontal = -GRID_MARGIN..size + GRID_MARGIN;
        horizontal.contains(&x) && horizontal.contains(&z) && (0..size).contains(&y)
    }

    /// Whether chunk-local `(x, y, z)` is inside the chunk proper.
    pub fn is_interior(&self, x: i32, y: i32, z: i32) -> bool {
        let range = 0..self.size as i32;
        range.contains(&x) && range.contains(&y) && range.contains(&z)
    }

    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        let sx = (x + GRID_MARGIN) as usize;
        let sz = (z + GRID_MARGIN) as usize;
        sx + y as usize * self.wrapped + sz * self.wrapped * self.size as usize
    }

    /// Block at chunk-local coordinates. Anything outside the stored extent
    /// reads as air.
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockType {
        if !self.contains(x, y, z) {
            return BlockType::AIR;
        }
        // Ids are only ever written through `set`, so they always decode.
        BlockType::from_id(self.blocks[self.index(x, y, z)]).unwrap_or(BlockType::AIR)
    }

    /// Writes a block. Writes outside the stored extent are dropped.
    pub(crate) fn set(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        if self.contains(x, y, z) {
            let index = self.index(x, y, z);
            self.blocks[index] = block_type.id();
        }
    }

    /// Fills `[from, to)` of one column.
    pub(crate) fn fill_column(&mut self, x: i32, z: i32, from: i32, to: i32, block_type: BlockType) {
        for y in from.max(0)..to.min(self.size as i32) {
            self.set(x, y, z, block_type);
        }
    }

    /// Height of the topmost solid block in a column plus one, 0 for a column
    /// with no solid blocks.
    pub fn column_height(&self, x: i32, z: i32) -> u32 {
        (0..self.size as i32)
            .rev()
            .find(|y| self.get(x, *y, z).is_solid())
            .map_or(0, |y| y as u32 + 1)
    }

    /// Counts interior voxels of the given type.
    pub fn count(&self, block_type: BlockType) -> usize {
        let size = self.size as i32;
        let mut count = 0;
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    if self.get(x, y, z) == block_type {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}
