//! # Chunk Iteration Module
//!
//! Iterates the non-air voxels of a chunk's interior, skipping the ghost
//! margin. Visiting order is fixed (x fastest, then y, then z), which is what
//! makes mesh buffers byte-identical between runs.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::voxel_grid::VoxelGrid;

/// An iterator over all non-air blocks in a voxel grid's interior.
pub struct ChunkBlockIterator<'a> {
    /// Grid being walked
    grid: &'a VoxelGrid,
    /// Current X position within the chunk
    local_x: i32,
    /// Current Y position within the chunk
    local_y: i32,
    /// Current Z position within the chunk
    local_z: i32,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates an iterator positioned before the first voxel.
    pub fn new(grid: &'a VoxelGrid) -> Self {
        ChunkBlockIterator {
            grid,
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    fn advance(&mut self) {
        let size = self.grid.size() as i32;
        self.local_x += 1;
        if self.local_x == size {
            self.local_x = 0;
            self.local_y += 1;
            if self.local_y == size {
                self.local_y = 0;
                self.local_z += 1;
            }
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<i32>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.grid.size() as i32;
        while self.local_z < size {
            let position = Point3::new(self.local_x, self.local_y, self.local_z);
            let block_type = self.grid.get(position.x, position.y, position.z);
            self.advance();
            if !block_type.is_air() {
                return Some((position, block_type));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_air_and_margin() {
        let mut grid = VoxelGrid::new(3).unwrap();
        grid.set(-1, 0, 0, BlockType::STONE);
        grid.set(2, 0, 0, BlockType::DIRT);
        grid.set(0, 1, 2, BlockType::WATER);

        let visited: Vec<_> = ChunkBlockIterator::new(&grid).collect();
        assert_eq!(
            visited,
            vec![
                (Point3::new(2, 0, 0), BlockType::DIRT),
                (Point3::new(0, 1, 2), BlockType::WATER),
            ]
        );
    }

    #[test]
    fn empty_grid_yields_nothing() {
        let grid = VoxelGrid::new(2).unwrap();
        assert_eq!(ChunkBlockIterator::new(&grid).count(), 0);
    }
}
