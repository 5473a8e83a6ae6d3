//! Face-culled meshing of a voxel grid into solid, billboard and water
//! buffers.

use cgmath::Point3;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::RenderCategory},
    chunk::{chunk_iteration::ChunkBlockIterator, voxel_grid::VoxelGrid},
};

use super::{
    face::{billboard_quads, cube_face},
    mesh::ChunkMesh,
};

/// Switches that change what the mesher emits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MesherOptions {
    /// Emit downward solid faces. Off by default since the camera never sees
    /// terrain from below.
    pub emit_bottom_faces: bool,
}

/// Builds the render buffers for `grid`, whose local `(0, 0, 0)` sits at the
/// world position `origin`.
///
/// Solid faces are culled against solid neighbors, margin columns included,
/// so faces on a chunk border are only emitted when the neighboring chunk is
/// open there. Output depends only on the grid, origin and options.
pub fn mesh_grid(grid: &VoxelGrid, origin: Point3<i32>, options: MesherOptions) -> ChunkMesh {
    let mut mesh = ChunkMesh::new();

    for (local, block_type) in ChunkBlockIterator::new(grid) {
        let Some(mapping) = block_type.texture_mapping() else {
            continue;
        };
        let corner = Point3::new(
            (origin.x + local.x) as f32,
            (origin.y + local.y) as f32,
            (origin.z + local.z) as f32,
        );

        match block_type.render_category() {
            RenderCategory::Solid => {
                for side in BlockSide::all() {
                    if side == BlockSide::BOTTOM && !options.emit_bottom_faces {
                        continue;
                    }
                    let neighbor = local + side.offset();
                    if grid.get(neighbor.x, neighbor.y, neighbor.z).is_solid() {
                        continue;
                    }
                    mesh.solid
                        .push_quad(cube_face(corner, side, side.texture_origin(&mapping)));
                }
            }
            RenderCategory::Fluid => {
                if !grid.get(local.x, local.y + 1, local.z).is_fluid() {
                    mesh.water
                        .push_quad(cube_face(corner, BlockSide::TOP, mapping.top));
                }
            }
            RenderCategory::Billboard => {
                for quad in billboard_quads(corner, mapping.front, mapping.back) {
                    mesh.billboard.push_quad(quad);
                }
            }
            RenderCategory::Empty => {}
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::rendering::vertex::FLOATS_PER_VERTEX;
    use crate::engine_state::voxels::block::block_type::BlockType;

    fn grid_with(blocks: &[((i32, i32, i32), BlockType)]) -> VoxelGrid {
        let mut grid = VoxelGrid::new(4).unwrap();
        for &((x, y, z), block_type) in blocks {
            grid.set(x, y, z, block_type);
        }
        grid
    }

    fn origin() -> Point3<i32> {
        Point3::new(0, 0, 0)
    }

    #[test]
    fn lone_block_skips_bottom_by_default() {
        let grid = grid_with(&[((1, 1, 1), BlockType::STONE)]);
        let mesh = mesh_grid(&grid, origin(), MesherOptions::default());
        assert_eq!(mesh.solid.quad_count(), 5);
        assert!(mesh.billboard.is_empty());
        assert!(mesh.water.is_empty());

        let options = MesherOptions {
            emit_bottom_faces: true,
        };
        let mesh = mesh_grid(&grid, origin(), options);
        assert_eq!(mesh.solid.quad_count(), 6);
    }

    #[test]
    fn shared_faces_are_culled() {
        let grid = grid_with(&[
            ((1, 1, 1), BlockType::STONE),
            ((2, 1, 1), BlockType::DIRT),
        ]);
        let mesh = mesh_grid(&grid, origin(), MesherOptions::default());
        assert_eq!(mesh.solid.quad_count(), 8);
    }

    #[test]
    fn margin_neighbors_cull_border_faces() {
        let open = grid_with(&[((3, 0, 0), BlockType::STONE)]);
        let closed = grid_with(&[
            ((3, 0, 0), BlockType::STONE),
            ((4, 0, 0), BlockType::STONE),
        ]);
        let open_mesh = mesh_grid(&open, origin(), MesherOptions::default());
        let closed_mesh = mesh_grid(&closed, origin(), MesherOptions::default());
        assert_eq!(open_mesh.solid.quad_count(), 5);
        assert_eq!(closed_mesh.solid.quad_count(), 4);
    }

    #[test]
    fn faces_next_to_flora_and_water_stay() {
        let grid = grid_with(&[
            ((1, 0, 1), BlockType::GRASS),
            ((1, 1, 1), BlockType::POPPY),
            ((2, 0, 1), BlockType::WATER),
        ]);
        let mesh = mesh_grid(&grid, origin(), MesherOptions::default());
        assert_eq!(mesh.solid.quad_count(), 5);
        assert_eq!(mesh.billboard.quad_count(), 4);
        assert_eq!(mesh.water.quad_count(), 1);
    }

    #[test]
    fn water_column_only_shows_its_surface() {
        let grid = grid_with(&[
            ((0, 0, 0), BlockType::WATER),
            ((0, 1, 0), BlockType::WATER),
            ((0, 2, 0), BlockType::WATER),
        ]);
        let mesh = mesh_grid(&grid, origin(), MesherOptions::default());
        assert_eq!(mesh.water.quad_count(), 1);
        for vertex in &mesh.water.vertices {
            assert_eq!(vertex.position[1], 3.0);
            assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn positions_are_world_space() {
        let grid = grid_with(&[((0, 0, 0), BlockType::DAISY)]);
        let mesh = mesh_grid(&grid, Point3::new(32, 0, -64), MesherOptions::default());
        for vertex in &mesh.billboard.vertices {
            assert!((32.0..=33.0).contains(&vertex.position[0]));
            assert!((-64.0..=-63.0).contains(&vertex.position[2]));
        }
    }

    #[test]
    fn buffers_stay_consistent() {
        let grid = grid_with(&[
            ((0, 0, 0), BlockType::STONE),
            ((0, 1, 0), BlockType::SHORT_GRASS),
            ((3, 3, 3), BlockType::WATER),
            ((2, 2, 2), BlockType::WOOD),
        ]);
        let mesh = mesh_grid(&grid, origin(), MesherOptions::default());
        for buffer in [&mesh.solid, &mesh.billboard, &mesh.water] {
            assert_eq!(buffer.as_floats().len() % FLOATS_PER_VERTEX, 0);
            assert_eq!(buffer.vertices.len(), buffer.quad_count() * 4);
            assert_eq!(buffer.indices.len(), buffer.quad_count() * 6);
            assert!(buffer
                .indices
                .iter()
                .all(|&index| (index as usize) < buffer.vertices.len()));
        }
    }

    #[test]
    fn meshing_is_deterministic() {
        let grid = grid_with(&[
            ((0, 0, 0), BlockType::STONE),
            ((1, 0, 0), BlockType::TULIP),
            ((2, 0, 0), BlockType::WATER),
        ]);
        let first = mesh_grid(&grid, origin(), MesherOptions::default());
        let second = mesh_grid(&grid, origin(), MesherOptions::default());
        assert_eq!(first, second);
    }
}
