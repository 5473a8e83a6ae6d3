//! Mesh generation for voxel rendering.
//!
//! Turns a chunk's voxel grid into GPU-friendly vertex and index buffers.
//! Every chunk yields three buffer pairs, one per render category:
//! 1. `solid`: opaque cube faces, culled against solid neighbors
//! 2. `billboard`: crossed double-sided planes for flora, never culled
//! 3. `water`: flat surfaces on top of water columns
//!
//! # Architecture
//! - `face`: quad templates for cube faces and billboard planes
//! - `mesh`: `MeshBuffer` and `ChunkMesh` containers
//! - `mesher`: the culling walk over a grid

mod face;
mod mesh;
mod mesher;

pub use mesh::{ChunkMesh, MeshBuffer, MeshKind};
pub use mesher::{mesh_grid, MesherOptions};
