//! Mesh data structures for voxel rendering.
//!
//! A chunk produces three independent buffer pairs, one per render category,
//! so the renderer can draw opaque geometry, cut-out billboards and
//! translucent water in separate passes.

use super::super::vertex::{Vertex, FLOATS_PER_VERTEX};

/// Indices of one quad relative to its first vertex.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// A vertex buffer and the triangle indices into it.
///
/// Always holds whole quads: four vertices and six indices each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex data, four per quad
    pub vertices: Vec<Vertex>,
    /// Triangle indices into `vertices`, six per quad
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        MeshBuffer::default()
    }

    /// Appends a quad given as four corners in winding order.
    pub fn push_quad(&mut self, corners: [Vertex; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.indices.extend(QUAD_INDICES.iter().map(|index| base + index));
    }

    /// Appends every quad of `other`, rebasing its indices past the vertices
    /// already held.
    pub fn append_offset(&mut self, other: &MeshBuffer) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|index| base + index));
    }

    /// The vertices as a flat float array, eight floats per vertex.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of floats in [`MeshBuffer::as_floats`].
    pub fn float_count(&self) -> usize {
        self.vertices.len() * FLOATS_PER_VERTEX
    }

    /// Number of quads held.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / QUAD_INDICES.len()
    }

    /// Whether the buffer holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Which of a chunk's buffers a quad belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Opaque cube faces
    Solid,
    /// Crossed flora planes
    Billboard,
    /// Water surfaces
    Water,
}

impl MeshKind {
    /// All kinds in draw order.
    pub fn all() -> [MeshKind; 3] {
        [MeshKind::Solid, MeshKind::Billboard, MeshKind::Water]
    }
}

/// Render buffers of one chunk, split by category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub solid: MeshBuffer,
    pub billboard: MeshBuffer,
    pub water: MeshBuffer,
}

impl ChunkMesh {
    /// Creates a mesh with three empty buffers.
    pub fn new() -> Self {
        ChunkMesh::default()
    }

    pub fn buffer(&self, kind: MeshKind) -> &MeshBuffer {
        match kind {
            MeshKind::Solid => &self.solid,
            MeshKind::Billboard => &self.billboard,
            MeshKind::Water => &self.water,
        }
    }

    pub fn buffer_mut(&mut self, kind: MeshKind) -> &mut MeshBuffer {
        match kind {
            MeshKind::Solid => &mut self.solid,
            MeshKind::Billboard => &mut self.billboard,
            MeshKind::Water => &mut self.water,
        }
    }

    /// Merges `other` into this mesh buffer by buffer.
    pub fn append_offset(&mut self, other: &ChunkMesh) {
        for kind in MeshKind::all() {
            self.buffer_mut(kind).append_offset(other.buffer(kind));
        }
    }

    /// Quads across all three buffers.
    pub fn quad_count(&self) -> usize {
        MeshKind::all()
            .into_iter()
            .map(|kind| self.buffer(kind).quad_count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        MeshKind::all()
            .into_iter()
            .all(|kind| self.buffer(kind).is_empty())
    }
}
