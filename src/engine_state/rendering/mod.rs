//! Rendering boundary of the voxel engine.
//!
//! The engine produces per-chunk mesh buffers; a [`MeshRenderer`] owns
//! whatever GPU (or in-memory) copies of them exist. The engine tells the
//! renderer when a chunk becomes resident and when it is evicted, and hands
//! it the resident chunks once per frame. Chunks are only borrowed for the
//! length of a `draw` call.
//!
//! Shadow state is an explicit [`ShadowResources`] value owned by the caller
//! and passed into every draw rather than a process-wide singleton.

use std::collections::HashMap;

use cgmath::{InnerSpace, Point2, Vector3};
use log::{debug, trace};

use crate::engine_state::voxels::chunk::Chunk;

pub mod chunk_index_state;
pub mod meshing;
pub mod vertex;

use chunk_index_state::ChunkIndexState;
use meshing::{ChunkMesh, MeshKind};

// Re-export commonly used types
pub use vertex::Vertex;

/// Description of the directional shadow map a renderer draws with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowResources {
    /// Edge length of the square depth map in texels
    pub resolution: u32,
    /// Unit direction the light travels in
    pub light_direction: Vector3<f32>,
}

impl ShadowResources {
    /// Creates shadow resources, normalising `light_direction`. A zero
    /// direction falls back to straight down.
    pub fn new(resolution: u32, light_direction: Vector3<f32>) -> Self {
        let light_direction = if light_direction.magnitude2() > 0.0 {
            light_direction.normalize()
        } else {
            Vector3::new(0.0, -1.0, 0.0)
        };
        ShadowResources {
            resolution: resolution.max(1),
            light_direction,
        }
    }
}

impl Default for ShadowResources {
    fn default() -> Self {
        ShadowResources::new(4096, Vector3::new(-0.3, -1.0, -0.5))
    }
}

/// What a single draw call submitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Chunks with uploaded geometry that were drawn
    pub chunks_drawn: usize,
    /// Quads across every drawn chunk and category
    pub quads_drawn: usize,
}

/// A consumer of chunk meshes.
pub trait MeshRenderer {
    /// Makes `mesh` drawable under `coordinate`, replacing any previous upload
    /// for that coordinate.
    fn upload_chunk(&mut self, coordinate: Point2<i32>, mesh: &ChunkMesh);

    /// Drops whatever is held for `coordinate`. Releasing an unknown
    /// coordinate is a no-op.
    fn release_chunk(&mut self, coordinate: Point2<i32>);

    /// Draws the given resident chunks.
    fn draw(
        &mut self,
        shadows: &ShadowResources,
        chunks: &mut dyn Iterator<Item = &Chunk>,
    ) -> FrameStats;

    /// Number of chunks currently uploaded.
    fn uploaded_count(&self) -> usize;
}

/// Per-chunk record of an upload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct UploadedMesh {
    slot: u32,
    solid_quads: usize,
    billboard_quads: usize,
    water_quads: usize,
}

impl UploadedMesh {
    fn quads(&self, kind: MeshKind) -> usize {
        match kind {
            MeshKind::Solid => self.solid_quads,
            MeshKind::Billboard => self.billboard_quads,
            MeshKind::Water => self.water_quads,
        }
    }

    fn total_quads(&self) -> usize {
        self.solid_quads + self.billboard_quads + self.water_quads
    }
}

/// A renderer with no GPU behind it.
///
/// Keeps slot assignments and quad counts for each uploaded chunk, which is
/// enough to drive the engine in headless runs and to observe what a real
/// renderer would have been asked to do.
#[derive(Debug)]
pub struct HeadlessRenderer {
    slots: ChunkIndexState,
    uploaded: HashMap<Point2<i32>, UploadedMesh>,
    frames_drawn: u64,
    last_frame: FrameStats,
}

impl HeadlessRenderer {
    /// Creates a renderer with room for `capacity` chunks before it grows.
    pub fn new(capacity: u32) -> Self {
        HeadlessRenderer {
            slots: ChunkIndexState::new(capacity),
            uploaded: HashMap::new(),
            frames_drawn: 0,
            last_frame: FrameStats::default(),
        }
    }

    pub fn is_uploaded(&self, coordinate: Point2<i32>) -> bool {
        self.uploaded.contains_key(&coordinate)
    }

    /// Slot assigned to `coordinate`, if it is uploaded.
    pub fn slot_of(&self, coordinate: Point2<i32>) -> Option<u32> {
        self.slots.get_index_for_position(coordinate)
    }

    /// Quads uploaded for `coordinate` in one category.
    pub fn quad_count(&self, coordinate: Point2<i32>, kind: MeshKind) -> Option<usize> {
        self.uploaded.get(&coordinate).map(|mesh| mesh.quads(kind))
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }
}

impl MeshRenderer for HeadlessRenderer {
    fn upload_chunk(&mut self, coordinate: Point2<i32>, mesh: &ChunkMesh) {
        let slot = match self.slots.load_chunk_position(coordinate) {
            Some(slot) => slot,
            None => {
                let additional = self.slots.capacity().max(1);
                debug!(
                    "Growing headless renderer from {} to {} slots",
                    self.slots.capacity(),
                    self.slots.capacity() + additional
                );
                self.slots.grow(additional);
                match self.slots.load_chunk_position(coordinate) {
                    Some(slot) => slot,
                    None => return,
                }
            }
        };

        let uploaded = UploadedMesh {
            slot,
            solid_quads: mesh.solid.quad_count(),
            billboard_quads: mesh.billboard.quad_count(),
            water_quads: mesh.water.quad_count(),
        };
        trace!("Uploaded chunk {:?} into slot {}", coordinate, slot);
        self.uploaded.insert(coordinate, uploaded);
    }

    fn release_chunk(&mut self, coordinate: Point2<i32>) {
        if self.uploaded.remove(&coordinate).is_some() {
            self.slots.unload_chunk_position(coordinate);
            trace!("Released chunk {:?}", coordinate);
        }
    }

    fn draw(
        &mut self,
        shadows: &ShadowResources,
        chunks: &mut dyn Iterator<Item = &Chunk>,
    ) -> FrameStats {
        let mut frame = FrameStats::default();
        for chunk in chunks {
            if let Some(mesh) = self.uploaded.get(&chunk.coordinate) {
                frame.chunks_drawn += 1;
                frame.quads_drawn += mesh.total_quads();
            }
        }
        self.frames_drawn += 1;
        self.last_frame = frame;
        trace!(
            "Frame {}: {} chunks, {} quads, {}px shadow map",
            self.frames_drawn,
            frame.chunks_drawn,
            frame.quads_drawn,
            shadows.resolution
        );
        frame
    }

    fn uploaded_count(&self) -> usize {
        self.uploaded.len()
    }
}
