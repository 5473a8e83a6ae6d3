//! Vertex layout shared between the mesher and whatever uploads its buffers.
//!
//! A vertex is eight consecutive `f32`s: position, outward normal, atlas UV.
//! The struct is `Pod`, so a vertex slice can be handed to a GPU API as a flat
//! float array without copying.

use cgmath::{Point3, Vector3};

/// Number of `f32`s per vertex.
pub const FLOATS_PER_VERTEX: usize = 8;

/// A vertex of a chunk mesh.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes), world space
/// - Normal: 3x f32 (12 bytes)
/// - Texture Coordinates: 2x f32 (8 bytes), atlas UV
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position
    pub position: [f32; 3],
    /// Outward unit normal
    pub normal: [f32; 3],
    /// Atlas UV coordinates
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, tex_coords: [f32; 2]) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
            tex_coords,
        }
    }
}
