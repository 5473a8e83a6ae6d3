//! # Block Side Module
//!
//! This module defines the six faces of a voxel block, the direction each one
//! looks toward, and which atlas cell textures it.

use cgmath::Vector3;

use super::TextureMapping;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants fix the order faces are visited in while meshing, which
/// keeps mesh output stable between runs.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The bottom face (facing negative Y)
    BOTTOM = 0,

    /// The top face (facing positive Y)
    TOP = 1,

    /// The left face (facing negative X)
    LEFT = 2,

    /// The right face (facing positive X)
    RIGHT = 3,

    /// The front face (facing negative Z)
    FRONT = 4,

    /// The back face (facing positive Z)
    BACK = 5,
}

impl BlockSide {
    /// Returns all six block faces in meshing order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// Offset to the voxel this face looks at.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::FRONT => Vector3::new(0, 0, -1),
            BlockSide::BACK => Vector3::new(0, 0, 1),
        }
    }

    /// Outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        self.offset().cast::<f32>().unwrap_or(Vector3::new(0.0, 0.0, 0.0))
    }

    /// The atlas cell this face samples from a block's mapping.
    pub fn texture_origin(self, mapping: &TextureMapping) -> [f32; 2] {
        match self {
            BlockSide::BOTTOM => mapping.bottom,
            BlockSide::TOP => mapping.top,
            BlockSide::LEFT => mapping.left,
            BlockSide::RIGHT => mapping.right,
            BlockSide::FRONT => mapping.front,
            BlockSide::BACK => mapping.back,
        }
    }
}
