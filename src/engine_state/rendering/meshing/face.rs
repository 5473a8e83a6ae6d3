//! Quad templates for cube faces and billboard planes.
//!
//! Each template lists four corners as an offset from the voxel's minimum
//! corner plus the UV step (0 or 1 atlas cells) of that corner. Corners wind
//! so that the triangles (0, 1, 2) and (0, 2, 3) cover the quad.

use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::block::{block_side::BlockSide, ATLAS_TILE_U, ATLAS_TILE_V};

use super::super::vertex::Vertex;

/// One corner of a quad template: offset from the voxel corner and UV step.
type Corner = ([f32; 3], [f32; 2]);

const BOTTOM: [Corner; 4] = [
    ([1.0, 0.0, 0.0], [1.0, 0.0]),
    ([0.0, 0.0, 0.0], [0.0, 0.0]),
    ([0.0, 0.0, 1.0], [0.0, 1.0]),
    ([1.0, 0.0, 1.0], [1.0, 1.0]),
];

const TOP: [Corner; 4] = [
    ([0.0, 1.0, 0.0], [0.0, 0.0]),
    ([1.0, 1.0, 0.0], [1.0, 0.0]),
    ([1.0, 1.0, 1.0], [1.0, 1.0]),
    ([0.0, 1.0, 1.0], [0.0, 1.0]),
];

const LEFT: [Corner; 4] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0]),
    ([0.0, 0.0, 0.0], [0.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0, 1.0], [1.0, 1.0]),
];

const RIGHT: [Corner; 4] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0]),
    ([1.0, 0.0, 1.0], [1.0, 0.0]),
    ([1.0, 1.0, 1.0], [1.0, 1.0]),
    ([1.0, 1.0, 0.0], [0.0, 1.0]),
];

const FRONT: [Corner; 4] = [
    ([0.0, 0.0, 0.0], [0.0, 0.0]),
    ([1.0, 0.0, 0.0], [1.0, 0.0]),
    ([1.0, 1.0, 0.0], [1.0, 1.0]),
    ([0.0, 1.0, 0.0], [0.0, 1.0]),
];

const BACK: [Corner; 4] = [
    ([1.0, 0.0, 1.0], [1.0, 0.0]),
    ([0.0, 0.0, 1.0], [0.0, 0.0]),
    ([0.0, 1.0, 1.0], [0.0, 1.0]),
    ([1.0, 1.0, 1.0], [1.0, 1.0]),
];

/// The two diagonal planes of a billboard, each drawn from both sides.
/// The first plane runs corner (0,0) to (1,1) and samples the front cell,
/// the second runs (0,1) to (1,0) and samples the back cell.
const BILLBOARD: [([Corner; 4], [f32; 3], bool); 4] = [
    (
        [
            ([0.0, 0.0, 0.0], [0.0, 0.0]),
            ([1.0, 0.0, 1.0], [1.0, 0.0]),
            ([1.0, 1.0, 1.0], [1.0, 1.0]),
            ([0.0, 1.0, 0.0], [0.0, 1.0]),
        ],
        [1.0, 0.0, -1.0],
        true,
    ),
    (
        [
            ([1.0, 0.0, 1.0], [1.0, 0.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0]),
            ([0.0, 1.0, 0.0], [0.0, 1.0]),
            ([1.0, 1.0, 1.0], [1.0, 1.0]),
        ],
        [-1.0, 0.0, 1.0],
        true,
    ),
    (
        [
            ([0.0, 0.0, 1.0], [0.0, 0.0]),
            ([1.0, 0.0, 0.0], [1.0, 0.0]),
            ([1.0, 1.0, 0.0], [1.0, 1.0]),
            ([0.0, 1.0, 1.0], [0.0, 1.0]),
        ],
        [-1.0, 0.0, -1.0],
        false,
    ),
    (
        [
            ([1.0, 0.0, 0.0], [1.0, 0.0]),
            ([0.0, 0.0, 1.0], [0.0, 0.0]),
            ([0.0, 1.0, 1.0], [0.0, 1.0]),
            ([1.0, 1.0, 0.0], [1.0, 1.0]),
        ],
        [1.0, 0.0, 1.0],
        false,
    ),
];

fn corners(side: BlockSide) -> &'static [Corner; 4] {
    match side {
        BlockSide::BOTTOM => &BOTTOM,
        BlockSide::TOP => &TOP,
        BlockSide::LEFT => &LEFT,
        BlockSide::RIGHT => &RIGHT,
        BlockSide::FRONT => &FRONT,
        BlockSide::BACK => &BACK,
    }
}

fn build_quad(
    voxel: Point3<f32>,
    template: &[Corner; 4],
    normal: Vector3<f32>,
    uv_origin: [f32; 2],
) -> [Vertex; 4] {
    template.map(|(offset, step)| {
        Vertex::new(
            voxel + Vector3::from(offset),
            normal,
            [
                uv_origin[0] + step[0] * ATLAS_TILE_U,
                uv_origin[1] + step[1] * ATLAS_TILE_V,
            ],
        )
    })
}

/// The quad covering `side` of the voxel whose minimum corner is `voxel`.
pub fn cube_face(voxel: Point3<f32>, side: BlockSide, uv_origin: [f32; 2]) -> [Vertex; 4] {
    build_quad(voxel, corners(side), side.normal(), uv_origin)
}

/// The four quads of a billboard: two crossed planes, both sides of each.
pub fn billboard_quads(voxel: Point3<f32>, front_uv: [f32; 2], back_uv: [f32; 2]) -> [[Vertex; 4]; 4] {
    BILLBOARD.map(|(template, normal, uses_front)| {
        let normal = Vector3::from(normal) * std::f32::consts::FRAC_1_SQRT_2;
        let uv = if uses_front { front_uv } else { back_uv };
        build_quad(voxel, &template, normal, uv)
    })
}
