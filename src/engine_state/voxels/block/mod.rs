//! # Block Module
//!
//! Block type definitions, block faces, and the atlas coordinates each block
//! type is textured with.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to store block types in a voxel grid.
pub type BlockTypeSize = u8;

/// Width of the texture atlas in cells.
pub const ATLAS_TILES_WIDE: f32 = 64.0;
/// Height of the texture atlas in cells.
pub const ATLAS_TILES_HIGH: f32 = 32.0;
/// Width of one atlas cell in UV units.
pub const ATLAS_TILE_U: f32 = 1.0 / ATLAS_TILES_WIDE;
/// Height of one atlas cell in UV units.
pub const ATLAS_TILE_V: f32 = 1.0 / ATLAS_TILES_HIGH;

/// UV origins, one per face, into the shared texture atlas.
///
/// Flora only populate `front` and `back`, water only `top`; the remaining
/// faces of those types are left at the origin cell and never sampled.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextureMapping {
    /// Face looking toward -X
    pub left: [f32; 2],
    /// Face looking toward +X
    pub right: [f32; 2],
    /// Face looking toward +Y
    pub top: [f32; 2],
    /// Face looking toward -Y
    pub bottom: [f32; 2],
    /// Face looking toward -Z, first billboard plane
    pub front: [f32; 2],
    /// Face looking toward +Z, second billboard plane
    pub back: [f32; 2],
}

/// Converts an atlas cell (column, row) into its UV origin.
fn cell(column: u32, row: u32) -> [f32; 2] {
    [column as f32 / ATLAS_TILES_WIDE, row as f32 / ATLAS_TILES_HIGH]
}

impl TextureMapping {
    /// Same cell on every face.
    fn uniform(column: u32, row: u32) -> Self {
        let uv = cell(column, row);
        TextureMapping {
            left: uv,
            right: uv,
            top: uv,
            bottom: uv,
            front: uv,
            back: uv,
        }
    }

    /// Distinct top and bottom cells around a shared side cell.
    fn sided(side: (u32, u32), top: (u32, u32), bottom: (u32, u32)) -> Self {
        let side = cell(side.0, side.1);
        TextureMapping {
            left: side,
            right: side,
            top: cell(top.0, top.1),
            bottom: cell(bottom.0, bottom.1),
            front: side,
            back: side,
        }
    }

    /// Billboard planes share one cell.
    fn billboard(column: u32, row: u32) -> Self {
        let uv = cell(column, row);
        TextureMapping {
            left: [0.0, 0.0],
            right: [0.0, 0.0],
            top: [0.0, 0.0],
            bottom: [0.0, 0.0],
            front: uv,
            back: uv,
        }
    }

    /// Fluids only ever show their surface.
    fn surface(column: u32, row: u32) -> Self {
        TextureMapping {
            left: [0.0, 0.0],
            right: [0.0, 0.0],
            top: cell(column, row),
            bottom: [0.0, 0.0],
            front: [0.0, 0.0],
            back: [0.0, 0.0],
        }
    }
}

impl BlockType {
    /// Atlas coordinates for this block type, `None` for air.
    pub fn texture_mapping(self) -> Option<TextureMapping> {
        let mapping = match self {
            BlockType::AIR => return None,
            BlockType::SHORT_GRASS => TextureMapping::billboard(10, 7),
            BlockType::DAISY => TextureMapping::billboard(29, 13),
            BlockType::TULIP => TextureMapping::billboard(17, 12),
            BlockType::DANDELION => TextureMapping::billboard(18, 28),
            BlockType::POPPY => TextureMapping::billboard(21, 11),
            BlockType::WATER => TextureMapping::surface(3, 27),
            BlockType::GRASS => TextureMapping::sided((25, 23), (11, 14), (21, 18)),
            BlockType::DIRT => TextureMapping::uniform(21, 18),
            BlockType::STONE => TextureMapping::uniform(6, 5),
            BlockType::SAND => TextureMapping::uniform(18, 6),
            BlockType::WOOD => TextureMapping::sided((20, 10), (21, 10), (21, 10)),
        };
        Some(mapping)
    }
}
