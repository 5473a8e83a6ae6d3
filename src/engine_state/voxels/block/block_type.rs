//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world and
//! the render category each one belongs to.
//!
//! Declaration order is kept stable because block types are stored as their
//! integer value, but nothing branches on that order: the mesher asks each
//! type for its [`RenderCategory`] instead.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// How a block type contributes geometry and occlusion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderCategory {
    /// Emits nothing and occludes nothing
    Empty,
    /// Full cube, occludes neighboring faces
    Solid,
    /// Partially transparent liquid, only its surface is drawn
    Fluid,
    /// Two crossed double-sided planes, never occludes and is never culled
    Billboard,
}

/// Enumerates all possible block types in the voxel world.
///
/// The `FromPrimitive` derive allows conversion back from the compact
/// integer stored in a voxel grid.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space.
    AIR,

    /// Short grass tuft scattered on dry ground.
    SHORT_GRASS,
    /// White flower.
    DAISY,
    /// Red tulip.
    TULIP,
    /// Yellow flower.
    DANDELION,
    /// Red flower.
    POPPY,

    /// Still water filling columns below the water level.
    WATER,

    /// Dirt topped with grass; the surface block of dry columns.
    GRASS,
    /// Plain dirt, between the stone core and the surface.
    DIRT,
    /// Bedrock core of every column.
    STONE,
    /// Sand.
    SAND,
    /// Log with bark on the sides and rings on top and bottom.
    WOOD,
}

impl BlockType {
    /// Number of block types.
    pub const COUNT: usize = 12;

    /// Flower variants the terrain generator picks from.
    pub const FLOWERS: [BlockType; 4] = [
        BlockType::DAISY,
        BlockType::TULIP,
        BlockType::DANDELION,
        BlockType::POPPY,
    ];

    /// Every block type in declaration order.
    pub fn all() -> [BlockType; Self::COUNT] {
        [
            BlockType::AIR,
            BlockType::SHORT_GRASS,
            BlockType::DAISY,
            BlockType::TULIP,
            BlockType::DANDELION,
            BlockType::POPPY,
            BlockType::WATER,
            BlockType::GRASS,
            BlockType::DIRT,
            BlockType::STONE,
            BlockType::SAND,
            BlockType::WOOD,
        ]
    }

    /// Decodes a stored block id, `None` if the id names no block type.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// The compact id stored in voxel grids.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// How this block type is meshed.
    pub fn render_category(self) -> RenderCategory {
        match self {
            BlockType::AIR => RenderCategory::Empty,
            BlockType::SHORT_GRASS
            | BlockType::DAISY
            | BlockType::TULIP
            | BlockType::DANDELION
            | BlockType::POPPY => RenderCategory::Billboard,
            BlockType::WATER => RenderCategory::Fluid,
            BlockType::GRASS
            | BlockType::DIRT
            | BlockType::STONE
            | BlockType::SAND
            | BlockType::WOOD => RenderCategory::Solid,
        }
    }

    /// Whether this is empty space.
    pub fn is_air(self) -> bool {
        self.render_category() == RenderCategory::Empty
    }

    /// Whether this is a full cube that hides the faces of its neighbors.
    pub fn is_solid(self) -> bool {
        self.render_category() == RenderCategory::Solid
    }

    /// Whether this is a liquid.
    pub fn is_fluid(self) -> bool {
        self.render_category() == RenderCategory::Fluid
    }

    /// Whether this is drawn as crossed planes.
    pub fn is_billboard(self) -> bool {
        self.render_category() == RenderCategory::Billboard
    }

    /// Picks a flower variant with the given generator.
    pub fn random_flower(rng: &mut fastrand::Rng) -> Self {
        Self::FLOWERS[rng.usize(..Self::FLOWERS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for block_type in BlockType::all() {
            assert_eq!(BlockType::from_id(block_type.id()), Some(block_type));
        }
        assert_eq!(BlockType::from_id(BlockType::COUNT as u8), None);
    }

    #[test]
    fn every_type_has_exactly_one_capability() {
        for block_type in BlockType::all() {
            let flags = [
                block_type.is_air(),
                block_type.is_solid(),
                block_type.is_fluid(),
                block_type.is_billboard(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{:?}", block_type);
        }
    }

    #[test]
    fn flowers_are_billboards() {
        assert!(BlockType::SHORT_GRASS.is_billboard());
        for flower in BlockType::FLOWERS {
            assert!(flower.is_billboard());
        }
        assert!(BlockType::WATER.is_fluid());
        assert!(!BlockType::WATER.is_solid());
    }

    #[test]
    fn random_flower_is_reproducible_for_a_seed() {
        let mut a = fastrand::Rng::with_seed(9);
        let mut b = fastrand::Rng::with_seed(9);
        for _ in 0..16 {
            let flower = BlockType::random_flower(&mut a);
            assert_eq!(flower, BlockType::random_flower(&mut b));
            assert!(BlockType::FLOWERS.contains(&flower));
        }
    }
}
