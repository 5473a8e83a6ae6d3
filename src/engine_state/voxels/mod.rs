//! # Voxel Engine Core
//!
//! This module contains the voxel side of the engine: what a block is, how
//! terrain is generated chunk by chunk, and how chunks stream in and out
//! around the camera.
//!
//! ## Architecture
//!
//! * **Block**: block types, their capabilities, faces and atlas cells
//! * **NoiseField**: the seeded multi-octave heightmap source
//! * **Chunk**: voxel grids with a ghost margin, terrain fill and the meshed chunk
//! * **World**: the chunk store and streaming state machine
//! * **Tasks**: chunk generation on the worker pool
//!
//! ## Data Flow
//!
//! 1. The world queues chunk coordinates around the camera
//! 2. Queued coordinates are generated (voxel fill, then meshing)
//! 3. Generated chunks are inserted into the store and handed to the renderer
//! 4. Chunks that fall out of range are evicted
//!
//! ## Thread Safety
//!
//! Generation is a pure function of the seed and the chunk coordinate, so it
//! may run on any thread. The store itself is only touched by its owner.

pub mod block;
pub mod chunk;
pub mod noise_field;
pub mod tasks;
pub mod world;
