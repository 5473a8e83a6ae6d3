//! # Voxel Task System
//!
//! Tasks related to voxel world generation. They run on the worker pool and
//! hand finished chunks back to the world.

pub mod chunk_generation_task;
