//! # Chunk Generation Task
//!
//! This module defines the `ChunkGenerationTask`, which fills and meshes one
//! chunk on a worker thread. Generation only reads the shared terrain
//! generator, so any number of these can run at once; the finished chunk is
//! inserted into the world back on the owning thread.

use std::sync::Arc;

use cgmath::Point2;
use log::warn;

use crate::{
    engine_state::{
        rendering::meshing::MesherOptions,
        task_management::task::{Task, TaskResult},
        voxels::{
            chunk::{chunk_creation::TerrainGenerator, Chunk},
            world::World,
        },
    },
    error::GenerationError,
};

/// A task that generates one chunk.
pub struct ChunkGenerationTask {
    /// Shared, immutable terrain generator
    generator: Arc<TerrainGenerator>,
    /// The chunk coordinate to generate
    coordinate: Point2<i32>,
    options: MesherOptions,
}

impl ChunkGenerationTask {
    /// Creates a new chunk generation task.
    pub fn new(
        generator: Arc<TerrainGenerator>,
        coordinate: Point2<i32>,
        options: MesherOptions,
    ) -> Self {
        ChunkGenerationTask {
            generator,
            coordinate,
            options,
        }
    }
}

impl Task for ChunkGenerationTask {
    fn process(&self) -> Box<dyn TaskResult + Send> {
        Box::new(ChunkGenerationTaskResult {
            coordinate: self.coordinate,
            chunk: Chunk::generate(&self.generator, self.coordinate, self.options),
        })
    }
}

/// The result of a chunk generation task.
pub struct ChunkGenerationTaskResult {
    coordinate: Point2<i32>,
    chunk: Result<Chunk, GenerationError>,
}

impl TaskResult for ChunkGenerationTaskResult {
    /// Inserts the chunk, or clears its in-flight mark if generation failed.
    fn handle_result(self: Box<Self>, world: &mut World) -> Vec<Box<dyn Task + Send>> {
        match self.chunk {
            Ok(chunk) => {
                world.insert_generated(chunk);
            }
            Err(error) => {
                warn!("Skipping chunk {:?}: {}", self.coordinate, error);
                world.generation_failed(self.coordinate);
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    fn world() -> World {
        World::new(&WorldConfig {
            chunk_size: 8,
            ..WorldConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn result_inserts_in_flight_chunk() {
        let mut world = world();
        let coordinate = world.take_pending(1)[0];
        let task = ChunkGenerationTask::new(
            world.generator().clone(),
            coordinate,
            world.mesher_options(),
        );

        let follow_up = task.process().handle_result(&mut world);
        assert!(follow_up.is_empty());
        assert!(world.chunk(coordinate).is_some());
        assert!(!world.is_in_flight(coordinate));
    }

    #[test]
    fn failed_generation_clears_in_flight() {
        let mut world = world();
        let coordinate = world.take_pending(1)[0];
        let result = Box::new(ChunkGenerationTaskResult {
            coordinate,
            chunk: Err(GenerationError::out_of_range(coordinate)),
        });

        result.handle_result(&mut world);
        assert!(world.chunk(coordinate).is_none());
        assert!(!world.is_in_flight(coordinate));
        assert_eq!(world.stats().failed, 1);
    }
}
