//! # Engine State Module
//!
//! The per-frame driver of the terrain engine.
//!
//! ## Key Components
//!
//! * `EngineState` - owns the world, the optional worker pool, the shadow
//!   resources and the renderer, and ticks them in order
//! * `rendering` - mesh buffers and the renderer boundary
//! * `task_management` - the worker pool
//! * `voxels` - blocks, chunks, terrain generation and world streaming
//!
//! ## Frame Order
//!
//! 1. Generate chunks: synchronously through `World::update`, or by applying
//!    finished worker results and publishing new tasks
//! 2. Release evicted chunks from the renderer
//! 3. Upload chunks that became resident
//! 4. Draw every resident chunk

use cgmath::Point3;
use log::{debug, info, trace};
use web_time::Instant;

use crate::config::WorldConfig;
use crate::error::ConfigError;

pub mod rendering;
pub mod task_management;
pub mod voxels;

use rendering::{
    chunk_index_state::ChunkIndexState, FrameStats, HeadlessRenderer, MeshRenderer,
    ShadowResources,
};
use task_management::TaskManager;
use voxels::{tasks::chunk_generation_task::ChunkGenerationTask, world::World};

/// What one engine tick did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Chunks handed to the renderer this tick
    pub uploaded: usize,
    /// Chunks released from the renderer this tick
    pub released: usize,
    /// What the draw call submitted
    pub frame: FrameStats,
}

/// The main state container for the terrain engine.
pub struct EngineState {
    config: WorldConfig,
    world: World,
    task_manager: Option<TaskManager>,
    shadows: ShadowResources,
    renderer: Box<dyn MeshRenderer>,
    frames: u64,
}

impl EngineState {
    /// Creates an engine drawing through `renderer`.
    ///
    /// A positive `worker_threads` in the config moves generation onto a
    /// worker pool of that size.
    pub fn new(config: WorldConfig, renderer: Box<dyn MeshRenderer>) -> Result<Self, ConfigError> {
        let world = World::new(&config)?;
        let task_manager = if config.worker_threads > 0 {
            Some(TaskManager::new(config.worker_threads))
        } else {
            None
        };

        info!(
            "Engine ready: chunk size {}, render distance {}, seed {}, {}",
            config.chunk_size,
            config.render_distance,
            config.seed,
            match &task_manager {
                Some(manager) => format!("{} workers", manager.worker_count()),
                None => "synchronous generation".to_string(),
            }
        );

        Ok(EngineState {
            config,
            world,
            task_manager,
            shadows: ShadowResources::default(),
            renderer,
            frames: 0,
        })
    }

    /// Creates an engine backed by a [`HeadlessRenderer`].
    pub fn headless(config: WorldConfig) -> Result<Self, ConfigError> {
        let capacity = ChunkIndexState::capacity_for_render_distance(config.render_distance);
        EngineState::new(config, Box::new(HeadlessRenderer::new(capacity)))
    }

    /// Runs one frame with the camera at `camera_position`.
    pub fn tick(&mut self, camera_position: Point3<f32>) -> FrameReport {
        let start = Instant::now();

        let evicted = match &mut self.task_manager {
            Some(task_manager) => {
                task_manager.process_completed_tasks(&mut self.world);
                let evicted = self.world.stream_around(camera_position);
                for coordinate in self.world.take_pending(self.world.chunks_per_tick()) {
                    task_manager.publish_task(Box::new(ChunkGenerationTask::new(
                        self.world.generator().clone(),
                        coordinate,
                        self.world.mesher_options(),
                    )));
                }
                task_manager.process_queued_tasks();
                evicted
            }
            None => self.world.update(camera_position).evicted,
        };

        let mut report = FrameReport {
            released: evicted.len(),
            ..FrameReport::default()
        };
        for coordinate in evicted {
            self.renderer.release_chunk(coordinate);
        }

        for coordinate in self.world.take_newly_resident() {
            if let Some(chunk) = self.world.chunk(coordinate) {
                self.renderer.upload_chunk(coordinate, &chunk.mesh);
                report.uploaded += 1;
            }
        }

        report.frame = self.renderer.draw(&self.shadows, &mut self.world.chunks());
        self.frames += 1;

        if report.uploaded > 0 || report.released > 0 {
            debug!(
                "Frame {}: uploaded {}, released {}, {} chunks drawn in {:?}",
                self.frames,
                report.uploaded,
                report.released,
                report.frame.chunks_drawn,
                start.elapsed()
            );
        } else {
            trace!("Frame {} in {:?}", self.frames, start.elapsed());
        }
        report
    }

    /// Changes the render distance for both the world and the config.
    pub fn set_render_distance(&mut self, render_distance: i32) -> Result<(), ConfigError> {
        self.world.set_render_distance(render_distance)?;
        self.config.render_distance = render_distance;
        Ok(())
    }

    /// Whether every desired chunk has been generated and handed over.
    pub fn is_settled(&self) -> bool {
        self.world.pending_coordinates().is_empty()
            && self.world.in_flight_count() == 0
            && self
                .task_manager
                .as_ref()
                .map_or(true, TaskManager::is_idle)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn renderer(&self) -> &dyn MeshRenderer {
        self.renderer.as_ref()
    }

    pub fn shadows(&self) -> &ShadowResources {
        &self.shadows
    }

    pub fn set_shadows(&mut self, shadows: ShadowResources) {
        self.shadows = shadows;
    }

    pub fn is_worker_mode(&self) -> bool {
        self.task_manager.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
