#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! Procedural voxel terrain: seeded heightmap generation, face-culled chunk
//! meshing and camera-driven chunk streaming.
//!
//! ## Key Modules
//!
//! * `config` - `WorldConfig`, loadable from JSON
//! * `error` - configuration and generation errors
//! * `engine_state` - the engine: voxels, meshing, streaming, worker pool and
//!   the renderer boundary
//!
//! ## Architecture
//!
//! Every chunk is a pure function of the world seed and its coordinate: a
//! noise field shapes each column, the column is stratified into stone, dirt
//! and grass, low columns are flooded and dry ones may grow plants. Chunks are
//! meshed into separate solid, billboard and water buffers that any
//! [`MeshRenderer`](engine_state::rendering::MeshRenderer) can consume. The
//! [`World`](engine_state::voxels::world::World) keeps the chunks around the
//! camera resident and evicts the rest.
//!
//! ## Usage
//!
//! ```no_run
//! use cgmath::Point3;
//! use voxel_terrain::{config::WorldConfig, engine_state::EngineState};
//!
//! let mut engine = EngineState::headless(WorldConfig::default()).unwrap();
//! for frame in 0..120 {
//!     engine.tick(Point3::new(frame as f32, 32.0, 0.0));
//! }
//! ```

use std::path::PathBuf;

use cgmath::Point3;
use clap::Parser;
use log::info;
use web_time::Instant;

pub mod config;
pub mod engine_state;
pub mod error;

pub use config::WorldConfig;
pub use engine_state::EngineState;
pub use error::{ConfigError, GenerationError};

/// Command-line options of the headless flight.
#[derive(Parser, Debug, Clone)]
#[command(name = "voxel-terrain", about = "Streams voxel terrain around a flying camera")]
pub struct Args {
    /// JSON world configuration; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the world seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Override the render distance, in chunks
    #[arg(long)]
    pub render_distance: Option<i32>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub ticks: u32,

    /// Generate chunks on this many worker threads instead of inline
    #[arg(long)]
    pub workers: Option<usize>,

    /// Camera speed in voxels per frame
    #[arg(long, default_value_t = 0.5)]
    pub speed: f32,
}

impl Args {
    /// Loads the configured world and applies command-line overrides.
    pub fn world_config(&self) -> Result<WorldConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::from_json_file(path)?,
            None => WorldConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(render_distance) = self.render_distance {
            config.render_distance = render_distance;
        }
        if let Some(workers) = self.workers {
            config.worker_threads = workers;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Summary of a finished flight.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightSummary {
    pub frames: u64,
    pub resident_chunks: usize,
    pub chunks_generated: u64,
    pub chunks_evicted: u64,
    pub final_camera: Point3<f32>,
}

/// Camera position after `frame` frames: a diagonal glide at the chunk top.
fn camera_at(frame: u32, speed: f32, height: f32) -> Point3<f32> {
    let distance = frame as f32 * speed;
    Point3::new(distance, height, distance * 0.5)
}

/// Flies the camera across the terrain for `args.ticks` frames.
pub fn fly(args: &Args) -> Result<FlightSummary, ConfigError> {
    let config = args.world_config()?;
    let height = config.chunk_size as f32;
    let mut engine = EngineState::headless(config)?;

    let start = Instant::now();
    let mut camera = camera_at(0, args.speed, height);
    for frame in 0..args.ticks {
        camera = camera_at(frame, args.speed, height);
        engine.tick(camera);

        if frame % 60 == 59 {
            let stats = engine.world().stats();
            info!(
                "Frame {}: camera chunk {:?}, {} resident, {} queued, {} generated, {} evicted",
                frame + 1,
                engine.world().camera_chunk(),
                engine.world().resident_coordinates().len(),
                engine.world().pending_coordinates().len(),
                stats.generated,
                stats.evicted
            );
        }
    }

    let stats = engine.world().stats();
    info!(
        "Flew {} frames in {:?}; camera submerged: {}",
        engine.frames(),
        start.elapsed(),
        engine.world().is_submerged(camera)
    );

    Ok(FlightSummary {
        frames: engine.frames(),
        resident_chunks: engine.world().resident_coordinates().len(),
        chunks_generated: stats.generated,
        chunks_evicted: stats.evicted,
        final_camera: camera,
    })
}

/// Entry point of the binary: sets up logging, parses arguments and flies.
pub fn run() -> Result<FlightSummary, ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");
    let args = Args::parse();
    fly(&args)
}
