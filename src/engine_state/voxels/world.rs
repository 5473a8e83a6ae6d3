//! # World Module
//!
//! This module provides the `World` struct, the sole owner of every resident
//! chunk and the state machine that streams chunks in and out around the
//! camera.
//!
//! ## Chunk Lifecycle
//!
//! Each chunk coordinate is in exactly one of these states:
//! - *Absent*: nothing is known about it
//! - *Queued*: waiting in the FIFO pending queue
//! - *In flight*: handed to a worker, result not yet applied
//! - *Generated*: resident in the store with its mesh
//!
//! Generated chunks only ever leave through eviction; nothing is regenerated
//! in place.
//!
//! ## Streaming
//!
//! The desired set is every coordinate within Chebyshev distance
//! `render_distance - 1` of the camera's chunk, a `(2r - 1)²` square. When
//! the camera crosses into another chunk (or the render distance changes)
//! missing desired coordinates are queued and resident chunks at distance
//! `>= render_distance` are evicted.
//!
//! ## Performance Considerations
//!
//! - Chunk lookup is O(1) using a hash map
//! - Generation per tick is capped by `chunks_per_tick`
//! - Queued coordinates that fell out of the desired set can be dropped
//!   without generating them

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use cgmath::{Point2, Point3};
use log::{debug, warn};

use crate::config::{validate_render_distance, WorldConfig};
use crate::engine_state::rendering::meshing::{ChunkMesh, MesherOptions};
use crate::error::ConfigError;

use super::block::block_type::BlockType;
use super::chunk::{chunk_creation::TerrainGenerator, Chunk};

/// Chunk coordinate containing a world position, flooring toward negative
/// infinity on both axes.
pub fn chunk_coordinate_of(position: Point3<f32>, chunk_size: u32) -> Point2<i32> {
    let size = chunk_size.max(1) as f32;
    Point2::new(
        (position.x / size).floor() as i32,
        (position.z / size).floor() as i32,
    )
}

/// Chebyshev (chessboard) distance between two chunk coordinates.
pub fn chebyshev_distance(a: Point2<i32>, b: Point2<i32>) -> i64 {
    let dx = (a.x as i64 - b.x as i64).abs();
    let dz = (a.y as i64 - b.y as i64).abs();
    dx.max(dz)
}

/// Running totals over the lifetime of a world.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Chunks generated and inserted
    pub generated: u64,
    /// Chunks removed by eviction
    pub evicted: u64,
    /// Queued coordinates pruned for being out of range when dequeued
    pub skipped: u64,
    /// Coordinates whose generation failed
    pub failed: u64,
    /// Generated chunks discarded because they were no longer wanted
    pub rejected: u64,
}

/// What one call to [`World::update`] changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Coordinates that became resident
    pub generated: Vec<Point2<i32>>,
    /// Coordinates evicted from the store
    pub evicted: Vec<Point2<i32>>,
    /// Queued coordinates pruned this tick, counted like
    /// [`WorldStats::skipped`]
    pub skipped: usize,
}

/// Represents a streamed voxel world composed of generated chunks.
pub struct World {
    generator: Arc<TerrainGenerator>,
    mesher_options: MesherOptions,
    render_distance: i32,
    chunks_per_tick: usize,
    prune_stale_requests: bool,

    chunks: HashMap<Point2<i32>, Chunk>,
    pending: VecDeque<Point2<i32>>,
    pending_set: HashSet<Point2<i32>>,
    in_flight: HashSet<Point2<i32>>,
    newly_resident: Vec<Point2<i32>>,

    camera_chunk: Point2<i32>,
    restream: bool,
    stats: WorldStats,
}

impl World {
    /// Creates a world and queues every chunk around the origin chunk.
    ///
    /// # Errors
    /// Returns the first problem [`WorldConfig::validate`] finds.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        let generator = Arc::new(TerrainGenerator::new(config)?);
        let mut world = World {
            generator,
            mesher_options: MesherOptions {
                emit_bottom_faces: config.emit_bottom_faces,
            },
            render_distance: config.render_distance,
            chunks_per_tick: config.chunks_per_tick,
            prune_stale_requests: config.prune_stale_requests,
            chunks: HashMap::new(),
            pending: VecDeque::new(),
            pending_set: HashSet::new(),
            in_flight: HashSet::new(),
            newly_resident: Vec::new(),
            camera_chunk: Point2::new(0, 0),
            restream: false,
            stats: WorldStats::default(),
        };
        world.enqueue_desired();
        debug!(
            "Created world with seed {}, {} chunks queued",
            world.generator.seed(),
            world.pending.len()
        );
        Ok(world)
    }

    /// Advances streaming by one tick.
    ///
    /// Generates up to `chunks_per_tick` queued chunks on the calling thread,
    /// then re-centres the desired set on the camera. A chunk that fails to
    /// generate is logged and skipped. With pruning off, stale coordinates
    /// still cost a generation but the result is discarded, so the store
    /// never holds a chunk outside the render distance.
    pub fn update(&mut self, camera_position: Point3<f32>) -> TickReport {
        let mut report = TickReport::default();
        let pruned_before = self.stats.skipped;

        let mut budget = self.chunks_per_tick;
        while budget > 0 {
            let Some(coordinate) = self.pop_pending() else {
                break;
            };
            if !self.should_generate(coordinate) {
                continue;
            }
            budget -= 1;

            match Chunk::generate(&self.generator, coordinate, self.mesher_options) {
                Ok(chunk) if !self.is_desired(coordinate) => {
                    debug!("Discarding stale chunk {:?}", chunk.coordinate);
                    self.stats.rejected += 1;
                }
                Ok(chunk) => {
                    self.insert(chunk);
                    report.generated.push(coordinate);
                }
                Err(error) => {
                    // Not re-queued; see `generation_failed`.
                    warn!("Skipping chunk {:?}: {}", coordinate, error);
                    self.stats.failed += 1;
                }
            }
        }

        report.skipped = (self.stats.skipped - pruned_before) as usize;
        report.evicted = self.stream_around(camera_position);
        report
    }

    /// Re-centres the desired set on the camera's chunk, returning the
    /// evicted coordinates. Does nothing unless the camera changed chunk or
    /// the render distance changed since the last call.
    pub fn stream_around(&mut self, camera_position: Point3<f32>) -> Vec<Point2<i32>> {
        let camera_chunk = chunk_coordinate_of(camera_position, self.generator.chunk_size());
        if camera_chunk == self.camera_chunk && !self.restream {
            return Vec::new();
        }
        self.camera_chunk = camera_chunk;
        self.restream = false;

        let queued_before = self.pending.len();
        self.enqueue_desired();

        let mut evicted: Vec<Point2<i32>> = self
            .chunks
            .keys()
            .copied()
            .filter(|&coordinate| !self.is_desired(coordinate))
            .collect();
        evicted.sort_by_key(|coordinate| (coordinate.y, coordinate.x));
        for coordinate in &evicted {
            self.chunks.remove(coordinate);
        }
        self.newly_resident.retain(|coordinate| self.chunks.contains_key(coordinate));
        self.stats.evicted += evicted.len() as u64;

        debug!(
            "Camera in chunk {:?}: queued {}, evicted {}, {} resident",
            camera_chunk,
            self.pending.len() - queued_before,
            evicted.len(),
            self.chunks.len()
        );
        evicted
    }

    /// Dequeues up to `count` coordinates for generation elsewhere and marks
    /// them in flight. Stale coordinates are dropped on the way.
    pub fn take_pending(&mut self, count: usize) -> Vec<Point2<i32>> {
        let mut taken = Vec::with_capacity(count.min(self.pending.len()));
        while taken.len() < count {
            let Some(coordinate) = self.pop_pending() else {
                break;
            };
            if !self.should_generate(coordinate) {
                continue;
            }
            self.in_flight.insert(coordinate);
            taken.push(coordinate);
        }
        taken
    }

    /// Inserts a chunk generated off-thread. Returns `false`, dropping the
    /// chunk, if its coordinate was not in flight or is no longer desired.
    pub fn insert_generated(&mut self, chunk: Chunk) -> bool {
        let coordinate = chunk.coordinate;
        if !self.in_flight.remove(&coordinate) {
            debug!("Dropping chunk {:?}: not in flight", coordinate);
            self.stats.rejected += 1;
            return false;
        }
        if !self.is_desired(coordinate) || self.chunks.contains_key(&coordinate) {
            debug!("Dropping chunk {:?}: no longer wanted", coordinate);
            self.stats.rejected += 1;
            return false;
        }
        self.insert(chunk);
        true
    }

    /// Clears the in-flight mark of a coordinate whose generation failed.
    ///
    /// The coordinate is not queued again: the only failure is an
    /// out-of-range chunk, which would fail every time. It stays desired but
    /// absent until a later re-stream queues it anew.
    pub fn generation_failed(&mut self, coordinate: Point2<i32>) {
        if self.in_flight.remove(&coordinate) {
            self.stats.failed += 1;
        }
    }

    /// Changes the render distance; takes effect on the next streaming pass.
    ///
    /// # Errors
    /// Returns [`ConfigError::RenderDistanceTooSmall`] for values below one
    /// and [`ConfigError::RenderDistanceTooLarge`] above the configured cap.
    pub fn set_render_distance(&mut self, render_distance: i32) -> Result<(), ConfigError> {
        validate_render_distance(render_distance)?;
        if render_distance != self.render_distance {
            self.render_distance = render_distance;
            self.restream = true;
        }
        Ok(())
    }

    /// Block at a world position, `None` when its chunk is not resident or
    /// the height lies outside the chunk.
    pub fn get_block_type(&self, world_position: Point3<f32>) -> Option<BlockType> {
        let voxel = Point3::new(
            world_position.x.floor() as i32,
            world_position.y.floor() as i32,
            world_position.z.floor() as i32,
        );
        let size = self.generator.chunk_size() as i32;
        let coordinate = Point2::new(voxel.x.div_euclid(size), voxel.z.div_euclid(size));
        self.chunks.get(&coordinate)?.block_at_world(voxel)
    }

    /// Whether the position is inside water.
    pub fn is_submerged(&self, world_position: Point3<f32>) -> bool {
        self.get_block_type(world_position)
            .is_some_and(|block_type| block_type.is_fluid())
    }

    /// Every resident chunk's buffers merged into one mesh, in coordinate
    /// order.
    pub fn batched_mesh(&self) -> ChunkMesh {
        let mut batched = ChunkMesh::new();
        for coordinate in self.resident_coordinates() {
            if let Some(chunk) = self.chunks.get(&coordinate) {
                batched.append_offset(&chunk.mesh);
            }
        }
        batched
    }

    /// Coordinates that became resident since the last call.
    pub fn take_newly_resident(&mut self) -> Vec<Point2<i32>> {
        std::mem::take(&mut self.newly_resident)
    }

    pub fn chunk(&self, coordinate: Point2<i32>) -> Option<&Chunk> {
        self.chunks.get(&coordinate)
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Resident coordinates sorted by `z`, then `x`.
    pub fn resident_coordinates(&self) -> Vec<Point2<i32>> {
        let mut coordinates: Vec<_> = self.chunks.keys().copied().collect();
        coordinates.sort_by_key(|coordinate| (coordinate.y, coordinate.x));
        coordinates
    }

    /// Queued coordinates in the order they will be drained.
    pub fn pending_coordinates(&self) -> Vec<Point2<i32>> {
        self.pending.iter().copied().collect()
    }

    pub fn is_pending(&self, coordinate: Point2<i32>) -> bool {
        self.pending_set.contains(&coordinate)
    }

    pub fn is_in_flight(&self, coordinate: Point2<i32>) -> bool {
        self.in_flight.contains(&coordinate)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn stats(&self) -> WorldStats {
        self.stats
    }

    pub fn camera_chunk(&self) -> Point2<i32> {
        self.camera_chunk
    }

    pub fn render_distance(&self) -> i32 {
        self.render_distance
    }

    pub fn chunks_per_tick(&self) -> usize {
        self.chunks_per_tick
    }

    pub fn mesher_options(&self) -> MesherOptions {
        self.mesher_options
    }

    /// Shared handle to the terrain generator, for worker tasks.
    pub fn generator(&self) -> &Arc<TerrainGenerator> {
        &self.generator
    }

    /// Whether `coordinate` lies within the render distance of the camera
    /// chunk.
    pub fn is_desired(&self, coordinate: Point2<i32>) -> bool {
        chebyshev_distance(coordinate, self.camera_chunk) < self.render_distance as i64
    }

    fn should_generate(&mut self, coordinate: Point2<i32>) -> bool {
        if self.chunks.contains_key(&coordinate) || self.in_flight.contains(&coordinate) {
            return false;
        }
        if self.prune_stale_requests && !self.is_desired(coordinate) {
            debug!("Pruned stale request for chunk {:?}", coordinate);
            self.stats.skipped += 1;
            return false;
        }
        true
    }

    fn pop_pending(&mut self) -> Option<Point2<i32>> {
        let coordinate = self.pending.pop_front()?;
        self.pending_set.remove(&coordinate);
        Some(coordinate)
    }

    fn insert(&mut self, chunk: Chunk) {
        let coordinate = chunk.coordinate;
        self.chunks.insert(coordinate, chunk);
        self.newly_resident.push(coordinate);
        self.stats.generated += 1;
    }

    /// Queues every desired coordinate that is not already known.
    fn enqueue_desired(&mut self) {
        let reach = self.render_distance - 1;
        for dz in -reach..=reach {
            for dx in -reach..=reach {
                let (Some(x), Some(z)) = (
                    self.camera_chunk.x.checked_add(dx),
                    self.camera_chunk.y.checked_add(dz),
                ) else {
                    continue;
                };
                let coordinate = Point2::new(x, z);
                if self.chunks.contains_key(&coordinate)
                    || self.in_flight.contains(&coordinate)
                    || !self.pending_set.insert(coordinate)
                {
                    continue;
                }
                self.pending.push_back(coordinate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WorldConfig {
        WorldConfig {
            chunk_size: 8,
            render_distance: 2,
            water_level: 3,
            ..WorldConfig::default()
        }
    }

    fn drain(world: &mut World, camera: Point3<f32>) {
        for _ in 0..64 {
            world.update(camera);
        }
    }

    fn square(center: Point2<i32>, reach: i32) -> Vec<Point2<i32>> {
        let mut coordinates = Vec::new();
        for z in center.y - reach..=center.y + reach {
            for x in center.x - reach..=center.x + reach {
                coordinates.push(Point2::new(x, z));
            }
        }
        coordinates
    }

    #[test]
    fn floor_division_rounds_toward_negative_infinity() {
        assert_eq!(
            chunk_coordinate_of(Point3::new(-1.0, 0.0, 0.0), 32),
            Point2::new(-1, 0)
        );
        assert_eq!(
            chunk_coordinate_of(Point3::new(31.9, 0.0, -32.0), 32),
            Point2::new(0, -1)
        );
        assert_eq!(
            chunk_coordinate_of(Point3::new(-32.5, 5.0, 64.0), 32),
            Point2::new(-2, 2)
        );
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        assert_eq!(chebyshev_distance(Point2::new(0, 0), Point2::new(2, -1)), 2);
        assert_eq!(chebyshev_distance(Point2::new(-3, 4), Point2::new(-3, 4)), 0);
        assert_eq!(
            chebyshev_distance(Point2::new(i32::MIN, 0), Point2::new(i32::MAX, 0)),
            u32::MAX as i64
        );
    }

    #[test]
    fn construction_queues_origin_square() {
        let world = World::new(&config()).unwrap();
        assert_eq!(world.pending_coordinates(), square(Point2::new(0, 0), 1));
        assert!(world.resident_coordinates().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = WorldConfig {
            render_distance: 0,
            ..config()
        };
        assert!(matches!(
            World::new(&config),
            Err(ConfigError::RenderDistanceTooSmall(0))
        ));
    }

    #[test]
    fn one_chunk_per_tick_by_default() {
        let mut world = World::new(&config()).unwrap();
        let camera = Point3::new(0.0, 0.0, 0.0);
        let report = world.update(camera);
        assert_eq!(report.generated, vec![Point2::new(-1, -1)]);
        assert_eq!(world.pending_coordinates().len(), 8);
        assert_eq!(world.take_newly_resident(), vec![Point2::new(-1, -1)]);
        assert!(world.take_newly_resident().is_empty());
    }

    #[test]
    fn draining_yields_the_desired_square() {
        let mut world = World::new(&config()).unwrap();
        drain(&mut world, Point3::new(1.0, 0.0, 1.0));
        assert_eq!(world.resident_coordinates(), square(Point2::new(0, 0), 1));
        assert!(world.pending_coordinates().is_empty());
        assert_eq!(world.stats().generated, 9);
    }

    #[test]
    fn crossing_a_chunk_border_evicts_and_queues() {
        let mut world = World::new(&config()).unwrap();
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));

        let report = world.update(Point3::new(10.0, 0.0, 0.0));
        assert_eq!(
            report.evicted,
            vec![Point2::new(-1, -1), Point2::new(-1, 0), Point2::new(-1, 1)]
        );
        assert_eq!(
            world.pending_coordinates(),
            vec![Point2::new(2, -1), Point2::new(2, 0), Point2::new(2, 1)]
        );

        drain(&mut world, Point3::new(10.0, 0.0, 0.0));
        assert_eq!(world.resident_coordinates(), square(Point2::new(1, 0), 1));
    }

    #[test]
    fn staying_in_a_chunk_does_not_restream() {
        let mut world = World::new(&config()).unwrap();
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));
        let report = world.update(Point3::new(7.5, 3.0, 7.5));
        assert_eq!(report, TickReport::default());
    }

    #[test]
    fn stale_requests_are_pruned() {
        let mut world = World::new(&config()).unwrap();
        world.update(Point3::new(0.0, 0.0, 0.0));
        // Jump far away before the origin square finished generating.
        let far = Point3::new(800.0, 0.0, 0.0);
        world.update(far);
        drain(&mut world, far);

        assert_eq!(world.resident_coordinates(), square(Point2::new(100, 0), 1));
        assert_eq!(world.stats().generated, 2 + 9);
        assert!(world.stats().skipped >= 7);
    }

    #[test]
    fn stale_requests_are_generated_without_pruning() {
        let config = WorldConfig {
            prune_stale_requests: false,
            ..config()
        };
        let mut world = World::new(&config).unwrap();
        world.update(Point3::new(0.0, 0.0, 0.0));
        let far = Point3::new(800.0, 0.0, 0.0);
        for _ in 0..64 {
            let report = world.update(far);
            assert_eq!(report.skipped, 0);
            assert!(world
                .resident_coordinates()
                .iter()
                .all(|&coordinate| world.is_desired(coordinate)));
        }

        // The seven stale origin chunks were generated and thrown away.
        assert_eq!(world.camera_chunk(), Point2::new(100, 0));
        assert!(world.pending_coordinates().is_empty());
        assert_eq!(world.resident_coordinates(), square(Point2::new(100, 0), 1));
        assert_eq!(world.stats().generated, 2 + 9);
        assert_eq!(world.stats().rejected, 7);
        assert_eq!(world.stats().skipped, 0);
    }

    #[test]
    fn tick_reports_count_pruned_requests_like_the_totals() {
        let mut world = World::new(&config()).unwrap();
        world.update(Point3::new(0.0, 0.0, 0.0));
        let far = Point3::new(800.0, 0.0, 0.0);
        let mut reported = 0;
        for _ in 0..64 {
            reported += world.update(far).skipped as u64;
        }
        assert_eq!(reported, world.stats().skipped);
        assert!(reported >= 7);
    }

    #[test]
    fn queue_and_store_never_overlap() {
        let mut world = World::new(&config()).unwrap();
        let path = [0.0, 9.0, 17.0, 9.0, -3.0, -12.0, -3.0, 40.0];
        for (step, x) in path.iter().enumerate() {
            for _ in 0..step % 3 {
                world.update(Point3::new(*x, 0.0, -x));
                let pending = world.pending_coordinates();
                let unique: HashSet<_> = pending.iter().collect();
                assert_eq!(unique.len(), pending.len());
                for coordinate in &pending {
                    assert!(world.chunk(*coordinate).is_none());
                }
            }
        }
    }

    #[test]
    fn growing_render_distance_restreams() {
        let mut world = World::new(&config()).unwrap();
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));
        world.set_render_distance(3).unwrap();
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(world.resident_coordinates(), square(Point2::new(0, 0), 2));

        world.set_render_distance(1).unwrap();
        let report = world.update(Point3::new(0.0, 0.0, 0.0));
        assert_eq!(report.evicted.len(), 24);
        assert_eq!(world.resident_coordinates(), vec![Point2::new(0, 0)]);

        assert!(matches!(
            world.set_render_distance(0),
            Err(ConfigError::RenderDistanceTooSmall(0))
        ));
        assert!(matches!(
            world.set_render_distance(i32::MAX),
            Err(ConfigError::RenderDistanceTooLarge(i32::MAX))
        ));
        assert_eq!(world.render_distance(), 1);
    }

    #[test]
    fn oversized_chunks_fail_at_construction() {
        let config = WorldConfig {
            chunk_size: 3_000_000_000,
            ..config()
        };
        assert!(matches!(
            World::new(&config),
            Err(ConfigError::ChunkSizeTooLarge(3_000_000_000))
        ));
    }

    #[test]
    fn block_lookup_misses_are_none() {
        let mut world = World::new(&config()).unwrap();
        assert_eq!(world.get_block_type(Point3::new(0.5, 0.5, 0.5)), None);
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));

        let bedrock = world.get_block_type(Point3::new(-0.5, 0.0, -0.5));
        let expected = world
            .chunk(Point2::new(-1, -1))
            .map(|chunk| chunk.grid.get(7, 0, 7));
        assert_eq!(bedrock, expected);
        assert_eq!(world.get_block_type(Point3::new(0.5, -1.0, 0.5)), None);
        assert_eq!(world.get_block_type(Point3::new(0.5, 8.0, 0.5)), None);
        assert_eq!(world.get_block_type(Point3::new(100.0, 1.0, 0.5)), None);
    }

    #[test]
    fn submerged_follows_water() {
        let mut world = World::new(&config()).unwrap();
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));
        for chunk in world.chunks() {
            for (local, block_type) in
                crate::engine_state::voxels::chunk::chunk_iteration::ChunkBlockIterator::new(
                    &chunk.grid,
                )
            {
                let position = Point3::new(
                    (chunk.origin.x + local.x) as f32 + 0.5,
                    local.y as f32 + 0.5,
                    (chunk.origin.z + local.z) as f32 + 0.5,
                );
                assert_eq!(world.is_submerged(position), block_type.is_fluid());
            }
        }
    }

    #[test]
    fn batched_mesh_concatenates_resident_chunks() {
        let mut world = World::new(&config()).unwrap();
        drain(&mut world, Point3::new(0.0, 0.0, 0.0));
        let batched = world.batched_mesh();
        let total: usize = world.chunks().map(|chunk| chunk.mesh.solid.quad_count()).sum();
        assert_eq!(batched.solid.quad_count(), total);
        let vertices = batched.solid.vertices.len() as u32;
        assert!(batched.solid.indices.iter().all(|&index| index < vertices));
    }

    #[test]
    fn worker_primitives_track_in_flight() {
        let mut world = World::new(&config()).unwrap();
        let taken = world.take_pending(2);
        assert_eq!(taken, vec![Point2::new(-1, -1), Point2::new(0, -1)]);
        assert!(world.is_in_flight(taken[0]));
        assert!(!world.is_pending(taken[0]));

        let chunk = Chunk::generate(world.generator(), taken[0], world.mesher_options()).unwrap();
        assert!(world.insert_generated(chunk));
        assert!(!world.is_in_flight(taken[0]));

        // Results for coordinates that were never handed out are dropped.
        let stray = Chunk::generate(world.generator(), Point2::new(1, 1), world.mesher_options())
            .unwrap();
        assert!(!world.insert_generated(stray));
        assert_eq!(world.stats().rejected, 1);

        world.generation_failed(taken[1]);
        assert!(!world.is_in_flight(taken[1]));
        assert_eq!(world.stats().failed, 1);
    }

    #[test]
    fn results_for_abandoned_coordinates_are_dropped() {
        let mut world = World::new(&config()).unwrap();
        let taken = world.take_pending(1);
        let chunk = Chunk::generate(world.generator(), taken[0], world.mesher_options()).unwrap();

        world.stream_around(Point3::new(800.0, 0.0, 0.0));
        assert!(!world.insert_generated(chunk));
        assert!(world.chunk(taken[0]).is_none());
    }

    #[test]
    fn in_flight_coordinates_are_not_requeued() {
        let mut world = World::new(&config()).unwrap();
        let taken = world.take_pending(9);
        assert_eq!(taken.len(), 9);
        world.stream_around(Point3::new(8.0, 0.0, 0.0));
        for coordinate in world.pending_coordinates() {
            assert!(!taken.contains(&coordinate));
        }
        assert_eq!(world.pending_coordinates().len(), 3);
    }
}
