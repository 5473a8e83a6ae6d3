//! End-to-end streaming behaviour of the world and the engine driver.

use std::collections::HashSet;
use std::time::Duration;

use cgmath::{Point2, Point3};
use voxel_terrain::engine_state::voxels::world::{chebyshev_distance, chunk_coordinate_of, World};
use voxel_terrain::{EngineState, WorldConfig};

fn square(center: Point2<i32>, reach: i32) -> HashSet<Point2<i32>> {
    let mut coordinates = HashSet::new();
    for z in center.y - reach..=center.y + reach {
        for x in center.x - reach..=center.x + reach {
            coordinates.insert(Point2::new(x, z));
        }
    }
    coordinates
}

fn resident(world: &World) -> HashSet<Point2<i32>> {
    world.resident_coordinates().into_iter().collect()
}

fn drain(world: &mut World, camera: Point3<f32>) {
    for _ in 0..200 {
        world.update(camera);
        if world.pending_coordinates().is_empty() {
            return;
        }
    }
    panic!("queue did not drain");
}

fn assert_consistent(world: &World) {
    let pending = world.pending_coordinates();
    let unique: HashSet<_> = pending.iter().copied().collect();
    assert_eq!(unique.len(), pending.len(), "duplicate queued coordinate");
    for coordinate in &pending {
        assert!(world.chunk(*coordinate).is_none(), "{:?} queued and resident", coordinate);
    }
    for coordinate in world.resident_coordinates() {
        assert!(
            chebyshev_distance(coordinate, world.camera_chunk()) < world.render_distance() as i64,
            "{:?} resident outside the render distance",
            coordinate
        );
    }
}

#[test]
fn reference_scenario_streams_and_evicts() {
    let config = WorldConfig {
        chunk_size: 32,
        render_distance: 2,
        seed: 1_666_154,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();

    let origin = Point3::new(0.0, 0.0, 0.0);
    drain(&mut world, origin);
    assert_eq!(resident(&world), square(Point2::new(0, 0), 1));

    let moved = Point3::new(40.0, 0.0, 0.0);
    let report = world.update(moved);
    assert_eq!(world.camera_chunk(), Point2::new(1, 0));
    assert_eq!(
        report.evicted,
        vec![Point2::new(-1, -1), Point2::new(-1, 0), Point2::new(-1, 1)]
    );
    for coordinate in world.pending_coordinates() {
        assert!((0..=2).contains(&coordinate.x));
    }

    drain(&mut world, moved);
    assert_eq!(resident(&world), square(Point2::new(1, 0), 1));
    assert_consistent(&world);
}

#[test]
fn negative_positions_floor_into_negative_chunks() {
    assert_eq!(
        chunk_coordinate_of(Point3::new(-1.0, 0.0, 0.0), 32),
        Point2::new(-1, 0)
    );

    let mut world = World::new(&WorldConfig::default()).unwrap();
    world.update(Point3::new(-1.0, 10.0, -0.25));
    assert_eq!(world.camera_chunk(), Point2::new(-1, -1));
}

#[test]
fn wandering_camera_keeps_store_and_queue_consistent() {
    let config = WorldConfig {
        chunk_size: 8,
        render_distance: 3,
        chunks_per_tick: 2,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();
    let mut rng = fastrand::Rng::with_seed(42);
    let mut camera = Point3::new(0.0f32, 0.0, 0.0);

    for _ in 0..300 {
        camera.x += rng.f32() * 6.0 - 3.0;
        camera.z += rng.f32() * 6.0 - 3.0;
        world.update(camera);
        assert_consistent(&world);
    }

    drain(&mut world, camera);
    let center = chunk_coordinate_of(camera, 8);
    assert_eq!(resident(&world), square(center, 2));
}

#[test]
fn worker_pool_converges_to_the_synchronous_result() {
    let camera = Point3::new(20.0, 16.0, -5.0);
    let base = WorldConfig {
        chunk_size: 16,
        render_distance: 2,
        ..WorldConfig::default()
    };

    let mut synchronous = EngineState::headless(base.clone()).unwrap();
    for _ in 0..100 {
        synchronous.tick(camera);
        if synchronous.is_settled() {
            break;
        }
    }
    assert!(synchronous.is_settled());

    let mut pooled = EngineState::headless(WorldConfig {
        worker_threads: 3,
        chunks_per_tick: 2,
        ..base
    })
    .unwrap();
    assert!(pooled.is_worker_mode());
    for _ in 0..5000 {
        pooled.tick(camera);
        if pooled.is_settled() {
            break;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    assert!(pooled.is_settled());

    assert_eq!(
        pooled.world().resident_coordinates(),
        synchronous.world().resident_coordinates()
    );
    assert_eq!(pooled.renderer().uploaded_count(), 9);
    for coordinate in synchronous.world().resident_coordinates() {
        let a = synchronous.world().chunk(coordinate).unwrap();
        let b = pooled.world().chunk(coordinate).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.mesh, b.mesh);
    }
}

#[test]
fn pruning_drops_coordinates_the_camera_left_behind() {
    let config = WorldConfig {
        chunk_size: 8,
        render_distance: 3,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();
    world.update(Point3::new(0.0, 0.0, 0.0));

    let far = Point3::new(-4000.0, 0.0, 4000.0);
    drain(&mut world, far);
    assert_eq!(world.stats().generated, 1 + 1 + 25);
    assert_eq!(world.stats().skipped, 23);
    assert_eq!(resident(&world), square(chunk_coordinate_of(far, 8), 2));
}
