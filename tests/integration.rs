//! Integration tests for SERPENTINE

use serpentine::{Config, World};

#[test]
fn test_full_simulation_cycle() {
    let mut config = Config::default();
    config.snakes.count = 8;
    config.apples.count = 10;

    let mut world = World::new_with_seed(config, 12345);

    world.run(500);

    assert_eq!(world.time, 500);

    // Every surviving snake holds the trail invariants
    for snake in &world.snakes {
        assert!(snake.position().x.is_finite());
        assert!(snake.position().y.is_finite());

        let sum: f64 = snake.trail().segments().map(|s| s.length).sum();
        assert!((sum - snake.current_length()).abs() < 1e-6);
        if snake.is_alive() {
            assert!(snake.current_length() <= snake.max_length + 1e-6);
        }
    }
}

#[test]
fn test_seeded_runs_are_identical() {
    let mut config = Config::default();
    config.snakes.count = 6;
    config.steering.debug_forces = true;

    let mut world1 = World::new_with_seed(config.clone(), 777);
    let mut world2 = World::new_with_seed(config, 777);

    world1.run(400);
    world2.run(400);

    assert_eq!(world1.snakes.len(), world2.snakes.len());
    for (a, b) in world1.snakes.iter().zip(&world2.snakes) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.position(), b.position());
        assert_eq!(a.heading(), b.heading());
        assert_eq!(a.current_length(), b.current_length());
    }
    assert_eq!(world1.stats.apples_eaten, world2.stats.apples_eaten);
}

#[test]
fn test_population_decays_to_extinction() {
    let mut config = Config::default();
    config.snakes.count = 3;
    config.steering.lethal_collisions = false;

    let mut world = World::new_with_seed(config, 999);
    world.run(100);

    let ids: Vec<_> = world.snakes.iter().map(|s| s.id()).collect();
    for id in ids {
        world.kill_snake(id);
    }

    // Each body shrinks by speed*dt per tick, so extinction is bounded by
    // the longest max_length over the decay rate
    let longest = world
        .snakes
        .iter()
        .map(|s| s.max_length)
        .fold(0.0f64, f64::max);
    let bound = (longest / (world.config.snakes.speed * world.config.arena.dt)).ceil() as u64 + 2;

    world.run(bound);
    assert!(world.is_extinct());
    assert_eq!(world.population(), 0);
}

#[test]
fn test_ribbons_stay_renderable_throughout() {
    let mut config = Config::default();
    config.snakes.count = 5;
    let mut world = World::new_with_seed(config, 4242);

    for _ in 0..50 {
        world.step();
        for (_, points) in world.ribbons() {
            assert!(!points.is_empty());
            for point in &points {
                assert!(point.x.is_finite() && point.y.is_finite());
            }
        }
    }
}

#[test]
fn test_stats_history_roundtrip() {
    let mut config = Config::default();
    config.snakes.count = 4;
    config.logging.stats_interval = 25;

    let mut world = World::new_with_seed(config, 31337);
    world.run(200);

    assert_eq!(world.stats_history.snapshots.len(), 8);

    let path = std::env::temp_dir().join("serpentine_stats_test.json");
    let path_str = path.to_string_lossy().to_string();
    world.stats_history.save(&path_str).expect("save failed");

    let loaded = serpentine::stats::StatsHistory::load(&path_str).expect("load failed");
    assert_eq!(loaded.snapshots.len(), world.stats_history.snapshots.len());
    assert_eq!(
        loaded.population_series(),
        world.stats_history.population_series()
    );

    std::fs::remove_file(path).ok();
}

#[test]
fn test_walls_keep_snakes_in_bounds() {
    // Small arena, long run: wall repulsion should keep heads from straying
    // far outside the field even though nothing hard-clamps positions
    let mut config = Config::default();
    config.arena.width = 300.0;
    config.arena.height = 300.0;
    config.snakes.count = 3;
    config.steering.lethal_collisions = false;

    let mut world = World::new_with_seed(config, 2024);
    world.run(2000);

    let margin = 100.0;
    for snake in &world.snakes {
        let p = snake.position();
        assert!(
            p.x > -margin
                && p.x < world.config.arena.width + margin
                && p.y > -margin
                && p.y < world.config.arena.height + margin,
            "snake {} escaped to {:?}",
            snake.id(),
            p
        );
    }
}

#[test]
fn test_debug_force_segments_anchor_at_heads() {
    let mut config = Config::default();
    config.snakes.count = 3;
    config.steering.debug_forces = true;

    let mut world = World::new_with_seed(config, 55);
    world.run(10);

    let segments = world.debug_force_segments();
    assert_eq!(segments.len(), world.snakes.len());
    for (id, lines) in segments {
        let snake = world.snakes.iter().find(|s| s.id() == id).unwrap();
        assert!(lines.len() >= 2, "goal and total segments always present");
        for (from, _) in lines {
            assert_eq!(from, snake.position());
        }
    }
}

#[test]
fn test_apple_field_stays_full() {
    let mut config = Config::default();
    config.snakes.count = 6;
    config.apples.count = 15;

    let mut world = World::new_with_seed(config, 808);
    for _ in 0..300 {
        world.step();
        assert_eq!(world.apples.len(), 15);
        for apple in &world.apples {
            assert!(apple.position.x >= 0.0 && apple.position.x < world.config.arena.width);
            assert!(apple.position.y >= 0.0 && apple.position.y < world.config.arena.height);
        }
    }
}
