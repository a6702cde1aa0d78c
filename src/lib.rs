//! # SERPENTINE
//!
//! Autonomous snake steering simulation with trail-based avoidance.
//!
//! ## Features
//!
//! - **Steering**: attraction/repulsion vector-field composition per tick
//! - **Trails**: sliding-window body buffers that double as collision
//!   surfaces and ribbon-shape sources
//! - **Parallel**: read-only decision phase runs across all cores via Rayon
//! - **Configurable**: YAML configuration files
//! - **Reproducible**: seeded random number generation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serpentine::{Config, World};
//!
//! // Create world with default config
//! let config = Config::default();
//! let mut world = World::new(config);
//!
//! // Run simulation
//! world.run(1000);
//!
//! // Check results
//! println!("Alive: {}", world.population());
//! println!("{}", world.stats.summary());
//! ```
//!
//! ## Geometry output
//!
//! ```rust,no_run
//! use serpentine::{Config, World};
//!
//! let mut world = World::new(Config::default());
//! world.step();
//!
//! // One closed tapering polygon per snake, for the rendering layer
//! for (id, points) in world.ribbons() {
//!     println!("snake {}: {} points", id, points.len());
//! }
//! ```

pub mod angle;
pub mod avoidance;
pub mod config;
pub mod geometry;
pub mod snake;
pub mod stats;
pub mod steering;
pub mod trail;
pub mod world;

// Re-export main types
pub use config::Config;
pub use snake::Snake;
pub use world::{Apple, World};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(ticks: u64, population: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut config = Config::default();
    config.snakes.count = population;
    config.arena.respawn_snakes = true;

    let mut world = World::new(config);

    let start = Instant::now();
    world.run(ticks);
    let elapsed = start.elapsed();

    BenchmarkResult {
        ticks,
        population,
        final_population: world.population(),
        apples_eaten: world.stats.apples_eaten,
        elapsed_secs: elapsed.as_secs_f64(),
        ticks_per_second: ticks as f64 / elapsed.as_secs_f64(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub ticks: u64,
    pub population: usize,
    pub final_population: usize,
    pub apples_eaten: u64,
    pub elapsed_secs: f64,
    pub ticks_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Population: {} -> {}", self.population, self.final_population)?;
        writeln!(f, "Apples eaten: {}", self.apples_eaten)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} ticks/s", self.ticks_per_second)?;
        Ok(())
    }
}
