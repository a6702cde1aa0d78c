//! World simulation engine - main tick loop.

use crate::avoidance;
use crate::config::Config;
use crate::geometry::{self, Vec2};
use crate::snake::{Snake, SnakeId, SnakeStatus};
use crate::stats::{Stats, StatsHistory};
use crate::steering::{self, SteeringForces};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Display scale for debug force segments
pub const FORCE_DISPLAY_LENGTH: f64 = 100.0;

/// A food target. Immutable once spawned; despawned on consumption.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Apple {
    pub position: Vec2,
    pub size: f64,
}

/// Steering decision computed for one snake during the read-only phase
struct Decision {
    goal_heading: f64,
    /// A trail-derived avoidance vector reached distance <= 0 this tick
    collided: bool,
    forces: Option<SteeringForces>,
}

/// The simulation world
pub struct World {
    // Population
    pub snakes: Vec<Snake>,
    pub apples: Vec<Apple>,

    // State
    pub time: u64,

    // Configuration
    pub config: Config,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,

    // ID generation
    next_snake_id: SnakeId,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,

    // Time since the last wander-point refresh
    wander_elapsed: f64,

    // Last tick's decomposed forces, kept only when debug_forces is on
    debug_forces: Vec<(SnakeId, SteeringForces)>,
}

impl World {
    /// Create a new world with the given configuration
    pub fn new(config: Config) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a new world with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        let mut world = Self {
            snakes: Vec::new(),
            apples: Vec::new(),
            time: 0,
            stats: Stats::new(),
            stats_history: StatsHistory::new(config.logging.stats_interval),
            next_snake_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            wander_elapsed: 0.0,
            debug_forces: Vec::new(),
            config,
        };

        for _ in 0..world.config.snakes.count {
            let snake = world.spawn_snake();
            world.snakes.push(snake);
        }
        while world.apples.len() < world.config.apples.count {
            let apple = world.spawn_apple();
            world.apples.push(apple);
        }

        world
    }

    fn random_point(rng: &mut ChaCha8Rng, config: &Config) -> Vec2 {
        Vec2::new(
            rng.gen_range(0.0..config.arena.width),
            rng.gen_range(0.0..config.arena.height),
        )
    }

    fn spawn_snake(&mut self) -> Snake {
        let position = Self::random_point(&mut self.rng, &self.config);
        let heading = self.rng.gen_range(-PI..PI);
        let wander = Self::random_point(&mut self.rng, &self.config);

        let id = self.next_snake_id;
        self.next_snake_id += 1;

        let mut snake = Snake::new(id, position, heading, &self.config.snakes);
        snake.refresh_wander(wander);
        snake
    }

    fn spawn_apple(&mut self) -> Apple {
        Apple {
            position: Self::random_point(&mut self.rng, &self.config),
            size: self.config.apples.size,
        }
    }

    /// Advance one tick using the configured delta time
    pub fn step(&mut self) {
        self.step_dt(self.config.arena.dt);
    }

    /// Advance one tick with an externally supplied delta time.
    ///
    /// Phase 1 computes every snake's avoidance vectors and goal heading
    /// against a consistent snapshot of all trails from the start of the
    /// tick; phase 2 then applies the mutations. Without the split, snakes
    /// would react to partially-updated peers in iteration order.
    pub fn step_dt(&mut self, dt: f64) {
        // Wander refresh on a fixed cadence; an input to the decision phase
        self.wander_elapsed += dt;
        if self.wander_elapsed >= self.config.arena.wander_interval {
            self.wander_elapsed = 0.0;
            for i in 0..self.snakes.len() {
                let point = Self::random_point(&mut self.rng, &self.config);
                self.snakes[i].refresh_wander(point);
            }
        }

        // Phase 1: read-only, parallel
        let decisions = self.compute_decisions();

        // Phase 2: sequential mutation using the phase-1 results
        let mut kills = 0;
        if self.config.steering.lethal_collisions {
            for (idx, decision) in decisions.iter().enumerate() {
                if decision.collided && self.snakes[idx].is_alive() {
                    self.snakes[idx].kill();
                    kills += 1;
                    log::debug!("snake {} hit a body and died", self.snakes[idx].id());
                }
            }
        }

        let mut removed = Vec::new();
        for (idx, decision) in decisions.iter().enumerate() {
            if self.snakes[idx].update(dt, decision.goal_heading) == SnakeStatus::Removed {
                removed.push(idx);
            }
        }

        if self.config.steering.debug_forces {
            self.debug_forces = decisions
                .into_iter()
                .enumerate()
                .filter_map(|(idx, decision)| {
                    decision.forces.map(|f| (self.snakes[idx].id(), f))
                })
                .collect();
        } else {
            self.debug_forces.clear();
        }

        // Consumption
        let grow = self.config.apples.grow_length;
        let mut eaten = 0u64;
        let snakes = &mut self.snakes;
        self.apples.retain(|apple| {
            for snake in snakes.iter_mut().filter(|s| s.is_alive()) {
                if snake.try_consume(apple, grow) {
                    eaten += 1;
                    return false;
                }
            }
            true
        });
        self.stats.apples_eaten += eaten;

        // Drop fully decayed snakes
        let removals = removed.len();
        for idx in removed.into_iter().rev() {
            let snake = self.snakes.remove(idx);
            log::debug!("snake {} fully decayed, removed", snake.id());
        }

        // Respawns
        let mut spawns = 0;
        while self.apples.len() < self.config.apples.count {
            let apple = self.spawn_apple();
            self.apples.push(apple);
        }
        if self.config.arena.respawn_snakes {
            while self.snakes.len() < self.config.snakes.count {
                let snake = self.spawn_snake();
                self.snakes.push(snake);
                spawns += 1;
            }
        }

        // Statistics
        self.time += 1;
        self.stats.time = self.time;
        self.stats.kills = kills;
        self.stats.removals = removals;
        self.stats.spawns = spawns;
        self.stats.update(&self.snakes, self.apples.len());
        if self.time % self.config.logging.stats_interval == 0 {
            self.stats_history.record(self.stats.clone());
        }
    }

    /// Compute steering decisions for all snakes in parallel. Trails and
    /// positions are only read here, never written.
    fn compute_decisions(&self) -> Vec<Decision> {
        let keep_forces = self.config.steering.debug_forces;

        self.snakes
            .par_iter()
            .map(|snake| {
                let mut vectors = avoidance::trail_vectors(snake, &self.snakes);
                let collided = snake.is_alive() && vectors.iter().any(|v| v.distance <= 0.0);

                if self.config.steering.include_walls {
                    vectors.extend(avoidance::wall_vectors(snake, &self.config.arena));
                }

                let forces = steering::compute_forces(
                    snake,
                    &self.apples,
                    &vectors,
                    &self.config.steering,
                );
                let goal_heading = forces.heading();

                Decision {
                    goal_heading,
                    collided,
                    forces: keep_forces.then_some(forces),
                }
            })
            .collect()
    }

    /// Run simulation for the specified number of ticks
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Run simulation with a callback after every tick
    pub fn run_with_callback<F>(&mut self, ticks: u64, mut callback: F)
    where
        F: FnMut(&World, u64),
    {
        for i in 0..ticks {
            self.step();
            callback(self, i);
        }
    }

    /// Current alive population
    pub fn population(&self) -> usize {
        self.snakes.iter().filter(|s| s.is_alive()).count()
    }

    /// True once every snake has decayed away entirely
    pub fn is_extinct(&self) -> bool {
        self.snakes.is_empty()
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Kill a snake by id; starts its death-shrink. Returns false when no
    /// such snake exists.
    pub fn kill_snake(&mut self, id: SnakeId) -> bool {
        match self.snakes.iter_mut().find(|s| s.id() == id) {
            Some(snake) => {
                snake.kill();
                true
            }
            None => false,
        }
    }

    /// Body polygons for every snake, for the presentation adapter
    pub fn ribbons(&self) -> Vec<(SnakeId, Vec<Vec2>)> {
        self.snakes
            .iter()
            .map(|s| (s.id(), geometry::ribbon(s.trail(), s.size)))
            .collect()
    }

    /// Last tick's decomposed steering forces (empty unless `debug_forces`
    /// is enabled)
    pub fn debug_forces(&self) -> &[(SnakeId, SteeringForces)] {
        &self.debug_forces
    }

    /// Debug forces rendered down to line segments from each snake's head:
    /// goal force, summed force, then one segment per threat (per-threat
    /// segments are additionally scaled by the threat count, matching their
    /// count-normalized magnitudes)
    pub fn debug_force_segments(&self) -> Vec<(SnakeId, Vec<(Vec2, Vec2)>)> {
        self.debug_forces
            .iter()
            .filter_map(|(id, forces)| {
                let snake = self.snakes.iter().find(|s| s.id() == *id)?;
                let origin = snake.position();
                let threat_scale = FORCE_DISPLAY_LENGTH * forces.avoidance.len() as f64;

                let mut segments = Vec::with_capacity(forces.avoidance.len() + 2);
                segments.push(geometry::force_segment(origin, forces.goal, FORCE_DISPLAY_LENGTH));
                segments.push(geometry::force_segment(origin, forces.total, FORCE_DISPLAY_LENGTH));
                for contribution in &forces.avoidance {
                    segments.push(geometry::force_segment(origin, *contribution, threat_scale));
                }

                Some((*id, segments))
            })
            .collect()
    }
}
