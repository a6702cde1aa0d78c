//! Snake state and per-tick behavior.

use crate::angle::normalize_toward;
use crate::config::SnakeConfig;
use crate::geometry::Vec2;
use crate::trail::Trail;
use crate::world::Apple;
use serde::{Deserialize, Serialize};

/// Unique snake identifier
pub type SnakeId = u64;

/// Outcome of a tick update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    /// Snake remains in the simulation
    Active,
    /// Trail emptied after death decay; the owning collection should drop it
    Removed,
}

/// An autonomous snake agent.
///
/// Lifecycle: alive and growing, then `kill()` switches it to a dying state
/// where `max_length` decays every tick and the body shrinks from the tail,
/// and finally removed once the trail is empty. There is no transition out
/// of the removed state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snake {
    id: SnakeId,

    // Physical state
    position: Vec2,
    /// Radians, unbounded; only normalized relative to another angle when
    /// compared or interpolated
    heading: f64,
    trail: Trail,
    alive: bool,

    // Tunables (adjusted externally by growth or configuration)
    pub speed: f64,
    pub size: f64,
    pub turn_rate: f64,
    pub max_length: f64,

    // Fallback target when no apple qualifies; refreshed by the world on a
    // fixed cadence
    wander: Vec2,
}

impl Snake {
    /// Create a snake at the given position and heading. The trail starts
    /// with a single zero-length segment at the spawn point.
    pub fn new(id: SnakeId, position: Vec2, heading: f64, config: &SnakeConfig) -> Self {
        let mut trail = Trail::new();
        trail.push(position, heading, 0.0);

        Self {
            id,
            position,
            heading,
            trail,
            alive: true,
            speed: config.speed,
            size: config.size,
            turn_rate: config.turn_rate,
            max_length: config.max_length,
            wander: position,
        }
    }

    pub fn id(&self) -> SnakeId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Physical body length currently on the field
    pub fn current_length(&self) -> f64 {
        self.trail.length()
    }

    pub fn wander(&self) -> Vec2 {
        self.wander
    }

    /// Replace the wander point. Called by an external scheduler on a fixed
    /// interval; the snake itself owns no timers.
    pub fn refresh_wander(&mut self, point: Vec2) {
        self.wander = point;
    }

    pub fn distance_to(&self, point: Vec2) -> f64 {
        self.position.distance_to(point)
    }

    pub fn angle_to(&self, point: Vec2) -> f64 {
        self.position.angle_to(point)
    }

    /// Advance one tick toward `goal_heading`.
    ///
    /// The heading change is clamped to `turn_rate * dt`, so steering is
    /// rate-limited rather than instantaneous. An alive snake moves forward
    /// and records the step on its trail; a dead one stays put while its
    /// `max_length` decays, shrinking the body from the tail.
    pub fn update(&mut self, dt: f64, goal_heading: f64) -> SnakeStatus {
        self.heading = normalize_toward(self.heading, goal_heading);

        if goal_heading < self.heading {
            self.heading = goal_heading.max(self.heading - self.turn_rate * dt);
        } else if self.heading < goal_heading {
            self.heading = goal_heading.min(self.heading + self.turn_rate * dt);
        }

        if self.alive {
            let step = self.speed * dt;
            self.position = self.position + Vec2::from_angle(self.heading) * step;
            self.trail.push(self.position, self.heading, step);
        } else {
            self.max_length -= self.speed * dt;
        }

        if self.trail.trim(self.max_length) {
            SnakeStatus::Removed
        } else {
            SnakeStatus::Active
        }
    }

    /// Attempt to eat an apple. On contact (head within the combined radii)
    /// the snake grows by `grow_length` and the call reports success; the
    /// caller is responsible for despawning the apple.
    pub fn try_consume(&mut self, apple: &Apple, grow_length: f64) -> bool {
        if self.distance_to(apple.position) < self.size + apple.size {
            self.max_length += grow_length;
            true
        } else {
            false
        }
    }

    /// Transition to the dying state. Idempotent.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}
