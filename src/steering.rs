//! Goal selection and force composition into a single target heading.

use crate::avoidance::AvoidanceVector;
use crate::config::SteeringConfig;
use crate::geometry::Vec2;
use crate::snake::Snake;
use crate::world::Apple;

/// Cap applied when an avoidance distance is zero or negative, so
/// interpenetration produces an overwhelming but finite repulsion instead of
/// a division fault.
const MAX_AVOID_WEIGHT: f64 = 1e12;

/// Decomposed steering forces for one snake, one tick.
///
/// Only materialized when force debugging is enabled; the simulation itself
/// needs nothing but the final heading.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SteeringForces {
    /// Attraction toward the chosen target (apple or wander point)
    pub goal: Vec2,
    /// Per-threat weighted repulsion contributions, count-normalized
    pub avoidance: Vec<Vec2>,
    /// Vector sum of goal and all avoidance contributions
    pub total: Vec2,
}

impl SteeringForces {
    /// Target heading encoded by the summed force
    pub fn heading(&self) -> f64 {
        self.total.bearing()
    }
}

/// Pick the steering target: the nearest apple farther away than
/// `min_apple_dist`, or the wander point when no apple qualifies. Apples
/// already adjacent are ignored as goals to prevent oscillation around them.
fn select_target(snake: &Snake, apples: &[Apple], config: &SteeringConfig) -> Vec2 {
    apples
        .iter()
        .map(|apple| (apple.position, snake.distance_to(apple.position)))
        .filter(|(_, distance)| *distance > config.min_apple_dist)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(position, _)| position)
        .unwrap_or_else(|| snake.wander())
}

/// Compose the goal attraction with all avoidance repulsions.
///
/// Each avoidance vector contributes `(cos a, sin a) * weight / count` where
/// `weight = |avoid_weight / distance^avoid_power|`; dividing by the vector
/// count keeps the total repulsion magnitude independent of how many threats
/// were detected.
pub fn compute_forces(
    snake: &Snake,
    apples: &[Apple],
    vectors: &[AvoidanceVector],
    config: &SteeringConfig,
) -> SteeringForces {
    let target = select_target(snake, apples, config);
    let goal = Vec2::from_angle(snake.angle_to(target)) * config.goal_weight;

    let count = vectors.len() as f64;
    let mut avoidance = Vec::with_capacity(vectors.len());
    let mut total = goal;

    for vector in vectors {
        let weight = if vector.distance <= 0.0 {
            MAX_AVOID_WEIGHT
        } else {
            (config.avoid_weight / vector.distance.powf(config.avoid_power)).abs()
        };
        let contribution = Vec2::from_angle(vector.angle) * (weight / count);
        total = total + contribution;
        avoidance.push(contribution);
    }

    SteeringForces {
        goal,
        avoidance,
        total,
    }
}

/// Final per-tick steering decision: the heading the snake should turn toward.
pub fn compute_goal_heading(
    snake: &Snake,
    apples: &[Apple],
    vectors: &[AvoidanceVector],
    config: &SteeringConfig,
) -> f64 {
    compute_forces(snake, apples, vectors, config).heading()
}
