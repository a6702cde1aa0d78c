//! Repulsion vectors from nearby trails and arena boundaries.

use crate::angle::normalize_toward;
use crate::config::ArenaConfig;
use crate::snake::Snake;
use std::f64::consts::{FRAC_PI_2, PI};

/// A directional repulsion cue, recomputed every tick.
///
/// `distance` may be zero or negative when interpenetration has already
/// happened; the steering policy treats that as maximal repulsion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoidanceVector {
    /// Bearing from the threatening segment toward the probing snake's head
    pub angle: f64,
    /// Gap between the head and the segment, minus both body radii
    pub distance: f64,
}

/// Scan every trail segment of every snake (self included) and emit a vector
/// for each segment that threatens `snake`.
///
/// Self-exclusion: walking the snake's own trail oldest→newest while
/// accumulating length, segments within `2 * size` of the head (by cumulative
/// length) are skipped so the head never registers its own immediately
/// preceding body as a collision. Other snakes' trails are scanned in full.
///
/// Each vector's distance accounts for the other body tapering from tail to
/// head: `|head - segment| - other.size * (index / segment_count) - size`.
///
/// Directional filter: a segment only qualifies when the bearing from it to
/// the head differs from the current heading by more than π/2 — segments the
/// snake is moving away from are ignored.
pub fn trail_vectors(snake: &Snake, snakes: &[Snake]) -> Vec<AvoidanceVector> {
    let mut vectors = Vec::new();

    for other in snakes {
        let is_self = other.id() == snake.id();
        let segment_count = other.trail().len();
        let mut walked = 0.0;

        for (index, segment) in other.trail().segments().enumerate() {
            walked += segment.length;

            if is_self && walked >= snake.current_length() - 2.0 * snake.size {
                continue;
            }

            let offset = snake.position() - segment.position;
            let angle = offset.bearing();
            let taper = other.size * (index as f64 / segment_count as f64);
            let distance = offset.length() - taper - snake.size;

            let delta = (normalize_toward(angle, snake.heading()) - snake.heading()).abs();
            if delta > FRAC_PI_2 {
                vectors.push(AvoidanceVector { angle, distance });
            }
        }
    }

    vectors
}

/// Four synthetic repulsors, one per arena edge, pointing inward along each
/// axis. Walls are modeled as infinitely thin, so the distance is simply the
/// coordinate gap minus the body radius. Walls are always considered present;
/// they bypass the forward-hemisphere filter.
pub fn wall_vectors(snake: &Snake, arena: &ArenaConfig) -> [AvoidanceVector; 4] {
    let position = snake.position();
    [
        AvoidanceVector {
            angle: 0.0,
            distance: position.x - snake.size,
        },
        AvoidanceVector {
            angle: PI,
            distance: arena.width - position.x - snake.size,
        },
        AvoidanceVector {
            angle: FRAC_PI_2,
            distance: position.y - snake.size,
        },
        AvoidanceVector {
            angle: -FRAC_PI_2,
            distance: arena.height - position.y - snake.size,
        },
    ]
}

/// Full avoidance scan: trail threats plus (policy permitting) wall repulsors.
pub fn compute_vectors(
    snake: &Snake,
    snakes: &[Snake],
    arena: &ArenaConfig,
    include_walls: bool,
) -> Vec<AvoidanceVector> {
    let mut vectors = trail_vectors(snake, snakes);
    if include_walls {
        vectors.extend(wall_vectors(snake, arena));
    }
    vectors
}
