//! Sliding-window trail buffer backing both collision probing and body-shape
//! generation.

use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One recorded step of a snake's path.
///
/// `length` is the distance travelled since the *previous* segment, not a
/// cumulative value. Keeping per-step lengths lets `trim` subtract in O(1)
/// per removed segment instead of resumming the whole trail.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Vec2,
    pub heading: f64,
    pub length: f64,
}

/// Ordered history of a snake's past positions, oldest first.
///
/// Invariant: `length()` equals the sum of all segment lengths (within
/// floating-point tolerance), and stays `<= max_length + ε` after `trim`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trail {
    segments: VecDeque<Segment>,
    length: f64,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment at the new head position. A `step_length` of zero is
    /// valid (stationary tick) and leaves the running length unchanged.
    pub fn push(&mut self, position: Vec2, heading: f64, step_length: f64) {
        self.segments.push_back(Segment {
            position,
            heading,
            length: step_length,
        });
        self.length += step_length;
    }

    /// Drop oldest segments while the running length exceeds `max_length`.
    ///
    /// Returns true when the trail emptied, the terminal condition for a
    /// decaying dead snake.
    pub fn trim(&mut self, max_length: f64) -> bool {
        while self.length > max_length {
            match self.segments.pop_front() {
                Some(segment) => self.length -= segment.length,
                None => break,
            }
        }
        if self.segments.is_empty() {
            // Kill any floating-point residue left by the subtractions
            self.length = 0.0;
            true
        } else {
            false
        }
    }

    /// Total physical length currently stored
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Read-only view over the segments, oldest first. Re-iterable every
    /// tick; used for both collision probing and ribbon generation.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    /// Newest segment (the head), if any
    pub fn head(&self) -> Option<&Segment> {
        self.segments.back()
    }
}
