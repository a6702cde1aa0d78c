//! 2-D vector math and body-shape generation.
//!
//! The simulation core hands the presentation layer plain geometry: a closed
//! tapering ribbon polygon per snake and, when enabled, force line segments
//! for debugging. No drawing happens here.

use crate::trail::Trail;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Mul, Sub};

/// Plain 2-D vector / point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians)
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of this vector in radians (atan2 convention)
    pub fn bearing(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Bearing from this point toward `other`
    pub fn angle_to(self, other: Vec2) -> f64 {
        (other - self).bearing()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Number of sampled points in the rounded head cap
pub const HEAD_CAP_STEPS: usize = 8;

/// Build the closed body polygon for a trail.
///
/// For segment index `i` of `n`, a left and right offset point is placed at
/// perpendicular distance `size * i / n` from the segment heading, so the
/// ribbon tapers from width 0 at the tail to the full body width at the head.
/// The left boundary runs oldest→newest, then a sampled arc of radius `size`
/// caps the head, then the right boundary returns newest→oldest, which closes
/// the polygon. An empty trail yields an empty polygon.
pub fn ribbon(trail: &Trail, size: f64) -> Vec<Vec2> {
    let count = trail.len();
    let head = match trail.head() {
        Some(head) => *head,
        None => return Vec::new(),
    };

    let mut points = Vec::with_capacity(2 * count + HEAD_CAP_STEPS);
    let mut right = Vec::with_capacity(count);

    for (index, segment) in trail.segments().enumerate() {
        let width = size * index as f64 / count as f64;
        let left_angle = segment.heading - FRAC_PI_2;
        let right_angle = segment.heading + FRAC_PI_2;
        points.push(segment.position + Vec2::from_angle(left_angle) * width);
        right.push(segment.position + Vec2::from_angle(right_angle) * width);
    }

    // Rounded cap: sweep from the left edge of the head around the front to
    // the right edge
    for step in 1..=HEAD_CAP_STEPS {
        let angle = head.heading - FRAC_PI_2 + PI * step as f64 / (HEAD_CAP_STEPS + 1) as f64;
        points.push(head.position + Vec2::from_angle(angle) * size);
    }

    points.extend(right.into_iter().rev());
    points
}

/// Express a force as a drawable line segment from `origin`, scaled to a
/// fixed display length.
pub fn force_segment(origin: Vec2, force: Vec2, display_length: f64) -> (Vec2, Vec2) {
    (origin, origin + force * display_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_basics() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert_eq!(v + Vec2::new(1.0, -1.0), Vec2::new(4.0, 3.0));
        assert_eq!(v * 2.0, Vec2::new(6.0, 8.0));

        let east = Vec2::from_angle(0.0);
        assert!((east.x - 1.0).abs() < 1e-12 && east.y.abs() < 1e-12);
        assert!((Vec2::ZERO.angle_to(Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_ribbon_empty_trail() {
        let trail = Trail::new();
        assert!(ribbon(&trail, 10.0).is_empty());
    }

    #[test]
    fn test_ribbon_tapers_along_straight_trail() {
        // Straight trail heading east: 4 segments one unit apart
        let mut trail = Trail::new();
        for i in 0..4 {
            let step = if i == 0 { 0.0 } else { 1.0 };
            trail.push(Vec2::new(i as f64, 0.0), 0.0, step);
        }

        let size = 8.0;
        let points = ribbon(&trail, size);
        assert_eq!(points.len(), 2 * 4 + HEAD_CAP_STEPS);

        // Heading east, left offset is -y. Widths grow as size * i / n.
        for (i, point) in points.iter().take(4).enumerate() {
            let width = size * i as f64 / 4.0;
            assert!((point.x - i as f64).abs() < 1e-12);
            assert!((point.y + width).abs() < 1e-12, "left widths must taper");
        }

        // Right boundary comes back newest→oldest at +y offsets
        let right: Vec<_> = points.iter().skip(4 + HEAD_CAP_STEPS).collect();
        for (k, point) in right.iter().enumerate() {
            let i = 3 - k;
            let width = size * i as f64 / 4.0;
            assert!((point.y - width).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ribbon_cap_points_lie_on_head_circle() {
        let mut trail = Trail::new();
        trail.push(Vec2::ZERO, 0.0, 0.0);
        trail.push(Vec2::new(5.0, 0.0), 0.0, 5.0);

        let size = 3.0;
        let points = ribbon(&trail, size);
        let head = Vec2::new(5.0, 0.0);
        for point in points.iter().skip(2).take(HEAD_CAP_STEPS) {
            assert!((point.distance_to(head) - size).abs() < 1e-9);
        }
    }

    #[test]
    fn test_force_segment_scaling() {
        let (from, to) = force_segment(Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.0), 100.0);
        assert_eq!(from, Vec2::new(1.0, 1.0));
        assert_eq!(to, Vec2::new(51.0, 1.0));
    }
}
