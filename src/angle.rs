//! Angle normalization across the -π/π wrap.

use std::f64::consts::{PI, TAU};

/// Shift `angle` by a multiple of 2π so that it lands within π of
/// `reference`. The result is equal to `angle` modulo 2π and minimizes the
/// angular distance to `reference`, which makes it safe to compare or
/// interpolate headings without discontinuities at the -π/π boundary.
pub fn normalize_toward(angle: f64, reference: f64) -> f64 {
    let delta = (angle - reference).rem_euclid(TAU);
    if delta > PI {
        reference + delta - TAU
    } else {
        reference + delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_pi_of_reference() {
        for angle in [-7.0, -3.2, 0.0, 1.5, 3.2, 9.9, 100.0] {
            for reference in [-6.0, -0.1, 0.0, 2.0, 50.0] {
                let fixed = normalize_toward(angle, reference);
                assert!(
                    (fixed - reference).abs() <= PI + 1e-12,
                    "angle={} reference={} fixed={}",
                    angle,
                    reference,
                    fixed
                );
            }
        }
    }

    #[test]
    fn test_preserves_angle_modulo_tau() {
        for angle in [-9.0, -1.0, 0.0, 2.5, 14.0] {
            for reference in [-3.0, 0.0, 7.0] {
                let fixed = normalize_toward(angle, reference);
                let residue = (fixed - angle).rem_euclid(TAU);
                assert!(
                    residue < 1e-9 || residue > TAU - 1e-9,
                    "angle={} reference={} fixed={}",
                    angle,
                    reference,
                    fixed
                );
            }
        }
    }

    #[test]
    fn test_identity_when_already_close() {
        assert_eq!(normalize_toward(0.1, 0.0), 0.1);
        assert_eq!(normalize_toward(-0.1, 0.0), -0.1);
        assert_eq!(normalize_toward(3.0, 3.1), 3.0);
    }

    #[test]
    fn test_wrap_at_boundary() {
        // Just past π relative to a reference near -π wraps down
        let fixed = normalize_toward(3.1, -3.1);
        assert!((fixed - (3.1 - TAU)).abs() < 1e-12);

        let fixed = normalize_toward(-3.1, 3.1);
        assert!((fixed - (-3.1 + TAU)).abs() < 1e-12);
    }

    #[test]
    fn test_many_turns_apart() {
        // References several full turns away still normalize in one call
        let fixed = normalize_toward(0.2, 6.0 * TAU);
        assert!((fixed - (0.2 + 6.0 * TAU)).abs() < 1e-6);
    }
}
