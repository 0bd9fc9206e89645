//! Angle helpers for consumers of the raw-range bearing queries.
//!
//! [`angle_to_point`](crate::geometry::angle_to_point) preserves the raw
//! `atan2 - heading` range by contract. Callers that feed the bearing into
//! a heading controller usually want it wrapped into [-π, π] first; these
//! helpers do that wrapping. The geometry queries themselves never call
//! them.

use std::f32::consts::PI;

/// Normalize angle to [-π, π].
///
/// # Example
/// ```
/// use disha_geom::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Shortest signed angular difference from angle `a` to angle `b`.
///
/// Returns the angle to add to `a` to reach `b` by the shortest path
/// around the circle. This is the turn a heading controller executes to
/// face a bearing.
#[inline]
pub fn angle_diff(a: f32, b: f32) -> f32 {
    normalize_angle(b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_in_range_is_identity() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(1.0), 1.0);
        assert_relative_eq!(normalize_angle(-PI), -PI);
    }

    #[test]
    fn test_normalize_wraps_multiples() {
        assert_relative_eq!(normalize_angle(2.0 * PI), 0.0, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(3.0 * PI), PI, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(-3.0 * PI), -PI, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_raw_bearing_past_pi() {
        // The raw bearing range can exceed π; wrapping brings it back.
        let raw = PI + 0.4;
        assert_relative_eq!(normalize_angle(raw), -PI + 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_diff_shortest_path() {
        assert_relative_eq!(angle_diff(0.0, PI / 2.0), PI / 2.0);
        assert_relative_eq!(angle_diff(PI / 2.0, 0.0), -PI / 2.0);
        // Crossing the ±π boundary takes the short way.
        assert_relative_eq!(angle_diff(PI - 0.1, -PI + 0.1), 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(normalize_angle(f32::NAN).is_nan());
        assert!(normalize_angle(f32::INFINITY).is_nan());
    }
}
