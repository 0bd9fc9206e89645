//! Geometry queries relating a pose to a target point.
//!
//! Three entry points over the same trigonometric relationship: callers in
//! a control loop that only need the distance (or only the bearing) skip
//! the unused half, while [`distance_and_angle_to_point`] computes both
//! from one shared delta.
//!
//! All queries are pure and total over IEEE-754 floats: non-finite inputs
//! propagate NaN/Infinity instead of being rejected.

use crate::types::{DistanceAndAngle, OdomPose};

/// Target offset from the pose position.
#[inline]
fn deltas(x: f32, y: f32, pose: &impl OdomPose) -> (f32, f32) {
    (x - pose.x(), y - pose.y())
}

/// Euclidean distance from the pose position to the point (x, y).
///
/// Always non-negative; zero exactly when the target coincides with the
/// pose position.
///
/// # Example
///
/// ```
/// use disha_geom::{distance_to_point, OdomState};
///
/// let pose = OdomState::new(0.0, 0.0, 0.0);
/// assert_eq!(distance_to_point(3.0, 4.0, &pose), 5.0);
/// ```
#[inline]
pub fn distance_to_point(x: f32, y: f32, pose: &impl OdomPose) -> f32 {
    let (dx, dy) = deltas(x, y, pose);
    (dx * dx + dy * dy).sqrt()
}

/// Bearing from the pose to the point (x, y), relative to the pose heading.
///
/// Computed as `atan2(dy, dx) - heading`. The absolute bearing from
/// `atan2` lies in (-π, π] with counter-clockwise positive; the heading is
/// subtracted **without renormalization**, so the result is not confined
/// to [-π, π]. Apply [`normalize_angle`](crate::math::normalize_angle)
/// when a canonical range is needed.
///
/// A target dead ahead yields 0; a target to the robot's left yields a
/// positive angle. If the target coincides with the pose position the
/// underlying `atan2(0, 0)` returns 0 and the result is `-heading`, which
/// carries no directional meaning.
#[inline]
pub fn angle_to_point(x: f32, y: f32, pose: &impl OdomPose) -> f32 {
    let (dx, dy) = deltas(x, y, pose);
    dy.atan2(dx) - pose.heading()
}

/// Distance and bearing to the point (x, y) in one pass.
///
/// Equivalent to calling [`distance_to_point`] and [`angle_to_point`] with
/// the same inputs, sharing the delta terms so the trigonometry runs once.
/// The result is bit-identical to the two single queries.
#[inline]
pub fn distance_and_angle_to_point(x: f32, y: f32, pose: &impl OdomPose) -> DistanceAndAngle {
    let (dx, dy) = deltas(x, y, pose);
    DistanceAndAngle::new((dx * dx + dy * dy).sqrt(), dy.atan2(dx) - pose.heading())
}
