//! Pose view and value types.
//!
//! The odometry estimator that produces poses lives outside this crate.
//! Queries only need three readable values from it, so the dependency is
//! expressed as the read-only [`OdomPose`] capability; [`OdomState`] is a
//! plain snapshot for callers (and tests) that do not have their own pose
//! type.

use serde::{Deserialize, Serialize};

/// Read-only view of an odometry pose estimate.
///
/// Implementors expose the estimated position and heading of the robot at
/// one instant. The crate borrows an implementor for the duration of a
/// single query and never retains it.
///
/// Heading is in radians, counter-clockwise positive. No range is assumed
/// or enforced; whatever the estimator reports is used as-is.
pub trait OdomPose {
    /// Estimated x position.
    fn x(&self) -> f32;

    /// Estimated y position.
    fn y(&self) -> f32;

    /// Estimated heading in radians.
    fn heading(&self) -> f32;
}

/// Immutable snapshot of an odometry state: position (x, y) and heading
/// theta in radians.
///
/// Unlike a full pose type, the heading is stored exactly as given; the
/// estimator owns whatever normalization convention it uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdomState {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Heading in radians
    pub theta: f32,
}

impl OdomState {
    /// Create a new state snapshot.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }
}

impl Default for OdomState {
    /// Origin pose with zero heading.
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }
}

impl OdomPose for OdomState {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    fn heading(&self) -> f32 {
        self.theta
    }
}

/// Distance and bearing to a target, as returned by
/// [`distance_and_angle_to_point`](crate::geometry::distance_and_angle_to_point).
///
/// `length` is non-negative and in the same linear units as the pose
/// coordinates. `theta` is in radians, relative to the pose heading, in the
/// raw (un-normalized) range of the geometry queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceAndAngle {
    /// Distance to the target
    pub length: f32,
    /// Bearing to the target in radians, relative to the pose heading
    pub theta: f32,
}

impl DistanceAndAngle {
    /// Create a new distance/angle pair.
    #[inline]
    pub fn new(length: f32, theta: f32) -> Self {
        Self { length, theta }
    }
}

impl Default for DistanceAndAngle {
    fn default() -> Self {
        Self {
            length: 0.0,
            theta: 0.0,
        }
    }
}
