//! DishaGeom - Pose-to-target geometry for differential drive robots
//!
//! Relates a robot's estimated odometry pose to a target point in the
//! plane, and estimates the encoder scale constants used by wheel
//! odometry. Everything here is a pure function over immutable inputs:
//! no filtering, no sensor reading, no state.
//!
//! # Contents
//!
//! - [`types`]: Pose view ([`OdomPose`], [`OdomState`]) and the
//!   [`DistanceAndAngle`] value pair
//! - [`geometry`]: Distance / bearing / combined queries against a pose
//! - [`calibration`]: Scale estimation from chassis dimensions
//! - [`math`]: Angle normalization helpers for callers
//!
//! # Conventions
//!
//! Poses and targets share one planar frame: x/y in the caller's linear
//! units, heading in radians with counter-clockwise positive. Bearings
//! returned by [`geometry::angle_to_point`] are relative to the pose's
//! heading and are **not** normalized into [-π, π]; apply
//! [`math::normalize_angle`] when a canonical range is needed.
//!
//! # Example
//!
//! ```
//! use disha_geom::{distance_and_angle_to_point, OdomState};
//!
//! let pose = OdomState::new(0.0, 0.0, 0.0);
//! let result = distance_and_angle_to_point(3.0, 4.0, &pose);
//!
//! assert!((result.length - 5.0).abs() < 1e-6);
//! ```

pub mod calibration;
pub mod geometry;
pub mod math;
pub mod types;

// Re-export commonly used items
pub use calibration::{guess_scales, DEFAULT_TICKS_PER_REV};
pub use geometry::{angle_to_point, distance_and_angle_to_point, distance_to_point};
pub use types::{DistanceAndAngle, OdomPose, OdomState};
