//! Encoder scale estimation from chassis dimensions.
//!
//! Wheel odometry converts raw encoder ticks into physical units through
//! two calibration constants: a linear scale (distance per tick) and an
//! angular scale (heading change per one-tick differential between the
//! wheels). [`guess_scales`] derives first estimates of both from the
//! measured robot geometry; a driven calibration routine can refine them
//! later.

use std::f32::consts::PI;

/// Default encoder resolution in ticks per wheel revolution.
///
/// Matches the common quadrature encoder with 360 counts per revolution.
pub const DEFAULT_TICKS_PER_REV: f32 = 360.0;

/// Estimate (linear, angular) odometry scales from robot dimensions.
///
/// `chassis_diameter` is the center-to-center wheelbase width and
/// `wheel_diameter` the edge-to-edge wheel diameter, both in the caller's
/// linear units. `ticks_per_rev` is the encoder resolution; pass
/// [`DEFAULT_TICKS_PER_REV`] for a standard 360-count encoder.
///
/// # Derivation
///
/// One wheel revolution covers the circumference `wheel_diameter * π`
/// spread over `ticks_per_rev` counts:
///
/// ```text
/// linear_scale = wheel_diameter * π / ticks_per_rev
/// ```
///
/// A one-tick differential between the wheels rotates the chassis by the
/// standard differential drive relation `angle = distance / wheelbase`:
///
/// ```text
/// angular_scale = linear_scale / chassis_diameter
/// ```
///
/// All inputs must be positive and finite; this is a caller contract, not
/// a checked error. Zero or negative inputs flow through floating-point
/// arithmetic and yield Infinity, NaN, or negative scales.
///
/// # Example
///
/// ```
/// use disha_geom::{guess_scales, DEFAULT_TICKS_PER_REV};
///
/// let (linear, angular) = guess_scales(12.0, 4.0, DEFAULT_TICKS_PER_REV);
/// assert!((linear - 0.034907).abs() < 1e-5);
/// assert!((angular - 0.0029089).abs() < 1e-6);
/// ```
pub fn guess_scales(chassis_diameter: f32, wheel_diameter: f32, ticks_per_rev: f32) -> (f32, f32) {
    let linear_scale = (wheel_diameter * PI) / ticks_per_rev;
    let angular_scale = linear_scale / chassis_diameter;

    log::debug!(
        "estimated odometry scales: linear={:.6}/tick, angular={:.6} rad/tick \
         (chassis={}, wheel={}, ticks/rev={})",
        linear_scale,
        angular_scale,
        chassis_diameter,
        wheel_diameter,
        ticks_per_rev
    );

    (linear_scale, angular_scale)
}
