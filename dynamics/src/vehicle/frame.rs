use bevy_math::{DMat2, DVec2};
use std::f64::consts::TAU;

/// Rotate a body-frame vector into the world frame for heading `theta`.
#[inline]
pub fn body_to_world(body: DVec2, theta: f64) -> DVec2 {
    DMat2::from_angle(theta) * body
}

/// Reduce a heading into [0, 2π).
#[inline]
pub fn wrap_heading(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
