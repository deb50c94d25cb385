//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use spurgear::{
    float_types::{Real, TAU, tolerance},
    gear::{GearInput, GearParameters, compute_gear_parameters},
};

/// Tolerance for comparing derived values, the same one the library uses.
pub fn eps() -> Real {
    tolerance()
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance of `p` from `center`.
pub fn radius_of(p: &Point2<Real>, center: &Point2<Real>) -> Real {
    (p - center).norm()
}

/// Angle of `p` around `center`, normalized to `[0, τ)`.
pub fn angle_of(p: &Point2<Real>, center: &Point2<Real>) -> Real {
    let d = p - center;
    d.y.atan2(d.x).rem_euclid(TAU)
}

/// Smallest difference between two angles, ignoring full turns.
pub fn angular_distance(a: Real, b: Real) -> Real {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

/// The 24-tooth, 48 mm, 20° reference gear.
pub fn reference_gear() -> GearParameters {
    compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).expect("valid reference gear")
}
