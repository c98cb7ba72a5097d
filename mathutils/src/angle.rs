use crate::{DEG_TO_RAD, RAD_TO_DEG, Vec3};
use num_traits::{Float, FloatConst};

/// Converts every component of `radians` to degrees.
#[inline]
pub fn rad_to_deg(radians: &Vec3) -> Vec3 {
    radians * RAD_TO_DEG
}

/// Converts every component of `degrees` to radians.
#[inline]
pub fn deg_to_rad(degrees: &Vec3) -> Vec3 {
    degrees * DEG_TO_RAD
}

/// Wraps an angle in radians into `[-π, π]`.
pub fn wrap_angle<T: Float + FloatConst>(radians: T) -> T {
    let tau = T::TAU();
    radians - tau * (radians / tau).round()
}
