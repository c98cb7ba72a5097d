use crate::{AXIS_ANGLE_EPS, DEFAULT_ROTATION_AXIS, Quat, Vec3};
use nalgebra::Unit;

/// Splits a unit quaternion into a rotation axis and an angle in radians.
///
/// The angle is in `[0, 2π]` and `Quat::from_axis_angle(&axis, angle)`
/// reproduces the rotation. For a (near-)zero rotation the axis is undefined;
/// `DEFAULT_ROTATION_AXIS` is returned instead, with an angle of ~0 (or ~2π
/// when `w` is negative).
pub fn quaternion_to_axis_angle(q: &Quat) -> (Unit<Vec3>, f32) {
    let imag = q.imag();
    let sin_half = imag.norm();

    // atan2 stays accurate near both 0 and π, unlike acos(w).
    let angle = 2.0 * sin_half.atan2(q.w);

    if sin_half <= AXIS_ANGLE_EPS {
        log::trace!("near-zero rotation, using default axis");
        return (Unit::new_unchecked(DEFAULT_ROTATION_AXIS), angle);
    }

    (Unit::new_unchecked(imag / sin_half), angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn identity_gives_zero_angle_and_default_axis() {
        let (axis, angle) = quaternion_to_axis_angle(&Quat::identity());
        assert_eq!(angle, 0.0);
        assert!(axis.iter().all(|c| c.is_finite()));
        assert!((axis.norm() - 1.0).abs() < 1.0e-6);
        assert_eq!(axis.into_inner(), DEFAULT_ROTATION_AXIS);
    }

    #[test]
    fn tiny_rotation_does_not_blow_up() {
        let q = Quat::from_axis_angle(&Vec3::x_axis(), 1.0e-7);
        let (axis, angle) = quaternion_to_axis_angle(&q);
        assert!(axis.iter().all(|c| c.is_finite()));
        assert!((axis.norm() - 1.0).abs() < 1.0e-6);
        assert!(angle.abs() < 1.0e-5);
    }

    #[test]
    fn recovers_known_rotations() {
        let cases = [
            (Vec3::z_axis(), FRAC_PI_2),
            (Vec3::x_axis(), 0.25),
            (Unit::new_normalize(Vec3::new(1.0, 1.0, -1.0)), 2.0),
            (Unit::new_normalize(Vec3::new(-0.3, 0.8, 0.1)), PI - 1.0e-3),
        ];

        for (expected_axis, expected_angle) in cases {
            let q = Quat::from_axis_angle(&expected_axis, expected_angle);
            let (axis, angle) = quaternion_to_axis_angle(&q);
            assert_relative_eq!(angle, expected_angle, epsilon = 1.0e-5);
            assert_relative_eq!(axis.into_inner(), expected_axis.into_inner(), epsilon = 1.0e-5);
        }
    }

    #[test]
    fn axis_angle_rebuilds_quaternion() {
        let q = Quat::from_euler_angles(0.4, -1.1, 2.5);
        let (axis, angle) = quaternion_to_axis_angle(&q);
        let rebuilt = Quat::from_axis_angle(&axis, angle);
        assert!(rebuilt.angle_to(&q) < 1.0e-5);
    }

    #[test]
    fn negative_hemisphere_reports_long_way_round() {
        // Same rotation as +90° about Z, stored with w < 0.
        let q = Quat::new_unchecked(-*Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2).quaternion());
        let (axis, angle) = quaternion_to_axis_angle(&q);
        assert!(angle > PI);
        let rebuilt = Quat::from_axis_angle(&axis, angle);
        assert!(rebuilt.angle_to(&q) < 1.0e-5);
    }
}
