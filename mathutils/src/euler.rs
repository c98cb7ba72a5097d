/*!
Euler angle convention and Quaternion <-> Euler conversion.

Convention
- An Euler triple `(x, y, z)` holds the rotation angle about the X, Y and Z
  axes.
- The composite rotation is `R = Rx(x) * Ry(y) * Rz(z)`: a vector is rotated
  about Z first, then Y, then X. `ROTATION_ORDER` names the order and
  `compose_zyx` applies it. The closed-form precise transform builder is the
  expanded product and is tested against `compose_zyx`.
- Decomposition returns `x, z` in `(-π, π]` and `y` in `[-π/2, π/2]`.

Gimbal lock
- When `cos(y)` drops below `GIMBAL_LOCK_EPS` the X and Z rotations act about
  the same world axis and only their combination is recoverable. The
  decomposition then fixes `z = 0`, snaps `y` to `±π/2` and folds the rest
  into `x`.

Decomposition uses the two-atan2 technique from Mike Day, "Extracting Euler
Angles from a Rotation Matrix" (Insomniac Games), which avoids `asin` and
keeps precision as `y` approaches `±π/2`.
*/

use crate::types::normalize_columns;
use crate::{GIMBAL_LOCK_EPS, Mat3, Quat, Vec3, deg_to_rad, rad_to_deg};
use std::f32::consts::FRAC_PI_2;
use std::ops::Mul;

/// A principal rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EulerAxis {
    X,
    Y,
    Z,
}

/// Order in which the elemental rotations are applied to a vector.
pub const ROTATION_ORDER: [EulerAxis; 3] = [EulerAxis::Z, EulerAxis::Y, EulerAxis::X];

/// Composes elemental rotations in `ROTATION_ORDER`.
///
/// Works for anything that composes by multiplication (quaternions, 3x3
/// matrices), so every representation shares one order.
#[inline]
pub fn compose_zyx<T: Mul<Output = T>>(rx: T, ry: T, rz: T) -> T {
    rx * ry * rz
}

/// Decomposes a rotation matrix into `(x, y, z)` radians.
///
/// Columns are rescaled to unit length first, so a uniformly scaled basis is
/// accepted. Quaternions and transforms both funnel through here.
pub fn decompose_rotation_matrix(m: &Mat3) -> Vec3 {
    let m = normalize_columns(m);
    // With R = Rx(a) Ry(b) Rz(c):
    //   row 0 = [ cb*cc, -cb*sc, sb ]
    //   m12 = -sa*cb, m22 = ca*cb
    let cos_y = m[(0, 0)].hypot(m[(0, 1)]);

    if cos_y <= GIMBAL_LOCK_EPS {
        // With c = 0: m11 = ca, m21 = sa, whatever the sign of sb.
        let y = FRAC_PI_2.copysign(m[(0, 2)]);
        let x = m[(2, 1)].atan2(m[(1, 1)]);
        log::trace!("gimbal lock (cos_y = {cos_y}), pinning z to 0");
        return Vec3::new(x, y, 0.0);
    }

    let x = (-m[(1, 2)]).atan2(m[(2, 2)]);
    let y = m[(0, 2)].atan2(cos_y);

    // Undo Rx(x); row 1 of Rx(-x) * R is [sc, cc, 0].
    let (sx, cx) = x.sin_cos();
    let z = (cx * m[(1, 0)] + sx * m[(2, 0)]).atan2(cx * m[(1, 1)] + sx * m[(2, 1)]);

    Vec3::new(x, y, z)
}

/// Euler angles (radians) of a unit quaternion.
pub fn quaternion_to_euler_radians(q: &Quat) -> Vec3 {
    decompose_rotation_matrix(q.to_rotation_matrix().matrix())
}

/// Euler angles (degrees) of a unit quaternion.
pub fn quaternion_to_euler_degrees(q: &Quat) -> Vec3 {
    rad_to_deg(&quaternion_to_euler_radians(q))
}

/// Quaternion for the Euler triple `euler_radians`.
pub fn euler_radians_to_quaternion(euler_radians: &Vec3) -> Quat {
    let half = euler_radians * 0.5;
    let (sx, cx) = half.x.sin_cos();
    let (sy, cy) = half.y.sin_cos();
    let (sz, cz) = half.z.sin_cos();

    let qx = nalgebra::Quaternion::new(cx, sx, 0.0, 0.0);
    let qy = nalgebra::Quaternion::new(cy, 0.0, sy, 0.0);
    let qz = nalgebra::Quaternion::new(cz, 0.0, 0.0, sz);

    // Elemental factors are unit length; renormalize only to absorb rounding.
    Quat::new_normalize(compose_zyx(qx, qy, qz))
}

/// Quaternion for the Euler triple `euler_degrees`.
pub fn euler_degrees_to_quaternion(euler_degrees: &Vec3) -> Quat {
    euler_radians_to_quaternion(&deg_to_rad(euler_degrees))
}
