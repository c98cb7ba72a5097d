use crate::euler::{compose_zyx, decompose_rotation_matrix};
use crate::trig::{sin_cos_fast, sin_cos_precise};
use crate::{Mat3, Transform, Vec3, deg_to_rad, rad_to_deg};

/// Euler angles (radians) of the rotation part of `transform`.
///
/// Uniform scale is removed first; translation is ignored.
pub fn transform_to_euler_radians(transform: &Transform) -> Vec3 {
    decompose_rotation_matrix(&transform.basis)
}

/// Euler angles (degrees) of the rotation part of `transform`.
pub fn transform_to_euler_degrees(transform: &Transform) -> Vec3 {
    rad_to_deg(&transform_to_euler_radians(transform))
}

/// Rotation transform from Euler angles in radians, using fast trig.
///
/// Accurate to roughly 1e-3 per basis component. The basis is not
/// re-orthonormalized. Use `euler_radians_to_transform_precise` when the
/// result will be converted back to angles.
pub fn euler_radians_to_transform(euler_radians: &Vec3) -> Transform {
    let (sx, cx) = sin_cos_fast(euler_radians.x);
    let (sy, cy) = sin_cos_fast(euler_radians.y);
    let (sz, cz) = sin_cos_fast(euler_radians.z);

    #[rustfmt::skip]
    let rx = Mat3::new(
        1.0, 0.0, 0.0,
        0.0, cx,  -sx,
        0.0, sx,  cx,
    );
    #[rustfmt::skip]
    let ry = Mat3::new(
        cy,  0.0, sy,
        0.0, 1.0, 0.0,
        -sy, 0.0, cy,
    );
    #[rustfmt::skip]
    let rz = Mat3::new(
        cz,  -sz, 0.0,
        sz,  cz,  0.0,
        0.0, 0.0, 1.0,
    );

    Transform {
        basis: compose_zyx(rx, ry, rz),
        translation: Vec3::zeros(),
    }
}

/// Rotation transform from Euler angles in degrees, using fast trig.
pub fn euler_degrees_to_transform(euler_degrees: &Vec3) -> Transform {
    euler_radians_to_transform(&deg_to_rad(euler_degrees))
}

/// Rotation transform from Euler angles in radians, full precision.
///
/// Same rotation as `compose_zyx(Rx, Ry, Rz)`, written out in closed form.
pub fn euler_radians_to_transform_precise(euler_radians: &Vec3) -> Transform {
    let (sx, cx) = sin_cos_precise(euler_radians.x);
    let (sy, cy) = sin_cos_precise(euler_radians.y);
    let (sz, cz) = sin_cos_precise(euler_radians.z);

    #[rustfmt::skip]
    let basis = Mat3::new(
        cy * cz,                  -cy * sz,                 sy,
        cx * sz + sx * sy * cz,   cx * cz - sx * sy * sz,   -sx * cy,
        sx * sz - cx * sy * cz,   sx * cz + cx * sy * sz,   cx * cy,
    );

    Transform {
        basis,
        translation: Vec3::zeros(),
    }
}

/// Rotation transform from Euler angles in degrees, full precision.
pub fn euler_degrees_to_transform_precise(euler_degrees: &Vec3) -> Transform {
    euler_radians_to_transform_precise(&deg_to_rad(euler_degrees))
}
