/*!
Value types shared by every conversion in the crate.

Nothing here owns anything else: all types are small `Copy` values and every
conversion takes them by reference and returns a fresh one.
*/

use nalgebra as na;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Mat3 = na::Matrix3<f32>;
pub type Iso = na::Isometry3<f32>;

/// Rescales every column of `m` to unit length.
///
/// Zero-length columns are left untouched.
pub fn normalize_columns(m: &Mat3) -> Mat3 {
    let mut out = *m;
    for mut column in out.column_iter_mut() {
        let len = column.norm();
        if len > 0.0 {
            column /= len;
        }
    }
    out
}

/// An affine transform: a 3x3 basis plus a translation.
///
/// The columns of `basis` are the local X, Y and Z axes expressed in world
/// space. For the transforms built by this crate they are orthonormal; a
/// uniform scale is tolerated wherever the rotation part is read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub basis: Mat3,
    pub translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub fn identity() -> Self {
        Self {
            basis: Mat3::identity(),
            translation: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            basis: Mat3::identity(),
            translation,
        }
    }

    /// Rotation-only transform.
    #[inline]
    pub fn from_rotation(rotation: &Quat) -> Self {
        Self {
            basis: rotation.to_rotation_matrix().into_inner(),
            translation: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn from_basis_and_translation(x: Vec3, y: Vec3, z: Vec3, translation: Vec3) -> Self {
        Self {
            basis: Mat3::from_columns(&[x, y, z]),
            translation,
        }
    }

    #[inline]
    pub fn basis_x(&self) -> Vec3 {
        self.basis.column(0).into_owned()
    }

    #[inline]
    pub fn basis_y(&self) -> Vec3 {
        self.basis.column(1).into_owned()
    }

    #[inline]
    pub fn basis_z(&self) -> Vec3 {
        self.basis.column(2).into_owned()
    }

    /// Scale factor of the basis, assuming it is uniform.
    #[inline]
    pub fn uniform_scale(&self) -> f32 {
        self.basis_x().norm()
    }

    /// The basis with each column rescaled to unit length.
    #[inline]
    pub fn orthonormal_basis(&self) -> Mat3 {
        normalize_columns(&self.basis)
    }

    /// Rotation part as a quaternion, with scale removed.
    pub fn rotation(&self) -> Quat {
        let rotation = na::Rotation3::from_matrix_unchecked(self.orthonormal_basis());
        Quat::from_rotation_matrix(&rotation)
    }

    #[inline]
    pub fn transform_vector(&self, v: &Vec3) -> Vec3 {
        self.basis * v
    }

    #[inline]
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        self.basis * p + self.translation
    }

    /// Column-major 4x4 matrix, translation in the last column.
    pub fn to_homogeneous(&self) -> na::Matrix4<f32> {
        na::Matrix4::new_translation(&self.translation) * self.basis.to_homogeneous()
    }
}

impl From<Iso> for Transform {
    fn from(iso: Iso) -> Self {
        Self {
            basis: iso.rotation.to_rotation_matrix().into_inner(),
            translation: iso.translation.vector,
        }
    }
}

/// Signed principal local-space axis.
///
/// Picks which local axis of a look-at transform points at the target.
/// Y+ is forward by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    XPositive,
    XNegative,
    #[default]
    YPositive,
    YNegative,
    ZPositive,
    ZNegative,
}

impl Axis {
    pub const ALL: [Axis; 6] = [
        Axis::XPositive,
        Axis::XNegative,
        Axis::YPositive,
        Axis::YNegative,
        Axis::ZPositive,
        Axis::ZNegative,
    ];

    /// Signed unit vector of this axis in local space.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::XPositive => Vec3::x(),
            Axis::XNegative => -Vec3::x(),
            Axis::YPositive => Vec3::y(),
            Axis::YNegative => -Vec3::y(),
            Axis::ZPositive => Vec3::z(),
            Axis::ZNegative => -Vec3::z(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::XPositive => "X+",
            Axis::XNegative => "X-",
            Axis::YPositive => "Y+",
            Axis::YNegative => "Y-",
            Axis::ZPositive => "Z+",
            Axis::ZNegative => "Z-",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAxisError {
    #[error("empty axis name")]
    Empty,
    #[error("unknown axis `{0}`, expected one of X+, X-, Y+, Y-, Z+, Z-")]
    Unknown(String),
}

impl FromStr for Axis {
    type Err = ParseAxisError;

    /// Accepts `X+`, `x-`, `+y`, `-Z` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseAxisError::Empty);
        }

        let upper = trimmed.to_ascii_uppercase();
        let axis = match upper.as_str() {
            "X+" | "+X" => Axis::XPositive,
            "X-" | "-X" => Axis::XNegative,
            "Y+" | "+Y" => Axis::YPositive,
            "Y-" | "-Y" => Axis::YNegative,
            "Z+" | "+Z" => Axis::ZPositive,
            "Z-" | "-Z" => Axis::ZNegative,
            _ => return Err(ParseAxisError::Unknown(trimmed.to_owned())),
        };

        Ok(axis)
    }
}
