use crate::Vec3;

/// Threshold on `cos(pitch)` below which an Euler decomposition is treated as
/// gimbal locked.
///
/// At lock the X and Z rotations act about the same world axis, so only their
/// sum is recoverable. The decomposition then pins Z to zero and lets X carry
/// the whole rotation.
pub const GIMBAL_LOCK_EPS: f32 = 1.0e-5;

/// Length of a quaternion's imaginary part below which the rotation axis is
/// considered undefined (near-zero rotation).
pub const AXIS_ANGLE_EPS: f32 = 1.0e-6;

/// Minimum `from -> to` distance (meters) for a look-at to have a direction.
/// Shorter look vectors produce an identity orientation at `from`.
pub const LOOK_AT_EPS: f32 = 1.0e-6;

/// How close `|dir ⋅ up|` may get to 1 before the look-at switches to a
/// secondary reference axis.
pub const PARALLEL_EPS: f32 = 1.0e-3;

/// Axis reported for a zero rotation by `quaternion_to_axis_angle`.
pub const DEFAULT_ROTATION_AXIS: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// World up used to complete look-at bases. Z is up.
pub const WORLD_UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
