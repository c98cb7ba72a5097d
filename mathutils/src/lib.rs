pub mod angle;
pub mod axis_angle;
pub mod constants;
pub mod euler;
pub mod look_at;
pub mod transform;
pub mod trig;
pub mod types;

pub use angle::{deg_to_rad, rad_to_deg, wrap_angle};
pub use axis_angle::quaternion_to_axis_angle;
pub use constants::{
    AXIS_ANGLE_EPS, DEFAULT_ROTATION_AXIS, DEG_TO_RAD, GIMBAL_LOCK_EPS, LOOK_AT_EPS, PARALLEL_EPS,
    RAD_TO_DEG, WORLD_UP,
};
pub use euler::{
    EulerAxis, ROTATION_ORDER, compose_zyx, euler_degrees_to_quaternion,
    euler_radians_to_quaternion, quaternion_to_euler_degrees, quaternion_to_euler_radians,
};
pub use look_at::{create_look_at, create_look_at_default};
pub use transform::{
    euler_degrees_to_transform, euler_degrees_to_transform_precise, euler_radians_to_transform,
    euler_radians_to_transform_precise, transform_to_euler_degrees, transform_to_euler_radians,
};
pub use types::{Axis, Iso, Mat3, ParseAxisError, Quat, Transform, Vec3};
