/*!
Look-at transform construction.

Builds a transform placed at `from` whose chosen local axis points at `to`.

Basis completion
- World up is `WORLD_UP` (+Z).
- If the look direction is (nearly) parallel to up, `dir × X` is used as the
  reference instead so the cross products never collapse.
- `right = dir × up`, `up = right × dir`; the forward axis then picks which
  signed combination lands in each column. Every case is right-handed.

Degenerate input
- `from == to` (within `LOOK_AT_EPS`) has no direction. The result is the
  identity orientation positioned at `from`.
*/

use crate::{Axis, LOOK_AT_EPS, PARALLEL_EPS, Transform, Vec3, WORLD_UP};

/// Look-at transform with Y+ as the forward axis.
#[inline]
pub fn create_look_at_default(from: &Vec3, to: &Vec3) -> Transform {
    create_look_at(from, to, Axis::default())
}

/// Transform at `from` whose `forward_axis` points toward `to`.
pub fn create_look_at(from: &Vec3, to: &Vec3, forward_axis: Axis) -> Transform {
    let delta = to - from;
    let dist = delta.norm();

    if dist <= LOOK_AT_EPS {
        log::trace!("look-at with coincident points at {from:?}, using identity orientation");
        return Transform::from_translation(*from);
    }

    let forward = delta / dist;

    let mut up = WORLD_UP;
    if forward.dot(&up).abs() > 1.0 - PARALLEL_EPS {
        up = forward.cross(&Vec3::x());
    }

    let right = forward.cross(&up).normalize();
    let up = right.cross(&forward).normalize();

    let (x, y, z) = match forward_axis {
        Axis::XPositive => (forward, -right, up),
        Axis::XNegative => (-forward, right, up),
        Axis::YPositive => (right, forward, up),
        Axis::YNegative => (-right, -forward, up),
        Axis::ZPositive => (right, -up, forward),
        Axis::ZNegative => (right, up, -forward),
    };

    Transform::from_basis_and_translation(x, y, z, *from)
}
