//! Orientation math
//!
//! Quaternion helpers shared by the camera and the player model spin.
//! Everything here is a pure function over glam values.

use glam::{Quat, Vec3};

/// Rotation of `angle` radians about `axis`.
///
/// The axis is normalized first; a zero axis yields the identity.
#[inline]
pub fn axis_angle(axis: Vec3, angle: f32) -> Quat {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, angle),
        None => Quat::IDENTITY,
    }
}

/// Apply `delta` on top of `current` in world space: `delta * current`.
#[inline]
pub fn compose_world(delta: Quat, current: Quat) -> Quat {
    delta * current
}

/// Rotate a vector by a quaternion.
#[inline]
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    q * v
}

/// Spherical interpolation between `from` and `to` along the short arc.
///
/// Nearly parallel inputs fall back to a normalized lerp.
#[inline]
pub fn slerp(from: Quat, to: Quat, t: f32) -> Quat {
    from.slerp(to, t)
}

/// Angular distance between two orientations in radians, ignoring sign.
pub fn angle_between(a: Quat, b: Quat) -> f32 {
    let d = a.conjugate() * b;
    2.0 * d.xyz().length().atan2(d.w.abs())
}
