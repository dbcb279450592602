//! Force integration for the runner.
//!
//! Gravity, jump impulse and slide input are applied in a fixed order,
//! then the slide component is damped and forward speed is pinned.
//!
//! The damping factor is applied once per call, not per second, so
//! perceived friction depends on the frame rate.

use glam::Vec3;

use super::types::GravityDirection;
use crate::config::PhysicsConfig;

/// Control state sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Jump key held
    pub jump: bool,
    /// -1 (left), 0, or 1 (right)
    pub slide: f32,
}

/// Apply this tick's forces to `velocity`.
///
/// Returns `true` when a jump impulse was applied (the caller emits the
/// sound). `grounded` is cleared on a jump.
pub fn apply_forces(
    velocity: &mut Vec3,
    grounded: &mut bool,
    input: ControlInput,
    gravity: GravityDirection,
    speed_multiplier: f32,
    config: &PhysicsConfig,
    delta_time: f32,
) -> bool {
    let up = gravity.up();
    let right = gravity.control_right();

    *velocity += up * config.gravity_force * delta_time;

    let jumped = input.jump && *grounded;
    if jumped {
        *grounded = false;
        *velocity += up * config.jump_force;
    }

    *velocity += right * input.slide * config.slide_accel * delta_time;

    let vertical = up * velocity.dot(up);
    let slide = (*velocity - vertical) * config.friction_damping;

    *velocity = vertical + slide;
    velocity.z = -config.forward_speed * speed_multiplier;

    jumped
}

/// Explicit Euler position step.
#[inline]
pub fn integrate_position(position: &mut Vec3, velocity: Vec3, delta_time: f32) {
    *position += velocity * delta_time;
}

/// Remove the part of `velocity` that drives into a surface with `normal`.
/// Tangential velocity is preserved.
#[inline]
pub fn cancel_into_surface(velocity: &mut Vec3, normal: Vec3) {
    let into = velocity.dot(normal);
    if into < 0.0 {
        *velocity -= normal * into;
    }
}
