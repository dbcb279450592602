//! Trigger records
//!
//! Each record fires once, the first tick the player's z drops below its
//! `trigger_z`. Records carry runtime units (radians, radians/second).

use glam::{Quat, Vec3};

use crate::physics::GravityDirection;
use crate::physics::orientation::axis_angle;

/// Anything keyed to a forward-position threshold.
pub trait Trigger {
    fn trigger_z(&self) -> f32;

    /// Whether a player at `position_z` has crossed this trigger.
    #[inline]
    fn crossed(&self, position_z: f32) -> bool {
        position_z < self.trigger_z()
    }
}

/// Switches the player's gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityChanger {
    pub trigger_z: f32,
    pub new_gravity: GravityDirection,
}

/// Blends the camera to an absolute orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationChanger {
    pub trigger_z: f32,
    pub target_orientation: Quat,
    /// Seconds
    pub duration: f32,
}

/// Spins the camera relative to wherever it currently points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpinChanger {
    pub trigger_z: f32,
    pub axis: Vec3,
    /// Radians per second
    pub speed: f32,
    /// Seconds
    pub duration: f32,
}

impl CameraSpinChanger {
    /// Build from a total sweep; speed is `total_angle / duration`.
    pub fn from_total_angle(trigger_z: f32, axis: Vec3, total_angle: f32, duration: f32) -> Self {
        Self {
            trigger_z,
            axis,
            speed: total_angle / duration,
            duration,
        }
    }

    /// Angle swept over the whole spin.
    #[inline]
    pub fn total_angle(&self) -> f32 {
        self.speed * self.duration
    }

    /// Rotation for the whole spin.
    pub fn total_rotation(&self) -> Quat {
        axis_angle(self.axis, self.total_angle())
    }
}

/// Replaces the player model's spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSpinChanger {
    pub trigger_z: f32,
    pub new_axis: Vec3,
    /// Radians per second
    pub new_speed: f32,
}

impl Trigger for GravityChanger {
    fn trigger_z(&self) -> f32 {
        self.trigger_z
    }
}

impl Trigger for RotationChanger {
    fn trigger_z(&self) -> f32 {
        self.trigger_z
    }
}

impl Trigger for CameraSpinChanger {
    fn trigger_z(&self) -> f32 {
        self.trigger_z
    }
}

impl Trigger for PlayerSpinChanger {
    fn trigger_z(&self) -> f32 {
        self.trigger_z
    }
}
