//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics system, re-exported from the glam library, plus the
//! closed set of gravity directions a level can switch between.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

pub use glam::{Quat, Vec3};

/// One of the four gravity directions.
///
/// The same enum orients spikes: a spike's apex points along the
/// direction it is tagged with (UP = apex towards +Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GravityDirection {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl GravityDirection {
    /// Unit vector opposing gravity.
    #[inline]
    pub fn up(self) -> Vec3 {
        match self {
            GravityDirection::Down => Vec3::new(0.0, 1.0, 0.0),
            GravityDirection::Up => Vec3::new(0.0, -1.0, 0.0),
            GravityDirection::Left => Vec3::new(1.0, 0.0, 0.0),
            GravityDirection::Right => Vec3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Unit vector that the "right" key slides the player along.
    #[inline]
    pub fn control_right(self) -> Vec3 {
        match self {
            GravityDirection::Down | GravityDirection::Up => Vec3::new(1.0, 0.0, 0.0),
            GravityDirection::Left => Vec3::new(0.0, 1.0, 0.0),
            GravityDirection::Right => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Rotation taking local +Y into the world direction a spike with this
    /// orientation points.
    pub fn spike_rotation(self) -> Quat {
        match self {
            GravityDirection::Up => Quat::IDENTITY,
            GravityDirection::Down => Quat::from_rotation_z(PI),
            GravityDirection::Left => Quat::from_rotation_z(FRAC_PI_2),
            GravityDirection::Right => Quat::from_rotation_z(-FRAC_PI_2),
        }
    }

    /// Level-file token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            GravityDirection::Down => "DOWN",
            GravityDirection::Up => "UP",
            GravityDirection::Left => "LEFT",
            GravityDirection::Right => "RIGHT",
        }
    }
}

impl std::fmt::Display for GravityDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
