//! Static level geometry: platforms, spikes and jump pads.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::GravityDirection;
use crate::physics::collision::{Aabb, cone_collision};

/// Base radius every spike is built with.
pub const SPIKE_RADIUS: f32 = 0.375;

/// Height every spike is built with.
pub const SPIKE_HEIGHT: f32 = 2.0;

/// Axis-aligned box platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Center of the box
    pub position: Vec3,
    /// Full extent on each axis
    pub scale: Vec3,
}

impl Platform {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.scale * 0.5)
    }
}

/// Cone obstacle. Touching one kills the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spike {
    /// Centre of the cone's base
    pub position: Vec3,
    pub radius: f32,
    pub height: f32,
    /// Direction the apex points
    pub orientation: GravityDirection,
}

impl Spike {
    /// Spike with the standard radius and height.
    pub fn new(position: Vec3, orientation: GravityDirection) -> Self {
        Self {
            position,
            radius: SPIKE_RADIUS,
            height: SPIKE_HEIGHT,
            orientation,
        }
    }

    /// Whether a player centred at `player_pos` touches this spike.
    #[inline]
    pub fn hits(&self, player_pos: Vec3, player_size: f32) -> bool {
        cone_collision(
            player_pos,
            player_size,
            self.position,
            self.radius,
            self.height,
            self.orientation,
        )
    }
}

/// Bounce pad. Its reach radius comes from [`crate::config::PhysicsConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpPad {
    pub position: Vec3,
}

impl JumpPad {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}
