//! Player Module
//!
//! Runtime state of the player box.
//!
//! # Components
//!
//! - [`Player`] - position, velocity, visual spin, contact and life flags, key state
//! - [`GhostTrail`] - fixed ring of recent positions for the renderer
//!
//! The player's orientation is purely visual; collision always uses an
//! axis-aligned box of half-size `PhysicsConfig::player_size`.

pub mod trail;

use glam::{Quat, Vec3};

pub use trail::GhostTrail;

use crate::input::KeyState;
use crate::physics::collision::Aabb;
use crate::physics::orientation::{axis_angle, compose_world};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// World units per second
    pub velocity: Vec3,
    /// Visual model orientation
    pub orientation: Quat,
    /// Model spin axis, set by player-spin triggers
    pub rotation_axis: Vec3,
    /// Model spin speed in radians per second; 0 disables the spin
    pub rotation_speed: f32,
    /// Set only by a ground-aligned contact during the current tick
    pub is_grounded: bool,
    /// Sticky: once set the player never moves again
    pub is_dead: bool,
    pub trail: GhostTrail,
    pub keys: KeyState,
}

impl Player {
    /// Fresh player at rest at `start_position`.
    pub fn new(start_position: Vec3) -> Self {
        Self {
            position: start_position,
            velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            rotation_axis: Vec3::ZERO,
            rotation_speed: 0.0,
            is_grounded: false,
            is_dead: false,
            trail: GhostTrail::new(),
            keys: KeyState::new(),
        }
    }

    /// Collision box centred on the player.
    pub fn aabb(&self, half_size: f32) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(half_size))
    }

    /// Replace the model spin. The new spin takes over immediately.
    pub fn set_spin(&mut self, axis: Vec3, speed: f32) {
        self.rotation_axis = axis;
        self.rotation_speed = speed;
    }

    /// Advance the model spin by one tick.
    pub fn update_spin(&mut self, delta_time: f32) {
        if self.rotation_speed != 0.0 {
            let delta = axis_angle(self.rotation_axis, self.rotation_speed * delta_time);
            self.orientation = compose_world(delta, self.orientation);
        }
    }

    /// Forward distance covered from `start_z` (the run goes towards -Z).
    pub fn distance_from(&self, start_z: f32) -> f32 {
        start_z - self.position.z
    }
}
