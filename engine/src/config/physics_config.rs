//! Physics Configuration
//!
//! Every constant the tick reads lives here. `Default` returns the values
//! the shipped levels were authored against; a JSON file can override any
//! subset of them.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Number of positions kept in the player's ghost trail.
pub const TRAIL_LENGTH: usize = 20;

/// Per-list capacity for obstacles and triggers in an authored level.
pub const MAX_LEVEL_OBJECTS: usize = 512;

/// Tunable physics constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Half-extent of the player's collision box on every axis
    pub player_size: f32,
    /// Lateral acceleration from the slide keys (units/s^2)
    pub slide_accel: f32,
    /// Instantaneous jump impulse along gravity-up (units/s)
    pub jump_force: f32,
    /// Forward speed along -Z before the level's speed multiplier
    pub forward_speed: f32,
    /// Signed gravity acceleration along gravity-up (negative pulls down)
    pub gravity_force: f32,
    /// Velocity along gravity-up set by a jump pad
    pub bounce_force: f32,
    /// Multiplier applied to the slide velocity once per tick
    pub friction_damping: f32,
    /// Frame time clamp in seconds
    pub max_delta_time: f32,
    /// Minimum dot(normal, gravity-up) for a contact to count as ground
    pub ground_alignment: f32,
    /// Jump pad trigger radius before the player's half-size is added
    pub jump_pad_radius: f32,
    /// Start position used when a level does not author one
    pub default_start_position: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            player_size: 0.5,
            slide_accel: 50.0,
            jump_force: 12.0,
            forward_speed: 20.0,
            gravity_force: -25.0,
            bounce_force: 20.0,
            friction_damping: 0.95,
            max_delta_time: 0.1,
            ground_alignment: 0.7,
            jump_pad_radius: 1.0,
            default_start_position: Vec3::new(0.0, 5.0, 0.0),
        }
    }
}

impl PhysicsConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file from disk.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Squared distance under which the player touches a jump pad.
    #[inline]
    pub fn jump_pad_reach_sq(&self) -> f32 {
        let reach = self.jump_pad_radius + self.player_size;
        reach * reach
    }

    /// Clamp a raw frame time to the configured maximum.
    #[inline]
    pub fn clamp_delta(&self, delta_time: f32) -> f32 {
        delta_time.min(self.max_delta_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PhysicsConfig::from_json_str(r#"{ "forward_speed": 30.0 }"#).unwrap();
        assert_eq!(config.forward_speed, 30.0);
        assert_eq!(config.player_size, 0.5);
        assert_eq!(config.gravity_force, -25.0);
    }

    #[test]
    fn test_clamp_delta() {
        let config = PhysicsConfig::default();
        assert_eq!(config.clamp_delta(0.5), 0.1);
        assert_eq!(config.clamp_delta(0.016), 0.016);
    }

    #[test]
    fn test_jump_pad_reach() {
        let config = PhysicsConfig::default();
        assert!((config.jump_pad_reach_sq() - 2.25).abs() < 1e-6);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            PhysicsConfig::from_json_str("{ not json"),
            Err(LevelError::Json(_))
        ));
    }
}
