//! Game State
//!
//! Central state struct that owns the player, the level and the camera.
//! The host owns one of these per run and hands it to the tick and the
//! renderer explicitly; nothing is registered globally.

use glam::Vec3;

use crate::camera::CameraOrientation;
use crate::config::PhysicsConfig;
use crate::level::Level;
use crate::physics::GravityDirection;
use crate::player::Player;

/// Central game state for one run of one level
#[derive(Debug, Clone)]
pub struct GameState {
    // === Run ===
    pub player: Player,
    /// Obstacles and trigger queues; only the queue cursors change
    pub level: Level,
    /// Player gravity; changed only by gravity triggers
    pub gravity: GravityDirection,
    pub speed_multiplier: f32,

    // === Camera ===
    pub camera: CameraOrientation,

    // === Settings ===
    pub config: PhysicsConfig,

    // === Bookkeeping ===
    /// Where the run started
    pub start_position: Vec3,
    /// Sum of clamped tick times
    pub run_time: f32,
    /// Ticks processed, including ones after death
    pub tick_count: u64,
    course_end_z: Option<f32>,
}

impl GameState {
    /// Start a run of `level` with the default physics constants.
    pub fn new(level: Level) -> Self {
        Self::with_config(level, PhysicsConfig::default())
    }

    /// Start a run of `level` with custom physics constants.
    pub fn with_config(level: Level, config: PhysicsConfig) -> Self {
        let start_position = level.start_position_or(config.default_start_position);
        let course_end_z = level.course_end_z();

        Self {
            player: Player::new(start_position),
            gravity: GravityDirection::Down,
            speed_multiplier: level.speed_multiplier,
            level,
            camera: CameraOrientation::new(),
            config,
            start_position,
            run_time: 0.0,
            tick_count: 0,
            course_end_z,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.player.is_dead
    }

    /// Whether the player has run past the last authored obstacle.
    pub fn past_course_end(&self) -> bool {
        self.course_end_z
            .is_some_and(|end| self.player.position.z < end)
    }

    /// Forward distance covered so far.
    pub fn distance(&self) -> f32 {
        self.player.distance_from(self.start_position.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Platform;

    #[test]
    fn test_default_start_position() {
        let state = GameState::new(Level::new());
        assert_eq!(state.player.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(state.gravity, GravityDirection::Down);
        assert_eq!(state.speed_multiplier, 1.0);
        assert!(state.camera.is_idle());
        assert!(!state.past_course_end());
    }

    #[test]
    fn test_level_start_and_speed() {
        let mut level = Level::new();
        level.start_position = Some(Vec3::new(1.0, 2.0, 10.0));
        level.speed_multiplier = 1.5;
        let state = GameState::new(level);
        assert_eq!(state.player.position, Vec3::new(1.0, 2.0, 10.0));
        assert_eq!(state.speed_multiplier, 1.5);
    }

    #[test]
    fn test_past_course_end() {
        let mut level = Level::new();
        level
            .platforms
            .push(Platform::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(4.0, 1.0, 20.0)));
        let mut state = GameState::new(level);
        state.player.position.z = -19.0;
        assert!(!state.past_course_end());
        state.player.position.z = -21.0;
        assert!(state.past_course_end());
    }
}
