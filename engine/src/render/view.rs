//! Per-frame camera and model matrices derived from the game state.

use glam::{Mat4, Quat, Vec3};

use crate::game::GameState;

/// How far behind and above the player the camera trails, in camera space.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 3.0, 8.0);

/// Matrices the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub camera_orientation: Quat,
    /// World-to-camera transform
    pub view: Mat4,
    /// Player model transform, including the visual spin
    pub player_model: Mat4,
}

impl FrameView {
    pub fn from_state(state: &GameState) -> Self {
        let orientation = state.camera.orientation;
        let eye = state.player.position + orientation * CAMERA_OFFSET;
        let view = Mat4::from_quat(orientation.inverse()) * Mat4::from_translation(-eye);

        let player_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(state.config.player_size * 2.0),
            state.player.orientation,
            state.player.position,
        );

        Self {
            camera_orientation: orientation,
            view,
            player_model,
        }
    }
}
