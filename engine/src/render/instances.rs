//! GPU Instance Data for the Rendering Collaborator
//!
//! Read-only snapshots of the run, laid out for direct upload into
//! instance buffers. Nothing here touches a GPU; the renderer owns that.

use glam::{Quat, Vec3};

use crate::config::TRAIL_LENGTH;
use crate::game::GameState;
use crate::level::Level;
use crate::player::GhostTrail;

/// Shape tags shared with the shaders.
pub mod instance_kind {
    pub const PLATFORM: u32 = 0;
    pub const SPIKE: u32 = 1;
    pub const JUMP_PAD: u32 = 2;
    pub const PLAYER: u32 = 3;
}

/// One drawable object.
///
/// Layout (48 bytes total):
/// - position: vec3<f32> (12 bytes)
/// - kind:     u32       (4 bytes)
/// - rotation: vec4<f32> (16 bytes) - quaternion (x, y, z, w)
/// - scale:    vec3<f32> (12 bytes) - full extents (spikes: radius, height, radius)
/// - _pad:     u32       (4 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectInstance {
    pub position: [f32; 3],
    pub kind: u32,
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    pub _pad: u32,
}

static_assertions::assert_eq_size!(ObjectInstance, [u8; 48]);

impl ObjectInstance {
    pub fn new(kind: u32, position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position: position.to_array(),
            kind,
            rotation: rotation.to_array(),
            scale: scale.to_array(),
            _pad: 0,
        }
    }
}

/// One ghost trail sample with its fade.
///
/// Layout (16 bytes): position vec3<f32> + alpha f32.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TrailPoint {
    pub position: [f32; 3],
    /// 1.0 for the newest sample, fading towards 0.0 for the oldest
    pub alpha: f32,
}

static_assertions::assert_eq_size!(TrailPoint, [u8; 16]);

/// Static geometry of a level, in level order: platforms, spikes, pads.
///
/// Build once per level; obstacles never move.
pub fn level_instances(level: &Level) -> Vec<ObjectInstance> {
    let platforms = level.platforms.iter().map(|p| {
        ObjectInstance::new(instance_kind::PLATFORM, p.position, Quat::IDENTITY, p.scale)
    });
    let spikes = level.spikes.iter().map(|s| {
        ObjectInstance::new(
            instance_kind::SPIKE,
            s.position,
            s.orientation.spike_rotation(),
            Vec3::new(s.radius, s.height, s.radius),
        )
    });
    let pads = level.jump_pads.iter().map(|j| {
        ObjectInstance::new(instance_kind::JUMP_PAD, j.position, Quat::IDENTITY, Vec3::ONE)
    });
    platforms.chain(spikes).chain(pads).collect()
}

/// The player's box with its visual spin.
pub fn player_instance(state: &GameState) -> ObjectInstance {
    ObjectInstance::new(
        instance_kind::PLAYER,
        state.player.position,
        state.player.orientation,
        Vec3::splat(state.config.player_size * 2.0),
    )
}

/// Trail samples newest first, plus how many are valid.
pub fn trail_points(trail: &GhostTrail) -> ([TrailPoint; TRAIL_LENGTH], usize) {
    let mut points = [TrailPoint::default(); TRAIL_LENGTH];
    let len = trail.len();
    for (age, (slot, position)) in points.iter_mut().zip(trail.iter()).enumerate() {
        *slot = TrailPoint {
            position: position.to_array(),
            alpha: 1.0 - age as f32 / TRAIL_LENGTH as f32,
        };
    }
    (points, len)
}
