//! Level Module
//!
//! The in-memory level: static obstacles plus four trigger queues.
//!
//! # Components
//!
//! - [`Platform`], [`Spike`], [`JumpPad`] - static geometry, never mutated
//! - [`GravityChanger`], [`RotationChanger`], [`CameraSpinChanger`],
//!   [`PlayerSpinChanger`] - one-shot trigger records
//! - [`TriggerQueue`] - authored-order records with a forward-only cursor
//! - [`LevelDescription`] - serde form of an authored level, in authored units
//!
//! Only the trigger cursors change after a level is built.

pub mod description;
pub mod obstacles;
pub mod queue;
pub mod triggers;

use std::path::Path;

use glam::Vec3;

pub use description::{
    CameraSpinEntry, GravityEntry, LevelDescription, PlayerSpinEntry, RotateEntry, SpikeEntry,
};
pub use obstacles::{JumpPad, Platform, SPIKE_HEIGHT, SPIKE_RADIUS, Spike};
pub use queue::TriggerQueue;
pub use triggers::{
    CameraSpinChanger, GravityChanger, PlayerSpinChanger, RotationChanger, Trigger,
};

use crate::error::LevelError;

/// A fully built level.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Opaque music identifier for the host's audio collaborator
    pub music: String,
    pub speed_multiplier: f32,
    pub start_position: Option<Vec3>,

    pub platforms: Vec<Platform>,
    pub spikes: Vec<Spike>,
    pub jump_pads: Vec<JumpPad>,

    pub gravity_changers: TriggerQueue<GravityChanger>,
    pub rotation_changers: TriggerQueue<RotationChanger>,
    pub camera_spin_changers: TriggerQueue<CameraSpinChanger>,
    pub player_spin_changers: TriggerQueue<PlayerSpinChanger>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            music: String::new(),
            speed_multiplier: 1.0,
            start_position: None,
            platforms: Vec::new(),
            spikes: Vec::new(),
            jump_pads: Vec::new(),
            gravity_changers: TriggerQueue::default(),
            rotation_changers: TriggerQueue::default(),
            camera_spin_changers: TriggerQueue::default(),
            player_spin_changers: TriggerQueue::default(),
        }
    }
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and build a level from its JSON description.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let description: LevelDescription = serde_json::from_str(json)?;
        description.into_level()
    }

    /// Read, parse and build a level file.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&json)?;
        log::info!("Level '{}' loaded", path.display());
        Ok(level)
    }

    pub fn music(&self) -> &str {
        &self.music
    }

    /// Authored start position, or `fallback` when the level has none.
    pub fn start_position_or(&self, fallback: Vec3) -> Vec3 {
        self.start_position.unwrap_or(fallback)
    }

    /// Smallest z reached by any static obstacle, i.e. where the authored
    /// course ends. `None` for a level without geometry.
    pub fn course_end_z(&self) -> Option<f32> {
        let platform_ends = self
            .platforms
            .iter()
            .map(|p| p.position.z - p.scale.z * 0.5);
        let spike_ends = self.spikes.iter().map(|s| s.position.z);
        let pad_ends = self.jump_pads.iter().map(|j| j.position.z);
        platform_ends
            .chain(spike_ends)
            .chain(pad_ends)
            .reduce(f32::min)
    }

    /// One-line object census, used when logging a freshly built level.
    pub fn summary(&self) -> String {
        format!(
            "Platforms: {}, Spikes: {}, JumpPads: {}, Rotations: {}, CameraSpins: {}, PlayerSpins: {}, GravityChanges: {}",
            self.platforms.len(),
            self.spikes.len(),
            self.jump_pads.len(),
            self.rotation_changers.len(),
            self.camera_spin_changers.len(),
            self.player_spin_changers.len(),
            self.gravity_changers.len(),
        )
    }
}
