//! Level Description (.json)
//!
//! Serde form of an authored level. Angles are in degrees and spins are
//! given as a total sweep; [`LevelDescription::into_level`] converts to the
//! runtime units the tick works in.
//!
//! ```json
//! {
//!   "music": "track01.ogg",
//!   "speed": 1.2,
//!   "start_position": [0.0, 2.0, 0.0],
//!   "platforms": [{ "position": [0, 0, -50], "scale": [4, 1, 100] }],
//!   "spikes": [{ "position": [0, 0.5, -30], "orientation": "UP" }],
//!   "gravity": [{ "trigger_z": -40, "direction": "LEFT" }],
//!   "rotate": [{ "trigger_z": -40, "axis": [0, 0, 1], "angle": -90, "duration": 0.5 }]
//! }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Level;
use super::obstacles::{JumpPad, Platform, Spike};
use super::queue::TriggerQueue;
use super::triggers::{CameraSpinChanger, GravityChanger, PlayerSpinChanger, RotationChanger};
use crate::config::MAX_LEVEL_OBJECTS;
use crate::error::LevelError;
use crate::physics::GravityDirection;
use crate::physics::orientation::axis_angle;

fn default_spike_orientation() -> GravityDirection {
    GravityDirection::Up
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpikeEntry {
    pub position: Vec3,
    #[serde(default = "default_spike_orientation")]
    pub orientation: GravityDirection,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GravityEntry {
    pub trigger_z: f32,
    pub direction: GravityDirection,
}

/// Absolute camera rotation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RotateEntry {
    pub trigger_z: f32,
    pub axis: Vec3,
    /// Degrees
    pub angle: f32,
    /// Seconds
    pub duration: f32,
}

/// Relative camera spin.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CameraSpinEntry {
    pub trigger_z: f32,
    pub axis: Vec3,
    /// Total sweep in degrees
    pub angle: f32,
    /// Seconds
    pub duration: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerSpinEntry {
    pub trigger_z: f32,
    pub axis: Vec3,
    /// Degrees per second
    pub speed: f32,
}

/// An authored level as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LevelDescription {
    pub music: String,
    /// Forward speed multiplier
    pub speed: f32,
    pub start_position: Option<Vec3>,
    pub platforms: Vec<Platform>,
    pub spikes: Vec<SpikeEntry>,
    pub jump_pads: Vec<JumpPad>,
    pub gravity: Vec<GravityEntry>,
    pub rotate: Vec<RotateEntry>,
    pub camera_spin: Vec<CameraSpinEntry>,
    pub player_spin: Vec<PlayerSpinEntry>,
}

impl Default for LevelDescription {
    fn default() -> Self {
        Self {
            music: String::new(),
            speed: 1.0,
            start_position: None,
            platforms: Vec::new(),
            spikes: Vec::new(),
            jump_pads: Vec::new(),
            gravity: Vec::new(),
            rotate: Vec::new(),
            camera_spin: Vec::new(),
            player_spin: Vec::new(),
        }
    }
}

/// Keep at most [`MAX_LEVEL_OBJECTS`] entries, warning about the rest.
fn capped<T>(mut entries: Vec<T>, kind: &str) -> Vec<T> {
    if entries.len() > MAX_LEVEL_OBJECTS {
        log::warn!(
            "{kind}: {} entries authored, keeping the first {MAX_LEVEL_OBJECTS}",
            entries.len()
        );
        entries.truncate(MAX_LEVEL_OBJECTS);
    }
    entries
}

fn check_duration(kind: &'static str, index: usize, duration: f32) -> Result<(), LevelError> {
    if duration > 0.0 {
        Ok(())
    } else {
        Err(LevelError::InvalidDuration {
            kind,
            index,
            duration,
        })
    }
}

fn check_axis(kind: &'static str, index: usize, axis: Vec3) -> Result<(), LevelError> {
    if axis.length_squared() > 0.0 {
        Ok(())
    } else {
        Err(LevelError::ZeroAxis { kind, index })
    }
}

impl LevelDescription {
    /// Convert to a runtime [`Level`]. Authored order is preserved; lists
    /// are never sorted.
    pub fn into_level(self) -> Result<Level, LevelError> {
        let rotation_changers = capped(self.rotate, "rotate")
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                check_duration("rotate", index, r.duration)?;
                check_axis("rotate", index, r.axis)?;
                Ok(RotationChanger {
                    trigger_z: r.trigger_z,
                    target_orientation: axis_angle(r.axis, r.angle.to_radians()),
                    duration: r.duration,
                })
            })
            .collect::<Result<Vec<_>, LevelError>>()?;

        let camera_spin_changers = capped(self.camera_spin, "camera_spin")
            .into_iter()
            .enumerate()
            .map(|(index, c)| {
                check_duration("camera_spin", index, c.duration)?;
                check_axis("camera_spin", index, c.axis)?;
                Ok(CameraSpinChanger::from_total_angle(
                    c.trigger_z,
                    c.axis.normalize(),
                    c.angle.to_radians(),
                    c.duration,
                ))
            })
            .collect::<Result<Vec<_>, LevelError>>()?;

        let player_spin_changers = capped(self.player_spin, "player_spin")
            .into_iter()
            .map(|p| PlayerSpinChanger {
                trigger_z: p.trigger_z,
                new_axis: p.axis.normalize_or_zero(),
                new_speed: p.speed.to_radians(),
            })
            .collect();

        let gravity_changers = capped(self.gravity, "gravity")
            .into_iter()
            .map(|g| GravityChanger {
                trigger_z: g.trigger_z,
                new_gravity: g.direction,
            })
            .collect();

        let spikes = capped(self.spikes, "spike")
            .into_iter()
            .map(|s| Spike::new(s.position, s.orientation))
            .collect();

        let level = Level {
            music: self.music,
            speed_multiplier: self.speed,
            start_position: self.start_position,
            platforms: capped(self.platforms, "platform"),
            spikes,
            jump_pads: capped(self.jump_pads, "jumppad"),
            gravity_changers: TriggerQueue::new(gravity_changers),
            rotation_changers: TriggerQueue::new(rotation_changers),
            camera_spin_changers: TriggerQueue::new(camera_spin_changers),
            player_spin_changers: TriggerQueue::new(player_spin_changers),
        };

        log::info!("{}", level.summary());
        Ok(level)
    }
}
