//! Camera orientation state machine
//!
//! The camera's orientation is driven by level triggers only and is
//! independent of the player's model spin.
//!
//! ```text
//!   Idle --rotation trigger--> Rotating --t reaches 1--> Idle
//!   Idle --spin trigger------> Spinning --timer <= 0---> Idle
//! ```
//!
//! Rotating and Spinning exclude each other, and while either runs no new
//! rotation or spin trigger may start.

use glam::{Quat, Vec3};

use crate::level::{CameraSpinChanger, RotationChanger};
use crate::physics::orientation::{axis_angle, compose_world, slerp};

/// What the camera is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OrientationState {
    #[default]
    Idle,
    /// Bounded blend from `source` to `target`.
    Rotating {
        source: Quat,
        target: Quat,
        elapsed: f32,
        duration: f32,
    },
    /// Continuous spin about `axis`. `target` is where the spin must end
    /// up and is snapped to when `remaining` runs out.
    Spinning {
        axis: Vec3,
        angular_speed: f32,
        remaining: f32,
        target: Quat,
    },
}

/// Camera orientation plus its state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrientation {
    pub orientation: Quat,
    pub state: OrientationState,
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            state: OrientationState::Idle,
        }
    }
}

impl CameraOrientation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, OrientationState::Idle)
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self.state, OrientationState::Rotating { .. })
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, OrientationState::Spinning { .. })
    }

    /// Start blending towards a rotation trigger's target.
    ///
    /// Returns `false` (and does nothing) unless the camera is idle.
    pub fn begin_rotation(&mut self, record: &RotationChanger) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = OrientationState::Rotating {
            source: self.orientation,
            target: record.target_orientation,
            elapsed: 0.0,
            duration: record.duration,
        };
        true
    }

    /// Start a relative spin.
    ///
    /// Returns `false` (and does nothing) unless the camera is idle.
    pub fn begin_spin(&mut self, record: &CameraSpinChanger) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = OrientationState::Spinning {
            axis: record.axis,
            angular_speed: record.speed,
            remaining: record.duration,
            target: compose_world(record.total_rotation(), self.orientation),
        };
        true
    }

    /// Advance the active rotation or spin by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        match &mut self.state {
            OrientationState::Idle => {}
            OrientationState::Rotating {
                source,
                target,
                elapsed,
                duration,
            } => {
                *elapsed += delta_time;
                let t = if *duration > 0.0 {
                    (*elapsed / *duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                if t >= 1.0 {
                    self.orientation = *target;
                    self.state = OrientationState::Idle;
                } else {
                    self.orientation = slerp(*source, *target, t);
                }
            }
            OrientationState::Spinning {
                axis,
                angular_speed,
                remaining,
                target,
            } => {
                *remaining -= delta_time;
                if *remaining <= 0.0 {
                    self.orientation = *target;
                    self.state = OrientationState::Idle;
                } else {
                    let delta = axis_angle(*axis, *angular_speed * delta_time);
                    self.orientation = compose_world(delta, self.orientation);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::orientation::angle_between;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn rotation(duration: f32) -> RotationChanger {
        RotationChanger {
            trigger_z: 0.0,
            target_orientation: axis_angle(Vec3::Z, FRAC_PI_2),
            duration,
        }
    }

    #[test]
    fn test_rotation_ends_exactly_on_target() {
        let mut camera = CameraOrientation::new();
        let record = rotation(1.0);
        assert!(camera.begin_rotation(&record));
        for _ in 0..9 {
            camera.update(0.1);
            assert!(camera.is_rotating());
        }
        camera.update(0.2);
        assert!(camera.is_idle());
        assert_eq!(camera.orientation, record.target_orientation);
    }

    #[test]
    fn test_zero_duration_rotation_finishes_in_one_tick() {
        let mut camera = CameraOrientation::new();
        let record = rotation(0.0);
        camera.begin_rotation(&record);
        camera.update(0.0);
        assert!(camera.is_idle());
        assert_eq!(camera.orientation, record.target_orientation);
    }

    #[test]
    fn test_busy_camera_rejects_new_work() {
        let mut camera = CameraOrientation::new();
        assert!(camera.begin_rotation(&rotation(1.0)));
        assert!(!camera.begin_rotation(&rotation(1.0)));
        let spin = CameraSpinChanger::from_total_angle(0.0, Vec3::Y, PI, 1.0);
        assert!(!camera.begin_spin(&spin));
        assert!(camera.is_rotating());
    }

    #[test]
    fn test_spin_snaps_to_target() {
        let mut camera = CameraOrientation::new();
        let spin = CameraSpinChanger::from_total_angle(0.0, Vec3::Y, PI, 0.5);
        assert!(camera.begin_spin(&spin));
        camera.update(0.3);
        assert!(camera.is_spinning());
        camera.update(0.3);
        assert!(camera.is_idle());
        assert!(angle_between(camera.orientation, axis_angle(Vec3::Y, PI)) < 1e-4);
    }

    #[test]
    fn test_spin_is_relative_to_current_orientation() {
        let mut camera = CameraOrientation::new();
        camera.orientation = axis_angle(Vec3::X, FRAC_PI_2);
        let start = camera.orientation;
        let spin = CameraSpinChanger::from_total_angle(0.0, Vec3::Y, FRAC_PI_2, 1.0);
        camera.begin_spin(&spin);
        camera.update(2.0);
        let expected = axis_angle(Vec3::Y, FRAC_PI_2) * start;
        assert!(angle_between(camera.orientation, expected) < 1e-4);
    }
}
