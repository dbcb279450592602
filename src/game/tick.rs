//! Per-frame tick
//!
//! One call advances the camera, then the player, in this order:
//!
//! 1. Camera orientation machine
//! 2. Forces (gravity, jump, slide, damping, pinned forward speed)
//! 3. Position integration
//! 4. Platform collision, one platform at a time
//! 5. Spike check - a hit kills the player and ends the tick
//! 6. Jump pads
//! 7. Triggers: rotation, camera spin, player spin, gravity
//! 8. Ghost trail
//!
//! Once the player is dead steps 2-8 are skipped for good, so position,
//! velocity and trail stay frozen.

use glam::Vec3;

use super::state::GameState;
use crate::audio::{SoundEvent, SoundSink};
use crate::config::PhysicsConfig;
use crate::level::{JumpPad, Platform, Spike};
use crate::physics::GravityDirection;
use crate::physics::collision::{aabb_contact, within_reach};
use crate::physics::integration::{apply_forces, cancel_into_surface, integrate_position};
use crate::player::Player;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Frame time actually simulated, after clamping
    pub delta_time: f32,
    pub jumped: bool,
    pub bounced: bool,
    /// The player died during this tick
    pub died: bool,
    pub rotation_started: bool,
    pub spin_started: bool,
    pub player_spin_changed: bool,
    /// New gravity, when a gravity trigger fired
    pub gravity_changed: Option<GravityDirection>,
}

impl GameState {
    /// Advance the run by `delta_time` seconds of wall time.
    pub fn tick(&mut self, delta_time: f32, sounds: &mut dyn SoundSink) -> TickReport {
        let dt = self.config.clamp_delta(delta_time);
        let mut report = TickReport {
            delta_time: dt,
            ..Default::default()
        };

        self.tick_count += 1;
        self.run_time += dt;

        self.camera.update(dt);
        self.update_player(dt, sounds, &mut report);

        report
    }

    fn update_player(&mut self, dt: f32, sounds: &mut dyn SoundSink, report: &mut TickReport) {
        if self.player.is_dead {
            return;
        }

        let up = self.gravity.up();
        let input = self.player.keys.control_input();

        if apply_forces(
            &mut self.player.velocity,
            &mut self.player.is_grounded,
            input,
            self.gravity,
            self.speed_multiplier,
            &self.config,
            dt,
        ) {
            sounds.play(SoundEvent::Jump);
            report.jumped = true;
        }

        integrate_position(&mut self.player.position, self.player.velocity, dt);

        self.player.is_grounded = false;
        resolve_platforms(&mut self.player, &self.level.platforms, up, &self.config);

        if hit_spike(&self.player, &self.level.spikes, self.config.player_size) {
            self.player.is_dead = true;
            sounds.play(SoundEvent::Crash);
            report.died = true;
            log::info!(
                "Game over: hit a spike at z={:.2} after {:.2}s",
                self.player.position.z,
                self.run_time
            );
            return;
        }

        if bounce_on_pads(&mut self.player, &self.level.jump_pads, up, &self.config) {
            sounds.play(SoundEvent::Bounce);
            report.bounced = true;
        }

        self.check_triggers(dt, report);

        self.player.trail.push(self.player.position);
    }

    /// Poll the four trigger queues in their fixed order.
    fn check_triggers(&mut self, dt: f32, report: &mut TickReport) {
        let z = self.player.position.z;

        // Camera triggers wait (without advancing) while the camera is busy.
        if self.camera.is_idle() {
            let cursor = self.level.rotation_changers.cursor();
            if let Some(record) = self.level.rotation_changers.poll(z) {
                self.camera.begin_rotation(&record);
                report.rotation_started = true;
                log::debug!("rotation trigger #{cursor} fired at z={z:.2}");
            }
        }

        if self.camera.is_idle() {
            let cursor = self.level.camera_spin_changers.cursor();
            if let Some(record) = self.level.camera_spin_changers.poll(z) {
                self.camera.begin_spin(&record);
                report.spin_started = true;
                log::debug!("camera spin trigger #{cursor} fired at z={z:.2}");
            }
        }

        let cursor = self.level.player_spin_changers.cursor();
        if let Some(record) = self.level.player_spin_changers.poll(z) {
            self.player.set_spin(record.new_axis, record.new_speed);
            report.player_spin_changed = true;
            log::debug!("player spin trigger #{cursor} fired at z={z:.2}");
        }

        self.player.update_spin(dt);

        let cursor = self.level.gravity_changers.cursor();
        if let Some(record) = self.level.gravity_changers.poll(z) {
            self.gravity = record.new_gravity;
            report.gravity_changed = Some(record.new_gravity);
            log::debug!(
                "gravity trigger #{cursor} fired at z={z:.2}: now {}",
                record.new_gravity
            );
        }
    }
}

/// Push the player out of every overlapping platform, in level order.
///
/// Each platform is resolved on its own along its smallest-MTV axis. A
/// contact whose normal lines up with `up` grounds the player and removes
/// the velocity driving into the surface.
pub fn resolve_platforms(
    player: &mut Player,
    platforms: &[Platform],
    up: Vec3,
    config: &PhysicsConfig,
) {
    for platform in platforms {
        let Some(contact) = aabb_contact(&player.aabb(config.player_size), &platform.aabb()) else {
            continue;
        };

        player.position += contact.correction;

        if contact.normal.dot(up) > config.ground_alignment {
            player.is_grounded = true;
            cancel_into_surface(&mut player.velocity, contact.normal);
        }
    }
}

pub fn hit_spike(player: &Player, spikes: &[Spike], player_size: f32) -> bool {
    spikes
        .iter()
        .any(|spike| spike.hits(player.position, player_size))
}

/// Apply jump pad bounces. Returns `true` if any pad fired.
///
/// A pad only fires while the player moves against `up`; it then replaces
/// the velocity component along `up` with the bounce speed.
pub fn bounce_on_pads(
    player: &mut Player,
    pads: &[JumpPad],
    up: Vec3,
    config: &PhysicsConfig,
) -> bool {
    let reach_sq = config.jump_pad_reach_sq();
    let mut bounced = false;

    for pad in pads {
        if !within_reach(player.position, pad.position, reach_sq) {
            continue;
        }
        let along_up = player.velocity.dot(up);
        if along_up < 0.0 {
            player.velocity += up * (config.bounce_force - along_up);
            player.is_grounded = false;
            bounced = true;
        }
    }

    bounced
}
