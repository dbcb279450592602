//! Physics Tests - Collision Primitives and Long-Run Stability
//!
//! Tests for AABB resolution, the spike cone and the full tick loop over
//! long runs.

use glam::Vec3;
use gravity_dash_engine::audio::{NullSink, RecordingSink, SoundEvent};
use gravity_dash_engine::game::GameState;
use gravity_dash_engine::level::{
    CameraSpinChanger, GravityChanger, JumpPad, Level, Platform, PlayerSpinChanger,
    RotationChanger, Spike, TriggerQueue,
};
use gravity_dash_engine::physics::GravityDirection;
use gravity_dash_engine::physics::collision::{Aabb, aabb_contact, cone_collision};
use gravity_dash_engine::physics::orientation::axis_angle;

const DT: f32 = 0.016;

// ============================================================================
// AABB Tests
// ============================================================================

#[test]
fn test_aabb_mover_fully_inside() {
    let fixed = Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 1.0, 10.0));
    let mover = Aabb::from_center_half_extents(Vec3::new(0.0, 0.6, 0.0), Vec3::splat(0.25));

    let contact = aabb_contact(&mover, &fixed).expect("overlapping boxes must produce a contact");

    // Y is the shortest way out: push up by 1.0 - 0.35 = 0.65.
    assert_eq!(contact.normal, Vec3::Y);
    assert!((contact.correction.y - 0.65).abs() < 1e-5);
    assert_eq!(contact.correction.x, 0.0);
    assert_eq!(contact.correction.z, 0.0);

    let moved = Aabb::from_center_half_extents(
        Vec3::new(0.0, 0.6, 0.0) + contact.correction,
        Vec3::splat(0.25),
    );
    assert!((moved.min.y - fixed.max.y).abs() < 1e-5);
}

#[test]
fn test_aabb_disjoint_has_no_contact() {
    let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let b = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
    assert!(aabb_contact(&a, &b).is_none());
}

#[test]
fn test_aabb_side_hit_pushes_sideways() {
    let wall = Aabb::new(Vec3::new(1.0, -5.0, -5.0), Vec3::new(2.0, 5.0, 5.0));
    let mover = Aabb::from_center_half_extents(Vec3::new(0.6, 0.0, 0.0), Vec3::splat(0.5));
    let contact = aabb_contact(&mover, &wall).unwrap();
    assert_eq!(contact.normal, -Vec3::X);
    assert!((contact.correction.x + 0.1).abs() < 1e-5);
}

// ============================================================================
// Spike Cone Tests
// ============================================================================

fn up_spike_hits(player_pos: Vec3, base: Vec3) -> bool {
    cone_collision(player_pos, 0.5, base, 0.375, 2.0, GravityDirection::Up)
}

#[test]
fn test_cone_boundary_is_monotonic() {
    let base = Vec3::ZERO;
    for height_step in 0..20 {
        let y = height_step as f32 * 0.1;
        let mut was_hit = true;
        for step in 0..200 {
            let x = step as f32 * 0.01;
            let hit = up_spike_hits(Vec3::new(x, y, 0.0), base);
            // Once outside, moving further out never re-enters.
            assert!(was_hit || !hit, "re-entered cone at x={x}, y={y}");
            was_hit = hit;
        }
    }
}

#[test]
fn test_cone_narrows_with_height() {
    let base = Vec3::ZERO;
    let low = Vec3::new(0.8, 0.1, 0.0);
    let high = Vec3::new(0.8, 1.8, 0.0);
    assert!(up_spike_hits(low, base));
    assert!(!up_spike_hits(high, base));
}

#[test]
fn test_cone_outside_height_range() {
    let base = Vec3::ZERO;
    assert!(!up_spike_hits(Vec3::new(0.0, -0.1, 0.0), base));
    assert!(!up_spike_hits(Vec3::new(0.0, 2.1, 0.0), base));
}

#[test]
fn test_hanging_spike_points_down() {
    let base = Vec3::new(0.0, 10.0, 0.0);
    // Below the ceiling base: inside a DOWN spike, outside an UP one.
    let below = Vec3::new(0.0, 9.0, 0.0);
    assert!(cone_collision(below, 0.5, base, 0.375, 2.0, GravityDirection::Down));
    assert!(!cone_collision(below, 0.5, base, 0.375, 2.0, GravityDirection::Up));
}

// ============================================================================
// Long-Run Stability
// ============================================================================

fn busy_level() -> Level {
    let mut level = Level::new();
    level.start_position = Some(Vec3::new(0.0, 2.0, 0.0));
    for i in 0..20 {
        let z = -(i as f32) * 40.0;
        level.platforms.push(Platform::new(Vec3::new(0.0, 0.0, z), Vec3::new(8.0, 1.0, 30.0)));
        level.jump_pads.push(JumpPad::new(Vec3::new(2.0, 0.75, z - 10.0)));
    }
    level.gravity_changers = TriggerQueue::new(vec![
        GravityChanger {
            trigger_z: -100.0,
            new_gravity: GravityDirection::Left,
        },
        GravityChanger {
            trigger_z: -200.0,
            new_gravity: GravityDirection::Up,
        },
        GravityChanger {
            trigger_z: -300.0,
            new_gravity: GravityDirection::Right,
        },
        GravityChanger {
            trigger_z: -400.0,
            new_gravity: GravityDirection::Down,
        },
    ]);
    level.rotation_changers = TriggerQueue::new(vec![RotationChanger {
        trigger_z: -100.0,
        target_orientation: axis_angle(Vec3::Z, -std::f32::consts::FRAC_PI_2),
        duration: 0.5,
    }]);
    level.camera_spin_changers = TriggerQueue::new(vec![CameraSpinChanger::from_total_angle(
        -250.0,
        Vec3::Z,
        std::f32::consts::TAU,
        2.0,
    )]);
    level.player_spin_changers = TriggerQueue::new(vec![PlayerSpinChanger {
        trigger_z: -10.0,
        new_axis: Vec3::X,
        new_speed: std::f32::consts::PI,
    }]);
    level
}

#[test]
fn test_no_nan_over_ten_thousand_ticks() {
    let mut state = GameState::new(busy_level());
    let mut sounds = NullSink;

    for tick in 0..10_000u32 {
        state.player.keys.set(b' ', tick % 37 == 0);
        state.player.keys.set(b'a', tick % 200 < 50);
        state.player.keys.set(b'd', tick % 300 > 250);

        // Odd frame times, including ones above the clamp.
        let dt = if tick % 500 == 0 { 0.5 } else { DT };
        state.tick(dt, &mut sounds);

        assert!(state.player.position.is_finite(), "position NaN at tick {tick}");
        assert!(state.player.velocity.is_finite(), "velocity NaN at tick {tick}");
        assert!(state.player.orientation.is_finite(), "player orientation NaN at tick {tick}");
        assert!(state.camera.orientation.is_finite(), "camera orientation NaN at tick {tick}");
    }
    assert_eq!(state.tick_count, 10_000);
}

fn bits(v: Vec3) -> [u32; 3] {
    v.to_array().map(f32::to_bits)
}

#[test]
fn test_death_freezes_player_exactly() {
    let mut level = Level::new();
    level.start_position = Some(Vec3::new(0.0, 1.0, 0.0));
    level.platforms.push(Platform::new(Vec3::new(0.0, 0.0, -50.0), Vec3::new(8.0, 1.0, 120.0)));
    level.spikes.push(Spike::new(Vec3::new(0.0, 0.5, -5.0), GravityDirection::Up));
    level.player_spin_changers = TriggerQueue::new(vec![PlayerSpinChanger {
        trigger_z: -20.0,
        new_axis: Vec3::Y,
        new_speed: 1.0,
    }]);

    let mut state = GameState::new(level);
    let mut sounds = RecordingSink::new();
    let mut ticks = 0;
    while !state.is_dead() {
        state.tick(DT, &mut sounds);
        ticks += 1;
        assert!(ticks < 200, "player never reached the spike");
    }
    assert_eq!(sounds.count(SoundEvent::Crash), 1);

    let position = state.player.position;
    let velocity = state.player.velocity;
    let orientation = state.player.orientation;
    let trail_head = state.player.trail.head_index();
    let spin_cursor = state.level.player_spin_changers.cursor();

    state.player.keys.set(b' ', true);
    for _ in 0..500 {
        state.tick(DT, &mut sounds);
    }

    assert_eq!(bits(state.player.position), bits(position));
    assert_eq!(bits(state.player.velocity), bits(velocity));
    assert_eq!(state.player.orientation, orientation);
    assert_eq!(state.player.trail.head_index(), trail_head);
    assert_eq!(state.level.player_spin_changers.cursor(), spin_cursor);
    assert_eq!(sounds.count(SoundEvent::Crash), 1);
    assert_eq!(sounds.count(SoundEvent::Jump), 0);
}

#[test]
fn test_triggers_skipped_on_death_tick() {
    let mut level = Level::new();
    level.start_position = Some(Vec3::new(0.0, 1.0, 0.2));
    level.spikes.push(Spike::new(Vec3::new(0.0, 0.5, 0.0), GravityDirection::Up));
    level.gravity_changers = TriggerQueue::new(vec![GravityChanger {
        trigger_z: 0.1,
        new_gravity: GravityDirection::Left,
    }]);
    level.player_spin_changers = TriggerQueue::new(vec![PlayerSpinChanger {
        trigger_z: 0.1,
        new_axis: Vec3::Y,
        new_speed: 1.0,
    }]);

    let mut state = GameState::new(level);
    let report = state.tick(DT, &mut NullSink);

    // The thresholds were crossed on this tick, but the spike ends it first.
    assert!(state.player.position.z < 0.1);
    assert!(report.died);
    assert_eq!(report.gravity_changed, None);
    assert!(!report.player_spin_changed);
    assert_eq!(state.gravity, GravityDirection::Down);
    assert_eq!(state.level.gravity_changers.cursor(), 0);
    assert_eq!(state.level.player_spin_changers.cursor(), 0);
    assert!(state.player.trail.is_empty());
}

#[test]
fn test_forward_speed_is_pinned() {
    let mut level = Level::new();
    level.speed_multiplier = 1.5;
    let mut state = GameState::new(level);
    for _ in 0..50 {
        state.tick(DT, &mut NullSink);
        assert!((state.player.velocity.z + 30.0).abs() < 1e-4);
    }
}
