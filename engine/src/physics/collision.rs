//! Collision detection module
//!
//! Narrow-phase tests between the player's box and the level's static
//! obstacles:
//!
//! - Box vs box overlap with a single-axis minimum translation vector
//! - Box-sized point vs oriented cone (spikes)
//! - Sphere reach test (jump pads)
//!
//! # Example
//!
//! ```ignore
//! use gravity_dash_engine::physics::collision::{Aabb, aabb_contact};
//! use glam::Vec3;
//!
//! let player = Aabb::from_center_half_extents(Vec3::new(0.0, 0.9, 0.0), Vec3::splat(0.5));
//! let floor = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(5.0, 0.5, 5.0));
//!
//! if let Some(contact) = aabb_contact(&player, &floor) {
//!     println!("push by {:?}, normal {:?}", contact.correction, contact.normal);
//! }
//! ```

use glam::Vec3;

use super::types::GravityDirection;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap on all three axes; touching faces do not overlap.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.max.cmpgt(other.min).all() && self.min.cmplt(other.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Result of separating the player's box from a platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Translation to apply to the player, non-zero on one axis only
    pub correction: Vec3,
    /// Unit normal pointing from the platform towards the player
    pub normal: Vec3,
}

/// Signed exit distance along one axis: the shorter of pushing the mover
/// towards negative or towards positive.
#[inline]
fn axis_mtv(mover_min: f32, mover_max: f32, fixed_min: f32, fixed_max: f32) -> f32 {
    let push_negative = mover_max - fixed_min;
    let push_positive = fixed_max - mover_min;
    if push_negative < push_positive {
        -push_negative
    } else {
        push_positive
    }
}

/// Per-axis minimum translation vectors for two overlapping boxes.
///
/// Returns `None` when the boxes do not overlap.
pub fn aabb_mtv(mover: &Aabb, fixed: &Aabb) -> Option<Vec3> {
    if !mover.intersects(fixed) {
        return None;
    }
    Some(Vec3::new(
        axis_mtv(mover.min.x, mover.max.x, fixed.min.x, fixed.max.x),
        axis_mtv(mover.min.y, mover.max.y, fixed.min.y, fixed.max.y),
        axis_mtv(mover.min.z, mover.max.z, fixed.min.z, fixed.max.z),
    ))
}

/// Pick the separating axis from per-axis MTVs.
///
/// X wins only when strictly smaller than both Y and Z; otherwise Y wins
/// when strictly smaller than Z; otherwise Z.
pub fn separating_contact(mtv: Vec3) -> Contact {
    let abs = mtv.abs();
    let axis = if abs.x < abs.y && abs.x < abs.z {
        Vec3::X
    } else if abs.y < abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let amount = mtv.dot(axis);
    let sign = if amount > 0.0 { 1.0 } else { -1.0 };
    Contact {
        correction: axis * amount,
        normal: axis * sign,
    }
}

/// Overlap test plus separating-axis selection in one call.
pub fn aabb_contact(mover: &Aabb, fixed: &Aabb) -> Option<Contact> {
    aabb_mtv(mover, fixed).map(separating_contact)
}

/// Oriented cone test for spikes.
///
/// The cone's base centre sits at `base`, its apex `height` units along the
/// direction `orientation` rotates local +Y into. The player is treated as a
/// point padded by `player_size` horizontally.
pub fn cone_collision(
    player_pos: Vec3,
    player_size: f32,
    base: Vec3,
    radius: f32,
    height: f32,
    orientation: GravityDirection,
) -> bool {
    let relative = player_pos - base;
    let local = orientation.spike_rotation().inverse() * relative;

    if local.y > height || local.y < 0.0 {
        return false;
    }

    let horizontal_dist_sq = local.x * local.x + local.z * local.z;
    let cone_radius_at_height = radius * (1.0 - local.y / height);
    let total_radius = player_size + cone_radius_at_height;

    horizontal_dist_sq < total_radius * total_radius
}

/// Sphere reach test used by jump pads.
#[inline]
pub fn within_reach(a: Vec3, b: Vec3, reach_sq: f32) -> bool {
    a.distance_squared(b) < reach_sq
}
