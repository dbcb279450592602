//! Physics module for the runner
//!
//! Custom physics for a single box-shaped player moving through static
//! level geometry. No external physics library.
//!
//! # Unit System
//!
//! Level units throughout; velocities in units/s, accelerations in units/s².
//! The run progresses towards -Z.
//!
//! # Submodules
//!
//! - [`types`] - Vec3/Quat re-exported from glam, and [`GravityDirection`]
//! - [`orientation`] - Quaternion helpers (axis-angle, slerp, composition)
//! - [`collision`] - Box MTV, oriented cone and reach tests
//! - [`integration`] - Per-tick force integration

pub mod collision;
pub mod integration;
pub mod orientation;
pub mod types;

// Re-export commonly used types at the physics module level
pub use collision::{Aabb, Contact, aabb_contact, aabb_mtv, cone_collision, separating_contact};
pub use integration::{ControlInput, apply_forces, cancel_into_surface, integrate_position};
pub use orientation::{axis_angle, compose_world, slerp};
pub use types::{GravityDirection, Quat, Vec3};
