//! Config Module
//!
//! Centralized tunables for the runner physics.

pub mod physics_config;

pub use physics_config::{MAX_LEVEL_OBJECTS, PhysicsConfig, TRAIL_LENGTH};
