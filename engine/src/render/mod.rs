//! Render Module
//!
//! Data handed to the rendering collaborator once per frame, after the
//! tick. The renderer itself (window, GPU, shaders) lives outside this crate.

pub mod instances;
pub mod view;

pub use instances::{
    ObjectInstance, TrailPoint, instance_kind, level_instances, player_instance, trail_points,
};
pub use view::{CAMERA_OFFSET, FrameView};
