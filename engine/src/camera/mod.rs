//! Camera Module
//!
//! Provides the trigger-driven camera orientation.
//!
//! # Components
//!
//! - [`CameraOrientation`] - orientation quaternion plus its idle/rotating/spinning machine
//! - [`OrientationState`] - the machine's states

pub mod orientation;

pub use orientation::{CameraOrientation, OrientationState};
