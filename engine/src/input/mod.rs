//! Input Module
//!
//! Platform-agnostic key state. Decoupled from any windowing system: the
//! host maps its key events to byte codes and calls [`KeyState::set`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gravity_dash_engine::input::KeyState;
//!
//! let mut keys = KeyState::new();
//! keys.set(b' ', true); // space pressed
//! if keys.jump() {
//!     // jump requested this tick
//! }
//! ```

pub mod keyboard;

pub use keyboard::{KEY_ESCAPE, KEY_JUMP, KEYS_LEFT, KEYS_RIGHT, KeyState};
