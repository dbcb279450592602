//! Gravity Dash Engine Library
//!
//! Physics and trigger engine for a 3D endless runner. The player is pushed
//! forward along -Z and steers, jumps and bounces through a level of
//! platforms, spikes and jump pads while level triggers flip gravity, turn
//! the camera and spin the player model.
//!
//! Windowing, drawing and audio playback stay with the host; this crate
//! hands them snapshots ([`render`]) and sound events ([`audio`]).
//!
//! # Modules
//!
//! - [`physics`] - Vectors, quaternions, collision tests and force integration
//! - [`level`] - Obstacles, trigger queues and the JSON level loader
//! - [`player`] - Player body, visual spin and ghost trail
//! - [`camera`] - Camera orientation state machine
//! - [`input`] - Keyboard state and control mapping
//! - [`game`] - Run state and the per-frame tick
//! - [`render`] - Instance and view data for the renderer
//! - [`config`] - Physics tuning
//!
//! # Example
//!
//! ```ignore
//! use gravity_dash_engine::audio::NullSink;
//! use gravity_dash_engine::game::GameState;
//! use gravity_dash_engine::level::Level;
//!
//! let level = Level::load(Path::new("demos/level1.json"))?;
//! let mut state = GameState::new(level);
//! let mut sounds = NullSink;
//!
//! while !state.is_dead() {
//!     state.player.keys.set(b' ', true);
//!     state.tick(0.016, &mut sounds);
//! }
//! ```

pub mod audio;
pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod level;
pub mod physics;
pub mod player;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use audio::{SoundEvent, SoundSink};
pub use config::PhysicsConfig;
pub use error::LevelError;
pub use game::{GameState, TickReport};
pub use level::Level;
pub use physics::GravityDirection;
