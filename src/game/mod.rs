//! Game Module
//!
//! The run orchestrator: [`GameState`] and its per-frame [`GameState::tick`].

pub mod state;
pub mod tick;

pub use state::GameState;
pub use tick::{TickReport, bounce_on_pads, hit_spike, resolve_platforms};
