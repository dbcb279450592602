//! Keyboard Input Module
//!
//! Pressed-state for every byte key code. The host's keyboard callback
//! writes it; the force step reads it once per tick. There is no event
//! queue, so a press and release between two ticks is never seen.

use crate::physics::ControlInput;

/// Key that triggers a jump.
pub const KEY_JUMP: u8 = b' ';
/// Keys that slide right.
pub const KEYS_RIGHT: [u8; 2] = [b'd', b'D'];
/// Keys that slide left.
pub const KEYS_LEFT: [u8; 2] = [b'a', b'A'];
/// Escape; hosts use it to quit.
pub const KEY_ESCAPE: u8 = 27;

/// Pressed flags indexed by character code 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; 256],
}

impl Default for KeyState {
    fn default() -> Self {
        Self {
            pressed: [false; 256],
        }
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition from the host.
    #[inline]
    pub fn set(&mut self, key: u8, pressed: bool) {
        self.pressed[key as usize] = pressed;
    }

    #[inline]
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed[key as usize]
    }

    fn any_pressed(&self, keys: &[u8]) -> bool {
        keys.iter().any(|&k| self.is_pressed(k))
    }

    /// Release every key (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.pressed = [false; 256];
    }

    pub fn jump(&self) -> bool {
        self.is_pressed(KEY_JUMP)
    }

    /// -1 for left, 1 for right, 0 for neither or both.
    pub fn slide_axis(&self) -> f32 {
        let right = self.any_pressed(&KEYS_RIGHT) as i32;
        let left = self.any_pressed(&KEYS_LEFT) as i32;
        (right - left) as f32
    }

    /// Sample the controls the force step needs.
    pub fn control_input(&self) -> ControlInput {
        ControlInput {
            jump: self.jump(),
            slide: self.slide_axis(),
        }
    }
}
