//! Ghost trail: fixed ring of the player's recent positions.

use glam::Vec3;

use crate::config::TRAIL_LENGTH;

/// Ring buffer of recent positions. Once full, each push overwrites the
/// oldest sample in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostTrail {
    positions: [Vec3; TRAIL_LENGTH],
    /// Slot the next sample is written to
    head_index: usize,
    count: usize,
}

impl Default for GhostTrail {
    fn default() -> Self {
        Self {
            positions: [Vec3::ZERO; TRAIL_LENGTH],
            head_index: 0,
            count: 0,
        }
    }
}

impl GhostTrail {
    pub const CAPACITY: usize = TRAIL_LENGTH;

    pub fn new() -> Self {
        Self::default()
    }

    /// Write at the head, then advance it.
    pub fn push(&mut self, position: Vec3) {
        self.positions[self.head_index] = position;
        self.head_index = (self.head_index + 1) % Self::CAPACITY;
        if self.count < Self::CAPACITY {
            self.count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn head_index(&self) -> usize {
        self.head_index
    }

    /// Sample `age` steps back; 0 is the newest.
    pub fn get(&self, age: usize) -> Option<Vec3> {
        if age >= self.count {
            return None;
        }
        let index = (self.head_index + Self::CAPACITY - 1 - age) % Self::CAPACITY;
        Some(self.positions[index])
    }

    /// Samples newest first.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.count).filter_map(move |age| self.get(age))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut trail = GhostTrail::new();
        trail.push(Vec3::X);
        trail.push(Vec3::Y);
        trail.push(Vec3::Z);
        let samples: Vec<_> = trail.iter().collect();
        assert_eq!(samples, vec![Vec3::Z, Vec3::Y, Vec3::X]);
        assert_eq!(trail.head_index(), 3);
    }

    #[test]
    fn test_count_saturates_and_oldest_drop() {
        let mut trail = GhostTrail::new();
        for i in 0..(GhostTrail::CAPACITY + 5) {
            trail.push(Vec3::new(i as f32, 0.0, 0.0));
        }
        assert_eq!(trail.len(), GhostTrail::CAPACITY);
        assert_eq!(trail.head_index(), 5);
        assert_eq!(trail.get(0), Some(Vec3::new((GhostTrail::CAPACITY + 4) as f32, 0.0, 0.0)));
        assert_eq!(
            trail.get(GhostTrail::CAPACITY - 1),
            Some(Vec3::new(5.0, 0.0, 0.0))
        );
        assert_eq!(trail.get(GhostTrail::CAPACITY), None);
    }

    #[test]
    fn test_empty() {
        let trail = GhostTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.get(0), None);
        assert_eq!(trail.iter().count(), 0);
    }
}
