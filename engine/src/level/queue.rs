//! Monotonic trigger queue.

use super::triggers::Trigger;

/// Records in authored order plus a cursor to the next unfired one.
///
/// The cursor only moves forward, one step per firing, and stays in
/// `0..=len`. Once it reaches `len` the queue is exhausted for the rest
/// of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerQueue<T> {
    records: Vec<T>,
    cursor: usize,
}

impl<T> Default for TriggerQueue<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
        }
    }
}

impl<T: Trigger + Copy> TriggerQueue<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records, cursor: 0 }
    }

    /// Next record eligible to fire.
    pub fn peek(&self) -> Option<&T> {
        self.records.get(self.cursor)
    }

    /// Fire the next record if the player has crossed it.
    ///
    /// At most one record fires per call, however far past later
    /// thresholds the player already is.
    pub fn poll(&mut self, position_z: f32) -> Option<T> {
        let record = *self.records.get(self.cursor)?;
        if record.crossed(position_z) {
            self.cursor += 1;
            Some(record)
        } else {
            None
        }
    }

    /// Index of the next record to consider.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.records.len()
    }

    /// All records in authored order, fired or not.
    pub fn records(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::triggers::GravityChanger;
    use crate::physics::GravityDirection;

    fn queue(zs: &[f32]) -> TriggerQueue<GravityChanger> {
        TriggerQueue::new(
            zs.iter()
                .map(|&trigger_z| GravityChanger {
                    trigger_z,
                    new_gravity: GravityDirection::Up,
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_queue_is_exhausted() {
        let mut q = queue(&[]);
        assert!(q.is_exhausted());
        assert!(q.poll(-1000.0).is_none());
        assert_eq!(q.cursor(), 0);
    }

    #[test]
    fn test_fires_once_per_record() {
        let mut q = queue(&[5.0]);
        assert!(q.poll(6.0).is_none());
        assert!(q.poll(4.0).is_some());
        assert!(q.poll(3.0).is_none());
        assert!(q.poll(100.0).is_none());
        assert_eq!(q.cursor(), 1);
        assert!(q.is_exhausted());
    }

    #[test]
    fn test_one_record_per_poll_even_when_overshooting() {
        let mut q = queue(&[5.0, 0.0, -5.0]);
        assert!(q.poll(-10.0).is_some());
        assert_eq!(q.cursor(), 1);
        assert!(q.poll(-10.0).is_some());
        assert!(q.poll(-10.0).is_some());
        assert!(q.poll(-10.0).is_none());
        assert_eq!(q.cursor(), 3);
    }

    #[test]
    fn test_unsorted_records_block_in_order() {
        // The second record is authored "behind" the first; it still waits its turn.
        let mut q = queue(&[-10.0, 10.0]);
        assert!(q.poll(0.0).is_none());
        assert_eq!(q.peek().map(|g| g.trigger_z), Some(-10.0));
    }
}
