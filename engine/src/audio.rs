//! Sound events
//!
//! The tick announces gameplay sounds through a [`SoundSink`]. Sinks must
//! return immediately; playback, if any, happens elsewhere.

/// Discrete sounds the tick can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Jump,
    Crash,
    Bounce,
}

impl SoundEvent {
    /// Name the audio collaborator keys its samples by.
    pub fn name(self) -> &'static str {
        match self {
            SoundEvent::Jump => "jump",
            SoundEvent::Crash => "crash",
            SoundEvent::Bounce => "bounce",
        }
    }
}

/// Fire-and-forget receiver for sound events.
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Logs each event at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, event: SoundEvent) {
        log::trace!("Playing sound: {}", event.name());
    }
}

/// Keeps the most recent events in a fixed ring, plus running totals.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    recent: [Option<SoundEvent>; Self::CAPACITY],
    head: usize,
    total: usize,
    counts: [usize; 3],
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            recent: [None; Self::CAPACITY],
            head: 0,
            total: 0,
            counts: [0; 3],
        }
    }
}

impl RecordingSink {
    pub const CAPACITY: usize = 16;

    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, including ones pushed out of the ring.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, event: SoundEvent) -> usize {
        self.counts[event as usize]
    }

    /// Most recent event, if any.
    pub fn last(&self) -> Option<SoundEvent> {
        self.recent_iter().next()
    }

    /// Retained events, newest first.
    pub fn recent_iter(&self) -> impl Iterator<Item = SoundEvent> + '_ {
        let len = self.total.min(Self::CAPACITY);
        (0..len).filter_map(move |i| {
            let index = (self.head + Self::CAPACITY - 1 - i) % Self::CAPACITY;
            self.recent[index]
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl SoundSink for RecordingSink {
    fn play(&mut self, event: SoundEvent) {
        self.recent[self.head] = Some(event);
        self.head = (self.head + 1) % Self::CAPACITY;
        self.total += 1;
        self.counts[event as usize] += 1;
    }
}
