//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use scoreboard_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns instants from a predetermined sequence, one per
/// call. Once the sequence is exhausted the last instant is repeated.
#[derive(Debug)]
pub struct SteppingClock {
    instants: Vec<DateTime<Utc>>,
    index: AtomicUsize,
    last: Mutex<Option<DateTime<Utc>>>,
}

impl SteppingClock {
    /// Create a new `SteppingClock` over `instants`.
    ///
    /// # Panics
    ///
    /// Panics if `instants` is empty.
    #[must_use]
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        assert!(!instants.is_empty(), "SteppingClock needs at least one instant");
        Self {
            instants,
            index: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Returns the instant handed out by the most recent `now` call.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn last_returned(&self) -> Option<DateTime<Utc>> {
        *self.last.lock().unwrap()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let instant = self.instants[i.min(self.instants.len() - 1)];
        *self.last.lock().unwrap() = Some(instant);
        instant
    }
}
