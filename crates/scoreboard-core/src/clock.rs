//! Clock abstraction for determinism.

use chrono::{DateTime, Utc};

/// Source of the instant stamped onto every score write.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_tracks_wall_time() {
        let before = Utc::now();
        let observed = SystemClock.now();
        let after = Utc::now();

        assert!(before <= observed && observed <= after);
    }
}
