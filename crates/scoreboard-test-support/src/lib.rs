//! Shared test clocks and utilities for the Scoreboard service.

mod clock;

pub use clock::{FixedClock, SteppingClock};
