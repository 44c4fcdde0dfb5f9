//! Scoreboard Core — the concurrent score registry.
//!
//! This crate owns the mapping from username to its latest score and the
//! atomic create/read/update/delete contract over it. It performs no I/O;
//! transports such as the HTTP API depend on it, never the other way round.

pub mod clock;
pub mod error;
pub mod record;
pub mod store;
