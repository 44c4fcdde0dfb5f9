//! Scoreboard HTTP API — routes, state, configuration and error mapping.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
