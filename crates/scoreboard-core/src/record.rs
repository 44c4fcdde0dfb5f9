//! The score record value type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The latest score held for a username.
///
/// Records are never mutated in place: an update swaps in a whole new
/// record, so readers see either the old version or the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    /// Unique key of the record.
    pub name: String,
    /// Latest score. Any integer is accepted, negative included.
    pub score: i64,
    /// Instant of the create or update that produced this version.
    pub timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    /// Creates a record stamped with `timestamp`.
    #[must_use]
    pub fn new(name: impl Into<String>, score: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            score,
            timestamp,
        }
    }
}
