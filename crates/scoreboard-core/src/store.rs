//! Concurrent in-memory score store.
//!
//! Every operation on a single username is linearizable: the check and the
//! write of `create`, `update` and `delete` run under the same shard lock
//! of the backing [`DashMap`], so no caller can observe a duplicated or
//! half-written record. Operations on different usernames only contend when
//! their keys hash to the same shard, and only for one key's transition.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::clock::Clock;
use crate::error::DomainError;
use crate::record::ScoreRecord;

/// Registry mapping a username to its latest [`ScoreRecord`].
pub struct ScoreStore {
    records: DashMap<String, ScoreRecord>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for ScoreStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreStore")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl ScoreStore {
    /// Creates an empty store that stamps writes with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: DashMap::new(),
            clock,
        }
    }

    /// Returns a snapshot of every current record, in no particular order.
    ///
    /// The returned records are owned copies; later writes to the store are
    /// not reflected in them.
    #[must_use]
    pub fn list(&self) -> Vec<ScoreRecord> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Returns the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no record exists for `name`.
    pub fn get(&self, name: &str) -> Result<ScoreRecord, DomainError> {
        self.records
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::NotFound(name.to_owned()))
    }

    /// Inserts a new record for `name`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyExists` if a record already exists for
    /// `name`; the existing record is left untouched.
    pub fn create(&self, name: &str, score: i64) -> Result<(), DomainError> {
        match self.records.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(DomainError::AlreadyExists(name.to_owned())),
            Entry::Vacant(slot) => {
                let record = ScoreRecord::new(name, score, self.clock.now());
                debug!(name, score, timestamp = %record.timestamp, "score created");
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Replaces the record for `name` with a new score, stamped with the
    /// current time. This is not an upsert.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no record exists for `name`.
    pub fn update(&self, name: &str, score: i64) -> Result<(), DomainError> {
        let Some(mut current) = self.records.get_mut(name) else {
            return Err(DomainError::NotFound(name.to_owned()));
        };
        let record = ScoreRecord::new(name, score, self.clock.now());
        debug!(name, score, timestamp = %record.timestamp, "score updated");
        *current = record;
        Ok(())
    }

    /// Removes the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no record exists for `name`.
    pub fn delete(&self, name: &str) -> Result<(), DomainError> {
        match self.records.remove(name) {
            Some(_) => {
                debug!(name, "score deleted");
                Ok(())
            }
            None => Err(DomainError::NotFound(name.to_owned())),
        }
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
