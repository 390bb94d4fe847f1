//! Test doubles for the storage contract.
//!
//! Stores treat their durable mirror as best-effort, so tests need
//! backends that misbehave on demand and backends that count traffic.

use crate::storage::{SnapshotStorage, StorageError};
use std::sync::Mutex;

/// A backend whose reads and writes always fail.
///
/// Exercises the rule that a broken mirror never fails an in-memory
/// mutation and never prevents a store from opening.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl SnapshotStorage for FailingStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "storage offline",
        )))
    }

    fn save(&self, _key: &str, _snapshot: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "storage offline",
        )))
    }
}

/// An in-memory backend that counts `save` calls, for asserting that
/// every mutation syncs exactly once.
#[derive(Debug, Default)]
pub struct CountingStorage {
    state: Mutex<CountingState>,
}

#[derive(Debug, Default)]
struct CountingState {
    saves: usize,
    last: Option<String>,
}

impl CountingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls observed so far.
    pub fn saves(&self) -> usize {
        self.state.lock().map(|s| s.saves).unwrap_or(0)
    }

    /// The most recently saved blob, if any.
    pub fn last_snapshot(&self) -> Option<String> {
        self.state.lock().ok().and_then(|s| s.last.clone())
    }
}

impl SnapshotStorage for CountingStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn save(&self, _key: &str, snapshot: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock().map_err(|_| StorageError::Poisoned)?;
        state.saves += 1;
        state.last = Some(snapshot.to_string());
        Ok(())
    }
}
