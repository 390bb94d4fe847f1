//! The snapshot persistence contract and its built-in backends.
//!
//! Stores mirror their complete state to a durable key-value slot after
//! every mutation and hydrate from it once at open. The contract is
//! deliberately small: one text blob per store key. The blob is a JSON
//! envelope carrying a format version, the full record list, and the
//! selection pointer.

use crate::id::EntityId;
use crate::store::Stored;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors from snapshot storage operations.
///
/// These never cross a store's CRUD surface: failed writes are logged and
/// swallowed, failed reads degrade to the seed dataset.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("storage slot lock poisoned")]
    Poisoned,
}

/// Current snapshot format version.
pub(crate) const SNAPSHOT_VERSION: u32 = 1;

/// The decoded form of one store's durable mirror.
#[derive(Debug, Deserialize)]
pub(crate) struct Snapshot<T> {
    pub version: u32,
    pub records: Vec<Stored<T>>,
    #[serde(default)]
    pub selection: Option<EntityId>,
}

impl<T> Snapshot<T> {
    /// Encode the current store state as a snapshot blob.
    pub(crate) fn encode(
        records: &[Stored<T>],
        selection: Option<&EntityId>,
    ) -> Result<String, StorageError>
    where
        T: Serialize,
    {
        #[derive(Serialize)]
        struct Envelope<'a, T> {
            version: u32,
            records: &'a [Stored<T>],
            selection: Option<&'a EntityId>,
        }

        let envelope = Envelope {
            version: SNAPSHOT_VERSION,
            records,
            selection,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Decode a snapshot blob, rejecting unknown format versions.
    pub(crate) fn decode(raw: &str) -> Result<Self, StorageError>
    where
        T: DeserializeOwned,
    {
        let snapshot: Self = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }
}

/// Durable key-value collaborator that stores survive restarts through.
///
/// `save` is called after every mutating store operation; `load` once at
/// open. Methods take `&self` so one backend instance can serve several
/// stores; implementations mutate through interior mutability.
pub trait SnapshotStorage {
    /// Read the blob stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    fn save(&self, key: &str, snapshot: &str) -> Result<(), StorageError>;
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        (**self).save(key, snapshot)
    }
}

/// In-memory backend. Useful for tests and sessions that opt out of
/// durability; state is lost when the backend is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_string(), snapshot.to_string());
        Ok(())
    }
}

/// File-backed backend: one JSON file per store key under a base
/// directory, created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{sanitized}.json"))
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn save(&self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(self.slot_path(key), snapshot)?;
        Ok(())
    }
}
