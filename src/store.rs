//! The generic entity store: one persisted, homogeneous collection.
//!
//! Every entity kind in the campaign manager (campaigns, characters,
//! sessions, world-building records) gets its own `EntityStore` instance
//! and its own durable slot. The stores are independent: no transaction,
//! ordering, or referential-integrity guarantee spans them.

use crate::id::EntityId;
use crate::storage::{Snapshot, SnapshotStorage};
use crate::time::Timestamp;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A domain payload wrapped with the system fields the store owns.
///
/// `data` is flattened during serialization, so persisted records keep a
/// flat shape: `{"id": ..., "createdAt": ..., "updatedAt": ..., <fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    /// Unique within the owning collection, immutable after creation.
    pub id: EntityId,

    /// Set exactly once, at creation.
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,

    /// Refreshed on every successful mutation; never earlier than
    /// `created_at`.
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,

    /// The domain fields.
    #[serde(flatten)]
    pub data: T,
}

/// Configuration for opening a store.
#[derive(Debug, Clone)]
pub struct StoreConfig<T> {
    /// Durable slot key, e.g. `"campaign-storage"`.
    pub key: String,

    /// Records the store starts from when no usable snapshot exists.
    /// Empty unless configured: demo content is opt-in, never conflated
    /// with the first-run state.
    pub seed: Vec<Stored<T>>,
}

impl<T> StoreConfig<T> {
    /// Create a config with the given durable slot key and no seed.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            seed: Vec::new(),
        }
    }

    /// Start from a seed dataset when no usable snapshot exists.
    pub fn with_seed(mut self, seed: Vec<Stored<T>>) -> Self {
        self.seed = seed;
        self
    }
}

/// A persisted, in-memory collection of one entity kind.
///
/// The store is the exclusive owner of its collection; callers get
/// borrowed, read-only views. All operations run to completion on the
/// calling thread; the store is meant for a single logical owner, so no
/// locking is involved. After every mutation the full state is mirrored
/// to one slot of the injected [`SnapshotStorage`]. The mirror is
/// best-effort: a failed write is reported through `tracing` and the
/// in-memory state stays authoritative for the rest of the session.
pub struct EntityStore<T> {
    key: String,
    records: Vec<Stored<T>>,
    selection: Option<EntityId>,
    storage: Box<dyn SnapshotStorage>,
}

impl<T> EntityStore<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Open a store, hydrating from the storage slot named by the config.
    ///
    /// A missing snapshot seeds the store from the config. An unreadable,
    /// malformed, or version-mismatched snapshot does the same after
    /// logging what was discarded; opening never fails.
    pub fn open(config: StoreConfig<T>, storage: Box<dyn SnapshotStorage>) -> Self {
        let StoreConfig { key, seed } = config;
        let (records, selection) = match hydrate(storage.as_ref(), &key) {
            Ok(Some(snapshot)) => (snapshot.records, snapshot.selection),
            Ok(None) => (seed, None),
            Err(err) => {
                warn!(key = %key, error = %err, "discarding unusable snapshot, seeding store");
                (seed, None)
            }
        };
        Self {
            key,
            records,
            selection,
            storage,
        }
    }

    /// Create a new entity from domain fields.
    ///
    /// The id and both timestamps are assigned here, never by the caller;
    /// a freshly created record has `created_at == updated_at`. The record
    /// is appended, so insertion order is creation order.
    pub fn add(&mut self, data: T) -> Stored<T> {
        let now = Timestamp::now();
        let record = Stored {
            id: EntityId::generate(),
            created_at: now.clone(),
            updated_at: now,
            data,
        };
        self.records.push(record.clone());
        self.sync();
        record
    }

    /// Mutate the domain fields of the entity with `id`.
    ///
    /// An absent id is a silent no-op rather than an error; this keeps the
    /// call ergonomic for optimistic UI updates. Callers that need
    /// confirmation check [`EntityStore::get`]. The closure only sees the
    /// domain fields, so `id` and `created_at` cannot be touched;
    /// `updated_at` is refreshed when the entity was found.
    pub fn update(&mut self, id: &EntityId, mutate: impl FnOnce(&mut T)) {
        let Some(record) = self.records.iter_mut().find(|r| &r.id == id) else {
            return;
        };
        mutate(&mut record.data);
        record.updated_at = Timestamp::now();
        self.sync();
    }

    /// Remove the entity with `id`. Hard delete, no tombstone; no-op when
    /// absent. A selection pointing at the deleted entity is cleared.
    pub fn delete(&mut self, id: &EntityId) {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() == before {
            return;
        }
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        self.sync();
    }

    /// Point the transient selection at `id`, or clear it with `None`.
    ///
    /// The id is not validated against the collection; a dangling
    /// selection simply resolves to nothing on lookup.
    pub fn select(&mut self, id: Option<EntityId>) {
        self.selection = id;
        self.sync();
    }

    /// The currently selected id, if any.
    pub fn selected_id(&self) -> Option<&EntityId> {
        self.selection.as_ref()
    }

    /// The currently selected record, when the selection resolves.
    pub fn selected(&self) -> Option<&Stored<T>> {
        self.selection
            .as_ref()
            .and_then(|id| self.records.iter().find(|r| &r.id == id))
    }

    /// Point lookup by id, independent of collection order.
    pub fn get(&self, id: &EntityId) -> Option<&Stored<T>> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// All records in insertion order, as a read-only view. Callers that
    /// need a different order sort a copy themselves.
    pub fn list(&self) -> &[Stored<T>] {
        &self.records
    }

    /// Records matching a caller-supplied predicate, in insertion order.
    ///
    /// This is the general form of per-kind queries like "characters in
    /// campaign X": filter on the foreign-key field in the payload.
    pub fn list_where(&self, mut predicate: impl FnMut(&Stored<T>) -> bool) -> Vec<&Stored<T>> {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mirror the full state to the durable slot. Best-effort: failure is
    /// reported through `tracing` and never reaches the caller.
    fn sync(&self) {
        let encoded = match Snapshot::encode(&self.records, self.selection.as_ref()) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.save(&self.key, &encoded) {
            warn!(key = %self.key, error = %err, "failed to persist snapshot");
        }
    }
}

fn hydrate<T>(
    storage: &dyn SnapshotStorage,
    key: &str,
) -> Result<Option<Snapshot<T>>, crate::storage::StorageError>
where
    T: DeserializeOwned,
{
    match storage.load(key)? {
        Some(raw) => Ok(Some(Snapshot::decode(&raw)?)),
        None => Ok(None),
    }
}
