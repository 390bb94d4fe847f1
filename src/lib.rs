//! Persisted entity stores for tabletop-RPG campaign data.
//!
//! This crate is the data layer of a campaign manager. It provides:
//! - A generic, persisted, in-memory collection store with CRUD and
//!   single-item selection
//! - The campaign-domain record shapes (campaigns, characters, sessions,
//!   locations, NPCs, factions)
//! - A singleton user-preferences store
//! - A small durable key-value contract with in-memory and file backends
//!
//! Each entity kind owns an independent store instance and an independent
//! durable slot. Stores run synchronously on their caller, mirror their
//! full state after every mutation, and treat the mirror as best-effort:
//! the in-memory collection is the source of truth for the session.
//!
//! # Quick Start
//!
//! ```
//! use campaign_store::model::{Campaign, CampaignStatus};
//! use campaign_store::{EntityStore, MemoryStorage, StoreConfig};
//!
//! let storage = Box::new(MemoryStorage::new());
//! let mut campaigns = EntityStore::open(StoreConfig::new("campaign-storage"), storage);
//!
//! let created = campaigns.add(Campaign {
//!     title: "Chronicles of the Mystic Realms".to_string(),
//!     description: "A band of heroes against an ancient evil.".to_string(),
//!     status: CampaignStatus::Active,
//!     system: "D&D 5e".to_string(),
//!     sessions: 0,
//!     players: 5,
//! });
//!
//! campaigns.update(&created.id, |campaign| campaign.sessions += 1);
//! assert_eq!(campaigns.get(&created.id).unwrap().data.sessions, 1);
//! ```

pub mod id;
pub mod model;
pub mod preferences;
pub mod storage;
pub mod store;
pub mod testing;
pub mod time;

// Primary public API
pub use id::EntityId;
pub use preferences::{PreferencesStore, Theme, UserPreferences};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage, StorageError};
pub use store::{EntityStore, StoreConfig, Stored};
pub use time::Timestamp;
