//! The persisted user-preferences store.
//!
//! Preferences are a singleton record, not a collection, but they follow
//! the same mirror discipline as [`EntityStore`](crate::store::EntityStore):
//! hydrate once at open, write back after every change, fall back to
//! defaults on a bad snapshot.

use crate::storage::SnapshotStorage;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// UI theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Per-user display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    /// Base font size in pixels.
    pub font_size: u8,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sidebar_collapsed: false,
            font_size: 16,
        }
    }
}

/// Persisted wrapper around [`UserPreferences`].
pub struct PreferencesStore {
    key: String,
    prefs: UserPreferences,
    storage: Box<dyn SnapshotStorage>,
}

impl PreferencesStore {
    /// Slot key used by [`PreferencesStore::open`].
    pub const DEFAULT_KEY: &'static str = "user-preferences";

    /// Open the store under the default slot key.
    pub fn open(storage: Box<dyn SnapshotStorage>) -> Self {
        Self::open_with_key(Self::DEFAULT_KEY, storage)
    }

    /// Open the store under a custom slot key. A missing, unreadable, or
    /// malformed snapshot yields the defaults; opening never fails.
    pub fn open_with_key(key: impl Into<String>, storage: Box<dyn SnapshotStorage>) -> Self {
        let key = key.into();
        let prefs = match storage.load(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(err) => {
                    warn!(key = %key, error = %err, "discarding unusable preferences snapshot");
                    UserPreferences::default()
                }
            },
            Ok(None) => UserPreferences::default(),
            Err(err) => {
                warn!(key = %key, error = %err, "failed to load preferences");
                UserPreferences::default()
            }
        };
        Self {
            key,
            prefs,
            storage,
        }
    }

    /// The current preferences.
    pub fn get(&self) -> &UserPreferences {
        &self.prefs
    }

    /// Flip between dark and light themes.
    pub fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggled();
        self.sync();
    }

    /// Collapse or expand the navigation sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.prefs.sidebar_collapsed = !self.prefs.sidebar_collapsed;
        self.sync();
    }

    /// Set the base font size in pixels.
    pub fn set_font_size(&mut self, font_size: u8) {
        self.prefs.font_size = font_size;
        self.sync();
    }

    fn sync(&self) {
        let encoded = match serde_json::to_string(&self.prefs) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode preferences");
                return;
            }
        };
        if let Err(err) = self.storage.save(&self.key, &encoded) {
            warn!(key = %self.key, error = %err, "failed to persist preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::testing::FailingStorage;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let store = PreferencesStore::open(Box::new(MemoryStorage::new()));
        let prefs = store.get();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(!prefs.sidebar_collapsed);
        assert_eq!(prefs.font_size, 16);
    }

    #[test]
    fn test_toggles_and_font_size() {
        let mut store = PreferencesStore::open(Box::new(MemoryStorage::new()));

        store.toggle_theme();
        assert_eq!(store.get().theme, Theme::Light);
        store.toggle_theme();
        assert_eq!(store.get().theme, Theme::Dark);

        store.toggle_sidebar();
        assert!(store.get().sidebar_collapsed);

        store.set_font_size(18);
        assert_eq!(store.get().font_size, 18);
    }

    #[test]
    fn test_changes_survive_reopen() {
        let storage = Arc::new(MemoryStorage::new());

        let mut store = PreferencesStore::open(Box::new(storage.clone()));
        store.toggle_theme();
        store.set_font_size(20);

        let reopened = PreferencesStore::open(Box::new(storage));
        assert_eq!(reopened.get().theme, Theme::Light);
        assert_eq!(reopened.get().font_size, 20);
    }

    #[test]
    fn test_malformed_snapshot_yields_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .save(PreferencesStore::DEFAULT_KEY, "{\"theme\":7}")
            .unwrap();

        let store = PreferencesStore::open(Box::new(storage));
        assert_eq!(store.get(), &UserPreferences::default());
    }

    #[test]
    fn test_failing_storage_never_fails_changes() {
        let mut store = PreferencesStore::open(Box::new(FailingStorage));
        store.toggle_sidebar();
        assert!(store.get().sidebar_collapsed);
    }
}
