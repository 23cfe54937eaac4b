//! Process-local settings store.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{ConfigStore, ConfigStoreError, SettingsEntries};

/// [`ConfigStore`] that keeps entries in memory for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    entries: Mutex<SettingsEntries>,
}

impl InMemoryConfigStore {
    /// Create a store pre-populated with `entries`.
    pub fn with_entries(entries: SettingsEntries) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, SettingsEntries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn load(&self) -> Result<SettingsEntries, ConfigStoreError> {
        Ok(self.entries().clone())
    }

    async fn write(&self, entries: &SettingsEntries) -> Result<(), ConfigStoreError> {
        self.entries().merge(entries);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigStoreError> {
        *self.entries() = SettingsEntries::default();
        Ok(())
    }
}
