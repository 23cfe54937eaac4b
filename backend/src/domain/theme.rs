//! Dark-mode preference, kept apart from the directory controller.

use std::sync::Arc;

use tracing::warn;

use super::ports::{ConfigStore, SettingsEntries};
use super::preferences::keys;

/// Reads and writes the dark-mode flag through a [`ConfigStore`].
///
/// The service only ever touches [`keys::DARK_MODE`]; it has no knowledge of
/// queries or pagination.
pub struct ThemeService<C> {
    store: Arc<C>,
}

impl<C> ThemeService<C> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }
}

impl<C: ConfigStore> ThemeService<C> {
    /// Whether dark mode is enabled. Unreadable or missing values mean `false`.
    pub async fn is_dark(&self) -> bool {
        match self.store.load().await {
            Ok(entries) => entries
                .get(keys::DARK_MODE)
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(false),
            Err(error) => {
                warn!(%error, "failed to read theme preference");
                false
            }
        }
    }

    /// Persist the dark-mode flag.
    pub async fn set_dark(&self, enabled: bool) {
        let mut entries = SettingsEntries::default();
        entries.insert(keys::DARK_MODE, enabled.to_string());
        if let Err(error) = self.store.write(&entries).await {
            warn!(%error, enabled, "failed to persist theme preference");
        }
    }

    /// Flip the dark-mode flag and return the new value.
    pub async fn toggle(&self) -> bool {
        let enabled = !self.is_dark().await;
        self.set_dark(enabled).await;
        enabled
    }
}
