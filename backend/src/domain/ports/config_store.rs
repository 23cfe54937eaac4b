//! Port for persisted directory settings.
//!
//! The [`ConfigStore`] trait is a flat string key-value store. The directory
//! controller reads it once at construction and writes through it after every
//! mutation; the theme service shares it for its single flag.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::define_port_error;

define_port_error! {
    /// Errors raised by config store adapters.
    pub enum ConfigStoreError {
        /// Stored settings could not be read or decoded.
        Read => "config store read failed",
        /// Settings could not be written.
        Write => "config store write failed",
    }
}

/// Flat string settings keyed by name.
///
/// # Examples
/// ```
/// use user_directory::domain::ports::SettingsEntries;
///
/// let mut entries = SettingsEntries::default();
/// entries.insert("page_size", "10");
/// assert_eq!(entries.get("page_size"), Some("10"));
/// assert_eq!(entries.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsEntries(BTreeMap<String, String>);

impl SettingsEntries {
    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copy every entry of `other` over this one.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Port for reading and writing persisted settings.
///
/// # Write semantics
///
/// [`ConfigStore::write`] merges the given entries into the store; keys it
/// does not mention are left untouched. Last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read every stored entry.
    async fn load(&self) -> Result<SettingsEntries, ConfigStoreError>;

    /// Merge `entries` into the store.
    async fn write(&self, entries: &SettingsEntries) -> Result<(), ConfigStoreError>;

    /// Remove every stored entry.
    async fn clear(&self) -> Result<(), ConfigStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_and_keeps_other_keys() {
        let mut stored = SettingsEntries::default();
        stored.insert("dark_mode", "true");
        stored.insert("page_size", "6");
        let mut update = SettingsEntries::default();
        update.insert("page_size", "10");

        stored.merge(&update);

        assert_eq!(stored.get("page_size"), Some("10"));
        assert_eq!(stored.get("dark_mode"), Some("true"));
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn entries_serialize_as_flat_object() {
        let mut entries = SettingsEntries::default();
        entries.insert("search_scope", "global");

        let json = serde_json::to_string(&entries).expect("serialize");

        assert_eq!(json, r#"{"search_scope":"global"}"#);
    }

    #[test]
    fn write_error_formats_correctly() {
        let error = ConfigStoreError::write("disk full");
        assert_eq!(error.to_string(), "config store write failed: disk full");
    }
}
