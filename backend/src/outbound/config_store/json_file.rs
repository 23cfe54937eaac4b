//! Settings persisted as a flat JSON object on disk.

use std::io;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::write_atomic;
use crate::domain::ports::{ConfigStore, ConfigStoreError, SettingsEntries};

/// [`ConfigStore`] backed by a JSON file.
///
/// A missing file reads as an empty store. Writes load the current file,
/// merge the new entries and atomically replace it.
///
/// File I/O is blocking and runs on the calling task, so the store suits a
/// current-thread runtime with small settings files.
#[derive(Debug)]
pub struct JsonFileConfigStore {
    dir: Dir,
    file_name: Utf8PathBuf,
    write_guard: Mutex<()>,
}

impl JsonFileConfigStore {
    /// Open a store at `path`, creating its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError::Read`] when the path has no file name or
    /// the parent directory cannot be created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, ConfigStoreError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigStoreError::read(format!("settings path has no file name: {path}")))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(|err| ConfigStoreError::read(format!("{parent}: {err}")))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| ConfigStoreError::read(format!("{parent}: {err}")))?;

        Ok(Self {
            dir,
            file_name: Utf8PathBuf::from(file_name),
            write_guard: Mutex::new(()),
        })
    }

    fn read_entries(&self) -> Result<SettingsEntries, ConfigStoreError> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) if contents.trim().is_empty() => Ok(SettingsEntries::default()),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| ConfigStoreError::read(format!("{}: {err}", self.file_name))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SettingsEntries::default()),
            Err(err) => Err(ConfigStoreError::read(format!("{}: {err}", self.file_name))),
        }
    }
}

#[async_trait]
impl ConfigStore for JsonFileConfigStore {
    async fn load(&self) -> Result<SettingsEntries, ConfigStoreError> {
        self.read_entries()
    }

    async fn write(&self, entries: &SettingsEntries) -> Result<(), ConfigStoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stored = self
            .read_entries()
            .map_err(|err| ConfigStoreError::write(err.message()))?;
        stored.merge(entries);
        let contents = serde_json::to_string_pretty(&stored)
            .map_err(|err| ConfigStoreError::write(err.to_string()))?;
        write_atomic(&self.dir, &self.file_name, &contents)?;
        debug!(file = %self.file_name, keys = stored.len(), "settings written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigStoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        match self.dir.remove_file(&self.file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ConfigStoreError::write(format!("{}: {err}", self.file_name))),
        }
    }
}
