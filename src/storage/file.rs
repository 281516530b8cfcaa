//! File-backed key-value store
//!
//! Keeps every record in one JSON object on disk, the native counterpart of
//! browser local storage. Each write rewrites the whole file through a
//! temporary sibling that is renamed over the target.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{StorageError, StorageResult};
use super::traits::KeyValueStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing or empty file is an empty store. Nothing is written until
    /// the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), records = records.len(), "opened file store");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = serde_json::to_string_pretty(&self.records)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let previous = self.records.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in line with what is on disk
            match previous {
                Some(old) => self.records.insert(key.to_string(), old),
                None => self.records.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
