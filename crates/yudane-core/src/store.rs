//! Key-value persistence for shrine records.
//!
//! Records are stored as JSON strings under fixed keys. [`FileStore`] keeps
//! one `<key>.json` file per key; [`MemoryStore`] backs tests.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{YudaneError, YudaneResult};

/// Key of the daily oracle record.
pub const RITUAL_KEY: &str = "yudane_ritual";
/// Key of the believer record.
pub const BELIEVER_KEY: &str = "yudane_believer";

/// A string key-value store.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is unset.
    fn get(&self, key: &str) -> YudaneResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> YudaneResult<()>;

    /// Delete a value. Removing an unset key is not an error.
    fn remove(&mut self, key: &str) -> YudaneResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> YudaneResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> YudaneResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> YudaneResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> YudaneResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(YudaneError::Storage { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> YudaneResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| YudaneError::Storage {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| YudaneError::Storage { path, source })
    }

    fn remove(&mut self, key: &str) -> YudaneResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(YudaneError::Storage { path, source }),
        }
    }
}
