//! Key-value backends for the persisted mirror.
//!
//! The store only needs "get a string by key" and "set a string by key".
//! [`MemoryBackend`] keeps everything in a map and is what tests use;
//! [`FileBackend`] keeps one JSON file per key in a data directory.
//! Both can be given a byte quota to reproduce a full browser storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::utils::atomic_write;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError>;
}

fn check_quota(needed: usize, quota: Option<usize>) -> Result<(), BackendError> {
    match quota {
        Some(quota) if needed > quota => Err(BackendError::QuotaExceeded { needed, quota }),
        _ => Ok(()),
    }
}

/// In-memory backend. Usage is counted over all keys and values, like
/// browser local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Seed a value without going through the quota check.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Change the quota after construction, e.g. to make the next write fail.
    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Bytes used by every key and value.
    #[must_use]
    pub fn usage(&self) -> usize {
        self.entries
            .iter()
            .map(|(k, v)| k.len().saturating_add(v.len()))
            .fold(0, usize::saturating_add)
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        let replaced = self
            .entries
            .get(key)
            .map_or(0, |old| key.len().saturating_add(old.len()));
        let needed = self
            .usage()
            .saturating_sub(replaced)
            .saturating_add(key.len())
            .saturating_add(value.len());
        check_quota(needed, self.quota)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File backend: key `k` lives in `<dir>/k.json`, written atomically.
///
/// The optional quota applies to each value on its own.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota: None,
        }
    }

    #[must_use]
    pub fn with_quota(mut self, quota: Option<usize>) -> Self {
        self.quota = quota;
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are limited to ASCII letters, digits, `_`, `-` and `.` (not
    /// leading), so a key can never escape the data directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, BackendError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(BackendError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        let path = self.path_for(key)?;
        check_quota(value.len(), self.quota)?;
        std::fs::create_dir_all(&self.dir)?;
        atomic_write(&path, value)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
