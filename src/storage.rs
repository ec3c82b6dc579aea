//! Durable key-value storage used by the favorites store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::PlatefulError;

/// A minimal durable string store. One fixed key is enough for the
/// favorites array; the trait keeps the session testable and leaves room
/// for persisting the shopping list later without interface changes.
pub trait KeyValueStore {
    /// Read a key. A key that was never written is `None`, not an error.
    fn read_key(&self, key: &str) -> Result<Option<String>, PlatefulError>;

    /// Write a key so that a crash after return never loses the value.
    fn write_key(&mut self, key: &str, value: &str) -> Result<(), PlatefulError>;
}

/// File-backed store: one file per key under a data directory. Writes go
/// to a temp file first and are renamed into place, so readers never see
/// a partial value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read_key(&self, key: &str) -> Result<Option<String>, PlatefulError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_key(&mut self, key: &str, value: &str) -> Result<(), PlatefulError> {
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.key_path(key))?;
        Ok(())
    }
}

/// In-memory store for tests and sessions that opt out of persistence.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read_key(&self, key: &str) -> Result<Option<String>, PlatefulError> {
        Ok(self.values.get(key).cloned())
    }

    fn write_key(&mut self, key: &str, value: &str) -> Result<(), PlatefulError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
