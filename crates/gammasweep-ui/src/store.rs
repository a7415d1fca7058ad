//! Key-value preference storage.
//!
//! [`FileStore`] keeps a flat JSON object on disk; [`MemoryStore`] keeps the
//! same map in memory for `--ephemeral` sessions and tests.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// Synchronous string key-value storage.
pub trait PreferenceStore: Send {
    /// Read the value stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Preference store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Write to a sibling temp file, then rename it over the real one, so a
    /// crash mid-write leaves the previous contents in place.
    fn replace_contents(&self, bytes: &[u8]) -> StoreResult<()> {
        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
        file.write_all(bytes).map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))
    }

    /// Read the whole object. A missing file is an empty object.
    fn read_map(&self) -> StoreResult<Map<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAnObject(self.path.clone())),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Json(_)) | Err(StoreError::NotAnObject(_)) => {
                tracing::warn!(path = %self.path.display(), "Replacing unreadable preference file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let text = serde_json::to_string_pretty(&Value::Object(map))?;
        self.replace_contents(text.as_bytes())
    }
}

/// In-memory preference store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if persisted by an earlier session.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
