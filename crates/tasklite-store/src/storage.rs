use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;

/// The persistence-medium boundary: a synchronous, string-keyed store.
///
/// The engine only needs "get string for key" / "set string for key"
/// semantics; capacity limits, scoping and durability are the backend's
/// business. Errors surface here and are absorbed one layer up, in
/// [`crate::SnapshotStore`].
pub trait StringStore {
    /// Read the value stored under `key`; `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile in-memory backend, for tests and embedders that bring their own
/// durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable backend keeping one `<key>.json` file per key under a data
/// directory. The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open a store under the configured data directory: the `config.toml`
    /// override when present, the resolved platform default otherwise.
    pub fn open_default() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::new(config.snapshot_dir()?))
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StringStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create data directory {}", self.root.display())
        })?;

        let path = self.entry_path(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
