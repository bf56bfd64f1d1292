//! Builder for creating and configuring GoalStore instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::GoalStore;
use crate::{
    error::{Result, StoreError},
    storage::{JsonFileStorage, MemoryStorage, SqliteStorage, Storage, DEFAULT_STORAGE_KEY},
};

/// Where a store keeps its durable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Nothing survives the process
    Memory,
    /// One JSON file per slot in this directory
    JsonDir(PathBuf),
    /// A SQLite database file
    Sqlite(PathBuf),
}

/// Builder for creating and configuring GoalStore instances.
///
/// Backend precedence: [`in_memory`](Self::in_memory), then
/// [`with_database_path`](Self::with_database_path), then
/// [`with_data_dir`](Self::with_data_dir), then the XDG default
/// `$XDG_DATA_HOME/momentum/`.
#[derive(Debug, Clone)]
pub struct GoalStoreBuilder {
    in_memory: bool,
    data_dir: Option<PathBuf>,
    database_path: Option<PathBuf>,
    storage_key: String,
}

impl GoalStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            in_memory: false,
            data_dir: None,
            database_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Keeps the slot in memory only.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Sets the directory for JSON slot files.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Stores the slot in a SQLite database file instead of JSON files.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the slot key (default `momentum-goals`).
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Resolves which backend `build` would open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::XdgDirectory` if no explicit location was given
    /// and the default data directory cannot be created.
    pub fn backend(&self) -> Result<StorageBackend> {
        if self.in_memory {
            return Ok(StorageBackend::Memory);
        }
        if let Some(path) = &self.database_path {
            return Ok(StorageBackend::Sqlite(path.clone()));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(StorageBackend::JsonDir(dir.clone()));
        }
        Self::default_data_dir().map(StorageBackend::JsonDir)
    }

    /// Opens the configured backend and loads the store from it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem`, `StoreError::Database` or
    /// `StoreError::XdgDirectory` if the backend itself cannot be opened.
    /// The contents of the slot never cause an error.
    pub fn build(self) -> Result<GoalStore> {
        let backend = self.backend()?;
        debug!("opening {backend:?} with key '{}'", self.storage_key);

        let storage: Box<dyn Storage + Send> = match backend {
            StorageBackend::Memory => Box::new(MemoryStorage::new()),
            StorageBackend::JsonDir(dir) => Box::new(JsonFileStorage::open(dir)?),
            StorageBackend::Sqlite(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| StoreError::file_system(parent, e))?;
                }
                Box::new(SqliteStorage::open(&path)?)
            }
        };

        Ok(GoalStore::init(storage, self.storage_key))
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        let slot_file = xdg::BaseDirectories::with_prefix("momentum")
            .place_data_file(format!("{DEFAULT_STORAGE_KEY}.json"))
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))?;

        slot_file
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| StoreError::XdgDirectory("data directory has no parent".to_string()))
    }
}

impl Default for GoalStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
