//! Durable key-value storage for store snapshots.
//!
//! The store only ever needs a slot map: a string key mapped to a string
//! value, read once at startup and overwritten after every mutation. The
//! [`Storage`] trait captures exactly that, and three backends implement it:
//!
//! - [`MemoryStorage`]: process-local, for tests and throwaway sessions
//! - [`JsonFileStorage`]: one `<key>.json` file per slot in a directory
//! - [`SqliteStorage`]: a `kv_slots` table in a SQLite database
//!
//! [`Snapshot`] is the document written into the slot.

mod json_file;
mod memory;
mod snapshot;
mod sqlite;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use snapshot::Snapshot;
pub use sqlite::SqliteStorage;

use crate::error::Result;

/// Slot key the store persists under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "momentum-goals";

/// A durable map from slot keys to serialized values.
pub trait Storage {
    /// Reads a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites a slot.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
