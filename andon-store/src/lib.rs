//! Durable per-user key-value storage port for board preferences.
//!
//! The board engine treats preference persistence as an injected capability:
//! callers write through the [`OrderStore`] trait and never learn where the
//! bytes land. Two implementations ship here:
//!
//! - [`MemoryStore`] — process-local map, for tests and board variants that
//!   do not persist anything between sessions
//! - [`FileStore`] — all keys in a single JSON file, the way a desktop shell
//!   keeps its config

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A durable string key-value store.
///
/// Writes are small (a serialized column-order array) and reads happen once
/// per board load, so implementations are expected to be cheap enough to call
/// from UI event handlers.
pub trait OrderStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
