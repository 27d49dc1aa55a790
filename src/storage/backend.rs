//! Storage backend abstraction.
//!
//! This module defines the [`StorageBackend`] trait implemented by every
//! key-value store the adapter can rank: the durable JSON file, the
//! session-scoped file, and the in-memory map. Values are plain strings, the
//! same contract browser storage offers; typed access lives on
//! [`FallbackStorage`](super::FallbackStorage).

use crate::domain::error::Result;
use std::fmt;

/// How long data written to a backend survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Survives restarts of the host.
    Durable,
    /// Survives reloads within one host session.
    Session,
    /// Lost when the controller is dropped.
    Memory,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Durable => "durable",
            Self::Session => "session",
            Self::Memory => "memory",
        })
    }
}

/// A string key-value store.
///
/// Every method may fail (quota, disabled storage, I/O); callers that must
/// not fail go through [`FallbackStorage`](super::FallbackStorage), which
/// logs and swallows these errors.
///
/// # Implementations
///
/// - [`JsonFileStore`](super::JsonFileStore): JSON file with atomic writes
/// - [`MemoryStore`](super::MemoryStore): in-process map, optional quota
/// - [`DisabledStore`](super::DisabledStore): always unavailable
///
/// # Examples
///
/// ```
/// use campusnav::storage::{MemoryStore, StorageBackend};
///
/// let mut store = MemoryStore::new();
/// store.set("theme", "dark")?;
/// assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), campusnav::NavError>(())
/// ```
pub trait StorageBackend: Send {
    /// Persistence tier, used for ranking and logging.
    fn tier(&self) -> Tier;

    /// Reads a value; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected or cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Deletes every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn clear(&mut self) -> Result<()>;
}
