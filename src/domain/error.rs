//! Error types for the navigation controller.
//!
//! This module defines [`NavError`] and the [`Result`] alias used by storage
//! backends, configuration loading and the host bridge. Errors stop at
//! component boundaries: the storage adapter and the controller log and
//! swallow them, so the host never sees one.

use thiserror::Error;

/// Every failure a backend, loader or bridge can report.
///
/// # Examples
///
/// ```
/// use campusnav::domain::NavError;
///
/// fn write_token() -> Result<(), NavError> {
///     Err(NavError::QuotaExceeded { needed: 4096, quota: 1024 })
/// }
/// assert!(write_token().is_err());
/// ```
#[derive(Debug, Error)]
pub enum NavError {
    /// A storage backend could not complete a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A quota-limited backend rejected a write.
    #[error("Storage quota exceeded: need {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        needed: usize,
        /// Configured byte limit.
        quota: usize,
    },

    /// The backend is switched off or not present on this host.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted value or protocol message was not valid JSON for its type.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host sent something the bridge cannot interpret.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// A specialized `Result` type for navigation operations.
pub type Result<T> = std::result::Result<T, NavError>;
