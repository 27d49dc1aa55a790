//! Backend standing in for a storage area the host does not offer.

use crate::domain::error::{NavError, Result};
use crate::storage::backend::{StorageBackend, Tier};

/// Fails every operation with [`NavError::Unavailable`].
///
/// Keeps a tier's slot in the chain when the area is switched off in config
/// or could not be opened, so logs still show which tier was skipped.
#[derive(Debug, Clone)]
pub struct DisabledStore {
    tier: Tier,
    reason: String,
}

impl DisabledStore {
    #[must_use]
    pub fn new(tier: Tier, reason: impl Into<String>) -> Self {
        Self {
            tier,
            reason: reason.into(),
        }
    }

    fn unavailable(&self) -> NavError {
        NavError::Unavailable(format!("{} storage: {}", self.tier, self.reason))
    }
}

impl StorageBackend for DisabledStore {
    fn tier(&self) -> Tier {
        self.tier
    }

    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(self.unavailable())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(self.unavailable())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(self.unavailable())
    }

    fn clear(&mut self) -> Result<()> {
        Err(self.unavailable())
    }
}
