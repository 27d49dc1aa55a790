//! In-memory storage backend.

use crate::domain::error::{NavError, Result};
use crate::storage::backend::{StorageBackend, Tier};
use std::collections::HashMap;

/// A `HashMap` store that lives as long as the controller.
///
/// With a quota, writes that would push the total size of keys plus values
/// above the limit fail with [`NavError::QuotaExceeded`], mirroring a full
/// browser storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    tier: Option<Tier>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes beyond `bytes` total.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Reports `tier` instead of [`Tier::Memory`].
    ///
    /// Hosts without a session-scoped area use this to stand in for one.
    #[must_use]
    pub fn as_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStore {
    fn tier(&self) -> Tier {
        self.tier.unwrap_or(Tier::Memory)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(NavError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let mut store = MemoryStore::with_quota(16);
        store.set("theme", "dark").unwrap();

        let err = store.set("user", "x".repeat(64).as_str()).unwrap_err();
        assert!(matches!(err, NavError::QuotaExceeded { quota: 16, .. }));
        assert_eq!(store.get("user").unwrap(), None);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn quota_accounts_for_replaced_value() {
        let mut store = MemoryStore::with_quota(10);
        store.set("k", "123456789").unwrap();
        store.set("k", "987654321").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn tier_override() {
        assert_eq!(MemoryStore::new().tier(), Tier::Memory);
        assert_eq!(MemoryStore::new().as_tier(Tier::Session).tier(), Tier::Session);
    }
}
