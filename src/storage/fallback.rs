//! Ranked fallback chain over storage backends.
//!
//! [`FallbackStorage`] is the only storage type the controller talks to. It
//! holds backends ordered from most to least persistent and never fails:
//!
//! - `set` writes to every backend, so whichever survives can answer later
//! - `get` returns the first non-null hit in priority order
//! - `remove` and `clear` apply to every backend
//!
//! Backend errors are logged at `warn` and swallowed. Persistence is a
//! convenience for the next page load; a session works without it.

use crate::domain::error::NavError;
use crate::infrastructure::paths;
use crate::storage::backend::{StorageBackend, Tier};
use crate::storage::{DisabledStore, JsonFileStore, MemoryStore};
use crate::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage adapter that degrades from durable to session to memory.
///
/// # Examples
///
/// ```
/// use campusnav::storage::{DisabledStore, FallbackStorage, MemoryStore, Tier};
///
/// let mut storage = FallbackStorage::new(vec![
///     Box::new(DisabledStore::new(Tier::Durable, "private browsing")),
///     Box::new(MemoryStore::new()),
/// ]);
/// storage.set_bool("sidebarCollapsed", true);
/// assert_eq!(storage.get_bool("sidebarCollapsed"), Some(true));
/// ```
pub struct FallbackStorage {
    backends: Vec<Box<dyn StorageBackend>>,
}

impl FallbackStorage {
    /// Builds a chain from backends already in priority order.
    #[must_use]
    pub fn new(backends: Vec<Box<dyn StorageBackend>>) -> Self {
        Self { backends }
    }

    /// A chain with a single in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(vec![Box::new(MemoryStore::new())])
    }

    /// Builds the standard three-tier chain described by `config`.
    ///
    /// A tier that is switched off, or whose file cannot be opened, is
    /// replaced by a [`DisabledStore`] so the chain shape stays the same.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let data_dir = config.data_dir.clone().unwrap_or_else(paths::get_data_dir);

        let durable = if config.durable_storage {
            open_file_tier(data_dir.join(paths::DURABLE_FILE), Tier::Durable)
        } else {
            Box::new(DisabledStore::new(Tier::Durable, "disabled in config"))
        };

        let session = if config.session_storage {
            open_file_tier(paths::get_session_file(), Tier::Session)
        } else {
            Box::new(DisabledStore::new(Tier::Session, "disabled in config"))
        };

        Self::new(vec![durable, session, Box::new(MemoryStore::new())])
    }

    /// Tiers in priority order.
    #[must_use]
    pub fn tiers(&self) -> Vec<Tier> {
        self.backends.iter().map(|b| b.tier()).collect()
    }

    /// Returns the first non-null value in priority order.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        for backend in &self.backends {
            match backend.get(key) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => {}
                Err(e) => log_failure("get", key, backend.tier(), &e),
            }
        }
        None
    }

    /// Writes `value` to every backend.
    ///
    /// A backend that rejects the write has its old copy removed, so a stale
    /// value in a higher tier cannot shadow the new one.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut stored = 0usize;
        for backend in &mut self.backends {
            match backend.set(key, value) {
                Ok(()) => stored += 1,
                Err(e) => {
                    log_failure("set", key, backend.tier(), &e);
                    if let Err(e) = backend.remove(key) {
                        log_failure("remove", key, backend.tier(), &e);
                    }
                }
            }
        }
        if stored == 0 {
            tracing::warn!(key, "value not stored in any backend");
        }
    }

    pub fn remove(&mut self, key: &str) {
        for backend in &mut self.backends {
            if let Err(e) = backend.remove(key) {
                log_failure("remove", key, backend.tier(), &e);
            }
        }
    }

    pub fn clear(&mut self) {
        for backend in &mut self.backends {
            if let Err(e) = backend.clear() {
                log_failure("clear", "*", backend.tier(), &e);
            }
        }
    }

    /// Reads a stringified boolean (`"true"`/`"false"`).
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            other => {
                tracing::warn!(key, value = other, "ignoring non-boolean stored value");
                None
            }
        }
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Reads and deserializes a JSON value. Unparseable data reads as absent.
    #[must_use]
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed stored JSON");
                None
            }
        }
    }

    /// Serializes `value` to JSON and stores it.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set(key, &json),
            Err(e) => tracing::warn!(key, error = %e, "value could not be serialized"),
        }
    }
}

impl std::fmt::Debug for FallbackStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackStorage")
            .field("tiers", &self.tiers())
            .finish()
    }
}

fn open_file_tier(path: std::path::PathBuf, tier: Tier) -> Box<dyn StorageBackend> {
    match JsonFileStore::open(path, tier) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(%tier, error = %e, "storage tier unavailable, skipping");
            Box::new(DisabledStore::new(tier, e.to_string()))
        }
    }
}

fn log_failure(op: &str, key: &str, tier: Tier, error: &NavError) {
    tracing::warn!(op, key, %tier, error = %error, "storage backend failed, falling through");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(durable: bool, session: bool) -> FallbackStorage {
        let tier = |enabled: bool, t: Tier| -> Box<dyn StorageBackend> {
            if enabled {
                Box::new(MemoryStore::new().as_tier(t))
            } else {
                Box::new(DisabledStore::new(t, "test"))
            }
        };
        FallbackStorage::new(vec![
            tier(durable, Tier::Durable),
            tier(session, Tier::Session),
            Box::new(MemoryStore::new()),
        ])
    }

    #[test]
    fn round_trips_on_every_degradation_path() {
        for (durable, session) in [(true, true), (false, true), (true, false), (false, false)] {
            let mut storage = chain(durable, session);
            storage.set("theme", "dark");
            assert_eq!(storage.get("theme").as_deref(), Some("dark"), "{durable}/{session}");
            storage.remove("theme");
            assert_eq!(storage.get("theme"), None);
        }
    }

    #[test]
    fn rejected_write_does_not_leave_stale_value_in_higher_tier() {
        let mut storage = FallbackStorage::new(vec![
            Box::new(MemoryStore::with_quota(24).as_tier(Tier::Durable)),
            Box::new(MemoryStore::new()),
        ]);
        storage.set("user", "short");
        storage.set("user", &"long".repeat(20));
        assert_eq!(storage.get("user"), Some("long".repeat(20)));
    }

    /// Holds one value it can neither replace nor delete.
    struct StuckStore;

    impl StorageBackend for StuckStore {
        fn tier(&self) -> Tier {
            Tier::Durable
        }

        fn get(&self, _key: &str) -> crate::domain::error::Result<Option<String>> {
            Ok(Some("old".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> crate::domain::error::Result<()> {
            Err(NavError::Storage("disk full".to_string()))
        }

        fn remove(&mut self, _key: &str) -> crate::domain::error::Result<()> {
            Err(NavError::Storage("disk full".to_string()))
        }

        fn clear(&mut self) -> crate::domain::error::Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_stale_copy_removal_is_logged() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut storage = FallbackStorage::new(vec![Box::new(StuckStore), Box::new(MemoryStore::new())]);
        tracing::subscriber::with_default(subscriber, || storage.set("theme", "dark"));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"set\""), "{output}");
        assert!(output.contains("\"remove\""), "{output}");
        assert_eq!(storage.get("theme").as_deref(), Some("old"));
    }

    #[test]
    fn typed_helpers_tolerate_garbage() {
        let mut storage = FallbackStorage::in_memory();
        storage.set("sidebarCollapsed", "yes");
        assert_eq!(storage.get_bool("sidebarCollapsed"), None);

        storage.set("user", "{broken");
        assert_eq!(storage.get_json::<serde_json::Value>("user"), None);

        storage.set_json("user", &serde_json::json!({"name": "A"}));
        let back: serde_json::Value = storage.get_json("user").unwrap();
        assert_eq!(back["name"], "A");
    }

    #[test]
    fn clear_wipes_all_tiers() {
        let mut storage = chain(true, true);
        storage.set("a", "1");
        storage.set("b", "2");
        storage.clear();
        assert_eq!(storage.get("a"), None);
        assert_eq!(storage.get("b"), None);
    }

    #[test]
    fn from_config_uses_data_dir_and_respects_switches() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            session_storage: false,
            ..Config::default()
        };
        let mut storage = FallbackStorage::from_config(&config);
        assert_eq!(storage.tiers(), vec![Tier::Durable, Tier::Session, Tier::Memory]);

        storage.set("theme", "dark");
        drop(storage);

        let reopened = FallbackStorage::from_config(&config);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }
}
