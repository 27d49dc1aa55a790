//! Storage adapter behavior across degraded backend chains.

use campusnav::storage::{DisabledStore, FallbackStorage, JsonFileStore, MemoryStore, StorageBackend, Tier};
use campusnav::Config;
use tempfile::TempDir;

#[test]
fn round_trips_while_any_tier_works() {
    let chains: Vec<Vec<Box<dyn StorageBackend>>> = vec![
        vec![Box::new(MemoryStore::new())],
        vec![
            Box::new(DisabledStore::new(Tier::Durable, "private mode")),
            Box::new(MemoryStore::new()),
        ],
        vec![
            Box::new(DisabledStore::new(Tier::Durable, "private mode")),
            Box::new(DisabledStore::new(Tier::Session, "blocked")),
            Box::new(MemoryStore::new()),
        ],
    ];

    for backends in chains {
        let mut storage = FallbackStorage::new(backends);
        storage.set("adminSidebarCollapsed", "true");
        assert_eq!(storage.get("adminSidebarCollapsed").as_deref(), Some("true"));

        storage.remove("adminSidebarCollapsed");
        assert_eq!(storage.get("adminSidebarCollapsed"), None);
    }
}

#[test]
fn all_disabled_reads_nothing_and_never_panics() {
    let mut storage = FallbackStorage::new(vec![
        Box::new(DisabledStore::new(Tier::Durable, "off")),
        Box::new(DisabledStore::new(Tier::Session, "off")),
    ]);
    storage.set("theme", "dark");
    storage.clear();
    assert_eq!(storage.get("theme"), None);
    assert_eq!(storage.get_bool("theme"), None);
}

#[test]
fn full_tier_does_not_shadow_newer_value() {
    let mut storage = FallbackStorage::new(vec![
        Box::new(MemoryStore::with_quota(24).as_tier(Tier::Durable)),
        Box::new(MemoryStore::new()),
    ]);

    storage.set("theme", "light");
    storage.set("theme", "a-value-too-large-for-the-quota");
    assert_eq!(storage.get("theme").as_deref(), Some("a-value-too-large-for-the-quota"));
}

#[test]
fn durable_file_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        session_storage: false,
        ..Config::default()
    };

    let mut storage = FallbackStorage::from_config(&config);
    assert_eq!(storage.tiers(), vec![Tier::Durable, Tier::Session, Tier::Memory]);
    storage.set_bool("studentSidebarCollapsed", true);
    drop(storage);

    let reopened = FallbackStorage::from_config(&config);
    assert_eq!(reopened.get_bool("studentSidebarCollapsed"), Some(true));
}

#[test]
fn corrupt_file_is_reported_by_backend() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local-storage.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(JsonFileStore::open(path, Tier::Durable).is_err());
}
