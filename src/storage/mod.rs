//! Storage layer for persisted dashboard preferences.
//!
//! Browser-style string key-value storage behind one trait, and a ranked
//! fallback chain that never fails. The controller persists the per-role
//! sidebar flag and the theme here, and reads the signed-in user.
//!
//! # Modules
//!
//! - `backend`: [`StorageBackend`] trait and persistence [`Tier`]s
//! - `json`: JSON file backend (durable and session tiers)
//! - `memory`: in-memory backend with optional quota
//! - `disabled`: placeholder for unavailable tiers
//! - `fallback`: [`FallbackStorage`], the adapter used by the controller
//! - `keys`: shared key names

pub mod backend;
pub mod disabled;
pub mod fallback;
pub mod json;
pub mod keys;
pub mod memory;

pub use backend::{StorageBackend, Tier};
pub use disabled::DisabledStore;
pub use fallback::FallbackStorage;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
