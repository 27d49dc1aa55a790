//! Campusnav: headless navigation controller for multi-role college dashboards.
//!
//! Campusnav drives the chrome of the student, teacher and admin dashboards:
//! - Sidebar collapse with per-role persistence
//! - Mobile slide-out menu with an explicit transition state machine
//! - Horizontal swipes between page sections and pull-to-refresh
//! - Scroll-direction aware navbar hiding and the notice ticker that follows it
//! - Dashboard data widgets with sample-data fallback
//!
//! The controller never touches a DOM. A host feeds it events and runs the
//! actions it returns.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs / bridge, or an embedding page) │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Event            ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - NavigationController                             │
//! │  - View-state store, menu state machine             │
//! │  - Event dispatch, listener subscriptions           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gestures      │   │ Scroll        │   │ Storage       │
//! │ (gesture/)    │   │ (scroll/)     │   │ (storage/)    │
//! │ - Swipe       │   │ - Direction   │   │ - Fallback    │
//! │ - Pull        │   │ - Ticker      │   │ - JSON files  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Data & Infrastructure                      │
//! │  - Roles, menus, users, notices (domain/)           │
//! │  - Widget requests and envelopes (data/)            │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, events, actions and view state
//! - [`bridge`]: Newline-delimited JSON host protocol
//! - [`data`]: Dashboard widget requests and rendering strategies
//! - [`domain`]: Roles, nav items, users, notices, errors
//! - [`gesture`]: Swipe and pull-to-refresh recognizers
//! - [`infrastructure`]: Data and session file locations
//! - [`scroll`]: Scroll-direction monitor and notice ticker
//! - [`storage`]: Fallback key-value storage
//! - [`ui`]: Chrome view models
//! - [`observability`]: OpenTelemetry tracing setup
//!
//! # Configuration
//!
//! A TOML file, all keys optional:
//!
//! ```toml
//! role = "admin"
//! mobile_breakpoint = 768
//! swipe_threshold = 75
//! menu_transition_ms = 300
//! trace_level = "debug"
//! ```
//!
//! or the same keys as a flat string map from page attributes via
//! [`Config::from_map`]. Unparseable values fall back to their defaults.
//!
//! # Example
//!
//! ```rust
//! use campusnav::app::{handle_event, DomInventory, Event};
//! use campusnav::storage::FallbackStorage;
//! use campusnav::{initialize, Config};
//!
//! let mut storage = FallbackStorage::in_memory();
//! storage.set("token", "abc");
//!
//! let mut nav = initialize(Config::default(), storage);
//! let mount = Event::Mount {
//!     inventory: DomInventory::complete(&["dashboard", "attendance"]),
//!     path: "/student-dashboard.html#attendance".into(),
//!     width: 390.0,
//!     scroll: Default::default(),
//! };
//! handle_event(&mut nav, &mount)?;
//!
//! let (_, actions) = handle_event(&mut nav, &Event::HamburgerTap)?;
//! assert!(nav.view_state().mobile_menu_open());
//! # let _ = actions;
//! # Ok::<(), campusnav::NavError>(())
//! ```

pub mod app;
pub mod bridge;
pub mod data;
pub mod domain;
pub mod gesture;
pub mod infrastructure;
pub mod scroll;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, NavigationController};
pub use domain::{NavError, Result, Role};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::data::{AttendanceChart, Capabilities, StaticSamples};
use crate::gesture::{PullConfig, SwipeConfig};
use crate::scroll::ScrollConfig;
use crate::storage::FallbackStorage;

/// Controller configuration.
///
/// Distances are CSS pixels, durations milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dashboard this controller drives. Default: student
    pub role: Role,

    /// Widths below this are mobile. Default: 768
    pub mobile_breakpoint: f64,

    /// Minimum horizontal travel of a swipe. Default: 75
    pub swipe_threshold: f64,

    /// Maximum vertical travel of a swipe. Default: 50
    pub vertical_tolerance: f64,

    /// Right swipes starting this close to the left edge open the menu.
    /// Default: 30
    pub edge_swipe_zone: f64,

    /// Finger travel that arms pull-to-refresh. Default: 80
    pub pull_threshold: f64,

    /// Divisor from finger travel to indicator offset. Default: 2.5
    pub pull_resistance: f64,

    /// Largest indicator offset. Default: 120
    pub pull_max_offset: f64,

    /// Quiet period after a refresh. Default: 3000
    pub refresh_cooldown_ms: u64,

    /// Per-frame scroll delta treated as jitter. Default: 10
    pub scroll_threshold: f64,

    /// Offsets at or above this count as the page top. Default: 60
    pub top_threshold: f64,

    /// Delay before the navbar hides. Default: 150
    pub hide_delay_ms: u64,

    /// Mobile menu slide duration; 0 disables the intermediate states.
    /// Default: 300
    pub menu_transition_ms: u64,

    /// Ticker rotation interval. Default: 5000
    pub ticker_interval_ms: u64,

    /// Navbar height the ticker docks under. Default: 64
    pub navbar_height: f64,

    /// Directory for the durable storage file and traces. Default: platform
    /// data directory
    pub data_dir: Option<PathBuf>,

    /// Enables the durable storage tier. Default: true
    pub durable_storage: bool,

    /// Enables the session storage tier. Default: true
    pub session_storage: bool,

    /// Attach the attendance chart renderer. Default: true
    pub charts: bool,

    /// Fall back to built-in sample data when the API fails. Default: false
    pub sample_data: bool,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role: Role::Student,
            mobile_breakpoint: 768.0,
            swipe_threshold: 75.0,
            vertical_tolerance: 50.0,
            edge_swipe_zone: 30.0,
            pull_threshold: 80.0,
            pull_resistance: 2.5,
            pull_max_offset: 120.0,
            refresh_cooldown_ms: 3_000,
            scroll_threshold: 10.0,
            top_threshold: 60.0,
            hide_delay_ms: 150,
            menu_transition_ms: 300,
            ticker_interval_ms: 5_000,
            navbar_height: 64.0,
            data_dir: None,
            durable_storage: true,
            session_storage: true,
            charts: true,
            sample_data: false,
            trace_level: None,
        }
    }
}

fn parse_or<T: FromStr>(map: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match map.get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(key, value = %raw, "unparseable config value, using default");
            default
        }),
        None => default,
    }
}

impl Config {
    /// Parses configuration from a flat string map, e.g. `data-*`
    /// attributes of the dashboard's root element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use campusnav::{Config, Role};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("role".to_string(), "faculty".to_string());
    /// map.insert("swipe_threshold".to_string(), "90".to_string());
    /// map.insert("hide_delay_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.role, Role::Teacher);
    /// assert_eq!(config.swipe_threshold, 90.0);
    /// assert_eq!(config.hide_delay_ms, 150);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let d = Self::default();
        Self {
            role: parse_or(map, "role", d.role),
            mobile_breakpoint: parse_or(map, "mobile_breakpoint", d.mobile_breakpoint),
            swipe_threshold: parse_or(map, "swipe_threshold", d.swipe_threshold),
            vertical_tolerance: parse_or(map, "vertical_tolerance", d.vertical_tolerance),
            edge_swipe_zone: parse_or(map, "edge_swipe_zone", d.edge_swipe_zone),
            pull_threshold: parse_or(map, "pull_threshold", d.pull_threshold),
            pull_resistance: parse_or(map, "pull_resistance", d.pull_resistance),
            pull_max_offset: parse_or(map, "pull_max_offset", d.pull_max_offset),
            refresh_cooldown_ms: parse_or(map, "refresh_cooldown_ms", d.refresh_cooldown_ms),
            scroll_threshold: parse_or(map, "scroll_threshold", d.scroll_threshold),
            top_threshold: parse_or(map, "top_threshold", d.top_threshold),
            hide_delay_ms: parse_or(map, "hide_delay_ms", d.hide_delay_ms),
            menu_transition_ms: parse_or(map, "menu_transition_ms", d.menu_transition_ms),
            ticker_interval_ms: parse_or(map, "ticker_interval_ms", d.ticker_interval_ms),
            navbar_height: parse_or(map, "navbar_height", d.navbar_height),
            data_dir: map.get("data_dir").map(PathBuf::from),
            durable_storage: parse_or(map, "durable_storage", d.durable_storage),
            session_storage: parse_or(map, "session_storage", d.session_storage),
            charts: parse_or(map, "charts", d.charts),
            sample_data: parse_or(map, "sample_data", d.sample_data),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Config`] if the document is not valid TOML or a
    /// value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| NavError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Io`] if the file cannot be read and
    /// [`NavError::Config`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig {
            threshold: self.swipe_threshold,
            vertical_tolerance: self.vertical_tolerance,
        }
    }

    #[must_use]
    pub fn pull_config(&self) -> PullConfig {
        PullConfig {
            threshold: self.pull_threshold,
            resistance: self.pull_resistance,
            max_offset: self.pull_max_offset,
            cooldown_ms: self.refresh_cooldown_ms,
        }
    }

    #[must_use]
    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            threshold: self.scroll_threshold,
            top_threshold: self.top_threshold,
            hide_delay_ms: self.hide_delay_ms,
        }
    }

    /// Capabilities selected by the `charts` and `sample_data` switches.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::default();
        if self.charts {
            caps = caps.with_chart(AttendanceChart);
        }
        if self.sample_data {
            caps = caps.with_samples(StaticSamples);
        }
        caps
    }
}

/// Builds a controller from configuration and an already opened storage
/// chain, with the capabilities the configuration selects.
///
/// # Example
///
/// ```rust
/// use campusnav::storage::FallbackStorage;
/// use campusnav::{initialize, Config};
///
/// let nav = initialize(Config::default(), FallbackStorage::in_memory());
/// assert!(!nav.is_mounted());
/// ```
#[must_use]
pub fn initialize(config: Config, storage: FallbackStorage) -> NavigationController {
    tracing::debug!(role = %config.role, tiers = ?storage.tiers(), "initializing controller");
    let capabilities = config.capabilities();
    NavigationController::new(config, storage, capabilities)
}
