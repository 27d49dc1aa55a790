//! Chrome view models handed to the host for rendering.
//!
//! The crate draws nothing itself. The host turns a [`ChromeViewModel`]
//! into sidebar, bottom navigation and navbar markup.

pub mod viewmodel;

pub use viewmodel::{ChromeViewModel, EmptyState, MenuEntry, UserBadge};
