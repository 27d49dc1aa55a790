//! Domain layer: roles, menus, users, notices and errors.
//!
//! These types carry no host or storage concerns. The application layer
//! builds on them; nothing here depends on the application layer.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`role`]: Dashboard roles and their persisted keys
//! - [`nav_item`]: Static menu catalog with role visibility
//! - [`user`]: Signed-in user profile
//! - [`notice`]: Ticker announcements
//! - [`preferences`]: Theme preference

pub mod error;
pub mod nav_item;
pub mod notice;
pub mod preferences;
pub mod role;
pub mod user;

pub use error::{NavError, Result};
pub use nav_item::NavItem;
pub use notice::{Notice, Priority};
pub use preferences::ThemePreference;
pub use role::Role;
pub use user::UserProfile;
