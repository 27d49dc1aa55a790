//! Persisted key names shared with the rest of the dashboard.
//!
//! Sidebar keys are per role, see [`Role::sidebar_key`](crate::domain::Role::sidebar_key).

/// Color scheme, `"dark"` or `"light"`.
pub const THEME: &str = "theme";

/// JSON-encoded [`UserProfile`](crate::domain::UserProfile).
pub const USER: &str = "user";

/// Opaque auth token written by the login flow.
pub const TOKEN: &str = "token";

/// Alternate token key used by the newer login endpoint.
pub const ACCESS_TOKEN: &str = "accessToken";
