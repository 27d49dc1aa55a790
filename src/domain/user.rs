//! The signed-in user as stored under the `user` key.
//!
//! The auth module owns the token and the profile; the navigation controller
//! only reads them to pick a menu and draw the avatar badge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::role::Role;

/// Profile written by the login flow.
///
/// Fields the controller does not use are kept in `extra` so a read/modify/
/// write cycle never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            department: None,
            extra: BTreeMap::new(),
        }
    }

    /// Up to two uppercase initials for the avatar badge.
    ///
    /// Uses the first letter of the first and last words; a single word
    /// yields one letter and an empty name yields `"?"`.
    ///
    /// ```
    /// use campusnav::domain::{Role, UserProfile};
    ///
    /// assert_eq!(UserProfile::new("ada king lovelace", Role::Student).initials(), "AL");
    /// assert_eq!(UserProfile::new("Plato", Role::Teacher).initials(), "P");
    /// assert_eq!(UserProfile::new("  ", Role::Admin).initials(), "?");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let Some(first) = words.next() else {
            return "?".to_string();
        };
        let last = words.last();

        [Some(first), last]
            .into_iter()
            .flatten()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Student identifier used by the attendance endpoint, if the login flow
    /// stored one (`id`, `_id` or `studentId`).
    #[must_use]
    pub fn record_id(&self) -> Option<String> {
        ["id", "_id", "studentId"]
            .iter()
            .find_map(|key| self.extra.get(*key))
            .and_then(|value| match value {
                serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}
