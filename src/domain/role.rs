//! Dashboard roles.
//!
//! Each role owns a dashboard with its own menu, its own per-role pages and
//! its own persisted sidebar preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::NavError;

/// The three dashboard audiences.
///
/// Deserializes through [`FromStr`], so stored profiles and config files
/// accept the same aliases as the flat config map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// All roles in menu-declaration order.
    pub const ALL: [Self; 3] = [Self::Student, Self::Teacher, Self::Admin];

    /// Storage key holding this role's sidebar collapsed flag.
    ///
    /// The student dashboard predates the others and kept the unprefixed key.
    ///
    /// ```
    /// use campusnav::domain::Role;
    ///
    /// assert_eq!(Role::Admin.sidebar_key(), "adminSidebarCollapsed");
    /// assert_eq!(Role::Student.sidebar_key(), "sidebarCollapsed");
    /// ```
    #[must_use]
    pub const fn sidebar_key(self) -> &'static str {
        match self {
            Self::Student => "sidebarCollapsed",
            Self::Teacher => "teacherSidebarCollapsed",
            Self::Admin => "adminSidebarCollapsed",
        }
    }

    /// Lowercase identifier used in page names (`student-attendance.html`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Landing page of this role's dashboard.
    #[must_use]
    pub fn dashboard_page(self) -> String {
        format!("{}-dashboard.html", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" | "faculty" => Ok(Self::Teacher),
            "admin" | "administrator" => Ok(Self::Admin),
            other => Err(NavError::Config(format!("unknown role: {other}"))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = NavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_keys_are_distinct_per_role() {
        let keys: std::collections::HashSet<_> =
            Role::ALL.iter().map(|r| r.sidebar_key()).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("Faculty".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(" ADMIN ".parse::<Role>().unwrap(), Role::Admin);
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn deserializes_aliases_like_from_str() {
        assert_eq!(serde_json::from_str::<Role>("\"Faculty\"").unwrap(), Role::Teacher);
        assert_eq!(serde_json::from_str::<Role>("\"Administrator\"").unwrap(), Role::Admin);
        assert!(serde_json::from_str::<Role>("\"janitor\"").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
    }
}
