//! Announcement notices shown in the ticker.

use serde::{Deserialize, Serialize};

/// Age units from largest to smallest, in seconds.
const AGE_UNITS: [(i64, &str); 3] = [(86_400, "d"), (3_600, "h"), (60, "m")];

/// How prominently a notice is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Important,
    Urgent,
}

/// A single announcement.
///
/// `posted_at` is a Unix timestamp in seconds, as returned by the
/// announcements endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub posted_at: i64,
    #[serde(default)]
    pub priority: Priority,
}

impl Notice {
    /// Creates a normal-priority notice posted now.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            posted_at: chrono::Utc::now().timestamp(),
            priority: Priority::Normal,
        }
    }

    /// Relative age relative to `now` (Unix seconds).
    ///
    /// - under a minute (or in the future): "just now"
    /// - under an hour: "Xm ago"
    /// - under a day: "Xh ago"
    /// - otherwise: "Xd ago"
    ///
    /// ```
    /// use campusnav::domain::Notice;
    ///
    /// let mut notice = Notice::new("n1", "Exam schedule published");
    /// notice.posted_at = 1_000_000;
    /// assert_eq!(notice.age_label(1_000_030), "just now");
    /// assert_eq!(notice.age_label(1_000_000 + 300), "5m ago");
    /// assert_eq!(notice.age_label(1_000_000 + 3 * 3600), "3h ago");
    /// assert_eq!(notice.age_label(1_000_000 + 7 * 86400), "7d ago");
    /// assert_eq!(notice.age_label(1_000_000 - 120), "just now");
    /// ```
    #[must_use]
    pub fn age_label(&self, now: i64) -> String {
        let elapsed = now.saturating_sub(self.posted_at);
        AGE_UNITS
            .iter()
            .find(|(unit, _)| elapsed >= *unit)
            .map_or_else(|| "just now".to_string(), |(unit, suffix)| format!("{}{suffix} ago", elapsed / unit))
    }
}
