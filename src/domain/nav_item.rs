//! Static navigation menu definitions.
//!
//! Every dashboard draws its sidebar and bottom navigation from one shared
//! catalog; each entry declares which roles may see it. Entries are
//! `'static` and never change at runtime.

use serde::Serialize;

use super::role::Role;

/// Maximum number of entries shown in the mobile bottom navigation bar.
pub const BOTTOM_NAV_SLOTS: usize = 5;

/// One entry in the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Stable identifier, also used as the route id.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Icon class name understood by the host stylesheet.
    pub icon: &'static str,
    /// Either an in-page anchor (`#attendance`) or a page URL.
    pub href: &'static str,
    /// Roles allowed to see this entry.
    #[serde(rename = "roleVisibility")]
    pub role_visibility: &'static [Role],
}

impl NavItem {
    /// Returns the anchor name if `href` addresses an in-page section.
    ///
    /// ```
    /// use campusnav::domain::nav_item::find;
    ///
    /// assert_eq!(find("attendance").unwrap().anchor(), Some("attendance"));
    /// assert_eq!(find("profile").unwrap().anchor(), None);
    /// ```
    #[must_use]
    pub fn anchor(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|a| !a.is_empty())
    }

    #[must_use]
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.role_visibility.contains(&role)
    }
}

const ALL: &[Role] = &[Role::Student, Role::Teacher, Role::Admin];
const ACADEMIC: &[Role] = &[Role::Student, Role::Teacher];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

static CATALOG: [NavItem; 11] = [
    NavItem { id: "dashboard", label: "Dashboard", icon: "fa-home", href: "#dashboard", role_visibility: ALL },
    NavItem { id: "attendance", label: "Attendance", icon: "fa-calendar-check", href: "#attendance", role_visibility: ACADEMIC },
    NavItem { id: "marks", label: "Marks", icon: "fa-chart-line", href: "#marks", role_visibility: ACADEMIC },
    NavItem { id: "assignments", label: "Assignments", icon: "fa-tasks", href: "#assignments", role_visibility: ACADEMIC },
    NavItem { id: "announcements", label: "Announcements", icon: "fa-bullhorn", href: "#announcements", role_visibility: ALL },
    NavItem { id: "files", label: "Files", icon: "fa-folder-open", href: "#files", role_visibility: ACADEMIC },
    NavItem { id: "users", label: "Users", icon: "fa-users", href: "#users", role_visibility: ADMIN_ONLY },
    NavItem { id: "approvals", label: "Approvals", icon: "fa-user-check", href: "#approvals", role_visibility: ADMIN_ONLY },
    NavItem { id: "departments", label: "Departments", icon: "fa-building", href: "#departments", role_visibility: ADMIN_ONLY },
    NavItem { id: "reports", label: "Reports", icon: "fa-file-alt", href: "#reports", role_visibility: ADMIN_ONLY },
    NavItem { id: "profile", label: "Profile", icon: "fa-user", href: "profile.html", role_visibility: ALL },
];

/// Looks up an entry by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static NavItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Sidebar entries visible to `role`, in catalog order.
#[must_use]
pub fn menu_for(role: Role) -> Vec<&'static NavItem> {
    CATALOG.iter().filter(|item| item.is_visible_to(role)).collect()
}

/// Bottom navigation entries for `role`: the first [`BOTTOM_NAV_SLOTS`]
/// visible entries.
#[must_use]
pub fn bottom_nav_for(role: Role) -> Vec<&'static NavItem> {
    menu_for(role).into_iter().take(BOTTOM_NAV_SLOTS).collect()
}
