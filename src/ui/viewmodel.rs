//! View model types for the dashboard chrome.
//!
//! View models are computed by `NavigationController::compute_viewmodel()`
//! and shipped to the host in a `renderChrome` action. They contain no
//! behavior, only display-ready data.

use serde::Serialize;

use crate::app::{MobileMenuState, ViewportClass};
use crate::domain::{NavItem, Role, ThemePreference, UserProfile};

/// Everything the host needs to draw sidebar, bottom nav and navbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeViewModel {
    pub role: Role,

    /// Avatar badge; `None` when no profile is stored.
    pub user: Option<UserBadge>,

    /// Sidebar (desktop) and slide-out menu (mobile) entries.
    pub menu: Vec<MenuEntry>,

    /// Mobile bottom navigation entries.
    pub bottom_nav: Vec<MenuEntry>,

    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
    pub menu_state: MobileMenuState,
    pub viewport: ViewportClass,

    /// Id of the highlighted `main section`, if the page has sections.
    pub active_section: Option<String>,

    pub current_route: String,
    pub theme: ThemePreference,
    pub navbar_visible: bool,

    /// Shown in place of the menu when it is empty.
    pub empty_state: Option<EmptyState>,
}

/// One rendered menu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub is_active: bool,
}

impl MenuEntry {
    /// Builds entries for `items`, marking the one whose id is `active`.
    #[must_use]
    pub fn list(items: &[&NavItem], active: &str) -> Vec<Self> {
        items
            .iter()
            .map(|item| Self {
                id: item.id,
                label: item.label,
                icon: item.icon,
                href: item.href,
                is_active: item.id == active,
            })
            .collect()
    }
}

/// Navbar avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    pub name: String,
    pub initials: String,
    pub department: Option<String>,
}

impl From<&UserProfile> for UserBadge {
    fn from(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            initials: user.initials(),
            department: user.department.clone(),
        }
    }
}

/// Placeholder message for an empty menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nav_item;

    #[test]
    fn marks_only_the_active_entry() {
        let items = nav_item::menu_for(Role::Student);
        let entries = MenuEntry::list(&items, "marks");
        assert_eq!(entries.iter().filter(|e| e.is_active).count(), 1);
        assert!(entries.iter().any(|e| e.id == "marks" && e.is_active));
    }
}
