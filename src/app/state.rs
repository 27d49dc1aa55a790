//! View state and its store.
//!
//! [`ViewStateStore`] owns the [`ViewState`] of one mounted dashboard and is
//! mutated only by the navigation controller. Of all the fields, only the
//! sidebar collapsed flag is persisted, under the role's key, and it is
//! written on every change.
//!
//! On mobile viewports the sidebar cannot be collapsed while the slide-out
//! menu is open: opening the menu expands the sidebar and collapsing the
//! sidebar closes the menu.

use serde::Serialize;

use super::modes::{MobileMenuState, ViewportClass};
use crate::domain::Role;
use crate::storage::FallbackStorage;

/// Snapshot of the dashboard chrome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub current_route: String,
    pub sidebar_collapsed: bool,
    pub menu: MobileMenuState,
    pub active_section_index: usize,
    pub section_count: usize,
    pub viewport: ViewportClass,
}

impl ViewState {
    #[must_use]
    pub fn mobile_menu_open(&self) -> bool {
        self.menu.is_expanded()
    }
}

/// Owner of [`ViewState`] with persistence of the collapsed flag.
#[derive(Debug, Clone)]
pub struct ViewStateStore {
    role: Role,
    breakpoint: f64,
    /// Whether menu changes pass through `Opening`/`Closing`.
    animated: bool,
    state: ViewState,
}

impl ViewStateStore {
    /// Builds the store for a freshly mounted page.
    ///
    /// The collapsed flag is restored from `storage`; anything else comes
    /// from the page.
    #[must_use]
    pub fn restore(
        role: Role,
        storage: &FallbackStorage,
        width: f64,
        breakpoint: f64,
        animated: bool,
    ) -> Self {
        let sidebar_collapsed = storage.get_bool(role.sidebar_key()).unwrap_or(false);
        tracing::debug!(%role, sidebar_collapsed, width, "view state restored");

        Self {
            role,
            breakpoint,
            animated,
            state: ViewState {
                current_route: "dashboard".to_string(),
                sidebar_collapsed,
                menu: MobileMenuState::Closed,
                active_section_index: 0,
                section_count: 0,
                viewport: ViewportClass::from_width(width, breakpoint),
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.state.viewport.is_mobile()
    }

    pub fn set_route(&mut self, route_id: impl Into<String>) {
        self.state.current_route = route_id.into();
    }

    /// Sets how many sections the page has, re-clamping the active index.
    pub fn set_section_count(&mut self, count: usize) {
        self.state.section_count = count;
        self.set_active_section(self.state.active_section_index);
    }

    /// Selects a section, clamped to `[0, section_count - 1]`. Returns the
    /// index actually stored.
    pub fn set_active_section(&mut self, index: usize) -> usize {
        let clamped = index.min(self.state.section_count.saturating_sub(1));
        self.state.active_section_index = clamped;
        clamped
    }

    /// Moves the active section by `step`. Returns the new index if it
    /// changed.
    pub fn step_section(&mut self, step: isize) -> Option<usize> {
        if self.state.section_count == 0 {
            return None;
        }
        let current = self.state.active_section_index;
        let target = current.saturating_add_signed(step);
        let stored = self.set_active_section(target);
        (stored != current).then_some(stored)
    }

    /// Flips the collapsed flag and persists it. Returns the new value.
    ///
    /// Collapsing on mobile closes an open menu first.
    pub fn toggle_sidebar(&mut self, storage: &mut FallbackStorage) -> bool {
        let collapsed = !self.state.sidebar_collapsed;
        if collapsed && self.is_mobile() && self.state.menu.is_expanded() {
            self.state.menu = self.state.menu.closed(self.animated);
        }
        self.write_collapsed(storage, collapsed);
        collapsed
    }

    /// Opens or closes the mobile menu. Returns the new open state.
    pub fn toggle_mobile_menu(&mut self, storage: &mut FallbackStorage) -> bool {
        if self.state.menu.is_expanded() {
            self.close_mobile_menu();
        } else {
            self.open_mobile_menu(storage);
        }
        self.state.mobile_menu_open()
    }

    /// Requests the menu open. Returns whether the state changed.
    pub fn open_mobile_menu(&mut self, storage: &mut FallbackStorage) -> bool {
        let next = self.state.menu.opened(self.animated);
        if next == self.state.menu {
            return false;
        }
        self.state.menu = next;
        if self.is_mobile() && self.state.sidebar_collapsed {
            self.write_collapsed(storage, false);
        }
        true
    }

    /// Requests the menu closed. Returns whether the state changed.
    pub fn close_mobile_menu(&mut self) -> bool {
        let next = self.state.menu.closed(self.animated);
        let changed = next != self.state.menu;
        self.state.menu = next;
        changed
    }

    /// Completes the running menu transition. Returns whether anything
    /// changed.
    pub fn finish_transition(&mut self) -> bool {
        let next = self.state.menu.settled();
        let changed = next != self.state.menu;
        self.state.menu = next;
        changed
    }

    /// Re-evaluates the viewport class. Returns the new class if it changed.
    ///
    /// Leaving mobile closes the menu without animation; entering mobile
    /// keeps the collapsed flag as it was.
    pub fn on_resize(&mut self, width: f64) -> Option<ViewportClass> {
        let class = ViewportClass::from_width(width, self.breakpoint);
        if class == self.state.viewport {
            return None;
        }
        self.state.viewport = class;
        if !class.is_mobile() && self.state.menu != MobileMenuState::Closed {
            self.state.menu = MobileMenuState::Closed;
        }
        tracing::debug!(?class, width, "viewport class changed");
        Some(class)
    }

    fn write_collapsed(&mut self, storage: &mut FallbackStorage, collapsed: bool) {
        self.state.sidebar_collapsed = collapsed;
        storage.set_bool(self.role.sidebar_key(), collapsed);
    }
}
