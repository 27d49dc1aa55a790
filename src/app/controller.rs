//! The navigation controller.
//!
//! One [`NavigationController`] drives one dashboard page. It owns every
//! collaborator (storage, view state, gesture recognizers, scroll monitor,
//! ticker, listener registry) and is driven through the methods below, each
//! of which returns the actions the host must run. Nothing here is global.
//!
//! # Lifecycle
//!
//! ```text
//! new ──▶ mount(inventory) ──▶ [events ...] ──▶ unmount
//!              │                                  │
//!              └─ addListener / fetch actions     └─ removeListener actions
//! ```
//!
//! A second `mount` disposes the first page's listeners before wiring the
//! new ones.
//!
//! # Missing DOM
//!
//! The page describes itself in a [`DomInventory`]. Operations that need a
//! container the page lacks are logged and skipped.

use serde::Deserialize;

use super::actions::{Action, TimerKind, ToastLevel};
use super::modes::MobileMenuState;
use super::resolve::{resolve, NavTarget};
use super::state::{ViewState, ViewStateStore};
use super::subscription::{ListenerRegistry, ListenerSpec, ListenerTarget, Subscription};
use crate::data::{parse_envelope, Capabilities, DataOutcome, DataRequest, DataSource, WidgetContent};
use crate::domain::error::NavError;
use crate::domain::{nav_item, Notice, ThemePreference, UserProfile};
use crate::gesture::{
    GestureEvent, GestureKind, PullRelease, PullToRefresh, PullUpdate, ScrollMetrics, SwipeRecognizer, TouchPoint,
};
use crate::scroll::{ChromeSignal, NoticeTicker, ScrollDirectionMonitor, ScrollSample};
use crate::storage::{keys, FallbackStorage};
use crate::ui::{ChromeViewModel, EmptyState, MenuEntry, UserBadge};
use crate::Config;

/// Page the unauthenticated are sent to.
pub const LOGIN_PAGE: &str = "login.html";

/// Which of the expected containers the page actually has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomInventory {
    /// `#nav-container`
    pub nav_container: bool,
    /// `.dashboard-main`
    pub dashboard_main: bool,
    /// At least one `.sidebar-nav-link`.
    pub sidebar_links: bool,
    /// `#hamburger`
    pub hamburger: bool,
    /// Ids of `main section[id]`, in document order.
    pub sections: Vec<String>,
}

impl DomInventory {
    /// A page with every container and the given sections.
    #[must_use]
    pub fn complete(sections: &[&str]) -> Self {
        Self {
            nav_container: true,
            dashboard_main: true,
            sidebar_links: true,
            hamburger: true,
            sections: sections.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug)]
struct Page {
    inventory: DomInventory,
    subscriptions: Vec<Subscription>,
}

/// Coordinates the dashboard chrome for one role.
#[derive(Debug)]
pub struct NavigationController {
    config: Config,
    storage: FallbackStorage,
    capabilities: Capabilities,
    store: ViewStateStore,
    swipe: SwipeRecognizer,
    pull: PullToRefresh,
    scroll: ScrollDirectionMonitor,
    ticker: NoticeTicker,
    listeners: ListenerRegistry,
    page: Option<Page>,
    user: Option<UserProfile>,
    authenticated: bool,
    theme: ThemePreference,
    body_locked: bool,
    rotation_pending: bool,
    needs_render: bool,
    /// Latest host wall-clock reading, Unix milliseconds.
    clock_ms: Option<u64>,
}

impl NavigationController {
    /// Builds an unmounted controller. Capabilities are fixed for its
    /// lifetime.
    #[must_use]
    pub fn new(config: Config, storage: FallbackStorage, capabilities: Capabilities) -> Self {
        let store = ViewStateStore::restore(
            config.role,
            &storage,
            config.mobile_breakpoint,
            config.mobile_breakpoint,
            config.menu_transition_ms > 0,
        );

        Self {
            swipe: SwipeRecognizer::new(config.swipe_config()),
            pull: PullToRefresh::new(config.pull_config()),
            scroll: ScrollDirectionMonitor::new(config.scroll_config()),
            ticker: NoticeTicker::new(config.ticker_interval_ms, config.navbar_height),
            listeners: ListenerRegistry::new(),
            page: None,
            user: None,
            authenticated: false,
            theme: ThemePreference::default(),
            body_locked: false,
            rotation_pending: false,
            needs_render: false,
            clock_ms: None,
            store,
            storage,
            capabilities,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn storage(&self) -> &FallbackStorage {
        &self.storage
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        self.store.state()
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    #[must_use]
    pub fn ticker(&self) -> &NoticeTicker {
        &self.ticker
    }

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.page.is_some()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn navbar_visible(&self) -> bool {
        self.scroll.is_visible()
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.pull.is_refreshing()
    }

    /// Records the host clock carried by an event. Readings never move it
    /// backwards.
    pub fn observe_clock(&mut self, now_ms: u64) {
        self.clock_ms = Some(self.clock_ms.map_or(now_ms, |seen| seen.max(now_ms)));
    }

    /// Current time in Unix seconds: the host clock once one was seen,
    /// otherwise the local wall clock.
    fn now_secs(&self) -> i64 {
        self.clock_ms.map_or_else(
            || chrono::Utc::now().timestamp(),
            |ms| i64::try_from(ms / 1_000).unwrap_or(i64::MAX),
        )
    }

    /// Returns and clears the "chrome changed" flag.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    fn inventory(&self) -> Option<&DomInventory> {
        self.page.as_ref().map(|p| &p.inventory)
    }

    fn has(&self, check: impl Fn(&DomInventory) -> bool) -> bool {
        self.inventory().is_some_and(check)
    }

    fn sections(&self) -> &[String] {
        self.inventory().map_or(&[], |inv| inv.sections.as_slice())
    }

    /// Attaches to a page.
    ///
    /// `path` is the page location including any `#fragment`; a fragment
    /// naming a section selects it.
    pub fn mount(&mut self, inventory: DomInventory, path: &str, width: f64, scroll: ScrollMetrics) -> Vec<Action> {
        let mut actions = self.release_page();
        let role = self.config.role;

        self.store = ViewStateStore::restore(
            role,
            &self.storage,
            width,
            self.config.mobile_breakpoint,
            self.config.menu_transition_ms > 0,
        );
        self.store.set_section_count(inventory.sections.len());

        let fragment = path.split_once('#').map(|(_, f)| f).filter(|f| !f.is_empty());
        if let Some(index) = fragment.and_then(|f| inventory.sections.iter().position(|s| s == f)) {
            self.store.set_active_section(index);
        }
        let route = fragment
            .and_then(nav_item::find)
            .filter(|item| item.is_visible_to(role))
            .map_or("dashboard", |item| item.id);
        self.store.set_route(route);

        self.theme = self
            .storage
            .get(keys::THEME)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        actions.push(Action::ApplyTheme { theme: self.theme });

        self.user = self.storage.get_json(keys::USER);
        self.authenticated = [keys::TOKEN, keys::ACCESS_TOKEN]
            .iter()
            .any(|key| self.storage.get(key).is_some_and(|token| !token.is_empty()));

        self.swipe.cancel();
        self.pull = PullToRefresh::new(self.config.pull_config());
        self.scroll.reset(scroll.scroll_y);
        self.ticker = NoticeTicker::new(self.config.ticker_interval_ms, self.config.navbar_height);
        self.rotation_pending = false;
        self.body_locked = false;
        self.needs_render = true;

        tracing::debug!(
            %role,
            path,
            width,
            sections = inventory.sections.len(),
            authenticated = self.authenticated,
            "mounting"
        );

        if !self.authenticated {
            tracing::info!("no session token, redirecting to login");
            self.page = Some(Page {
                inventory,
                subscriptions: Vec::new(),
            });
            actions.push(Action::NavigateTo {
                url: LOGIN_PAGE.to_string(),
            });
            return actions;
        }

        if let Some(user_role) = self.user.as_ref().map(|u| u.role).filter(|r| *r != role) {
            tracing::info!(%user_role, dashboard = %role, "user belongs on another dashboard");
            self.page = Some(Page {
                inventory,
                subscriptions: Vec::new(),
            });
            actions.push(Action::NavigateTo {
                url: user_role.dashboard_page(),
            });
            return actions;
        }

        let (subscriptions, wiring) = self.wire(&inventory);
        actions.extend(wiring);

        if inventory.hamburger {
            actions.push(Action::SetAriaExpanded { expanded: false });
        }
        actions.push(Action::PositionTicker {
            position: self.ticker.position(),
        });
        actions.extend(DataRequest::for_dashboard(role, self.user.as_ref()).into_iter().map(Action::fetch));

        self.page = Some(Page {
            inventory,
            subscriptions,
        });
        actions
    }

    /// Detaches from the page, removing every listener it registered.
    pub fn unmount(&mut self) -> Vec<Action> {
        let actions = self.release_page();
        self.swipe.cancel();
        self.pull.cancel();
        actions
    }

    fn release_page(&mut self) -> Vec<Action> {
        let Some(page) = self.page.take() else {
            return Vec::new();
        };

        let mut actions: Vec<Action> = page
            .subscriptions
            .into_iter()
            .flat_map(|sub| self.listeners.dispose(sub))
            .collect();
        if self.body_locked {
            self.body_locked = false;
            actions.push(Action::LockBodyScroll { locked: false });
        }
        actions
    }

    fn wire(&mut self, inventory: &DomInventory) -> (Vec<Subscription>, Vec<Action>) {
        let mut groups: Vec<(&'static str, Vec<ListenerSpec>)> = vec![(
            "viewport",
            vec![
                ListenerSpec::passive(ListenerTarget::Window, "resize"),
                ListenerSpec::passive(ListenerTarget::Window, "scroll"),
            ],
        )];
        groups.push(("keyboard", vec![ListenerSpec::active(ListenerTarget::Document, "keydown")]));

        if inventory.hamburger {
            groups.push(("hamburger", vec![ListenerSpec::active(ListenerTarget::Hamburger, "click")]));
        } else {
            tracing::debug!("no #hamburger, menu toggle not wired");
        }

        if inventory.nav_container {
            groups.push(("outside-click", vec![ListenerSpec::active(ListenerTarget::Document, "click")]));
        } else {
            tracing::debug!("no #nav-container, outside click not wired");
        }

        if inventory.sidebar_links {
            groups.push(("nav-links", vec![ListenerSpec::active(ListenerTarget::SidebarLinks, "click")]));
        }

        if inventory.dashboard_main {
            groups.push((
                "gestures",
                vec![
                    ListenerSpec::passive(ListenerTarget::DashboardMain, "touchstart"),
                    ListenerSpec::active(ListenerTarget::DashboardMain, "touchmove"),
                    ListenerSpec::passive(ListenerTarget::DashboardMain, "touchend"),
                    ListenerSpec::passive(ListenerTarget::DashboardMain, "touchcancel"),
                ],
            ));
        } else {
            tracing::debug!("no .dashboard-main, gestures not wired");
        }

        let mut subscriptions = Vec::with_capacity(groups.len());
        let mut actions = Vec::new();
        for (name, specs) in groups {
            let (sub, add) = self.listeners.register(name, &specs);
            subscriptions.push(sub);
            actions.extend(add);
        }
        (subscriptions, actions)
    }

    /// Mirrors a menu state change into aria and body-lock actions.
    fn after_menu_change(&mut self, before: MobileMenuState, actions: &mut Vec<Action>) {
        let state = self.store.state().menu;
        if state == before {
            return;
        }
        self.needs_render = true;

        let expanded = state.is_expanded();
        tracing::debug!(from = ?before, to = ?state, "mobile menu transition");
        if self.has(|inv| inv.hamburger) {
            actions.push(Action::SetAriaExpanded { expanded });
        }
        if expanded != self.body_locked {
            self.body_locked = expanded;
            actions.push(Action::LockBodyScroll { locked: expanded });
        }
    }

    /// Hamburger tap: toggles the menu on mobile and the sidebar on desktop.
    pub fn hamburger_tap(&mut self) -> Vec<Action> {
        if !self.has(|inv| inv.hamburger) {
            tracing::debug!("hamburger tap without #hamburger, ignoring");
            return Vec::new();
        }

        if self.store.is_mobile() {
            self.toggle_mobile_menu()
        } else {
            self.toggle_sidebar()
        }
    }

    pub fn toggle_sidebar(&mut self) -> Vec<Action> {
        let before = self.store.state().menu;
        let collapsed = self.store.toggle_sidebar(&mut self.storage);
        tracing::debug!(collapsed, "sidebar toggled");
        self.needs_render = true;

        let mut actions = Vec::new();
        self.after_menu_change(before, &mut actions);
        actions
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<Action> {
        let before = self.store.state().menu;
        self.store.toggle_mobile_menu(&mut self.storage);
        let mut actions = Vec::new();
        self.after_menu_change(before, &mut actions);
        actions
    }

    fn open_menu(&mut self) -> Vec<Action> {
        let before = self.store.state().menu;
        self.store.open_mobile_menu(&mut self.storage);
        let mut actions = Vec::new();
        self.after_menu_change(before, &mut actions);
        actions
    }

    fn close_menu(&mut self, reason: &'static str) -> Vec<Action> {
        let before = self.store.state().menu;
        if !before.is_expanded() {
            return Vec::new();
        }
        tracing::debug!(reason, "closing mobile menu");
        self.store.close_mobile_menu();
        let mut actions = Vec::new();
        self.after_menu_change(before, &mut actions);
        actions
    }

    /// Click that landed outside `#nav-container`.
    pub fn outside_click(&mut self) -> Vec<Action> {
        if !self.has(|inv| inv.nav_container) {
            return Vec::new();
        }
        self.close_menu("outside click")
    }

    pub fn key_press(&mut self, key: &str) -> Vec<Action> {
        if key == "Escape" {
            self.close_menu("escape")
        } else {
            Vec::new()
        }
    }

    /// The menu's CSS transition finished.
    pub fn transition_end(&mut self) -> Vec<Action> {
        let before = self.store.state().menu;
        self.store.finish_transition();
        let mut actions = Vec::new();
        self.after_menu_change(before, &mut actions);
        actions
    }

    pub fn resize(&mut self, width: f64) -> Vec<Action> {
        let before = self.store.state().menu;
        let mut actions = Vec::new();
        if self.store.on_resize(width).is_some() {
            self.needs_render = true;
            self.after_menu_change(before, &mut actions);
        }
        actions
    }

    /// A sidebar or bottom-nav link was chosen.
    pub fn select_nav_item(&mut self, id: &str) -> Vec<Action> {
        let role = self.config.role;
        let Some(item) = nav_item::find(id).filter(|item| item.is_visible_to(role)) else {
            tracing::debug!(id, %role, "unknown or hidden nav item, ignoring");
            return Vec::new();
        };
        if !self.authenticated {
            return Vec::new();
        }

        let mut actions = Vec::new();
        self.store.set_route(item.id);
        self.needs_render = true;

        if self.store.is_mobile() {
            actions.push(Action::DispatchEvent {
                name: "mobileNavChange",
                detail: Some(serde_json::json!({ "route": item.id })),
            });
        }
        actions.extend(self.close_menu("nav selection"));

        match resolve(item.href, role, self.sections()) {
            NavTarget::Section { id, index } => {
                self.store.set_active_section(index);
                actions.push(Action::ScrollToSection { id, index });
            }
            NavTarget::Page { url } => actions.push(Action::NavigateTo { url }),
        }
        actions
    }

    pub fn toggle_theme(&mut self) -> Vec<Action> {
        self.theme = self.theme.toggled();
        self.storage.set(keys::THEME, self.theme.as_str());
        self.needs_render = true;
        vec![Action::ApplyTheme { theme: self.theme }]
    }

    pub fn touch_start(&mut self, point: TouchPoint, metrics: ScrollMetrics) -> Vec<Action> {
        if !self.has(|inv| inv.dashboard_main) {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.pull.cancel() {
            actions.push(Action::ResetPullIndicator { animate: false });
        }
        self.swipe.touch_start(point);
        self.pull.touch_start(point, metrics);
        actions
    }

    pub fn touch_move(&mut self, point: TouchPoint) -> Vec<Action> {
        match self.pull.touch_move(point) {
            PullUpdate::Ignored => Vec::new(),
            PullUpdate::Cancelled => vec![Action::ResetPullIndicator { animate: true }],
            PullUpdate::Moved {
                offset,
                ready,
                prevent_default,
            } => {
                let mut actions = Vec::with_capacity(2);
                if prevent_default {
                    actions.push(Action::PreventDefault);
                }
                actions.push(Action::SetPullIndicator {
                    offset,
                    ready,
                    refreshing: false,
                });
                actions
            }
        }
    }

    pub fn touch_end(&mut self, point: TouchPoint) -> Vec<Action> {
        let mut actions = Vec::new();

        match self.pull.touch_end(point) {
            PullRelease::None => {}
            PullRelease::SnapBack => actions.push(Action::ResetPullIndicator { animate: true }),
            PullRelease::Refresh(gesture) => {
                tracing::info!(elapsed_ms = gesture.elapsed_ms, "pull to refresh");
                actions.push(Action::SetPullIndicator {
                    offset: self.pull.config().ready_offset(),
                    ready: true,
                    refreshing: true,
                });
                actions.push(Action::Refresh);
                actions.extend(
                    DataRequest::for_dashboard(self.config.role, self.user.as_ref())
                        .into_iter()
                        .map(Action::fetch),
                );
            }
        }

        if let Some(gesture) = self.swipe.touch_end(point) {
            actions.extend(self.apply_swipe(gesture));
        }
        actions
    }

    pub fn touch_cancel(&mut self) -> Vec<Action> {
        self.swipe.cancel();
        if self.pull.cancel() {
            vec![Action::ResetPullIndicator { animate: true }]
        } else {
            Vec::new()
        }
    }

    /// Reacts to a recognized swipe.
    ///
    /// An open menu closes on a left swipe. A right swipe from the left edge
    /// on mobile opens it. Otherwise swipes step through the page sections.
    pub fn apply_swipe(&mut self, gesture: GestureEvent) -> Vec<Action> {
        let menu = self.store.state().menu;

        if menu.is_expanded() {
            return match gesture.kind {
                GestureKind::SwipeLeft => self.close_menu("left swipe"),
                _ => Vec::new(),
            };
        }

        let from_edge = gesture.start_x <= self.config.edge_swipe_zone;
        let step = match gesture.kind {
            GestureKind::SwipeRight if from_edge && self.store.is_mobile() => return self.open_menu(),
            GestureKind::SwipeLeft => 1,
            GestureKind::SwipeRight => -1,
            GestureKind::PullRefresh => return Vec::new(),
        };

        let Some(index) = self.store.step_section(step) else {
            return Vec::new();
        };
        let Some(id) = self.sections().get(index).cloned() else {
            return Vec::new();
        };
        self.needs_render = true;
        tracing::debug!(index, %id, "section changed by swipe");
        vec![Action::ScrollToSection { id, index }]
    }

    pub fn refresh_completed(&mut self, now_ms: u64) -> Vec<Action> {
        if !self.pull.is_refreshing() {
            return Vec::new();
        }
        self.pull.complete(now_ms);
        vec![Action::ResetPullIndicator { animate: true }]
    }

    pub fn scroll(&mut self, sample: ScrollSample) -> Vec<Action> {
        if self.scroll.on_scroll(sample) {
            vec![Action::RequestAnimationFrame]
        } else {
            Vec::new()
        }
    }

    pub fn animation_frame(&mut self, now_ms: u64) -> Vec<Action> {
        let outcome = self.scroll.on_frame(now_ms);
        let mut actions = Vec::new();
        if let Some(at) = outcome.hide_at_ms {
            actions.push(Action::ScheduleTimer {
                timer: TimerKind::NavbarHide,
                delay_ms: at.saturating_sub(now_ms),
            });
        }
        if let Some(signal) = outcome.signal {
            actions.extend(self.apply_chrome_signal(signal));
        }
        actions
    }

    pub fn timer_fired(&mut self, timer: TimerKind, now_ms: u64) -> Vec<Action> {
        match timer {
            TimerKind::NavbarHide => self
                .scroll
                .on_timer(now_ms)
                .map(|signal| self.apply_chrome_signal(signal))
                .unwrap_or_default(),
            TimerKind::TickerRotate => {
                self.rotation_pending = false;
                let Some((index, delay_ms)) = self.ticker.rotate() else {
                    return Vec::new();
                };
                let mut actions = self.show_current_notice(index);
                actions.push(self.schedule_rotation(delay_ms));
                actions
            }
        }
    }

    fn apply_chrome_signal(&mut self, signal: ChromeSignal) -> Vec<Action> {
        self.needs_render = true;
        let mut actions = vec![Action::dispatch(signal.event_name())];
        if let Some(position) = self.ticker.on_chrome_signal(signal) {
            actions.push(Action::PositionTicker { position });
        }
        actions
    }

    fn schedule_rotation(&mut self, delay_ms: u64) -> Action {
        self.rotation_pending = true;
        Action::ScheduleTimer {
            timer: TimerKind::TickerRotate,
            delay_ms,
        }
    }

    fn show_current_notice(&self, index: usize) -> Vec<Action> {
        self.ticker
            .current()
            .map(|notice| Action::ShowNotice {
                index,
                age: notice.age_label(self.now_secs()),
                notice: notice.clone(),
            })
            .into_iter()
            .collect()
    }

    /// Replaces the ticker's notices.
    pub fn load_notices(&mut self, notices: Vec<Notice>) -> Vec<Action> {
        let delay = self.ticker.set_notices(notices);
        let mut actions = self.show_current_notice(0);
        if let Some(delay_ms) = delay {
            if !self.rotation_pending {
                actions.push(self.schedule_rotation(delay_ms));
            }
        }
        actions
    }

    /// Handles the host's answer to a `fetch` action.
    pub fn data_loaded(&mut self, request: &DataRequest, outcome: &DataOutcome) -> Vec<Action> {
        let result = match outcome {
            DataOutcome::Body { body } => parse_envelope(body),
            DataOutcome::Failed { error } => Err(NavError::Unavailable(error.clone())),
        };

        match (request, result) {
            (DataRequest::Announcements, Ok(data)) => match serde_json::from_value::<Vec<Notice>>(data) {
                Ok(notices) => self.load_notices(notices),
                Err(e) => {
                    tracing::warn!(error = %e, "announcements payload malformed");
                    Vec::new()
                }
            },
            (DataRequest::Announcements, Err(e)) => {
                tracing::warn!(error = %e, "announcements unavailable, ticker stays empty");
                Vec::new()
            }
            (request, Ok(data)) => vec![Action::RenderWidget {
                widget: request.widget(),
                content: self.widget_content(request, data, DataSource::Live),
            }],
            (request, Err(e)) => {
                tracing::warn!(endpoint = %request.endpoint(), error = %e, "widget data unavailable");
                let content = self
                    .capabilities
                    .samples()
                    .and_then(|provider| provider.sample(request))
                    .map_or_else(
                        || WidgetContent::Placeholder {
                            message: request.placeholder().to_string(),
                        },
                        |data| self.widget_content(request, data, DataSource::Sample),
                    );
                vec![
                    Action::Toast {
                        level: ToastLevel::Warning,
                        message: request.failure_message().to_string(),
                    },
                    Action::RenderWidget {
                        widget: request.widget(),
                        content,
                    },
                ]
            }
        }
    }

    fn widget_content(&self, request: &DataRequest, data: serde_json::Value, source: DataSource) -> WidgetContent {
        let empty = match &data {
            serde_json::Value::Null => true,
            serde_json::Value::Array(rows) => rows.is_empty(),
            _ => false,
        };
        if empty {
            return WidgetContent::Placeholder {
                message: request.placeholder().to_string(),
            };
        }

        match self.capabilities.chart().and_then(|chart| chart.chart(request, &data)) {
            Some(spec) => WidgetContent::Chart { source, spec },
            None => WidgetContent::Table { source, data },
        }
    }

    /// Builds the chrome view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ChromeViewModel {
        let role = self.config.role;
        let state = self.store.state();

        let (menu, bottom_nav, empty_state) = if self.authenticated {
            let menu = nav_item::menu_for(role);
            let bottom = nav_item::bottom_nav_for(role);
            (
                MenuEntry::list(&menu, &state.current_route),
                MenuEntry::list(&bottom, &state.current_route),
                None,
            )
        } else {
            (
                Vec::new(),
                Vec::new(),
                Some(EmptyState {
                    message: "Not signed in".to_string(),
                    subtitle: "Redirecting to the login page".to_string(),
                }),
            )
        };

        ChromeViewModel {
            role,
            user: self.user.as_ref().map(UserBadge::from),
            menu,
            bottom_nav,
            sidebar_collapsed: state.sidebar_collapsed,
            mobile_menu_open: state.mobile_menu_open(),
            menu_state: state.menu,
            viewport: state.viewport,
            active_section: self.sections().get(state.active_section_index).cloned(),
            current_route: state.current_route.clone(),
            theme: self.theme,
            navbar_visible: self.scroll.is_visible(),
            empty_state,
        }
    }
}
