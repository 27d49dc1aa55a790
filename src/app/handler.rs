//! Host events and their dispatch.
//!
//! The host translates DOM and network callbacks into [`Event`]s and feeds
//! them to [`handle_event`], which routes each to the controller and returns
//! whether the chrome must be re-rendered together with the actions to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Unmount`
//! - **Viewport**: `Resize`, `Scroll`, `AnimationFrame`
//! - **Menu**: `HamburgerTap`, `OutsideClick`, `KeyPress`, `TransitionEnd`,
//!   `NavItemSelected`
//! - **Touch**: `TouchStart`, `TouchMove`, `TouchEnd`, `TouchCancel`
//! - **Async answers**: `TimerFired`, `RefreshCompleted`, `DataLoaded`
//! - **Preferences**: `ThemeToggle`
//!
//! Every time field (`nowMs`, `timestampMs`, `timeMs`) is host wall-clock
//! time in Unix milliseconds (`Date.now()`).

use serde::Deserialize;

use super::actions::{Action, TimerKind};
use super::controller::{DomInventory, NavigationController};
use crate::data::{DataOutcome, DataRequest};
use crate::domain::error::{NavError, Result};
use crate::gesture::{ScrollMetrics, TouchPoint};
use crate::scroll::ScrollSample;

/// Something that happened on the page.
///
/// On the wire each event is a JSON object tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// The dashboard finished loading.
    Mount {
        #[serde(default)]
        inventory: DomInventory,
        #[serde(default)]
        path: String,
        width: f64,
        #[serde(default)]
        scroll: ScrollMetrics,
    },
    Unmount,

    Resize { width: f64 },

    /// Passive `scroll` on `window`.
    #[serde(rename_all = "camelCase")]
    Scroll { scroll_y: f64, timestamp_ms: u64 },

    /// Answer to `requestAnimationFrame`.
    #[serde(rename_all = "camelCase")]
    AnimationFrame { now_ms: u64 },

    HamburgerTap,

    /// Click outside `#nav-container`.
    OutsideClick,

    /// `keydown` on `document`; `key` is `KeyboardEvent.key`.
    KeyPress { key: String },

    /// `transitionend` on the mobile menu.
    TransitionEnd,

    /// Sidebar or bottom-nav link clicked.
    NavItemSelected { id: String },

    TouchStart {
        point: TouchPoint,
        #[serde(default)]
        scroll: ScrollMetrics,
    },
    TouchMove { point: TouchPoint },
    TouchEnd { point: TouchPoint },
    TouchCancel,

    /// A scheduled timer elapsed.
    #[serde(rename_all = "camelCase")]
    TimerFired { timer: TimerKind, now_ms: u64 },

    /// The host finished the refresh started by a `refresh` action.
    #[serde(rename_all = "camelCase")]
    RefreshCompleted { now_ms: u64 },

    /// Answer to a `fetch` action.
    #[serde(rename_all = "camelCase")]
    DataLoaded {
        request: DataRequest,
        outcome: DataOutcome,
        #[serde(default)]
        now_ms: Option<u64>,
    },

    ThemeToggle,
}

impl Event {
    /// Short name for logs and spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mount { .. } => "mount",
            Self::Unmount => "unmount",
            Self::Resize { .. } => "resize",
            Self::Scroll { .. } => "scroll",
            Self::AnimationFrame { .. } => "animationFrame",
            Self::HamburgerTap => "hamburgerTap",
            Self::OutsideClick => "outsideClick",
            Self::KeyPress { .. } => "keyPress",
            Self::TransitionEnd => "transitionEnd",
            Self::NavItemSelected { .. } => "navItemSelected",
            Self::TouchStart { .. } => "touchStart",
            Self::TouchMove { .. } => "touchMove",
            Self::TouchEnd { .. } => "touchEnd",
            Self::TouchCancel => "touchCancel",
            Self::TimerFired { .. } => "timerFired",
            Self::RefreshCompleted { .. } => "refreshCompleted",
            Self::DataLoaded { .. } => "dataLoaded",
            Self::ThemeToggle => "themeToggle",
        }
    }

    /// Host clock reading carried by the event, if any.
    #[must_use]
    pub const fn host_time_ms(&self) -> Option<u64> {
        match self {
            Self::Scroll { timestamp_ms, .. } => Some(*timestamp_ms),
            Self::AnimationFrame { now_ms } | Self::TimerFired { now_ms, .. } | Self::RefreshCompleted { now_ms } => {
                Some(*now_ms)
            }
            Self::TouchStart { point, .. } | Self::TouchMove { point } | Self::TouchEnd { point } => Some(point.time_ms),
            Self::DataLoaded { now_ms, .. } => *now_ms,
            _ => None,
        }
    }
}

/// Routes `event` to the controller.
///
/// Returns `(should_render, actions)`. When `should_render` is set the host
/// redraws the chrome from `NavigationController::compute_viewmodel()`.
///
/// # Errors
///
/// Returns [`NavError::Protocol`] for any event other than `Mount` while
/// the controller is not mounted.
///
/// # Example
///
/// ```
/// use campusnav::app::{handle_event, DomInventory, Event, NavigationController};
/// use campusnav::data::Capabilities;
/// use campusnav::storage::FallbackStorage;
/// use campusnav::Config;
///
/// let mut nav = NavigationController::new(Config::default(), FallbackStorage::in_memory(), Capabilities::default());
/// assert!(handle_event(&mut nav, &Event::HamburgerTap).is_err());
///
/// let mount = Event::Mount {
///     inventory: DomInventory::complete(&[]),
///     path: "/student-dashboard.html".into(),
///     width: 1280.0,
///     scroll: Default::default(),
/// };
/// let (should_render, _actions) = handle_event(&mut nav, &mount)?;
/// assert!(should_render);
/// # Ok::<(), campusnav::NavError>(())
/// ```
pub fn handle_event(nav: &mut NavigationController, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    if !nav.is_mounted() && !matches!(event, Event::Mount { .. }) {
        return Err(NavError::Protocol(format!("{} received before mount", event.name())));
    }

    if let Some(now_ms) = event.host_time_ms() {
        nav.observe_clock(now_ms);
    }

    let actions = match event {
        Event::Mount {
            inventory,
            path,
            width,
            scroll,
        } => nav.mount(inventory.clone(), path, *width, *scroll),
        Event::Unmount => nav.unmount(),
        Event::Resize { width } => nav.resize(*width),
        Event::Scroll {
            scroll_y,
            timestamp_ms,
        } => nav.scroll(ScrollSample {
            scroll_y: *scroll_y,
            timestamp_ms: *timestamp_ms,
        }),
        Event::AnimationFrame { now_ms } => nav.animation_frame(*now_ms),
        Event::HamburgerTap => nav.hamburger_tap(),
        Event::OutsideClick => nav.outside_click(),
        Event::KeyPress { key } => nav.key_press(key),
        Event::TransitionEnd => nav.transition_end(),
        Event::NavItemSelected { id } => nav.select_nav_item(id),
        Event::TouchStart { point, scroll } => nav.touch_start(*point, *scroll),
        Event::TouchMove { point } => nav.touch_move(*point),
        Event::TouchEnd { point } => nav.touch_end(*point),
        Event::TouchCancel => nav.touch_cancel(),
        Event::TimerFired { timer, now_ms } => nav.timer_fired(*timer, *now_ms),
        Event::RefreshCompleted { now_ms } => nav.refresh_completed(*now_ms),
        Event::DataLoaded { request, outcome, .. } => nav.data_loaded(request, outcome),
        Event::ThemeToggle => nav.toggle_theme(),
    };

    let should_render = nav.take_render_request();
    tracing::trace!(action_count = actions.len(), should_render, "event handled");
    Ok((should_render, actions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_json() {
        let event: Event = serde_json::from_str(
            r#"{"type":"touchStart","point":{"x":10,"y":20,"timeMs":5},"scroll":{"scrollY":0,"contentHeight":900,"viewportHeight":600}}"#,
        )
        .unwrap();
        assert_eq!(event.name(), "touchStart");

        let event: Event = serde_json::from_str(r#"{"type":"timerFired","timer":"navbarHide","nowMs":150}"#).unwrap();
        assert_eq!(event, Event::TimerFired { timer: TimerKind::NavbarHide, now_ms: 150 });

        let event: Event = serde_json::from_str(
            r#"{"type":"dataLoaded","request":{"kind":"adminStats"},"outcome":{"status":"failed","error":"offline"}}"#,
        )
        .unwrap();
        assert_eq!(event.name(), "dataLoaded");
    }

    #[test]
    fn notice_age_follows_host_clock() {
        let mut storage = crate::storage::FallbackStorage::in_memory();
        storage.set(crate::storage::keys::TOKEN, "t");
        let mut nav = crate::initialize(crate::Config::default(), storage);
        let mount = Event::Mount {
            inventory: DomInventory::complete(&[]),
            path: String::new(),
            width: 1280.0,
            scroll: ScrollMetrics::default(),
        };
        handle_event(&mut nav, &mount).unwrap();

        let loaded: Event = serde_json::from_str(
            r#"{"type":"dataLoaded","nowMs":1700000300000,"request":{"kind":"announcements"},
                "outcome":{"status":"body","body":"{\"success\":true,\"data\":[{\"id\":\"a\",\"title\":\"Exams\",\"postedAt\":1700000000},{\"id\":\"b\",\"title\":\"Fees\",\"postedAt\":1700000000}]}"}}"#,
        )
        .unwrap();
        let (_, actions) = handle_event(&mut nav, &loaded).unwrap();
        assert!(matches!(&actions[0], Action::ShowNotice { age, .. } if age == "5m ago"));

        let later = Event::TimerFired {
            timer: TimerKind::TickerRotate,
            now_ms: 1_700_007_200_000,
        };
        let (_, actions) = handle_event(&mut nav, &later).unwrap();
        assert!(matches!(&actions[0], Action::ShowNotice { age, .. } if age == "2h ago"));
    }

    #[test]
    fn mount_fields_default() {
        let event: Event = serde_json::from_str(r#"{"type":"mount","width":375}"#).unwrap();
        let Event::Mount { inventory, path, .. } = event else {
            panic!("expected mount");
        };
        assert!(!inventory.hamburger);
        assert!(path.is_empty());
    }
}
