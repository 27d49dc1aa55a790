//! Side effects the host executes on the controller's behalf.
//!
//! The controller never touches the DOM, the network or the clock. Every
//! handled event yields a list of [`Action`]s that the host runs in order.
//! On the wire each action is one JSON object tagged by `"action"`.

use serde::{Deserialize, Serialize};

use super::subscription::{ListenerId, ListenerSpec};
use crate::data::{DataRequest, WidgetContent};
use crate::domain::{Notice, ThemePreference};
use crate::scroll::TickerPosition;
use crate::ui::ChromeViewModel;

/// Timers the controller asks the host to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerKind {
    /// Deferred `navbar:hide`.
    NavbarHide,
    /// Next notice in the ticker.
    TickerRotate,
}

/// Severity of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Warning,
}

/// Commands for the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    /// Redraws sidebar, bottom nav and navbar from the view model.
    RenderChrome { view: Box<ChromeViewModel> },

    /// Sets `aria-expanded` on `#hamburger`.
    SetAriaExpanded { expanded: bool },

    /// Prevents the page behind the open menu from scrolling.
    LockBodyScroll { locked: bool },

    /// Smooth-scrolls `main section[id]` into view.
    ScrollToSection { id: String, index: usize },

    /// Loads another page.
    NavigateTo { url: String },

    /// Dispatches a `CustomEvent` on `window`.
    DispatchEvent {
        name: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<serde_json::Value>,
    },

    /// Calls `requestAnimationFrame`; the host answers with an
    /// `animationFrame` event.
    RequestAnimationFrame,

    /// Starts a one-shot timer; the host answers with `timerFired`.
    #[serde(rename_all = "camelCase")]
    ScheduleTimer { timer: TimerKind, delay_ms: u64 },

    /// Cancels the native default of the touch event being handled.
    PreventDefault,

    /// Draws the pull indicator.
    SetPullIndicator { offset: f64, ready: bool, refreshing: bool },

    /// Returns the pull indicator to rest.
    ResetPullIndicator { animate: bool },

    /// Reloads page content after a pull; the host answers with
    /// `refreshCompleted`.
    Refresh,

    #[serde(rename_all = "camelCase")]
    AddListener {
        id: ListenerId,
        #[serde(flatten)]
        listener: ListenerSpec,
    },

    #[serde(rename_all = "camelCase")]
    RemoveListener {
        id: ListenerId,
        #[serde(flatten)]
        listener: ListenerSpec,
    },

    /// Issues an API request; the host answers with `dataLoaded`.
    Fetch {
        method: &'static str,
        endpoint: String,
        request: DataRequest,
    },

    /// Fills a dashboard widget.
    RenderWidget {
        widget: &'static str,
        content: WidgetContent,
    },

    Toast { level: ToastLevel, message: String },

    /// Shows one ticker notice with its relative age ("5m ago").
    ShowNotice { index: usize, notice: Notice, age: String },

    PositionTicker { position: TickerPosition },

    /// Applies the color scheme to `<html>`.
    ApplyTheme { theme: ThemePreference },
}

impl Action {
    /// Convenience for `Fetch` of a [`DataRequest`].
    #[must_use]
    pub fn fetch(request: DataRequest) -> Self {
        Self::Fetch {
            method: "GET",
            endpoint: request.endpoint(),
            request,
        }
    }

    /// Dispatch of a `CustomEvent` without detail.
    #[must_use]
    pub const fn dispatch(name: &'static str) -> Self {
        Self::DispatchEvent { name, detail: None }
    }
}
