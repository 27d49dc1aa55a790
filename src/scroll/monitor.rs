//! Scroll-direction monitor.
//!
//! Scroll events arrive far more often than frames. [`on_scroll`] only keeps
//! the newest sample and asks for one animation frame; the classification
//! runs in [`on_frame`], at most once per frame.
//!
//! Per frame, `delta = y - last_scroll_y`. Deltas below the threshold are
//! jitter and change nothing. Otherwise the direction is recorded and
//! `last_scroll_y` advances. The chrome should be visible when
//!
//! ```text
//! at_top || !scrolling_down
//! ```
//!
//! Any upward move that clears the jitter threshold flips `scrolling_down`,
//! so no separate upward-travel distance is tracked.
//!
//! Showing is immediate. Hiding waits `hide_delay_ms` and is dropped if the
//! intent flips back in the meantime, which avoids flicker on tiny reversals.
//!
//! [`on_scroll`]: ScrollDirectionMonitor::on_scroll
//! [`on_frame`]: ScrollDirectionMonitor::on_frame

use serde::{Deserialize, Serialize};

/// Monitor tuning, in CSS pixels and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Minimum per-frame delta that counts as movement.
    pub threshold: f64,
    /// Scroll offsets at or above the page top within this distance count
    /// as "at top".
    pub top_threshold: f64,
    /// Delay between a hide intent and the hide signal.
    pub hide_delay_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            top_threshold: 60.0,
            hide_delay_ms: 150,
        }
    }
}

/// One passive scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub timestamp_ms: u64,
}

/// Visibility change for fixed chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromeSignal {
    Show,
    Hide,
}

impl ChromeSignal {
    /// DOM event name dispatched for this signal.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Show => "navbar:show",
            Self::Hide => "navbar:hide",
        }
    }
}

/// What a frame produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Signal to dispatch now.
    pub signal: Option<ChromeSignal>,
    /// A hide was scheduled; the host should deliver a timer at this time.
    pub hide_at_ms: Option<u64>,
}

/// Classifies scroll movement into show/hide intents.
#[derive(Debug, Clone)]
pub struct ScrollDirectionMonitor {
    config: ScrollConfig,
    last_scroll_y: f64,
    scrolling_down: bool,
    pending: Option<ScrollSample>,
    frame_requested: bool,
    visible: bool,
    hide_deadline_ms: Option<u64>,
}

impl ScrollDirectionMonitor {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            last_scroll_y: 0.0,
            scrolling_down: false,
            pending: None,
            frame_requested: false,
            visible: true,
            hide_deadline_ms: None,
        }
    }

    /// Resynchronizes with the page, e.g. after mount or a restored scroll
    /// position. The chrome starts visible.
    pub fn reset(&mut self, scroll_y: f64) {
        *self = Self::new(self.config);
        self.last_scroll_y = scroll_y.max(0.0);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_scrolling_down(&self) -> bool {
        self.scrolling_down
    }

    #[must_use]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Records a scroll sample. Returns `true` when the host must request an
    /// animation frame; only one request is outstanding at a time.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> bool {
        self.pending = Some(sample);
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Processes the newest sample on an animation frame.
    pub fn on_frame(&mut self, now_ms: u64) -> FrameOutcome {
        self.frame_requested = false;

        if let Some(sample) = self.pending.take() {
            if let Some(outcome) = self.classify(sample, now_ms) {
                return outcome;
            }
        }

        FrameOutcome {
            signal: self.fire_due_hide(now_ms),
            hide_at_ms: None,
        }
    }

    /// Applies one sample. Returns an outcome when visibility changed or a
    /// hide was scheduled.
    fn classify(&mut self, sample: ScrollSample, now_ms: u64) -> Option<FrameOutcome> {
        let y = sample.scroll_y.max(0.0);
        let delta = y - self.last_scroll_y;
        if delta.abs() >= self.config.threshold {
            self.scrolling_down = delta > 0.0;
            self.last_scroll_y = y;
        }

        let at_top = y <= self.config.top_threshold;
        let show = at_top || !self.scrolling_down;

        if show {
            self.hide_deadline_ms = None;
            if !self.visible {
                self.visible = true;
                tracing::trace!(y, "chrome shown");
                return Some(FrameOutcome {
                    signal: Some(ChromeSignal::Show),
                    hide_at_ms: None,
                });
            }
        } else if self.visible && self.hide_deadline_ms.is_none() {
            let at = now_ms.saturating_add(self.config.hide_delay_ms);
            self.hide_deadline_ms = Some(at);
            return Some(FrameOutcome {
                signal: None,
                hide_at_ms: Some(at),
            });
        }

        None
    }

    /// Delivers the hide timer. Fires only if the deadline has passed and no
    /// show intent cancelled it.
    pub fn on_timer(&mut self, now_ms: u64) -> Option<ChromeSignal> {
        self.fire_due_hide(now_ms)
    }

    fn fire_due_hide(&mut self, now_ms: u64) -> Option<ChromeSignal> {
        let deadline = self.hide_deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        self.hide_deadline_ms = None;
        if self.visible {
            self.visible = false;
            tracing::trace!(y = self.last_scroll_y, "chrome hidden");
            Some(ChromeSignal::Hide)
        } else {
            None
        }
    }
}

impl Default for ScrollDirectionMonitor {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(m: &mut ScrollDirectionMonitor, y: f64, t: u64) -> FrameOutcome {
        m.on_scroll(ScrollSample { scroll_y: y, timestamp_ms: t });
        m.on_frame(t)
    }

    #[test]
    fn only_one_frame_request_outstanding() {
        let mut m = ScrollDirectionMonitor::default();
        assert!(m.on_scroll(ScrollSample { scroll_y: 10.0, timestamp_ms: 0 }));
        assert!(!m.on_scroll(ScrollSample { scroll_y: 20.0, timestamp_ms: 1 }));
        m.on_frame(16);
        assert!(m.on_scroll(ScrollSample { scroll_y: 30.0, timestamp_ms: 17 }));
    }

    #[test]
    fn jitter_below_threshold_is_ignored() {
        let mut m = ScrollDirectionMonitor::default();
        m.reset(300.0);
        frame(&mut m, 305.0, 0);
        assert!(!m.is_scrolling_down());
        assert!((m.last_scroll_y() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hide_waits_for_delay_then_fires_once() {
        let mut m = ScrollDirectionMonitor::default();
        let out = frame(&mut m, 200.0, 1_000);
        assert_eq!(out, FrameOutcome { signal: None, hide_at_ms: Some(1_150) });

        assert_eq!(m.on_timer(1_149), None);
        assert_eq!(frame(&mut m, 260.0, 1_100).signal, None);
        assert_eq!(m.on_timer(1_150), Some(ChromeSignal::Hide));
        assert_eq!(m.on_timer(1_300), None);
        assert!(!m.is_visible());
    }

    #[test]
    fn reversal_before_deadline_cancels_hide() {
        let mut m = ScrollDirectionMonitor::default();
        frame(&mut m, 400.0, 0);
        frame(&mut m, 380.0, 50);
        assert_eq!(m.on_timer(500), None);
        assert!(m.is_visible());
    }

    #[test]
    fn scrolling_up_shows_immediately() {
        let mut m = ScrollDirectionMonitor::default();
        frame(&mut m, 500.0, 0);
        m.on_timer(200);
        assert!(!m.is_visible());

        assert_eq!(frame(&mut m, 480.0, 300).signal, Some(ChromeSignal::Show));
    }

    #[test]
    fn small_upward_move_past_jitter_shows() {
        let mut m = ScrollDirectionMonitor::default();
        frame(&mut m, 900.0, 0);
        m.on_timer(200);
        assert!(!m.is_visible());

        assert_eq!(frame(&mut m, 895.0, 300).signal, None, "jitter");
        assert_eq!(frame(&mut m, 888.0, 400).signal, Some(ChromeSignal::Show));
        assert!(!m.is_scrolling_down());
    }

    #[test]
    fn never_hides_at_top() {
        let mut m = ScrollDirectionMonitor::default();
        assert_eq!(frame(&mut m, 40.0, 0), FrameOutcome::default());
        assert_eq!(m.on_timer(1_000), None);
        assert!(m.is_visible());
    }

    #[test]
    fn signal_event_names() {
        assert_eq!(ChromeSignal::Show.event_name(), "navbar:show");
        assert_eq!(ChromeSignal::Hide.event_name(), "navbar:hide");
    }
}
