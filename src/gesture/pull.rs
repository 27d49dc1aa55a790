//! Pull-to-refresh gesture.
//!
//! # State Machine
//!
//! ```text
//!            touch_start (at top, scrollable,        touch_end while ready
//!             no cooldown, not refreshing)          ┌──────────────────────┐
//!   Idle ─────────────────────────────▶ Pulling ────┘                      ▼
//!    ▲  ◀── touch_end before ready (snap back) ──┤                   Refreshing
//!    │  ◀── horizontal-dominant move (cancel) ───┘                         │
//!    └──────────────────────── complete(now) starts cooldown ◀─────────────┘
//! ```
//!
//! The indicator offset is the downward travel divided by the resistance
//! factor, capped at `max_offset`. The gesture is ready once the offset
//! reaches `threshold / resistance`, i.e. once the finger has travelled
//! `threshold` pixels.

use serde::{Deserialize, Serialize};

use super::{GestureEvent, GestureKind, TouchPoint};

/// Movement below this many pixels on both axes never cancels a pull, so
/// finger jitter at touch start is not read as a horizontal drag.
const DOMINANCE_SLOP: f64 = 10.0;

/// Pull-to-refresh tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullConfig {
    /// Finger travel in pixels needed to arm a refresh.
    pub threshold: f64,
    /// Divisor applied to finger travel to get the indicator offset.
    pub resistance: f64,
    /// Largest indicator offset drawn.
    pub max_offset: f64,
    /// Quiet period after a completed refresh.
    pub cooldown_ms: u64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            resistance: 2.5,
            max_offset: 120.0,
            cooldown_ms: 3_000,
        }
    }
}

impl PullConfig {
    /// Indicator offset at which the gesture becomes ready.
    ///
    /// ```
    /// use campusnav::gesture::PullConfig;
    ///
    /// assert!((PullConfig::default().ready_offset() - 32.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn ready_offset(&self) -> f64 {
        self.threshold / self.resistance.max(1.0)
    }

    fn damp(&self, travel: f64) -> f64 {
        (travel.max(0.0) / self.resistance.max(1.0)).min(self.max_offset)
    }
}

/// Page scroll geometry at touch start.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// A pull can start only at the very top of content taller than the
    /// viewport.
    #[must_use]
    pub fn allows_pull(&self) -> bool {
        self.scroll_y <= 0.0 && self.content_height > self.viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pulling {
        start: TouchPoint,
        offset: f64,
        ready: bool,
    },
    Refreshing,
}

/// Result of feeding a move point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullUpdate {
    /// No pull in progress.
    Ignored,
    /// Indicator should be drawn at `offset`.
    Moved {
        offset: f64,
        ready: bool,
        /// The host must cancel native scrolling for this move.
        prevent_default: bool,
    },
    /// Horizontal motion took over; the indicator must reset.
    Cancelled,
}

/// Result of releasing the touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullRelease {
    /// No pull in progress, nothing to draw.
    None,
    /// Released before the threshold; animate the indicator back.
    SnapBack,
    /// Released while ready; run the refresh exactly once.
    Refresh(GestureEvent),
}

/// Pull-to-refresh recognizer.
#[derive(Debug, Clone)]
pub struct PullToRefresh {
    config: PullConfig,
    phase: Phase,
    /// When the last refresh completed, for the cooldown.
    last_completed_ms: Option<u64>,
}

impl Default for PullToRefresh {
    fn default() -> Self {
        Self::new(PullConfig::default())
    }
}

impl PullToRefresh {
    #[must_use]
    pub fn new(config: PullConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            last_completed_ms: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.phase == Phase::Refreshing
    }

    #[must_use]
    pub fn is_pulling(&self) -> bool {
        matches!(self.phase, Phase::Pulling { .. })
    }

    fn in_cooldown(&self, now_ms: u64) -> bool {
        self.last_completed_ms
            .is_some_and(|done| now_ms < done.saturating_add(self.config.cooldown_ms))
    }

    /// Starts tracking a touch. Returns whether the pull was armed.
    ///
    /// Any pull already in progress is discarded first.
    pub fn touch_start(&mut self, point: TouchPoint, metrics: ScrollMetrics) -> bool {
        if self.is_refreshing() {
            return false;
        }
        self.phase = Phase::Idle;

        if !metrics.allows_pull() {
            return false;
        }
        if self.in_cooldown(point.time_ms) {
            tracing::debug!("pull ignored during refresh cooldown");
            return false;
        }

        self.phase = Phase::Pulling {
            start: point,
            offset: 0.0,
            ready: false,
        };
        true
    }

    /// Feeds a move point.
    pub fn touch_move(&mut self, point: TouchPoint) -> PullUpdate {
        let Phase::Pulling { start, .. } = self.phase else {
            return PullUpdate::Ignored;
        };

        let dx = (point.x - start.x).abs();
        let dy = point.y - start.y;

        if dx > dy.abs() && dx > DOMINANCE_SLOP {
            tracing::debug!(dx, dy, "pull cancelled by horizontal movement");
            self.phase = Phase::Idle;
            return PullUpdate::Cancelled;
        }

        let offset = self.config.damp(dy);
        let ready = offset >= self.config.ready_offset();
        self.phase = Phase::Pulling {
            start,
            offset,
            ready,
        };

        PullUpdate::Moved {
            offset,
            ready,
            prevent_default: dy > 0.0,
        }
    }

    /// Releases the touch at `point`.
    pub fn touch_end(&mut self, point: TouchPoint) -> PullRelease {
        let Phase::Pulling { start, offset, .. } = self.phase else {
            return PullRelease::None;
        };

        match self.touch_move(point) {
            PullUpdate::Moved { ready: true, .. } => {
                self.phase = Phase::Refreshing;
                tracing::debug!("pull released past threshold, refreshing");
                PullRelease::Refresh(GestureEvent::between(GestureKind::PullRefresh, start, point))
            }
            PullUpdate::Moved { offset: now, .. } => {
                self.phase = Phase::Idle;
                if now > 0.0 || offset > 0.0 {
                    PullRelease::SnapBack
                } else {
                    PullRelease::None
                }
            }
            PullUpdate::Cancelled | PullUpdate::Ignored => {
                if offset > 0.0 {
                    PullRelease::SnapBack
                } else {
                    PullRelease::None
                }
            }
        }
    }

    /// Drops a pull in progress (`touchcancel`). Returns whether the
    /// indicator needs resetting.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            Phase::Pulling { offset, .. } => {
                self.phase = Phase::Idle;
                offset > 0.0
            }
            Phase::Idle | Phase::Refreshing => false,
        }
    }

    /// Marks the refresh finished and starts the cooldown.
    pub fn complete(&mut self, now_ms: u64) {
        if self.is_refreshing() {
            self.phase = Phase::Idle;
            self.last_completed_ms = Some(now_ms);
        }
    }
}
