//! Touch gesture recognition.
//!
//! Turns raw `touchstart → touchmove* → touchend` streams into discrete
//! gestures. Two recognizers watch the same stream:
//!
//! - [`SwipeRecognizer`]: horizontal swipes, classified at touch end
//! - [`PullToRefresh`]: the pull-down-at-top refresh gesture, tracked live
//!
//! Ambiguous motion resolves to "no gesture"; a diagonal drag is treated as
//! an ordinary scroll. Only one touch sequence is tracked at a time and a new
//! touch start replaces whatever was in progress.

pub mod pull;
pub mod swipe;

pub use pull::{PullConfig, PullRelease, PullToRefresh, PullUpdate, ScrollMetrics};
pub use swipe::{SwipeConfig, SwipeRecognizer};

use serde::{Deserialize, Serialize};

/// One touch coordinate with its event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    /// Host event timestamp in milliseconds.
    pub time_ms: u64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, time_ms: u64) -> Self {
        Self { x, y, time_ms }
    }
}

/// Recognized gesture type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    SwipeLeft,
    SwipeRight,
    PullRefresh,
}

/// A classified touch sequence. Consumed once by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureEvent {
    #[serde(rename = "type")]
    pub kind: GestureKind,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub elapsed_ms: u64,
}

impl GestureEvent {
    #[must_use]
    pub fn between(kind: GestureKind, start: TouchPoint, end: TouchPoint) -> Self {
        Self {
            kind,
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
            elapsed_ms: end.time_ms.saturating_sub(start.time_ms),
        }
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.end_x - self.start_x
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        self.end_y - self.start_y
    }
}
