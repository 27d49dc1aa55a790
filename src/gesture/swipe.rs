//! Horizontal swipe classification.
//!
//! A sequence is a swipe only when, measured from start to end,
//! `|dx| > threshold` and `|dy| < vertical_tolerance`. The tolerance keeps
//! vertical and diagonal scrolling from reading as navigation.

use super::{GestureEvent, GestureKind, TouchPoint};

/// Swipe thresholds in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel, exclusive.
    pub threshold: f64,
    /// Maximum vertical travel, exclusive.
    pub vertical_tolerance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 75.0,
            vertical_tolerance: 50.0,
        }
    }
}

/// Classifies a start/end pair without any state.
///
/// ```
/// use campusnav::gesture::swipe::{classify, SwipeConfig};
/// use campusnav::gesture::{GestureKind, TouchPoint};
///
/// let config = SwipeConfig::default();
/// let start = TouchPoint::new(200.0, 300.0, 0);
/// assert_eq!(classify(start, TouchPoint::new(80.0, 310.0, 90), &config), Some(GestureKind::SwipeLeft));
/// assert_eq!(classify(start, TouchPoint::new(320.0, 420.0, 90), &config), None);
/// ```
#[must_use]
pub fn classify(start: TouchPoint, end: TouchPoint, config: &SwipeConfig) -> Option<GestureKind> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > config.threshold && dy.abs() < config.vertical_tolerance {
        Some(if dx < 0.0 {
            GestureKind::SwipeLeft
        } else {
            GestureKind::SwipeRight
        })
    } else {
        None
    }
}

/// Tracks one touch sequence at a time and classifies it on release.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    start: Option<TouchPoint>,
}

impl SwipeRecognizer {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Begins a sequence, discarding any sequence already in progress.
    pub fn touch_start(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Ends the sequence and returns the swipe, if it was one.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<GestureEvent> {
        let start = self.start.take()?;
        let kind = classify(start, point, &self.config)?;

        tracing::debug!(?kind, dx = point.x - start.x, dy = point.y - start.y, "swipe recognized");
        Some(GestureEvent::between(kind, start, point))
    }

    /// Drops the sequence (`touchcancel`).
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
