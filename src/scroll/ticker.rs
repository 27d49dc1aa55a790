//! Announcement ticker pinned under the navbar.

use serde::Serialize;

use super::monitor::ChromeSignal;
use crate::domain::Notice;

/// Where the ticker is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum TickerPosition {
    /// Directly below a visible navbar.
    BelowNavbar { offset: f64 },
    /// At the top edge while the navbar is hidden.
    Top,
}

/// Rotates through notices and follows navbar visibility.
#[derive(Debug, Clone)]
pub struct NoticeTicker {
    notices: Vec<Notice>,
    index: usize,
    interval_ms: u64,
    navbar_height: f64,
    position: TickerPosition,
}

impl NoticeTicker {
    #[must_use]
    pub fn new(interval_ms: u64, navbar_height: f64) -> Self {
        Self {
            notices: Vec::new(),
            index: 0,
            interval_ms,
            navbar_height,
            position: TickerPosition::BelowNavbar {
                offset: navbar_height,
            },
        }
    }

    /// Replaces the notices and restarts from the first one.
    ///
    /// Returns the rotation delay when there is more than one notice to
    /// rotate through.
    pub fn set_notices(&mut self, notices: Vec<Notice>) -> Option<u64> {
        self.notices = notices;
        self.index = 0;
        self.rotation_delay()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.notices.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn position(&self) -> TickerPosition {
        self.position
    }

    fn rotation_delay(&self) -> Option<u64> {
        (self.notices.len() > 1).then_some(self.interval_ms)
    }

    /// Advances to the next notice, wrapping around. Returns the new index
    /// and the delay until the next rotation.
    pub fn rotate(&mut self) -> Option<(usize, u64)> {
        let delay = self.rotation_delay()?;
        self.index = (self.index + 1) % self.notices.len();
        Some((self.index, delay))
    }

    /// Follows a navbar signal. Returns the new position if it moved.
    pub fn on_chrome_signal(&mut self, signal: ChromeSignal) -> Option<TickerPosition> {
        let next = match signal {
            ChromeSignal::Show => TickerPosition::BelowNavbar {
                offset: self.navbar_height,
            },
            ChromeSignal::Hide => TickerPosition::Top,
        };
        if next == self.position {
            None
        } else {
            self.position = next;
            Some(next)
        }
    }
}
