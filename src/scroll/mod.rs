//! Scroll-aware chrome.
//!
//! [`ScrollDirectionMonitor`] classifies scroll deltas into show/hide signals
//! for the fixed navbar; [`NoticeTicker`] consumes those signals to sit just
//! below a visible navbar or at the very top when the navbar is hidden.

pub mod monitor;
pub mod ticker;

pub use monitor::{ChromeSignal, FrameOutcome, ScrollConfig, ScrollDirectionMonitor, ScrollSample};
pub use ticker::{NoticeTicker, TickerPosition};
