//! Viewport and mobile-menu state machine types.
//!
//! # Mobile Menu
//!
//! ```text
//!            open (hamburger, edge swipe)
//!   Closed ───────────────────────────▶ Opening
//!     ▲                                   │ transition end
//!     │ transition end                    ▼
//!   Closing ◀──────────────────────────── Open
//!            close (outside click, Escape,
//!                   left swipe, nav selection)
//! ```
//!
//! Closing from `Opening` is allowed and goes straight to `Closing`. With a
//! zero transition duration the intermediate states are skipped.

use serde::{Deserialize, Serialize};

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// Widths strictly below `breakpoint` are mobile.
    ///
    /// ```
    /// use campusnav::app::ViewportClass;
    ///
    /// assert_eq!(ViewportClass::from_width(767.0, 768.0), ViewportClass::Mobile);
    /// assert_eq!(ViewportClass::from_width(768.0, 768.0), ViewportClass::Desktop);
    /// ```
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Mobile slide-out menu lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileMenuState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl MobileMenuState {
    /// Whether the menu counts as open (`aria-expanded="true"`).
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    /// State after an open request.
    #[must_use]
    pub const fn opened(self, animated: bool) -> Self {
        match self {
            Self::Closed | Self::Closing if animated => Self::Opening,
            Self::Closed | Self::Closing => Self::Open,
            other => other,
        }
    }

    /// State after a close request.
    #[must_use]
    pub const fn closed(self, animated: bool) -> Self {
        match self {
            Self::Open | Self::Opening if animated => Self::Closing,
            Self::Open | Self::Opening => Self::Closed,
            other => other,
        }
    }

    /// State after the running transition ends.
    #[must_use]
    pub const fn settled(self) -> Self {
        match self {
            Self::Opening => Self::Open,
            Self::Closing => Self::Closed,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animated_cycle() {
        let s = MobileMenuState::Closed.opened(true);
        assert_eq!(s, MobileMenuState::Opening);
        assert!(s.is_expanded());
        let s = s.settled();
        assert_eq!(s, MobileMenuState::Open);
        let s = s.closed(true);
        assert_eq!(s, MobileMenuState::Closing);
        assert!(!s.is_expanded());
        assert_eq!(s.settled(), MobileMenuState::Closed);
    }

    #[test]
    fn instant_transitions_skip_intermediate_states() {
        assert_eq!(MobileMenuState::Closed.opened(false), MobileMenuState::Open);
        assert_eq!(MobileMenuState::Open.closed(false), MobileMenuState::Closed);
    }

    #[test]
    fn requests_in_the_current_direction_are_no_ops() {
        assert_eq!(MobileMenuState::Open.opened(true), MobileMenuState::Open);
        assert_eq!(MobileMenuState::Opening.opened(true), MobileMenuState::Opening);
        assert_eq!(MobileMenuState::Closed.closed(true), MobileMenuState::Closed);
        assert_eq!(MobileMenuState::Closing.closed(true), MobileMenuState::Closing);
    }

    #[test]
    fn reversal_mid_transition() {
        assert_eq!(MobileMenuState::Opening.closed(true), MobileMenuState::Closing);
        assert_eq!(MobileMenuState::Closing.opened(true), MobileMenuState::Opening);
    }
}
