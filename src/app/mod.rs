//! Application layer: view state, navigation controller and host protocol.
//!
//! Sits between the host shim (`bridge` or an embedding page) and the
//! domain, storage, gesture and scroll layers.
//!
//! ```text
//! Host Event → handle_event → NavigationController → ViewStateStore / recognizers
//!                                     │
//!                                     └──▶ Vec<Action> → host side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the host
//! - [`controller`]: [`NavigationController`], owner of all page state
//! - [`handler`]: [`Event`] type and [`handle_event`] dispatch
//! - [`modes`]: Viewport class and mobile-menu state machine
//! - [`resolve`]: Nav href → in-page section or page URL
//! - [`state`]: [`ViewState`] and its persisting store
//! - [`subscription`]: Listener handles and registry

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod resolve;
pub mod state;
pub mod subscription;

pub use actions::{Action, TimerKind, ToastLevel};
pub use controller::{DomInventory, NavigationController, LOGIN_PAGE};
pub use handler::{handle_event, Event};
pub use modes::{MobileMenuState, ViewportClass};
pub use resolve::NavTarget;
pub use state::{ViewState, ViewStateStore};
pub use subscription::{ListenerId, ListenerRegistry, ListenerSpec, ListenerTarget, Subscription};
