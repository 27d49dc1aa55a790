//! Listener bookkeeping.
//!
//! The host owns the real DOM listeners. The controller describes them with
//! `AddListener`/`RemoveListener` actions and tracks them here so that
//! disposing a [`Subscription`] removes exactly what it registered and
//! nothing else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::actions::Action;

/// Host-assigned handle of one listener.
pub type ListenerId = u64;

/// Element a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListenerTarget {
    Window,
    Document,
    /// `#hamburger`
    Hamburger,
    /// `.dashboard-main`
    DashboardMain,
    /// `.sidebar-nav-link`
    SidebarLinks,
}

/// One listener request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerSpec {
    pub target: ListenerTarget,
    pub event: &'static str,
    pub passive: bool,
}

impl ListenerSpec {
    #[must_use]
    pub const fn passive(target: ListenerTarget, event: &'static str) -> Self {
        Self { target, event, passive: true }
    }

    #[must_use]
    pub const fn active(target: ListenerTarget, event: &'static str) -> Self {
        Self { target, event, passive: false }
    }
}

/// Handle for a group of listeners registered together.
///
/// Not `Clone`: a group is disposed at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Subscription leaks its listeners"]
pub struct Subscription {
    name: &'static str,
    ids: Vec<ListenerId>,
}

impl Subscription {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn ids(&self) -> &[ListenerId] {
        &self.ids
    }
}

/// Live listeners keyed by id.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: ListenerId,
    active: BTreeMap<ListenerId, ListenerSpec>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group and returns its handle with the actions that attach
    /// the listeners.
    pub fn register(&mut self, name: &'static str, specs: &[ListenerSpec]) -> (Subscription, Vec<Action>) {
        let mut ids = Vec::with_capacity(specs.len());
        let mut actions = Vec::with_capacity(specs.len());

        for spec in specs {
            self.next_id += 1;
            let id = self.next_id;
            self.active.insert(id, *spec);
            ids.push(id);
            actions.push(Action::AddListener { id, listener: *spec });
        }

        tracing::debug!(name, count = ids.len(), "listeners registered");
        (Subscription { name, ids }, actions)
    }

    /// Removes the group's listeners, returning the detach actions.
    pub fn dispose(&mut self, subscription: Subscription) -> Vec<Action> {
        let actions: Vec<Action> = subscription
            .ids
            .iter()
            .filter_map(|id| self.active.remove(id).map(|listener| Action::RemoveListener { id: *id, listener }))
            .collect();
        tracing::debug!(name = subscription.name, removed = actions.len(), "listeners disposed");
        actions
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_active(&self, id: ListenerId) -> bool {
        self.active.contains_key(&id)
    }

    /// Listeners currently attached, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ListenerId, &ListenerSpec)> {
        self.active.iter().map(|(id, spec)| (*id, spec))
    }
}
