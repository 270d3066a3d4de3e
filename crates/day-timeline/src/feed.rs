//! Day event feed: a registration table of per-day snapshot listeners.
//!
//! The feed owns the subscriptions; the layout engine never sees it. Listeners
//! are identified by pointer identity of their `Arc`, so subscribing the same
//! listener twice for a day is a no-op, as is unsubscribing one that is not
//! registered.
//!
//! The feed holds listeners weakly. Dropping the last `Arc` of a listener
//! unregisters it: it is never called again and no longer counted.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use tracing::trace;

use crate::entry::{DayId, DaySnapshot};

/// Callback invoked with the complete snapshot of a day.
pub type Listener = Arc<dyn Fn(&DaySnapshot) + Send + Sync>;

type Registration = Weak<dyn Fn(&DaySnapshot) + Send + Sync>;

fn same_listener(registration: &Registration, listener: &Listener) -> bool {
    Weak::ptr_eq(registration, &Arc::downgrade(listener))
}

/// Registration table keyed by `(DayId, listener identity)`.
#[derive(Default)]
pub struct DayEventFeed {
    listeners: HashMap<DayId, Vec<Registration>>,
}

impl fmt::Debug for DayEventFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&DayId, usize> = self
            .listeners
            .keys()
            .map(|d| (d, self.listener_count(*d)))
            .collect();
        f.debug_struct("DayEventFeed")
            .field("listeners", &counts)
            .finish()
    }
}

impl DayEventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget registrations whose listener has been dropped.
    fn prune(&mut self) {
        self.listeners.retain(|_, registered| {
            registered.retain(|l| l.strong_count() > 0);
            !registered.is_empty()
        });
    }

    /// Register `listener` for `day`. Returns `false` if it was already registered.
    pub fn subscribe(&mut self, day: DayId, listener: &Listener) -> bool {
        self.prune();
        let registered = self.listeners.entry(day).or_default();
        if registered.iter().any(|l| same_listener(l, listener)) {
            return false;
        }
        registered.push(Arc::downgrade(listener));
        trace!(%day, count = registered.len(), "Subscribed listener");
        true
    }

    /// Remove `listener` from `day`. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, day: DayId, listener: &Listener) -> bool {
        self.prune();
        let Some(registered) = self.listeners.get_mut(&day) else {
            return false;
        };
        let before = registered.len();
        registered.retain(|l| !same_listener(l, listener));
        let removed = registered.len() != before;
        if registered.is_empty() {
            self.listeners.remove(&day);
        }
        if removed {
            trace!(%day, "Unsubscribed listener");
        }
        removed
    }

    pub fn is_subscribed(&self, day: DayId, listener: &Listener) -> bool {
        self.listeners
            .get(&day)
            .is_some_and(|ls| ls.iter().any(|l| same_listener(l, listener)))
    }

    /// Live listeners registered for `day`.
    pub fn listener_count(&self, day: DayId) -> usize {
        self.listeners
            .get(&day)
            .map_or(0, |ls| ls.iter().filter(|l| l.strong_count() > 0).count())
    }

    /// Deliver a full snapshot to every live listener registered for `day`, in
    /// registration order. Returns how many listeners were called.
    pub fn emit(&self, day: DayId, snapshot: &DaySnapshot) -> usize {
        let Some(registered) = self.listeners.get(&day) else {
            return 0;
        };
        let live: Vec<Listener> = registered.iter().filter_map(Weak::upgrade).collect();
        for listener in &live {
            listener(snapshot);
        }
        trace!(%day, listeners = live.len(), timed = snapshot.timed.len(), "Emitted snapshot");
        live.len()
    }
}
