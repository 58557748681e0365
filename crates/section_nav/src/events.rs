//! Scroll event registry.
//!
//! Hosts own a [`ScrollEvents`] and call [`ScrollEvents::dispatch`] once per
//! native scroll event. Subscribers get a [`ScrollSubscription`] guard; the
//! listener stays registered exactly as long as the guard lives.

use core::cell::RefCell;
use log::trace;
use std::rc::{Rc, Weak};

/// Type-erased scroll listener.
pub type ScrollListener = Rc<dyn Fn()>;

/// Identifier assigned to a registered listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, ScrollListener)>,
    removed_total: u64,
}

impl Registry {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(registered, _)| *registered == id)
    }
}

/// Registry of scroll listeners for one viewport.
///
/// Cloning yields another handle onto the same registry.
#[derive(Clone, Default)]
pub struct ScrollEvents {
    registry: Rc<RefCell<Registry>>,
}

impl ScrollEvents {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is removed when the returned guard drops.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn subscribe<F>(&self, listener: F) -> ScrollSubscription
    where
        F: Fn() + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id = registry.next_id.saturating_add(1);
        registry.listeners.push((id, Rc::new(listener)));
        trace!("scroll listener {id:?} registered");
        ScrollSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver one scroll event to every registered listener, in registration
    /// order. Listeners removed while the event is in flight are not invoked.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self) -> usize {
        let snapshot: Vec<(ListenerId, ScrollListener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        let mut invoked = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            listener();
            invoked += 1;
        }
        invoked
    }

    /// Number of currently registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Total number of listeners removed since creation.
    #[inline]
    pub fn removed_total(&self) -> u64 {
        self.registry.borrow().removed_total
    }
}

/// RAII guard for a registered scroll listener.
/// Removes the listener from its registry on drop.
pub struct ScrollSubscription {
    /// Listener this guard owns.
    id: ListenerId,
    /// Registry the listener lives in; weak so the host may drop it first.
    registry: Weak<RefCell<Registry>>,
}

impl ScrollSubscription {
    #[inline]
    pub const fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != self.id);
        if registry.listeners.len() < before {
            registry.removed_total = registry.removed_total.saturating_add(1);
            trace!("scroll listener {:?} removed", self.id);
        }
    }
}
