//! The section navigation controller.
//!
//! [`SectionNavController`] holds the state and the two operations. Mounting it
//! on a [`ScrollEvents`] registry yields a [`MountedNav`], which owns the one
//! scroll listener for that mount and releases it when dropped.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::events::{ListenerId, ScrollEvents, ScrollSubscription};
use crate::geometry::{SectionMap, Viewport};
use crate::navbar::NavBarModel;
use crate::resolve::{is_past_threshold, resolve_active};
use crate::section::SectionId;
use crate::state::{NavState, StateCell};
use crate::telemetry::NavCounters;
use core::cell::RefCell;
use log::{debug, info, warn};
use std::rc::Rc;

/// Scroll-spy and scroll-to-section logic for one page.
pub struct SectionNavController<V: Viewport> {
    /// Viewport providing the live scroll offset.
    viewport: V,
    /// Element handle per section.
    sections: SectionMap,
    /// Threshold, window and scroll behavior.
    config: NavConfig,
    /// Active section and scrolled flag.
    cell: StateCell,
    /// Activity counters.
    counters: NavCounters,
}

impl<V: Viewport> SectionNavController<V> {
    /// Create a controller in its initial state: first section active, not scrolled.
    #[must_use]
    pub fn new(viewport: V, sections: SectionMap, config: NavConfig) -> Self {
        Self {
            viewport,
            sections,
            config,
            cell: StateCell::new(),
            counters: NavCounters::default(),
        }
    }

    #[inline]
    pub const fn state(&self) -> NavState {
        self.cell.state()
    }

    #[inline]
    pub const fn cell(&self) -> &StateCell {
        &self.cell
    }

    #[inline]
    pub const fn counters(&self) -> NavCounters {
        self.counters
    }

    #[inline]
    pub const fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Section elements, for hosts that attach or detach anchors at runtime.
    #[inline]
    pub fn sections_mut(&mut self) -> &mut SectionMap {
        &mut self.sections
    }

    /// Navigation bar model for the current state.
    #[inline]
    pub fn navbar(&self) -> NavBarModel {
        NavBarModel::from_state(&self.state())
    }

    /// Handle one scroll event.
    ///
    /// Updates the scrolled flag from the live offset, then resolves the first
    /// section (in declared order) whose live top sits inside the resolution
    /// window. With no match the active section is left as it was.
    pub fn on_scroll(&mut self) -> NavState {
        self.counters.scroll_events = self.counters.scroll_events.saturating_add(1);
        let scroll_y = self.viewport.scroll_y();
        let scrolled = is_past_threshold(scroll_y, self.config.scroll_threshold_px);

        let sections = &self.sections;
        let resolved = resolve_active(self.config.window, |section| {
            sections.get(section).map(|element| element.viewport_top())
        });

        if resolved.is_some() {
            self.counters.resolutions_matched = self.counters.resolutions_matched.saturating_add(1);
        } else {
            self.counters.resolutions_missed = self.counters.resolutions_missed.saturating_add(1);
        }
        if self.cell.write_from_scroll(scrolled, resolved) {
            self.counters.threshold_flips = self.counters.threshold_flips.saturating_add(1);
        }

        let state = self.cell.state();
        debug!(
            "scroll y={scroll_y} scrolled={} resolved={resolved:?} active={}",
            state.scrolled, state.active
        );
        state
    }

    /// Jump to a section.
    ///
    /// The active section is written immediately, before the scroll starts.
    /// The scroll itself is fire-and-forget. A section with no attached
    /// element is ignored: no state change, no scroll.
    pub fn navigate_to(&mut self, section: SectionId) {
        let Some(element) = self.sections.get(section) else {
            warn!("navigation to '{section}' ignored: no element attached");
            self.counters.navigations_ignored = self.counters.navigations_ignored.saturating_add(1);
            return;
        };
        self.cell.write_from_navigation(section);
        self.counters.navigations = self.counters.navigations.saturating_add(1);
        info!("navigating to '{section}' ({:?})", self.config.behavior);
        element.scroll_into_view(self.config.behavior);
    }

    /// [`SectionNavController::navigate_to`] by identifier token.
    ///
    /// # Errors
    /// Returns [`NavError::UnknownSection`] for a token outside the section set;
    /// state is left untouched.
    pub fn navigate_to_id(&mut self, token: &str) -> Result<(), NavError> {
        let section = token.parse::<SectionId>()?;
        self.navigate_to(section);
        Ok(())
    }

    /// [`SectionNavController::navigate_to`] by navigation button label.
    ///
    /// # Errors
    /// Returns [`NavError::UnknownLabel`] if no button carries `label`.
    pub fn navigate_to_label(&mut self, label: &str) -> Result<(), NavError> {
        let section = SectionId::from_label(label)?;
        self.navigate_to(section);
        Ok(())
    }
}

impl<V: Viewport + 'static> SectionNavController<V> {
    /// Subscribe this controller to `events`.
    ///
    /// The returned [`MountedNav`] owns the only listener for this mount.
    pub fn mount(self, events: &ScrollEvents) -> MountedNav<V> {
        let core = Rc::new(RefCell::new(self));
        let weak = Rc::downgrade(&core);
        let subscription = events.subscribe(move || {
            let Some(core) = weak.upgrade() else {
                return;
            };
            let Ok(mut controller) = core.try_borrow_mut() else {
                warn!("scroll event delivered while controller busy; skipped");
                return;
            };
            controller.on_scroll();
        });
        info!("section navigation mounted (listener {:?})", subscription.id());
        MountedNav { subscription, core }
    }
}

/// A controller subscribed to a scroll event registry.
///
/// Dropping it removes the listener. [`MountedNav::unmount`] does the same
/// and hands the controller back for a later re-mount.
pub struct MountedNav<V: Viewport + 'static> {
    /// Listener guard; released before the controller.
    subscription: ScrollSubscription,
    /// Controller shared with the listener through a weak reference.
    core: Rc<RefCell<SectionNavController<V>>>,
}

impl<V: Viewport + 'static> MountedNav<V> {
    #[inline]
    pub fn listener_id(&self) -> ListenerId {
        self.subscription.id()
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.core.borrow().state()
    }

    #[inline]
    pub fn counters(&self) -> NavCounters {
        self.core.borrow().counters()
    }

    #[inline]
    pub fn navbar(&self) -> NavBarModel {
        self.core.borrow().navbar()
    }

    /// Run `func` with exclusive access to the controller.
    pub fn with_controller<R>(&self, func: impl FnOnce(&mut SectionNavController<V>) -> R) -> R {
        func(&mut self.core.borrow_mut())
    }

    /// See [`SectionNavController::navigate_to`].
    pub fn navigate_to(&self, section: SectionId) {
        self.core.borrow_mut().navigate_to(section);
    }

    /// See [`SectionNavController::navigate_to_id`].
    ///
    /// # Errors
    /// Returns [`NavError::UnknownSection`] for an unknown token.
    pub fn navigate_to_id(&self, token: &str) -> Result<(), NavError> {
        self.core.borrow_mut().navigate_to_id(token)
    }

    /// See [`SectionNavController::navigate_to_label`].
    ///
    /// # Errors
    /// Returns [`NavError::UnknownLabel`] for an unknown label.
    pub fn navigate_to_label(&self, label: &str) -> Result<(), NavError> {
        self.core.borrow_mut().navigate_to_label(label)
    }

    /// Remove the listener and return the controller with its state intact.
    ///
    /// Returns `None` only if called from inside a scroll dispatch that is
    /// still using the controller; the listener is removed either way.
    pub fn unmount(self) -> Option<SectionNavController<V>> {
        let Self { subscription, core } = self;
        let listener = subscription.id();
        drop(subscription);
        info!("section navigation unmounted (listener {listener:?})");
        Rc::try_unwrap(core).ok().map(RefCell::into_inner)
    }
}
