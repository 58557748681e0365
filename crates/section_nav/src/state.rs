//! Navigation state cell.
//!
//! Two independent write paths feed the active section: scroll resolution and
//! user navigation. Neither coordinates with the other; the most recent write
//! wins. Every write bumps the revision so ordering stays observable.

use crate::section::SectionId;
use serde::Serialize;

/// Snapshot consumed by the navigation bar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    /// Section whose button renders as selected.
    pub active: SectionId,
    /// Whether the page is scrolled past the threshold.
    pub scrolled: bool,
}

/// Which path produced the latest active-section write.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteSource {
    /// No write has happened since construction.
    #[default]
    Initial,
    /// Scroll resolution found a section in the window.
    Scroll,
    /// A navigation click selected the section.
    Navigation,
}

/// Owner of the active section and scrolled flag.
#[derive(Clone, Debug, Default)]
pub struct StateCell {
    state: NavState,
    source: WriteSource,
    revision: u64,
}

impl StateCell {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn state(&self) -> NavState {
        self.state
    }

    #[inline]
    pub const fn source(&self) -> WriteSource {
        self.source
    }

    #[inline]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Scroll path: store the threshold flag and, if resolution matched, the
    /// active section. A `None` resolution leaves the active section as is.
    ///
    /// Returns `true` if the threshold flag flipped.
    pub fn write_from_scroll(&mut self, scrolled: bool, resolved: Option<SectionId>) -> bool {
        let flipped = self.state.scrolled != scrolled;
        self.state.scrolled = scrolled;
        if let Some(section) = resolved {
            self.state.active = section;
            self.source = WriteSource::Scroll;
        }
        self.revision = self.revision.saturating_add(1);
        flipped
    }

    /// Navigation path: optimistic write of the clicked section.
    pub fn write_from_navigation(&mut self, section: SectionId) {
        self.state.active = section;
        self.source = WriteSource::Navigation;
        self.revision = self.revision.saturating_add(1);
    }
}
