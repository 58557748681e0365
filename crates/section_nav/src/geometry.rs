//! Host-facing seams for page geometry.
//!
//! The controller never looks elements up by string. Hosts hand it a
//! [`SectionMap`] of element handles and a [`Viewport`]; every query goes
//! through these traits and reflects live layout.

use crate::config::ScrollBehavior;
use crate::section::{SECTION_ORDER, SectionId};
use std::collections::HashMap;

/// The scrolling viewport hosting the page.
pub trait Viewport {
    /// Current vertical scroll offset in px.
    fn scroll_y(&self) -> f64;
}

/// A live handle to a section's anchor element.
pub trait SectionElement {
    /// Top edge of the element relative to the viewport, in px.
    fn viewport_top(&self) -> f64;

    /// Scroll the viewport so this element's top aligns with the viewport top.
    /// Completion is not reported back.
    fn scroll_into_view(&self, behavior: ScrollBehavior);
}

/// Explicit mapping from section identifier to its element handle.
#[derive(Default)]
pub struct SectionMap {
    elements: HashMap<SectionId, Box<dyn SectionElement>>,
}

impl SectionMap {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the element for a section.
    #[inline]
    pub fn insert(&mut self, section: SectionId, element: Box<dyn SectionElement>) {
        self.elements.insert(section, element);
    }

    /// Builder-style [`SectionMap::insert`].
    #[inline]
    #[must_use]
    pub fn with(mut self, section: SectionId, element: Box<dyn SectionElement>) -> Self {
        self.insert(section, element);
        self
    }

    /// Detach a section's element, returning it if present.
    #[inline]
    pub fn remove(&mut self, section: SectionId) -> Option<Box<dyn SectionElement>> {
        self.elements.remove(&section)
    }

    #[inline]
    pub fn get(&self, section: SectionId) -> Option<&dyn SectionElement> {
        self.elements.get(&section).map(|element| &**element)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Query every attached section's live top, in declared order.
    pub fn sample(&self) -> GeometrySample {
        let mut tops = [None; SECTION_ORDER.len()];
        for section in SECTION_ORDER {
            tops[section.index()] = self.get(section).map(|element| element.viewport_top());
        }
        GeometrySample { tops }
    }
}

/// Section tops captured at a single instant, indexed by declared order.
/// `None` marks a section with no attached element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GeometrySample {
    tops: [Option<f64>; SECTION_ORDER.len()],
}

impl GeometrySample {
    /// Build a sample from explicit per-section tops.
    pub fn from_tops(entries: impl IntoIterator<Item = (SectionId, f64)>) -> Self {
        let mut tops = [None; SECTION_ORDER.len()];
        for (section, top) in entries {
            tops[section.index()] = Some(top);
        }
        Self { tops }
    }

    #[inline]
    pub fn top(&self, section: SectionId) -> Option<f64> {
        self.tops[section.index()]
    }
}
