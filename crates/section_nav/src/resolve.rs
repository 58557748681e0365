//! Active-section resolution.
//!
//! Both functions are pure: they take the current offset or a per-section top
//! lookup and return a decision, leaving state writes to the caller.

use crate::config::ResolutionWindow;
use crate::section::{SECTION_ORDER, SectionId};

/// Whether the page counts as scrolled. Strictly greater than the threshold.
#[inline]
pub fn is_past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// First section, in declared order, whose top lies inside `window`.
///
/// `top_of` is called lazily per section and stops at the first match.
/// Sections for which it returns `None` never qualify.
pub fn resolve_active<F>(window: ResolutionWindow, mut top_of: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<f64>,
{
    SECTION_ORDER
        .into_iter()
        .find(|section| top_of(*section).is_some_and(|top| window.contains(top)))
}
