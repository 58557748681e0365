//! Configuration for the section navigation controller.
//!
//! The controller never reads the environment. Hosts construct a `NavConfig`
//! programmatically; [`NavConfig::default`] carries the page's fixed values.

/// Default scroll offset (px) above which the page counts as scrolled.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Default lower edge (px, viewport-relative) of the resolution window.
pub const DEFAULT_WINDOW_TOP_PX: f64 = 0.0;
/// Default upper edge (px, viewport-relative) of the resolution window.
pub const DEFAULT_WINDOW_BOTTOM_PX: f64 = 300.0;

/// How a programmatic scroll should move the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate towards the target over several frames.
    #[default]
    Smooth,
    /// Jump to the target in one step.
    Instant,
}

/// Viewport-relative vertical range a section top must fall in to count as
/// "in view". Both edges are inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolutionWindow {
    /// Inclusive lower edge.
    pub top: f64,
    /// Inclusive upper edge.
    pub bottom: f64,
}

impl ResolutionWindow {
    #[inline]
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a viewport-relative top offset falls inside the window.
    #[inline]
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset <= self.bottom
    }
}

impl Default for ResolutionWindow {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_TOP_PX, DEFAULT_WINDOW_BOTTOM_PX)
    }
}

/// Runtime configuration for a mounted controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavConfig {
    /// Offset (px) the scroll position must exceed for the scrolled flag.
    pub scroll_threshold_px: f64,
    /// Resolution window used by scroll resolution.
    pub window: ResolutionWindow,
    /// Behavior requested from section elements on navigation.
    pub behavior: ScrollBehavior,
}

impl NavConfig {
    /// Construct a new `NavConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `scroll_threshold_px` - Offset the page must exceed to count as scrolled
    /// * `window` - Viewport-relative range used to resolve the active section
    /// * `behavior` - Scroll behavior for navigation clicks
    #[inline]
    #[must_use]
    pub const fn new(
        scroll_threshold_px: f64,
        window: ResolutionWindow,
        behavior: ScrollBehavior,
    ) -> Self {
        Self {
            scroll_threshold_px,
            window,
            behavior,
        }
    }

    /// Same configuration with a different scroll behavior.
    #[inline]
    #[must_use]
    pub const fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl Default for NavConfig {
    #[inline]
    fn default() -> Self {
        Self::new(
            DEFAULT_SCROLL_THRESHOLD_PX,
            ResolutionWindow::default(),
            ScrollBehavior::Smooth,
        )
    }
}
