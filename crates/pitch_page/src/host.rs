//! Headless page host.
//!
//! Owns the scroll offset, the smooth-scroll animation and the scroll event
//! registry. Section element handles read the live offset on every query, so
//! the controller always sees current geometry.

use crate::config::HostConfig;
use crate::layout::PageLayout;
use core::cell::{Cell, RefCell};
use core::time::Duration;
use log::{debug, trace};
use section_nav::{
    SECTION_ORDER, ScrollBehavior, ScrollEvents, SectionElement, SectionId, SectionMap, Viewport,
};
use std::rc::Rc;

/// Upper bound on frames [`PageHost::settle`] will run.
const MAX_SETTLE_FRAMES: u32 = 10_000;

/// A running smooth scroll.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    frame: u32,
    frames: u32,
}

impl Animation {
    /// Offset after the next frame, and whether that frame is the last.
    fn advance(&mut self) -> (f64, bool) {
        self.frame = self.frame.saturating_add(1).min(self.frames);
        let done = self.frame >= self.frames;
        if done {
            return (self.to, true);
        }
        let progress = f64::from(self.frame) / f64::from(self.frames);
        (self.from + (self.to - self.from) * ease_in_out_cubic(progress), false)
    }
}

fn ease_in_out_cubic(progress: f64) -> f64 {
    if progress < 0.5 {
        4.0 * progress * progress * progress
    } else {
        1.0 - (-2.0 * progress + 2.0).powi(3) / 2.0
    }
}

/// State shared between the host and the handles it gives out.
struct Shared {
    scroll_y: Cell<f64>,
    max_scroll: f64,
    scroll_frames: u32,
    animation: Cell<Option<Animation>>,
    /// An instant scroll moved the page; its event fires on the next tick.
    pending_event: Cell<bool>,
}

impl Shared {
    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll)
    }

    fn request_scroll(&self, target: f64, behavior: ScrollBehavior) {
        let to = self.clamp(target);
        match behavior {
            ScrollBehavior::Smooth => {
                // A new request retargets whatever is in flight.
                self.animation.set(Some(Animation {
                    from: self.scroll_y.get(),
                    to,
                    frame: 0,
                    frames: self.scroll_frames,
                }));
            }
            ScrollBehavior::Instant => {
                self.animation.set(None);
                if (self.scroll_y.get() - to).abs() > f64::EPSILON {
                    self.scroll_y.set(to);
                    self.pending_event.set(true);
                }
            }
        }
    }
}

/// Viewport handle reading the host's live scroll offset.
pub struct SimulatedViewport {
    shared: Rc<Shared>,
}

impl Viewport for SimulatedViewport {
    fn scroll_y(&self) -> f64 {
        self.shared.scroll_y.get()
    }
}

/// Section anchor handle; its viewport top follows the scroll offset.
pub struct SimulatedElement {
    section: SectionId,
    document_top: f64,
    shared: Rc<Shared>,
}

impl SectionElement for SimulatedElement {
    fn viewport_top(&self) -> f64 {
        self.document_top - self.shared.scroll_y.get()
    }

    fn scroll_into_view(&self, behavior: ScrollBehavior) {
        trace!("scroll '{}' into view ({behavior:?})", self.section);
        self.shared.request_scroll(self.document_top, behavior);
    }
}

/// Headless stand-in for the browser window showing the pitch page.
pub struct PageHost {
    layout: PageLayout,
    shared: Rc<Shared>,
    events: ScrollEvents,
    frame: Duration,
    elapsed: Duration,
}

impl PageHost {
    pub fn new(layout: PageLayout, config: &HostConfig) -> Self {
        let shared = Rc::new(Shared {
            scroll_y: Cell::new(0.0),
            max_scroll: layout.max_scroll(),
            scroll_frames: config.scroll_frames,
            animation: Cell::new(None),
            pending_event: Cell::new(false),
        });
        Self {
            layout,
            shared,
            events: ScrollEvents::new(),
            frame: config.frame(),
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub const fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[inline]
    pub const fn events(&self) -> &ScrollEvents {
        &self.events
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.shared.scroll_y.get()
    }

    /// Simulated time spent animating.
    #[inline]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.shared.animation.get().is_some() || self.shared.pending_event.get()
    }

    pub fn viewport(&self) -> SimulatedViewport {
        SimulatedViewport {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Element handles for every section present in the layout.
    pub fn sections(&self) -> SectionMap {
        let mut map = SectionMap::new();
        for section in SECTION_ORDER {
            if let Some(document_top) = self.layout.document_top(section) {
                map.insert(
                    section,
                    Box::new(SimulatedElement {
                        section,
                        document_top,
                        shared: Rc::clone(&self.shared),
                    }),
                );
            }
        }
        map
    }

    /// User scroll: jump to `offset` (clamped) and fire one scroll event if
    /// the page moved. Interrupts any smooth scroll in flight.
    ///
    /// Returns `true` if a scroll event fired.
    pub fn scroll_to(&mut self, offset: f64) -> bool {
        self.shared.animation.set(None);
        self.shared.pending_event.set(false);
        let target = self.shared.clamp(offset);
        if (self.shared.scroll_y.get() - target).abs() <= f64::EPSILON {
            return false;
        }
        self.shared.scroll_y.set(target);
        self.events.dispatch();
        true
    }

    /// Advance one animation frame, firing a scroll event if the page moved.
    ///
    /// Returns `true` if a scroll event fired.
    pub fn tick(&mut self) -> bool {
        self.elapsed += self.frame;
        if self.shared.pending_event.replace(false) {
            self.events.dispatch();
            return true;
        }
        let Some(mut animation) = self.shared.animation.get() else {
            return false;
        };
        let (offset, done) = animation.advance();
        self.shared.animation.set((!done).then_some(animation));
        let moved = (self.shared.scroll_y.get() - offset).abs() > f64::EPSILON;
        self.shared.scroll_y.set(offset);
        if moved {
            self.events.dispatch();
        }
        if done {
            debug!("smooth scroll settled at {offset}");
        }
        moved
    }

    /// Tick until no animation or pending event remains.
    ///
    /// Returns the number of frames run.
    pub fn settle(&mut self) -> u32 {
        let mut frames = 0;
        while self.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.tick();
            frames += 1;
        }
        frames
    }
}
