use core::cell::{Cell, RefCell};
use section_nav::{
    NavConfig, SECTION_ORDER, ScrollBehavior, SectionElement, SectionId, SectionMap,
    SectionNavController, Viewport,
};
use std::rc::Rc;

/// Viewport whose offset is set directly by the test.
pub struct FakeViewport {
    scroll_y: Rc<Cell<f64>>,
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }
}

/// Element whose viewport-relative top is set directly by the test.
pub struct FakeElement {
    section: SectionId,
    top: Rc<Cell<f64>>,
    reads: Rc<Cell<u32>>,
    requests: Rc<RefCell<Vec<(SectionId, ScrollBehavior)>>>,
}

impl SectionElement for FakeElement {
    fn viewport_top(&self) -> f64 {
        self.reads.set(self.reads.get() + 1);
        self.top.get()
    }

    fn scroll_into_view(&self, behavior: ScrollBehavior) {
        self.requests.borrow_mut().push((self.section, behavior));
    }
}

/// Shared knobs behind a fake page's viewport and section elements.
#[derive(Clone)]
pub struct FakePage {
    pub scroll_y: Rc<Cell<f64>>,
    pub tops: [Rc<Cell<f64>>; 4],
    pub reads: Rc<Cell<u32>>,
    pub requests: Rc<RefCell<Vec<(SectionId, ScrollBehavior)>>>,
}

impl FakePage {
    /// Page at offset 0 with every section far below the window.
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            scroll_y: Rc::new(Cell::new(0.0)),
            tops: SECTION_ORDER.map(|section| Rc::new(Cell::new(900.0 + 1000.0 * section.index() as f64))),
            reads: Rc::new(Cell::new(0)),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_scroll(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    pub fn set_top(&self, section: SectionId, top: f64) {
        self.tops[section.index()].set(top);
    }

    pub fn element(&self, section: SectionId) -> Box<dyn SectionElement> {
        Box::new(FakeElement {
            section,
            top: Rc::clone(&self.tops[section.index()]),
            reads: Rc::clone(&self.reads),
            requests: Rc::clone(&self.requests),
        })
    }

    pub fn viewport(&self) -> FakeViewport {
        FakeViewport {
            scroll_y: Rc::clone(&self.scroll_y),
        }
    }

    /// Section map with every section attached except `missing`.
    pub fn sections_without(&self, missing: &[SectionId]) -> SectionMap {
        SECTION_ORDER
            .into_iter()
            .filter(|section| !missing.contains(section))
            .fold(SectionMap::new(), |map, section| {
                map.with(section, self.element(section))
            })
    }

    pub fn controller(&self) -> SectionNavController<FakeViewport> {
        SectionNavController::new(
            self.viewport(),
            self.sections_without(&[]),
            NavConfig::default(),
        )
    }
}
