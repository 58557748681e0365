use section_nav::{NavError, NavState, ScrollBehavior, SectionId, WriteSource};

mod common;

use common::FakePage;

/// Initial state, scroll into `technical`, then click "The Challenge".
#[test]
fn scroll_then_click_end_to_end() {
    let page = FakePage::new();
    let mut nav = page.controller();
    assert_eq!(
        nav.state(),
        NavState {
            active: SectionId::Problem,
            scrolled: false
        }
    );

    page.set_scroll(1000.0);
    page.set_top(SectionId::Problem, -1400.0);
    page.set_top(SectionId::Future, -600.0);
    page.set_top(SectionId::Technical, 120.0);
    page.set_top(SectionId::Value, 1500.0);
    let state = nav.on_scroll();
    assert_eq!(state.active, SectionId::Technical);
    assert!(state.scrolled);

    assert!(nav.navigate_to_label("The Challenge").is_ok());
    assert_eq!(nav.state().active, SectionId::Problem);
    assert!(nav.state().scrolled, "navigation does not touch the scrolled flag");
    assert_eq!(
        page.requests.borrow().as_slice(),
        &[(SectionId::Problem, ScrollBehavior::Smooth)]
    );
}

#[test]
fn threshold_boundary() {
    let page = FakePage::new();
    let mut nav = page.controller();

    page.set_scroll(50.0);
    assert!(!nav.on_scroll().scrolled);
    page.set_scroll(51.0);
    assert!(nav.on_scroll().scrolled);
    page.set_scroll(0.0);
    assert!(!nav.on_scroll().scrolled);
    assert_eq!(nav.counters().threshold_flips, 2);
}

#[test]
fn earlier_section_wins_when_two_qualify() {
    let page = FakePage::new();
    let mut nav = page.controller();
    page.set_top(SectionId::Future, 250.0);
    page.set_top(SectionId::Technical, 10.0);
    assert_eq!(nav.on_scroll().active, SectionId::Future);
}

#[test]
fn dead_zone_keeps_previous_section() {
    let page = FakePage::new();
    let mut nav = page.controller();
    page.set_top(SectionId::Value, 20.0);
    assert_eq!(nav.on_scroll().active, SectionId::Value);

    page.set_top(SectionId::Value, -40.0);
    let before = nav.state();
    let after = nav.on_scroll();
    assert_eq!(after, before);
    assert_eq!(nav.counters().resolutions_missed, 1);
    assert_eq!(nav.cell().source(), WriteSource::Scroll);
}

#[test]
fn geometry_is_read_live_on_every_event() {
    let page = FakePage::new();
    let mut nav = page.controller();
    page.set_top(SectionId::Problem, 0.0);
    nav.on_scroll();
    assert_eq!(page.reads.get(), 1, "first section matched, lookup stops");

    page.set_top(SectionId::Problem, -800.0);
    page.set_top(SectionId::Future, 300.0);
    assert_eq!(nav.on_scroll().active, SectionId::Future);
    assert_eq!(page.reads.get(), 3);
}

#[test]
fn navigation_updates_before_scroll_settles() {
    let page = FakePage::new();
    let mut nav = page.controller();
    nav.navigate_to(SectionId::Future);

    // No scroll event has happened; geometry still says nothing is in view.
    assert_eq!(nav.state().active, SectionId::Future);
    assert_eq!(nav.cell().source(), WriteSource::Navigation);
    assert_eq!(page.requests.borrow().len(), 1);

    // A later scroll event re-resolves from geometry; last write wins.
    page.set_top(SectionId::Problem, 100.0);
    assert_eq!(nav.on_scroll().active, SectionId::Problem);
}

#[test]
fn navigation_to_detached_section_is_ignored() {
    let page = FakePage::new();
    let mut nav = page.controller();
    assert!(nav.sections_mut().remove(SectionId::Value).is_some());

    nav.navigate_to(SectionId::Value);
    assert_eq!(nav.state().active, SectionId::Problem);
    assert!(page.requests.borrow().is_empty());
    assert_eq!(nav.counters().navigations_ignored, 1);
    assert_eq!(nav.counters().navigations, 0);
}

#[test]
fn detached_sections_never_resolve() {
    let page = FakePage::new();
    let mut nav = section_nav::SectionNavController::new(
        page.viewport(),
        page.sections_without(&[SectionId::Problem]),
        section_nav::NavConfig::default(),
    );
    page.set_top(SectionId::Problem, 10.0);
    page.set_top(SectionId::Technical, 200.0);
    assert_eq!(nav.on_scroll().active, SectionId::Technical);
}

#[test]
fn unknown_identifiers_are_rejected_without_side_effects() {
    let page = FakePage::new();
    let mut nav = page.controller();
    nav.navigate_to(SectionId::Technical);

    assert_eq!(
        nav.navigate_to_id("pricing"),
        Err(NavError::UnknownSection(String::from("pricing")))
    );
    assert_eq!(
        nav.navigate_to_label("Pricing"),
        Err(NavError::UnknownLabel(String::from("Pricing")))
    );
    assert_eq!(nav.state().active, SectionId::Technical);
    assert_eq!(page.requests.borrow().len(), 1);

    assert!(nav.navigate_to_id("value").is_ok());
    assert_eq!(nav.state().active, SectionId::Value);
}

#[test]
fn instant_behavior_is_forwarded() {
    let page = FakePage::new();
    let mut nav = section_nav::SectionNavController::new(
        page.viewport(),
        page.sections_without(&[]),
        section_nav::NavConfig::default().with_behavior(ScrollBehavior::Instant),
    );
    assert_eq!(nav.config().behavior, ScrollBehavior::Instant);
    nav.navigate_to(SectionId::Future);
    assert_eq!(
        page.requests.borrow().as_slice(),
        &[(SectionId::Future, ScrollBehavior::Instant)]
    );
}

#[test]
fn navbar_reflects_controller_state() {
    let page = FakePage::new();
    let mut nav = page.controller();
    page.set_scroll(400.0);
    page.set_top(SectionId::Future, 60.0);
    nav.on_scroll();
    let model = nav.navbar();
    assert_eq!(model.selected(), Some(SectionId::Future));
    assert_eq!(model.treatment, section_nav::NavTreatment::Opaque);
}
