//! Headless host for the pitch page's section navigation.
//!
//! Simulates the page document (section geometry, viewport, smooth-scroll
//! animation) and drives a [`section_nav`] controller from scripted
//! scenarios, so navigation behavior can be exercised without a browser.

pub mod config;
pub mod host;
pub mod layout;
pub mod scenario;

pub use config::HostConfig;
pub use host::{PageHost, SimulatedElement, SimulatedViewport};
pub use layout::{PageLayout, SectionBlock};
pub use scenario::{Expectation, RunReport, Scenario, Step};
