//! Section navigation controller for the pitch page.
//!
//! Tracks which page section is in view while the user scrolls, drives the
//! navigation bar's highlight and background treatment, and jumps to a section
//! on a navigation click with an immediate highlight update. Page geometry is
//! supplied by the host through the traits in [`geometry`], so the controller
//! runs without a real rendering environment.

pub mod config;
pub mod controller;
mod error;
pub mod events;
pub mod geometry;
/// Rendered HTML fragments
pub mod html;
pub mod navbar;
pub mod resolve;
pub mod section;
pub mod state;
/// Single-writer task for concurrent hosts
pub mod task;
pub mod telemetry;

pub use config::{NavConfig, ResolutionWindow, ScrollBehavior};
pub use controller::{MountedNav, SectionNavController};
pub use error::NavError;
pub use events::{ScrollEvents, ScrollSubscription};
pub use geometry::{GeometrySample, SectionElement, SectionMap, Viewport};
pub use navbar::{NavBarModel, NavButton, NavTreatment};
pub use section::{SECTION_ORDER, SectionId};
pub use state::{NavState, StateCell, WriteSource};
