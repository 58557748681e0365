//! Single-writer navigation task for hosts with concurrent event sources.
//!
//! The task exclusively owns a [`StateCell`]. Producers on any thread send
//! commands through a [`NavHandle`]; the task applies them in arrival order
//! and publishes each resulting [`NavState`] on a watch channel. Scroll
//! commands carry geometry sampled at event time, since element handles stay
//! with the host.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::geometry::GeometrySample;
use crate::resolve::{is_past_threshold, resolve_active};
use crate::section::SectionId;
use crate::state::{NavState, StateCell};
use log::{debug, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// A write request for the navigation task.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavCommand {
    /// A native scroll event with its live geometry.
    Scroll {
        scroll_y: f64,
        sample: GeometrySample,
    },
    /// A navigation click. The host issues the actual scroll itself.
    Navigate(SectionId),
}

/// Cloneable producer handle onto a running navigation task.
#[derive(Clone)]
pub struct NavHandle {
    commands: mpsc::UnboundedSender<NavCommand>,
    state: watch::Receiver<NavState>,
}

impl NavHandle {
    /// Queue a scroll event.
    ///
    /// # Errors
    /// Returns [`NavError::ControllerGone`] if the task has stopped.
    pub fn scroll(&self, scroll_y: f64, sample: GeometrySample) -> Result<(), NavError> {
        self.send(NavCommand::Scroll { scroll_y, sample })
    }

    /// Queue a navigation click.
    ///
    /// # Errors
    /// Returns [`NavError::ControllerGone`] if the task has stopped.
    pub fn navigate(&self, section: SectionId) -> Result<(), NavError> {
        self.send(NavCommand::Navigate(section))
    }

    /// Queue an arbitrary command.
    ///
    /// # Errors
    /// Returns [`NavError::ControllerGone`] if the task has stopped.
    pub fn send(&self, command: NavCommand) -> Result<(), NavError> {
        self.commands
            .send(command)
            .map_err(|_| NavError::ControllerGone)
    }

    /// Latest published state.
    #[inline]
    pub fn state(&self) -> NavState {
        *self.state.borrow()
    }

    /// A receiver that is notified on every published state.
    #[inline]
    pub fn subscribe(&self) -> watch::Receiver<NavState> {
        self.state.clone()
    }
}

/// Start the navigation task on the current tokio runtime.
///
/// The task runs until every [`NavHandle`] clone is dropped, then yields its
/// final [`StateCell`].
pub fn spawn_nav_task(config: NavConfig) -> (NavHandle, JoinHandle<StateCell>) {
    let (commands, mut inbox) = mpsc::unbounded_channel();
    let (publisher, state) = watch::channel(NavState::default());
    let join = tokio::spawn(async move {
        let mut cell = StateCell::new();
        while let Some(command) = inbox.recv().await {
            apply(&mut cell, &config, command);
            publisher.send_replace(cell.state());
        }
        info!("navigation task stopped at revision {}", cell.revision());
        cell
    });
    (NavHandle { commands, state }, join)
}

/// Apply one command with the same rules as the single-threaded controller.
pub fn apply(cell: &mut StateCell, config: &NavConfig, command: NavCommand) {
    match command {
        NavCommand::Scroll { scroll_y, sample } => {
            let scrolled = is_past_threshold(scroll_y, config.scroll_threshold_px);
            let resolved = resolve_active(config.window, |section| sample.top(section));
            cell.write_from_scroll(scrolled, resolved);
            debug!("task scroll y={scroll_y} resolved={resolved:?}");
        }
        NavCommand::Navigate(section) => {
            cell.write_from_navigation(section);
            debug!("task navigate {section}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WriteSource;

    fn technical_in_view() -> GeometrySample {
        GeometrySample::from_tops([
            (SectionId::Problem, -1400.0),
            (SectionId::Future, -500.0),
            (SectionId::Technical, 120.0),
            (SectionId::Value, 1500.0),
        ])
    }

    #[tokio::test]
    async fn commands_apply_in_send_order() {
        let (handle, join) = spawn_nav_task(NavConfig::default());
        handle.scroll(1000.0, technical_in_view()).ok();
        handle.navigate(SectionId::Problem).ok();
        drop(handle);

        let cell = join.await.unwrap_or_default();
        assert_eq!(
            cell.state(),
            NavState {
                active: SectionId::Problem,
                scrolled: true
            }
        );
        assert_eq!(cell.source(), WriteSource::Navigation);
        assert_eq!(cell.revision(), 2);
    }

    #[tokio::test]
    async fn watchers_see_published_state() {
        let (handle, _join) = spawn_nav_task(NavConfig::default());
        let mut watcher = handle.subscribe();
        handle.scroll(1000.0, technical_in_view()).ok();
        assert!(watcher.changed().await.is_ok());
        assert_eq!(watcher.borrow_and_update().active, SectionId::Technical);
        assert!(handle.state().scrolled);
    }

    #[tokio::test]
    async fn producers_on_other_tasks_share_the_writer() {
        let (handle, join) = spawn_nav_task(NavConfig::default());
        let producer = handle.clone();
        let clicks = tokio::spawn(async move {
            for section in [SectionId::Future, SectionId::Value] {
                producer.navigate(section).ok();
            }
        });
        assert!(clicks.await.is_ok());
        drop(handle);
        let cell = join.await.unwrap_or_default();
        assert_eq!(cell.state().active, SectionId::Value);
        assert_eq!(cell.revision(), 2);
    }

    #[tokio::test]
    async fn send_after_shutdown_reports_gone() {
        let (handle, join) = spawn_nav_task(NavConfig::default());
        join.abort();
        assert!(join.await.is_err());
        assert_eq!(
            handle.navigate(SectionId::Future),
            Err(NavError::ControllerGone)
        );
    }
}
