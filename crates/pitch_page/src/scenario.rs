//! Scripted interaction scenarios.
//!
//! A scenario is a JSON document listing user actions (scrolls, clicks,
//! animation frames) and expectations on the navigation state. Running one
//! mounts a controller on a [`PageHost`] and records the state after each step.

use crate::config::HostConfig;
use crate::host::{PageHost, SimulatedViewport};
use crate::layout::PageLayout;
use anyhow::{Context as _, Result, anyhow};
use log::{info, warn};
use section_nav::telemetry::{NavCounters, maybe_emit};
use section_nav::{MountedNav, NavConfig, NavState, SectionId, SectionNavController};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted action or check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// User scroll to an absolute offset.
    ScrollTo(f64),
    /// Click the navigation button with this label.
    Click(String),
    /// Navigate by section identifier token.
    Navigate(String),
    /// Advance this many animation frames.
    Frames(u32),
    /// Run animation frames until the page is idle.
    Settle,
    /// Tear the controller down and mount it again.
    Remount,
    /// Check the navigation state.
    Expect(Expectation),
}

/// Conditions checked by [`Step::Expect`]. Absent fields are not checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub active: Option<SectionId>,
    pub scrolled: Option<bool>,
    pub scroll_y: Option<f64>,
}

/// A page layout plus the steps to run against it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub layout: PageLayout,
    pub steps: Vec<Step>,
}

/// State observed after one step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub step: Step,
    pub state: NavState,
    pub scroll_y: f64,
}

/// Everything observed while running a scenario.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<StepOutcome>,
    /// Failed expectations and rejected actions, one message each.
    pub failures: Vec<String>,
    pub counters: NavCounters,
}

impl RunReport {
    #[inline]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// State after the last step, if any step ran.
    pub fn final_state(&self) -> Option<NavState> {
        self.outcomes.last().map(|outcome| outcome.state)
    }
}

impl Scenario {
    /// Read a scenario from a JSON file.
    ///
    /// # Errors
    /// Fails if the file cannot be read, is not valid scenario JSON, or
    /// describes an invalid layout.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    /// Fails on malformed JSON or an invalid layout.
    pub fn from_json(raw: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(raw)?;
        scenario.layout.validate()?;
        Ok(scenario)
    }

    /// The built-in tour: scroll into the architecture section, jump back to
    /// the challenge, let the animation settle, then visit the impact section.
    pub fn tour() -> Self {
        let expect = |active: SectionId, scrolled: bool| {
            Step::Expect(Expectation {
                active: Some(active),
                scrolled: Some(scrolled),
                scroll_y: None,
            })
        };
        Self {
            layout: PageLayout::default(),
            steps: vec![
                expect(SectionId::Problem, false),
                Step::ScrollTo(2480.0),
                expect(SectionId::Technical, true),
                Step::Click(String::from("The Challenge")),
                expect(SectionId::Problem, true),
                Step::Settle,
                expect(SectionId::Problem, true),
                Step::Click(String::from("Impact")),
                Step::Settle,
                expect(SectionId::Value, true),
                Step::ScrollTo(0.0),
                expect(SectionId::Value, false),
            ],
        }
    }

    /// Mount a controller on a fresh host and run every step.
    ///
    /// Expectation mismatches and rejected clicks are collected into the
    /// report rather than aborting the run.
    ///
    /// # Errors
    /// Fails only if the controller cannot be recovered for a remount.
    pub fn run(&self, config: &HostConfig) -> Result<RunReport> {
        let mut host = PageHost::new(self.layout.clone(), config);
        let controller =
            SectionNavController::new(host.viewport(), host.sections(), NavConfig::default());
        let mut mounted = controller.mount(host.events());
        let mut report = RunReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            mounted = apply_step(&mut host, mounted, step, index, &mut report)?;
            let state = mounted.state();
            info!(
                "step {index} {step:?}: active={} scrolled={} y={}",
                state.active,
                state.scrolled,
                host.scroll_y()
            );
            report.outcomes.push(StepOutcome {
                index,
                step: step.clone(),
                state,
                scroll_y: host.scroll_y(),
            });
        }

        report.counters = mounted.counters();
        maybe_emit(config.telemetry_enabled, &report.counters.to_json());
        info!("nav bar: {}", mounted.navbar().render());
        info!("simulated animation time: {:?}", host.elapsed());
        Ok(report)
    }
}

fn apply_step(
    host: &mut PageHost,
    mounted: MountedNav<SimulatedViewport>,
    step: &Step,
    index: usize,
    report: &mut RunReport,
) -> Result<MountedNav<SimulatedViewport>> {
    match step {
        Step::ScrollTo(offset) => {
            host.scroll_to(*offset);
        }
        Step::Click(label) => {
            if let Err(err) = mounted.navigate_to_label(label) {
                warn!("step {index}: {err}");
                report.failures.push(format!("step {index}: {err}"));
            }
        }
        Step::Navigate(token) => {
            if let Err(err) = mounted.navigate_to_id(token) {
                warn!("step {index}: {err}");
                report.failures.push(format!("step {index}: {err}"));
            }
        }
        Step::Frames(count) => {
            for _ in 0..*count {
                host.tick();
            }
        }
        Step::Settle => {
            host.settle();
        }
        Step::Remount => {
            let controller = mounted
                .unmount()
                .ok_or_else(|| anyhow!("step {index}: controller still in use during remount"))?;
            return Ok(controller.mount(host.events()));
        }
        Step::Expect(expectation) => {
            check(expectation, mounted.state(), host.scroll_y(), index, report);
        }
    }
    Ok(mounted)
}

fn check(
    expectation: &Expectation,
    state: NavState,
    scroll_y: f64,
    index: usize,
    report: &mut RunReport,
) {
    if let Some(active) = expectation.active {
        if active != state.active {
            report.failures.push(format!(
                "step {index}: expected active '{active}', found '{}'",
                state.active
            ));
        }
    }
    if let Some(scrolled) = expectation.scrolled {
        if scrolled != state.scrolled {
            report.failures.push(format!(
                "step {index}: expected scrolled={scrolled}, found {}",
                state.scrolled
            ));
        }
    }
    if let Some(expected_y) = expectation.scroll_y {
        if (expected_y - scroll_y).abs() > 0.5 {
            report.failures.push(format!(
                "step {index}: expected scroll_y={expected_y}, found {scroll_y}"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_passes() {
        let report = Scenario::tour().run(&HostConfig::default());
        let Ok(report) = report else {
            unreachable!("tour never remounts");
        };
        assert!(report.passed(), "{:?}", report.failures);
        assert_eq!(
            report.final_state(),
            Some(NavState {
                active: SectionId::Value,
                scrolled: false
            })
        );
        assert_eq!(report.counters.navigations, 2);
    }

    #[test]
    fn failed_expectation_is_reported() {
        let scenario = Scenario {
            layout: PageLayout::default(),
            steps: vec![Step::Expect(Expectation {
                active: Some(SectionId::Value),
                ..Expectation::default()
            })],
        };
        let report = scenario.run(&HostConfig::default()).unwrap_or_default();
        assert_eq!(
            report.failures,
            vec![String::from("step 0: expected active 'value', found 'problem'")]
        );
    }

    #[test]
    fn steps_parse_from_json() {
        let raw = r#"{"steps": [
            {"scroll_to": 1200.5},
            {"click": "The Vision"},
            {"navigate": "technical"},
            {"frames": 3},
            "settle",
            "remount",
            {"expect": {"active": "future"}}
        ]}"#;
        let scenario = Scenario::from_json(raw).unwrap_or_default();
        assert_eq!(scenario.layout, PageLayout::default());
        assert_eq!(
            scenario.steps,
            vec![
                Step::ScrollTo(1200.5),
                Step::Click(String::from("The Vision")),
                Step::Navigate(String::from("technical")),
                Step::Frames(3),
                Step::Settle,
                Step::Remount,
                Step::Expect(Expectation {
                    active: Some(SectionId::Future),
                    ..Expectation::default()
                }),
            ]
        );
    }
}
