use log::info;
use serde::Serialize;

/// Counters for scroll resolution and navigation activity.
/// Kept independent of the controller internals; callers pass snapshots in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavCounters {
    pub scroll_events: u64,
    pub resolutions_matched: u64,
    pub resolutions_missed: u64,
    pub threshold_flips: u64,
    pub navigations: u64,
    pub navigations_ignored: u64,
}

impl NavCounters {
    /// Render the counters as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

pub fn maybe_emit(enabled: bool, json_line: &str) {
    if enabled {
        info!(target: "section_nav::telemetry", "{json_line}");
    }
}
