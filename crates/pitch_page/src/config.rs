//! Configuration settings for the headless pitch page host.
//!
//! Controls animation frame timing, smooth-scroll length and telemetry output.
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use core::time::Duration;
use std::env;

/// Default animation frame step in milliseconds.
pub const DEFAULT_FRAME_MS: u64 = 16;
/// Default number of frames in one smooth scroll.
pub const DEFAULT_SCROLL_FRAMES: u32 = 24;

/// Runtime configuration for the page host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Simulated time per animation frame in milliseconds
    pub frame_ms: u64,
    /// Frames a smooth scroll takes to reach its target
    pub scroll_frames: u32,
    /// Whether to emit navigation counters after a run
    pub telemetry_enabled: bool,
}

impl HostConfig {
    /// Construct a new `HostConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `frame_ms` - Frame step in milliseconds (minimum 1ms)
    /// * `scroll_frames` - Frames per smooth scroll (minimum 1)
    /// * `telemetry_enabled` - Whether to emit telemetry logs
    #[inline]
    #[must_use]
    pub const fn new(frame_ms: u64, scroll_frames: u32, telemetry_enabled: bool) -> Self {
        let frame_ms = if frame_ms < 1 { 1 } else { frame_ms };
        let scroll_frames = if scroll_frames < 1 { 1 } else { scroll_frames };
        Self {
            frame_ms,
            scroll_frames,
            telemetry_enabled,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `PITCH_FRAME_MS`: Frame step in milliseconds (default: 16)
    /// - `PITCH_SCROLL_FRAMES`: Frames per smooth scroll (default: 24)
    /// - `PITCH_TELEMETRY`: Set to "1" to enable telemetry (default: disabled)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let frame_ms = env::var("PITCH_FRAME_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FRAME_MS);
        let scroll_frames = env::var("PITCH_SCROLL_FRAMES")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(DEFAULT_SCROLL_FRAMES);
        let telemetry_enabled = env::var("PITCH_TELEMETRY").ok().as_deref() == Some("1");
        Self::new(frame_ms, scroll_frames, telemetry_enabled)
    }

    /// Get the frame step as a `Duration`.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl Default for HostConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_MS, DEFAULT_SCROLL_FRAMES, false)
    }
}
