// Limits and playback settings

use std::time::Duration;

/// Most nodes a list visualizer will draw
pub const LIST_MAX_LEN: usize = 8;

/// Longest bracket string accepted
pub const BRACKETS_MAX_LEN: usize = 20;

/// Longest symbol string for the unique-run window
pub const SYMBOLS_MAX_LEN: usize = 16;

/// Most values for the sum window
pub const WINDOW_MAX_LEN: usize = 12;

/// Sum window values are positive so the window sum is monotone in `right`
pub const SUM_VALUE_RANGE: (i64, i64) = (1, 99);

/// Allowed sum window targets
pub const TARGET_RANGE: (i64, i64) = (1, 999);

pub const DEFAULT_TARGET: i64 = 7;

/// Auto-advance interval at speed 1.0
pub const BASE_INTERVAL: Duration = Duration::from_secs(1);

/// How long the UI waits for a key before ticking the controller
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Speed range reachable with the `+`/`-` keys
pub const MIN_UI_SPEED: f64 = 0.25;
pub const MAX_UI_SPEED: f64 = 8.0;

/// Timing knobs for the playback controller and the UI loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    pub base_interval: Duration,
    pub poll_interval: Duration,
    pub initial_speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            base_interval: BASE_INTERVAL,
            poll_interval: POLL_INTERVAL,
            initial_speed: 1.0,
        }
    }
}
