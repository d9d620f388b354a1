//! Stopwatch and repaint timing

use std::time::Duration;

pub struct TimingConfig {
    /// Period of the presenter stopwatch. Each elapsed period adds one second.
    pub tick_period: Duration,
    /// Upper bound on how long the UI may sleep while the stopwatch runs.
    /// Keeps the wall clock in the presenter header fresh.
    pub max_repaint_interval: Duration,
}

pub const TIMING: TimingConfig = TimingConfig {
    tick_period: Duration::from_secs(1),
    max_repaint_interval: Duration::from_secs(1),
};
