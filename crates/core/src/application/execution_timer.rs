// Statement execution timing

use std::sync::Arc;
use tracing::debug;

use crate::config::PlatformConfig;
use crate::port::{SqlitePlatform, Stopwatch};

/// Times statement executions and keeps a running total
///
/// One stopwatch is created lazily from the platform factory and reused
/// (reset + start) for every timed execution.
pub struct ExecutionTimer {
    platform: Arc<dyn SqlitePlatform>,
    enabled: bool,
    stopwatch: Option<Box<dyn Stopwatch>>,
    total_ms: u64,
}

impl ExecutionTimer {
    pub fn new(platform: Arc<dyn SqlitePlatform>, enabled: bool) -> Self {
        Self {
            platform,
            enabled,
            stopwatch: None,
            total_ms: 0,
        }
    }

    pub fn from_config(platform: Arc<dyn SqlitePlatform>, config: &PlatformConfig) -> Self {
        Self::new(platform, config.time_execution)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Sum of all timed executions so far
    pub fn total_milliseconds(&self) -> u64 {
        self.total_ms
    }

    /// Run `f`, timing it when enabled
    ///
    /// # Example
    /// ```text
    /// let rows = timer.time("insert into stocks", || stmt.execute());
    /// ```
    pub fn time<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }

        let stopwatch = self
            .stopwatch
            .get_or_insert_with(|| self.platform.stopwatch_factory().create());
        stopwatch.reset();
        stopwatch.start();

        let result = f();

        stopwatch.stop();
        let elapsed_ms = stopwatch.elapsed_milliseconds();
        self.total_ms = self.total_ms.saturating_add(elapsed_ms);

        debug!(
            statement = %label,
            elapsed_ms,
            total_ms = self.total_ms,
            "Finished in {} ms ({:.1} s total)",
            elapsed_ms,
            self.total_ms as f64 / 1000.0
        );

        result
    }
}
