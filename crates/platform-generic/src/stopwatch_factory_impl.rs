// Stopwatch factory implementation
// reason: std monotonic clock behind the MonotonicClock port (simulated in tests)
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

use sqlnet_core::port::clock::{MonotonicClock, SystemClock};
use sqlnet_core::port::stopwatch::{Stopwatch, StopwatchFactory};

/// Stopwatch factory for the generic platform
///
/// Every stopwatch it creates reads the same clock but keeps its own state.
pub struct StopwatchFactoryGeneric {
    clock: Arc<dyn MonotonicClock>,
}

impl StopwatchFactoryGeneric {
    /// Create a factory backed by the system monotonic clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Create a factory reading an injected clock
    ///
    /// # Example
    /// ```ignore
    /// let clock = Arc::new(ManualClock::new());
    /// let factory = StopwatchFactoryGeneric::with_clock(clock.clone());
    /// ```
    pub fn with_clock(clock: Arc<dyn MonotonicClock>) -> Self {
        Self { clock }
    }
}

impl Default for StopwatchFactoryGeneric {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwatchFactory for StopwatchFactoryGeneric {
    fn create(&self) -> Box<dyn Stopwatch> {
        Box::new(StopwatchGeneric::new(self.clock.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stopped,
    /// Clock reading when the current run began
    Running { since: Duration },
}

/// Accumulating stopwatch
///
/// Elapsed reads are live: while running they include the current segment.
struct StopwatchGeneric {
    clock: Arc<dyn MonotonicClock>,
    accumulated: Duration,
    state: State,
}

impl StopwatchGeneric {
    fn new(clock: Arc<dyn MonotonicClock>) -> Self {
        Self {
            clock,
            accumulated: Duration::ZERO,
            state: State::Stopped,
        }
    }

    /// Length of the running segment; zero if the clock stepped backwards
    fn segment(&self, since: Duration) -> Duration {
        self.clock.now().saturating_sub(since)
    }
}

impl Stopwatch for StopwatchGeneric {
    fn start(&mut self) {
        if self.state == State::Stopped {
            self.state = State::Running {
                since: self.clock.now(),
            };
        }
    }

    fn stop(&mut self) {
        if let State::Running { since } = self.state {
            self.accumulated = self.accumulated.saturating_add(self.segment(since));
            self.state = State::Stopped;
            trace!(elapsed_ms = %self.elapsed_milliseconds(), "Stopwatch stopped");
        }
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.state = State::Stopped;
    }

    fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    fn elapsed(&self) -> Duration {
        match self.state {
            State::Stopped => self.accumulated,
            State::Running { since } => self.accumulated.saturating_add(self.segment(since)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlnet_core::port::clock::mocks::ManualClock;

    fn factory_with_manual_clock() -> (StopwatchFactoryGeneric, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        (StopwatchFactoryGeneric::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_new_stopwatch_is_stopped_and_zero() {
        let (factory, _) = factory_with_manual_clock();
        let sw = factory.create();

        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_milliseconds(), 0);
    }

    #[test]
    fn test_start_wait_stop() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance_millis(50);
        sw.stop();

        assert!(sw.elapsed_milliseconds() >= 50);
        assert!(!sw.is_running());
    }

    #[test]
    fn test_stop_without_start() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        clock.advance_millis(30);
        sw.stop();

        assert_eq!(sw.elapsed_milliseconds(), 0);
    }

    #[test]
    fn test_double_start_does_not_restart() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance_millis(20);
        sw.start();
        clock.advance_millis(20);
        sw.stop();

        assert_eq!(sw.elapsed_milliseconds(), 40);
    }

    #[test]
    fn test_live_read_while_running() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance_millis(10);
        assert_eq!(sw.elapsed_milliseconds(), 10);
        clock.advance_millis(15);
        assert_eq!(sw.elapsed_milliseconds(), 25);
        assert!(sw.is_running());
    }

    #[test]
    fn test_constant_while_stopped() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance_millis(12);
        sw.stop();
        clock.advance_millis(500);

        assert_eq!(sw.elapsed_milliseconds(), 12);
        sw.stop();
        assert_eq!(sw.elapsed_milliseconds(), 12);
    }

    #[test]
    fn test_runs_accumulate() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance_millis(5);
        sw.stop();
        clock.advance_millis(100);
        sw.start();
        clock.advance_millis(7);
        sw.stop();

        assert_eq!(sw.elapsed_milliseconds(), 12);
    }

    #[test]
    fn test_reset_from_either_state() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance_millis(40);
        sw.reset();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_milliseconds(), 0);
        clock.advance_millis(40);
        assert_eq!(sw.elapsed_milliseconds(), 0);

        sw.start();
        clock.advance_millis(3);
        sw.stop();
        sw.reset();
        assert_eq!(sw.elapsed_milliseconds(), 0);
    }

    #[test]
    fn test_milliseconds_are_truncated() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        sw.start();
        clock.advance(Duration::from_micros(1_999));
        sw.stop();

        assert_eq!(sw.elapsed_milliseconds(), 1);
        assert_eq!(sw.elapsed(), Duration::from_micros(1_999));
    }

    #[test]
    fn test_clock_stepping_backwards_saturates() {
        let (factory, clock) = factory_with_manual_clock();
        let mut sw = factory.create();

        clock.set(Duration::from_secs(10));
        sw.start();
        clock.set(Duration::from_secs(9));

        assert_eq!(sw.elapsed(), Duration::ZERO);
        sw.stop();
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stopwatches_are_independent() {
        let (factory, clock) = factory_with_manual_clock();
        let mut a = factory.create();
        let mut b = factory.create();

        a.start();
        clock.advance_millis(10);
        b.start();
        clock.advance_millis(10);
        a.stop();
        b.reset();

        assert_eq!(a.elapsed_milliseconds(), 20);
        assert_eq!(b.elapsed_milliseconds(), 0);
    }

    #[test]
    fn test_system_clock_never_exceeds_wall_time() {
        let factory = StopwatchFactoryGeneric::new();
        let wall = std::time::Instant::now();
        let mut sw = factory.create();

        sw.start();
        std::thread::sleep(Duration::from_millis(5));
        sw.stop();

        assert!(sw.elapsed() <= wall.elapsed());
        assert!(sw.elapsed_milliseconds() >= 5);
    }
}
