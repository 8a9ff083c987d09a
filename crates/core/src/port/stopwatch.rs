// Stopwatch Port (elapsed-time measurement)

use std::time::Duration;

/// Elapsed-time measurement handle
///
/// States: Stopped (initial) and Running.
/// - `start` moves Stopped -> Running; no-op while Running
/// - `stop` moves Running -> Stopped; no-op while Stopped
/// - `reset` moves either state -> Stopped with zero duration
///
/// Owned by its creator; no internal synchronization is provided.
pub trait Stopwatch: Send {
    /// Begin accumulating from the current instant
    fn start(&mut self);

    /// Freeze the accumulated duration
    fn stop(&mut self);

    /// Zero the accumulated duration and stop
    fn reset(&mut self);

    /// Whether the stopwatch is currently accumulating
    fn is_running(&self) -> bool;

    /// Accumulated duration, including the live segment while running
    fn elapsed(&self) -> Duration;

    /// Accumulated duration in whole milliseconds (truncated)
    fn elapsed_milliseconds(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Stopwatch factory port
pub trait StopwatchFactory: Send + Sync {
    /// Create an independent stopwatch in the Stopped state
    fn create(&self) -> Box<dyn Stopwatch>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Stopwatch call recorded by `MockStopwatchFactory`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StopwatchCall {
        Start,
        Stop,
        Reset,
    }

    /// Factory whose stopwatches report a fixed elapsed time once stopped
    pub struct MockStopwatchFactory {
        elapsed: Duration,
        created: AtomicUsize,
        calls: Arc<Mutex<Vec<StopwatchCall>>>,
    }

    impl MockStopwatchFactory {
        pub fn new(elapsed_ms: u64) -> Self {
            Self {
                elapsed: Duration::from_millis(elapsed_ms),
                created: AtomicUsize::new(0),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn created(&self) -> usize {
            self.created.load(Ordering::SeqCst)
        }

        pub fn calls(&self) -> Vec<StopwatchCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl StopwatchFactory for MockStopwatchFactory {
        fn create(&self) -> Box<dyn Stopwatch> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Box::new(MockStopwatch {
                elapsed: self.elapsed,
                running: false,
                stopped_once: false,
                calls: self.calls.clone(),
            })
        }
    }

    struct MockStopwatch {
        elapsed: Duration,
        running: bool,
        stopped_once: bool,
        calls: Arc<Mutex<Vec<StopwatchCall>>>,
    }

    impl Stopwatch for MockStopwatch {
        fn start(&mut self) {
            self.calls.lock().unwrap().push(StopwatchCall::Start);
            self.running = true;
        }

        fn stop(&mut self) {
            self.calls.lock().unwrap().push(StopwatchCall::Stop);
            if self.running {
                self.stopped_once = true;
            }
            self.running = false;
        }

        fn reset(&mut self) {
            self.calls.lock().unwrap().push(StopwatchCall::Reset);
            self.running = false;
            self.stopped_once = false;
        }

        fn is_running(&self) -> bool {
            self.running
        }

        fn elapsed(&self) -> Duration {
            if self.stopped_once {
                self.elapsed
            } else {
                Duration::ZERO
            }
        }
    }
}
