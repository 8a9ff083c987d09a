// Monotonic Clock Port (for testability)

use std::time::{Duration, Instant};

/// Monotonic time source (allows simulated time in tests)
pub trait MonotonicClock: Send + Sync {
    /// Time elapsed since an arbitrary, fixed origin
    fn now(&self) -> Duration;
}

/// System monotonic clock (production)
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Clock that only moves when told to
    #[derive(Default)]
    pub struct ManualClock {
        now: Mutex<Duration>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }

        pub fn advance_millis(&self, millis: u64) {
            self.advance(Duration::from_millis(millis));
        }

        pub fn set(&self, now: Duration) {
            *self.now.lock().unwrap() = now;
        }
    }

    impl MonotonicClock for ManualClock {
        fn now(&self) -> Duration {
            *self.now.lock().unwrap()
        }
    }
}
