// Volatile Write Port (transaction-depth publication)

use std::sync::atomic::AtomicI32;

/// Ordered write to a counter shared across threads
///
/// The counter is written by one thread and read by others (diagnostics,
/// finalizers) without a lock. Taking `&AtomicI32` makes an invalid location
/// unrepresentable.
pub trait VolatileService: Send + Sync {
    /// Store `value` into `location` with release ordering
    ///
    /// A reader doing an acquire load observes either the previous value or
    /// `value`, never a torn one.
    fn write(&self, location: &AtomicI32, value: i32);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;

    /// Volatile service that records every published value
    #[derive(Default)]
    pub struct RecordingVolatileService {
        writes: Mutex<Vec<i32>>,
    }

    impl RecordingVolatileService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn writes(&self) -> Vec<i32> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl VolatileService for RecordingVolatileService {
        fn write(&self, location: &AtomicI32, value: i32) {
            self.writes.lock().unwrap().push(value);
            location.store(value, Ordering::Release);
        }
    }
}
