// Platform Port - composition of the per-platform services

use super::{ReflectionService, StopwatchFactory, VolatileService};

/// Everything the data-access layer needs from its execution environment
///
/// Built once at startup and shared for the process lifetime, typically as
/// `Arc<dyn SqlitePlatform>`. Implementations are immutable after
/// construction.
///
/// # Example
/// ```text
/// let platform: Arc<dyn SqlitePlatform> = Arc::new(SqlitePlatformGeneric::new());
/// let mut sw = platform.stopwatch_factory().create();
/// sw.start();
/// ```
pub trait SqlitePlatform: Send + Sync {
    fn stopwatch_factory(&self) -> &dyn StopwatchFactory;

    fn reflection_service(&self) -> &dyn ReflectionService;

    fn volatile_service(&self) -> &dyn VolatileService;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::port::reflection::mocks::PassthroughReflectionService;
    use crate::port::stopwatch::mocks::MockStopwatchFactory;
    use crate::port::volatile::mocks::RecordingVolatileService;

    /// Platform assembled from the port mocks
    pub struct MockPlatform {
        pub stopwatch_factory: MockStopwatchFactory,
        pub reflection_service: PassthroughReflectionService,
        pub volatile_service: RecordingVolatileService,
    }

    impl MockPlatform {
        /// Stopwatches report `elapsed_ms` after each start/stop cycle
        pub fn new(elapsed_ms: u64) -> Self {
            Self {
                stopwatch_factory: MockStopwatchFactory::new(elapsed_ms),
                reflection_service: PassthroughReflectionService,
                volatile_service: RecordingVolatileService::new(),
            }
        }
    }

    impl SqlitePlatform for MockPlatform {
        fn stopwatch_factory(&self) -> &dyn StopwatchFactory {
            &self.stopwatch_factory
        }

        fn reflection_service(&self) -> &dyn ReflectionService {
            &self.reflection_service
        }

        fn volatile_service(&self) -> &dyn VolatileService {
            &self.volatile_service
        }
    }
}
