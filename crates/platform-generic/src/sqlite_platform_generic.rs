// Generic platform composition root
use std::sync::Arc;
use tracing::debug;

use sqlnet_core::port::clock::MonotonicClock;
use sqlnet_core::port::{ReflectionService, SqlitePlatform, StopwatchFactory, VolatileService};

use crate::{ReflectionServiceGeneric, StopwatchFactoryGeneric, VolatileServiceGeneric};

/// Platform services for the generic target
///
/// Holds exactly one instance of each service; immutable after
/// construction. Separate instances share nothing.
///
/// # Example
/// ```ignore
/// let platform: Arc<dyn SqlitePlatform> = Arc::new(SqlitePlatformGeneric::new());
/// ```
pub struct SqlitePlatformGeneric {
    stopwatch_factory: StopwatchFactoryGeneric,
    reflection_service: ReflectionServiceGeneric,
    volatile_service: VolatileServiceGeneric,
}

impl SqlitePlatformGeneric {
    pub fn new() -> Self {
        Self::from_factory(StopwatchFactoryGeneric::new())
    }

    /// Stopwatches read `clock` instead of the system clock
    pub fn with_clock(clock: Arc<dyn MonotonicClock>) -> Self {
        Self::from_factory(StopwatchFactoryGeneric::with_clock(clock))
    }

    fn from_factory(stopwatch_factory: StopwatchFactoryGeneric) -> Self {
        debug!("Generic SQLite platform created");
        Self {
            stopwatch_factory,
            reflection_service: ReflectionServiceGeneric::new(),
            volatile_service: VolatileServiceGeneric::new(),
        }
    }
}

impl Default for SqlitePlatformGeneric {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlitePlatform for SqlitePlatformGeneric {
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
