// SQLite.Net Platform - Generic Adapters
// Implements: StopwatchFactory, ReflectionService, VolatileService, SqlitePlatform

pub mod reflection_service_impl;
pub mod sqlite_platform_generic;
pub mod stopwatch_factory_impl;
pub mod telemetry;
pub mod volatile_service_impl;

pub use reflection_service_impl::ReflectionServiceGeneric;
pub use sqlite_platform_generic::SqlitePlatformGeneric;
pub use stopwatch_factory_impl::StopwatchFactoryGeneric;
pub use telemetry::init_tracing;
pub use volatile_service_impl::VolatileServiceGeneric;
