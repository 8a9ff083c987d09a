// Port Layer - Capabilities every platform must supply

pub mod clock; // For deterministic testing
pub mod platform;
pub mod reflection;
pub mod stopwatch;
pub mod volatile;

// Re-exports
pub use clock::{MonotonicClock, SystemClock};
pub use platform::SqlitePlatform;
pub use reflection::ReflectionService;
pub use stopwatch::{Stopwatch, StopwatchFactory};
pub use volatile::VolatileService;
