// Application Layer - consumers of the platform ports

pub mod constants;
pub mod execution_timer;
pub mod transaction_depth;

// Re-exports
pub use execution_timer::ExecutionTimer;
pub use transaction_depth::{DepthReader, TransactionDepth};
