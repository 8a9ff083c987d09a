// Platform constants (no magic values)

/// Statement timing is off unless requested
pub const DEFAULT_TIME_EXECUTION: bool = false;

/// Default `EnvFilter` directive when neither RUST_LOG nor SQLNET_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "sqlnet=info";

/// Exclusive upper bound of the random part of a savepoint name (i16::MAX)
pub const SAVEPOINT_RANDOM_BOUND: u32 = 32767;

/// Prefix of every savepoint name
pub const SAVEPOINT_PREFIX: char = 'S';

/// Separator between the random part and the depth of a savepoint name
pub const SAVEPOINT_DEPTH_MARKER: char = 'D';

/// Earliest index at which the depth marker may appear ("S" + one digit)
pub const SAVEPOINT_MIN_MARKER_INDEX: usize = 2;
