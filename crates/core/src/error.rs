// Central Error Type for the Platform Layer

use thiserror::Error;

use crate::domain::MemberKind;

/// Platform-level error type
///
/// Construction, stopwatch operations and volatile writes are infallible;
/// only reflection lookups, savepoint bookkeeping and configuration loading
/// produce these.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Unknown member: {type_name}.{member}")]
    UnknownMember { type_name: String, member: String },

    #[error("Unsupported member kind {kind} for {type_name}.{member}")]
    UnsupportedMember {
        type_name: String,
        member: String,
        kind: MemberKind,
    },

    #[error("Invalid savepoint: {0}")]
    InvalidSavepoint(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PlatformError
pub type Result<T> = std::result::Result<T, PlatformError>;
