// SQLite.Net Core - Platform Ports & Domain Types
// NO platform dependencies: adapters live in sqlnet-platform-* crates

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::{LogFormat, PlatformConfig};
pub use error::{PlatformError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
