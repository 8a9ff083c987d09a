//! Tracing setup for applications embedding the platform layer

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sqlnet_core::config::{LogFormat, PlatformConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `config.log_filter` when set.
///
/// # Errors
/// Fails if the filter directive is invalid or a global subscriber is
/// already installed.
///
/// # Example
///
/// ```text
/// SQLNET_LOG_FORMAT=json SQLNET_LOG=sqlnet=debug ./app
/// ```
pub fn init_tracing(config: &PlatformConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;

    match config.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()?;
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()?;
        }
    }

    tracing::info!(
        version = sqlnet_core::VERSION,
        format = ?config.log_format,
        time_execution = config.time_execution,
        "SQLite.Net platform tracing initialized"
    );

    Ok(())
}
