//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the MineChain bot.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{MineChainError, Result};

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured the returned guard must be held for the lifetime
/// of the process, otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "minechain-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| MineChainError::Config(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an inbound command or callback with structured data
pub fn log_user_action(user_id: u64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action received"
    );
}

/// Log callback data that matched no known action
pub fn log_unknown_callback(user_id: u64, data: &str) {
    warn!(user_id = user_id, callback_data = data, "Unknown callback data ignored");
}

/// Log a delivery that had to fall back to a simpler form
pub fn log_delivery_fallback(chat_id: i64, from: &str, to: &str, error: &str) {
    warn!(
        chat_id = chat_id,
        from = from,
        to = to,
        error = error,
        "Delivery fell back"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a generated mock quote
pub fn log_mock_quote(price: f64, change_24h: f64) {
    debug!(price = price, change_24h = change_24h, "Mock price quote generated");
}
