//! Configuration validation module
//!
//! Only the bot token is fatal. Malformed endpoint URLs are tolerated here
//! and replaced with defaults when the template links are built.

use super::{LoggingConfig, Settings};
use crate::utils::errors::{MineChainError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_token(&settings.bot_token)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate the Telegram bot token
fn validate_bot_token(token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(MineChainError::MissingToken);
    }

    // Bot API tokens look like `<numeric bot id>:<secret>`
    match token.split_once(':') {
        Some((id, secret)) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) && !secret.is_empty() => {
            Ok(())
        }
        _ => Err(MineChainError::Config(
            "Bot token must have the form <bot id>:<secret>".to_string(),
        )),
    }
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MineChainError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(MineChainError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
