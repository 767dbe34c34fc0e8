//! Error handling for MineChain bot
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the MineChain bot
#[derive(Error, Debug)]
pub enum MineChainError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No bot token found in environment or config")]
    MissingToken,

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for MineChain operations
pub type Result<T> = std::result::Result<T, MineChainError>;
