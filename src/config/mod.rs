//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from a JSON file and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{LoggingConfig, Settings, BOT_TOKEN_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
