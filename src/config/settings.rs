//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from a JSON file and environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file used when `MINECHAIN_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "MINECHAIN_CONFIG";

/// Environment variable that overrides `bot_token` from every other source
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Prefix for per-key environment overrides (`MINECHAIN_WEBSITE`, ...)
pub const ENV_PREFIX: &str = "MINECHAIN";

pub const DEFAULT_WEBSITE: &str = "https://minechain.io";
pub const DEFAULT_CHART_URL: &str = "https://dexscreener.com/";
pub const DEFAULT_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const DEFAULT_EXPLORER_URL: &str = "https://etherscan.io/token/";
pub const DEFAULT_DOCS_URL: &str = "https://docs.minechain.io";
pub const DEFAULT_ARZIA_URL: &str = "https://arzia.io";
pub const DEFAULT_WEBAPP_URL: &str = "https://app.minechain.io";
pub const DEFAULT_WELCOME_PHOTO_URL: &str = "https://i.ibb.co/rRypQ9tX/1001113489.jpg";

/// Main application configuration structure
///
/// Every key is optional in the config file; missing keys take the
/// defaults from [`Settings::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bot_token: String,
    pub website: String,
    pub chart_url: String,
    pub token_address: String,
    /// Explorer prefix; the token address is appended verbatim
    pub explorer_url: String,
    pub docs_url: String,
    pub arzia_url: String,
    pub webapp_url: String,
    /// Reserved for a real price feed; quotes are mocked for now
    pub price_api_url: Option<String>,
    pub welcome_photo_url: String,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Settings {
    /// Load settings from the config file and environment variables
    ///
    /// A broken config file degrades to the environment and defaults. The
    /// load error is handed back so it can be logged once logging is up.
    pub fn load_or_default() -> (Self, Option<config::ConfigError>) {
        Self::load_or_default_from(config_path(), token_from_env())
    }

    pub(crate) fn load_or_default_from(
        path: impl AsRef<Path>,
        token_override: Option<String>,
    ) -> (Self, Option<config::ConfigError>) {
        match Self::load(path.as_ref(), token_override.clone()) {
            Ok(settings) => (settings, None),
            Err(e) => {
                let settings = Self::from_sources(None, token_override.clone()).unwrap_or_else(|_| {
                    let mut settings = Self::default();
                    if let Some(token) = token_override {
                        settings.bot_token = token;
                    }
                    settings
                });
                (settings, Some(e))
            }
        }
    }

    pub(crate) fn load(
        path: &Path,
        token_override: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        Self::from_sources(Some(path), token_override)
    }

    fn from_sources(
        path: Option<&Path>,
        token_override: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Json)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .set_override_option("bot_token", token_override)?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::MineChainError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            website: DEFAULT_WEBSITE.to_string(),
            chart_url: DEFAULT_CHART_URL.to_string(),
            token_address: DEFAULT_TOKEN_ADDRESS.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            arzia_url: DEFAULT_ARZIA_URL.to_string(),
            webapp_url: DEFAULT_WEBAPP_URL.to_string(),
            price_api_url: None,
            welcome_photo_url: DEFAULT_WELCOME_PHOTO_URL.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn token_from_env() -> Option<String> {
    std::env::var(BOT_TOKEN_ENV).ok().filter(|t| !t.trim().is_empty())
}
