//! MineChain Telegram Bot
//!
//! A Telegram bot for the MineChain token community. Slash commands and
//! inline-button callbacks are routed to static message templates with links,
//! a Web-App launcher and a mock price view. Update delivery is left to
//! teloxide; this library owns routing, templating and delivery semantics.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{MineChainError, Result};

// Re-export main components for easy access
pub use handlers::{Command, InboundEvent, Reply, Router};
pub use services::{MockPriceFeed, PriceSource};
pub use templates::TemplateCatalog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
