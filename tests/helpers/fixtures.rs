//! Test fixtures
//!
//! Settings, teloxide update objects and in-memory collaborators shared by
//! the integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, Message};

use minechain_bot::{
    config::Settings,
    handlers::{DeliveryMode, ResponseSink, Router},
    models::{OutboundResponse, PriceQuote},
    services::PriceSource,
    Result,
};

use super::telegram_mock::{test_bot_token, test_chat_id, test_user_id};

pub const TEST_TOKEN_ADDRESS: &str = "0xABC";
pub const TEST_EXPLORER_URL: &str = "https://etherscan.io/token/";
pub const TEST_WEBSITE: &str = "https://minechain.example/";
pub const TEST_CHART_URL: &str = "https://charts.example/mc";
pub const TEST_DOCS_URL: &str = "https://docs.minechain.example/";
pub const TEST_ARZIA_URL: &str = "https://arzia.example/";
pub const TEST_WEBAPP_URL: &str = "https://app.minechain.example/";
pub const TEST_PHOTO_URL: &str = "https://images.example/welcome.jpg";

/// Settings with every endpoint pointed at a distinct test value
pub fn test_settings() -> Settings {
    Settings {
        bot_token: test_bot_token(),
        website: TEST_WEBSITE.to_string(),
        chart_url: TEST_CHART_URL.to_string(),
        token_address: TEST_TOKEN_ADDRESS.to_string(),
        explorer_url: TEST_EXPLORER_URL.to_string(),
        docs_url: TEST_DOCS_URL.to_string(),
        arzia_url: TEST_ARZIA_URL.to_string(),
        webapp_url: TEST_WEBAPP_URL.to_string(),
        welcome_photo_url: TEST_PHOTO_URL.to_string(),
        ..Settings::default()
    }
}

/// Price source cycling through a fixed list of quotes
pub struct SequencePriceSource {
    prices: Vec<f64>,
    next: AtomicUsize,
}

impl SequencePriceSource {
    pub fn new(prices: Vec<f64>) -> Self {
        Self {
            prices,
            next: AtomicUsize::new(0),
        }
    }
}

impl PriceSource for SequencePriceSource {
    fn quote(&self) -> PriceQuote {
        let i = self.next.fetch_add(1, Ordering::SeqCst) % self.prices.len();
        PriceQuote {
            price: self.prices[i],
            change_24h: 1.25,
            market_cap: 2_000_000,
            volume_24h: 100_000,
            generated_at: Utc::now(),
        }
    }

    fn is_mock(&self) -> bool {
        false
    }
}

pub fn test_router() -> Router {
    Router::new(&test_settings()).expect("router")
}

pub fn router_with_prices(prices: Vec<f64>) -> Router {
    Router::with_price_source(&test_settings(), Arc::new(SequencePriceSource::new(prices)))
        .expect("router")
}

/// Sink that records responses instead of calling Telegram
pub struct RecordingSink {
    mode: DeliveryMode,
    pub deliveries: Mutex<Vec<OutboundResponse>>,
}

impl RecordingSink {
    pub fn new(mode: DeliveryMode) -> Self {
        Self {
            mode,
            deliveries: Mutex::new(Vec::new()),
        }
    }

    pub fn delivered(&self) -> Vec<OutboundResponse> {
        self.deliveries.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn deliver(&self, response: &OutboundResponse) -> Result<()> {
        self.deliveries.lock().expect("lock").push(response.clone());
        Ok(())
    }

    fn mode(&self) -> DeliveryMode {
        self.mode
    }
}

fn user_json() -> Value {
    json!({
        "id": test_user_id(),
        "is_bot": false,
        "first_name": "Test",
        "username": "testuser"
    })
}

fn chat_json() -> Value {
    json!({
        "id": test_chat_id(),
        "type": "private",
        "first_name": "Test"
    })
}

/// A text message as seen by the bot
pub fn text_message_json(message_id: i32, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": chat_json(),
        "from": user_json(),
        "text": text
    })
}

/// A photo message with a caption, like the welcome message
pub fn photo_message_json(message_id: i32, caption: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": chat_json(),
        "from": user_json(),
        "photo": [{ "file_id": "photo-1", "file_unique_id": "u-1", "width": 640, "height": 480 }],
        "caption": caption
    })
}

/// A message the bot can no longer access
pub fn inaccessible_message_json(message_id: i32) -> Value {
    json!({
        "message_id": message_id,
        "date": 0,
        "chat": chat_json()
    })
}

pub fn command_message(text: &str) -> Message {
    serde_json::from_value(text_message_json(1, text)).expect("valid message json")
}

pub fn callback_query(data: Option<&str>, message: Option<Value>) -> CallbackQuery {
    let mut query = json!({
        "id": "cbq-1",
        "from": user_json(),
        "chat_instance": "instance-1"
    });
    if let Some(data) = data {
        query["data"] = json!(data);
    }
    if let Some(message) = message {
        query["message"] = message;
    }
    serde_json::from_value(query).expect("valid callback query json")
}
