//! Response sinks
//!
//! A sink knows *where* a rendered response goes. Commands always post a new
//! message; callbacks edit the message that carried the pressed button.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, InputMedia, InputMediaPhoto,
        MessageId, ParseMode, WebAppInfo,
    },
    ApiError, RequestError,
};
use tracing::debug;

use crate::models::{Button, ButtonAction, OutboundResponse, ResponseBody, TextFormat};
use crate::utils::errors::{MineChainError, Result};
use crate::utils::logging;

/// How a sink places a response in the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    NewMessage,
    EditInPlace,
}

/// Destination for an [`OutboundResponse`]
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn deliver(&self, response: &OutboundResponse) -> Result<()>;

    fn mode(&self) -> DeliveryMode;
}

/// Convert response rows into a Telegram inline keyboard
pub fn keyboard_markup(rows: &[Vec<Button>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        rows.iter()
            .map(|row| row.iter().map(inline_button).collect::<Vec<_>>()),
    )
}

fn inline_button(button: &Button) -> InlineKeyboardButton {
    match &button.action {
        ButtonAction::Url(url) => InlineKeyboardButton::url(button.label.clone(), url.clone()),
        ButtonAction::Callback(action) => {
            InlineKeyboardButton::callback(button.label.clone(), action.as_str())
        }
        ButtonAction::WebApp(url) => {
            InlineKeyboardButton::web_app(button.label.clone(), WebAppInfo { url: url.clone() })
        }
    }
}

fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

/// Posts every response as a new message in `chat_id`
#[derive(Clone)]
pub struct NewMessageSink {
    bot: Bot,
    chat_id: ChatId,
}

impl NewMessageSink {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    async fn send_text(&self, text: &str, response: &OutboundResponse) -> Result<()> {
        let mut request = self.bot.send_message(self.chat_id, text);
        if let Some(mode) = parse_mode(response.format) {
            request = request.parse_mode(mode);
        }
        if !response.keyboard.is_empty() {
            request = request.reply_markup(keyboard_markup(&response.keyboard));
        }
        request.await?;
        Ok(())
    }

    async fn send_photo(&self, url: &url::Url, caption: &str, response: &OutboundResponse) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(self.chat_id, InputFile::url(url.clone()))
            .caption(caption);
        if let Some(mode) = parse_mode(response.format) {
            request = request.parse_mode(mode);
        }
        if !response.keyboard.is_empty() {
            request = request.reply_markup(keyboard_markup(&response.keyboard));
        }
        request.await?;
        Ok(())
    }
}

#[async_trait]
impl ResponseSink for NewMessageSink {
    async fn deliver(&self, response: &OutboundResponse) -> Result<()> {
        match &response.body {
            ResponseBody::Text(text) => self.send_text(text, response).await,
            ResponseBody::Photo { url, caption } => {
                if let Err(e) = self.send_photo(url, caption, response).await {
                    // An unreachable image must not cost the user the message
                    logging::log_delivery_fallback(self.chat_id.0, "photo", "text", &e.to_string());
                    return self.send_text(caption, response).await;
                }
                Ok(())
            }
        }
    }

    fn mode(&self) -> DeliveryMode {
        DeliveryMode::NewMessage
    }
}

/// Edits the message a callback came from, posting anew when that fails
#[derive(Clone)]
pub struct EditInPlaceSink {
    bot: Bot,
    chat_id: ChatId,
    message_id: MessageId,
    /// The target carries media, so its caption is edited instead of its text
    has_media: bool,
}

impl EditInPlaceSink {
    pub fn new(bot: Bot, chat_id: ChatId, message_id: MessageId, has_media: bool) -> Self {
        Self {
            bot,
            chat_id,
            message_id,
            has_media,
        }
    }

    async fn edit(&self, text: &str, response: &OutboundResponse) -> Result<()> {
        let markup = keyboard_markup(&response.keyboard);
        if self.has_media {
            let mut request = self
                .bot
                .edit_message_caption(self.chat_id, self.message_id)
                .caption(text)
                .reply_markup(markup);
            if let Some(mode) = parse_mode(response.format) {
                request = request.parse_mode(mode);
            }
            request.await?;
        } else {
            let mut request = self
                .bot
                .edit_message_text(self.chat_id, self.message_id, text)
                .reply_markup(markup);
            if let Some(mode) = parse_mode(response.format) {
                request = request.parse_mode(mode);
            }
            request.await?;
        }
        Ok(())
    }

    async fn replace_photo(&self, url: &url::Url, caption: &str, response: &OutboundResponse) -> Result<()> {
        let mut photo = InputMediaPhoto::new(InputFile::url(url.clone())).caption(caption);
        if let Some(mode) = parse_mode(response.format) {
            photo = photo.parse_mode(mode);
        }
        self.bot
            .edit_message_media(self.chat_id, self.message_id, InputMedia::Photo(photo))
            .reply_markup(keyboard_markup(&response.keyboard))
            .await?;
        Ok(())
    }

    fn fallback(&self) -> NewMessageSink {
        NewMessageSink::new(self.bot.clone(), self.chat_id)
    }
}

#[async_trait]
impl ResponseSink for EditInPlaceSink {
    async fn deliver(&self, response: &OutboundResponse) -> Result<()> {
        let result = match &response.body {
            ResponseBody::Text(text) => self.edit(text, response).await,
            ResponseBody::Photo { url, caption } if self.has_media => {
                self.replace_photo(url, caption, response).await
            }
            // A text message cannot become a photo
            ResponseBody::Photo { .. } => return self.fallback().deliver(response).await,
        };

        match result {
            Ok(()) => Ok(()),
            Err(MineChainError::Telegram(RequestError::Api(ApiError::MessageNotModified))) => {
                debug!(chat_id = self.chat_id.0, "Message already up to date");
                Ok(())
            }
            Err(e) => {
                logging::log_delivery_fallback(self.chat_id.0, "edit", "new message", &e.to_string());
                self.fallback().deliver(response).await
            }
        }
    }

    fn mode(&self) -> DeliveryMode {
        DeliveryMode::EditInPlace
    }
}
