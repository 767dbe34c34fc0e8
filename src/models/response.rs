//! Outbound response model

use url::Url;

use super::CallbackAction;

/// How the message text should be interpreted by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    /// Telegram HTML subset (`<b>`, `<i>`, `<code>`, `<a>`)
    Html,
}

/// Message payload
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Text(String),
    Photo { url: Url, caption: String },
}

/// What pressing a button does
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonAction {
    Url(Url),
    Callback(CallbackAction),
    WebApp(Url),
}

/// A single inline keyboard button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn url(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url),
        }
    }

    pub fn callback(label: impl Into<String>, action: CallbackAction) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(action),
        }
    }

    pub fn web_app(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::WebApp(url),
        }
    }

    /// Target URL for link and Web-App buttons
    pub fn target_url(&self) -> Option<&Url> {
        match &self.action {
            ButtonAction::Url(url) | ButtonAction::WebApp(url) => Some(url),
            ButtonAction::Callback(_) => None,
        }
    }
}

/// Text shown when answering a callback query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// Modal alert instead of a self-dismissing toast
    pub show_alert: bool,
}

impl Notice {
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_alert: true,
        }
    }
}

/// A fully rendered reply: body, keyboard rows and formatting mode
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundResponse {
    pub body: ResponseBody,
    pub keyboard: Vec<Vec<Button>>,
    pub format: TextFormat,
}

impl OutboundResponse {
    /// HTML text response without a keyboard
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            body: ResponseBody::Text(text.into()),
            keyboard: Vec::new(),
            format: TextFormat::Html,
        }
    }

    /// HTML photo response without a keyboard
    pub fn photo(url: Url, caption: impl Into<String>) -> Self {
        Self {
            body: ResponseBody::Photo {
                url,
                caption: caption.into(),
            },
            keyboard: Vec::new(),
            format: TextFormat::Html,
        }
    }

    /// Append a keyboard row
    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        self.keyboard.push(buttons);
        self
    }

    /// The text a user reads: message text or photo caption
    pub fn text_content(&self) -> &str {
        match &self.body {
            ResponseBody::Text(text) => text,
            ResponseBody::Photo { caption, .. } => caption,
        }
    }

    pub fn is_photo(&self) -> bool {
        matches!(self.body, ResponseBody::Photo { .. })
    }

    /// Same response with the photo dropped and the caption as message text
    pub fn to_text_only(&self) -> Self {
        Self {
            body: ResponseBody::Text(self.text_content().to_string()),
            keyboard: self.keyboard.clone(),
            format: self.format,
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.keyboard.iter().flatten()
    }

    /// First button whose label contains `needle`
    pub fn find_button(&self, needle: &str) -> Option<&Button> {
        self.buttons().find(|b| b.label.contains(needle))
    }
}
