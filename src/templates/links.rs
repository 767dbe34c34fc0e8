//! URL-typed view of the configured endpoints

use tracing::warn;
use url::Url;

use crate::config::settings::{
    Settings, DEFAULT_ARZIA_URL, DEFAULT_CHART_URL, DEFAULT_DOCS_URL, DEFAULT_EXPLORER_URL,
    DEFAULT_WEBAPP_URL, DEFAULT_WEBSITE, DEFAULT_WELCOME_PHOTO_URL,
};
use crate::utils::errors::Result;

/// Endpoints rendered into buttons, parsed once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Links {
    pub website: Url,
    pub chart: Url,
    /// `explorer_url` with the token address appended, in normalized URL
    /// form (lowercase host, percent-encoded path)
    pub explorer_token: Url,
    pub token_address: String,
    pub docs: Url,
    pub arzia: Url,
    pub webapp: Url,
    pub welcome_photo: Url,
}

impl Links {
    /// Parse every configured URL, substituting the default for bad values
    ///
    /// Only a broken built-in default can make this fail.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let explorer_token = match Url::parse(&format!(
            "{}{}",
            settings.explorer_url.trim(),
            settings.token_address.trim()
        )) {
            Ok(url) if is_web_url(&url) => url,
            _ => {
                warn!(
                    explorer_url = %settings.explorer_url,
                    "Invalid explorer URL in config, falling back to default"
                );
                Url::parse(&format!("{}{}", DEFAULT_EXPLORER_URL, settings.token_address.trim()))?
            }
        };

        Ok(Self {
            website: parse_or_default("website", &settings.website, DEFAULT_WEBSITE)?,
            chart: parse_or_default("chart_url", &settings.chart_url, DEFAULT_CHART_URL)?,
            explorer_token,
            token_address: settings.token_address.trim().to_string(),
            docs: parse_or_default("docs_url", &settings.docs_url, DEFAULT_DOCS_URL)?,
            arzia: parse_or_default("arzia_url", &settings.arzia_url, DEFAULT_ARZIA_URL)?,
            webapp: parse_or_default("webapp_url", &settings.webapp_url, DEFAULT_WEBAPP_URL)?,
            welcome_photo: parse_or_default(
                "welcome_photo_url",
                &settings.welcome_photo_url,
                DEFAULT_WELCOME_PHOTO_URL,
            )?,
        })
    }

    /// Web-App URL opened on a specific section: `<webapp_url>?section=<name>`
    pub fn webapp_section(&self, section: &str) -> Url {
        let mut url = self.webapp.clone();
        url.query_pairs_mut().append_pair("section", section);
        url
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn parse_or_default(key: &str, value: &str, default: &str) -> Result<Url> {
    match Url::parse(value.trim()) {
        Ok(url) if is_web_url(&url) => Ok(url),
        _ => {
            warn!(key = key, value = value, "Invalid URL in config, falling back to default");
            Ok(Url::parse(default)?)
        }
    }
}
