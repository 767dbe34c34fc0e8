//! Message templates
//!
//! Every reply the bot sends is rendered here. Templates depend only on the
//! configured [`Links`] and, for the price view, on a freshly drawn
//! [`PriceQuote`]. Text uses Telegram's HTML subset; configured values are
//! escaped before they are interpolated.

pub mod links;

pub use links::Links;

use html_escape::encode_text;
use teloxide::utils::command::BotCommands;

use crate::handlers::commands::Command;
use crate::models::{Button, CallbackAction, Notice, OutboundResponse, PriceQuote};
use crate::utils::helpers::{format_signed_percent, format_timestamp, format_token_price, format_usd};

/// Web-App sections reachable through their own command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSection {
    Balance,
    Airdrop,
    Vesting,
    Mint,
    Nft,
}

impl AppSection {
    pub const ALL: [AppSection; 5] = [
        AppSection::Balance,
        AppSection::Airdrop,
        AppSection::Vesting,
        AppSection::Mint,
        AppSection::Nft,
    ];

    /// Value of the `section` query parameter handed to the Web-App
    pub fn slug(&self) -> &'static str {
        match self {
            AppSection::Balance => "balance",
            AppSection::Airdrop => "airdrop",
            AppSection::Vesting => "vesting",
            AppSection::Mint => "mint",
            AppSection::Nft => "nft",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppSection::Balance => "💼 <b>Your MC Balance</b>",
            AppSection::Airdrop => "🎁 <b>MC Airdrop</b>",
            AppSection::Vesting => "⏳ <b>Vesting Schedule</b>",
            AppSection::Mint => "⛏️ <b>Mint MC Assets</b>",
            AppSection::Nft => "🖼️ <b>MineChain NFTs</b>",
        }
    }

    fn blurb(&self) -> &'static str {
        match self {
            AppSection::Balance => "Connect your wallet in the MineChain App to see your token balance.",
            AppSection::Airdrop => "Check your eligibility and claim airdrop rewards in the MineChain App.",
            AppSection::Vesting => "Track upcoming unlocks and claim vested tokens in the MineChain App.",
            AppSection::Mint => "Mint new MineChain assets directly from the MineChain App.",
            AppSection::Nft => "Browse, collect and manage your MineChain NFTs in the App.",
        }
    }

    fn button_label(&self) -> &'static str {
        match self {
            AppSection::Balance => "💼 Open Balance",
            AppSection::Airdrop => "🎁 Open Airdrop",
            AppSection::Vesting => "⏳ Open Vesting",
            AppSection::Mint => "⛏️ Open Mint",
            AppSection::Nft => "🖼️ Open NFTs",
        }
    }
}

/// Static catalog of replies, bound to one set of links
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    links: Links,
}

impl TemplateCatalog {
    pub fn new(links: Links) -> Self {
        Self { links }
    }

    fn back_row() -> Vec<Button> {
        vec![Button::callback("⬅️ Back", CallbackAction::StartOver)]
    }

    /// `/start` and the Back button
    pub fn welcome(&self) -> OutboundResponse {
        let caption = "🏔️ <b>Welcome to MineChain</b>\n\n\
            The sophisticated digital asset ecosystem for creators and investors.\n\n\
            <i>Professional | Secure | Innovative</i>\n\n\
            Built by ARZIA with enterprise-grade Web3 technology.";

        OutboundResponse::photo(self.links.welcome_photo.clone(), caption)
            .row(vec![Button::callback("🌐 Official Website", CallbackAction::Website)])
            .row(vec![Button::callback("💰 Token Price", CallbackAction::Price)])
            .row(vec![Button::callback("📝 Contract Address", CallbackAction::Contract)])
            .row(vec![Button::callback("ℹ️ About MineChain", CallbackAction::About)])
            .row(vec![Button::web_app("🚀 Launch MineChain App", self.links.webapp.clone())])
    }

    pub fn website(&self) -> OutboundResponse {
        OutboundResponse::text(
            "🌐 <b>Official MineChain Portal</b>\n\nAccess our comprehensive platform.",
        )
        .row(vec![Button::url("🌐 Visit Official Website", self.links.website.clone())])
        .row(Self::back_row())
    }

    /// Price view; `mock` adds the simulated-data disclaimer
    pub fn price(&self, quote: &PriceQuote, mock: bool) -> OutboundResponse {
        let trend = if quote.is_up() { "📈" } else { "📉" };
        let mut text = format!(
            "💰 <b>MC Token Economics</b>\n\n\
             💵 Price: <code>{}</code>\n\
             {} 24h Change: <code>{}</code>\n\
             🏦 Market Cap: <code>{}</code>\n\
             📊 24h Volume: <code>{}</code>\n\n\
             🕒 Updated: {}",
            format_token_price(quote.price),
            trend,
            format_signed_percent(quote.change_24h),
            format_usd(quote.market_cap),
            format_usd(quote.volume_24h),
            format_timestamp(quote.generated_at),
        );
        if mock {
            text.push_str("\n\n<i>Simulated data for preview. Live price tracking coming soon.</i>");
        }

        OutboundResponse::text(text)
            .row(vec![
                Button::callback("🔄 Refresh", CallbackAction::RefreshPrice),
                Button::url("📈 Live Chart", self.links.chart.clone()),
            ])
            .row(Self::back_row())
    }

    pub fn contract(&self) -> OutboundResponse {
        let text = format!(
            "📝 <b>Official Contract Address</b>\n\n<code>{}</code>\n\n\
             Always verify the address before interacting with it.",
            encode_text(&self.links.token_address)
        );

        OutboundResponse::text(text)
            .row(vec![Button::url("🔍 View on Explorer", self.links.explorer_token.clone())])
            .row(vec![Button::callback("📋 Copy Address", CallbackAction::CopyContract)])
            .row(Self::back_row())
    }

    /// Toast for the Copy Address button; bots cannot write the clipboard
    pub fn copy_contract_notice(&self) -> Notice {
        Notice::alert(format!("Contract address:\n{}", self.links.token_address))
    }

    pub fn about(&self) -> OutboundResponse {
        OutboundResponse::text(
            "🏔️ <b>About MineChain</b>\n\n\
             Sophisticated digital assets for creators and visionaries.\n\n\
             MineChain is designed and built by ARZIA.",
        )
        .row(vec![Button::url("📚 Documentation", self.links.docs.clone())])
        .row(vec![Button::url("🏢 Built by ARZIA", self.links.arzia.clone())])
        .row(Self::back_row())
    }

    /// Command list, generated from the registered commands
    pub fn help(&self) -> OutboundResponse {
        let mut text = String::from("🛠 <b>MineChain Bot Commands</b>\n");
        for command in Command::bot_commands() {
            text.push_str(&format!(
                "\n/{} - {}",
                command.command.trim_start_matches('/'),
                encode_text(&command.description)
            ));
        }

        OutboundResponse::text(text).row(Self::back_row())
    }

    pub fn webapp(&self) -> OutboundResponse {
        OutboundResponse::text(
            "🚀 <b>MineChain App</b>\n\n\
             Manage your MC tokens, airdrops, vesting and NFTs without leaving Telegram.",
        )
        .row(vec![Button::web_app("🚀 Open MineChain App", self.links.webapp.clone())])
    }

    pub fn app_section(&self, section: AppSection) -> OutboundResponse {
        OutboundResponse::text(format!("{}\n\n{}", section.title(), section.blurb())).row(vec![
            Button::web_app(section.button_label(), self.links.webapp_section(section.slug())),
        ])
    }
}
