//! Command handlers module
//!
//! Slash commands always answer with a new message.

use std::sync::Arc;

use teloxide::{types::Message, utils::command::BotCommands, Bot};
use tracing::debug;

use super::router::{InboundEvent, Router};
use super::sink::NewMessageSink;
use crate::utils::errors::Result;
use crate::utils::logging;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "MineChain Bot Commands:")]
pub enum Command {
    #[command(description = "Launch the bot")]
    Start,
    #[command(description = "Official website")]
    Website,
    #[command(description = "Token economics")]
    Price,
    #[command(description = "Contract address")]
    Contract,
    #[command(description = "Project information")]
    About,
    #[command(description = "Show this message")]
    Help,
    #[command(description = "Open the MineChain App")]
    Webapp,
    #[command(description = "Check your MC balance")]
    Balance,
    #[command(description = "Airdrop rewards")]
    Airdrop,
    #[command(description = "Vesting schedule")]
    Vesting,
    #[command(description = "Mint MC assets")]
    Mint,
    #[command(description = "MineChain NFTs")]
    Nft,
}

impl Command {
    /// Command name without the leading slash
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Website => "website",
            Command::Price => "price",
            Command::Contract => "contract",
            Command::About => "about",
            Command::Help => "help",
            Command::Webapp => "webapp",
            Command::Balance => "balance",
            Command::Airdrop => "airdrop",
            Command::Vesting => "vesting",
            Command::Mint => "mint",
            Command::Nft => "nft",
        }
    }
}

/// Main command endpoint
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, router: Arc<Router>) -> Result<()> {
    let user_id = msg.from.as_ref().map(|user| user.id.0).unwrap_or_default();
    logging::log_user_action(user_id, "command", Some(cmd.name()));

    let sink = NewMessageSink::new(bot, msg.chat.id);
    router.dispatch(&InboundEvent::Command(cmd), &sink).await?;

    debug!(user_id = user_id, chat_id = msg.chat.id.0, "Command handled");
    Ok(())
}
