//! MineChain Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message, Update};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, warn};

use minechain_bot::{
    config::Settings,
    handlers::{callbacks::handle_callback_query, commands::handle_command, Command, Router},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // A broken config file is not fatal; defaults apply
    let (settings, load_error) = Settings::load_or_default();

    // Keep the guard alive so file logs are flushed
    let _log_guard = logging::init_logging(&settings.logging)?;

    if let Some(e) = load_error {
        error!(error = %e, "Config loading failed, continuing with defaults");
    }

    if let Err(e) = settings.validate() {
        error!(error = %e, "Refusing to start");
        return Err(e.into());
    }

    info!("Starting {}...", minechain_bot::info());

    let router = Arc::new(Router::new(&settings)?);
    let bot = Bot::new(&settings.bot_token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to publish command list");
    }

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            // Plain chat messages and unknown commands land here
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build();

    info!("MineChain bot starting with polling mode...");
    dispatcher.dispatch().await;

    info!("MineChain bot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_commands),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

/// Handle bot commands
async fn handle_commands(bot: Bot, msg: Message, cmd: Command, router: Arc<Router>) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, router).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(bot: Bot, query: CallbackQuery, router: Arc<Router>) -> HandlerResult {
    let user_id = query.from.id.0;

    if let Err(e) = handle_callback_query(bot, query, router).await {
        error!(user_id = user_id, error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
