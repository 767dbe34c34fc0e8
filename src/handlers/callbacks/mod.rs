//! Callback query handlers module
//!
//! This module answers inline keyboard presses. The originating message is
//! edited in place when it is still accessible; otherwise the reply is posted
//! as a new message. Every query is answered, even when it is ignored, so the
//! client stops showing a spinner.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, MaybeInaccessibleMessage},
};
use tracing::{info, warn};

use super::router::{self, InboundEvent, Reply, Router};
use super::sink::{EditInPlaceSink, NewMessageSink, ResponseSink};
use crate::utils::errors::Result;
use crate::utils::logging;

/// Pick the sink for a callback: edit the source message when possible
pub fn sink_for(bot: &Bot, query: &CallbackQuery) -> Option<Box<dyn ResponseSink>> {
    match query.message.as_ref()? {
        MaybeInaccessibleMessage::Regular(message) => {
            let has_media = message.photo().is_some() || message.caption().is_some();
            Some(Box::new(EditInPlaceSink::new(
                bot.clone(),
                message.chat.id,
                message.id,
                has_media,
            )))
        }
        MaybeInaccessibleMessage::Inaccessible(message) => {
            Some(Box::new(NewMessageSink::new(bot.clone(), message.chat.id)))
        }
    }
}

/// Main callback query endpoint
pub async fn handle_callback_query(bot: Bot, query: CallbackQuery, router: Arc<Router>) -> Result<()> {
    let user_id = query.from.id.0;

    let Some(data) = query.data.clone() else {
        warn!(user_id = user_id, "Callback query without data");
        bot.answer_callback_query(query.id.clone()).await?;
        return Ok(());
    };
    logging::log_user_action(user_id, "callback", Some(&data));

    let reply = router.route(&InboundEvent::Callback(data.clone()));
    if reply == Reply::Ignore {
        logging::log_unknown_callback(user_id, &data);
    }

    // Answer first so the button stops spinning while the reply is delivered
    let mut answer = bot.answer_callback_query(query.id.clone());
    if let Some(notice) = reply.notice() {
        answer = answer.text(notice.text.clone()).show_alert(notice.show_alert);
    }
    if let Err(e) = answer.await {
        logging::log_api_error("answerCallbackQuery", &e.to_string(), Some(&data));
    }

    if reply.response().is_none() {
        return Ok(());
    }

    let Some(sink) = sink_for(&bot, &query) else {
        warn!(
            user_id = user_id,
            callback_data = %data,
            "Callback has no message to reply to, dropping response"
        );
        return Ok(());
    };

    router::deliver(&reply, sink.as_ref()).await?;

    info!(
        user_id = user_id,
        callback_data = %data,
        mode = ?sink.mode(),
        "Callback query processed"
    );
    Ok(())
}
