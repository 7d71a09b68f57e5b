//! Inline menu callbacks (`menu:<item>`).

use teloxide::prelude::*;

use crate::bot::ThrottledBot;

use super::{callback_query, chat_id, ping, start};

/// Callback key of the /start menu buttons.
pub const MENU_KEY: &str = "menu";

/// Handle a press on one of the /start menu buttons.
pub async fn menu_callback(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let Some(q) = callback_query(&update) else {
        return Ok(());
    };
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(chat_id) = chat_id(&update) else {
        return Ok(());
    };

    let item = q
        .data
        .as_deref()
        .and_then(|data| data.split_once(':'))
        .map(|(_, item)| item)
        .unwrap_or_default();

    match item {
        "help" => start::send_help(&bot, chat_id).await,
        "ping" => ping::send_pong(&bot, chat_id).await,
        other => {
            bot.send_message(chat_id, format!("Unknown menu item '{}'", other))
                .await?;
            Ok(())
        }
    }
}

/// Answer buttons no action knows about anymore.
pub async fn stale_callback(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let Some(q) = callback_query(&update) else {
        return Ok(());
    };

    bot.answer_callback_query(q.id.clone())
        .text("This button is no longer active.")
        .await?;

    Ok(())
}
