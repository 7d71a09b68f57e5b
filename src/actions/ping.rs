//! /ping action.
//!
//! Measures and displays Telegram API latency.

use std::time::Instant;

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::ThrottledBot;

use super::chat_id;

/// Handle the /ping command.
pub async fn ping_action(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let Some(chat_id) = chat_id(&update) else {
        return Ok(());
    };

    send_pong(&bot, chat_id).await
}

pub(crate) async fn send_pong(bot: &ThrottledBot, chat_id: ChatId) -> anyhow::Result<()> {
    // getMe is the lightest API call
    let start = Instant::now();
    bot.get_me().await?;
    let ms = start.elapsed().as_millis();

    bot.send_message(chat_id, format!("Pong! <code>{}ms</code>", ms))
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
