//! Text actions.

use teloxide::prelude::*;
use tracing::debug;

use crate::bot::ThrottledBot;
use crate::routing::UpdateView;

use super::chat_id;

/// Shout back messages ending in `!`.
pub async fn shout_action(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let (Some(chat_id), Some(text)) = (chat_id(&update), update.message_text()) else {
        return Ok(());
    };

    bot.send_message(chat_id, text.to_uppercase()).await?;
    Ok(())
}

/// Echo any other text.
pub async fn echo_action(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let (Some(chat_id), Some(text)) = (chat_id(&update), update.message_text()) else {
        return Ok(());
    };

    bot.send_message(chat_id, text).await?;
    Ok(())
}

/// Default action for updates nothing else handles.
pub async fn unsupported_action(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let Some(chat_id) = chat_id(&update) else {
        debug!("Ignoring update {} without a chat", update.id.0);
        return Ok(());
    };

    bot.send_message(chat_id, "Sorry, I don't know what to do with that. Try /help.")
        .await?;
    Ok(())
}
